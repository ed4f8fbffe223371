//! Chart type groups: `c:barChart`, `c:lineChart`, `c:areaChart`, `c:pieChart`,
//! `c:doughnutChart`, `c:scatterChart` and `c:bubbleChart`.

use log::debug;

use super::write_val;
use crate::converters::xml::context::{ConversionContext, Frame, ModelRef};
use crate::converters::xml::copy::{always_copy, copy_value, default_copy, set_val};
use crate::converters::xml::document::NodeId;
use crate::converters::xml::error::ConversionWarning;
use crate::converters::xml::fill::write_shape_properties;
use crate::converters::xml::registry::Kind;
use crate::models::axis::ChartLines;
use crate::models::chart_type::{ChartType, ChartTypeKind, Grouping, ScatterStyle};

/// Overlap of stacked bar groups that set none.
const STACKED_OVERLAP: i32 = 100;

fn write_series<'a>(ctx: &mut ConversionContext<'_>, frame: &Frame<'a>, chart_type: &'a ChartType) {
    for series in &chart_type.series {
        let ordinal = ctx.begin_series();
        if let Some(node) = ctx.visit(Some(frame), frame.node, ModelRef::Series(series), None, None) {
            if let Some(order) = ctx.doc.get_node(node, "c:order") {
                ctx.doc.set_attribute(order, "val", ordinal.to_string());
            }
        }
    }
}

fn write_data_labels<'a>(ctx: &mut ConversionContext<'_>, frame: &Frame<'a>, chart_type: &'a ChartType) {
    if let Some(labels) = &chart_type.data_labels {
        ctx.visit(Some(frame), frame.node, ModelRef::DataLabels(labels), None, None);
    }
}

fn write_lines(ctx: &mut ConversionContext<'_>, parent: NodeId, tag: &str, lines: Option<&ChartLines>) {
    if let Some(lines) = lines {
        let node = ctx.doc.create_child_node(parent, tag);
        write_shape_properties(ctx, node, "c:spPr", &lines.shape);
    }
}

/// Writes the `c:axId` pair referencing this group's axes.
fn write_axis_ids<'a>(ctx: &mut ConversionContext<'_>, frame: &Frame<'a>, chart_type: &'a ChartType) {
    let Some(plot_area) = frame.plot_area() else {
        return;
    };
    let axes = (
        plot_area.x_axes.get(chart_type.x_axis),
        plot_area.y_axes.get(chart_type.y_axis),
    );
    match axes {
        (Some(x_axis), Some(y_axis)) => {
            let x_id = ctx.axis_id(x_axis);
            let y_id = ctx.axis_id(y_axis);
            write_val(ctx, frame.node, "c:axId", &x_id);
            write_val(ctx, frame.node, "c:axId", &y_id);
        }
        _ => ctx.warn(ConversionWarning::MalformedInput(format!(
            "{:?} chart references missing axes ({}, {})",
            chart_type.chart_type, chart_type.x_axis, chart_type.y_axis
        ))),
    }
}

/// Visitor for every chart type group. Branches on the group's type for the element
/// layout; series, labels and axis references are shared.
pub fn visit_chart_type(ctx: &mut ConversionContext<'_>, frame: &Frame<'_>) {
    let ModelRef::ChartType(chart_type) = frame.model else {
        ctx.model_mismatch(Kind::ChartType, &frame.model);
        return;
    };
    let node = frame.node;
    debug!(
        "Writing {:?} group with {} series",
        chart_type.chart_type,
        chart_type.series.len()
    );

    match chart_type.chart_type {
        ChartTypeKind::Bar | ChartTypeKind::Column => {
            let direction = if chart_type.chart_type == ChartTypeKind::Bar {
                "bar"
            } else {
                "col"
            };
            let bar_dir = ctx.doc.create_child_node(node, "c:barDir");
            ctx.doc.set_attribute(bar_dir, "val", direction);
            let grouping = chart_type.grouping.resolved_or(Grouping::Clustered);
            write_val(ctx, node, "c:grouping", &grouping);
            write_val(ctx, node, "c:varyColors", &chart_type.vary_colors.resolved_or(false));
            write_series(ctx, frame, chart_type);
            write_data_labels(ctx, frame, chart_type);
            copy_value(&mut ctx.doc, &chart_type.gap_width, node, "c:gapWidth", set_val, always_copy);
            let overlap_written =
                copy_value(&mut ctx.doc, &chart_type.overlap, node, "c:overlap", set_val, always_copy);
            if !overlap_written && grouping.is_stacked() {
                write_val(ctx, node, "c:overlap", &STACKED_OVERLAP);
            }
            write_axis_ids(ctx, frame, chart_type);
        }
        ChartTypeKind::Line => {
            write_val(ctx, node, "c:grouping", &chart_type.grouping.resolved_or(Grouping::Standard));
            write_val(ctx, node, "c:varyColors", &chart_type.vary_colors.resolved_or(false));
            write_series(ctx, frame, chart_type);
            write_data_labels(ctx, frame, chart_type);
            write_lines(ctx, node, "c:dropLines", chart_type.drop_lines.as_ref());
            write_lines(ctx, node, "c:hiLowLines", chart_type.high_low_lines.as_ref());
            write_val(ctx, node, "c:marker", &chart_type.show_markers.resolved_or(true));
            copy_value(&mut ctx.doc, &chart_type.smooth, node, "c:smooth", set_val, default_copy);
            write_axis_ids(ctx, frame, chart_type);
        }
        ChartTypeKind::Area => {
            write_val(ctx, node, "c:grouping", &chart_type.grouping.resolved_or(Grouping::Standard));
            write_val(ctx, node, "c:varyColors", &chart_type.vary_colors.resolved_or(false));
            write_series(ctx, frame, chart_type);
            write_data_labels(ctx, frame, chart_type);
            write_lines(ctx, node, "c:dropLines", chart_type.drop_lines.as_ref());
            write_axis_ids(ctx, frame, chart_type);
        }
        ChartTypeKind::Pie | ChartTypeKind::Doughnut => {
            write_val(ctx, node, "c:varyColors", &chart_type.vary_colors.resolved_or(true));
            write_series(ctx, frame, chart_type);
            write_data_labels(ctx, frame, chart_type);
            let angle = chart_type.first_slice_angle.resolved_or(0.0).rem_euclid(360.0).round() as u32;
            write_val(ctx, node, "c:firstSliceAng", &angle);
            if chart_type.chart_type == ChartTypeKind::Doughnut {
                let hole = chart_type.hole_size.resolved_or(50).clamp(10, 90);
                write_val(ctx, node, "c:holeSize", &hole);
            }
        }
        ChartTypeKind::Scatter => {
            write_val(
                ctx,
                node,
                "c:scatterStyle",
                &chart_type.scatter_style.resolved_or(ScatterStyle::LineMarker),
            );
            write_val(ctx, node, "c:varyColors", &chart_type.vary_colors.resolved_or(false));
            write_series(ctx, frame, chart_type);
            write_data_labels(ctx, frame, chart_type);
            write_axis_ids(ctx, frame, chart_type);
        }
        ChartTypeKind::Bubble => {
            write_val(ctx, node, "c:varyColors", &chart_type.vary_colors.resolved_or(false));
            write_series(ctx, frame, chart_type);
            write_data_labels(ctx, frame, chart_type);
            copy_value(&mut ctx.doc, &chart_type.bubble_3d, node, "c:bubble3D", set_val, default_copy);
            copy_value(&mut ctx.doc, &chart_type.bubble_scale, node, "c:bubbleScale", set_val, default_copy);
            copy_value(
                &mut ctx.doc,
                &chart_type.show_negative_bubbles,
                node,
                "c:showNegBubbles",
                set_val,
                default_copy,
            );
            copy_value(
                &mut ctx.doc,
                &chart_type.size_represents,
                node,
                "c:sizeRepresents",
                set_val,
                default_copy,
            );
            write_axis_ids(ctx, frame, chart_type);
        }
    }
}
