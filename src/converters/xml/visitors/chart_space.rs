//! The document root (`c:chartSpace`) and the `c:chart` element it wraps.

use log::debug;

use super::text::write_text_properties;
use super::write_val;
use crate::converters::xml::constants::*;
use crate::converters::xml::context::{ConversionContext, Frame, ModelRef};
use crate::converters::xml::copy::{copy_value, default_copy, set_val};
use crate::converters::xml::document::NodeId;
use crate::converters::xml::fill::write_shape_properties;
use crate::converters::xml::registry::Kind;
use crate::models::chart_space::{BlankMode, ChartSpace};

fn write_namespaces(ctx: &mut ConversionContext<'_>, node: NodeId) {
    ctx.doc.set_attribute(node, "xmlns:c", NS_CHART);
    ctx.doc.set_attribute(node, "xmlns:a", NS_DRAWING);
    ctx.doc.set_attribute(node, "xmlns:r", NS_RELATIONSHIPS);
    ctx.doc.set_attribute(node, "xmlns:c16r2", NS_CHART_2015);
}

/// Writes the chart style twice: as `c14:style` for consumers that understand it and
/// as `c:style` for the rest.
fn write_style(ctx: &mut ConversionContext<'_>, node: NodeId, chart_space: &ChartSpace) {
    let style = chart_space.style.resolved_or(DEFAULT_STYLE_ID);
    let alternate = ctx.doc.create_child_node(node, "mc:AlternateContent");
    ctx.doc.set_attribute(alternate, "xmlns:mc", NS_MARKUP_COMPATIBILITY);

    let choice = ctx.doc.create_child_node(alternate, "mc:Choice");
    ctx.doc.set_attribute(choice, "Requires", "c14");
    ctx.doc.set_attribute(choice, "xmlns:c14", NS_CHART_2007);
    write_val(ctx, choice, "c14:style", &(STYLE_ID_OFFSET + style));

    let fallback = ctx.doc.create_child_node(alternate, "mc:Fallback");
    write_val(ctx, fallback, "c:style", &style);
}

fn write_chart<'a>(ctx: &mut ConversionContext<'_>, frame: &Frame<'a>, chart_space: &'a ChartSpace) {
    let chart = ctx.doc.create_child_node(frame.node, "c:chart");

    if let Some(title) = &chart_space.title {
        ctx.visit(Some(frame), chart, ModelRef::ChartTitle(title), None, None);
    }
    write_val(ctx, chart, "c:autoTitleDeleted", &chart_space.auto_title_deleted.resolved_or(false));
    ctx.visit(Some(frame), chart, ModelRef::PlotArea(&chart_space.plot_area), None, None);
    if let Some(legend) = &chart_space.legend {
        ctx.visit(Some(frame), chart, ModelRef::Legend(legend), None, None);
    }
    write_val(ctx, chart, "c:plotVisOnly", &chart_space.plot_visible_only.resolved_or(true));
    write_val(
        ctx,
        chart,
        "c:dispBlanksAs",
        &chart_space.display_blanks_as.resolved_or(BlankMode::Gap),
    );
    copy_value(
        &mut ctx.doc,
        &chart_space.show_labels_over_max,
        chart,
        "c:showDLblsOverMax",
        set_val,
        default_copy,
    );

    if let Some(show_na_as_blank) = chart_space.show_na_as_blank.get() {
        let ext = ctx.doc.create_child_nodes(chart, "c:extLst/c:ext");
        ctx.doc.set_attribute(ext, "uri", EXT_DATA_DISPLAY_OPTIONS);
        ctx.doc.set_attribute(ext, "xmlns:c16r3", NS_CHART_2017);
        let options = ctx.doc.create_child_node(ext, "c16r3:dataDisplayOptions16");
        write_val(ctx, options, "c16r3:dispNaAsBlank", show_na_as_blank);
    }
}

fn write_print_settings(ctx: &mut ConversionContext<'_>, node: NodeId) {
    let settings = ctx.doc.create_child_node(node, "c:printSettings");
    ctx.doc.create_child_node(settings, "c:headerFooter");
    let margins = ctx.doc.create_child_node(settings, "c:pageMargins");
    for (name, value) in PAGE_MARGINS {
        ctx.doc.set_attribute(margins, name, value);
    }
    ctx.doc.create_child_node(settings, "c:pageSetup");
}

/// Visitor for the root chart space.
pub fn visit_chart_space(ctx: &mut ConversionContext<'_>, frame: &Frame<'_>) {
    let ModelRef::ChartSpace(chart_space) = frame.model else {
        ctx.model_mismatch(Kind::ChartSpace, &frame.model);
        return;
    };
    let node = frame.node;
    debug!(
        "Writing chart space with {} chart type groups",
        chart_space.plot_area.chart_types.len()
    );

    write_namespaces(ctx, node);
    write_val(ctx, node, "c:date1904", &false);
    write_val(ctx, node, "c:lang", DEFAULT_LANGUAGE);
    copy_value(&mut ctx.doc, &chart_space.rounded_corners, node, "c:roundedCorners", set_val, default_copy);
    write_style(ctx, node, chart_space);

    write_chart(ctx, frame, chart_space);

    write_shape_properties(ctx, node, "c:spPr", &chart_space.shape);
    write_text_properties(ctx, node, &chart_space.format, None);
    write_print_settings(ctx, node);
}
