use log::debug;

use crate::converters::xml::context::{ConversionContext, Frame, ModelRef};
use crate::converters::xml::fill::write_shape_properties;
use crate::converters::xml::registry::Kind;
use crate::models::axis::Axis;
use crate::models::chart_space::PlotArea;
use crate::models::chart_type::ChartType;

/// Axes referenced by the plot area's chart types, each paired with the first chart
/// type that uses it. Ordered by chart type, x axis before y axis.
fn used_axes(plot_area: &PlotArea) -> Vec<(&ChartType, &Axis)> {
    let mut used: Vec<(&ChartType, &Axis)> = Vec::new();
    for chart_type in &plot_area.chart_types {
        if !chart_type.chart_type.has_axes() {
            continue;
        }
        let pair = [
            plot_area.x_axes.get(chart_type.x_axis),
            plot_area.y_axes.get(chart_type.y_axis),
        ];
        for axis in pair.into_iter().flatten() {
            if !used.iter().any(|(_, seen)| std::ptr::eq(*seen, axis)) {
                used.push((chart_type, axis));
            }
        }
    }
    used
}

/// Visitor for the plot area (`c:plotArea`): layout, chart type groups, then the axes
/// those groups reference.
pub fn visit_plot_area(ctx: &mut ConversionContext<'_>, frame: &Frame<'_>) {
    let ModelRef::PlotArea(plot_area) = frame.model else {
        ctx.model_mismatch(Kind::PlotArea, &frame.model);
        return;
    };
    let node = frame.node;

    // Consumers expect the layout element even when it is empty.
    let layout_node = ctx.doc.create_child_node(node, "c:layout");
    if let Some(layout) = &plot_area.layout {
        ctx.visit(Some(frame), layout_node, ModelRef::Layout(layout), None, None);
    }

    for chart_type in &plot_area.chart_types {
        ctx.visit(Some(frame), node, ModelRef::ChartType(chart_type), None, None);
    }

    let axes = used_axes(plot_area);
    let total = plot_area.x_axes.len() + plot_area.y_axes.len();
    if axes.len() < total {
        debug!("Skipping {} unreferenced axes", total - axes.len());
    }
    for (chart_type, axis) in axes {
        // Axes are written below the plot area but resolve their crossing axis
        // through the chart type that uses them.
        let owner = Frame {
            node,
            model: ModelRef::ChartType(chart_type),
            parent: Some(frame),
        };
        ctx.visit(Some(&owner), node, ModelRef::Axis(axis), None, None);
    }

    write_shape_properties(ctx, node, "c:spPr", &plot_area.shape);
}
