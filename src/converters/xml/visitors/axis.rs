//! Value, category and date axes (`c:valAx`, `c:catAx`, `c:dateAx`).

use log::debug;

use super::text::write_text_properties;
use super::write_val;
use crate::converters::xml::context::{ConversionContext, Frame, ModelRef};
use crate::converters::xml::copy::{
    always_copy, copy_value, default_copy, set_val, set_val_inverted,
};
use crate::converters::xml::document::NodeId;
use crate::converters::xml::error::ConversionWarning;
use crate::converters::xml::fill::write_shape_properties;
use crate::converters::xml::registry::Kind;
use crate::models::axis::{
    Axis, AxisKind, AxisPosition, ChartLines, CrossBetween, Crosses, DisplayUnit, LabelAlignment,
    TickLabelPosition,
};
use crate::models::chart_space::PlotArea;
use crate::models::chart_type::{ChartType, ChartTypeKind};

const DEFAULT_LABEL_OFFSET: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisRole {
    X,
    Y,
}

fn contains(axes: &[Axis], axis: &Axis) -> bool {
    axes.iter().any(|candidate| std::ptr::eq(candidate, axis))
}

fn axis_role(axis: &Axis, plot_area: Option<&PlotArea>) -> AxisRole {
    match plot_area {
        Some(plot_area) if contains(&plot_area.x_axes, axis) => AxisRole::X,
        Some(plot_area) if contains(&plot_area.y_axes, axis) => AxisRole::Y,
        _ if axis.kind == AxisKind::Value => AxisRole::Y,
        _ => AxisRole::X,
    }
}

/// Position of an axis: the explicit one, else bottom for x and left for y axes,
/// swapped for horizontal bar charts.
pub(crate) fn axis_position(axis: &Axis, axis_frame: &Frame<'_>) -> AxisPosition {
    if let Some(position) = axis.position.get() {
        return *position;
    }
    let horizontal = axis_frame
        .chart_type()
        .is_some_and(|owner| owner.chart_type == ChartTypeKind::Bar);
    match (axis_role(axis, axis_frame.plot_area()), horizontal) {
        (AxisRole::X, false) | (AxisRole::Y, true) => AxisPosition::Bottom,
        (AxisRole::Y, false) | (AxisRole::X, true) => AxisPosition::Left,
    }
}

/// The axis `axis` crosses within `owner`'s axis pair.
fn cross_axis<'a>(axis: &Axis, owner: &ChartType, plot_area: &'a PlotArea) -> Option<&'a Axis> {
    match axis_role(axis, Some(plot_area)) {
        AxisRole::X => plot_area.y_axes.get(owner.y_axis),
        AxisRole::Y => plot_area.x_axes.get(owner.x_axis),
    }
}

fn write_gridlines(ctx: &mut ConversionContext<'_>, parent: NodeId, tag: &str, lines: Option<&ChartLines>) {
    if let Some(lines) = lines {
        let node = ctx.doc.create_child_node(parent, tag);
        write_shape_properties(ctx, node, "c:spPr", &lines.shape);
    }
}

fn write_scaling(ctx: &mut ConversionContext<'_>, node: NodeId, axis: &Axis) {
    let scaling = ctx.doc.create_child_node(node, "c:scaling");
    copy_value(&mut ctx.doc, &axis.log_base, scaling, "c:logBase", set_val, default_copy);
    let orientation = if axis.reversed.resolved_or(false) {
        "maxMin"
    } else {
        "minMax"
    };
    write_val(ctx, scaling, "c:orientation", orientation);
    copy_value(&mut ctx.doc, &axis.max, scaling, "c:max", set_val, default_copy);
    copy_value(&mut ctx.doc, &axis.min, scaling, "c:min", set_val, default_copy);
}

fn write_cross_axis(ctx: &mut ConversionContext<'_>, frame: &Frame<'_>, axis: &Axis) {
    let crossed = match (frame.chart_type(), frame.plot_area()) {
        (Some(owner), Some(plot_area)) => cross_axis(axis, owner, plot_area),
        _ => None,
    };
    match crossed {
        Some(crossed) => {
            let id = ctx.axis_id(crossed);
            write_val(ctx, frame.node, "c:crossAx", &id);
        }
        None => ctx.warn(ConversionWarning::MalformedInput(format!(
            "{:?} axis has no axis to cross",
            axis.kind
        ))),
    }
}

fn write_crosses(ctx: &mut ConversionContext<'_>, node: NodeId, axis: &Axis) {
    match axis.crosses.resolved_or(Crosses::AutoZero) {
        Crosses::At(value) => {
            write_val(ctx, node, "c:crossesAt", &value);
        }
        Crosses::AutoZero => {
            write_val(ctx, node, "c:crosses", "autoZero");
        }
        Crosses::Min => {
            write_val(ctx, node, "c:crosses", "min");
        }
        Crosses::Max => {
            write_val(ctx, node, "c:crosses", "max");
        }
    }
}

fn write_value_axis(ctx: &mut ConversionContext<'_>, frame: &Frame<'_>, axis: &Axis) {
    let node = frame.node;
    let cross_between = if frame.chart_type().is_some_and(|owner| owner.chart_type.is_xy()) {
        CrossBetween::MidCategory
    } else {
        CrossBetween::Between
    };
    write_val(ctx, node, "c:crossBetween", &axis.cross_between.resolved_or(cross_between));
    copy_value(&mut ctx.doc, &axis.major_unit, node, "c:majorUnit", set_val, default_copy);
    copy_value(&mut ctx.doc, &axis.minor_unit, node, "c:minorUnit", set_val, default_copy);

    if let Some(display_units) = &axis.display_units {
        let units = ctx.doc.create_child_node(node, "c:dispUnits");
        match display_units.unit {
            DisplayUnit::Custom(divisor) => {
                write_val(ctx, units, "c:custUnit", &divisor);
            }
            DisplayUnit::BuiltIn(unit) => {
                write_val(ctx, units, "c:builtInUnit", &unit);
            }
        }
        if display_units.show_label {
            ctx.doc.create_child_node(units, "c:dispUnitsLbl");
        }
    }
}

fn write_category_axis(ctx: &mut ConversionContext<'_>, node: NodeId, axis: &Axis) {
    write_val(ctx, node, "c:auto", &axis.auto.resolved_or(true));
    write_val(ctx, node, "c:lblAlgn", &axis.label_alignment.resolved_or(LabelAlignment::Center));
    write_val(ctx, node, "c:lblOffset", &axis.label_offset.resolved_or(DEFAULT_LABEL_OFFSET));
    copy_value(&mut ctx.doc, &axis.tick_label_skip, node, "c:tickLblSkip", set_val, default_copy);
    copy_value(&mut ctx.doc, &axis.tick_mark_skip, node, "c:tickMarkSkip", set_val, default_copy);
    write_val(ctx, node, "c:noMultiLvlLbl", &axis.no_multi_level_labels.resolved_or(false));
}

fn write_date_axis(ctx: &mut ConversionContext<'_>, node: NodeId, axis: &Axis) {
    write_val(ctx, node, "c:auto", &axis.auto.resolved_or(true));
    write_val(ctx, node, "c:lblOffset", &axis.label_offset.resolved_or(DEFAULT_LABEL_OFFSET));
    copy_value(&mut ctx.doc, &axis.base_time_unit, node, "c:baseTimeUnit", set_val, default_copy);
    copy_value(&mut ctx.doc, &axis.major_unit, node, "c:majorUnit", set_val, default_copy);
    copy_value(&mut ctx.doc, &axis.major_time_unit, node, "c:majorTimeUnit", set_val, default_copy);
    copy_value(&mut ctx.doc, &axis.minor_unit, node, "c:minorUnit", set_val, default_copy);
    copy_value(&mut ctx.doc, &axis.minor_time_unit, node, "c:minorTimeUnit", set_val, default_copy);
}

/// Visitor for all three axis kinds.
///
/// Expects to run below a chart type frame, which names the axis pair this axis
/// belongs to and so the axis it crosses. A hidden axis keeps its settings but is
/// marked deleted and its tick labels are forced off.
pub fn visit_axis(ctx: &mut ConversionContext<'_>, frame: &Frame<'_>) {
    let ModelRef::Axis(axis) = frame.model else {
        ctx.model_mismatch(Kind::ValueAxis, &frame.model);
        return;
    };
    let node = frame.node;
    let hidden = axis.is_hidden();

    let id = ctx.axis_id(axis);
    write_val(ctx, node, "c:axId", &id);
    write_scaling(ctx, node, axis);
    if !copy_value(&mut ctx.doc, &axis.shown, node, "c:delete", set_val_inverted, always_copy) {
        write_val(ctx, node, "c:delete", &false);
    }
    let position = axis_position(axis, frame);
    write_val(ctx, node, "c:axPos", &position);
    write_gridlines(ctx, node, "c:majorGridlines", axis.major_gridlines.as_ref());
    write_gridlines(ctx, node, "c:minorGridlines", axis.minor_gridlines.as_ref());

    if let Some(title) = &axis.title {
        ctx.visit(Some(frame), node, ModelRef::AxisTitle(title), None, None);
    }
    if let (true, Some(format)) = (axis.number_format.is_explicit(), axis.number_format.get()) {
        let num_fmt = ctx.doc.create_child_node(node, "c:numFmt");
        ctx.doc.set_attribute(num_fmt, "formatCode", format.code.as_str());
        ctx.doc
            .set_attribute(num_fmt, "sourceLinked", if format.source_linked { "1" } else { "0" });
    }
    copy_value(&mut ctx.doc, &axis.major_tick_mark, node, "c:majorTickMark", set_val, default_copy);
    copy_value(&mut ctx.doc, &axis.minor_tick_mark, node, "c:minorTickMark", set_val, default_copy);
    if hidden {
        write_val(ctx, node, "c:tickLblPos", &TickLabelPosition::None);
    } else {
        copy_value(&mut ctx.doc, &axis.label_position, node, "c:tickLblPos", set_val, default_copy);
    }
    write_shape_properties(ctx, node, "c:spPr", &axis.shape);
    write_text_properties(ctx, node, &axis.format, None);

    write_cross_axis(ctx, frame, axis);
    write_crosses(ctx, node, axis);
    match axis.kind {
        AxisKind::Value => write_value_axis(ctx, frame, axis),
        AxisKind::Category => write_category_axis(ctx, node, axis),
        AxisKind::Date => write_date_axis(ctx, node, axis),
    }
    debug!("Wrote {:?} axis {} at {:?}", axis.kind, id, position);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::xml::registry::VisitorRegistry;
    use crate::converters::xml::visitors::test_support::{child_names, val_at};
    use crate::models::axis::DisplayUnits;
    use crate::models::property::Property;

    fn plot_area(kind: ChartTypeKind, x: Axis, y: Axis) -> PlotArea {
        PlotArea {
            chart_types: vec![ChartType::new(kind)],
            x_axes: vec![x],
            y_axes: vec![y],
            ..PlotArea::default()
        }
    }

    /// Visits `axis` below the plot area and its first chart type, the way the plot
    /// area visitor does.
    fn visit_axis_in(ctx: &mut ConversionContext<'_>, plot_area: &PlotArea, axis: &Axis) -> NodeId {
        let root = ctx.doc.create_node("c:plotArea");
        let plot_frame = Frame {
            node: root,
            model: ModelRef::PlotArea(plot_area),
            parent: None,
        };
        let owner = Frame {
            node: root,
            model: ModelRef::ChartType(&plot_area.chart_types[0]),
            parent: Some(&plot_frame),
        };
        ctx.visit(Some(&owner), root, ModelRef::Axis(axis), None, None)
            .unwrap()
    }

    #[test]
    fn test_category_axis_layout() {
        let registry = VisitorRegistry::with_defaults();
        let mut ctx = ConversionContext::new(&registry);
        let plot_area = plot_area(
            ChartTypeKind::Column,
            Axis::new(AxisKind::Category),
            Axis::new(AxisKind::Value),
        );
        let node = visit_axis_in(&mut ctx, &plot_area, &plot_area.x_axes[0]);
        assert_eq!(ctx.doc.name(node), Some("c:catAx"));
        assert_eq!(
            child_names(&ctx.doc, node),
            vec![
                "c:axId",
                "c:scaling",
                "c:delete",
                "c:axPos",
                "c:crossAx",
                "c:crosses",
                "c:auto",
                "c:lblAlgn",
                "c:lblOffset",
                "c:noMultiLvlLbl"
            ]
        );
        assert_eq!(val_at(&ctx.doc, node, "c:scaling/c:orientation"), Some("minMax"));
        assert_eq!(val_at(&ctx.doc, node, "c:delete"), Some("0"));
        assert_eq!(val_at(&ctx.doc, node, "c:axPos"), Some("b"));
        assert_eq!(val_at(&ctx.doc, node, "c:crosses"), Some("autoZero"));

        let own = ctx.axis_id(&plot_area.x_axes[0]);
        let crossed = ctx.axis_id(&plot_area.y_axes[0]);
        assert_ne!(own, crossed);
        assert_eq!(val_at(&ctx.doc, node, "c:axId"), Some(own.to_string().as_str()));
        assert_eq!(val_at(&ctx.doc, node, "c:crossAx"), Some(crossed.to_string().as_str()));
    }

    #[test]
    fn test_hidden_axis_forces_tick_labels_off() {
        let registry = VisitorRegistry::with_defaults();
        let mut ctx = ConversionContext::new(&registry);
        let mut value = Axis::new(AxisKind::Value);
        value.shown = Property::explicit(false);
        value.label_position = Property::explicit(TickLabelPosition::NextTo);
        let plot_area = plot_area(ChartTypeKind::Line, Axis::new(AxisKind::Category), value);

        let node = visit_axis_in(&mut ctx, &plot_area, &plot_area.y_axes[0]);
        assert_eq!(val_at(&ctx.doc, node, "c:delete"), Some("1"));
        assert_eq!(val_at(&ctx.doc, node, "c:tickLblPos"), Some("none"));
        assert_eq!(val_at(&ctx.doc, node, "c:axPos"), Some("l"));
        assert_eq!(val_at(&ctx.doc, node, "c:crossBetween"), Some("between"));
    }

    #[test]
    fn test_bar_chart_swaps_positions() {
        let registry = VisitorRegistry::with_defaults();
        let mut ctx = ConversionContext::new(&registry);
        let plot_area = plot_area(
            ChartTypeKind::Bar,
            Axis::new(AxisKind::Category),
            Axis::new(AxisKind::Value),
        );
        let x = visit_axis_in(&mut ctx, &plot_area, &plot_area.x_axes[0]);
        let y = visit_axis_in(&mut ctx, &plot_area, &plot_area.y_axes[0]);
        assert_eq!(val_at(&ctx.doc, x, "c:axPos"), Some("l"));
        assert_eq!(val_at(&ctx.doc, y, "c:axPos"), Some("b"));
    }

    #[test]
    fn test_value_axis_scaling_and_units() {
        let registry = VisitorRegistry::with_defaults();
        let mut ctx = ConversionContext::new(&registry);
        let mut y = Axis::new(AxisKind::Value);
        y.reversed = Property::explicit(true);
        y.min = Property::explicit(0.0);
        y.max = Property::explicit(250.0);
        y.major_unit = Property::explicit(50.0);
        y.crosses = Property::explicit(Crosses::At(10.5));
        y.display_units = Some(DisplayUnits {
            unit: DisplayUnit::Custom(1000.0),
            show_label: true,
        });
        let plot_area = plot_area(ChartTypeKind::Scatter, Axis::new(AxisKind::Value), y);

        let node = visit_axis_in(&mut ctx, &plot_area, &plot_area.y_axes[0]);
        let scaling = ctx.doc.get_node(node, "c:scaling").unwrap();
        assert_eq!(
            child_names(&ctx.doc, scaling),
            vec!["c:orientation", "c:max", "c:min"]
        );
        assert_eq!(val_at(&ctx.doc, scaling, "c:orientation"), Some("maxMin"));
        assert_eq!(val_at(&ctx.doc, node, "c:crossesAt"), Some("10.5"));
        assert!(ctx.doc.get_node(node, "c:crosses").is_none());
        assert_eq!(val_at(&ctx.doc, node, "c:crossBetween"), Some("midCat"));
        assert_eq!(val_at(&ctx.doc, node, "c:majorUnit"), Some("50"));
        assert_eq!(val_at(&ctx.doc, node, "c:dispUnits/c:custUnit"), Some("1000"));
        assert!(ctx.doc.get_node(node, "c:dispUnits/c:dispUnitsLbl").is_some());
    }

    #[test]
    fn test_axis_outside_chart_type_warns() {
        let registry = VisitorRegistry::with_defaults();
        let mut ctx = ConversionContext::new(&registry);
        let axis = Axis::new(AxisKind::Date);
        let root = ctx.doc.create_node("c:plotArea");
        let node = ctx
            .visit(None, root, ModelRef::Axis(&axis), None, None)
            .unwrap();
        assert_eq!(ctx.doc.name(node), Some("c:dateAx"));
        assert!(ctx.doc.get_node(node, "c:crossAx").is_none());
        assert!(matches!(ctx.warnings(), [ConversionWarning::MalformedInput(_)]));
    }
}
