use log::debug;

use super::title::write_string_reference;
use super::{write_text_element, write_val};
use crate::converters::xml::constants::{EXT_SERIES_UNIQUE_ID, NS_CHART_2014};
use crate::converters::xml::context::{ConversionContext, Frame, ModelRef};
use crate::converters::xml::copy::{always_copy, copy_value, default_copy, set_val};
use crate::converters::xml::document::NodeId;
use crate::converters::xml::fill::write_shape_properties;
use crate::converters::xml::registry::Kind;
use crate::converters::xml::series_data::write_series_data;
use crate::models::chart_type::ChartTypeKind;
use crate::models::series::{DataPoint, Series, SeriesTitle};

fn has_invert_if_negative(kind: ChartTypeKind) -> bool {
    matches!(kind, ChartTypeKind::Bar | ChartTypeKind::Column | ChartTypeKind::Bubble)
}

fn has_marker(kind: ChartTypeKind) -> bool {
    matches!(kind, ChartTypeKind::Line | ChartTypeKind::Scatter)
}

fn has_explosion(kind: ChartTypeKind) -> bool {
    matches!(kind, ChartTypeKind::Pie | ChartTypeKind::Doughnut)
}

fn write_data_point<'a>(
    ctx: &mut ConversionContext<'_>,
    frame: &Frame<'a>,
    kind: ChartTypeKind,
    point: &'a DataPoint,
) {
    let dpt = ctx.doc.create_child_node(frame.node, "c:dPt");
    write_val(ctx, dpt, "c:idx", &point.index);
    if has_invert_if_negative(kind) {
        copy_value(&mut ctx.doc, &point.invert_if_negative, dpt, "c:invertIfNegative", set_val, default_copy);
    }
    if has_marker(kind) {
        if let Some(marker) = &point.marker {
            ctx.visit(Some(frame), dpt, ModelRef::Marker(marker), None, None);
        }
    }
    if kind == ChartTypeKind::Bubble {
        copy_value(&mut ctx.doc, &point.bubble_3d, dpt, "c:bubble3D", set_val, default_copy);
    }
    if has_explosion(kind) {
        copy_value(&mut ctx.doc, &point.explosion, dpt, "c:explosion", set_val, default_copy);
    }
    write_shape_properties(ctx, dpt, "c:spPr", &point.shape);
}

fn write_data(ctx: &mut ConversionContext<'_>, node: NodeId, kind: ChartTypeKind, series: &Series) {
    if kind.is_xy() {
        if let Some(x) = series.x_values.as_ref().or(series.categories.as_ref()) {
            write_series_data(ctx, node, "c:xVal", x);
        }
        if let Some(y) = series.y_values.as_ref().or(series.values.as_ref()) {
            write_series_data(ctx, node, "c:yVal", y);
        }
        if kind == ChartTypeKind::Bubble {
            if let Some(sizes) = &series.bubble_sizes {
                write_series_data(ctx, node, "c:bubbleSize", sizes);
            }
        }
    } else {
        if let Some(categories) = &series.categories {
            write_series_data(ctx, node, "c:cat", categories);
        }
        if let Some(values) = &series.values {
            write_series_data(ctx, node, "c:val", values);
        }
    }
}

fn write_unique_id(ctx: &mut ConversionContext<'_>, node: NodeId) {
    let guid = ctx.next_extension_guid();
    let ext = ctx.doc.create_child_nodes(node, "c:extLst/c:ext");
    ctx.doc.set_attribute(ext, "uri", EXT_SERIES_UNIQUE_ID);
    ctx.doc.set_attribute(ext, "xmlns:c16", NS_CHART_2014);
    let unique_id = ctx.doc.create_child_node(ext, "c16:uniqueId");
    ctx.doc.set_attribute(unique_id, "val", guid);
}

/// Visitor for a series (`c:ser`). The element layout follows the owning chart type.
///
/// `c:order` is left without a value; the chart type visitor fills it in once the
/// series has been written.
pub fn visit_series(ctx: &mut ConversionContext<'_>, frame: &Frame<'_>) {
    let ModelRef::Series(series) = frame.model else {
        ctx.model_mismatch(Kind::Series, &frame.model);
        return;
    };
    let kind = frame
        .chart_type()
        .map_or(ChartTypeKind::default(), |chart_type| chart_type.chart_type);
    let node = frame.node;

    let idx = series.index.resolved_or(ctx.current_series());
    write_val(ctx, node, "c:idx", &idx);
    ctx.doc.create_child_node(node, "c:order");
    if let Some(title) = &series.title {
        ctx.visit(Some(frame), node, ModelRef::SeriesTitle(title), None, None);
    }
    write_shape_properties(ctx, node, "c:spPr", &series.shape);

    if has_invert_if_negative(kind) {
        copy_value(&mut ctx.doc, &series.invert_if_negative, node, "c:invertIfNegative", set_val, default_copy);
    }
    if has_marker(kind) {
        if let Some(marker) = &series.marker {
            ctx.visit(Some(frame), node, ModelRef::Marker(marker), None, None);
        }
    }
    if has_explosion(kind) {
        copy_value(&mut ctx.doc, &series.explosion, node, "c:explosion", set_val, default_copy);
    }

    for point in &series.points {
        write_data_point(ctx, frame, kind, point);
    }
    if let Some(labels) = &series.data_labels {
        ctx.visit(Some(frame), node, ModelRef::DataLabels(labels), None, None);
    }

    write_data(ctx, node, kind, series);

    if has_marker(kind) {
        copy_value(&mut ctx.doc, &series.smooth, node, "c:smooth", set_val, always_copy);
    }
    if kind == ChartTypeKind::Bubble {
        copy_value(&mut ctx.doc, &series.bubble_3d, node, "c:bubble3D", set_val, default_copy);
    }

    write_unique_id(ctx, node);
    debug!("Wrote series idx {}", idx);
}

/// Visitor for a series name (`c:tx`).
pub fn visit_series_title(ctx: &mut ConversionContext<'_>, frame: &Frame<'_>) {
    let ModelRef::SeriesTitle(title) = frame.model else {
        ctx.model_mismatch(Kind::SeriesTitle, &frame.model);
        return;
    };
    match title {
        SeriesTitle::Reference(reference) => write_string_reference(ctx, frame.node, reference),
        SeriesTitle::Literal(text) => {
            write_text_element(ctx, frame.node, "c:v", text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::xml::registry::VisitorRegistry;
    use crate::converters::xml::visitors::test_support::{child_names, val_at};
    use crate::models::chart_type::ChartType;
    use crate::models::property::Property;
    use crate::models::series::{Cell, Marker, MarkerSymbol, SeriesData};

    fn numbers(values: &[f64]) -> SeriesData {
        SeriesData::Literal {
            values: values.iter().map(|v| Cell::number(*v)).collect(),
            format_code: None,
        }
    }

    fn visit_in<'a>(ctx: &mut ConversionContext<'_>, chart_type: &'a ChartType) -> NodeId {
        let group = ctx.doc.create_node("c:group");
        let owner = Frame {
            node: group,
            model: ModelRef::ChartType(chart_type),
            parent: None,
        };
        ctx.begin_series();
        ctx.visit(Some(&owner), group, ModelRef::Series(&chart_type.series[0]), None, None)
            .unwrap()
    }

    #[test]
    fn test_bar_series_order() {
        let registry = VisitorRegistry::with_defaults();
        let mut ctx = ConversionContext::new(&registry);
        let mut chart_type = ChartType::new(ChartTypeKind::Column);
        chart_type.series.push(Series {
            title: Some(SeriesTitle::Literal("East".to_string())),
            invert_if_negative: Property::explicit(false),
            points: vec![DataPoint { index: 1, ..DataPoint::default() }],
            categories: Some(SeriesData::Literal {
                values: vec![Cell::text("A"), Cell::text("B")],
                format_code: None,
            }),
            values: Some(numbers(&[1.0, 2.0])),
            ..Series::default()
        });
        let node = visit_in(&mut ctx, &chart_type);
        assert_eq!(
            child_names(&ctx.doc, node),
            vec![
                "c:idx",
                "c:order",
                "c:tx",
                "c:invertIfNegative",
                "c:dPt",
                "c:cat",
                "c:val",
                "c:extLst"
            ]
        );
        assert_eq!(val_at(&ctx.doc, node, "c:idx"), Some("0"));
        assert_eq!(ctx.doc.text(ctx.doc.get_node(node, "c:tx/c:v").unwrap()), "East");
        let ext = ctx.doc.get_node(node, "c:extLst/c:ext").unwrap();
        assert_eq!(ctx.doc.attribute(ext, "uri"), Some(EXT_SERIES_UNIQUE_ID));
    }

    #[test]
    fn test_scatter_series_uses_xy_values() {
        let registry = VisitorRegistry::with_defaults();
        let mut ctx = ConversionContext::new(&registry);
        let mut chart_type = ChartType::new(ChartTypeKind::Scatter);
        chart_type.series.push(Series {
            index: Property::explicit(7),
            marker: Some(Marker {
                symbol: Property::explicit(MarkerSymbol::None),
                ..Marker::default()
            }),
            x_values: Some(numbers(&[1.0, 2.0])),
            y_values: Some(numbers(&[3.0, 4.0])),
            smooth: Property::defaulted(false),
            ..Series::default()
        });
        let node = visit_in(&mut ctx, &chart_type);
        assert_eq!(
            child_names(&ctx.doc, node),
            vec!["c:idx", "c:order", "c:marker", "c:xVal", "c:yVal", "c:smooth", "c:extLst"]
        );
        assert_eq!(val_at(&ctx.doc, node, "c:idx"), Some("7"));
        assert_eq!(val_at(&ctx.doc, node, "c:smooth"), Some("0"));
    }

    #[test]
    fn test_reference_series_title() {
        let registry = VisitorRegistry::with_defaults();
        let mut ctx = ConversionContext::new(&registry);
        let ser = ctx.doc.create_node("c:ser");
        let title = SeriesTitle::Reference(crate::models::text::StringReference {
            formula: "Sheet1!$B$1".to_string(),
            cached: None,
        });
        let node = ctx
            .visit(None, ser, ModelRef::SeriesTitle(&title), None, None)
            .unwrap();
        assert_eq!(child_names(&ctx.doc, node), vec!["c:strRef"]);
    }
}
