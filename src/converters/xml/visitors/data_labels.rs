use super::text::write_text_properties;
use super::{write_text_element, write_val};
use crate::converters::xml::context::{ConversionContext, Frame, ModelRef};
use crate::converters::xml::copy::{copy_value, default_copy, set_val};
use crate::converters::xml::fill::write_shape_properties;
use crate::converters::xml::registry::Kind;
use crate::models::chart_type::ChartTypeKind;

/// Visitor for a data label set (`c:dLbls`), at chart type or series level.
///
/// The six content flags are always written. The label position is written only when
/// a label is shown or the owning chart type positions its labels explicitly, and
/// never for chart types that reject it.
pub fn visit_data_labels(ctx: &mut ConversionContext<'_>, frame: &Frame<'_>) {
    let ModelRef::DataLabels(labels) = frame.model else {
        ctx.model_mismatch(Kind::DataLabels, &frame.model);
        return;
    };
    let node = frame.node;
    let owner = frame.chart_type();

    if let (true, Some(format)) = (labels.number_format.is_explicit(), labels.number_format.get()) {
        let num_fmt = ctx.doc.create_child_node(node, "c:numFmt");
        ctx.doc.set_attribute(num_fmt, "formatCode", format.code.as_str());
        ctx.doc
            .set_attribute(num_fmt, "sourceLinked", if format.source_linked { "1" } else { "0" });
    }
    write_shape_properties(ctx, node, "c:spPr", &labels.shape);
    write_text_properties(ctx, node, &labels.format, None);

    let position_allowed = !matches!(
        owner.map(|chart_type| chart_type.chart_type),
        Some(ChartTypeKind::Area | ChartTypeKind::Doughnut)
    );
    let owner_positions_labels = owner
        .and_then(|chart_type| chart_type.data_labels.as_ref())
        .is_some_and(|owner_labels| owner_labels.position.is_explicit());
    let any_shown = labels.any_shown();
    if position_allowed {
        copy_value(
            &mut ctx.doc,
            &labels.position,
            node,
            "c:dLblPos",
            set_val,
            |info| info.has_value && (any_shown || owner_positions_labels),
        );
    }

    let flags = [
        ("c:showLegendKey", &labels.show_legend_key),
        ("c:showVal", &labels.show_value),
        ("c:showCatName", &labels.show_category_name),
        ("c:showSerName", &labels.show_series_name),
        ("c:showPercent", &labels.show_percent),
        ("c:showBubbleSize", &labels.show_bubble_size),
    ];
    for (tag, flag) in flags {
        write_val(ctx, node, tag, &flag.resolved_or(false));
    }

    if let (true, Some(separator)) = (labels.separator.is_explicit(), labels.separator.get()) {
        write_text_element(ctx, node, "c:separator", separator);
    }
    copy_value(&mut ctx.doc, &labels.show_leader_lines, node, "c:showLeaderLines", set_val, default_copy);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::xml::registry::VisitorRegistry;
    use crate::converters::xml::visitors::test_support::{child_names, val_at};
    use crate::models::data_labels::{DataLabels, LabelPosition};
    use crate::models::property::Property;

    #[test]
    fn test_flags_always_written() {
        let registry = VisitorRegistry::with_defaults();
        let mut ctx = ConversionContext::new(&registry);
        let ser = ctx.doc.create_node("c:ser");
        let labels = DataLabels {
            show_value: Property::explicit(true),
            position: Property::explicit(LabelPosition::OutsideEnd),
            ..DataLabels::default()
        };
        let node = ctx
            .visit(None, ser, ModelRef::DataLabels(&labels), None, None)
            .unwrap();
        assert_eq!(
            child_names(&ctx.doc, node),
            vec![
                "c:dLblPos",
                "c:showLegendKey",
                "c:showVal",
                "c:showCatName",
                "c:showSerName",
                "c:showPercent",
                "c:showBubbleSize"
            ]
        );
        assert_eq!(val_at(&ctx.doc, node, "c:dLblPos"), Some("outEnd"));
        assert_eq!(val_at(&ctx.doc, node, "c:showVal"), Some("1"));
        assert_eq!(val_at(&ctx.doc, node, "c:showPercent"), Some("0"));
    }

    #[test]
    fn test_position_skipped_when_nothing_shown() {
        let registry = VisitorRegistry::with_defaults();
        let mut ctx = ConversionContext::new(&registry);
        let ser = ctx.doc.create_node("c:ser");
        let labels = DataLabels {
            position: Property::inherited(LabelPosition::Center),
            separator: Property::explicit("; ".to_string()),
            ..DataLabels::default()
        };
        let node = ctx
            .visit(None, ser, ModelRef::DataLabels(&labels), None, None)
            .unwrap();
        assert!(ctx.doc.get_node(node, "c:dLblPos").is_none());
        let separator = ctx.doc.get_node(node, "c:separator").unwrap();
        assert_eq!(ctx.doc.text(separator), "; ");
    }
}
