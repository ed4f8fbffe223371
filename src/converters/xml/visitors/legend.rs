use super::text::write_text_properties;
use super::write_val;
use crate::converters::xml::context::{ConversionContext, Frame, ModelRef};
use crate::converters::xml::fill::write_shape_properties;
use crate::converters::xml::registry::Kind;
use crate::models::chart_space::LegendPosition;

/// Visitor for the legend (`c:legend`).
pub fn visit_legend(ctx: &mut ConversionContext<'_>, frame: &Frame<'_>) {
    let ModelRef::Legend(legend) = frame.model else {
        ctx.model_mismatch(Kind::Legend, &frame.model);
        return;
    };

    write_val(
        ctx,
        frame.node,
        "c:legendPos",
        &legend.position.resolved_or(LegendPosition::Right),
    );

    for entry in &legend.entries {
        let node = ctx.doc.create_child_node(frame.node, "c:legendEntry");
        write_val(ctx, node, "c:idx", &entry.index);
        if entry.deleted {
            write_val(ctx, node, "c:delete", &true);
        } else {
            write_text_properties(ctx, node, &entry.format, None);
        }
    }

    if let Some(layout) = &legend.layout {
        let layout_node = ctx.doc.create_node("c:layout");
        ctx.visit(Some(frame), layout_node, ModelRef::Layout(layout), None, None);
        ctx.doc.append_non_empty_child_node(frame.node, layout_node);
    }

    write_val(ctx, frame.node, "c:overlay", &legend.overlay.resolved_or(false));
    write_shape_properties(ctx, frame.node, "c:spPr", &legend.shape);
    write_text_properties(ctx, frame.node, &legend.format, None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::xml::registry::VisitorRegistry;
    use crate::converters::xml::visitors::test_support::{child_names, val_at};
    use crate::models::chart_space::{Legend, LegendEntry};
    use crate::models::layout::ManualLayout;
    use crate::models::property::Property;

    #[test]
    fn test_legend_order() {
        let registry = VisitorRegistry::with_defaults();
        let mut ctx = ConversionContext::new(&registry);
        let chart = ctx.doc.create_node("c:chart");
        let legend = Legend {
            position: Property::explicit(LegendPosition::Bottom),
            entries: vec![LegendEntry {
                index: 2,
                deleted: true,
                ..LegendEntry::default()
            }],
            layout: Some(ManualLayout {
                x: Property::explicit(0.2),
                ..ManualLayout::default()
            }),
            ..Legend::default()
        };
        let node = ctx
            .visit(None, chart, ModelRef::Legend(&legend), None, None)
            .unwrap();
        assert_eq!(
            child_names(&ctx.doc, node),
            vec!["c:legendPos", "c:legendEntry", "c:layout", "c:overlay"]
        );
        assert_eq!(val_at(&ctx.doc, node, "c:legendPos"), Some("b"));
        assert_eq!(val_at(&ctx.doc, node, "c:legendEntry/c:delete"), Some("1"));
        assert_eq!(val_at(&ctx.doc, node, "c:layout/c:manualLayout/c:x"), Some("0.2"));
    }
}
