use super::text::{title_default_rotation, write_text_properties};
use super::write_val;
use crate::converters::xml::context::{ConversionContext, Frame, ModelRef};
use crate::converters::xml::document::NodeId;
use crate::converters::xml::fill::write_shape_properties;
use crate::converters::xml::registry::Kind;
use crate::models::text::{StringReference, TitleText};

/// Writes `c:strRef` with a one-point string cache.
pub(crate) fn write_string_reference(
    ctx: &mut ConversionContext<'_>,
    parent: NodeId,
    reference: &StringReference,
) {
    let str_ref = ctx.doc.create_child_node(parent, "c:strRef");
    let f = ctx.doc.create_child_node(str_ref, "c:f");
    ctx.doc.set_text(f, &reference.formula);
    if let Some(cached) = &reference.cached {
        let cache = ctx.doc.create_child_node(str_ref, "c:strCache");
        write_val(ctx, cache, "c:ptCount", &1_u32);
        let pt = ctx.doc.create_child_node(cache, "c:pt");
        ctx.doc.set_attribute(pt, "idx", "0");
        let v = ctx.doc.create_child_node(pt, "c:v");
        ctx.doc.set_text(v, cached);
    }
}

/// Visitor for chart and axis titles (`c:title`).
///
/// Rich text carries its own formatting inside `c:tx`; titles without rich text get
/// their formatting from a `c:txPr` block instead.
pub fn visit_title(ctx: &mut ConversionContext<'_>, frame: &Frame<'_>) {
    let title = match frame.model {
        ModelRef::ChartTitle(title) | ModelRef::AxisTitle(title) => title,
        _ => {
            ctx.model_mismatch(Kind::ChartTitle, &frame.model);
            return;
        }
    };

    let mut rich = false;
    match &title.text {
        Some(TitleText::Rich(text)) => {
            let tx = ctx.doc.create_node("c:tx");
            ctx.visit(Some(frame), tx, ModelRef::Text(text), Some("c:rich"), None);
            rich = ctx.doc.append_non_empty_child_node(frame.node, tx);
        }
        Some(TitleText::Reference(reference)) => {
            let tx = ctx.doc.create_child_node(frame.node, "c:tx");
            write_string_reference(ctx, tx, reference);
        }
        None => {}
    }

    if let Some(layout) = &title.layout {
        let layout_node = ctx.doc.create_node("c:layout");
        ctx.visit(Some(frame), layout_node, ModelRef::Layout(layout), None, None);
        ctx.doc.append_non_empty_child_node(frame.node, layout_node);
    }

    write_val(ctx, frame.node, "c:overlay", &title.overlay.resolved_or(false));
    write_shape_properties(ctx, frame.node, "c:spPr", &title.shape);
    if !rich {
        let rotation = title_default_rotation(frame);
        write_text_properties(ctx, frame.node, &title.format, rotation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::xml::registry::VisitorRegistry;
    use crate::converters::xml::visitors::test_support::{child_names, val_at};
    use crate::models::text::Title;

    #[test]
    fn test_rich_title() {
        let registry = VisitorRegistry::with_defaults();
        let mut ctx = ConversionContext::new(&registry);
        let chart = ctx.doc.create_node("c:chart");
        let title = Title::plain("Sales");
        let node = ctx
            .visit(None, chart, ModelRef::ChartTitle(&title), None, None)
            .unwrap();
        assert_eq!(child_names(&ctx.doc, node), vec!["c:tx", "c:overlay"]);
        assert!(ctx.doc.get_node(node, "c:tx/c:rich/a:p/a:r/a:t").is_some());
        assert_eq!(val_at(&ctx.doc, node, "c:overlay"), Some("0"));
    }

    fn silent_visitor(_ctx: &mut ConversionContext<'_>, _frame: &Frame<'_>) {}

    #[test]
    fn test_empty_rich_text_leaves_no_tx() {
        let mut registry = VisitorRegistry::with_defaults();
        registry.register(Kind::Text, silent_visitor);
        let mut ctx = ConversionContext::new(&registry);
        let chart = ctx.doc.create_node("c:chart");
        let title = Title::plain("Sales");
        let node = ctx
            .visit(None, chart, ModelRef::ChartTitle(&title), None, None)
            .unwrap();
        assert_eq!(child_names(&ctx.doc, node), vec!["c:overlay"]);
    }

    #[test]
    fn test_reference_title_caches_value() {
        let registry = VisitorRegistry::with_defaults();
        let mut ctx = ConversionContext::new(&registry);
        let chart = ctx.doc.create_node("c:chart");
        let title = Title {
            text: Some(TitleText::Reference(StringReference {
                formula: "Sheet1!$A$1".to_string(),
                cached: Some("Quarterly".to_string()),
            })),
            ..Title::default()
        };
        let node = ctx
            .visit(None, chart, ModelRef::ChartTitle(&title), None, None)
            .unwrap();
        let v = ctx
            .doc
            .get_node(node, "c:tx/c:strRef/c:strCache/c:pt/c:v")
            .unwrap();
        assert_eq!(ctx.doc.text(v), "Quarterly");
        assert_eq!(val_at(&ctx.doc, node, "c:tx/c:strRef/c:strCache/c:ptCount"), Some("1"));
    }
}
