use crate::converters::xml::context::{ConversionContext, Frame, ModelRef};
use crate::converters::xml::copy::{copy_value, default_copy, set_val};
use crate::converters::xml::registry::Kind;

/// Visitor for a manual layout (`c:manualLayout`). Only explicit values are written;
/// a layout with none of them set leaves the element empty and it is dropped.
pub fn visit_manual_layout(ctx: &mut ConversionContext<'_>, frame: &Frame<'_>) {
    let ModelRef::Layout(layout) = frame.model else {
        ctx.model_mismatch(Kind::Layout, &frame.model);
        return;
    };
    let node = frame.node;
    let doc = &mut ctx.doc;

    // Only the plot area distinguishes inner and outer rectangles.
    if matches!(frame.parent_model(), ModelRef::PlotArea(_)) {
        copy_value(doc, &layout.target, node, "c:layoutTarget", set_val, default_copy);
    }
    copy_value(doc, &layout.x_mode, node, "c:xMode", set_val, default_copy);
    copy_value(doc, &layout.y_mode, node, "c:yMode", set_val, default_copy);
    copy_value(doc, &layout.x, node, "c:x", set_val, default_copy);
    copy_value(doc, &layout.y, node, "c:y", set_val, default_copy);
    copy_value(doc, &layout.width, node, "c:w", set_val, default_copy);
    copy_value(doc, &layout.height, node, "c:h", set_val, default_copy);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::xml::registry::VisitorRegistry;
    use crate::converters::xml::visitors::test_support::{child_names, val_at};
    use crate::models::layout::{LayoutMode, LayoutTarget, ManualLayout};
    use crate::models::property::Property;

    #[test]
    fn test_manual_layout_order() {
        let registry = VisitorRegistry::with_defaults();
        let mut ctx = ConversionContext::new(&registry);
        let layout_node = ctx.doc.create_node("c:layout");
        let layout = ManualLayout {
            target: Property::explicit(LayoutTarget::Inner),
            x_mode: Property::explicit(LayoutMode::Edge),
            x: Property::explicit(0.1),
            y: Property::explicit(0.05),
            width: Property::explicit(0.8),
            height: Property::inherited(0.7),
            ..ManualLayout::default()
        };
        let node = ctx
            .visit(None, layout_node, ModelRef::Layout(&layout), None, None)
            .unwrap();
        // Outside a plot area the target is not written.
        assert_eq!(child_names(&ctx.doc, node), vec!["c:xMode", "c:x", "c:y", "c:w"]);
        assert_eq!(val_at(&ctx.doc, node, "c:w"), Some("0.8"));
        assert_eq!(val_at(&ctx.doc, node, "c:xMode"), Some("edge"));
    }

    #[test]
    fn test_empty_layout_is_dropped() {
        let registry = VisitorRegistry::with_defaults();
        let mut ctx = ConversionContext::new(&registry);
        let layout_node = ctx.doc.create_node("c:layout");
        let layout = ManualLayout::default();
        assert!(ctx
            .visit(None, layout_node, ModelRef::Layout(&layout), None, None)
            .is_none());
        assert!(ctx.doc.is_empty(layout_node));
    }
}
