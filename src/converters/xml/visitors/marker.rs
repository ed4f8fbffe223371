use crate::converters::xml::context::{ConversionContext, Frame, ModelRef};
use crate::converters::xml::copy::{copy_value, default_copy, set_val};
use crate::converters::xml::fill::write_shape_properties;
use crate::converters::xml::registry::Kind;

/// Visitor for series and data point markers (`c:marker`).
pub fn visit_marker(ctx: &mut ConversionContext<'_>, frame: &Frame<'_>) {
    let ModelRef::Marker(marker) = frame.model else {
        ctx.model_mismatch(Kind::Marker, &frame.model);
        return;
    };
    copy_value(&mut ctx.doc, &marker.symbol, frame.node, "c:symbol", set_val, default_copy);
    copy_value(
        &mut ctx.doc,
        &marker.size,
        frame.node,
        "c:size",
        |doc, node, size: &u32| doc.set_attribute(node, "val", (*size).clamp(2, 72).to_string()),
        default_copy,
    );
    write_shape_properties(ctx, frame.node, "c:spPr", &marker.shape);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::xml::registry::VisitorRegistry;
    use crate::converters::xml::visitors::test_support::{child_names, val_at};
    use crate::models::property::Property;
    use crate::models::series::{Marker, MarkerSymbol};

    #[test]
    fn test_marker_symbol_and_size() {
        let registry = VisitorRegistry::with_defaults();
        let mut ctx = ConversionContext::new(&registry);
        let ser = ctx.doc.create_node("c:ser");
        let marker = Marker {
            symbol: Property::explicit(MarkerSymbol::Diamond),
            size: Property::explicit(100),
            ..Marker::default()
        };
        let node = ctx
            .visit(None, ser, ModelRef::Marker(&marker), None, None)
            .unwrap();
        assert_eq!(child_names(&ctx.doc, node), vec!["c:symbol", "c:size"]);
        assert_eq!(val_at(&ctx.doc, node, "c:symbol"), Some("diamond"));
        assert_eq!(val_at(&ctx.doc, node, "c:size"), Some("72"));
    }

    #[test]
    fn test_inherited_marker_is_dropped() {
        let registry = VisitorRegistry::with_defaults();
        let mut ctx = ConversionContext::new(&registry);
        let ser = ctx.doc.create_node("c:ser");
        let marker = Marker {
            symbol: Property::inherited(MarkerSymbol::Circle),
            ..Marker::default()
        };
        assert!(ctx
            .visit(None, ser, ModelRef::Marker(&marker), None, None)
            .is_none());
    }
}
