//! Conditional property copying.
//!
//! A property is copied to the output only when its predicate accepts the property's
//! provenance. Anything not copied is left to the consumer's defaults and theme.

use super::document::{Document, NodeId};
use super::units::format_double;
use crate::models::axis::{
    AxisPosition, BuiltInUnit, CrossBetween, LabelAlignment, TickLabelPosition, TickMark,
    TimeUnit,
};
use crate::models::chart_space::{BlankMode, LegendPosition};
use crate::models::chart_type::{Grouping, ScatterStyle, SizeRepresents};
use crate::models::data_labels::LabelPosition;
use crate::models::layout::{LayoutMode, LayoutTarget};
use crate::models::property::{Property, PropertyInfo};
use crate::models::series::MarkerSymbol;

// --- Predicates ---

/// Copies values the user set explicitly.
pub fn default_copy(info: PropertyInfo) -> bool {
    info.has_value && info.explicit
}

/// Copies any resolved value, explicit or not.
pub fn always_copy(info: PropertyInfo) -> bool {
    info.has_value
}

/// Copies explicit values, and any resolved value while `condition` holds.
pub fn always_copy_when(condition: bool) -> impl Fn(PropertyInfo) -> bool {
    move |info| info.has_value && (info.explicit || condition)
}

// --- Values ---

/// Conversion of a model value to the text of a schema attribute.
pub trait MarkupValue {
    fn to_markup(&self) -> String;
}

impl MarkupValue for bool {
    fn to_markup(&self) -> String {
        if *self { "1" } else { "0" }.to_string()
    }
}

impl MarkupValue for u32 {
    fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl MarkupValue for i32 {
    fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl MarkupValue for f64 {
    fn to_markup(&self) -> String {
        format_double(*self)
    }
}

impl MarkupValue for String {
    fn to_markup(&self) -> String {
        self.clone()
    }
}

impl MarkupValue for str {
    fn to_markup(&self) -> String {
        self.to_string()
    }
}

macro_rules! token_markup {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MarkupValue for $ty {
                fn to_markup(&self) -> String {
                    self.as_token().to_string()
                }
            }
        )*
    };
}

token_markup!(
    AxisPosition,
    BlankMode,
    BuiltInUnit,
    CrossBetween,
    Grouping,
    LabelAlignment,
    LabelPosition,
    LayoutMode,
    LayoutTarget,
    LegendPosition,
    MarkerSymbol,
    ScatterStyle,
    SizeRepresents,
    TickLabelPosition,
    TickMark,
    TimeUnit,
);

// --- Setters ---

/// Writes the value into the `val` attribute.
pub fn set_val<T: MarkupValue + ?Sized>(doc: &mut Document, node: NodeId, value: &T) {
    doc.set_attribute(node, "val", value.to_markup());
}

/// Writes a boolean negated, for schema flags that mean the opposite of the model
/// property (`c:delete` for a shown axis).
pub fn set_val_inverted(doc: &mut Document, node: NodeId, value: &bool) {
    doc.set_attribute(node, "val", (!*value).to_markup());
}

/// Writes the transformed value into attribute `name`.
pub fn set_attr<T>(
    name: &'static str,
    transform: impl Fn(&T) -> String,
) -> impl Fn(&mut Document, NodeId, &T) {
    move |doc, node, value| doc.set_attribute(node, name, transform(value))
}

/// Copies `property` to the element at `path` below `node` (creating it as needed)
/// when `predicate` accepts it. An empty path writes onto `node` itself.
///
/// Returns whether anything was written.
pub fn copy_value<T, S, P>(
    doc: &mut Document,
    property: &Property<T>,
    node: NodeId,
    path: &str,
    setter: S,
    predicate: P,
) -> bool
where
    S: FnOnce(&mut Document, NodeId, &T),
    P: Fn(PropertyInfo) -> bool,
{
    if !predicate(property.info()) {
        return false;
    }
    let Some(value) = property.get() else {
        return false;
    };
    let target = doc.create_child_nodes(node, path);
    setter(doc, target, value);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::xml::units::to_angle;

    fn setup() -> (Document, NodeId) {
        let mut doc = Document::new();
        let root = doc.create_node("c:barChart");
        doc.set_root(root);
        (doc, root)
    }

    #[test]
    fn test_default_copy_skips_inherited() {
        let (mut doc, root) = setup();
        let gap = Property::inherited(150_u32);
        assert!(!copy_value(&mut doc, &gap, root, "c:gapWidth", set_val, default_copy));
        assert!(doc.get_node(root, "c:gapWidth").is_none());

        let gap = Property::explicit(80_u32);
        assert!(copy_value(&mut doc, &gap, root, "c:gapWidth", set_val, default_copy));
        let node = doc.get_node(root, "c:gapWidth").unwrap();
        assert_eq!(doc.attribute(node, "val"), Some("80"));
    }

    #[test]
    fn test_always_copy_writes_defaults() {
        let (mut doc, root) = setup();
        let vary = Property::defaulted(false);
        assert!(copy_value(&mut doc, &vary, root, "c:varyColors", set_val, always_copy));
        let node = doc.get_node(root, "c:varyColors").unwrap();
        assert_eq!(doc.attribute(node, "val"), Some("0"));
        // Unset never copies.
        assert!(!copy_value(&mut doc, &Property::<bool>::unset(), root, "c:x", set_val, always_copy));
    }

    #[test]
    fn test_always_copy_when() {
        let info = Property::inherited(1_u32).info();
        assert!(!always_copy_when(false)(info));
        assert!(always_copy_when(true)(info));
        assert!(always_copy_when(false)(Property::explicit(1_u32).info()));
    }

    #[test]
    fn test_inverted_and_transformed_setters() {
        let (mut doc, root) = setup();
        copy_value(&mut doc, &Property::explicit(true), root, "c:delete", set_val_inverted, default_copy);
        let delete = doc.get_node(root, "c:delete").unwrap();
        assert_eq!(doc.attribute(delete, "val"), Some("0"));

        let angle = Property::explicit(45.0);
        copy_value(
            &mut doc,
            &angle,
            root,
            "a:lin",
            set_attr("ang", |deg: &f64| to_angle(*deg).to_string()),
            default_copy,
        );
        let lin = doc.get_node(root, "a:lin").unwrap();
        assert_eq!(doc.attribute(lin, "ang"), Some("2700000"));
    }

    #[test]
    fn test_empty_path_writes_on_node() {
        let (mut doc, root) = setup();
        copy_value(&mut doc, &Property::explicit(Grouping::Stacked), root, "", set_val, default_copy);
        assert_eq!(doc.attribute(root, "val"), Some("stacked"));
    }
}
