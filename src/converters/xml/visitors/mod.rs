//! Per-construct visitors. Each one fills the node of its frame: structural children
//! first, then scalar properties in schema order, then nested visits, then trailing
//! extension blocks.

pub mod axis;
pub mod chart_space;
pub mod chart_type;
pub mod data_labels;
pub mod layout;
pub mod legend;
pub mod marker;
pub mod plot_area;
pub mod series;
pub mod text;
pub mod title;

use super::context::ConversionContext;
use super::copy::MarkupValue;
use super::document::NodeId;

/// Appends `<tag val="..."/>` to `parent`.
pub(crate) fn write_val<T: MarkupValue + ?Sized>(
    ctx: &mut ConversionContext<'_>,
    parent: NodeId,
    tag: &str,
    value: &T,
) -> NodeId {
    let node = ctx.doc.create_child_node(parent, tag);
    ctx.doc.set_attribute(node, "val", value.to_markup());
    node
}

/// Appends an element holding `text`.
pub(crate) fn write_text_element(
    ctx: &mut ConversionContext<'_>,
    parent: NodeId,
    tag: &str,
    text: &str,
) -> NodeId {
    let node = ctx.doc.create_child_node(parent, tag);
    ctx.doc.set_text(node, text);
    node
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::converters::xml::document::{Document, NodeId};

    /// Names of the element children of `node`, in order.
    pub fn child_names(doc: &Document, node: NodeId) -> Vec<String> {
        doc.children(node)
            .iter()
            .filter_map(|child| doc.name(*child).map(str::to_string))
            .collect()
    }

    /// `val` attribute of the element at `path`.
    pub fn val_at<'d>(doc: &'d Document, node: NodeId, path: &str) -> Option<&'d str> {
        doc.get_node(node, path)
            .and_then(|found| doc.attribute(found, "val"))
    }
}
