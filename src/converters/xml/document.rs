//! Arena-backed output tree and its serialization.
//!
//! Nodes are created detached and attached later, so a visitor can build a subtree
//! and its caller can decide whether to keep it. Child order is the order of
//! appending; attribute order is the order of first assignment.

use std::io::Cursor;

use indexmap::IndexMap;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::error::Result;

/// Handle of a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Element {
        name: String,
        attributes: IndexMap<String, String>,
        children: Vec<NodeId>,
    },
    Text(String),
}

/// The output document. Owns every node created during a conversion, attached or not.
#[derive(Debug, Default)]
pub struct Document {
    nodes: Vec<NodeData>,
    root: Option<NodeId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached element.
    pub fn create_node(&mut self, name: &str) -> NodeId {
        self.push(NodeData::Element {
            name: name.to_string(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        })
    }

    /// Creates a detached text node.
    pub fn create_text_node(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        self.nodes.push(data);
        NodeId(self.nodes.len() - 1)
    }

    pub fn set_root(&mut self, node: NodeId) {
        self.root = Some(node);
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Element name, or `None` for text nodes.
    pub fn name(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0] {
            NodeData::Element { name, .. } => Some(name),
            NodeData::Text(_) => None,
        }
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        match &self.nodes[node.0] {
            NodeData::Element { children, .. } => children,
            NodeData::Text(_) => &[],
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[node.0] {
            NodeData::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            NodeData::Text(_) => None,
        }
    }

    /// Concatenated text of the node's direct text children.
    pub fn text(&self, node: NodeId) -> String {
        match &self.nodes[node.0] {
            NodeData::Text(text) => text.clone(),
            NodeData::Element { children, .. } => children
                .iter()
                .filter_map(|child| match &self.nodes[child.0] {
                    NodeData::Text(text) => Some(text.as_str()),
                    NodeData::Element { .. } => None,
                })
                .collect(),
        }
    }

    /// Sets (or overwrites) an attribute. Overwriting keeps the original position.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        if let NodeData::Element { attributes, .. } = &mut self.nodes[node.0] {
            attributes.insert(name.to_string(), value.into());
        }
    }

    /// Replaces the node's children with a single text node.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        let text_node = self.create_text_node(text);
        if let NodeData::Element { children, .. } = &mut self.nodes[node.0] {
            children.clear();
            children.push(text_node);
        }
    }

    /// An element is empty when it has neither attributes nor children.
    pub fn is_empty(&self, node: NodeId) -> bool {
        match &self.nodes[node.0] {
            NodeData::Element {
                attributes,
                children,
                ..
            } => attributes.is_empty() && children.is_empty(),
            NodeData::Text(_) => false,
        }
    }

    fn append(&mut self, parent: NodeId, child: NodeId) {
        if let NodeData::Element { children, .. } = &mut self.nodes[parent.0] {
            children.push(child);
        }
    }

    /// Appends `child` to `parent` when `condition` holds. Returns whether it was appended.
    pub fn append_child_node(&mut self, parent: NodeId, child: NodeId, condition: bool) -> bool {
        if condition {
            self.append(parent, child);
        }
        condition
    }

    /// Appends `child` only if it carries attributes or children.
    pub fn append_non_empty_child_node(&mut self, parent: NodeId, child: NodeId) -> bool {
        let keep = !self.is_empty(child);
        self.append_child_node(parent, child, keep)
    }

    /// Creates an element and appends it to `parent`.
    pub fn create_child_node(&mut self, parent: NodeId, name: &str) -> NodeId {
        let child = self.create_node(name);
        self.append(parent, child);
        child
    }

    /// First direct child element named `name`.
    pub fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|child| self.name(*child) == Some(name))
    }

    /// Walks a slash-delimited path below `parent`, reusing existing elements and
    /// creating missing ones. Returns the last element of the path.
    pub fn create_child_nodes(&mut self, parent: NodeId, path: &str) -> NodeId {
        let mut current = parent;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = match self.find_child(current, segment) {
                Some(existing) => existing,
                None => self.create_child_node(current, segment),
            };
        }
        current
    }

    /// Read-only counterpart of [`create_child_nodes`](Self::create_child_nodes):
    /// `None` as soon as a segment is missing.
    pub fn get_node(&self, parent: NodeId, path: &str) -> Option<NodeId> {
        path.split('/')
            .filter(|s| !s.is_empty())
            .try_fold(parent, |current, segment| self.find_child(current, segment))
    }

    // --- Serialization ---

    /// Serializes the tree below the root. `indent` is `(indent_char, indent_size)`;
    /// `None` writes compact markup. Text content is never indented.
    pub fn write(&self, indent: Option<(u8, usize)>) -> Result<String> {
        let mut writer = match indent {
            Some((ch, size)) => Writer::new_with_indent(Cursor::new(Vec::new()), ch, size),
            None => Writer::new(Cursor::new(Vec::new())),
        };
        if let Some(root) = self.root {
            self.write_node(&mut writer, root)?;
        }
        let bytes = writer.into_inner().into_inner();
        Ok(String::from_utf8(bytes)?)
    }

    fn write_node(&self, writer: &mut Writer<Cursor<Vec<u8>>>, node: NodeId) -> Result<()> {
        match &self.nodes[node.0] {
            NodeData::Text(text) => {
                writer.write_event(Event::Text(BytesText::new(text)))?;
            }
            NodeData::Element {
                name,
                attributes,
                children,
            } => {
                let mut start = BytesStart::new(name.as_str());
                for (key, value) in attributes {
                    start.push_attribute((key.as_str(), value.as_str()));
                }
                if children.is_empty() {
                    writer.write_event(Event::Empty(start))?;
                } else {
                    writer.write_event(Event::Start(start))?;
                    for child in children {
                        self.write_node(writer, *child)?;
                    }
                    writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
                }
            }
        }
        Ok(())
    }
}
