//! Tree nodes and forest-level helpers

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::Value;
use crate::error::Result;

/// One entry of the hierarchical dataset.
///
/// A node holds arbitrary named fields (read by columns through
/// [`ValueSource::Field`](crate::table::ValueSource::Field)) plus a handful of
/// reserved attributes the engine understands. When deserialized from JSON
/// the reserved keys map to the struct fields and every other key becomes a
/// named field.
///
/// # Example
///
/// ```
/// use tabletree::model::Node;
///
/// let dir = Node::new()
///     .set("name", "src")
///     .set("size", 4096i64)
///     .child(Node::new().set("name", "lib.rs").set("size", 812i64));
///
/// assert!(dir.has_children());
/// assert_eq!(dir.get("name").and_then(|v| v.as_str()), Some("src"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Child nodes, in display order. Empty means leaf.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,

    /// Collapse state: `Some(true)` hides children, `Some(false)` shows them,
    /// `None` inherits the table default at the next render.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,

    /// If set, user gestures never change this node's collapse state.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub uncollapsible: bool,

    /// Class added to every cell rendered for this node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Class added to every cell container rendered for this node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cellclass: Option<String>,

    /// Arbitrary named fields.
    #[serde(flatten)]
    fields: HashMap<String, Value>,
}

impl Node {
    /// Creates an empty leaf node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a named field, returning the node for chaining.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Appends a child node.
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Replaces the children.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Sets the collapse state explicitly.
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }

    /// Prevents user gestures from collapsing or expanding this node.
    pub fn uncollapsible(mut self) -> Self {
        self.uncollapsible = true;
        self
    }

    /// Sets the node-level cell class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets the node-level cell container class.
    pub fn cellclass(mut self, class: impl Into<String>) -> Self {
        self.cellclass = Some(class.into());
        self
    }

    /// Reads a named field. A missing field is undefined (`None`).
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Inserts or replaces a named field in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Iterates the named fields in arbitrary order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether the node owns at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether the node's children appear in the flattened view.
    ///
    /// Only an explicit `collapsed = true` hides children.
    pub fn is_expanded(&self) -> bool {
        self.collapsed != Some(true)
    }

    /// Whether a row click on this node toggles its collapse state.
    pub fn is_collapsible(&self) -> bool {
        self.has_children() && !self.uncollapsible
    }

    /// Total number of nodes in this subtree, including the node itself.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }
}

/// Fills in missing collapse states across the whole forest.
///
/// Every node with children whose `collapsed` is unset receives `default`.
/// The walk descends into every subtree, including collapsed ones, and never
/// overwrites a state that is already set, so running it again is a no-op.
pub fn set_default_collapsed(nodes: &mut [Node], default: bool) {
    for node in nodes {
        if node.has_children() {
            if node.collapsed.is_none() {
                node.collapsed = Some(default);
            }
            set_default_collapsed(&mut node.children, default);
        }
    }
}

/// Parses a forest from a JSON array of node objects.
pub fn forest_from_json(json: &str) -> Result<Vec<Node>> {
    Ok(serde_json::from_str(json)?)
}

/// Number of nodes in the forest, visible or not.
pub fn forest_len(nodes: &[Node]) -> usize {
    nodes.iter().map(Node::subtree_len).sum()
}
