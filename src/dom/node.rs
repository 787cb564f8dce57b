use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Index of a node inside its `Document` arena. Handles are only valid for
/// the document that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// One element captured from the host page.
///
/// Attributes carry everything the extraction bridge saw on the element
/// (id, name, class, placeholder, aria-label, type, data-*). Control state
/// (value/checked/selected) is kept separate because it is mutable, while
/// attributes are treated as a snapshot of the markup.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub tag: String,
    pub parent: Option<NodeId>,
    pub attributes: BTreeMap<String, String>,
    /// Direct text content of this element (not including descendants).
    pub text: Option<String>,

    // ---- Mutable control state ----
    pub value: String,
    pub checked: bool,
    pub selected: bool,

    // ---- Captured rendering / interactivity state ----
    pub disabled: bool,
    pub read_only: bool,
    pub hidden: bool,
    pub box_width: f32,
    pub box_height: f32,

    /// Host page froze the value property; direct value writes fail.
    pub value_locked: bool,
    /// Framework markers the bridge found on the element (e.g. "reactFiber").
    pub framework_markers: Vec<String>,
}

impl Node {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            ..Self::default()
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn id_attr(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn name_attr(&self) -> Option<&str> {
        self.attr("name")
    }

    pub fn class_name(&self) -> &str {
        self.attr("class").unwrap_or("")
    }

    pub fn input_type(&self) -> Option<&str> {
        self.attr("type")
    }

    pub fn role(&self) -> Option<&str> {
        self.attr("role")
    }

    /// Case-insensitive check against the element's class list.
    pub fn class_contains(&self, needle: &str) -> bool {
        self.class_name().to_lowercase().contains(needle)
    }

    /// Values of all data-* attributes, in attribute-name order.
    pub fn data_values(&self) -> Vec<String> {
        self.attributes
            .iter()
            .filter(|(k, _)| k.starts_with("data-"))
            .map(|(_, v)| v.clone())
            .collect()
    }
}

/// One event the injector dispatched on a node, in dispatch order. The event
/// log is what host-page listeners would have observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchedEvent {
    pub target: NodeId,
    pub name: String,
}
