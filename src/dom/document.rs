use crate::dom::node::{DispatchedEvent, Node, NodeId};

/// A mutable, synchronously-inspectable copy of the host page's DOM.
///
/// Nodes live in an arena and are addressed by `NodeId`. Every mutation the
/// injector performs goes through this type, and every DOM event it raises is
/// appended to the ordered event log so the bridge (or a test) can observe
/// exactly what a host-page listener would have seen.
#[derive(Debug, Default)]
pub struct Document {
    pub url: Option<String>,
    pub title: String,
    nodes: Vec<Node>,
    events: Vec<DispatchedEvent>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and return its handle. The parent link, if any, must
    /// refer to an already-pushed node.
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// All node handles in document order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Direct children of a node, in document order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, n)| n.parent == Some(id))
            .map(|(i, _)| NodeId(i))
    }

    /// Ancestors of a node, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.get(id).and_then(|n| n.parent);
        while let Some(p) = current {
            out.push(p);
            current = self.get(p).and_then(|n| n.parent);
        }
        out
    }

    /// All descendants of a node, in document order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut frontier = vec![id];
        while let Some(next) = frontier.pop() {
            for child in self.children(next) {
                out.push(child);
                frontier.push(child);
            }
        }
        out.sort_by_key(|n| n.0);
        out
    }

    /// Visible text of a node and its descendants, whitespace-joined.
    pub fn text_of(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        if let Some(t) = self.get(id).and_then(|n| n.text.as_deref()) {
            parts.push(t.trim().to_string());
        }
        for d in self.descendants(id) {
            if let Some(t) = self.get(d).and_then(|n| n.text.as_deref()) {
                parts.push(t.trim().to_string());
            }
        }
        parts.retain(|p| !p.is_empty());
        parts.join(" ")
    }

    // ------------------------------------------------------------------
    // Mutation primitives
    // ------------------------------------------------------------------

    /// Assign the value property. Returns false when the node is missing or
    /// the host page froze the property (`value_locked`).
    pub fn set_value(&mut self, id: NodeId, value: &str) -> bool {
        match self.get_mut(id) {
            Some(node) if !node.value_locked => {
                node.value = value.to_string();
                true
            }
            _ => false,
        }
    }

    /// Mirror a value into the markup attribute map, for frameworks that read
    /// the attribute rather than the property.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.attributes.insert(name.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    pub fn set_checked(&mut self, id: NodeId, checked: bool) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.checked = checked;
                true
            }
            None => false,
        }
    }

    pub fn set_selected(&mut self, id: NodeId, selected: bool) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Direct selectedIndex assignment on a select element: marks the nth
    /// option child selected and updates the select's value from it. This
    /// path is not subject to `value_locked` (hosts freeze the value setter,
    /// not the index property), which is what makes it usable as a retry.
    pub fn set_selected_index(&mut self, select: NodeId, index: usize) -> bool {
        let options: Vec<NodeId> = self
            .children(select)
            .filter(|c| self.get(*c).is_some_and(|n| n.tag == "option"))
            .collect();
        let Some(&target) = options.get(index) else {
            return false;
        };
        for opt in &options {
            if let Some(n) = self.get_mut(*opt) {
                n.selected = false;
            }
        }
        let value = match self.get_mut(target) {
            Some(n) => {
                n.selected = true;
                n.attr("value")
                    .map(str::to_string)
                    .or_else(|| n.text.clone())
                    .unwrap_or_default()
            }
            None => return false,
        };
        if let Some(n) = self.get_mut(select) {
            n.value = value;
            true
        } else {
            false
        }
    }

    // ------------------------------------------------------------------
    // Event dispatch
    // ------------------------------------------------------------------

    /// Record an event as dispatched on a node. Returns false for a missing
    /// target; nothing is logged in that case.
    pub fn dispatch(&mut self, target: NodeId, name: &str) -> bool {
        if self.get(target).is_none() {
            return false;
        }
        self.events.push(DispatchedEvent {
            target,
            name: name.to_string(),
        });
        true
    }

    pub fn events(&self) -> &[DispatchedEvent] {
        &self.events
    }

    /// Event names dispatched on one node, in order.
    pub fn events_for(&self, target: NodeId) -> Vec<&str> {
        self.events
            .iter()
            .filter(|e| e.target == target)
            .map(|e| e.name.as_str())
            .collect()
    }
}
