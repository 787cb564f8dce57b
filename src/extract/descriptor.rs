use crate::dom::node::{Node, NodeId};

/// Closed set of fillable control shapes. The kind is decided once when the
/// descriptor is built; every later stage dispatches on it instead of
/// re-inspecting tag/type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    TextArea,
    Select,
    RadioGroup,
    Date,
    Checkbox,
}

/// Raw attribute values captured from the control, empty string when absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAttributes {
    pub name: String,
    pub id: String,
    pub placeholder: String,
    pub aria_label: String,
    pub class_name: String,
    pub input_type: String,
    /// Values of data-* attributes, in attribute-name order.
    pub data_values: Vec<String>,
}

impl RawAttributes {
    pub fn capture(node: &Node) -> Self {
        Self {
            name: node.name_attr().unwrap_or("").to_string(),
            id: node.id_attr().unwrap_or("").to_string(),
            placeholder: node.attr("placeholder").unwrap_or("").to_string(),
            aria_label: node.attr("aria-label").unwrap_or("").to_string(),
            class_name: node.class_name().to_string(),
            input_type: node.input_type().unwrap_or("").to_lowercase(),
            data_values: node.data_values(),
        }
    }
}

/// One selectable choice of a select or radio group. For radio groups the
/// option additionally owns the handle of its specific radio control.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOption {
    pub value: String,
    pub display_text: String,
    pub control: Option<NodeId>,
}

/// Normalized record describing one fillable control (or one radio group).
///
/// `search_text` is the only thing the matcher ever sees for this field; it
/// is derived once at build time and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub handle: NodeId,
    pub kind: ControlKind,
    pub raw: RawAttributes,
    /// Discovered labels, first-found-wins order, all retained.
    pub labels: Vec<String>,
    pub search_text: String,
    pub options: Vec<FieldOption>,
}

impl FieldDescriptor {
    /// Short human-readable handle for diagnostics.
    pub fn display_name(&self) -> &str {
        if !self.raw.name.is_empty() {
            &self.raw.name
        } else if !self.raw.id.is_empty() {
            &self.raw.id
        } else {
            &self.raw.placeholder
        }
    }
}

/// Lowercase a string and map every non-alphanumeric run to a single space.
pub fn normalize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for c in raw.chars() {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            for lower in c.to_lowercase() {
                out.push(lower);
            }
        } else {
            pending_space = true;
        }
    }
    out
}

/// Join the attribute values and labels into the normalized search text the
/// matcher scores against.
pub fn build_search_text(raw: &RawAttributes, labels: &[String]) -> String {
    let mut parts: Vec<&str> = vec![
        &raw.name,
        &raw.id,
        &raw.placeholder,
        &raw.class_name,
    ];
    for v in &raw.data_values {
        parts.push(v);
    }
    for l in labels {
        parts.push(l);
    }
    normalize_text(&parts.join(" "))
}
