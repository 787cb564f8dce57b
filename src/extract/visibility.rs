use crate::dom::document::Document;
use crate::dom::node::{Node, NodeId};

/// Input types that can receive text directly.
const TEXTUAL_INPUT_TYPES: &[&str] = &["text", "email", "tel", "url", "search", "number"];

/// A control is a candidate iff it is one of the fillable control shapes.
/// Candidacy is about shape only; fillability is checked separately.
pub fn is_candidate(node: &Node) -> bool {
    match node.tag.as_str() {
        "textarea" | "select" => true,
        "input" => match node.input_type() {
            None => true,
            Some(t) => {
                let t = t.to_lowercase();
                TEXTUAL_INPUT_TYPES.contains(&t.as_str())
                    || t == "date"
                    || t == "radio"
                    || t == "checkbox"
            }
        },
        _ => false,
    }
}

/// Visibility/fillability test: a candidate is skipped (silently, not an
/// error) when it cannot actually receive user input on the rendered page.
pub fn is_fillable(doc: &Document, id: NodeId) -> bool {
    let Some(node) = doc.get(id) else {
        return false;
    };

    if node.disabled || node.read_only {
        return false;
    }
    if node.input_type().is_some_and(|t| t.eq_ignore_ascii_case("password")) {
        return false;
    }
    if node.box_width <= 0.0 || node.box_height <= 0.0 {
        return false;
    }
    if node.hidden {
        return false;
    }
    // display:none on a container hides the whole subtree
    doc.ancestors(id)
        .iter()
        .all(|a| doc.get(*a).is_none_or(|n| !n.hidden))
}
