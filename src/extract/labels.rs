use crate::dom::document::Document;
use crate::dom::node::NodeId;

/// Discover human-readable labels for a control, in precedence order:
/// (1) `<label for=id>`, (2) wrapping `<label>`, (3) aria-label,
/// (4) question-container heading heuristic. All non-empty discoveries are
/// kept (first-found-wins ordering is for display; matching searches the
/// union), exact duplicates dropped.
pub fn discover_labels(doc: &Document, id: NodeId) -> Vec<String> {
    let mut labels = Vec::new();

    if let Some(text) = bound_label(doc, id) {
        labels.push(text);
    }
    if let Some(text) = wrapping_label(doc, id) {
        labels.push(text);
    }
    if let Some(text) = doc.get(id).and_then(|n| n.attr("aria-label")) {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            labels.push(trimmed.to_string());
        }
    }
    if let Some(text) = question_container_heading(doc, id) {
        labels.push(text);
    }

    dedupe(labels)
}

/// Extra labels for a radio group: `<legend>` of an enclosing `<fieldset>`,
/// or the heading of a radiogroup-role/class container.
pub fn radio_group_labels(doc: &Document, member: NodeId) -> Vec<String> {
    let mut labels = Vec::new();

    for ancestor in doc.ancestors(member) {
        let Some(node) = doc.get(ancestor) else {
            continue;
        };

        if node.tag == "fieldset" {
            for child in doc.descendants(ancestor) {
                if doc.get(child).is_some_and(|n| n.tag == "legend") {
                    let text = doc.text_of(child);
                    if !text.is_empty() {
                        labels.push(text);
                    }
                }
            }
        }

        let is_group_container =
            node.role() == Some("radiogroup") || node.class_contains("radio-group");
        if is_group_container {
            if let Some(text) = container_heading(doc, ancestor) {
                labels.push(text);
            }
        }
    }

    dedupe(labels)
}

/// `<label for=X>` bound by the control's id attribute.
fn bound_label(doc: &Document, id: NodeId) -> Option<String> {
    let control_id = doc.get(id)?.id_attr()?;
    if control_id.is_empty() {
        return None;
    }
    for candidate in doc.node_ids() {
        let node = doc.get(candidate)?;
        if node.tag == "label" && node.attr("for") == Some(control_id) {
            let text = doc.text_of(candidate);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Nearest ancestor `<label>` wrapping the control.
fn wrapping_label(doc: &Document, id: NodeId) -> Option<String> {
    for ancestor in doc.ancestors(id) {
        if doc.get(ancestor).is_some_and(|n| n.tag == "label") {
            let text = doc.text_of(ancestor);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Question-container pattern: walk up to the nearest ancestor carrying a
/// list-item/question role, then use the text of a heading-role or
/// title-class element inside it.
fn question_container_heading(doc: &Document, id: NodeId) -> Option<String> {
    for ancestor in doc.ancestors(id) {
        let node = doc.get(ancestor)?;
        let is_container = node.tag == "li"
            || node.role() == Some("listitem")
            || node.class_contains("question")
            || node.class_contains("form-group");
        if is_container {
            return container_heading(doc, ancestor);
        }
    }
    None
}

/// First heading-like element inside a container: role=heading, h1-h6 tag,
/// or a title-class element.
fn container_heading(doc: &Document, container: NodeId) -> Option<String> {
    for child in doc.descendants(container) {
        let Some(node) = doc.get(child) else {
            continue;
        };
        let is_heading = node.role() == Some("heading")
            || matches!(node.tag.as_str(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
            || node.class_contains("title");
        if is_heading {
            let text = doc.text_of(child);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

fn dedupe(labels: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        if !out.contains(&label) {
            out.push(label);
        }
    }
    out
}
