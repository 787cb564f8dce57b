#![allow(dead_code)]

use form_autofill::dom::document::Document;
use form_autofill::dom::node::{Node, NodeId};
use form_autofill::matching::profile::ProfileData;
use form_autofill::trace::sink::DiagSink;

pub fn sink() -> DiagSink {
    DiagSink::disabled()
}

/// A bare element with no rendered box (container/label material).
pub fn element(tag: &str) -> Node {
    Node::new(tag)
}

/// A rendered, enabled control.
pub fn control(tag: &str) -> Node {
    let mut n = Node::new(tag);
    n.box_width = 120.0;
    n.box_height = 24.0;
    n
}

pub fn with_attrs(mut node: Node, attrs: &[(&str, &str)]) -> Node {
    for (k, v) in attrs {
        node.attributes.insert(k.to_string(), v.to_string());
    }
    node
}

pub fn with_text(mut node: Node, text: &str) -> Node {
    node.text = Some(text.to_string());
    node
}

/// Visible `<input>` with a type and name.
pub fn input(input_type: &str, name: &str) -> Node {
    with_attrs(control("input"), &[("type", input_type), ("name", name)])
}

/// Push a `<select name=..>` with `(value, display)` options; returns the
/// select handle.
pub fn push_select(doc: &mut Document, name: &str, options: &[(&str, &str)]) -> NodeId {
    let select = doc.push(with_attrs(control("select"), &[("name", name)]));
    for (value, display) in options {
        let mut opt = with_text(with_attrs(element("option"), &[("value", value)]), display);
        opt.parent = Some(select);
        doc.push(opt);
    }
    select
}

/// Push a radio group; returns the radio handles in order.
pub fn push_radio_group(doc: &mut Document, name: &str, values: &[&str]) -> Vec<NodeId> {
    values
        .iter()
        .map(|value| {
            doc.push(with_attrs(
                control("input"),
                &[("type", "radio"), ("name", name), ("value", value)],
            ))
        })
        .collect()
}

pub fn profile(entries: &[(&str, &str)]) -> ProfileData {
    let mut p = ProfileData::default();
    for (k, v) in entries {
        p.set(k, v);
    }
    p
}
