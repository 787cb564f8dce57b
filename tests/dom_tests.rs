use form_autofill::dom::document::Document;
use form_autofill::dom::node::NodeId;
use form_autofill::error::AutofillError;

use crate::common::utils::{control, element, push_select, with_attrs, with_text};

mod common;

// =========================================================================
// Snapshot ingestion
// =========================================================================

#[test]
fn snapshot_parses_into_document() {
    let json = r#"{
        "url": "https://portal.example/apply",
        "title": "Application",
        "dom": [
            { "tag": "FORM" },
            { "tag": "input", "parent": 0,
              "attributes": { "type": "text", "name": "email" },
              "boxWidth": 200.0, "boxHeight": 30.0 }
        ]
    }"#;

    let doc = Document::from_snapshot_json(json).expect("snapshot should parse");
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.title, "Application");

    let form = doc.get(NodeId(0)).unwrap();
    assert_eq!(form.tag, "form", "Tags are lowercased on ingest");

    let input = doc.get(NodeId(1)).unwrap();
    assert_eq!(input.parent, Some(NodeId(0)));
    assert_eq!(input.name_attr(), Some("email"));
}

#[test]
fn snapshot_rejects_forward_parent_index() {
    let json = r#"{ "dom": [ { "tag": "input", "parent": 5 } ] }"#;
    let err = Document::from_snapshot_json(json).unwrap_err();
    assert!(
        matches!(err, AutofillError::SnapshotStructure(_)),
        "Expected structure error, got: {}",
        err
    );
}

#[test]
fn snapshot_rejects_bad_json() {
    let err = Document::from_snapshot_json("{ not json").unwrap_err();
    assert!(matches!(err, AutofillError::SnapshotParse { .. }));
}

#[test]
fn snapshot_roundtrip_preserves_mutations_and_events() {
    let mut doc = Document::new();
    let id = doc.push(control("input"));
    doc.set_value(id, "hello");
    doc.dispatch(id, "input");

    let snapshot = doc.to_snapshot();
    assert_eq!(snapshot.dom[0].value, "hello");
    assert_eq!(snapshot.events.len(), 1);
    assert_eq!(snapshot.events[0].name, "input");
}

// =========================================================================
// Traversal and text
// =========================================================================

#[test]
fn ancestors_walk_nearest_first() {
    let mut doc = Document::new();
    let outer = doc.push(element("div"));
    let mut inner = element("label");
    inner.parent = Some(outer);
    let inner = doc.push(inner);
    let mut input = control("input");
    input.parent = Some(inner);
    let input = doc.push(input);

    assert_eq!(doc.ancestors(input), vec![inner, outer]);
}

#[test]
fn text_of_joins_descendant_text() {
    let mut doc = Document::new();
    let label = doc.push(with_text(element("label"), "Full"));
    let mut span = with_text(element("span"), "  Name  ");
    span.parent = Some(label);
    doc.push(span);

    assert_eq!(doc.text_of(label), "Full Name");
}

// =========================================================================
// Mutation primitives
// =========================================================================

#[test]
fn set_value_respects_lock() {
    let mut doc = Document::new();
    let mut node = control("input");
    node.value_locked = true;
    let id = doc.push(node);

    assert!(!doc.set_value(id, "x"), "Locked value must reject writes");
    assert_eq!(doc.get(id).unwrap().value, "");
}

#[test]
fn dispatch_logs_in_order() {
    let mut doc = Document::new();
    let id = doc.push(control("input"));
    doc.dispatch(id, "focus");
    doc.dispatch(id, "input");
    doc.dispatch(id, "blur");

    assert_eq!(doc.events_for(id), vec!["focus", "input", "blur"]);
}

#[test]
fn dispatch_on_missing_node_is_not_logged() {
    let mut doc = Document::new();
    assert!(!doc.dispatch(NodeId(42), "click"));
    assert!(doc.events().is_empty());
}

#[test]
fn selected_index_assignment_updates_value_despite_lock() {
    let mut doc = Document::new();
    let select = push_select(&mut doc, "campus", &[("", ""), ("vellore", "Vellore")]);
    doc.get_mut(select).unwrap().value_locked = true;

    assert!(!doc.set_value(select, "vellore"), "Direct write is frozen");
    assert!(doc.set_selected_index(select, 1), "Index path still works");
    assert_eq!(doc.get(select).unwrap().value, "vellore");
}

#[test]
fn selected_index_out_of_range_fails() {
    let mut doc = Document::new();
    let select = doc.push(with_attrs(control("select"), &[("name", "x")]));
    assert!(!doc.set_selected_index(select, 0), "No options, no index");
}
