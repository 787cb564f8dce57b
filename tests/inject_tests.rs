use form_autofill::dom::document::Document;
use form_autofill::extract::cache::ExtractCache;
use form_autofill::extract::extractor::extract;
use form_autofill::inject::events::{
    RADIO_FILL_EVENTS, SELECT_RETRY_EVENTS, TEXT_FILL_EVENTS,
};
use form_autofill::inject::injector::fill_field;
use form_autofill::inject::select::resolve_option;

use crate::common::utils::{control, input, push_radio_group, push_select, sink, with_attrs};

mod common;

fn fields_of(doc: &Document) -> Vec<form_autofill::FieldDescriptor> {
    extract(doc, &mut ExtractCache::new(), &sink())
}

// =========================================================================
// Text fill
// =========================================================================

#[test]
fn text_fill_writes_value_and_event_superset() {
    let mut doc = Document::new();
    let id = doc.push(input("text", "fullName"));
    let field = fields_of(&doc).remove(0);

    assert!(fill_field(&mut doc, &field, "Jane Doe", &sink()));

    let node = doc.get(id).unwrap();
    assert_eq!(node.value, "Jane Doe");
    assert_eq!(
        node.attr("value"),
        Some("Jane Doe"),
        "Value attribute mirrors the property"
    );
    assert_eq!(doc.events_for(id), TEXT_FILL_EVENTS.to_vec());
}

#[test]
fn empty_value_is_a_noop_failure() {
    let mut doc = Document::new();
    let id = doc.push(input("text", "fullName"));
    let field = fields_of(&doc).remove(0);

    assert!(!fill_field(&mut doc, &field, "", &sink()));
    assert!(doc.events_for(id).is_empty(), "Nothing dispatched on a no-op");
}

#[test]
fn locked_value_fails_without_panicking() {
    let mut doc = Document::new();
    let mut node = input("text", "email");
    node.value_locked = true;
    let id = doc.push(node);
    let field = fields_of(&doc).remove(0);

    assert!(!fill_field(&mut doc, &field, "a@b.com", &sink()));
    assert_eq!(doc.get(id).unwrap().value, "");
}

#[test]
fn framework_quirks_add_best_effort_events() {
    let mut doc = Document::new();
    let mut node = input("text", "fullName");
    node.framework_markers = vec!["reactFiber".to_string()];
    let id = doc.push(node);
    let field = fields_of(&doc).remove(0);

    assert!(fill_field(&mut doc, &field, "Jane", &sink()));
    let events = doc.events_for(id);
    assert_eq!(
        events.len(),
        TEXT_FILL_EVENTS.len() + 1,
        "One extra input event for the react marker: {:?}",
        events
    );
    assert_eq!(events.last(), Some(&"input"));
}

// =========================================================================
// Select fill (scenarios A, B, C)
// =========================================================================

#[test]
fn select_resolves_exact_option() {
    let mut doc = Document::new();
    let select = push_select(
        &mut doc,
        "gender",
        &[("", ""), ("Male", "Male"), ("Female", "Female")],
    );
    let field = fields_of(&doc).remove(0);

    assert!(fill_field(&mut doc, &field, "Male", &sink()));
    assert_eq!(doc.get(select).unwrap().value, "Male");

    let selected: Vec<bool> = doc
        .children(select)
        .map(|c| doc.get(c).unwrap().selected)
        .collect();
    assert_eq!(selected, vec![false, true, false]);
}

#[test]
fn select_resolves_campus_via_synonym_pattern() {
    let mut doc = Document::new();
    let select = push_select(
        &mut doc,
        "campus",
        &[("", ""), ("amaravathi", "amaravathi"), ("chennai", "chennai")],
    );
    let field = fields_of(&doc).remove(0);

    assert!(fill_field(&mut doc, &field, "VIT-AP", &sink()));
    assert_eq!(doc.get(select).unwrap().value, "amaravathi");
}

#[test]
fn select_never_picks_an_unrelated_option() {
    let mut doc = Document::new();
    let select = push_select(
        &mut doc,
        "campus",
        &[("IIT Delhi", "IIT Delhi"), ("NIT Trichy", "NIT Trichy")],
    );
    let field = fields_of(&doc).remove(0);

    assert!(!fill_field(&mut doc, &field, "VIT-AP", &sink()));
    assert_eq!(doc.get(select).unwrap().value, "", "Nothing selected");
    assert!(
        doc.children(select).all(|c| !doc.get(c).unwrap().selected),
        "No option may be selected on failure"
    );
}

#[test]
fn select_with_zero_options_fails() {
    let mut doc = Document::new();
    doc.push(with_attrs(control("select"), &[("name", "campus")]));
    let field = fields_of(&doc).remove(0);

    assert!(!fill_field(&mut doc, &field, "VIT-AP", &sink()));
}

#[test]
fn select_retries_through_selected_index_when_value_is_frozen() {
    let mut doc = Document::new();
    let select = push_select(
        &mut doc,
        "gender",
        &[("", ""), ("Male", "Male"), ("Female", "Female")],
    );
    doc.get_mut(select).unwrap().value_locked = true;
    let field = fields_of(&doc).remove(0);

    assert!(
        fill_field(&mut doc, &field, "Male", &sink()),
        "selectedIndex retry must rescue a frozen value property"
    );
    assert_eq!(doc.get(select).unwrap().value, "Male");

    let events = doc.events_for(select);
    assert!(
        events.ends_with(SELECT_RETRY_EVENTS),
        "Retry dispatches the minimal change+input pair: {:?}",
        events
    );
}

// =========================================================================
// Radio fill (scenario D)
// =========================================================================

#[test]
fn radio_group_resolves_short_code_via_pattern_table() {
    let mut doc = Document::new();
    let radios = push_radio_group(&mut doc, "sex", &["M", "F"]);
    let field = fields_of(&doc).remove(0);

    assert!(fill_field(&mut doc, &field, "Male", &sink()));
    assert!(doc.get(radios[0]).unwrap().checked, "M radio checked");
    assert!(!doc.get(radios[1]).unwrap().checked, "Sibling unchecked");
    assert_eq!(doc.events_for(radios[0]), RADIO_FILL_EVENTS.to_vec());
    assert!(
        doc.events_for(radios[1]).is_empty(),
        "Events go to the target radio only"
    );
}

#[test]
fn radio_group_unchecks_previous_choice() {
    let mut doc = Document::new();
    let radios = push_radio_group(&mut doc, "sex", &["M", "F"]);
    doc.set_checked(radios[1], true);
    let field = fields_of(&doc).remove(0);

    assert!(fill_field(&mut doc, &field, "Male", &sink()));
    assert!(doc.get(radios[0]).unwrap().checked);
    assert!(!doc.get(radios[1]).unwrap().checked);
}

#[test]
fn radio_group_with_no_related_option_fails() {
    let mut doc = Document::new();
    let radios = push_radio_group(&mut doc, "color", &["red", "blue"]);
    let field = fields_of(&doc).remove(0);

    assert!(!fill_field(&mut doc, &field, "green", &sink()));
    assert!(radios.iter().all(|r| !doc.get(*r).unwrap().checked));
}

// =========================================================================
// Checkbox fill
// =========================================================================

#[test]
fn checkbox_accepts_explicit_booleans_only() {
    let mut doc = Document::new();
    let id = doc.push(input("checkbox", "terms"));
    let field = fields_of(&doc).remove(0);

    assert!(fill_field(&mut doc, &field, "yes", &sink()));
    assert!(doc.get(id).unwrap().checked);

    assert!(fill_field(&mut doc, &field, "no", &sink()));
    assert!(!doc.get(id).unwrap().checked);

    assert!(!fill_field(&mut doc, &field, "maybe", &sink()));
}

// =========================================================================
// Option resolution tiers
// =========================================================================

#[test]
fn exact_resolution_beats_synonym_containment() {
    let mut doc = Document::new();
    push_select(
        &mut doc,
        "gender",
        &[("Female", "Female"), ("Male", "Male")],
    );
    let field = fields_of(&doc).remove(0);

    // "female" contains "male"; equality across the group must win.
    assert_eq!(resolve_option(&field.options, "Male"), Some(1));
    assert_eq!(resolve_option(&field.options, "Female"), Some(0));
}

#[test]
fn generic_substring_is_the_last_resort() {
    let mut doc = Document::new();
    push_select(
        &mut doc,
        "degree",
        &[("", ""), ("btech-cse", "B.Tech Computer Science")],
    );
    let field = fields_of(&doc).remove(0);

    assert_eq!(resolve_option(&field.options, "Computer Science"), Some(1));
    assert_eq!(resolve_option(&field.options, "Mechanical"), None);
}
