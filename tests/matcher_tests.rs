use form_autofill::dom::document::Document;
use form_autofill::extract::cache::ExtractCache;
use form_autofill::extract::extractor::extract;
use form_autofill::matching::matcher::match_fields;
use form_autofill::matching::profile::ProfileData;
use form_autofill::matching::scorer::MIN_CONFIDENCE;

use crate::common::utils::{element, input, profile, push_select, sink, with_attrs, with_text};

mod common;

fn fields_of(doc: &Document) -> Vec<form_autofill::FieldDescriptor> {
    extract(doc, &mut ExtractCache::new(), &sink())
}

// =========================================================================
// Scoring boundaries
// =========================================================================

#[test]
fn exact_name_match_scores_maximum() {
    let mut doc = Document::new();
    doc.push(input("email", "email"));

    let fields = fields_of(&doc);
    let matches = match_fields(&fields, &profile(&[("email", "a@b.com")]), &sink());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].source_key, "email");
    assert!(
        (matches[0].confidence - 1.0).abs() < f32::EPSILON,
        "Exact name match must saturate: {}",
        matches[0].confidence
    );
}

#[test]
fn substring_match_scores_strictly_below_exact() {
    let mut exact_doc = Document::new();
    exact_doc.push(input("text", "email"));
    let mut sub_doc = Document::new();
    sub_doc.push(with_attrs(
        input("text", "field7"),
        &[("placeholder", "Please provide an email address here")],
    ));

    let p = profile(&[("email", "a@b.com")]);
    let exact = match_fields(&fields_of(&exact_doc), &p, &sink());
    let sub = match_fields(&fields_of(&sub_doc), &p, &sink());

    assert_eq!(exact.len(), 1);
    assert_eq!(sub.len(), 1);
    assert!(
        sub[0].confidence < exact[0].confidence,
        "Substring evidence ({}) must stay below an exact hit ({})",
        sub[0].confidence,
        exact[0].confidence
    );
}

#[test]
fn unrecognizable_field_gets_no_match() {
    let mut doc = Document::new();
    doc.push(input("text", "field1"));

    let p = profile(&[("email", "a@b.com"), ("phone", "555")]);
    let matches = match_fields(&fields_of(&doc), &p, &sink());
    assert!(
        matches.is_empty(),
        "No recognizable keywords means no match, never a guess"
    );
}

#[test]
fn empty_profile_values_are_not_offered() {
    let mut doc = Document::new();
    doc.push(input("email", "email"));

    let p = profile(&[("email", "   ")]);
    let matches = match_fields(&fields_of(&doc), &p, &sink());
    assert!(matches.is_empty(), "Blank value is treated as absent");
}

#[test]
fn no_match_at_or_below_threshold() {
    let mut doc = Document::new();
    doc.push(input("text", "field1"));

    let mut p = ProfileData::default();
    p.set_custom("zz", "something");
    let matches = match_fields(&fields_of(&doc), &p, &sink());
    assert!(matches.is_empty(), "Confidence <= {} never fills", MIN_CONFIDENCE);
}

// =========================================================================
// Selection rules
// =========================================================================

#[test]
fn at_most_one_match_per_field() {
    let mut doc = Document::new();
    // Text mentioning both email and phone
    doc.push(with_attrs(
        input("text", "contact"),
        &[("placeholder", "email or phone number")],
    ));

    let p = profile(&[("email", "a@b.com"), ("phone", "555")]);
    let matches = match_fields(&fields_of(&doc), &p, &sink());
    assert_eq!(matches.len(), 1, "Only the best candidate survives");
}

#[test]
fn well_known_key_wins_ties_over_custom() {
    let mut doc = Document::new();
    doc.push(input("text", "gender"));

    let mut p = profile(&[("gender", "Male")]);
    p.set_custom("gender", "Other");
    let matches = match_fields(&fields_of(&doc), &p, &sink());
    assert_eq!(matches.len(), 1);
    assert!(!matches[0].is_custom, "Tie must prefer the well-known key");
    assert_eq!(matches[0].value, "Male");
}

#[test]
fn custom_key_wins_only_when_strictly_higher() {
    let mut doc = Document::new();
    doc.push(with_attrs(
        input("text", "hostel-block"),
        &[("placeholder", "Your hostel block")],
    ));

    let mut p = profile(&[("email", "a@b.com")]);
    p.set_custom("hostel block", "Q Block");
    let matches = match_fields(&fields_of(&doc), &p, &sink());
    assert_eq!(matches.len(), 1);
    assert!(matches[0].is_custom);
    assert_eq!(matches[0].value, "Q Block");
}

#[test]
fn same_profile_key_may_serve_two_fields() {
    let mut doc = Document::new();
    doc.push(input("text", "gender"));
    push_select(&mut doc, "sex", &[("", ""), ("Male", "Male"), ("Female", "Female")]);

    let p = profile(&[("gender", "Male")]);
    let matches = match_fields(&fields_of(&doc), &p, &sink());
    assert_eq!(matches.len(), 2, "Aliasing is accepted, not deduplicated");
    assert!(matches.iter().all(|m| m.source_key == "gender"));
}

// =========================================================================
// Determinism
// =========================================================================

#[test]
fn two_independent_passes_yield_identical_matches() {
    let mut doc = Document::new();
    doc.push(with_text(
        with_attrs(element("label"), &[("for", "f1")]),
        "Date of birth",
    ));
    doc.push(with_attrs(input("date", "dob"), &[("id", "f1")]));
    doc.push(input("text", "campus"));
    doc.push(input("email", "contact-email"));

    let mut p = profile(&[
        ("dateOfBirth", "2004-03-08"),
        ("campus", "VIT-AP"),
        ("email", "a@b.com"),
    ]);
    p.set_custom("club", "chess");

    let first = match_fields(&fields_of(&doc), &p, &sink());
    let second = match_fields(&fields_of(&doc), &p, &sink());
    assert_eq!(first, second, "Matching must be pure in its inputs");
}

// =========================================================================
// Portal patterns and type compatibility
// =========================================================================

#[test]
fn portal_pattern_contributes_but_never_outranks_exact() {
    let mut portal_doc = Document::new();
    portal_doc.push(with_attrs(
        input("text", "fld_330"),
        &[("placeholder", "Candidate email (official email preferred)")],
    ));
    let mut exact_doc = Document::new();
    exact_doc.push(input("text", "email"));

    let p = profile(&[("email", "a@b.com")]);
    let portal = match_fields(&fields_of(&portal_doc), &p, &sink());
    let exact = match_fields(&fields_of(&exact_doc), &p, &sink());

    assert_eq!(portal.len(), 1, "Portal phrasing alone should still match");
    assert!(portal[0].confidence < exact[0].confidence);
}

#[test]
fn number_input_matches_numeric_keys() {
    let mut doc = Document::new();
    doc.push(input("number", "cgpa"));

    let p = profile(&[("cgpa", "8.9")]);
    let matches = match_fields(&fields_of(&doc), &p, &sink());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].source_key, "cgpa");
    assert!(
        (matches[0].confidence - 1.0).abs() < f32::EPSILON,
        "Exact name plus compatible type must saturate: {}",
        matches[0].confidence
    );
}

#[test]
fn input_type_bonus_separates_equal_text() {
    let mut doc = Document::new();
    doc.push(with_attrs(
        input("tel", "contact-no"),
        &[("placeholder", "phone")],
    ));

    let p = profile(&[("phone", "555-0100")]);
    let matches = match_fields(&fields_of(&doc), &p, &sink());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].source_key, "phone");
}
