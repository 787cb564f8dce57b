use crate::dom::document::Document;
use crate::extract::descriptor::{FieldDescriptor, FieldOption, normalize_text};
use crate::inject::events::{SELECT_FILL_EVENTS, SELECT_RETRY_EVENTS, dispatch_quirks, dispatch_sequence};
use crate::trace::sink::DiagSink;

/// Curated synonym groups for two semantic value families that appear with
/// wildly different spellings across forms: gender choices and campus /
/// institution names. Patterns are stored normalized. Within a group, a
/// two-character-or-shorter pattern only matches an option exactly; longer
/// patterns also match by containment.
pub const VALUE_SYNONYMS: &[&[&str]] = &[
    // gender
    &["male", "m", "man", "boy"],
    &["female", "f", "woman", "girl"],
    &["other", "o", "non binary", "prefer not to say"],
    // campus / institution
    &["vit ap", "vitap", "amaravathi", "amravati", "ap", "andhra pradesh"],
    &["vit vellore", "vellore"],
    &["vit chennai", "chennai"],
    &["vit bhopal", "bhopal"],
];

/// Resolve the option a desired value should map to, or None when no option
/// is related — an unrelated option is never selected.
///
/// Tiers, in order: (a) exact case-insensitive equality against option value
/// or display text; (b) curated synonym-group patterns; (c) generic
/// substring overlap.
pub fn resolve_option(options: &[FieldOption], desired: &str) -> Option<usize> {
    let desired_norm = normalize_text(desired);
    if desired_norm.is_empty() {
        return None;
    }

    // (a) exact
    for (i, opt) in options.iter().enumerate() {
        if option_texts(opt).any(|t| t == desired_norm) {
            return Some(i);
        }
    }

    // (b) synonym group containing the desired value. Equality across the
    // whole group is tried before containment so that e.g. "Male" never
    // lands on a "Female" option through the "male" substring.
    if let Some(group) = synonym_group(&desired_norm) {
        for (i, opt) in options.iter().enumerate() {
            if option_texts(opt).any(|t| group.iter().any(|p| t == *p)) {
                return Some(i);
            }
        }
        for (i, opt) in options.iter().enumerate() {
            if option_texts(opt).any(|t| group.iter().any(|p| pattern_matches(p, &t))) {
                return Some(i);
            }
        }
    }

    // (c) substring overlap
    for (i, opt) in options.iter().enumerate() {
        for text in option_texts(opt) {
            if text.contains(&desired_norm) || (text.len() >= 3 && desired_norm.contains(&text)) {
                return Some(i);
            }
        }
    }

    None
}

fn option_texts(opt: &FieldOption) -> impl Iterator<Item = String> {
    [normalize_text(&opt.value), normalize_text(&opt.display_text)]
        .into_iter()
        .filter(|t| !t.is_empty())
}

fn synonym_group(desired_norm: &str) -> Option<&'static [&'static str]> {
    VALUE_SYNONYMS
        .iter()
        .find(|group| group.iter().any(|p| *p == desired_norm))
        .copied()
}

fn pattern_matches(pattern: &str, option_text: &str) -> bool {
    if pattern.len() <= 2 {
        option_text == pattern
    } else {
        option_text == pattern || option_text.contains(pattern)
    }
}

/// Fill a single-choice select. On resolution: deselect every other option,
/// select the target, fire the select event superset, verify by read-back,
/// and retry once through direct selectedIndex assignment before giving up.
pub fn fill_select_field(
    doc: &mut Document,
    field: &FieldDescriptor,
    value: &str,
    sink: &DiagSink,
) -> bool {
    if value.is_empty() || field.options.is_empty() {
        return false;
    }
    let Some(index) = resolve_option(&field.options, value) else {
        sink.debug(
            "injecting",
            format!("no option of '{}' resolves '{}'", field.display_name(), value),
        );
        return false;
    };
    let target_value = field.options[index].value.clone();
    let select = field.handle;

    for opt in &field.options {
        if let Some(ctrl) = opt.control {
            doc.set_selected(ctrl, false);
        }
    }
    if let Some(ctrl) = field.options[index].control {
        doc.set_selected(ctrl, true);
    }

    let wrote = doc.set_value(select, &target_value);
    dispatch_sequence(doc, select, SELECT_FILL_EVENTS);
    dispatch_quirks(doc, select);

    if wrote && doc.get(select).is_some_and(|n| n.value == target_value) {
        return true;
    }

    // Retry: selectedIndex assignment reaches frameworks that intercept the
    // value property.
    sink.debug(
        "injecting",
        format!("retrying '{}' via selectedIndex", field.display_name()),
    );
    if !doc.set_selected_index(select, index) {
        return false;
    }
    dispatch_sequence(doc, select, SELECT_RETRY_EVENTS);

    doc.get(select).is_some_and(|n| n.value == target_value)
}
