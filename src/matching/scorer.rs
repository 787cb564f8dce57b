use crate::extract::descriptor::{ControlKind, FieldDescriptor, normalize_text};
use crate::matching::keywords::{KeySpec, portal_patterns};

// Scoring constants. An exact name/id keyword hit alone saturates the scale;
// every other signal is capped so that their sum stays strictly below it.
pub const FULL_KEYWORD_WEIGHT: f32 = 10.0;
pub const SATURATION: f32 = 10.0;
pub const SUBSTRING_WEIGHT_PER_CHAR: f32 = 0.45;
pub const SUBSTRING_CAP: f32 = 7.0;
pub const PORTAL_BONUS: f32 = 1.5;
pub const PORTAL_CAP: f32 = 2.0;
pub const TYPE_BONUS: f32 = 0.5;

/// Below or at this confidence a field stays unfilled rather than receiving
/// a low-confidence guess.
pub const MIN_CONFIDENCE: f32 = 0.1;

/// Confidence of one (field, well-known key) pair, in [0, 1].
pub fn score_well_known(field: &FieldDescriptor, spec: &KeySpec) -> f32 {
    let mut score = keyword_score(field, spec.keywords);

    let mut portal = 0.0f32;
    for pattern in portal_patterns(spec.key) {
        if field.search_text.contains(pattern) {
            portal += PORTAL_BONUS;
        }
    }
    score += portal.min(PORTAL_CAP);

    if type_compatible(field, spec) {
        score += TYPE_BONUS;
    }

    (score / SATURATION).clamp(0.0, 1.0)
}

/// Confidence of one (field, custom key) pair: the custom key's own text is
/// the only keyword it has.
pub fn score_custom(field: &FieldDescriptor, key: &str) -> f32 {
    let keyword = normalize_text(key);
    if keyword.is_empty() {
        return 0.0;
    }
    let score = keyword_score(field, &[keyword.as_str()]);
    (score / SATURATION).clamp(0.0, 1.0)
}

/// Accumulate keyword evidence: exact equality with the control's name or id
/// carries full weight; a mere substring occurrence in the search text is
/// weighted by keyword length so longer, more specific keywords dominate.
/// Substring contributions are capped below full weight in total.
fn keyword_score(field: &FieldDescriptor, keywords: &[&str]) -> f32 {
    let name = normalize_text(&field.raw.name);
    let id = normalize_text(&field.raw.id);

    let mut full = 0.0f32;
    let mut substring = 0.0f32;
    for keyword in keywords {
        if (!name.is_empty() && name == *keyword) || (!id.is_empty() && id == *keyword) {
            full = FULL_KEYWORD_WEIGHT;
        } else if field.search_text.contains(keyword) {
            substring += keyword.len() as f32 * SUBSTRING_WEIGHT_PER_CHAR;
        }
    }
    full + substring.min(SUBSTRING_CAP)
}

fn type_compatible(field: &FieldDescriptor, spec: &KeySpec) -> bool {
    match field.kind {
        ControlKind::Date => spec.is_date,
        ControlKind::Text => {
            let t = if field.raw.input_type.is_empty() {
                "text"
            } else {
                field.raw.input_type.as_str()
            };
            // The flat bonus only rewards a *specific* type agreement; every
            // key is writable into a plain text box anyway.
            t != "text" && spec.input_types.contains(&t)
        }
        _ => false,
    }
}
