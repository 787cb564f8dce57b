use crate::extract::descriptor::FieldDescriptor;
use crate::matching::keywords::WELL_KNOWN_KEYS;
use crate::matching::profile::ProfileData;
use crate::matching::scorer::{MIN_CONFIDENCE, score_custom, score_well_known};
use crate::trace::event::{DiagLevel, TraceEvent};
use crate::trace::sink::DiagSink;

/// Transient result of one scoring pass: which profile key one field should
/// receive, and how confidently. At most one match per field survives.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
    /// Index into the descriptor slice the matcher was called with.
    pub field: usize,
    pub source_key: String,
    pub value: String,
    pub confidence: f32,
    pub is_custom: bool,
}

/// Score every (field, profile key) pair and keep the single best candidate
/// per field above the acceptance threshold. Pure with respect to its
/// inputs: identical fields and profile always yield identical matches.
///
/// A profile key may be matched by more than one field; that aliasing is
/// accepted behavior, not deduplicated.
pub fn match_fields(
    fields: &[FieldDescriptor],
    profile: &ProfileData,
    sink: &DiagSink,
) -> Vec<FieldMatch> {
    let mut matches = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let mut best: Option<FieldMatch> = None;

        // Well-known keys, in table order. Strict > keeps the earlier-declared
        // key on ties.
        for spec in WELL_KNOWN_KEYS {
            let Some(value) = profile.value_of(spec.key) else {
                continue;
            };
            let confidence = score_well_known(field, spec);
            if best.as_ref().is_none_or(|b| confidence > b.confidence) {
                best = Some(FieldMatch {
                    field: index,
                    source_key: spec.key.to_string(),
                    value: value.to_string(),
                    confidence,
                    is_custom: false,
                });
            }
        }

        // Custom keys only displace a well-known match by scoring strictly
        // higher; ties prefer well-known, and among customs the first in key
        // order.
        for (key, value) in profile.custom_entries() {
            let confidence = score_custom(field, key);
            if best.as_ref().is_none_or(|b| confidence > b.confidence) {
                best = Some(FieldMatch {
                    field: index,
                    source_key: key.to_string(),
                    value: value.to_string(),
                    confidence,
                    is_custom: true,
                });
            }
        }

        match best {
            Some(m) if m.confidence > MIN_CONFIDENCE => {
                sink.log(
                    &TraceEvent::new(DiagLevel::Debug, "matching", "field matched")
                        .with_field(field.display_name())
                        .with_key(&m.source_key)
                        .with_confidence(m.confidence),
                );
                matches.push(m);
            }
            _ => {
                sink.debug(
                    "matching",
                    format!("no confident match for '{}'", field.display_name()),
                );
            }
        }
    }

    sink.info("matching", format!("{} of {} fields matched", matches.len(), fields.len()));
    matches
}
