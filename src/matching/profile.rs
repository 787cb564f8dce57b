use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Caller-supplied profile: well-known keys in the flat map, arbitrary
/// user-defined keys under `customFields`. The core never validates or
/// normalizes these values; that is the storage collaborator's job.
///
/// BTreeMap keeps iteration deterministic, so the same profile always
/// produces the same matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileData {
    #[serde(default, rename = "customFields", skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_fields: BTreeMap<String, String>,

    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl ProfileData {
    /// Value for a well-known key; empty/absent values are "not offered".
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Non-empty custom entries, in key order.
    pub fn custom_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.custom_fields
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.fields.insert(key.to_string(), value.to_string());
    }

    pub fn set_custom(&mut self, key: &str, value: &str) {
        self.custom_fields.insert(key.to_string(), value.to_string());
    }
}
