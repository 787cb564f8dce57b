use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// One diagnostic record, serialized as a JSONL line by the sink.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub level: DiagLevel,
    pub phase: String,
    pub message: String,

    pub field: Option<String>,
    pub key: Option<String>,
    pub confidence: Option<f32>,
}

impl TraceEvent {
    pub fn new(level: DiagLevel, phase: &str, message: impl ToString) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            level,
            phase: phase.to_string(),
            message: message.to_string(),
            field: None,
            key: None,
            confidence: None,
        }
    }

    pub fn with_field(mut self, field: impl ToString) -> Self {
        self.field = Some(field.to_string());
        self
    }

    pub fn with_key(mut self, key: impl ToString) -> Self {
        self.key = Some(key.to_string());
        self
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }
}
