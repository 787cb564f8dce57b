use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

use crate::trace::event::{DiagLevel, TraceEvent};

/// Injected diagnostics sink. Events at or above `min_level` are written as
/// JSONL to the configured output; a disabled sink drops everything. Logging
/// is a side effect only and never fails the caller.
pub struct DiagSink {
    min_level: DiagLevel,
    out: Option<Mutex<Box<dyn Write + Send>>>,
}

impl DiagSink {
    /// A sink that discards every event.
    pub fn disabled() -> Self {
        Self {
            min_level: DiagLevel::Error,
            out: None,
        }
    }

    pub fn stderr(min_level: DiagLevel) -> Self {
        Self {
            min_level,
            out: Some(Mutex::new(Box::new(std::io::stderr()))),
        }
    }

    /// Append to a JSONL file; falls back to a disabled sink if the file
    /// cannot be opened.
    pub fn file(path: &str, min_level: DiagLevel) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => Self {
                min_level,
                out: Some(Mutex::new(Box::new(f))),
            },
            Err(e) => {
                eprintln!("Warning: could not open trace file '{}': {}", path, e);
                Self::disabled()
            }
        }
    }

    pub fn log(&self, event: &TraceEvent) {
        let out = match &self.out {
            Some(o) if event.level >= self.min_level => o,
            _ => return,
        };

        let json = match serde_json::to_string(event) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Warning: failed to serialize trace event: {}", e);
                return;
            }
        };

        let mut writer = match out.lock() {
            Ok(w) => w,
            Err(e) => {
                eprintln!("Warning: trace sink lock poisoned: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(writer, "{}", json) {
            eprintln!("Warning: failed to write trace event: {}", e);
        }
    }

    pub fn debug(&self, phase: &str, message: impl ToString) {
        self.log(&TraceEvent::new(DiagLevel::Debug, phase, message));
    }

    pub fn info(&self, phase: &str, message: impl ToString) {
        self.log(&TraceEvent::new(DiagLevel::Info, phase, message));
    }

    pub fn warn(&self, phase: &str, message: impl ToString) {
        self.log(&TraceEvent::new(DiagLevel::Warn, phase, message));
    }

    pub fn error(&self, phase: &str, message: impl ToString) {
        self.log(&TraceEvent::new(DiagLevel::Error, phase, message));
    }
}
