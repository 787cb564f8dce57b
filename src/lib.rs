pub mod autofill;
pub mod cli;
pub mod dom;
pub mod error;
pub mod extract;
pub mod format;
pub mod inject;
pub mod matching;
pub mod trace;

pub use crate::autofill::orchestrator::{AutofillEngine, FillSummary};
pub use crate::dom::document::Document;
pub use crate::dom::node::{DispatchedEvent, Node, NodeId};
pub use crate::error::AutofillError;
pub use crate::extract::descriptor::{ControlKind, FieldDescriptor};
pub use crate::matching::matcher::FieldMatch;
pub use crate::matching::profile::ProfileData;
pub use crate::trace::sink::DiagSink;

/// Run one autofill pass with diagnostics disabled. The document is mutated
/// in place; dispatched events are left in its event log.
pub fn run_autofill(doc: &mut Document, profile: &ProfileData) -> FillSummary {
    AutofillEngine::new(DiagSink::disabled()).run(doc, profile)
}
