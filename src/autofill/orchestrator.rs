use crate::dom::document::Document;
use crate::extract::cache::ExtractCache;
use crate::extract::extractor::extract;
use crate::format::date::format_value;
use crate::inject::injector::fill_field;
use crate::matching::keywords::is_date_key;
use crate::matching::matcher::match_fields;
use crate::matching::profile::ProfileData;
use crate::trace::sink::DiagSink;

/// Pass phases, traced to the diagnostics sink. One run walks
/// Idle → Extracting → Matching → Injecting → Reporting → Idle; an empty
/// outcome at any stage short-circuits to Reporting without being an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Extracting,
    Matching,
    Injecting,
    Reporting,
}

/// Outcome of one autofill pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FillSummary {
    pub filled_count: usize,
    pub attempted_count: usize,
    pub message: String,
}

impl FillSummary {
    fn empty(message: &str) -> Self {
        Self {
            filled_count: 0,
            attempted_count: 0,
            message: message.to_string(),
        }
    }
}

/// Sequences extractor → matcher → formatter → injector over one document.
/// Holds no state across runs except the short-TTL extraction cache, which
/// is swept at the start of every pass.
pub struct AutofillEngine {
    cache: ExtractCache,
    sink: DiagSink,
}

impl AutofillEngine {
    pub fn new(sink: DiagSink) -> Self {
        Self {
            cache: ExtractCache::new(),
            sink,
        }
    }

    pub fn with_cache(cache: ExtractCache, sink: DiagSink) -> Self {
        Self { cache, sink }
    }

    /// Run one autofill pass. The document is mutated in place; dispatched
    /// events land in its event log. Injection failures are tallied, logged,
    /// and never abort the remaining fields.
    pub fn run(&mut self, doc: &mut Document, profile: &ProfileData) -> FillSummary {
        self.trace_phase(Phase::Extracting);
        self.cache.clear_expired();

        let fields = extract(doc, &mut self.cache, &self.sink);
        if fields.is_empty() {
            self.trace_phase(Phase::Reporting);
            self.trace_phase(Phase::Idle);
            return FillSummary::empty("no fillable fields found");
        }

        self.trace_phase(Phase::Matching);
        let matches = match_fields(&fields, profile, &self.sink);
        if matches.is_empty() {
            self.trace_phase(Phase::Reporting);
            self.trace_phase(Phase::Idle);
            return FillSummary::empty("no fields matched the profile");
        }

        self.trace_phase(Phase::Injecting);
        let mut filled = 0usize;
        for m in &matches {
            let field = &fields[m.field];
            let is_date = !m.is_custom && is_date_key(&m.source_key);
            let value = format_value(field, is_date, &m.value);
            if fill_field(doc, field, &value, &self.sink) {
                filled += 1;
            } else {
                self.sink.warn(
                    "injecting",
                    format!("failed to fill '{}'", field.display_name()),
                );
            }
        }

        self.trace_phase(Phase::Reporting);
        let summary = FillSummary {
            filled_count: filled,
            attempted_count: matches.len(),
            message: format!("filled {} of {} matched fields", filled, matches.len()),
        };
        self.sink.info("reporting", &summary.message);
        self.trace_phase(Phase::Idle);
        summary
    }

    fn trace_phase(&self, phase: Phase) {
        self.sink.debug("phase", format!("{:?}", phase));
    }
}
