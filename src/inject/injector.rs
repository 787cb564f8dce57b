use crate::dom::document::Document;
use crate::extract::descriptor::{ControlKind, FieldDescriptor};
use crate::inject::radio::fill_radio_group;
use crate::inject::select::fill_select_field;
use crate::inject::text::{fill_checkbox_field, fill_text_field};
use crate::trace::sink::DiagSink;

/// Write one already-formatted value into one field. Dispatch is decided by
/// the descriptor's kind, fixed at extraction time. Every failure mode is a
/// `false` return; nothing propagates an error across this boundary, because
/// one hostile control must never abort the rest of the pass.
pub fn fill_field(
    doc: &mut Document,
    field: &FieldDescriptor,
    value: &str,
    sink: &DiagSink,
) -> bool {
    match field.kind {
        ControlKind::Text | ControlKind::TextArea => fill_text_field(doc, field, value, sink),
        // Native date inputs take the ISO value through the text path.
        ControlKind::Date => fill_text_field(doc, field, value, sink),
        ControlKind::Select => fill_select_field(doc, field, value, sink),
        ControlKind::RadioGroup => fill_radio_group(doc, field, value, sink),
        ControlKind::Checkbox => fill_checkbox_field(doc, field, value, sink),
    }
}
