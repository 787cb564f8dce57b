use crate::dom::document::Document;
use crate::extract::descriptor::FieldDescriptor;
use crate::inject::events::{RADIO_FILL_EVENTS, dispatch_quirks, dispatch_sequence};
use crate::inject::select::resolve_option;
use crate::trace::sink::DiagSink;

/// Fill a radio group: resolve the desired value across the group's options
/// (same three tiers as a select), uncheck every sibling, check the target,
/// and dispatch events on the target radio only.
pub fn fill_radio_group(
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
            format!("no radio in '{}' resolves '{}'", field.display_name(), value),
        );
        return false;
    };
    let Some(target) = field.options[index].control else {
        return false;
    };

    for opt in &field.options {
        if let Some(ctrl) = opt.control {
            doc.set_checked(ctrl, false);
        }
    }
    if !doc.set_checked(target, true) {
        return false;
    }

    dispatch_sequence(doc, target, RADIO_FILL_EVENTS);
    dispatch_quirks(doc, target);

    doc.get(target).is_some_and(|n| n.checked)
}
