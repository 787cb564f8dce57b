use crate::dom::document::Document;
use crate::extract::descriptor::FieldDescriptor;
use crate::inject::events::{TEXT_FILL_EVENTS, dispatch_quirks, dispatch_sequence};
use crate::trace::sink::DiagSink;

/// Fill a text-like control (text input, textarea, native date input whose
/// value is already formatted). Returns success only when the post-dispatch
/// read-back equals the assigned value; never panics across the boundary.
pub fn fill_text_field(
    doc: &mut Document,
    field: &FieldDescriptor,
    value: &str,
    sink: &DiagSink,
) -> bool {
    if value.is_empty() {
        return false;
    }
    let target = field.handle;
    if doc.get(target).is_none() {
        return false;
    }

    // Clear first, then assign; some frameworks only notice a transition.
    if !doc.set_value(target, "") || !doc.set_value(target, value) {
        sink.warn(
            "injecting",
            format!("value write rejected on '{}'", field.display_name()),
        );
        return false;
    }
    // Mirror into the attribute for frameworks that read markup, not state.
    doc.set_attr(target, "value", value);

    dispatch_sequence(doc, target, TEXT_FILL_EVENTS);
    dispatch_quirks(doc, target);

    let stuck = doc.get(target).is_some_and(|n| n.value == value);
    if !stuck {
        sink.warn(
            "injecting",
            format!("read-back mismatch on '{}'", field.display_name()),
        );
    }
    stuck
}

/// Checkbox fill: the profile value must parse as an explicit boolean;
/// anything else is a failure, not a guess.
pub fn fill_checkbox_field(
    doc: &mut Document,
    field: &FieldDescriptor,
    value: &str,
    sink: &DiagSink,
) -> bool {
    let desired = match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => true,
        "false" | "no" | "0" | "off" => false,
        _ => {
            sink.debug(
                "injecting",
                format!("'{}' is not a checkbox value for '{}'", value, field.display_name()),
            );
            return false;
        }
    };

    let target = field.handle;
    if !doc.set_checked(target, desired) {
        return false;
    }
    dispatch_sequence(doc, target, crate::inject::events::CHECKBOX_FILL_EVENTS);
    dispatch_quirks(doc, target);

    doc.get(target).is_some_and(|n| n.checked == desired)
}
