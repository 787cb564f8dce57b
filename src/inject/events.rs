use crate::dom::document::Document;
use crate::dom::node::NodeId;

// Ordered event sequences per control kind. Deliberately redundant: one host
// framework listens on `input`, another only reacts to `change`, a third
// needs a click/mousedown pair before it treats the control as touched. The
// injector cannot know which is present, so it fires the superset.

pub const TEXT_FILL_EVENTS: &[&str] = &["focus", "input", "change", "keydown", "keyup", "blur"];

pub const SELECT_FILL_EVENTS: &[&str] = &[
    "mousedown", "click", "input", "change", "focusin", "focusout", "mouseup", "keydown", "keyup",
    "blur",
];

/// Minimal sequence for the selectedIndex retry path.
pub const SELECT_RETRY_EVENTS: &[&str] = &["change", "input"];

pub const RADIO_FILL_EVENTS: &[&str] = &["focus", "click", "change", "input", "blur"];

pub const CHECKBOX_FILL_EVENTS: &[&str] = &["focus", "click", "change", "input", "blur"];

/// A known framework quirk: when the bridge saw this marker on the control,
/// the framework wants these extra events after the base sequence. The list
/// is closed on purpose; open-ended internal-property sniffing is too
/// version-fragile to carry.
pub struct FrameworkQuirk {
    pub marker: &'static str,
    pub extra_events: &'static [&'static str],
}

pub const FRAMEWORK_QUIRKS: &[FrameworkQuirk] = &[
    FrameworkQuirk {
        marker: "reactFiber",
        extra_events: &["input"],
    },
    FrameworkQuirk {
        marker: "ngModel",
        extra_events: &["input", "blur"],
    },
    FrameworkQuirk {
        marker: "vueModel",
        extra_events: &["change"],
    },
];

pub fn dispatch_sequence(doc: &mut Document, target: NodeId, events: &[&str]) {
    for name in events {
        doc.dispatch(target, name);
    }
}

/// Fire any quirk events the control's markers call for. Best-effort: the
/// outcome never affects the base sequence's success.
pub fn dispatch_quirks(doc: &mut Document, target: NodeId) {
    let markers = match doc.get(target) {
        Some(node) => node.framework_markers.clone(),
        None => return,
    };
    for quirk in FRAMEWORK_QUIRKS {
        if markers.iter().any(|m| m == quirk.marker) {
            dispatch_sequence(doc, target, quirk.extra_events);
        }
    }
}
