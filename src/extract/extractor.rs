use std::collections::HashSet;

use crate::dom::document::Document;
use crate::dom::node::NodeId;
use crate::extract::cache::{CachedFieldInfo, ExtractCache, fingerprint};
use crate::extract::descriptor::{
    ControlKind, FieldDescriptor, FieldOption, RawAttributes, build_search_text,
};
use crate::extract::labels::{discover_labels, radio_group_labels};
use crate::extract::visibility::{is_candidate, is_fillable};
use crate::trace::sink::DiagSink;

/// Walk the document and build one descriptor per fillable control, with
/// radio buttons sharing a name collapsed into a single radio-group
/// descriptor. Re-running re-scans the live document; the sequence is not
/// restartable.
pub fn extract(doc: &Document, cache: &mut ExtractCache, sink: &DiagSink) -> Vec<FieldDescriptor> {
    let mut descriptors = Vec::new();
    let mut grouped_radios: HashSet<NodeId> = HashSet::new();

    for id in doc.node_ids() {
        let Some(node) = doc.get(id) else {
            continue;
        };
        if !is_candidate(node) {
            continue;
        }
        if grouped_radios.contains(&id) {
            continue;
        }
        if !is_fillable(doc, id) {
            continue;
        }

        let kind = control_kind(doc, id);
        let descriptor = match kind {
            ControlKind::RadioGroup => build_radio_group(doc, id, &mut grouped_radios, cache),
            ControlKind::Select => build_select(doc, id, cache),
            _ => build_simple(doc, id, kind, cache),
        };

        if let Some(d) = descriptor {
            sink.debug("extracting", format!("found {:?} field '{}'", d.kind, d.display_name()));
            descriptors.push(d);
        }
    }

    sink.info("extracting", format!("{} fillable fields detected", descriptors.len()));
    descriptors
}

fn control_kind(doc: &Document, id: NodeId) -> ControlKind {
    let Some(node) = doc.get(id) else {
        return ControlKind::Text;
    };
    match node.tag.as_str() {
        "textarea" => ControlKind::TextArea,
        "select" => ControlKind::Select,
        _ => match node.input_type().map(str::to_lowercase).as_deref() {
            Some("date") => ControlKind::Date,
            Some("radio") => ControlKind::RadioGroup,
            Some("checkbox") => ControlKind::Checkbox,
            _ => ControlKind::Text,
        },
    }
}

/// Cached label/search-text lookup; recomputes and stores on miss.
fn field_info(doc: &Document, id: NodeId, cache: &mut ExtractCache) -> CachedFieldInfo {
    let Some(node) = doc.get(id) else {
        return CachedFieldInfo {
            labels: vec![],
            search_text: String::new(),
        };
    };
    let key = fingerprint(id, node);
    if let Some(info) = cache.get(&key) {
        return info;
    }

    let labels = discover_labels(doc, id);
    let raw = RawAttributes::capture(node);
    let info = CachedFieldInfo {
        search_text: build_search_text(&raw, &labels),
        labels,
    };
    cache.insert(key, info.clone());
    info
}

fn build_simple(
    doc: &Document,
    id: NodeId,
    kind: ControlKind,
    cache: &mut ExtractCache,
) -> Option<FieldDescriptor> {
    let node = doc.get(id)?;
    let raw = RawAttributes::capture(node);
    let info = field_info(doc, id, cache);
    Some(FieldDescriptor {
        handle: id,
        kind,
        raw,
        labels: info.labels,
        search_text: info.search_text,
        options: vec![],
    })
}

fn build_select(doc: &Document, id: NodeId, cache: &mut ExtractCache) -> Option<FieldDescriptor> {
    let mut descriptor = build_simple(doc, id, ControlKind::Select, cache)?;
    // Options are rebuilt fresh every pass; pages repopulate them via AJAX.
    descriptor.options = doc
        .children(id)
        .filter(|c| doc.get(*c).is_some_and(|n| n.tag == "option"))
        .filter_map(|c| {
            let node = doc.get(c)?;
            let display = node.text.as_deref().unwrap_or("").trim().to_string();
            let value = node
                .attr("value")
                .map(str::to_string)
                .unwrap_or_else(|| display.clone());
            Some(FieldOption {
                value,
                display_text: display,
                control: Some(c),
            })
        })
        .collect();
    Some(descriptor)
}

/// Collapse every fillable radio sharing this control's group name into one
/// descriptor. A radio without a name forms a group of its own.
fn build_radio_group(
    doc: &Document,
    first: NodeId,
    grouped: &mut HashSet<NodeId>,
    cache: &mut ExtractCache,
) -> Option<FieldDescriptor> {
    let group_name = doc.get(first)?.name_attr().map(str::to_string);

    let members: Vec<NodeId> = match &group_name {
        Some(name) => doc
            .node_ids()
            .filter(|id| {
                doc.get(*id).is_some_and(|n| {
                    n.tag == "input"
                        && n.input_type().is_some_and(|t| t.eq_ignore_ascii_case("radio"))
                        && n.name_attr() == Some(name)
                })
            })
            .filter(|id| is_fillable(doc, *id))
            .collect(),
        None => vec![first],
    };

    if members.is_empty() {
        return None;
    }
    grouped.extend(&members);

    // Options are always rebuilt from the live members; only the derived
    // label/search text is cacheable (under the first member's identity).
    let mut member_label_sets = Vec::with_capacity(members.len());
    let mut options = Vec::new();
    for member in &members {
        let member_labels = discover_labels(doc, *member);
        let node = doc.get(*member)?;
        let value = node.attr("value").unwrap_or("on").to_string();
        let display = member_labels.first().cloned().unwrap_or_default();
        options.push(FieldOption {
            value,
            display_text: display,
            control: Some(*member),
        });
        member_label_sets.push(member_labels);
    }

    let raw = RawAttributes::capture(doc.get(members[0])?);
    let key = fingerprint(members[0], doc.get(members[0])?);
    let (labels, search_text) = match cache.get(&key) {
        Some(info) => (info.labels, info.search_text),
        None => {
            let mut labels = Vec::new();
            for set in member_label_sets {
                for l in set {
                    if !labels.contains(&l) {
                        labels.push(l);
                    }
                }
            }
            for l in radio_group_labels(doc, members[0]) {
                if !labels.contains(&l) {
                    labels.push(l);
                }
            }
            let search_text = build_search_text(&raw, &labels);
            cache.insert(
                key,
                CachedFieldInfo {
                    labels: labels.clone(),
                    search_text: search_text.clone(),
                },
            );
            (labels, search_text)
        }
    };

    Some(FieldDescriptor {
        handle: members[0],
        kind: ControlKind::RadioGroup,
        raw,
        labels,
        search_text,
        options,
    })
}
