use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dom::document::Document;
use crate::dom::node::{DispatchedEvent, Node, NodeId};
use crate::error::AutofillError;

/// Flat JSON record for one element, as emitted by the extraction bridge.
/// Field names are camelCase on the wire; `parent` is the index of an
/// earlier record in the same array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub tag: String,
    #[serde(default)]
    pub parent: Option<usize>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, rename = "readOnly")]
    pub read_only: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default, rename = "boxWidth")]
    pub box_width: f32,
    #[serde(default, rename = "boxHeight")]
    pub box_height: f32,
    #[serde(default, rename = "valueLocked")]
    pub value_locked: bool,
    #[serde(default, rename = "frameworkMarkers")]
    pub framework_markers: Vec<String>,
}

/// One full page capture: flat DOM array plus, when re-emitted after a fill
/// pass, the events the injector dispatched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: String,
    pub dom: Vec<NodeRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<DispatchedEvent>,
}

impl Document {
    /// Parse a bridge snapshot into a live document. Parent indices must
    /// point at an earlier record, which also rules out cycles.
    pub fn from_snapshot(snapshot: DocumentSnapshot) -> Result<Self, AutofillError> {
        let mut doc = Document::new();
        doc.url = snapshot.url;
        doc.title = snapshot.title;

        for (index, record) in snapshot.dom.into_iter().enumerate() {
            if let Some(parent) = record.parent {
                if parent >= index {
                    return Err(AutofillError::SnapshotStructure(format!(
                        "node {} has parent index {} (parents must precede children)",
                        index, parent
                    )));
                }
            }
            doc.push(Node {
                tag: record.tag.to_lowercase(),
                parent: record.parent.map(NodeId),
                attributes: record.attributes,
                text: record.text,
                value: record.value,
                checked: record.checked,
                selected: record.selected,
                disabled: record.disabled,
                read_only: record.read_only,
                hidden: record.hidden,
                box_width: record.box_width,
                box_height: record.box_height,
                value_locked: record.value_locked,
                framework_markers: record.framework_markers,
            });
        }

        Ok(doc)
    }

    pub fn from_snapshot_json(json: &str) -> Result<Self, AutofillError> {
        let snapshot: DocumentSnapshot =
            serde_json::from_str(json).map_err(|e| AutofillError::SnapshotParse {
                context: "document snapshot".into(),
                source: e,
            })?;
        Self::from_snapshot(snapshot)
    }

    /// Re-emit the (possibly mutated) document plus the event log, so the
    /// bridge can replay the writes against the real page.
    pub fn to_snapshot(&self) -> DocumentSnapshot {
        let dom = self
            .node_ids()
            .filter_map(|id| self.get(id))
            .map(|node| NodeRecord {
                tag: node.tag.clone(),
                parent: node.parent.map(|p| p.0),
                attributes: node.attributes.clone(),
                text: node.text.clone(),
                value: node.value.clone(),
                checked: node.checked,
                selected: node.selected,
                disabled: node.disabled,
                read_only: node.read_only,
                hidden: node.hidden,
                box_width: node.box_width,
                box_height: node.box_height,
                value_locked: node.value_locked,
                framework_markers: node.framework_markers.clone(),
            })
            .collect();

        DocumentSnapshot {
            url: self.url.clone(),
            title: self.title.clone(),
            dom,
            events: self.events().to_vec(),
        }
    }
}
