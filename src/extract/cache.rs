use std::collections::HashMap;
use std::time::{Duration, Instant};

use sha1::{Digest, Sha1};

use crate::dom::node::{Node, NodeId};

/// Default expiry for cached field info. Long enough to cover the repeated
/// passes an external mutation observer triggers on a settling page, short
/// enough that a rebuilt form is re-inspected.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

/// Labels and search text computed for one control, keyed by structural
/// fingerprint. Purely an optimization: extraction must behave identically
/// with or without cache hits.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedFieldInfo {
    pub labels: Vec<String>,
    pub search_text: String,
}

struct CacheEntry {
    stored_at: Instant,
    info: CachedFieldInfo,
}

/// Explicit cache service, constructor-injected into the extractor. Entries
/// expire after a fixed TTL and are evicted lazily on access; the
/// orchestrator additionally calls `clear_expired()` at the start of each
/// pass.
pub struct ExtractCache {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
}

impl Default for ExtractCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractCache {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn get(&mut self, key: &str) -> Option<CachedFieldInfo> {
        let expired = self
            .entries
            .get(key)
            .is_some_and(|e| e.stored_at.elapsed() > self.ttl);
        if expired {
            self.entries.remove(key);
            return None;
        }
        self.entries.get(key).map(|e| e.info.clone())
    }

    pub fn insert(&mut self, key: String, info: CachedFieldInfo) {
        self.entries.insert(
            key,
            CacheEntry {
                stored_at: Instant::now(),
                info,
            },
        );
    }

    pub fn clear_expired(&mut self) {
        let ttl = self.ttl;
        self.entries.retain(|_, e| e.stored_at.elapsed() <= ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Structural fingerprint of a control: stable across passes as long as the
/// markup identity (tag, id, name, class) and document position are
/// unchanged. Position is part of the key so that anonymous controls with
/// identical markup never share an entry.
pub fn fingerprint(id: NodeId, node: &Node) -> String {
    let mut hasher = Sha1::new();
    hasher.update(id.0.to_le_bytes());
    hasher.update(b"|");
    hasher.update(node.tag.as_bytes());
    hasher.update(b"|");
    hasher.update(node.id_attr().unwrap_or("").as_bytes());
    hasher.update(b"|");
    hasher.update(node.name_attr().unwrap_or("").as_bytes());
    hasher.update(b"|");
    hasher.update(node.class_name().as_bytes());
    format!("{:x}", hasher.finalize())
}
