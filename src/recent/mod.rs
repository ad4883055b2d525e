mod storage;

use std::path::PathBuf;

use crate::error::StorageUnavailable;
use storage::ConfigDocument;

/// Maximum number of entries kept in the recent list.
pub const RECENT_CAPACITY: usize = 10;

/// Ordered most-recently-used list of media references (file paths or
/// URLs), persisted to a JSON config file after every mutation.
///
/// Invariants, held after every mutation: no duplicate entries, at most
/// [`RECENT_CAPACITY`] entries, most recently recorded reference at
/// index 0. References are compared as exact strings; the store is
/// content-agnostic and does not distinguish paths from URLs.
pub struct RecentItems {
    entries: Vec<String>,
    path: Option<PathBuf>,
}

impl RecentItems {
    /// Load the list persisted at `path`. A missing or malformed file
    /// yields an empty list; this never fails the caller.
    pub fn load(path: PathBuf) -> Self {
        let doc = storage::read_document(&path);
        Self {
            entries: sanitize(doc.recent_items),
            path: Some(path),
        }
    }

    /// In-memory-only store for sessions where storage is unavailable.
    pub fn ephemeral() -> Self {
        Self {
            entries: Vec::new(),
            path: None,
        }
    }

    /// Record a use of `reference`: remove any existing occurrence,
    /// insert at the front, evict the oldest entry past capacity, and
    /// persist the result.
    ///
    /// Blank references are ignored without touching storage. A failed
    /// write leaves the in-memory list updated and reports the error so
    /// the caller can decide whether to surface it.
    pub fn record_use(&mut self, reference: &str) -> Result<(), StorageUnavailable> {
        if reference.trim().is_empty() {
            return Ok(());
        }
        self.entries.retain(|entry| entry != reference);
        self.entries.insert(0, reference.to_string());
        self.entries.truncate(RECENT_CAPACITY);
        self.persist()
    }

    /// Current list, most recent first. No I/O.
    pub fn current(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> Result<(), StorageUnavailable> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let doc = ConfigDocument {
            recent_items: self.entries.clone(),
        };
        storage::write_document(path, &doc)
    }
}

/// Drop blank entries, collapse duplicates to their first occurrence,
/// and clamp to capacity. Applied to data read back from disk so the
/// invariants hold even for hand-edited files.
fn sanitize(raw: Vec<String>) -> Vec<String> {
    let mut entries: Vec<String> = Vec::new();
    for item in raw {
        if item.trim().is_empty() || entries.contains(&item) {
            continue;
        }
        entries.push(item);
        if entries.len() == RECENT_CAPACITY {
            break;
        }
    }
    entries
}
