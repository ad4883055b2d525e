use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::StorageUnavailable;

/// On-disk config document. Unknown keys from future versions are
/// ignored on read and not preserved on write.
#[derive(Serialize, Deserialize, Default)]
pub(crate) struct ConfigDocument {
    #[serde(default)]
    pub recent_items: Vec<String>,
}

/// Read the document at `path`. An absent or unreadable file, malformed
/// JSON, a missing `recent_items` key, and a wrong value type are all
/// treated identically as "no prior data".
pub(crate) fn read_document(path: &Path) -> ConfigDocument {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return ConfigDocument::default(),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "config unreadable, starting empty");
            return ConfigDocument::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(doc) => doc,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "config malformed, starting empty");
            ConfigDocument::default()
        }
    }
}

/// Write the document through a temp file in the destination directory
/// followed by a rename, so a crash mid-write leaves any previously
/// readable file intact.
pub(crate) fn write_document(path: &Path, doc: &ConfigDocument) -> Result<(), StorageUnavailable> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    try_write(path, parent, doc).map_err(|source| StorageUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

fn try_write(path: &Path, parent: &Path, doc: &ConfigDocument) -> io::Result<()> {
    let mut tmp = NamedTempFile::new_in(parent)?;
    serde_json::to_writer_pretty(&mut tmp, doc).map_err(io::Error::from)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
