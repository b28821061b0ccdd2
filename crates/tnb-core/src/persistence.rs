//! JSON snapshot of the note store.
//!
//! Layout: `{"categories":[{"name":"work","notes":["..."]}]}`, categories in
//! creation order.

use std::{fs, path::Path};

use crate::{errors::Error, store::NoteStore, Result};

/// Read a snapshot. A missing or blank file yields an empty store.
pub fn load_snapshot(path: &Path) -> Result<NoteStore> {
    if !path.exists() {
        return Ok(NoteStore::new());
    }
    let txt = fs::read_to_string(path)?;
    if txt.trim().is_empty() {
        return Ok(NoteStore::new());
    }
    let store: NoteStore = serde_json::from_str(&txt).map_err(|e| Error::Snapshot {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(store.normalize())
}

/// Write the snapshot to a sibling temp file, then rename it over `path`.
pub fn save_snapshot(path: &Path, store: &NoteStore) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let txt = serde_json::to_string_pretty(store)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    fs::write(&tmp, txt)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
