//! JSON snapshot persistence for the in-memory store.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::storage::StoreError;
use crate::storage::mem::{MemStore, Table};

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    tables: HashMap<String, TableFile>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TableFile {
    columns: Vec<String>,
    next_id: i64,
    rows: Vec<Vec<Option<String>>>,
}

/// Saves the store as pretty-printed JSON.
pub fn save_to_path(store: &MemStore, path: &Path) -> Result<(), StoreError> {
    let tables = store
        .tables
        .iter()
        .map(|(name, t)| {
            (
                name.clone(),
                TableFile {
                    columns: t.columns.clone(),
                    next_id: t.next_id,
                    rows: t.rows.clone(),
                },
            )
        })
        .collect();
    let payload = serde_json::to_string_pretty(&SnapshotFile { tables })?;
    fs::write(path, payload)?;
    Ok(())
}

/// Loads a store from a snapshot file. A missing or empty file yields an
/// empty store.
pub fn load_from_path(path: &Path) -> Result<MemStore, StoreError> {
    if !path.exists() {
        return Ok(MemStore::new());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(MemStore::new());
    }

    let file: SnapshotFile = serde_json::from_str(&content)?;
    let mut store = MemStore::new();
    for (name, t) in file.tables {
        store.tables.insert(
            name,
            Table {
                columns: t.columns,
                rows: t.rows,
                next_id: t.next_id,
            },
        );
    }
    Ok(store)
}
