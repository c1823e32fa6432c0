use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use rowlite_core::Database;
use rowlite_core::contract;
use rowlite_core::cursor::Cursor;
use rowlite_core::query::{Backend, Query};
use rowlite_core::storage::{MemStore, StoreError, snapshot};


/// A unique path under the system temp dir for persistence tests.
fn temp_path(tag: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let mut path = std::env::temp_dir();
    path.push(format!(
        "rowlite_test_{}_{}_{}",
        tag,
        std::process::id(),
        id
    ));
    path
}

fn users_store() -> MemStore {
    let mut store = MemStore::new();
    store
        .create_table("users", &["name", "age", "locale"])
        .unwrap();
    store
        .insert("users", &[("name", "a"), ("age", "30"), ("locale", "en")])
        .unwrap();
    store
        .insert("users", &[("name", "b"), ("age", "20"), ("locale", "en")])
        .unwrap();
    store
        .insert("users", &[("name", "c"), ("age", "10"), ("locale", "cs")])
        .unwrap();
    store
}

/// Collects the named column from every row of the cursor.
fn column_values(cursor: &mut dyn Cursor, column: &str) -> Vec<Option<String>> {
    let index = (0..cursor.column_count())
        .find(|&i| cursor.column_name(i) == Some(column))
        .expect("column present");
    let mut out = Vec::new();
    if !cursor.move_to_first() {
        return out;
    }
    loop {
        out.push(cursor.value(index).map(str::to_string));
        if !cursor.move_to_next() {
            break;
        }
    }
    out
}
