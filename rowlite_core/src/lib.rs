use std::path::{Path, PathBuf};

pub mod contract;
pub mod cursor;
pub mod list;
pub mod location;
pub mod query;
pub mod row;
pub mod storage;

use tracing::warn;

use crate::cursor::Cursor;
use crate::query::{Backend, Query};
use crate::storage::{MemStore, StoreError, snapshot};

pub use crate::list::RowList;
pub use crate::location::LatLon;
pub use crate::row::{Row, RowItem};

/// A database handle over an in-memory store persisted as a JSON snapshot.
///
/// Opening never fails: a missing snapshot starts empty and a corrupt one is
/// logged and ignored.
#[derive(Debug)]
pub struct Database {
    path: PathBuf,
    store: MemStore,
}

impl Database {
    /// Opens the database at `path`, loading its snapshot when present.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let store = match snapshot::load_from_path(&path) {
            Ok(store) => store,
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to load snapshot, opening empty");
                MemStore::new()
            }
        };
        Self { path, store }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &MemStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut MemStore {
        &mut self.store
    }

    /// Writes the current contents back to the snapshot file.
    pub fn save(&self) -> Result<(), StoreError> {
        snapshot::save_to_path(&self.store, &self.path)
    }

    /// A readable cursor over a whole table, or `None`.
    pub fn readable_cursor(&self, table: &str) -> Option<Box<dyn Cursor>> {
        self.query(&Query::table(table))
    }

    /// A readable cursor over a table restricted to `locale`, or `None`.
    pub fn readable_cursor_for_locale(&self, table: &str, locale: &str) -> Option<Box<dyn Cursor>> {
        self.query(&Query::table(table).with_locale(Some(locale)))
    }

    /// A readable cursor over the row with the given `id`, or `None`.
    pub fn readable_cursor_by_id(&self, table: &str, id: i64) -> Option<Box<dyn Cursor>> {
        let id = id.to_string();
        self.query(
            &Query::table(table).filter(format!("{} = ?", contract::COLUMN_ID), &[id.as_str()]),
        )
    }
}

impl Backend for Database {
    fn query(&self, query: &Query) -> Option<Box<dyn Cursor>> {
        self.store.query(query)
    }
}
