pub mod filter;
pub mod mem;
pub mod snapshot;

// Re-export main types for convenience
pub use mem::MemStore;

use thiserror::Error;

/// Errors from the store-management API.
///
/// Read queries never surface these: they are logged and collapse to an
/// absent result at the [`Backend`](crate::query::Backend) boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Table '{0}' already exists")]
    TableExists(String),

    #[error("Table '{0}' does not exist")]
    NoSuchTable(String),

    #[error("Column '{0}' does not exist")]
    NoSuchColumn(String),

    #[error("Duplicate column '{0}'")]
    DuplicateColumn(String),

    #[error("Unsupported query: {0}")]
    Unsupported(String),

    #[error("Selection binds {expected} arguments but {given} were supplied")]
    ArgumentCount { expected: usize, given: usize },

    #[error("Malformed selection near '{0}'")]
    BadSelection(String),

    #[error("Malformed snapshot: {0}")]
    BadSnapshot(#[from] serde_json::Error),

    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
