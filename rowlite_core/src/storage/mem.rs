//! In-memory storage implementation.

use std::collections::HashMap;

use tracing::warn;

use crate::contract;
use crate::cursor::{Cursor, MemCursor};
use crate::query::{Backend, Query};
use crate::storage::StoreError;
use crate::storage::filter::{self, Selection};

/// One table: ordered columns and rows of optional text cells. The first
/// column is always the implicit id column.
#[derive(Debug, Clone)]
pub(crate) struct Table {
    pub(crate) columns: Vec<String>,
    pub(crate) rows: Vec<Vec<Option<String>>>,
    pub(crate) next_id: i64,
}

/// In-memory storage keyed by table name. All cell values are text.
#[derive(Debug, Default)]
pub struct MemStore {
    pub(crate) tables: HashMap<String, Table>,
}

impl MemStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `table` exists.
    pub fn exists(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    /// Table names, unordered.
    pub fn tables(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    /// Creates a table with the given columns. The id column is prepended
    /// implicitly.
    pub fn create_table(&mut self, table: &str, columns: &[&str]) -> Result<(), StoreError> {
        if self.exists(table) {
            return Err(StoreError::TableExists(table.to_string()));
        }
        let mut cols = Vec::with_capacity(columns.len() + 1);
        cols.push(contract::COLUMN_ID.to_string());
        for column in columns {
            if cols.iter().any(|have| have == column) {
                return Err(StoreError::DuplicateColumn(column.to_string()));
            }
            cols.push(column.to_string());
        }
        self.tables.insert(
            table.to_string(),
            Table {
                columns: cols,
                rows: Vec::new(),
                next_id: 1,
            },
        );
        Ok(())
    }

    /// Drops `table`. Returns false when it does not exist.
    pub fn drop_table(&mut self, table: &str) -> bool {
        self.tables.remove(table).is_some()
    }

    /// Removes all rows of `table`, keeping its columns. Returns false when
    /// the table does not exist.
    pub fn clear_table(&mut self, table: &str) -> bool {
        match self.tables.get_mut(table) {
            Some(t) => {
                t.rows.clear();
                true
            }
            None => false,
        }
    }

    /// Inserts one row and returns its id. Unknown columns are an error,
    /// omitted columns stay NULL, and the id column is auto-assigned unless
    /// supplied.
    pub fn insert(&mut self, table: &str, values: &[(&str, &str)]) -> Result<i64, StoreError> {
        let t = self
            .tables
            .get_mut(table)
            .ok_or_else(|| StoreError::NoSuchTable(table.to_string()))?;
        let mut row: Vec<Option<String>> = vec![None; t.columns.len()];
        for (column, value) in values {
            let index = t
                .columns
                .iter()
                .position(|c| c == column)
                .ok_or_else(|| StoreError::NoSuchColumn(column.to_string()))?;
            row[index] = Some(value.to_string());
        }
        let id = match &row[0] {
            Some(explicit) => explicit.parse().unwrap_or(t.next_id),
            None => t.next_id,
        };
        row[0] = Some(id.to_string());
        if id >= t.next_id {
            t.next_id = id + 1;
        }
        t.rows.push(row);
        Ok(id)
    }

    /// Runs a read query, materializing the matching rows.
    pub fn select(&self, query: &Query) -> Result<MemCursor, StoreError> {
        if query.group_by.is_some() || query.having.is_some() {
            return Err(StoreError::Unsupported("group by / having".to_string()));
        }
        let t = self
            .tables
            .get(&query.table)
            .ok_or_else(|| StoreError::NoSuchTable(query.table.clone()))?;

        let selection = Selection::parse(query.selection.as_deref(), &query.args, &t.columns)?;

        let mut rows: Vec<Vec<Option<String>>> = t
            .rows
            .iter()
            .filter(|row| selection.matches(row))
            .cloned()
            .collect();

        if let Some(order_by) = query.order_by.as_deref() {
            filter::order_rows(&mut rows, order_by, &t.columns)?;
        }

        // Projection happens after filtering and ordering so the selection
        // and order keys need not be part of the output.
        let (columns, rows) = match &query.columns {
            Some(requested) if !requested.is_empty() => {
                let mut indexes = Vec::with_capacity(requested.len());
                for name in requested {
                    let index = t
                        .columns
                        .iter()
                        .position(|c| c == name)
                        .ok_or_else(|| StoreError::NoSuchColumn(name.clone()))?;
                    indexes.push(index);
                }
                let projected = rows
                    .into_iter()
                    .map(|row| indexes.iter().map(|&i| row[i].clone()).collect())
                    .collect();
                (requested.clone(), projected)
            }
            _ => (t.columns.clone(), rows),
        };

        Ok(MemCursor::new(columns, rows))
    }
}

impl Backend for MemStore {
    fn query(&self, query: &Query) -> Option<Box<dyn Cursor>> {
        match self.select(query) {
            Ok(cursor) => Some(Box::new(cursor)),
            Err(err) => {
                warn!(table = %query.table, %err, "read query failed");
                None
            }
        }
    }
}
