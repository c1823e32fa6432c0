//! Read-query description and the storage backend seam.

use crate::contract;
use crate::cursor::Cursor;
use crate::row::is_blank;

/// A read query against a [`Backend`].
///
/// The selection is a predicate over column values with `?` placeholders;
/// `args` bind the placeholders in order.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub table: String,
    pub columns: Option<Vec<String>>,
    pub selection: Option<String>,
    pub args: Vec<String>,
    pub group_by: Option<String>,
    pub having: Option<String>,
    pub order_by: Option<String>,
}

impl Query {
    /// Starts a query returning all columns of `table`.
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Restricts the query to the named columns.
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = Some(columns.iter().map(|c| c.to_string()).collect());
        self
    }

    /// Sets the selection predicate and its positional arguments.
    pub fn filter(mut self, selection: impl Into<String>, args: &[&str]) -> Self {
        self.selection = Some(selection.into());
        self.args = args.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn group_by(mut self, group_by: impl Into<String>) -> Self {
        self.group_by = Some(group_by.into());
        self
    }

    pub fn having(mut self, having: impl Into<String>) -> Self {
        self.having = Some(having.into());
        self
    }

    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    /// Conjoins a locale-equality clause onto the selection and appends the
    /// locale value as the last argument. A blank locale changes nothing.
    pub fn with_locale(mut self, locale: Option<&str>) -> Self {
        let Some(locale) = locale else { return self };
        if is_blank(locale) {
            return self;
        }
        self.selection = Some(match self.selection.take() {
            Some(sel) if !is_blank(&sel) => {
                format!("{sel} and {} = ?", contract::COLUMN_LOCALE)
            }
            _ => format!("{} = ?", contract::COLUMN_LOCALE),
        });
        self.args.push(locale.to_string());
        self
    }
}

/// The abstract tabular data source the mapping layer reads from.
pub trait Backend {
    /// Runs a read query and returns a positioned result set.
    ///
    /// Returns `None` when the query fails. A failed query is not
    /// distinguishable from one matching zero rows here; callers that need
    /// the difference must use the backend's own API.
    fn query(&self, query: &Query) -> Option<Box<dyn Cursor>>;
}
