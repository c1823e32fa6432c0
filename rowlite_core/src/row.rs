//! One mapped record from a tabular data source.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::contract;
use crate::cursor::Cursor;
use crate::location::LatLon;

/// True for an empty or whitespace-only value.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// A row in a table as an object. All values are kept in their string
/// representation and parsed on demand; a key that is present always maps to
/// a non-blank value.
#[derive(Debug, Clone, Default)]
pub struct Row {
    data: HashMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if this row has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes all data from this row.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The column's raw value.
    pub fn get_string(&self, column: &str) -> Option<&str> {
        self.data.get(column).map(String::as_str)
    }

    /// The column's value as `i32`, or `def` when absent or unparsable.
    pub fn get_int(&self, column: &str, def: i32) -> i32 {
        self.data
            .get(column)
            .and_then(|v| v.parse().ok())
            .unwrap_or(def)
    }

    /// The column's value as `i64`, or `def` when absent or unparsable.
    pub fn get_long(&self, column: &str, def: i64) -> i64 {
        self.data
            .get(column)
            .and_then(|v| v.parse().ok())
            .unwrap_or(def)
    }

    /// The column's value as `f64`, or `def` when absent or unparsable.
    pub fn get_double(&self, column: &str, def: f64) -> f64 {
        self.data
            .get(column)
            .and_then(|v| v.parse().ok())
            .unwrap_or(def)
    }

    /// The column's value as `bool`. `true`/`1` and `false`/`0` are
    /// recognized, case-insensitive.
    pub fn get_bool(&self, column: &str) -> Option<bool> {
        match self.data.get(column)?.to_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }

    /// The column's value as a date in `YYYY-MM-DD` format.
    pub fn get_date(&self, column: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.data.get(column)?, "%Y-%m-%d").ok()
    }

    /// The column's value as a timestamp, `YYYY-MM-DD HH:MM:SS` with either
    /// a space or a `T` separator.
    pub fn get_timestamp(&self, column: &str) -> Option<NaiveDateTime> {
        let value = self.data.get(column)?;
        NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
            .ok()
    }

    pub fn get_uuid(&self, column: &str) -> Option<Uuid> {
        Uuid::parse_str(self.data.get(column)?).ok()
    }

    pub fn get_decimal(&self, column: &str) -> Option<Decimal> {
        self.data.get(column)?.parse().ok()
    }

    /// The column's value as binary data decoded from hex text, with an
    /// optional `0x` prefix.
    pub fn get_blob(&self, column: &str) -> Option<Vec<u8>> {
        let value = self.data.get(column)?;
        hex::decode(value.strip_prefix("0x").unwrap_or(value)).ok()
    }

    /// The column's value as a location. The result may be invalid when the
    /// cell is absent or malformed.
    pub fn get_location(&self, column: &str) -> LatLon {
        LatLon::parse(self.get_string(column).unwrap_or_default())
    }

    /// The row's id, or [`contract::NO_ID`].
    pub fn id(&self) -> i64 {
        self.get_long(contract::COLUMN_ID, contract::NO_ID)
    }

    /// True if the row's data contains an id.
    pub fn has_id(&self) -> bool {
        self.data.contains_key(contract::COLUMN_ID)
    }

    /// The row's global id, or [`contract::NO_ID`].
    pub fn global_id(&self) -> i64 {
        self.get_long(contract::COLUMN_GLOBAL_ID, contract::NO_ID)
    }

    /// The row's locale code, if any.
    pub fn locale(&self) -> Option<&str> {
        self.get_string(contract::COLUMN_LOCALE)
    }

    /// The row's location, read from the well-known location column.
    pub fn location(&self) -> LatLon {
        self.get_location(contract::COLUMN_LOCATION)
    }

    /// True if the row contains `field` with a non-blank value.
    pub fn has_data(&self, field: &str) -> bool {
        match self.data.get(field) {
            Some(value) => !is_blank(value),
            None => false,
        }
    }

    /// Puts raw data into this row. Blank columns and blank values are
    /// dropped. Returns true when the data was stored.
    pub fn put_raw(&mut self, column: &str, value: &str) -> bool {
        if is_blank(column) || is_blank(value) {
            return false;
        }
        self.data.insert(column.to_string(), value.to_string());
        true
    }

    /// Obtains data from another row, replacing the current contents. The
    /// copy is independent of the source afterwards.
    pub fn obtain(&mut self, origin: &Row) {
        self.clear();
        if origin.is_empty() {
            return;
        }
        self.data
            .extend(origin.data.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    /// Column names currently present, in arbitrary order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Row{{empty}}");
        }
        write!(f, "Row{{")?;
        let keys: BTreeSet<&str> = self.data.keys().map(String::as_str).collect();
        for key in keys {
            write!(f, "{}={},", key, self.data[key])?;
        }
        write!(f, "}}")
    }
}

/// The extension seam for row types loaded from a [`Cursor`].
///
/// Custom item types embed a [`Row`] and may override the per-value
/// transform and the pre/post-load hooks; `Row` itself is the plain item.
pub trait RowItem {
    /// The underlying key/value data.
    fn row(&self) -> &Row;

    fn row_mut(&mut self) -> &mut Row;

    /// Called for every value before it is stored. The default returns the
    /// value as is.
    fn on_value_load(&self, _column: &str, value: String) -> String {
        value
    }

    /// Called immediately before loading begins. The default clears the
    /// existing data.
    fn on_pre_load(&mut self) {
        self.row_mut().clear();
    }

    /// Called immediately after a successful load.
    fn on_post_load(&mut self) {}

    /// Loads data from the cursor's current position. An invalid position
    /// leaves the item empty.
    fn load(&mut self, cursor: &dyn Cursor) {
        self.on_pre_load();
        let count = cursor.count();
        let position = cursor.position();
        if position < 0 || count == 0 || position as usize >= count {
            return;
        }
        for index in 0..cursor.column_count() {
            let Some(column) = cursor.column_name(index) else {
                continue;
            };
            let column = column.to_string();
            let Some(value) = cursor.value(index) else {
                continue;
            };
            let value = self.on_value_load(&column, value.to_string());
            self.row_mut().put_raw(&column, &value);
        }
        self.on_post_load();
    }
}

impl RowItem for Row {
    fn row(&self) -> &Row {
        self
    }

    fn row_mut(&mut self) -> &mut Row {
        self
    }
}
