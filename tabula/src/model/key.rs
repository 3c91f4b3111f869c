use std::fmt;

use log::trace;

use super::{GridRow, Value};

/// Identity of a row for selection, hover and menu state.
///
/// Taken from the configured key field. Rows whose key field is null or
/// missing fall back to their position in the current data slice, which is
/// only stable while the slice is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowKey {
    Key(String),
    Index(usize),
}

impl RowKey {
    /// Key of `row` at position `index`.
    pub fn of<R: GridRow + ?Sized>(row: &R, key_field: &str, index: usize) -> Self {
        match row.value(key_field) {
            Value::Null => {
                trace!("row {index} has no '{key_field}', keyed by position");
                RowKey::Index(index)
            }
            value => RowKey::Key(value.to_string()),
        }
    }

    /// Keys for a whole data slice, in order.
    pub fn all<R: GridRow>(data: &[R], key_field: &str) -> Vec<RowKey> {
        data.iter()
            .enumerate()
            .map(|(i, row)| RowKey::of(row, key_field, i))
            .collect()
    }

    /// Returns `true` if this key is a positional fallback.
    pub fn is_positional(&self) -> bool {
        matches!(self, RowKey::Index(_))
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Key(k) => f.write_str(k),
            RowKey::Index(i) => write!(f, "#{i}"),
        }
    }
}

impl From<&str> for RowKey {
    fn from(v: &str) -> Self {
        RowKey::Key(v.to_string())
    }
}

impl From<i64> for RowKey {
    fn from(v: i64) -> Self {
        RowKey::Key(v.to_string())
    }
}
