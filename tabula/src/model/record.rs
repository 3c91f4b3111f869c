//! Dynamic keyed record

use std::collections::HashMap;

use super::Value;

/// Field access used by every part of the grid.
///
/// Columns, sorting and row keys all read rows through this single accessor,
/// so a page with a typed row struct only has to answer "what is in field
/// X" once.
///
/// # Example
///
/// ```
/// use tabula::model::{GridRow, Value};
///
/// struct Student {
///     id: u32,
///     name: String,
/// }
///
/// impl GridRow for Student {
///     fn value(&self, field: &str) -> Value {
///         match field {
///             "id" => self.id.into(),
///             "name" => self.name.as_str().into(),
///             _ => Value::Null,
///         }
///     }
/// }
/// ```
pub trait GridRow {
    /// The value of `field`, `Value::Null` when absent.
    fn value(&self, field: &str) -> Value;
}

/// A loosely-shaped row: field name to value.
///
/// # Example
///
/// ```
/// use tabula::model::{GridRow, Record, Value};
///
/// let row = Record::new().set("id", 1i64).set("name", "Ada");
/// assert_eq!(row.value("name"), Value::from("Ada"));
/// assert!(row.value("missing").is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from a JSON object. Non-objects give an empty record.
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Object(map) => map.into_iter().collect(),
            _ => Self::default(),
        }
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Sets a field value (builder style).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Sets a field value in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field, returning its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl GridRow for Record {
    fn value(&self, field: &str) -> Value {
        self.fields.get(field).cloned().unwrap_or_default()
    }
}

impl GridRow for HashMap<String, Value> {
    fn value(&self, field: &str) -> Value {
        self.get(field).cloned().unwrap_or_default()
    }
}

impl GridRow for serde_json::Map<String, serde_json::Value> {
    fn value(&self, field: &str) -> Value {
        self.get(field).cloned().map(Value::from).unwrap_or_default()
    }
}

impl GridRow for serde_json::Value {
    fn value(&self, field: &str) -> Value {
        self.get(field).cloned().map(Value::from).unwrap_or_default()
    }
}
