//! Dynamic key/value record

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::Value;

/// A dynamic row for hosts without a typed row struct.
///
/// Fields are kept in a `BTreeMap`, so two records with the same fields
/// compare equal regardless of insertion order. Pair it with
/// [`Column::field`](crate::Column::field) to build key accessors.
///
/// # Example
///
/// ```
/// use tablekit::{Record, Value};
///
/// let record = Record::new()
///     .set("id", 1i64)
///     .set("name", "Alice");
///
/// assert_eq!(record.get("name"), Some(&Value::from("Alice")));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the field's text form, `""` when missing.
    pub fn text(&self, field: &str) -> String {
        self.get(field).map(Value::to_text).unwrap_or_default()
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
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
