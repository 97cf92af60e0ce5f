//! Value enum for dynamic cell values

use std::fmt;

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// A dynamic value produced by a column accessor.
///
/// The engine only ever looks at rows through accessors, and every accessor
/// returns a `Value`. Filtering and the default sort comparison work on the
/// text form of the value (see [`Value::to_text`]), so `Null` behaves like an
/// empty string everywhere.
///
/// # Example
///
/// ```
/// use tablekit::Value;
///
/// let name = Value::from("Alice");
/// let age = Value::from(42i64);
/// let missing = Value::Null;
///
/// assert_eq!(name.to_text(), "Alice");
/// assert_eq!(age.to_text(), "42");
/// assert_eq!(missing.to_text(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
    /// Ordered list of values (tags, multi-select fields).
    List(Vec<Value>),
    /// Fallback for arbitrary JSON (nested objects).
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is null or its text form is empty.
    ///
    /// Empty filter values are treated as "no filter".
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
            Value::List(_) => "list",
            Value::Json(_) => "json",
        }
    }

    /// Returns the string contents if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a numeric view of the value, if it has one.
    ///
    /// Strings are parsed after trimming whitespace.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Coerces the value to its text form.
    ///
    /// This is the representation used for global search, text filters,
    /// the default sort comparison, and CSV export.
    pub fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(v) => v.to_string(),
            Value::Int(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::String(s) => s.clone(),
            Value::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            Value::List(items) => items
                .iter()
                .map(Value::to_text)
                .collect::<Vec<_>>()
                .join(","),
            Value::Json(serde_json::Value::String(s)) => s.clone(),
            Value::Json(serde_json::Value::Null) => String::new(),
            Value::Json(json) => json.to_string(),
        }
    }

    /// Converts the value to JSON.
    ///
    /// Values JSON cannot represent (NaN, infinities) become their text form.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(v) => serde_json::Value::Bool(*v),
            Value::Int(v) => serde_json::Value::from(*v),
            Value::Float(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or_else(|| serde_json::Value::String(v.to_string())),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::DateTime(_) => serde_json::Value::String(self.to_text()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Json(json) => json.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

// =============================================================================
// Serde
// =============================================================================

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(v) => Value::Bool(v),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            obj @ serde_json::Value::Object(_) => Value::Json(obj),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_null_is_empty_text() {
        assert_eq!(Value::Null.to_text(), "");
        assert!(Value::Null.is_empty());
        assert!(Value::from("").is_empty());
        assert!(!Value::from(0i64).is_empty());
    }

    #[test]
    fn test_number_text() {
        assert_eq!(Value::from(10i64).to_text(), "10");
        assert_eq!(Value::from(1.5).to_text(), "1.5");
        assert_eq!(Value::from(2.0).to_text(), "2");
    }

    #[test]
    fn test_list_text_joins_with_comma() {
        let value = Value::from(vec!["a", "b"]);
        assert_eq!(value.to_text(), "a,b");
    }

    #[test]
    fn test_datetime_text_is_rfc3339() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(Value::from(dt).to_text(), "2024-03-01T12:00:00Z");
    }

    #[test]
    fn test_non_finite_float_degrades_to_text() {
        assert_eq!(
            Value::Float(f64::NAN).to_json(),
            serde_json::Value::String("NaN".into())
        );
    }

    #[test]
    fn test_as_number() {
        assert_eq!(Value::from(" 12 ").as_number(), Some(12.0));
        assert_eq!(Value::from("abc").as_number(), None);
        assert_eq!(Value::Null.as_number(), None);
    }

    #[test]
    fn test_deserialize_from_json() {
        let value: Value = serde_json::from_str(r#"[1, "x", null, 2.5]"#).unwrap();
        assert_eq!(
            value,
            Value::List(vec![
                Value::Int(1),
                Value::from("x"),
                Value::Null,
                Value::Float(2.5)
            ])
        );
    }
}
