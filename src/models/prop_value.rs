//! Loosely-typed prop values.
//!
//! Card configuration arrives from untrusted sources (JSON documents, TOML
//! files, other components), so every visual prop is carried as a
//! [`PropValue`] and only interpreted by the normalizers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// An untrusted prop value.
///
/// `Undefined` is an omitted prop; `Null` is an explicit null. Numbers keep
/// non-finite values so that `NaN` and infinities can be rejected explicitly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum PropValue {
    /// The prop was not supplied.
    #[default]
    Undefined,
    /// The prop was explicitly null.
    Null,
    /// A boolean flag.
    Bool(bool),
    /// A number, possibly non-finite.
    Number(f64),
    /// A string.
    Text(String),
    /// An array of values.
    List(Vec<PropValue>),
    /// Any structured value; kept opaque.
    Object(serde_json::Map<String, Value>),
}

impl PropValue {
    /// Returns true when the prop was omitted.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns true for `Null` or `Undefined`.
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns the string payload, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric payload, if any.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns `self`, or `default` when the prop was omitted.
    #[must_use]
    pub fn or_default_value(&self, default: impl Into<PropValue>) -> PropValue {
        if self.is_undefined() {
            default.into()
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for PropValue {
    /// Formats the value the way it appears in diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) if n.is_nan() => write!(f, "NaN"),
            Self::Number(n) if n.is_infinite() => {
                if n.is_sign_positive() {
                    write!(f, "Infinity")
                } else {
                    write!(f, "-Infinity")
                }
            }
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::List(items) => {
                let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "{}", parts.join(","))
            }
            Self::Object(_) => write!(f, "[object Object]"),
        }
    }
}

impl From<Value> for PropValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Object(map),
        }
    }
}

impl From<PropValue> for Value {
    fn from(value: PropValue) -> Self {
        match value {
            PropValue::Undefined | PropValue::Null => Self::Null,
            PropValue::Bool(b) => Self::Bool(b),
            // Non-finite numbers have no JSON form
            PropValue::Number(n) => {
                serde_json::Number::from_f64(n).map_or(Self::Null, Self::Number)
            }
            PropValue::Text(s) => Self::String(s),
            PropValue::List(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            PropValue::Object(map) => Self::Object(map),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_matches_diagnostic_format() {
        assert_eq!(PropValue::Undefined.to_string(), "undefined");
        assert_eq!(PropValue::Null.to_string(), "null");
        assert_eq!(PropValue::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(PropValue::Number(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(PropValue::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(PropValue::Number(4.0).to_string(), "4");
        assert_eq!(PropValue::Number(0.5).to_string(), "0.5");
        assert_eq!(PropValue::from("1rem").to_string(), "1rem");
    }

    #[test]
    fn test_from_json() {
        assert_eq!(PropValue::from(json!(null)), PropValue::Null);
        assert_eq!(PropValue::from(json!(123)), PropValue::Number(123.0));
        assert_eq!(PropValue::from(json!("red")), PropValue::from("red"));
        assert_eq!(
            PropValue::from(json!([1, "a"])),
            PropValue::List(vec![PropValue::Number(1.0), PropValue::from("a")])
        );
    }

    #[test]
    fn test_nullish() {
        assert!(PropValue::Undefined.is_nullish());
        assert!(PropValue::Null.is_nullish());
        assert!(!PropValue::from(0.0).is_nullish());
        assert!(!PropValue::from("").is_nullish());
        assert!(!PropValue::from(false).is_nullish());
        assert!(!PropValue::List(Vec::new()).is_nullish());
    }

    #[test]
    fn test_or_default_value_only_replaces_undefined() {
        assert_eq!(PropValue::Undefined.or_default_value("x"), PropValue::from("x"));
        assert_eq!(PropValue::Null.or_default_value("x"), PropValue::Null);
    }

    #[test]
    fn test_serde_roundtrip_through_value() {
        let parsed: PropValue = serde_json::from_str("\"#fff\"").unwrap();
        assert_eq!(parsed, PropValue::from("#fff"));
        let text = serde_json::to_string(&PropValue::Number(f64::NAN)).unwrap();
        assert_eq!(text, "null");
    }
}
