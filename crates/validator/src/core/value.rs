//! The runtime value model every rule inspects.
//!
//! Record implementations build a [`Value`] per field once; rules then match
//! on its variant instead of probing the concrete Rust type.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::core::traits::{Record, Validatable};
#[cfg(feature = "ids")]
use crate::ids::{DbRef, ObjectId};

// ============================================================================
// VALUE
// ============================================================================

/// A borrowed, dynamically-shaped field value.
#[derive(Clone)]
pub enum Value<'a> {
    /// Absent value (`None`, JSON `null`).
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Signed integer scalar.
    Int(i64),
    /// Unsigned integer scalar.
    Uint(u64),
    /// Floating point scalar.
    Float(f64),
    /// Text.
    Text(&'a str),
    /// Ordered sequence.
    List(Vec<Value<'a>>),
    /// String-keyed mapping, in source order.
    Map(Vec<(&'a str, Value<'a>)>),
    /// A rule-tagged record, validated recursively by `nested`.
    Record(&'a dyn Record),
    /// A value that can only validate itself.
    Validatable(&'a dyn Validatable),
    /// A content-addressable identifier.
    #[cfg(feature = "ids")]
    ObjectId(&'a ObjectId),
    /// A typed foreign reference.
    #[cfg(feature = "ids")]
    DbRef(&'a DbRef),
}

impl<'a> Value<'a> {
    /// Wraps a record.
    pub fn record(record: &'a dyn Record) -> Self {
        Self::Record(record)
    }

    /// Wraps a self-validating value.
    pub fn validatable(value: &'a dyn Validatable) -> Self {
        Self::Validatable(value)
    }

    /// Converts anything implementing [`ToValue`].
    pub fn of<T: ToValue + ?Sized>(value: &'a T) -> Self {
        value.to_value()
    }

    /// Returns true for `Null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Length of sequence-like values, `None` for everything else.
    ///
    /// Text length counts Unicode scalar values, not UTF-8 bytes.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Text(s) => Some(s.chars().count()),
            Self::List(items) => Some(items.len()),
            Self::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Returns true if the value is absent or equal to its type's zero value.
    ///
    /// This is the predicate behind the `required` rule; every other rule
    /// passes vacuous values.
    #[must_use]
    pub fn is_vacuous(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !*b,
            Self::Int(n) => *n == 0,
            Self::Uint(n) => *n == 0,
            Self::Float(n) => *n == 0.0,
            Self::Text(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
            Self::Record(record) => record.is_zero(),
            Self::Validatable(_) => false,
            #[cfg(feature = "ids")]
            Self::ObjectId(id) => id.is_empty(),
            #[cfg(feature = "ids")]
            Self::DbRef(reference) => reference.is_zero(),
        }
    }

    /// Short name of the variant, for diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Record(_) => "record",
            Self::Validatable(_) => "validatable",
            #[cfg(feature = "ids")]
            Self::ObjectId(_) => "object_id",
            #[cfg(feature = "ids")]
            Self::DbRef(_) => "db_ref",
        }
    }

    /// Returns the self-validation capability, if the value exposes one.
    #[must_use]
    pub fn as_validatable(&self) -> Option<&'a dyn Validatable> {
        match self {
            Self::Validatable(value) => Some(*value),
            Self::Record(record) => Record::as_validatable(*record),
            _ => None,
        }
    }

    /// Borrows a JSON document.
    #[must_use]
    pub fn from_json(json: &'a serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Uint(u)
                } else {
                    Self::Float(n.as_f64().unwrap_or_default())
                }
            }
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => Self::List(items.iter().map(Self::from_json).collect()),
            serde_json::Value::Object(entries) => Self::Map(
                entries
                    .iter()
                    .map(|(k, v)| (k.as_str(), Self::from_json(v)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Self::Uint(n) => f.debug_tuple("Uint").field(n).finish(),
            Self::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Self::Record(_) => f.write_str("Record(..)"),
            Self::Validatable(_) => f.write_str("Validatable(..)"),
            #[cfg(feature = "ids")]
            Self::ObjectId(id) => f.debug_tuple("ObjectId").field(id).finish(),
            #[cfg(feature = "ids")]
            Self::DbRef(reference) => f.debug_tuple("DbRef").field(reference).finish(),
        }
    }
}

// ============================================================================
// CONVERSION
// ============================================================================

/// Converts a Rust value into the [`Value`] model.
///
/// `#[derive(Record)]` calls this for every tagged field, so a field type
/// must implement it to carry rules. Record types get an impl from the derive
/// itself.
pub trait ToValue {
    /// Borrows `self` as a [`Value`].
    fn to_value(&self) -> Value<'_>;
}

impl ToValue for Value<'_> {
    fn to_value(&self) -> Value<'_> {
        self.clone()
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

macro_rules! to_value_via {
    ($variant:ident as $wide:ty: $($ty:ty),+) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value<'_> {
                    Value::$variant(<$wide>::from(*self))
                }
            }
        )+
    };
}

to_value_via!(Int as i64: i8, i16, i32, i64);
to_value_via!(Uint as u64: u8, u16, u32, u64);
to_value_via!(Float as f64: f32, f64);

impl ToValue for isize {
    fn to_value(&self) -> Value<'_> {
        Value::Int(*self as i64)
    }
}

impl ToValue for usize {
    fn to_value(&self) -> Value<'_> {
        Value::Uint(*self as u64)
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value<'_> {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value<'_> {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}

impl<T: ToValue, S> ToValue for HashMap<String, T, S> {
    fn to_value(&self) -> Value<'_> {
        Value::Map(self.iter().map(|(k, v)| (k.as_str(), v.to_value())).collect())
    }
}

impl<T: ToValue> ToValue for BTreeMap<String, T> {
    fn to_value(&self) -> Value<'_> {
        Value::Map(self.iter().map(|(k, v)| (k.as_str(), v.to_value())).collect())
    }
}

impl ToValue for serde_json::Value {
    fn to_value(&self) -> Value<'_> {
        Value::from_json(self)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value<'_> {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value<'_> {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<u64> for Value<'_> {
    fn from(n: u64) -> Self {
        Value::Uint(n)
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<'a> From<Vec<Value<'a>>> for Value<'a> {
    fn from(items: Vec<Value<'a>>) -> Self {
        Value::List(items)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Value::Null, true)]
    #[case(Value::Int(0), true)]
    #[case(Value::Int(-1), false)]
    #[case(Value::Uint(0), true)]
    #[case(Value::Float(0.0), true)]
    #[case(Value::Bool(false), true)]
    #[case(Value::Bool(true), false)]
    #[case(Value::Text(""), true)]
    #[case(Value::Text("a"), false)]
    #[case(Value::List(vec![]), true)]
    #[case(Value::List(vec![Value::Int(0)]), false)]
    #[case(Value::Map(vec![]), true)]
    fn vacuity(#[case] value: Value<'static>, #[case] vacuous: bool) {
        assert_eq!(value.is_vacuous(), vacuous);
    }

    #[test]
    fn text_length_counts_chars() {
        assert_eq!(Value::Text("héllo").len(), Some(5));
        assert_eq!(Value::Int(12).len(), None);
    }

    #[test]
    fn option_and_vec_conversion() {
        let none: Option<String> = None;
        assert!(none.to_value().is_null());

        let some = Some(3_u8);
        assert!(matches!(some.to_value(), Value::Uint(3)));

        let items = vec![1_i32, 2];
        assert_eq!(items.to_value().len(), Some(2));
    }

    #[test]
    fn json_conversion() {
        let doc = json!({"name": "Ada", "age": 36, "tags": [], "big": u64::MAX, "ratio": 0.5});
        let value = Value::from_json(&doc);

        let Value::Map(entries) = value else {
            panic!("expected a map");
        };
        let get = |key: &str| entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v.clone());

        assert!(matches!(get("name"), Some(Value::Text("Ada"))));
        assert!(matches!(get("age"), Some(Value::Int(36))));
        assert!(matches!(get("big"), Some(Value::Uint(u64::MAX))));
        assert!(matches!(get("ratio"), Some(Value::Float(_))));
        assert!(get("tags").is_some_and(|v| v.is_vacuous()));
    }
}
