//! Untyped values flowing through validation.
//!
//! Rules receive whatever the caller hands them: a string from a form, a
//! number decoded from JSON, a list of tags. [`Value`] is the closed set of
//! shapes such data can take, so every rule's type dispatch is an explicit
//! `match` instead of runtime type inspection.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A numeric datum, integral or floating point.
///
/// Equality is numeric across both representations: `Int(1) == Float(1.0)`
/// and `Float(0.0) == Float(-0.0)`.
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// True for `0`, `0.0` and `-0.0`.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Int(i) => *i == 0,
            Self::Float(f) => *f == 0.0,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Int(i) => *i as f64,
            Self::Float(f) => *f,
        }
    }

    /// The exact integer this number holds, if it holds one.
    ///
    /// Floats qualify only when they have no fractional part and fit in an
    /// `i64`.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Float(f) => {
                let in_range = *f >= i64::MIN as f64 && *f < i64::MAX as f64;
                if f.is_finite() && f.fract() == 0.0 && in_range {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => match self.as_integer() {
                Some(i) => write!(f, "{i}"),
                None => write!(f, "{x}"),
            },
        }
    }
}

/// Key of a [`Value::Mapping`] entry.
///
/// Strings holding a canonical decimal integer (`"7"`, `"-3"`, but not
/// `"07"` or `"+3"`) normalize to [`Key::Int`], so positional and labelled
/// entries share one key space.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Normalize a scalar value into the key it would be stored under.
    ///
    /// Returns `None` for sequences and mappings, which cannot be keys.
    pub fn from_value(value: &Value) -> Option<Key> {
        match value {
            Value::Null => Some(Key::Str(String::new())),
            Value::Bool(b) => Some(Key::Int(i64::from(*b))),
            Value::Number(n) => match n.as_integer() {
                Some(i) => Some(Key::Int(i)),
                None => Some(Key::Int(n.as_f64().trunc() as i64)),
            },
            Value::String(s) => Some(Key::from(s.as_str())),
            Value::Sequence(_) | Value::Mapping(_) => None,
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        match s.parse::<i64>() {
            Ok(i) if i.to_string() == s => Key::Int(i),
            _ => Key::Str(s.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::from(s.as_str())
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// An untyped datum handed to a rule.
///
/// # Example
///
/// ```rust
/// use vetting::core::Value;
///
/// let tags = Value::sequence(["red", "green"]);
/// assert_eq!(tags.length(), Some(2));
/// assert!(tags.is_truthy());
///
/// let labelled = Value::mapping([("primary", "red")]);
/// assert_eq!(labelled.values().count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    /// Entries in insertion order.
    Mapping(Vec<(Key, Value)>),
}

impl Value {
    /// Build a sequence from anything convertible into values.
    pub fn sequence<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Build a mapping, keeping entries in the given order.
    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        Value::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Permissive boolean coercion.
    ///
    /// Falsy: `null`, `false`, numeric zero of any sign, `""`, `"0"`, and
    /// empty sequences or mappings. Everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => !n.is_zero(),
            Self::String(s) => !(s.is_empty() || s == "0"),
            Self::Sequence(items) => !items.is_empty(),
            Self::Mapping(entries) => !entries.is_empty(),
        }
    }

    /// Absent, an empty string, or an empty collection.
    ///
    /// Unlike [`Value::is_truthy`], zero and `"0"` are not empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            Self::Sequence(items) => items.is_empty(),
            Self::Mapping(entries) => entries.is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }

    /// Character count of a string or element count of a collection.
    pub fn length(&self) -> Option<usize> {
        match self {
            Self::String(s) => Some(s.chars().count()),
            Self::Sequence(items) => Some(items.len()),
            Self::Mapping(entries) => Some(entries.len()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Element values of a sequence or mapping; empty for scalars.
    pub fn values(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        match self {
            Self::Sequence(items) => Box::new(items.iter()),
            Self::Mapping(entries) => Box::new(entries.iter().map(|(_, v)| v)),
            _ => Box::new(std::iter::empty()),
        }
    }

    /// Whether a collection holds an entry under `key`.
    ///
    /// Sequence keys are positions `0..len`.
    pub fn has_key(&self, key: &Key) -> bool {
        match (self, key) {
            (Self::Sequence(items), Key::Int(i)) => usize::try_from(*i)
                .map(|i| i < items.len())
                .unwrap_or(false),
            (Self::Mapping(entries), _) => entries.iter().any(|(k, _)| k == key),
            _ => false,
        }
    }

    /// Render as JSON. Non-finite floats become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Number(Number::Int(i)) => serde_json::Value::from(*i),
            Self::Number(Number::Float(f)) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Self::Mapping(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

/// Text form used when a value is substituted into a message.
///
/// Null and `false` render empty, `true` renders `1`, integral floats drop
/// their fraction, and collections render as compact JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null | Self::Bool(false) => Ok(()),
            Self::Bool(true) => f.write_str("1"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
            Self::Sequence(_) | Self::Mapping(_) => write!(f, "{}", self.to_json()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Number(Number::Int(i)),
                None => Value::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN))),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(k, v)| (Key::from(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

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

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(Number::Int(i64::from(i)))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Int(i))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        match i64::try_from(n) {
            Ok(i) => Value::Number(Number::Int(i)),
            Err(_) => Value::Number(Number::Float(n as f64)),
        }
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values_are_recognized() {
        let falsy = [
            Value::Null,
            Value::from(false),
            Value::from(0),
            Value::from(0.0),
            Value::from(-0.0),
            Value::from(""),
            Value::from("0"),
            Value::Sequence(vec![]),
            Value::Mapping(vec![]),
        ];

        for value in falsy {
            assert!(!value.is_truthy(), "{value:?} should be falsy");
        }
    }

    #[test]
    fn truthy_values_are_recognized() {
        let truthy = [
            Value::from(true),
            Value::from(1),
            Value::from(-1),
            Value::from(0.5),
            Value::from(f64::NAN),
            Value::from("00"),
            Value::from("0.0"),
            Value::from(" "),
            Value::sequence([0]),
            Value::mapping([("a", Value::Null)]),
        ];

        for value in truthy {
            assert!(value.is_truthy(), "{value:?} should be truthy");
        }
    }

    #[test]
    fn zero_is_not_empty() {
        assert!(!Value::from(0).is_empty());
        assert!(!Value::from("0").is_empty());
        assert!(!Value::from(false).is_empty());
        assert!(Value::Null.is_empty());
        assert!(Value::from("").is_empty());
        assert!(Value::Sequence(vec![]).is_empty());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(Value::from("héllo").length(), Some(5));
        assert_eq!(Value::sequence([1, 2, 3]).length(), Some(3));
        assert_eq!(Value::mapping([("a", 1)]).length(), Some(1));
        assert_eq!(Value::from(12345).length(), None);
        assert_eq!(Value::Null.length(), None);
    }

    #[test]
    fn numbers_compare_across_representations() {
        assert_eq!(Value::from(1), Value::from(1.0));
        assert_eq!(Value::from(0.0), Value::from(-0.0));
        assert_ne!(Value::from(1), Value::from(1.5));
        assert_ne!(Value::from(1), Value::from("1"));
    }

    #[test]
    fn numeric_string_keys_normalize_to_integers() {
        assert_eq!(Key::from("7"), Key::Int(7));
        assert_eq!(Key::from("-3"), Key::Int(-3));
        assert_eq!(Key::from("07"), Key::Str("07".to_string()));
        assert_eq!(Key::from("+3"), Key::Str("+3".to_string()));
        assert_eq!(Key::from_value(&Value::from(2.0)), Some(Key::Int(2)));
        assert_eq!(Key::from_value(&Value::sequence([1])), None);
    }

    #[test]
    fn sequence_keys_are_positions() {
        let value = Value::sequence(["a", "b"]);
        assert!(value.has_key(&Key::Int(0)));
        assert!(value.has_key(&Key::Int(1)));
        assert!(!value.has_key(&Key::Int(2)));
        assert!(!value.has_key(&Key::Int(-1)));
        assert!(!value.has_key(&Key::Str("a".to_string())));
    }

    #[test]
    fn display_uses_text_form() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from(true).to_string(), "1");
        assert_eq!(Value::from(false).to_string(), "");
        assert_eq!(Value::from(5).to_string(), "5");
        assert_eq!(Value::from(5.0).to_string(), "5");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from("foo").to_string(), "foo");
        assert_eq!(Value::sequence([1, 2]).to_string(), "[1,2]");
    }

    #[test]
    fn json_objects_become_ordered_mappings() {
        let value = Value::from(json!({"0": "zero", "label": "x"}));
        match value {
            Value::Mapping(entries) => {
                assert!(entries.contains(&(Key::Int(0), Value::from("zero"))));
                assert!(entries.contains(&(Key::Str("label".to_string()), Value::from("x"))));
            }
            other => panic!("Expected mapping, got {other:?}"),
        }
    }

    #[test]
    fn value_deserializes_from_json() {
        let value: Value = serde_json::from_str(r#"["foo", {"baz": "thud"}, 3, null]"#).unwrap();
        assert_eq!(
            value,
            Value::sequence([
                Value::from("foo"),
                Value::mapping([("baz", "thud")]),
                Value::from(3),
                Value::Null,
            ])
        );
    }

    #[test]
    fn value_serializes_to_json() {
        let value = Value::mapping([("min", 3)]);
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"min":3}"#);
    }

    #[test]
    fn scalar_accessors_match_only_their_variant() {
        assert_eq!(Value::from(" 4 ").as_str(), Some(" 4 "));
        assert_eq!(Value::from(4).as_str(), None);
        assert_eq!(Value::from(2.0).as_number().and_then(|n| n.as_integer()), Some(2));
        assert_eq!(Value::from("2").as_number(), None);
    }
}
