//! In-memory representation of nested input.
//!
//! A [`Value`] is either an atom (null, bool, number, text, bytes) or one of
//! the collection kinds the flattener knows how to walk. Which variants count
//! as collections is decided here, by [`Value::children`], and nowhere else.

use std::fmt;
use std::slice;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use smol_str::SmolStr;

use crate::number::Number;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(SmolStr),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    /// Unordered in spirit; elements are walked in stored order.
    Set(Vec<Value>),
    /// Key/value pairs in insertion order.
    Map(Vec<(Value, Value)>),
}

/// Child iterator of a collection value.
///
/// Maps yield their keys only, the same thing iterating a dictionary yields
/// in most dynamic languages. Values stored under those keys are never
/// visited.
// NOTE: key-only traversal of maps is kept for compatibility; it silently
// drops the mapped values and is worth revisiting.
#[derive(Debug, Clone)]
pub enum Children<'a> {
    Items(slice::Iter<'a, Value>),
    Keys(slice::Iter<'a, (Value, Value)>),
}

impl<'a> Iterator for Children<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Children::Items(it) => it.next(),
            Children::Keys(it) => it.next().map(|(k, _)| k),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Children::Items(it) => it.size_hint(),
            Children::Keys(it) => it.size_hint(),
        }
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self {
            Children::Items(it) => it.next_back(),
            Children::Keys(it) => it.next_back().map(|(k, _)| k),
        }
    }
}

impl Value {
    pub fn tuple<T: Into<Value>>(items: Vec<T>) -> Self {
        Value::Tuple(items.into_iter().map(Into::into).collect())
    }

    pub fn set<T: Into<Value>>(items: Vec<T>) -> Self {
        Value::Set(items.into_iter().map(Into::into).collect())
    }

    pub fn map<K: Into<Value>, V: Into<Value>>(pairs: Vec<(K, V)>) -> Self {
        Value::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn bytes(raw: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(raw.into())
    }

    /// Children of a collection, or `None` for atoms.
    ///
    /// Text and bytes are atoms even though they are sequences.
    pub fn children(&self) -> Option<Children<'_>> {
        match self {
            Value::List(items) | Value::Tuple(items) | Value::Set(items) => {
                Some(Children::Items(items.iter()))
            }
            Value::Map(pairs) => Some(Children::Keys(pairs.iter())),
            Value::Null
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::Text(_)
            | Value::Bytes(_) => None,
        }
    }

    /// The numeric view of an atom, if it has one.
    pub fn as_number(&self) -> Option<Number> {
        match *self {
            Value::Bool(b) => Some(Number::Bool(b)),
            Value::Int(i) => Some(Number::Int(i)),
            Value::Float(f) => Some(Number::Float(f)),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, v) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", v)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Text(s) => write!(f, "{:?}", s.as_str()),
            Value::Bytes(b) => write!(f, "b\"{}\"", b.escape_ascii()),
            Value::List(items) => {
                f.write_str("[")?;
                write_seq(f, items)?;
                f.write_str("]")
            }
            Value::Tuple(items) => {
                f.write_str("(")?;
                write_seq(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Value::Set(items) => {
                f.write_str("{")?;
                write_seq(f, items)?;
                f.write_str("}")
            }
            Value::Map(pairs) => {
                f.write_str("{")?;
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                f.write_str("}")
            }
        }
    }
}

// Collections serialize as sequences, maps as maps. JSON output rejects
// non-text map keys, which only matters for whole trees; leaves are fine.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Bytes(b) => serializer.serialize_bytes(b),
            Value::List(items) | Value::Tuple(items) | Value::Set(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(pairs) => {
                let mut map = serializer.serialize_map(Some(pairs.len()))?;
                for (k, v) in pairs {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

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

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(SmolStr::new(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(SmolStr::from(v))
    }
}

impl From<SmolStr> for Value {
    fn from(v: SmolStr) -> Self {
        Value::Text(v)
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        match v {
            Number::Bool(b) => Value::Bool(b),
            Number::Int(i) => Value::Int(i),
            Number::Float(x) => Value::Float(x),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match v {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Value::Text(SmolStr::from(s)),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Json::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (Value::Text(SmolStr::from(k)), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Builds a nested [`Value::List`].
///
/// Bracketed groups become inner lists; anything else goes through
/// `Value::from`. Negative literals need parentheses: `nested![(-1), 2]`.
///
/// ```
/// use nest_stats::{nested, Value};
/// let v = nested![1, [2.5, [true]], "x"];
/// assert_eq!(v.to_string(), "[1, [2.5, [true]], \"x\"]");
/// ```
#[macro_export]
macro_rules! nested {
    (@elem [$($inner:tt)*]) => {
        $crate::nested![$($inner)*]
    };
    (@elem $other:expr) => {
        $crate::Value::from($other)
    };
    ($($elem:tt),* $(,)?) => {
        $crate::Value::List(vec![$($crate::nested!(@elem $elem)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_bytes_are_atoms() {
        assert!(Value::from("abc").children().is_none());
        assert!(Value::bytes(b"abc".to_vec()).children().is_none());
        assert!(Value::Int(3).children().is_none());
        assert!(Value::Null.children().is_none());
    }

    #[test]
    fn map_children_are_keys() {
        let m = Value::map(vec![("a", 1), ("b", 2)]);
        let keys: Vec<&Value> = m.children().unwrap().collect();
        assert_eq!(keys, vec![&Value::from("a"), &Value::from("b")]);
    }

    #[test]
    fn children_reverse_walk() {
        let t = Value::tuple(vec![1, 2, 3]);
        let rev: Vec<&Value> = t.children().unwrap().rev().collect();
        assert_eq!(rev, vec![&Value::Int(3), &Value::Int(2), &Value::Int(1)]);
    }

    #[test]
    fn macro_builds_nested_lists() {
        let v = nested![1, [2, [(-3)]], "x", true, 0.5];
        assert_eq!(
            v,
            Value::List(vec![
                Value::Int(1),
                Value::List(vec![Value::Int(2), Value::List(vec![Value::Int(-3)])]),
                Value::from("x"),
                Value::Bool(true),
                Value::Float(0.5),
            ])
        );
        assert_eq!(nested![], Value::List(vec![]));
    }

    #[test]
    fn json_conversion_keeps_document_order() {
        let json: serde_json::Value =
            serde_json::from_str(r#"[1, 2.5, {"z": 1, "a": [2]}, null, "s"]"#).unwrap();
        let v = Value::from(json);
        assert_eq!(
            v,
            Value::List(vec![
                Value::Int(1),
                Value::Float(2.5),
                Value::map(vec![
                    ("z", Value::Int(1)),
                    ("a", Value::List(vec![Value::Int(2)])),
                ]),
                Value::Null,
                Value::from("s"),
            ])
        );
    }

    #[test]
    fn leaves_serialize_as_json_scalars() {
        let leaves = vec![
            Value::Int(1),
            Value::Float(2.5),
            Value::Bool(false),
            Value::Null,
            Value::from("s"),
        ];
        assert_eq!(
            serde_json::to_string(&leaves).unwrap(),
            r#"[1,2.5,false,null,"s"]"#
        );
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::tuple(vec![1]).to_string(), "(1,)");
        assert_eq!(Value::set(vec![1, 2]).to_string(), "{1, 2}");
        assert_eq!(Value::map(vec![("k", 1)]).to_string(), "{\"k\": 1}");
        assert_eq!(Value::bytes(b"ab".to_vec()).to_string(), "b\"ab\"");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
    }
}
