//! Dynamic node tree for parsed rule and manifest data

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A parsed data node
///
/// This is the shape any self-describing data format is read into before a
/// rule sees it. Deserialization is untagged, so `(tu: 50)`, `{"tu": 50}`,
/// `[1, 2]` and `"STR_ARMOR1"` map onto the obvious variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Value {
    /// No value / unit
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
    /// Sequence of values
    List(Vec<Value>),
    /// Map of string keys to values
    Map(ValueMap),
}

/// A map of string keys to nodes
///
/// Uses IndexMap to preserve insertion order (saved rules keep a fixed key order)
pub type ValueMap = IndexMap<String, Value>;

impl Value {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get this value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Try to get this value as a map
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key if this value is a map
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Borrow this value as a map or fail with a type error
    pub fn expect_map(&self) -> Result<&ValueMap> {
        self.as_map()
            .ok_or_else(|| Error::type_error("map", self.type_name()))
    }

    /// Borrow this value as an overlay map
    ///
    /// An empty RON struct `()` parses as `Null`; for overlays it means
    /// "no keys", so it yields an empty map.
    pub fn expect_map_or_empty(&self) -> Result<Cow<'_, ValueMap>> {
        if self.is_null() {
            return Ok(Cow::Owned(ValueMap::new()));
        }
        self.expect_map().map(Cow::Borrowed)
    }

    /// Convert to an `i32`, rejecting non-integers and values that do not fit
    pub fn to_i32(&self) -> Result<i32> {
        let raw = self
            .as_int()
            .ok_or_else(|| Error::type_error("int", self.type_name()))?;
        i32::try_from(raw).map_err(|_| Error::OutOfRange {
            value: raw,
            target: "i32",
        })
    }

    /// Convert to a boolean
    pub fn to_bool(&self) -> Result<bool> {
        self.as_bool()
            .ok_or_else(|| Error::type_error("bool", self.type_name()))
    }

    /// Convert to an owned string
    pub fn to_string_value(&self) -> Result<String> {
        self.as_str()
            .map(str::to_owned)
            .ok_or_else(|| Error::type_error("string", self.type_name()))
    }

    /// Convert a list of strings to owned strings
    pub fn to_string_list(&self) -> Result<Vec<String>> {
        let list = self
            .as_list()
            .ok_or_else(|| Error::type_error("list", self.type_name()))?;
        list.iter().map(Value::to_string_value).collect()
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(vec: Vec<T>) -> Self {
        Value::List(vec.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
