//! Own-key enumeration.

use crate::classify::is_empty_marker;
use crate::value::{parse_index, Value};

/// Own enumerable string keys, in enumeration order.
///
/// Records and functions list their enumerable own properties in insertion
/// order. Arrays and strings list their indices. Everything else has no keys.
pub fn own_keys(value: &Value) -> Vec<String> {
    match value {
        Value::Object(object) => object.keys().map(str::to_string).collect(),
        Value::Function(function) => function.properties().keys().map(str::to_string).collect(),
        Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
        Value::String(s) => (0..s.chars().count()).map(|i| i.to_string()).collect(),
        _ => Vec::new(),
    }
}

/// Whether a non-empty `value` owns `key` as an enumerable property.
///
/// Inherited properties and the built-in `length` of arrays and strings do
/// not count.
pub fn has_own_key(value: &Value, key: &str) -> bool {
    if is_empty_marker(value) {
        return false;
    }
    match value {
        Value::Object(object) => object.property(key).is_some_and(|p| p.enumerable),
        Value::Function(function) => function
            .properties()
            .property(key)
            .is_some_and(|p| p.enumerable),
        Value::Array(_) | Value::String(_) => {
            parse_index(key).is_some() && value.has_own_property(key)
        }
        _ => false,
    }
}

/// `(key, value)` pairs in [`own_keys`] order.
pub fn to_pairs(value: &Value) -> Vec<(String, Value)> {
    own_keys(value)
        .into_iter()
        .map(|key| {
            let item = value.get(&key);
            (key, item)
        })
        .collect()
}
