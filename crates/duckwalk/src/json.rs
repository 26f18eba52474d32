//! Conversions between [`Value`] and `serde_json::Value`.
//!
//! JSON literals make convenient fixtures: objects keep their key order
//! (the `preserve_order` feature of `serde_json`), numbers become `f64`.
//! Going back to JSON follows the usual stringify rules: `undefined` and
//! functions drop out of objects and become `null` inside arrays,
//! non-finite numbers become `null`, dates become their milliseconds and
//! patterns their source text.

use serde_json::{Map, Value as Json};

use crate::value::{Object, Value};

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::from(s),
            Json::Array(items) => items.into_iter().map(Value::from).collect(),
            Json::Object(map) => {
                let object = map
                    .into_iter()
                    .fold(Object::new(), |object, (key, value)| {
                        object.with(key, Value::from(value))
                    });
                Value::from(object)
            }
        }
    }
}

impl Value {
    /// Converts to a JSON value.
    pub fn to_json(&self) -> Json {
        match self {
            Value::Undefined | Value::Null | Value::Function(_) => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Number(n) => serde_json::Number::from_f64(*n).map_or(Json::Null, Json::Number),
            Value::String(s) => Json::String(s.to_string()),
            Value::Array(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Value::Object(object) => {
                let mut map = Map::new();
                for key in object.keys() {
                    let value = self.get(key);
                    if matches!(value, Value::Undefined | Value::Function(_)) {
                        continue;
                    }
                    map.insert(key.to_string(), value.to_json());
                }
                Json::Object(map)
            }
            Value::Date(ts) => Json::from(ts.0),
            Value::Pattern(regex) => Json::String(regex.as_str().to_string()),
        }
    }
}
