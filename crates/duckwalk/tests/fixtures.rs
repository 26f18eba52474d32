//! Traversal behaviour over literal record fixtures.

#![cfg(feature = "json")]

use std::cell::RefCell;
use std::rc::Rc;

use duckwalk::{
    each, has_own_key, is_object_like, is_sequence_like, map, own_keys, resolve, to_pairs, Error,
    Value,
};
use serde_json::json;

// ============================================================================
// Test helpers
// ============================================================================

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn double() -> Value {
    Value::function(|args| {
        let n = args.first().and_then(Value::as_number).unwrap_or(f64::NAN);
        Ok(Value::from(n * 2.0))
    })
}

fn numbers(values: &[f64]) -> Vec<Value> {
    values.iter().copied().map(Value::from).collect()
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn record_is_object_like() {
    assert!(is_object_like(&v(json!({"a": 1}))));
}

#[test]
fn sequence_like_fixtures() {
    assert!(is_sequence_like(&v(json!([1, 2, 3, 4, 5]))));
    assert!(is_sequence_like(&v(json!({"length": 0}))));
    assert!(is_sequence_like(&v(json!({"0": 0, "1": 1, "2": 2, "length": 3}))));
    assert!(!is_sequence_like(&v(json!({"a": 1, "b": 2}))));
}

#[test]
fn length_without_last_index_is_a_mapping() {
    // Index 1 is missing, so `length` is just another key.
    assert!(!is_sequence_like(&v(json!({"a": 1, "b": "2", "length": 2}))));
    assert!(is_sequence_like(&v(json!({"a": 1, "1": "2", "length": 2}))));
}

// ============================================================================
// Keys and pairs
// ============================================================================

#[test]
fn keys_of_fixture() {
    let obj = v(json!({"a": "a", "b": "b"}));
    let mut keys = own_keys(&obj);
    keys.sort();
    keys.dedup();
    assert_eq!(keys, vec!["a", "b"]);
    assert!(has_own_key(&obj, "a"));
}

#[test]
fn pairs_of_fixture() {
    let pairs = to_pairs(&v(json!({"name": "srbtj", "age": 18})));
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].0, "name");
    assert_eq!(pairs[1].1, Value::from(18));
}

// ============================================================================
// Selectors
// ============================================================================

#[test]
fn property_selector_on_fixture() {
    let age = resolve(&Value::from("age"), &Value::Undefined, None);
    let person = v(json!({"name": "srbtj", "age": 18}));
    assert_eq!(age.call1(&person).unwrap(), Value::from(18));
}

#[test]
fn match_selector_ignores_key_order() {
    let attrs = v(json!({"age": 18, "name": "srbtj"}));
    let matcher = resolve(&attrs, &Value::Undefined, None);

    let same = v(json!({"name": "srbtj", "age": 18}));
    let older = v(json!({"name": "srbtj", "age": 19}));
    assert_eq!(matcher.call1(&same).unwrap(), Value::Bool(true));
    assert_eq!(matcher.call1(&older).unwrap(), Value::Bool(false));
}

// ============================================================================
// Traversal
// ============================================================================

#[test]
fn map_doubles_pseudo_sequence() {
    let obj = v(json!({"0": 1, "1": 2, "2": 3, "length": 3}));
    let out = map(&obj, &double(), &Value::Undefined).unwrap();
    assert_eq!(out, numbers(&[2.0, 4.0, 6.0]));
}

#[test]
fn map_doubles_with_context() {
    let obj = v(json!({"0": 1, "1": 2, "2": 3, "length": 3}));
    let out = map(&obj, &double(), &Value::array(Vec::<Value>::new())).unwrap();
    assert_eq!(out, numbers(&[2.0, 4.0, 6.0]));
}

#[test]
fn map_over_record_values() {
    let obj = v(json!({"one": 1, "two": 2}));
    let out = map(&obj, &double(), &Value::Undefined).unwrap();
    assert_eq!(out, numbers(&[2.0, 4.0]));
}

#[test]
fn map_over_string_characters() {
    let out = map(&Value::from("ab"), &Value::Undefined, &Value::Undefined).unwrap();
    assert_eq!(out, vec![Value::from("a"), Value::from("b")]);
}

#[test]
fn map_over_nothing() {
    for empty in [Value::Undefined, Value::Null, Value::from("")] {
        assert!(map(&empty, &double(), &Value::Undefined).unwrap().is_empty());
    }
}

#[test]
fn each_accumulates_in_order() {
    let total = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&total);
    let push = Value::function(move |args| {
        sink.borrow_mut().push(args[0].clone());
        Ok(Value::Undefined)
    });

    let obj = v(json!({"0": "x", "1": "y", "length": 2}));
    let out = each(&obj, &push, &Value::Undefined).unwrap();

    assert!(out.strict_eq(&obj));
    assert_eq!(*total.borrow(), vec![Value::from("x"), Value::from("y")]);
}

#[test]
fn each_error_reaches_caller() {
    let fail = Value::function(|args| Err(Error::thrown(args[1].clone())));
    let err = each(&v(json!({"k": 1})), &fail, &Value::Undefined).unwrap_err();
    assert_eq!(err.to_string(), "uncaught k");
}

#[test]
fn json_round_trip_of_mapped_records() {
    let people = v(json!([{"name": "a", "tags": ["x"]}, {"name": "b", "tags": []}]));
    let tags = map(&people, &Value::from("tags"), &Value::Undefined).unwrap();
    let as_json: Vec<_> = tags.iter().map(Value::to_json).collect();
    assert_eq!(as_json, vec![json!(["x"]), json!([])]);
}
