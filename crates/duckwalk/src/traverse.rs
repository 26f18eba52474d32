//! The `each` and `map` traversals.
//!
//! Both compute the collection's [`Shape`] once, then walk indices
//! `0..len` for sequence-like values or own keys for mapping-like ones.
//! Callables run strictly in that order and the first error aborts the walk.

use tracing::trace;

use crate::bind::{bind, Arity};
use crate::callable::Callable;
use crate::classify::{is_empty_marker, Shape};
use crate::error::Result;
use crate::keys::own_keys;
use crate::selector::resolve;
use crate::value::Value;

/// Calls `iteratee` with `(element, index_or_key, collection)` for every
/// element and returns the collection unchanged.
///
/// The iteratee is bound to `context` but not run through selector
/// resolution; it must be a function. Sequence-like collections are walked
/// by index, holes included, reading `undefined` where nothing is stored.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use duckwalk::{each, Value};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let log = Rc::clone(&seen);
/// let iteratee = Value::function(move |args| {
///     log.borrow_mut().push(args[1].to_string());
///     Ok(Value::Undefined)
/// });
///
/// let items = Value::array(["a", "b"]);
/// let out = each(&items, &iteratee, &Value::Undefined).unwrap();
/// assert_eq!(out, items);
/// assert_eq!(*seen.borrow(), vec!["0", "1"]);
/// ```
pub fn each(collection: &Value, iteratee: &Value, context: &Value) -> Result<Value> {
    if is_empty_marker(collection) {
        return Ok(collection.clone());
    }
    trace!(bound = !is_empty_marker(context), "each");
    let callable = bind(iteratee, context, Some(Arity::Three));
    walk(collection, &callable, |_| Ok(()))?;
    Ok(collection.clone())
}

/// Collects the result of `selector` for every element into a new vector.
///
/// The selector goes through [`resolve`]: a function is bound to `context`,
/// a record becomes a partial matcher, a scalar reads that property, and an
/// empty marker passes elements through. A numeric domain of length `N`
/// always yields `N` results.
///
/// # Example
///
/// ```
/// use duckwalk::{map, Object, Value};
///
/// let pseudo = Value::from(Object::new().with("0", 1).with("1", 2).with("2", 3).with("length", 3));
/// let double = Value::function(|args| Ok(Value::from(args[0].as_number().unwrap_or(f64::NAN) * 2.0)));
///
/// let out = map(&pseudo, &double, &Value::Undefined).unwrap();
/// assert_eq!(out, vec![Value::from(2), Value::from(4), Value::from(6)]);
/// ```
pub fn map(collection: &Value, selector: &Value, context: &Value) -> Result<Vec<Value>> {
    if is_empty_marker(collection) {
        return Ok(Vec::new());
    }
    trace!(bound = !is_empty_marker(context), "map");
    let callable = resolve(selector, context, Some(Arity::Three));
    let mut results = Vec::new();
    walk(collection, &callable, |result| {
        results.push(result);
        Ok(())
    })?;
    Ok(results)
}

fn walk(
    collection: &Value,
    callable: &Callable,
    mut sink: impl FnMut(Value) -> Result<()>,
) -> Result<()> {
    match Shape::of(collection) {
        Shape::Empty => {
            trace!("empty collection, nothing to walk");
        }
        Shape::Sequence { len } => {
            trace!(len, "walking sequence-like collection");
            // Strings are split once so each element read is constant time.
            let chars: Option<Vec<char>> = collection.as_str().map(|s| s.chars().collect());
            for index in 0..len {
                let element = match &chars {
                    Some(chars) => chars
                        .get(index)
                        .map(|c| Value::from(c.to_string()))
                        .unwrap_or_default(),
                    None => collection.get_index(index),
                };
                sink(callable.call3(element, Value::from(index), collection)?)?;
            }
        }
        Shape::Mapping => {
            let keys = own_keys(collection);
            trace!(keys = keys.len(), "walking mapping-like collection");
            for key in keys {
                let element = collection.get(&key);
                sink(callable.call3(element, Value::from(key), collection)?)?;
            }
        }
    }
    Ok(())
}
