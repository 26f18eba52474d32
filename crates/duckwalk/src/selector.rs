//! Selector resolution.
//!
//! A selector is whatever a caller hands a traversal to say what to do with
//! each element: nothing, a function, a partial-match record, or a key name.
//! [`Selector::classify`] decides which once, and [`Selector::into_callable`]
//! turns the decision into a [`Callable`], so traversals never re-branch
//! per element.

use crate::bind::{bind, Arity};
use crate::callable::{arg, Callable};
use crate::classify::{is_empty_marker, is_function, is_object_like};
use crate::keys::to_pairs;
use crate::value::Value;

/// The resolved meaning of a selector value.
#[derive(Debug, Clone)]
pub enum Selector {
    /// Absent selector, passes elements through.
    Identity,
    /// A function, bound to the caller's context.
    Call(Value),
    /// Required `(key, value)` pairs.
    Matches(Vec<(String, Value)>),
    /// A property name to read.
    Property(String),
}

impl Selector {
    /// Classifies a selector value. Priority: empty marker, function,
    /// object-like, then anything else as a key name.
    pub fn classify(selector: &Value) -> Self {
        if is_empty_marker(selector) {
            Selector::Identity
        } else if is_function(selector) {
            Selector::Call(selector.clone())
        } else if is_object_like(selector) {
            Selector::Matches(to_pairs(selector))
        } else {
            Selector::Property(selector.to_string())
        }
    }

    pub fn into_callable(self, context: &Value, arity: Option<Arity>) -> Callable {
        match self {
            Selector::Identity => identity(),
            Selector::Call(function) => bind(&function, context, arity),
            Selector::Matches(pairs) => matcher(pairs),
            Selector::Property(key) => property(key),
        }
    }
}

/// Resolves any selector value into a callable. Never fails.
///
/// # Example
///
/// ```
/// use duckwalk::{resolve, Object, Value};
///
/// let adult = resolve(&Value::from(Object::new().with("age", 18)), &Value::Undefined, None);
/// let age = resolve(&Value::from("age"), &Value::Undefined, None);
///
/// let person = Value::from(Object::new().with("name", "x").with("age", 18));
/// assert_eq!(adult.call1(&person).unwrap(), Value::from(true));
/// assert_eq!(age.call1(&person).unwrap(), Value::from(18));
/// ```
pub fn resolve(selector: &Value, context: &Value, arity: Option<Arity>) -> Callable {
    Selector::classify(selector).into_callable(context, arity)
}

/// Returns its first argument.
pub fn identity() -> Callable {
    Callable::new(|args| Ok(arg(args, 0)))
}

/// Reads `key` from its first argument.
pub fn property(key: impl Into<String>) -> Callable {
    let key = key.into();
    Callable::new(move |args| Ok(arg(args, 0).get(&key)))
}

/// Partial matcher over the own enumerable pairs of `attrs`.
///
/// The returned callable yields `true` when its first argument owns every
/// captured key with a strictly equal value. With no pairs everything
/// matches; an empty-marker candidate matches only then.
pub fn matches(attrs: &Value) -> Callable {
    matcher(to_pairs(attrs))
}

fn matcher(pairs: Vec<(String, Value)>) -> Callable {
    Callable::new(move |args| Ok(Value::Bool(is_match(&pairs, &arg(args, 0)))))
}

fn is_match(pairs: &[(String, Value)], candidate: &Value) -> bool {
    if is_empty_marker(candidate) {
        return pairs.is_empty();
    }
    pairs.iter().all(|(key, expected)| {
        candidate.has_own_property(key) && candidate.get(key).strict_eq(expected)
    })
}
