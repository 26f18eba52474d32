//! Runtime shape classification.
//!
//! Every [`Value`] falls into exactly one [`Shape`]: an empty marker, a
//! sequence-like value walked by index, or a mapping-like value walked by
//! key. The empty-marker check always wins.

use crate::value::Value;

/// `undefined`, `null`, or the empty string.
pub fn is_empty_marker(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Functions and non-null objects. Functions count because they carry
/// properties.
pub fn is_object_like(value: &Value) -> bool {
    matches!(
        value,
        Value::Function(_) | Value::Array(_) | Value::Object(_) | Value::Date(_) | Value::Pattern(_)
    )
}

/// Returns `true` only for functions.
pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

/// Closed runtime type derived from a value's internal tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeType {
    Boolean,
    Number,
    String,
    Function,
    Sequence,
    Date,
    Pattern,
    Undefined,
    Null,
    Object,
    /// An internal tag outside the table, e.g. an object tagged `"Map"`.
    Unknown,
}

impl RuntimeType {
    /// Looks up an internal tag (`"Array"`, `"RegExp"`, ...).
    pub fn from_internal_tag(tag: &str) -> Self {
        match tag {
            "Boolean" => RuntimeType::Boolean,
            "Number" => RuntimeType::Number,
            "String" => RuntimeType::String,
            "Function" => RuntimeType::Function,
            "Array" => RuntimeType::Sequence,
            "Date" => RuntimeType::Date,
            "RegExp" => RuntimeType::Pattern,
            "Undefined" => RuntimeType::Undefined,
            "Null" => RuntimeType::Null,
            "Object" => RuntimeType::Object,
            _ => RuntimeType::Unknown,
        }
    }

    /// Classifies a value by its internal tag.
    pub fn of(value: &Value) -> Self {
        RuntimeType::from_internal_tag(value.internal_tag())
    }

    /// The lowercase label, e.g. `"sequence"`.
    pub fn label(self) -> &'static str {
        match self {
            RuntimeType::Boolean => "boolean",
            RuntimeType::Number => "number",
            RuntimeType::String => "string",
            RuntimeType::Function => "function",
            RuntimeType::Sequence => "sequence",
            RuntimeType::Date => "date",
            RuntimeType::Pattern => "pattern",
            RuntimeType::Undefined => "undefined",
            RuntimeType::Null => "null",
            RuntimeType::Object => "object",
            RuntimeType::Unknown => "unknown",
        }
    }
}

/// Shorthand for [`RuntimeType::of`].
pub fn runtime_type(value: &Value) -> RuntimeType {
    RuntimeType::of(value)
}

/// Duck-typed sequence check.
///
/// True for arrays, for anything whose `length` is the number `0`, and for
/// anything whose `length` is a positive integer with index `length - 1`
/// present (own or inherited). So `{0: 'a', 1: 'b', length: 2}` qualifies
/// while `{length: 2}` alone does not.
pub fn is_sequence_like(value: &Value) -> bool {
    sequence_len(value).is_some()
}

fn sequence_len(value: &Value) -> Option<usize> {
    if is_empty_marker(value) {
        return None;
    }
    if let Value::Array(items) = value {
        return Some(items.len());
    }
    let length = value.get("length").as_number()?;
    if length == 0.0 {
        return Some(0);
    }
    if length > 0.0 && length.fract() == 0.0 && length <= f64::from(u32::MAX) {
        let len = length as usize;
        return value.has_property(&(len - 1).to_string()).then_some(len);
    }
    None
}

/// How a traversal walks a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Nothing to walk.
    Empty,
    /// Walk indices `0..len`.
    Sequence { len: usize },
    /// Walk own enumerable keys.
    Mapping,
}

impl Shape {
    /// Computes the shape; empty markers win over everything else.
    pub fn of(value: &Value) -> Self {
        if is_empty_marker(value) {
            return Shape::Empty;
        }
        match sequence_len(value) {
            Some(len) => Shape::Sequence { len },
            None => Shape::Mapping,
        }
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;
    use crate::value::{Object, Timestamp};

    fn record(pairs: &[(&str, Value)]) -> Value {
        let object = pairs
            .iter()
            .fold(Object::new(), |o, (k, v)| o.with(*k, v.clone()));
        Value::from(object)
    }

    #[test]
    fn empty_markers() {
        assert!(is_empty_marker(&Value::Undefined));
        assert!(is_empty_marker(&Value::Null));
        assert!(is_empty_marker(&Value::from("")));
        assert!(!is_empty_marker(&Value::from(0)));
        assert!(!is_empty_marker(&Value::from(false)));
        assert!(!is_empty_marker(&Value::from(" ")));
    }

    #[test]
    fn object_like() {
        assert!(is_object_like(&record(&[("a", Value::from(1))])));
        assert!(is_object_like(&Value::function(|_| Ok(Value::Undefined))));
        assert!(is_object_like(&Value::array([1])));
        assert!(!is_object_like(&Value::Null));
        assert!(!is_object_like(&Value::from("a")));
        assert!(!is_object_like(&Value::from(1)));
    }

    #[test]
    fn functions() {
        assert!(is_function(&Value::function(|_| Ok(Value::Undefined))));
        assert!(!is_function(&Value::Undefined));
        assert!(!is_function(&record(&[])));
    }

    #[test]
    fn runtime_types() {
        assert_eq!(runtime_type(&Value::from(true)), RuntimeType::Boolean);
        assert_eq!(runtime_type(&Value::from(1)), RuntimeType::Number);
        assert_eq!(runtime_type(&Value::from("a")), RuntimeType::String);
        assert_eq!(runtime_type(&Value::array([1])), RuntimeType::Sequence);
        assert_eq!(runtime_type(&Value::from(Timestamp(0))), RuntimeType::Date);
        assert_eq!(
            runtime_type(&Value::from(Regex::new("x").unwrap())),
            RuntimeType::Pattern
        );
        assert_eq!(runtime_type(&Value::Undefined), RuntimeType::Undefined);
        assert_eq!(runtime_type(&Value::Null), RuntimeType::Null);
        assert_eq!(runtime_type(&record(&[])), RuntimeType::Object);
        assert_eq!(
            runtime_type(&Value::from(Object::new().with_tag("Map"))),
            RuntimeType::Unknown
        );
        assert_eq!(RuntimeType::Sequence.label(), "sequence");
        assert_eq!(RuntimeType::Unknown.label(), "unknown");
    }

    #[test]
    fn sequence_like_records() {
        assert!(is_sequence_like(&record(&[("length", Value::from(0))])));
        assert!(!is_sequence_like(&record(&[("a", Value::from(1)), ("b", Value::from(2))])));
        assert!(is_sequence_like(&record(&[
            ("0", Value::from(0)),
            ("1", Value::from(1)),
            ("2", Value::from(2)),
            ("length", Value::from(3)),
        ])));
        // `{length: 2}` without index 1 is a plain mapping.
        assert!(!is_sequence_like(&record(&[("length", Value::from(2))])));
    }

    #[test]
    fn sequence_like_odd_lengths() {
        assert!(!is_sequence_like(&record(&[("0", Value::from(0)), ("length", Value::from("1"))])));
        assert!(!is_sequence_like(&record(&[("0", Value::from(0)), ("length", Value::from(1.5))])));
        assert!(!is_sequence_like(&record(&[("0", Value::from(0)), ("length", Value::from(-1))])));
        assert!(!is_sequence_like(&record(&[("length", Value::from(f64::NAN))])));
    }

    #[test]
    fn sequence_like_inherited_index() {
        let proto = Object::new().with("1", "b");
        let value = Value::from(Object::new().with("length", 2).with_prototype(proto));
        assert!(is_sequence_like(&value));
    }

    #[test]
    fn sequence_like_builtins() {
        assert!(is_sequence_like(&Value::array(Vec::<Value>::new())));
        assert!(is_sequence_like(&Value::from("abc")));
        assert!(!is_sequence_like(&Value::from("")));
        assert!(!is_sequence_like(&Value::Null));
        assert!(!is_sequence_like(&Value::from(3)));
        assert!(!is_sequence_like(&Value::function(|_| Ok(Value::Undefined))));
    }

    #[test]
    fn shapes() {
        assert_eq!(Shape::of(&Value::Undefined), Shape::Empty);
        assert_eq!(Shape::of(&Value::from("")), Shape::Empty);
        assert_eq!(Shape::of(&Value::array([1, 2])), Shape::Sequence { len: 2 });
        assert_eq!(Shape::of(&Value::from("ab")), Shape::Sequence { len: 2 });
        assert_eq!(Shape::of(&record(&[("a", Value::from(1))])), Shape::Mapping);
        assert_eq!(Shape::of(&Value::from(7)), Shape::Mapping);
    }
}
