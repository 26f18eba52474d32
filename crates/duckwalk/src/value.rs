//! Dynamic runtime values.
//!
//! The [`Value`] enum models every runtime shape the traversal core works
//! with: the empty markers, primitives, true sequences, property-bearing
//! records, functions, dates and patterns. Reference shapes live behind
//! [`Rc`], so cloning a value is cheap and strict equality on them is
//! identity.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use regex::Regex;

use crate::error::Result;

/// A dynamically shaped runtime value.
///
/// # Example
///
/// ```
/// use duckwalk::{Object, Value};
///
/// let record = Value::from(Object::new().with("name", "srbtj").with("age", 18));
///
/// assert_eq!(record.get("age"), Value::from(18));
/// assert!(record.get("missing").is_undefined());
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean primitive.
    Bool(bool),
    /// Number primitive.
    Number(f64),
    /// String primitive.
    String(Rc<str>),
    /// True ordered sequence.
    Array(Rc<Vec<Value>>),
    /// Record with ordered own properties.
    Object(Rc<Object>),
    /// Callable carrying its own properties.
    Function(Rc<Function>),
    /// Date object.
    Date(Rc<Timestamp>),
    /// Regular expression object.
    Pattern(Rc<Regex>),
}

impl Value {
    /// Wraps a native closure that ignores its receiver.
    pub fn function(body: impl Fn(&[Value]) -> Result<Value> + 'static) -> Self {
        Value::Function(Rc::new(Function::new(body)))
    }

    /// Builds an array value from anything yielding values.
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Array(Rc::new(items.into_iter().map(Into::into).collect()))
    }

    /// Returns `true` if this is `undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns `true` if this is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Extracts the boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the number, if this is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the string slice, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Extracts the record, if this is an object.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Extracts the function, if this is one.
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(function) => Some(function),
            _ => None,
        }
    }

    /// The `typeof` label of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Function(_) => "function",
            Value::Null
            | Value::Array(_)
            | Value::Object(_)
            | Value::Date(_)
            | Value::Pattern(_) => "object",
        }
    }

    /// The internal class tag, as reported by `[object <tag>]`.
    pub fn internal_tag(&self) -> &str {
        match self {
            Value::Undefined => "Undefined",
            Value::Null => "Null",
            Value::Bool(_) => "Boolean",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Object(object) => object.tag(),
            Value::Function(_) => "Function",
            Value::Date(_) => "Date",
            Value::Pattern(_) => "RegExp",
        }
    }

    /// Reads a property. Missing properties, and every property of a
    /// primitive without a wrapper key, read as [`Value::Undefined`].
    ///
    /// String indices count characters, so an index read on a string is
    /// linear in the index.
    pub fn get(&self, key: &str) -> Value {
        match self {
            Value::Array(items) => {
                if key == "length" {
                    return Value::from(items.len());
                }
                parse_index(key)
                    .and_then(|index| items.get(index).cloned())
                    .unwrap_or_default()
            }
            Value::String(s) => {
                if key == "length" {
                    return Value::from(s.chars().count());
                }
                parse_index(key)
                    .and_then(|index| s.chars().nth(index))
                    .map(|c| Value::from(c.to_string()))
                    .unwrap_or_default()
            }
            Value::Object(object) => object.get(key).cloned().unwrap_or_default(),
            Value::Function(function) => function
                .properties()
                .get(key)
                .cloned()
                .unwrap_or_default(),
            _ => Value::Undefined,
        }
    }

    /// Reads the element at `index`.
    pub fn get_index(&self, index: usize) -> Value {
        match self {
            Value::Array(items) => items.get(index).cloned().unwrap_or_default(),
            _ => self.get(&index.to_string()),
        }
    }

    /// The `key in value` test: own or inherited, enumerable or not.
    ///
    /// Primitives are looked up on their wrapper object, so a string has its
    /// indices and `length` while numbers and booleans have nothing.
    pub fn has_property(&self, key: &str) -> bool {
        match self {
            Value::Object(object) => object.has(key),
            Value::Function(function) => function.properties().has(key),
            _ => self.has_own_property(key),
        }
    }

    /// Whether the value (or its wrapper) owns `key`, enumerable or not.
    pub fn has_own_property(&self, key: &str) -> bool {
        match self {
            Value::Array(items) => {
                key == "length" || parse_index(key).is_some_and(|i| i < items.len())
            }
            Value::String(s) => {
                key == "length" || parse_index(key).is_some_and(|i| i < s.chars().count())
            }
            Value::Object(object) => object.property(key).is_some(),
            Value::Function(function) => function.properties().property(key).is_some(),
            _ => false,
        }
    }

    /// Strict equality (`===`).
    ///
    /// Primitives compare by value, with `NaN` unequal to itself and the two
    /// zeros equal. Reference shapes compare by identity.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Date(a), Value::Date(b)) => Rc::ptr_eq(a, b),
            (Value::Pattern(a), Value::Pattern(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_eq(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !matches!(item, Value::Undefined | Value::Null) {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Value::Object(object) => write!(f, "[object {}]", object.tag()),
            Value::Function(function) => {
                write!(f, "function {}()", function.name().unwrap_or_default())
            }
            Value::Date(ts) => write!(f, "{}", ts.0),
            Value::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

/// Renders a number the way property keys spell it.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        format!("{n}")
    }
}

/// Parses a canonical array index ("0", "1", ... with no leading zeros).
pub(crate) fn parse_index(key: &str) -> Option<usize> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

/// A single own property slot.
#[derive(Debug, Clone)]
pub struct Property {
    pub value: Value,
    pub enumerable: bool,
}

/// A record of ordered own properties.
///
/// Properties keep insertion order; redefining a key replaces its value in
/// place. An object may delegate missing reads to a prototype and may carry
/// a class tag other than `"Object"`.
///
/// # Example
///
/// ```
/// use duckwalk::{Object, Value};
///
/// let base = Object::new().with("greeting", "hi");
/// let child = Object::new().with("name", "x").with_prototype(base);
///
/// assert!(child.has("greeting"));
/// assert!(child.property("greeting").is_none());
/// assert_eq!(child.keys().collect::<Vec<_>>(), vec!["name"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Object {
    properties: IndexMap<String, Property>,
    prototype: Option<Rc<Object>>,
    tag: Option<String>,
}

impl Object {
    /// Creates an empty `"Object"`-tagged record.
    pub fn new() -> Self {
        Object::default()
    }

    /// Adds an enumerable property.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.define(key, value, true);
        self
    }

    /// Adds a non-enumerable property.
    pub fn with_hidden(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.define(key, value, false);
        self
    }

    /// Sets the object reads fall back to.
    pub fn with_prototype(mut self, prototype: impl Into<Rc<Object>>) -> Self {
        self.prototype = Some(prototype.into());
        self
    }

    /// Sets the class tag reported by [`Value::internal_tag`].
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Sets an enumerable property.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.define(key, value, true);
    }

    /// Defines a property with explicit enumerability.
    pub fn define(&mut self, key: impl Into<String>, value: impl Into<Value>, enumerable: bool) {
        let key = key.into();
        let property = Property {
            value: value.into(),
            enumerable,
        };
        // An existing key keeps its slot.
        self.properties.insert(key, property);
    }

    /// The own property slot for `key`.
    pub fn property(&self, key: &str) -> Option<&Property> {
        self.properties.get(key)
    }

    /// Reads `key` from own properties, then from the prototype chain.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self.property(key) {
            Some(property) => Some(&property.value),
            None => self.prototype.as_deref().and_then(|proto| proto.get(key)),
        }
    }

    /// Whether `key` is an own or inherited property.
    pub fn has(&self, key: &str) -> bool {
        self.property(key).is_some()
            || self.prototype.as_deref().is_some_and(|proto| proto.has(key))
    }

    /// Own enumerable keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(|(_, property)| property.enumerable)
            .map(|(key, _)| key.as_str())
    }

    /// The object missing reads fall back to.
    pub fn prototype(&self) -> Option<&Object> {
        self.prototype.as_deref()
    }

    /// The class tag, `"Object"` unless set.
    pub fn tag(&self) -> &str {
        self.tag.as_deref().unwrap_or("Object")
    }

    /// Number of own properties, enumerable or not.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if there are no own properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

type NativeFn = dyn Fn(&Value, &[Value]) -> Result<Value>;

/// A native function with its own properties.
///
/// The body receives the receiver (`this`) and the positional arguments.
pub struct Function {
    name: Option<String>,
    properties: Object,
    body: Box<NativeFn>,
}

impl Function {
    /// Creates a function that ignores its receiver.
    pub fn new(body: impl Fn(&[Value]) -> Result<Value> + 'static) -> Self {
        Function::with_receiver(move |_, args| body(args))
    }

    /// Creates a function that observes its receiver.
    pub fn with_receiver(body: impl Fn(&Value, &[Value]) -> Result<Value> + 'static) -> Self {
        Function {
            name: None,
            properties: Object::new().with_tag("Function"),
            body: Box::new(body),
        }
    }

    /// Sets the name shown when the function is displayed.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds an enumerable own property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.set(key, value);
        self
    }

    /// The function's name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The function's own properties.
    pub fn properties(&self) -> &Object {
        &self.properties
    }

    /// Invokes the body with an explicit receiver.
    pub fn call(&self, receiver: &Value, args: &[Value]) -> Result<Value> {
        (self.body)(receiver, args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("properties", &self.properties)
            .finish_non_exhaustive()
    }
}

/// A date, as milliseconds since the Unix epoch.
///
/// Dates are compared by identity like any other object; the ordering here
/// is for callers sorting their own fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

// Conversions from Rust types

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! number_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

number_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(items))
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(Rc::new(object))
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Value::Function(Rc::new(function))
    }
}

impl From<Timestamp> for Value {
    fn from(ts: Timestamp) -> Self {
        Value::Date(Rc::new(ts))
    }
}

impl From<Regex> for Value {
    fn from(regex: Regex) -> Self {
        Value::Pattern(Rc::new(regex))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(Rc::new(iter.into_iter().collect()))
    }
}
