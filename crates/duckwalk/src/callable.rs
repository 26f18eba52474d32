//! The uniform callable produced by selector resolution and binding.

use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::value::Value;

type Body = dyn Fn(&[Value]) -> Result<Value>;

/// A cloneable handle over `(element, index_or_key, collection) -> value`.
///
/// Arguments past the end of the slice read as [`Value::Undefined`].
#[derive(Clone)]
pub struct Callable(Rc<Body>);

impl Callable {
    pub fn new(body: impl Fn(&[Value]) -> Result<Value> + 'static) -> Self {
        Callable(Rc::new(body))
    }

    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.0)(args)
    }

    /// Calls with a single element.
    pub fn call1(&self, value: &Value) -> Result<Value> {
        self.call(std::slice::from_ref(value))
    }

    /// Calls with the full traversal argument list.
    pub fn call3(&self, value: Value, key: Value, collection: &Value) -> Result<Value> {
        self.call(&[value, key, collection.clone()])
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable")
    }
}

/// Positional argument `index`, or `undefined` past the end.
pub(crate) fn arg(args: &[Value], index: usize) -> Value {
    args.get(index).cloned().unwrap_or_default()
}
