//! Receiver binding with arity-limited argument lists.
//!
//! A bound callable invokes its function with a fixed receiver and only the
//! positional arguments its [`Arity`] allows. Without a receiver the function
//! is used as-is.

use crate::callable::{arg, Callable};
use crate::classify::is_empty_marker;
use crate::error::{Error, Result};
use crate::value::Value;

/// How many positional arguments a bound callable forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arity {
    /// `(element)`
    One,
    /// `(element, index_or_key)`
    Two,
    /// `(element, index_or_key, collection)`
    #[default]
    Three,
    /// Every argument, unmodified.
    Full,
}

impl Arity {
    /// Maps an argument count: 0 and 3 give the default, 1 and 2 limit,
    /// anything else forwards everything.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 | 3 => Arity::Three,
            1 => Arity::One,
            2 => Arity::Two,
            _ => Arity::Full,
        }
    }
}

/// Binds `function` to `context`.
///
/// An empty-marker context returns the function unchanged, invoked with an
/// `undefined` receiver and every argument. `None` arity means
/// [`Arity::Three`]. Invoking a bound non-function fails with
/// [`Error::NotCallable`].
///
/// # Example
///
/// ```
/// use duckwalk::{bind, Arity, Function, Value};
///
/// let describe = Value::from(Function::with_receiver(|this, args| {
///     Ok(Value::from(format!("{}:{}", this, args.len())))
/// }));
///
/// let bound = bind(&describe, &Value::from("ctx"), Some(Arity::One));
/// let out = bound.call3(Value::from(1), Value::from(0), &Value::Null).unwrap();
/// assert_eq!(out, Value::from("ctx:1"));
/// ```
pub fn bind(function: &Value, context: &Value, arity: Option<Arity>) -> Callable {
    let function = function.clone();
    if is_empty_marker(context) {
        return Callable::new(move |args| invoke(&function, &Value::Undefined, args));
    }

    let context = context.clone();
    match arity.unwrap_or_default() {
        Arity::One => Callable::new(move |args| invoke(&function, &context, &[arg(args, 0)])),
        Arity::Two => Callable::new(move |args| {
            invoke(&function, &context, &[arg(args, 0), arg(args, 1)])
        }),
        Arity::Three => Callable::new(move |args| {
            invoke(&function, &context, &[arg(args, 0), arg(args, 1), arg(args, 2)])
        }),
        Arity::Full => Callable::new(move |args| invoke(&function, &context, args)),
    }
}

fn invoke(function: &Value, receiver: &Value, args: &[Value]) -> Result<Value> {
    match function {
        Value::Function(f) => f.call(receiver, args),
        other => Err(Error::NotCallable {
            type_name: other.type_name(),
        }),
    }
}
