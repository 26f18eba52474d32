//! Duckwalk - uniform traversal of dynamically shaped collections.
//!
//! Duckwalk lets calling code walk and transform collection-like [`Value`]s
//! without first checking what kind of value it holds:
//!
//! - true sequences (arrays, strings)
//! - pseudo-sequences: anything exposing a numeric `length` and indices
//! - plain records, walked by their own enumerable keys
//!
//! `undefined`, `null` and the empty string are *empty markers*: traversals
//! over them do nothing.
//!
//! # Quick Start
//!
//! ```rust
//! use duckwalk::{map, Object, Value};
//!
//! let people = Value::array([
//!     Value::from(Object::new().with("name", "srbtj").with("age", 18)),
//!     Value::from(Object::new().with("name", "ada").with("age", 36)),
//! ]);
//!
//! // A key name plucks that property.
//! let names = map(&people, &Value::from("name"), &Value::Undefined).unwrap();
//! assert_eq!(names, vec![Value::from("srbtj"), Value::from("ada")]);
//!
//! // A record tests each element for those key/value pairs.
//! let adults = Value::from(Object::new().with("age", 18));
//! let flags = map(&people, &adults, &Value::Undefined).unwrap();
//! assert_eq!(flags, vec![Value::Bool(true), Value::Bool(false)]);
//! ```
//!
//! # Selectors
//!
//! | Selector | Resolves to |
//! |----------|-------------|
//! | empty marker | identity |
//! | function | the function, bound to the context |
//! | record, array, date, pattern | partial matcher over its own pairs |
//! | anything else | property accessor |
//!
//! # Shapes
//!
//! ```text
//! empty marker            -> Shape::Empty
//! array, or numeric
//!   length with last index -> Shape::Sequence { len }
//! anything else           -> Shape::Mapping
//! ```

mod bind;
mod callable;
mod classify;
mod error;
#[cfg(feature = "json")]
mod json;
mod keys;
mod selector;
mod traverse;
mod value;

// Re-export public API
pub use bind::{bind, Arity};
pub use callable::Callable;
pub use classify::{
    is_empty_marker, is_function, is_object_like, is_sequence_like, runtime_type, RuntimeType,
    Shape,
};
pub use error::{Error, Result};
pub use keys::{has_own_key, own_keys, to_pairs};
pub use selector::{identity, matches, property, resolve, Selector};
pub use traverse::{each, map};
pub use value::{Function, Object, Property, Timestamp, Value};
