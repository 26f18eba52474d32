//! Error types for the duckwalk crate.
//!
//! Classification, key enumeration and selector resolution never fail. The
//! only errors surface from callables invoked during a traversal, and they
//! are handed back to the caller unmodified.

use thiserror::Error;

use crate::value::Value;

/// Errors raised while invoking a callable.
#[derive(Debug, Error)]
pub enum Error {
    /// A callable raised a value.
    #[error("uncaught {0}")]
    Thrown(Value),

    /// A callable failed with a plain message.
    #[error("{0}")]
    Message(String),

    /// A value that is not a function was invoked.
    #[error("{type_name} is not a function")]
    NotCallable { type_name: &'static str },
}

impl Error {
    /// Creates an error carrying a raised value.
    pub fn thrown(value: impl Into<Value>) -> Self {
        Error::Thrown(value.into())
    }

    /// Creates an error from a message.
    pub fn message(message: impl Into<String>) -> Self {
        Error::Message(message.into())
    }
}

/// Result type for duckwalk operations.
pub type Result<T> = std::result::Result<T, Error>;
