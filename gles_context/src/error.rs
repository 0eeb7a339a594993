//! Error types for the GLES context
//!
//! API-level errors are never surfaced as panics or `Err` values to the
//! application. Internal operations return [`Result`] and the entry points
//! fold failures into the context's last-error slot.

use std::fmt;
use crate::types::{
    GLenum, GL_INVALID_ENUM, GL_INVALID_OPERATION, GL_INVALID_VALUE, GL_OUT_OF_MEMORY,
};

/// Result type for context operations
pub type Result<T> = std::result::Result<T, Error>;

/// API errors recorded by the context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An enumerant argument outside the recognised set
    InvalidEnum,

    /// A numeric argument outside its allowed domain (including unknown handles)
    InvalidValue,

    /// A valid argument used in the wrong state or with the wrong object kind
    InvalidOperation,

    /// Storage could not be allocated
    ///
    /// Completes the API error set reported by `get_error()`. No entry point
    /// raises it today: allocation failure in the slot maps aborts instead.
    OutOfMemory,
}

impl Error {
    /// API enumerant reported by `get_error()`
    pub fn code(self) -> GLenum {
        match self {
            Error::InvalidEnum => GL_INVALID_ENUM,
            Error::InvalidValue => GL_INVALID_VALUE,
            Error::InvalidOperation => GL_INVALID_OPERATION,
            Error::OutOfMemory => GL_OUT_OF_MEMORY,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidEnum => write!(f, "GL_INVALID_ENUM"),
            Error::InvalidValue => write!(f, "GL_INVALID_VALUE"),
            Error::InvalidOperation => write!(f, "GL_INVALID_OPERATION"),
            Error::OutOfMemory => write!(f, "GL_OUT_OF_MEMORY"),
        }
    }
}

impl std::error::Error for Error {}

/// Log a diagnostic and return early with an API error
///
/// # Example
///
/// ```ignore
/// gl_bail!(Error::InvalidValue, "handle {} is not allocated", handle);
/// ```
#[macro_export]
macro_rules! gl_bail {
    ($err:expr, $($arg:tt)*) => {{
        $crate::gl_debug!("gles::Context", $($arg)*);
        return Err($err);
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
