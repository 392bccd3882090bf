//! Error types for parameter store access and persistence.
//!
//! ## Error Categories
//!
//! - **I/O failures**: the backing file cannot be read or written
//! - **Missing keys**: a typed accessor was asked for a key the store does not hold
//! - **Coercion failures**: stored text does not parse as the requested type
//! - **Shape mismatches**: a list accessor was used on a scalar value
//!
//! Malformed lines encountered during parsing are deliberately *not* an error
//! value: the parser reports the offending line and returns the entries
//! accumulated so far. Partial success is an intentional outcome of loading,
//! not a failure state.
//!
//! ## Examples
//!
//! ```rust
//! use paramstore::{Error, Store};
//!
//! let mut store = Store::new();
//! store.set("answer", "forty-two");
//!
//! match store.get_integer("answer") {
//!     Err(Error::Coercion { target, text }) => {
//!         assert_eq!(target, "i32");
//!         assert_eq!(text, "forty-two");
//!     }
//!     other => panic!("expected coercion failure, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors surfaced by store access and persistence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// I/O error while reading or writing a parameter file
    #[error("I/O error: {0}")]
    Io(String),

    /// A typed accessor was invoked for a key the store does not contain
    #[error("key not found: {0:?}")]
    MissingKey(String),

    /// Stored text does not parse as the requested primitive type
    #[error("cannot coerce {text:?} to {target}")]
    Coercion {
        target: &'static str,
        text: String,
    },

    /// The character accessor was invoked on empty text
    #[error("cannot take the first character of empty text")]
    EmptyText,

    /// A list accessor was invoked on a key holding a scalar
    #[error("value at key {key:?} is not a list")]
    NotAList { key: String },
}

impl Error {
    /// Creates an I/O error from any displayable source.
    pub fn io<T: std::fmt::Display>(source: T) -> Self {
        Error::Io(source.to_string())
    }

    /// Creates a missing-key error.
    pub fn missing_key(key: &str) -> Self {
        Error::MissingKey(key.to_string())
    }

    /// Creates a coercion error for text that does not parse as `target`.
    pub fn coercion(target: &'static str, text: &str) -> Self {
        Error::Coercion {
            target,
            text: text.to_string(),
        }
    }

    /// Creates a not-a-list error for the given key.
    pub fn not_a_list(key: &str) -> Self {
        Error::NotAList {
            key: key.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
