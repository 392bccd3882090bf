//! # paramstore
//!
//! A typed parameter store: an in-memory mapping from string keys to
//! loosely-typed values, with a human-readable, line-oriented text format for
//! persisting and reloading it. It targets small configuration use-cases:
//! load settings from a file, query them with type coercion, optionally edit
//! and save back.
//!
//! ## The format
//!
//! One entry per line, key and value separated by `": "`. Values are either
//! scalar text or a bracketed list, and lists nest:
//!
//! ```text
//! age: 30
//! name: Sam
//! tags: LIST-[x, y, LIST-[nested, deeper]]
//! ```
//!
//! Everything is stored as text. Type interpretation happens only at read
//! time, through the typed accessors on [`Store`]:
//!
//! ```rust
//! use paramstore::from_str;
//!
//! let store = from_str("age: 30\nname: Sam\ntags: LIST-[x, y]\n");
//!
//! assert_eq!(store.get_integer("age"), Ok(30));
//! assert_eq!(store.get_string("name").as_deref(), Ok("Sam"));
//! assert_eq!(store.get_string_list("tags").unwrap().len(), 2);
//! ```
//!
//! ## Loading and saving
//!
//! ```rust,no_run
//! use paramstore::{from_file, to_file, params};
//!
//! // A missing file loads as an empty store, not an error.
//! let mut store = from_file("settings.params").unwrap();
//!
//! store.set("retries", 3);
//! // Entries are written sorted by key, so saved files diff cleanly.
//! to_file(&store, "settings.params");
//! ```
//!
//! A malformed line (one without the `": "` separator) stops loading at that
//! line: a diagnostic names the offending text and the entries parsed so far
//! are returned. Partial success is an intentional outcome, not an error.
//!
//! ## Known grammar limitation
//!
//! The format has no escaping. Scalar list elements containing a literal
//! comma or bracket character split incorrectly and do not survive a round
//! trip. List interiors split on top-level commas only, so balanced nested
//! lists are safe; irregular bracketing is not.
//!
//! ## Concurrency
//!
//! Everything is single-threaded and synchronous. A [`Store`] provides no
//! internal locking; callers sharing one across threads must serialize
//! access externally.

pub mod coerce;
pub mod error;
pub mod macros;
pub mod store;
pub mod value;

mod codec;

pub use coerce::{FromScalar, TypedList};
pub use error::{Error, Result};
pub use store::{entry, Entry, InvalidKeyHook, Store};
pub use value::Value;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Parses the full text of a parameter file into a [`Store`].
///
/// Never fails: a malformed line stops the parse with a diagnostic and the
/// entries accumulated so far are returned.
///
/// # Examples
///
/// ```rust
/// use paramstore::from_str;
///
/// let store = from_str("a: 1\nb: 2\n");
/// assert_eq!(store.len(), 2);
/// ```
#[must_use]
pub fn from_str(input: &str) -> Store {
    codec::parse_str(input)
}

/// Reads a [`Store`] from any `io::Read`.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the bytes are not UTF-8.
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Store> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(Error::io)?;
    Ok(from_str(&text))
}

/// Loads a [`Store`] from a file.
///
/// A missing file yields an empty store, not an error; malformed content
/// yields a partial store (see [`from_str`]).
///
/// # Errors
///
/// Returns [`Error::Io`] only when an existing file cannot be read.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Store> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Store::new());
    }
    let text = fs::read_to_string(path).map_err(Error::io)?;
    Ok(from_str(&text))
}

/// Renders a [`Store`] as file text.
///
/// One `key: value` line per entry, ordered lexicographically by key, lists
/// rendered recursively as `LIST-[...]` literals. Parsing the result
/// reproduces an equal store.
///
/// # Examples
///
/// ```rust
/// use paramstore::{params, to_string};
///
/// let store = params! { "b" => 2, "a" => 1 };
/// assert_eq!(to_string(&store), "a: 1\nb: 2\n");
/// ```
#[must_use]
pub fn to_string(store: &Store) -> String {
    codec::write_store(store)
}

/// Writes a [`Store`] to any `io::Write`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the writer fails.
pub fn to_writer<W: io::Write>(mut writer: W, store: &Store) -> Result<()> {
    writer
        .write_all(to_string(store).as_bytes())
        .map_err(Error::io)
}

/// Saves a [`Store`] to a file, truncating any existing content.
///
/// I/O failures are caught at this boundary: they are logged and the
/// destination path is returned either way, so a failed save never panics or
/// errors. Callers who need the failure should use [`to_writer`].
pub fn to_file<P: AsRef<Path>>(store: &Store, path: P) -> PathBuf {
    let path = path.as_ref();
    match fs::File::create(path) {
        Ok(file) => {
            if let Err(error) = to_writer(file, store) {
                tracing::error!(path = %path.display(), %error, "failed to write parameter file");
            }
        }
        Err(error) => {
            tracing::error!(path = %path.display(), %error, "failed to create parameter file");
        }
    }
    path.to_path_buf()
}
