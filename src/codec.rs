//! The line-oriented text codec.
//!
//! ## Format
//!
//! One entry per line, key and value separated by the first `": "`:
//!
//! ```text
//! key1: value1
//! key2: LIST-[a, b, LIST-[c, d], e]
//! ```
//!
//! - Blank lines are skipped.
//! - The separator is exactly `": "` and only its first occurrence splits,
//!   so a value may itself contain `": "`.
//! - A value starting with `LIST-[` and ending with `]` is a list; its
//!   interior splits on top-level commas and each element parses
//!   recursively. Recursion depth is bounded only by input nesting.
//! - Anything else is a scalar, stored verbatim.
//!
//! ## Malformed lines
//!
//! A line without the separator stops the parse: a warning names the
//! offending line and the entries accumulated so far are returned. The bad
//! line is never partially applied.
//!
//! ## Known grammar limitation
//!
//! The grammar has no escaping. Scalar element text containing a literal
//! comma or bracket splits incorrectly inside a list, and irregular
//! (unbalanced) brackets confuse the top-level comma scan. This mirrors the
//! format as specified and is pinned by tests rather than repaired.

use crate::store::Store;
use crate::value::Value;

const LIST_PREFIX: &str = "LIST-[";
const LIST_SUFFIX: char = ']';
const SEPARATOR: &str = ": ";

/// Parses the full text of a parameter file into a store.
///
/// Never fails: a malformed line yields the partial store accumulated up to
/// that line.
pub(crate) fn parse_str(input: &str) -> Store {
    let mut store = Store::new();
    for line in input.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((key, raw)) = line.split_once(SEPARATOR) else {
            tracing::warn!(line, "malformed line: missing `: ` separator; keeping entries parsed so far");
            return store;
        };
        store.set(key, parse_value(raw));
    }
    store
}

/// Renders a store as file text, one `key: value` line per entry, ordered
/// lexicographically by key.
pub(crate) fn write_store(store: &Store) -> String {
    let mut out = String::new();
    for (key, value) in store.sorted_entries() {
        out.push_str(key);
        out.push_str(SEPARATOR);
        out.push_str(&value.to_string());
        out.push('\n');
    }
    out
}

fn is_list(raw: &str) -> bool {
    raw.starts_with(LIST_PREFIX) && raw.ends_with(LIST_SUFFIX)
}

fn parse_value(raw: &str) -> Value {
    if is_list(raw) {
        let interior = &raw[LIST_PREFIX.len()..raw.len() - LIST_SUFFIX.len_utf8()];
        Value::List(
            split_elements(interior)
                .into_iter()
                .map(parse_value)
                .collect(),
        )
    } else {
        Value::scalar(raw)
    }
}

/// Splits a list interior on top-level commas.
///
/// Bracket depth is tracked so commas inside balanced nested lists stay with
/// their element. Tokens are trimmed of surrounding whitespace; an empty
/// interior yields no elements.
fn split_elements(interior: &str) -> Vec<&str> {
    if interior.trim().is_empty() {
        return Vec::new();
    }
    let mut elements = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, b) in interior.bytes().enumerate() {
        match b {
            b'[' => depth += 1,
            b']' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                elements.push(interior[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    elements.push(interior[start..].trim());
    elements
}
