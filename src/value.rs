//! Dynamic value representation for stored parameters.
//!
//! This module provides the [`Value`] enum which represents anything a store
//! key can hold: a scalar text token, or an ordered list of values, with
//! lists nesting to unbounded depth.
//!
//! Values are stored as raw text. No type information is attached at storage
//! time; interpretation happens only when a typed accessor coerces the text
//! on read (see [`crate::coerce`]).
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use paramstore::Value;
//!
//! // From primitives -- rendered to their scalar text form
//! let number = Value::from(42);
//! let flag = Value::from(true);
//! let text = Value::from("hello");
//!
//! assert_eq!(number, Value::scalar("42"));
//!
//! // Lists nest
//! let nested = Value::from(vec![Value::from("a"), Value::from(vec![Value::from("b")])]);
//! assert!(nested.is_list());
//! ```
//!
//! ### Rendering
//!
//! `Display` produces the exact on-disk form: a scalar's text verbatim, or
//! the bracketed `LIST-[...]` literal for lists.
//!
//! ```rust
//! use paramstore::Value;
//!
//! let tags = Value::from(vec![Value::from("x"), Value::from("y")]);
//! assert_eq!(tags.to_string(), "LIST-[x, y]");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// A value held by a store key: a scalar text token or an ordered list.
///
/// Lists may contain scalars or nested lists; each node owns its children
/// outright, so cloning a value produces a structurally independent tree.
/// Any string is a legal scalar -- no validation happens at construction.
///
/// # Examples
///
/// ```rust
/// use paramstore::Value;
///
/// let scalar = Value::scalar("30");
/// let list = Value::List(vec![Value::scalar("x"), Value::scalar("y")]);
///
/// assert!(scalar.is_scalar());
/// assert!(list.is_list());
/// assert_eq!(scalar.as_scalar(), Some("30"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    List(Vec<Value>),
}

impl Default for Value {
    fn default() -> Self {
        Value::Scalar(String::new())
    }
}

impl Value {
    /// Creates a scalar value from anything string-like.
    pub fn scalar<T: Into<String>>(text: T) -> Self {
        Value::Scalar(text.into())
    }

    /// Returns `true` if the value is a scalar.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// Returns `true` if the value is a list.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// If the value is a scalar, returns its text. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::List(_) => None,
        }
    }

    /// If the value is a list, returns its elements. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(elements) => Some(elements),
            Value::Scalar(_) => None,
        }
    }

    /// Returns the textual form of this value.
    ///
    /// Scalars borrow their text; lists render to their `LIST-[...]` literal.
    /// This is the text the typed accessors coerce from, and it never fails.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Value::Scalar(s) => Cow::Borrowed(s),
            Value::List(_) => Cow::Owned(self.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => f.write_str(s),
            Value::List(elements) => {
                f.write_str("LIST-[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Scalar(value.to_string())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Scalar(value.to_string())
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Scalar(value.to_string())
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(elements: Vec<V>) -> Self {
        Value::List(elements.into_iter().map(Into::into).collect())
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Scalar(s) => serializer.serialize_str(s),
            Value::List(elements) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a scalar token or a sequence of values")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Scalar(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Scalar(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::Scalar(value.to_string()))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Scalar(value.to_string()))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::Scalar(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::Scalar(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut elements = Vec::new();
                while let Some(element) = seq.next_element()? {
                    elements.push(element);
                }
                Ok(Value::List(elements))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_display_is_verbatim() {
        assert_eq!(Value::scalar("hello world").to_string(), "hello world");
        assert_eq!(Value::scalar("").to_string(), "");
    }

    #[test]
    fn test_list_display_renders_bracket_literal() {
        let list = Value::from(vec!["a", "b", "c"]);
        assert_eq!(list.to_string(), "LIST-[a, b, c]");
    }

    #[test]
    fn test_nested_list_display() {
        let nested = Value::List(vec![
            Value::scalar("a"),
            Value::List(vec![Value::scalar("b"), Value::scalar("c")]),
            Value::scalar("d"),
        ]);
        assert_eq!(nested.to_string(), "LIST-[a, LIST-[b, c], d]");
    }

    #[test]
    fn test_empty_list_display() {
        assert_eq!(Value::List(vec![]).to_string(), "LIST-[]");
    }

    #[test]
    fn test_from_primitives_render_as_text() {
        assert_eq!(Value::from(42), Value::scalar("42"));
        assert_eq!(Value::from(true), Value::scalar("true"));
        assert_eq!(Value::from(3.5), Value::scalar("3.5"));
        assert_eq!(Value::from('x'), Value::scalar("x"));
        assert_eq!(Value::from("text"), Value::scalar("text"));
    }

    #[test]
    fn test_accessors() {
        let scalar = Value::scalar("30");
        assert!(scalar.is_scalar());
        assert_eq!(scalar.as_scalar(), Some("30"));
        assert_eq!(scalar.as_list(), None);

        let list = Value::from(vec!["x"]);
        assert!(list.is_list());
        assert_eq!(list.as_scalar(), None);
        assert_eq!(list.as_list().map(|elements| elements.len()), Some(1));
    }

    #[test]
    fn test_text_of_list_matches_display() {
        let list = Value::from(vec!["x", "y"]);
        assert_eq!(list.text(), list.to_string());
    }

    #[test]
    fn test_serde_json_interop() {
        let value = Value::List(vec![
            Value::scalar("a"),
            Value::List(vec![Value::scalar("b")]),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"["a",["b"]]"#);

        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);

        // JSON numbers and booleans come back as their scalar text form.
        let from_json: Value = serde_json::from_str("[1, true]").unwrap();
        assert_eq!(
            from_json,
            Value::List(vec![Value::scalar("1"), Value::scalar("true")])
        );
    }
}
