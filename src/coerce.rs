//! Read-time coercion of stored text into primitive types.
//!
//! Everything in a store is text until the moment it is read. This module
//! isolates the conversion rules in one place:
//!
//! - [`FromScalar`]: parses a scalar's text into one primitive type. Numeric
//!   targets fail with [`Error::Coercion`] on invalid literals; booleans
//!   never fail (anything but a case-insensitive `"true"` is `false`);
//!   characters take the first char and fail only on empty text.
//! - [`TypedList`]: a type-narrowing view over a stored list. Obtaining the
//!   view validates nothing; each element is coerced only when accessed, so
//!   a list of mixed text can still hand out its well-formed elements.
//!
//! ```rust
//! use paramstore::{Store, Value};
//!
//! let mut store = Store::new();
//! store.set("sizes", vec!["1", "2", "oops"]);
//!
//! let sizes = store.get_integer_list("sizes").unwrap();
//! assert_eq!(sizes.get(0), Some(Ok(1)));
//! assert!(sizes.get(2).unwrap().is_err());
//! ```

use crate::error::{Error, Result};
use crate::value::Value;
use std::marker::PhantomData;

/// A primitive type a stored scalar's text can be coerced into.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `f32`, `f64`, `bool`, `char`
/// and `String`. Coercion is a pure function of the text; it never looks at
/// the store.
pub trait FromScalar: Sized {
    /// Name of the target type, used in coercion error messages.
    const TARGET: &'static str;

    /// Parses `text` into this type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Coercion`] when `text` is not a valid literal of
    /// this type, or [`Error::EmptyText`] for the character target on empty
    /// text.
    fn from_scalar(text: &str) -> Result<Self>;
}

macro_rules! impl_from_scalar_number {
    ($($ty:ty => $name:literal),*) => {
        $(
            impl FromScalar for $ty {
                const TARGET: &'static str = $name;

                fn from_scalar(text: &str) -> Result<Self> {
                    text.parse().map_err(|_| Error::coercion($name, text))
                }
            }
        )*
    };
}

impl_from_scalar_number!(
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    f32 => "f32",
    f64 => "f64"
);

impl FromScalar for bool {
    const TARGET: &'static str = "bool";

    // Case-insensitive "true" is true, anything else is false. Never fails.
    fn from_scalar(text: &str) -> Result<Self> {
        Ok(text.eq_ignore_ascii_case("true"))
    }
}

impl FromScalar for char {
    const TARGET: &'static str = "char";

    fn from_scalar(text: &str) -> Result<Self> {
        text.chars().next().ok_or(Error::EmptyText)
    }
}

impl FromScalar for String {
    const TARGET: &'static str = "String";

    fn from_scalar(text: &str) -> Result<Self> {
        Ok(text.to_string())
    }
}

/// A type-narrowing view over a stored list.
///
/// The view carries no per-element validation: elements are coerced through
/// [`FromScalar`] only when accessed via [`get`](TypedList::get) or
/// [`iter`](TypedList::iter), and each access fails or succeeds
/// independently.
pub struct TypedList<'a, T> {
    elements: &'a [Value],
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T> Clone for TypedList<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for TypedList<'a, T> {}

impl<'a, T> std::fmt::Debug for TypedList<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedList")
            .field("elements", &self.elements)
            .finish()
    }
}

impl<'a, T: FromScalar> TypedList<'a, T> {
    pub(crate) fn new(elements: &'a [Value]) -> Self {
        TypedList {
            elements,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the underlying list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the underlying list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the untyped elements backing this view.
    #[must_use]
    pub fn raw(&self) -> &'a [Value] {
        self.elements
    }

    /// Coerces the element at `index`, or `None` when out of bounds.
    ///
    /// Nested list elements coerce from their rendered `LIST-[...]` text,
    /// which fails for every numeric target.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Result<T>> {
        self.elements
            .get(index)
            .map(|element| T::from_scalar(&element.text()))
    }

    /// Iterates over the elements, coercing each on access.
    pub fn iter(&self) -> impl Iterator<Item = Result<T>> + 'a {
        self.elements
            .iter()
            .map(|element| T::from_scalar(&element.text()))
    }

    /// Coerces every element eagerly, failing on the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns the first element's coercion failure, if any.
    pub fn collect(&self) -> Result<Vec<T>> {
        self.iter().collect()
    }
}
