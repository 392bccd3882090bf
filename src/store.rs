//! The key-to-value store and its typed accessor surface.
//!
//! [`Store`] wraps an [`IndexMap`] so iteration is deterministic, and layers
//! three things over it:
//!
//! - ordinary container operations (`set`, `remove`, `contains`, `clear`,
//!   merging and cloning)
//! - the typed accessors that coerce stored text on read (`get_integer`,
//!   `get_boolean`, `get_string_list`, ...)
//! - key validation with a per-store invalid-key hook
//!
//! All accessors are pure reads; none mutate the store.
//!
//! ## Examples
//!
//! ```rust
//! use paramstore::Store;
//!
//! let mut store = Store::new();
//! store.set("age", 30).set("name", "Sam");
//! store.set("tags", vec!["x", "y"]);
//!
//! assert_eq!(store.get_integer("age"), Ok(30));
//! assert_eq!(store.get_string("name").as_deref(), Ok("Sam"));
//! assert_eq!(store.get_string_list("tags").unwrap().len(), 2);
//! ```

use crate::coerce::{FromScalar, TypedList};
use crate::error::{Error, Result};
use crate::value::Value;
use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// The callback invoked with each missing key during [`Store::validate`].
pub type InvalidKeyHook = Arc<dyn Fn(&str) + Send + Sync>;

/// A (key, value) pair, the unit a store is built from.
///
/// # Examples
///
/// ```rust
/// use paramstore::{entry, Store};
///
/// let store = Store::from_entries([entry("age", 30), entry("name", "Sam")]);
/// assert_eq!(store.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: Value,
}

impl Entry {
    /// Creates an entry from a key and anything convertible to a [`Value`].
    pub fn new<K: Into<String>, V: Into<Value>>(key: K, value: V) -> Self {
        Entry {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Creates an [`Entry`]. Shorthand for [`Entry::new`].
pub fn entry<K: Into<String>, V: Into<Value>>(key: K, value: V) -> Entry {
    Entry::new(key, value)
}

/// A mapping from string keys to loosely-typed [`Value`]s.
///
/// Keys are unique; re-insertion overwrites. The store owns every value
/// reachable from it, so cloning produces a structurally independent copy.
/// Lookup is by key, not position; the writer orders entries
/// lexicographically by key for reproducible output.
///
/// The store is not designed for concurrent mutation -- callers sharing one
/// across threads must serialize access externally.
pub struct Store {
    parameters: IndexMap<String, Value>,
    on_invalid: InvalidKeyHook,
}

impl Store {
    /// Creates an empty store with a no-op invalid-key hook.
    #[must_use]
    pub fn new() -> Self {
        Store {
            parameters: IndexMap::new(),
            on_invalid: Arc::new(|_| {}),
        }
    }

    /// Creates a store from an iterator of entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use paramstore::{entry, Store};
    ///
    /// let store = Store::from_entries([entry("a", 1), entry("b", 2)]);
    /// assert!(store.contains("a"));
    /// ```
    #[must_use]
    pub fn from_entries<I: IntoIterator<Item = Entry>>(entries: I) -> Self {
        let mut store = Store::new();
        for entry in entries {
            store.set_entry(entry);
        }
        store
    }

    /// Inserts a value for `key`, overwriting any prior entry.
    ///
    /// Returns `&mut self` so calls chain.
    pub fn set<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> &mut Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Inserts the key and value of the given entry.
    pub fn set_entry(&mut self, entry: Entry) -> &mut Self {
        self.set(entry.key, entry.value)
    }

    /// Copies every entry of `other` into this store, overwriting collisions.
    pub fn set_all(&mut self, other: &Store) -> &mut Self {
        for (key, value) in other.iter() {
            self.set(key.clone(), value.clone());
        }
        self
    }

    /// Removes the entry stored under `key`, returning its value if present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.parameters.shift_remove(key)
    }

    /// Removes every key that `other` contains.
    pub fn remove_all(&mut self, other: &Store) -> &mut Self {
        for key in other.parameters.keys() {
            self.remove(key);
        }
        self
    }

    /// Returns `true` if the store contains `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.parameters.contains_key(key)
    }

    /// Removes every entry.
    pub fn clear(&mut self) -> &mut Self {
        self.parameters.clear();
        self
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns `true` if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.parameters.iter()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.parameters.keys()
    }

    /// Returns all entries ordered lexicographically by key.
    ///
    /// This is the ordering the writer emits, so persisted files diff
    /// cleanly.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&String, &Value)> {
        let mut entries: Vec<_> = self.parameters.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }

    /// Replaces the invalid-key hook invoked by [`validate`](Store::validate).
    ///
    /// The hook defaults to a no-op. Each store carries its own hook, so two
    /// stores can have independent policies; clones share the replacement.
    pub fn set_on_invalid<F: Fn(&str) + Send + Sync + 'static>(&mut self, hook: F) -> &mut Self {
        self.on_invalid = Arc::new(hook);
        self
    }

    /// Checks that every key is present.
    ///
    /// Keys are checked in order; on the first missing key the invalid-key
    /// hook fires exactly once with that key and the remaining keys are not
    /// examined.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use paramstore::Store;
    ///
    /// let mut store = Store::new();
    /// store.set("a", 1);
    /// assert!(store.validate(["a"]));
    /// assert!(!store.validate(["a", "b"]));
    /// ```
    pub fn validate<I, S>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in keys {
            let key = key.as_ref();
            if !self.contains(key) {
                (self.on_invalid)(key);
                return false;
            }
        }
        true
    }

    /// Returns the untyped value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }

    fn lookup(&self, key: &str) -> Result<&Value> {
        self.get(key).ok_or_else(|| Error::missing_key(key))
    }

    /// Coerces the value stored under `key` into `T`.
    ///
    /// The coercion reads the value's rendered text, so a list coerces from
    /// its `LIST-[...]` form (which fails for numeric targets).
    ///
    /// # Errors
    ///
    /// [`Error::MissingKey`] when the key is absent, or the coercion failure
    /// of [`FromScalar`] for `T`.
    pub fn get_as<T: FromScalar>(&self, key: &str) -> Result<T> {
        T::from_scalar(&self.lookup(key)?.text())
    }

    /// Returns the textual form of the value stored under `key`.
    ///
    /// Never fails for a present key: scalars yield their text, lists their
    /// rendered literal.
    pub fn get_string(&self, key: &str) -> Result<String> {
        Ok(self.lookup(key)?.text().into_owned())
    }

    /// Parses the stored text as a boolean. Any text other than a
    /// case-insensitive `"true"` yields `false`.
    pub fn get_boolean(&self, key: &str) -> Result<bool> {
        self.get_as(key)
    }

    /// Returns the first character of the stored text.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyText`] when the stored text is empty.
    pub fn get_character(&self, key: &str) -> Result<char> {
        self.get_as(key)
    }

    /// Parses the stored text as an `i8`.
    pub fn get_byte(&self, key: &str) -> Result<i8> {
        self.get_as(key)
    }

    /// Parses the stored text as an `i16`.
    pub fn get_short(&self, key: &str) -> Result<i16> {
        self.get_as(key)
    }

    /// Parses the stored text as an `i32`.
    pub fn get_integer(&self, key: &str) -> Result<i32> {
        self.get_as(key)
    }

    /// Parses the stored text as an `i64`.
    pub fn get_long(&self, key: &str) -> Result<i64> {
        self.get_as(key)
    }

    /// Parses the stored text as an `f32`.
    pub fn get_float(&self, key: &str) -> Result<f32> {
        self.get_as(key)
    }

    /// Parses the stored text as an `f64`.
    pub fn get_double(&self, key: &str) -> Result<f64> {
        self.get_as(key)
    }

    /// Returns the elements of the list stored under `key`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingKey`] when the key is absent, [`Error::NotAList`]
    /// when it holds a scalar.
    pub fn get_list(&self, key: &str) -> Result<&[Value]> {
        self.lookup(key)?
            .as_list()
            .ok_or_else(|| Error::not_a_list(key))
    }

    /// Returns a typed view over the list stored under `key`.
    ///
    /// Obtaining the view validates nothing beyond the value being a list;
    /// elements are coerced only when accessed through the view.
    pub fn get_list_as<T: FromScalar>(&self, key: &str) -> Result<TypedList<'_, T>> {
        Ok(TypedList::new(self.get_list(key)?))
    }

    /// Typed view over a list of strings.
    pub fn get_string_list(&self, key: &str) -> Result<TypedList<'_, String>> {
        self.get_list_as(key)
    }

    /// Typed view over a list of booleans.
    pub fn get_boolean_list(&self, key: &str) -> Result<TypedList<'_, bool>> {
        self.get_list_as(key)
    }

    /// Typed view over a list of characters.
    pub fn get_character_list(&self, key: &str) -> Result<TypedList<'_, char>> {
        self.get_list_as(key)
    }

    /// Typed view over a list of `i8`s.
    pub fn get_byte_list(&self, key: &str) -> Result<TypedList<'_, i8>> {
        self.get_list_as(key)
    }

    /// Typed view over a list of `i16`s.
    pub fn get_short_list(&self, key: &str) -> Result<TypedList<'_, i16>> {
        self.get_list_as(key)
    }

    /// Typed view over a list of `i32`s.
    pub fn get_integer_list(&self, key: &str) -> Result<TypedList<'_, i32>> {
        self.get_list_as(key)
    }

    /// Typed view over a list of `i64`s.
    pub fn get_long_list(&self, key: &str) -> Result<TypedList<'_, i64>> {
        self.get_list_as(key)
    }

    /// Typed view over a list of `f32`s.
    pub fn get_float_list(&self, key: &str) -> Result<TypedList<'_, f32>> {
        self.get_list_as(key)
    }

    /// Typed view over a list of `f64`s.
    pub fn get_double_list(&self, key: &str) -> Result<TypedList<'_, f64>> {
        self.get_list_as(key)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Store {
    fn clone(&self) -> Self {
        Store {
            parameters: self.parameters.clone(),
            on_invalid: Arc::clone(&self.on_invalid),
        }
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

// Equality compares entries only; the invalid-key hook is policy, not data.
impl PartialEq for Store {
    fn eq(&self, other: &Self) -> bool {
        self.parameters == other.parameters
    }
}

impl Eq for Store {}

impl FromIterator<Entry> for Store {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Store::from_entries(iter)
    }
}

impl Serialize for Store {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Store {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StoreVisitor;

        impl<'de> Visitor<'de> for StoreVisitor {
            type Value = Store;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of string keys to values")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Store, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut store = Store::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    store.set(key, value);
                }
                Ok(store)
            }
        }

        deserializer.deserialize_map(StoreVisitor)
    }
}
