/// Builds a [`Value`](crate::Value) from a literal or a bracketed list.
///
/// Primitives render to their scalar text form; brackets nest.
///
/// ```rust
/// use paramstore::{param, Value};
///
/// assert_eq!(param!(30), Value::scalar("30"));
/// assert_eq!(param!(["x", "y"]), Value::from(vec!["x", "y"]));
/// ```
#[macro_export]
macro_rules! param {
    // Handle empty list
    ([]) => {
        $crate::Value::List(vec![])
    };

    // Handle non-empty list, elements recurse
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::param!($elem)),*])
    };

    // Anything else goes through From
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

/// Builds a [`Store`](crate::Store) from `key => value` pairs.
///
/// ```rust
/// use paramstore::params;
///
/// let store = params! {
///     "age" => 30,
///     "name" => "Sam",
///     "tags" => ["x", "y"],
/// };
///
/// assert_eq!(store.get_integer("age"), Ok(30));
/// assert_eq!(store.get_string_list("tags").unwrap().len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Store::new()
    };

    ( $($key:literal => $value:tt),* $(,)? ) => {{
        let mut store = $crate::Store::new();
        $(
            store.set($key, $crate::param!($value));
        )*
        store
    }};
}
