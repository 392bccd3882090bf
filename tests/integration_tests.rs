use paramstore::{entry, from_file, from_str, params, to_file, to_string, Error, Store, Value};
use std::fs;
use std::sync::{Arc, Mutex};

#[test]
fn test_end_to_end_spec_example() {
    let store = from_str("age: 30\nname: Sam\ntags: LIST-[x, y]\n");

    assert_eq!(store.get_integer("age"), Ok(30));
    assert_eq!(store.get_string("name").as_deref(), Ok("Sam"));

    let tags = store.get_list("tags").unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0], Value::scalar("x"));
    assert_eq!(tags[1], Value::scalar("y"));

    // Writing reproduces the same lines, key-sorted.
    assert_eq!(to_string(&store), "age: 30\nname: Sam\ntags: LIST-[x, y]\n");
}

#[test]
fn test_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.params");

    let store = params! {
        "host" => "localhost",
        "port" => 8080,
        "tags" => ["x", ["nested", "deeper"], "y"],
    };

    let written = to_file(&store, &path);
    assert_eq!(written, path);

    let loaded = from_file(&path).unwrap();
    assert_eq!(loaded, store);
}

#[test]
fn test_missing_file_loads_as_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = from_file(dir.path().join("does-not-exist.params")).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_malformed_second_line_keeps_entries_before_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.params");
    fs::write(&path, "first: 1\nno-separator-here\nthird: 3\n").unwrap();

    let store = from_file(&path).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.get_integer("first"), Ok(1));
    assert!(!store.contains("third"));
}

#[test]
fn test_save_truncates_existing_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.params");
    fs::write(&path, "stale: content\nmore: stale\nlines: here\n").unwrap();

    let store = params! { "only" => "entry" };
    to_file(&store, &path);

    assert_eq!(fs::read_to_string(&path).unwrap(), "only: entry\n");
}

#[test]
fn test_to_file_on_unwritable_destination_returns_path() {
    let dir = tempfile::tempdir().unwrap();
    // The directory itself cannot be created as a file.
    let store = params! { "k" => "v" };
    let returned = to_file(&store, dir.path());
    assert_eq!(returned, dir.path());
}

#[test]
fn test_edit_and_save_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.params");
    fs::write(&path, "retries: 3\ntimeout: 30\n").unwrap();

    let mut store = from_file(&path).unwrap();
    store.set("retries", 5);
    store.remove("timeout");
    store.set("backoff", "exponential");
    to_file(&store, &path);

    let reloaded = from_file(&path).unwrap();
    assert_eq!(reloaded.get_integer("retries"), Ok(5));
    assert_eq!(
        reloaded.get_string("backoff").as_deref(),
        Ok("exponential")
    );
    assert!(!reloaded.contains("timeout"));
}

#[test]
fn test_value_with_separator_in_text_roundtrips() {
    let store = params! { "note" => "time: 12:30" };
    let back = from_str(&to_string(&store));
    assert_eq!(back.get_string("note").as_deref(), Ok("time: 12:30"));
}

#[test]
fn test_boolean_accessor_matrix() {
    let store = from_str("a: true\nb: TRUE\nc: false\nd: xyz\n");
    assert_eq!(store.get_boolean("a"), Ok(true));
    assert_eq!(store.get_boolean("b"), Ok(true));
    assert_eq!(store.get_boolean("c"), Ok(false));
    assert_eq!(store.get_boolean("d"), Ok(false));
}

#[test]
fn test_integer_accessor_on_loaded_values() {
    let store = from_str("good: 42\nbad: abc\n");
    assert_eq!(store.get_integer("good"), Ok(42));
    assert_eq!(store.get_integer("bad"), Err(Error::coercion("i32", "abc")));
}

#[test]
fn test_validate_against_loaded_store() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let mut store = from_str("a: 1\n");
    store.set_on_invalid(move |key| sink.lock().unwrap().push(key.to_string()));

    assert!(store.validate(["a"]));
    assert!(seen.lock().unwrap().is_empty());

    assert!(!store.validate(["a", "b"]));
    assert_eq!(*seen.lock().unwrap(), vec!["b".to_string()]);
}

#[test]
fn test_depth_three_nesting_roundtrips() {
    let store = Store::from_entries([entry(
        "deep",
        Value::List(vec![
            Value::scalar("a"),
            Value::List(vec![
                Value::scalar("b"),
                Value::List(vec![Value::scalar("c"), Value::scalar("d")]),
            ]),
            Value::scalar("e"),
        ]),
    )]);

    let text = to_string(&store);
    assert_eq!(text, "deep: LIST-[a, LIST-[b, LIST-[c, d]], e]\n");
    assert_eq!(from_str(&text), store);
}

// The grammar has no escaping: a scalar element containing a literal comma
// is split at that comma when read back. Pinned here as a known limitation.
#[test]
fn test_embedded_comma_breaks_roundtrip() {
    let store = params! { "k" => ["hello, world"] };
    let back = from_str(&to_string(&store));

    let elements = back.get_list("k").unwrap();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0], Value::scalar("hello"));
    assert_eq!(elements[1], Value::scalar("world"));
    assert_ne!(back, store);
}

#[test]
fn test_typed_list_views_defer_element_validation() {
    let store = from_str("mixed: LIST-[1, two, 3]\n");

    let view = store.get_integer_list("mixed").unwrap();
    assert_eq!(view.get(0), Some(Ok(1)));
    assert!(view.get(1).unwrap().is_err());
    assert_eq!(view.get(2), Some(Ok(3)));

    // The same stored list narrows to strings without error.
    let strings = store.get_string_list("mixed").unwrap();
    assert_eq!(strings.collect().unwrap(), vec!["1", "two", "3"]);
}
