use crate::table::Table;
use crate::value::Value;

#[test]
fn insert_and_lookup() {
    let mut t = Table::new();
    assert!(t.is_empty());
    assert_eq!(t.get("a"), None);

    t.insert_unique("b".to_string(), Value::Integer(2)).unwrap();
    t.insert_unique("a".to_string(), Value::Integer(1)).unwrap();
    t.insert_unique("c".to_string(), Value::Integer(3)).unwrap();

    assert_eq!(t.len(), 3);
    assert!(t.contains_key("b"));
    assert!(!t.contains_key("d"));
    assert_eq!(t.get("a").unwrap().as_integer(), Some(1));
    assert_eq!(t.get("c").unwrap().as_integer(), Some(3));
}

#[test]
fn duplicate_insert_is_rejected() {
    let mut t = Table::new();
    t.insert_unique("key".to_string(), Value::Integer(1)).unwrap();
    let err = t.insert_unique("key".to_string(), Value::Integer(2));
    assert!(err.is_err());
    // the original value survives
    assert_eq!(t.get("key").unwrap().as_integer(), Some(1));
    assert_eq!(t.len(), 1);
}

#[test]
fn iteration_is_sorted() {
    let mut t = Table::new();
    for key in ["zeta", "alpha", "beta", "10", "2"] {
        t.insert_unique(key.to_string(), Value::Boolean(true)).unwrap();
    }
    let keys: Vec<&str> = t.iter().map(|(k, _)| k).collect();
    // lexicographic, not numeric
    assert_eq!(keys, ["10", "2", "alpha", "beta", "zeta"]);

    let entries = t.entries();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0].0, "10");
}

#[test]
fn index_based_access() {
    let mut t = Table::new();
    let idx = t.insert_unique("k".to_string(), Value::Integer(1)).unwrap();
    assert_eq!(t.find_index("k"), Some(idx));
    assert_eq!(t.find_index("missing"), None);

    *t.value_at_mut(idx) = Value::Integer(5);
    assert_eq!(t.get("k").unwrap().as_integer(), Some(5));

    assert_eq!(t.get_mut("k").unwrap().as_integer(), Some(5));
}

#[test]
fn sealing() {
    let mut t = Table::new();
    assert!(!t.is_sealed());
    t.seal();
    assert!(t.is_sealed());
}

#[test]
fn debug_renders_as_map() {
    let mut t = Table::new();
    t.insert_unique("a".to_string(), Value::Integer(1)).unwrap();
    assert_eq!(format!("{t:?}"), "{\"a\": 1}");
}
