use crate::array::Array;
use crate::value::Value;

#[test]
fn push_and_access() {
    let mut arr = Array::new();
    assert!(arr.is_empty());
    assert_eq!(arr.get(0), None);

    arr.push(Value::Integer(1));
    arr.push(Value::Integer(2));
    assert_eq!(arr.len(), 2);
    assert_eq!(arr.first().unwrap().as_integer(), Some(1));
    assert_eq!(arr.get(1).unwrap().as_integer(), Some(2));
    assert_eq!(arr.last_mut().unwrap().as_integer(), Some(2));

    let collected: Vec<i64> = arr.iter().filter_map(|v| v.as_integer()).collect();
    assert_eq!(collected, [1, 2]);
    assert_eq!(arr.as_slice().len(), 2);
}

#[test]
fn accumulator_marker() {
    let literal = Array::new();
    assert!(!literal.is_appendable());

    let mut acc = Array::accumulator();
    assert!(acc.is_appendable());
    acc.push(Value::Table(crate::table::Table::new()));
    assert!(acc.is_appendable());

    acc.finalize();
    assert!(!acc.is_appendable());
}

#[test]
fn debug_renders_as_list() {
    let mut arr = Array::new();
    arr.push(Value::Integer(1));
    arr.push(Value::Boolean(true));
    assert_eq!(format!("{arr:?}"), "[1, true]");
}
