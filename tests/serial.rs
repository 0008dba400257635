#[macro_use]
extern crate starks;
extern crate serde_json;

use starks::{DoubleDict, Value};

#[test]
fn writes_in_insertion_order() {
    let dd = double_dict!("zeta".to_string() => 1, "alpha".to_string() => 2).unwrap();
    assert_eq!(serde_json::to_string(&dd).unwrap(), r#"{"zeta":1,"alpha":2}"#);
}

#[test]
fn reads_back() {
    let dd: DoubleDict<String, i32> = serde_json::from_str(r#"{"a": 1, "b": 2}"#).unwrap();
    assert_eq!(dd.inverse()[&2], "b");
    let again: DoubleDict<String, i32> = serde_json::from_str(&serde_json::to_string(&dd).unwrap()).unwrap();
    assert_eq!(again, dd);
}

#[test]
fn rejects_repeated_values() {
    let err = serde_json::from_str::<DoubleDict<String, i32>>(r#"{"a": 1, "b": 1}"#).unwrap_err();
    assert!(err.to_string().contains("DoubleDict values must be unique"));
}

#[test]
fn rejects_unhashable_values() {
    let json = r#"{"a": {"List": []}}"#;
    let err = serde_json::from_str::<DoubleDict<String, Value>>(json).unwrap_err();
    assert!(err.to_string().contains("DoubleDict values must be hashable"));

    let ok: DoubleDict<String, Value> = serde_json::from_str(r#"{"a": {"Int": 5}, "b": "None"}"#).unwrap();
    assert_eq!(ok["a"], Value::Int(5));
    assert_eq!(ok["b"], Value::None);
}
