//! `update` applies a whole batch or nothing.

#[macro_use]
extern crate starks;
extern crate rand;

use rand::Rng;
use starks::{DoubleDict, Error, Source};

#[test]
fn bad_pair_anywhere_stops_everything() {
    let mut dd = double_dict!("a" => 1, "b" => 2).unwrap();
    let err = dd.update(vec![("c", 3), ("d", 4), ("e", 1)]).unwrap_err();
    assert_eq!(err, Error::DuplicateValue);
    assert_eq!(dd, double_dict!("a" => 1, "b" => 2).unwrap());

    let err = dd.update(vec![("c", 3), ("d", 3)]).unwrap_err();
    assert_eq!(err, Error::DuplicateValue);
    assert!(!dd.contains_key("c"));
}

#[test]
fn values_cannot_swap_in_one_call() {
    let mut dd = double_dict!("a" => 1, "b" => 2).unwrap();
    assert_eq!(dd.update(vec![("a", 2), ("b", 1)]), Err(Error::DuplicateValue));
    assert_eq!(format!("{:?}", dd), r#"DoubleDict({"a": 1, "b": 2})"#);
}

#[test]
fn value_of_earlier_pair_is_taken() {
    let mut dd: DoubleDict<&str, i32> = DoubleDict::new();
    assert_eq!(dd.update(vec![("a", 1), ("b", 1), ("b", 2)]), Err(Error::DuplicateValue));
    assert!(dd.is_empty());

    // A key may repeat the value it already holds.
    let mut dd = double_dict!("a" => 1).unwrap();
    dd.update(vec![("a", 1), ("b", 2)]).unwrap();
    assert_eq!(dd.len(), 2);
}

#[test]
fn later_pair_overwrites_earlier() {
    let mut dd = double_dict!("a" => 1).unwrap();
    dd.update(vec![("b", 2), ("b", 3)]).unwrap();
    assert_eq!(dd[&"b"], 3);
    assert!(!dd.contains_value(&2));

    // Overwriting is only allowed if it doesn't bring a value back twice.
    let err = dd.update(vec![("c", 4), ("c", 1)]).unwrap_err();
    assert_eq!(err, Error::DuplicateValue);
    assert_eq!(dd.len(), 2);
}

#[test]
fn source_plus_named() {
    let mut dd = double_dict!("a" => 1).unwrap();
    dd.update_with(vec![Source::from(vec![("b", 2)])], vec![("c", 3)]).unwrap();
    assert_eq!(dd.len(), 3);
    let other = double_dict!("d" => 4).unwrap();
    dd.update_with(vec![Source::from(other)], vec![]).unwrap();
    assert_eq!(dd.inverse()[&4], "d");
}

fn assert_consistent(dd: &DoubleDict<u8, u8>) {
    let inv = dd.inverse();
    assert_eq!(inv.len(), dd.len());
    for (k, v) in dd.iter() {
        assert_eq!(inv[v], *k);
        assert!(dd.contains_value(v));
    }
    assert_eq!(dd.values().count(), dd.len());
}

#[test]
fn random_mutations_keep_values_unique() {
    let mut rng = rand::thread_rng();
    let mut dd: DoubleDict<u8, u8> = DoubleDict::new();
    for _ in 0..2000 {
        let before = dd.clone();
        let result = match rng.gen_range(0..4) {
            0 | 1 => dd.set(rng.gen_range(0..16), rng.gen_range(0..16)),
            2 => {
                let n = rng.gen_range(0..4);
                let batch: Vec<(u8, u8)> = (0..n).map(|_| (rng.gen_range(0..16), rng.gen_range(0..16))).collect();
                dd.update(batch)
            },
            _ => {
                let k: u8 = rng.gen_range(0..16);
                dd.remove(&k);
                Ok(())
            },
        };
        if result.is_err() {
            assert_eq!(result, Err(Error::DuplicateValue));
            assert_eq!(dd, before);
            assert_eq!(dd.keys().collect::<Vec<_>>(), before.keys().collect::<Vec<_>>());
        }
        assert_consistent(&dd);
        assert_eq!(dd.inverse().inverse(), dd);
    }
}
