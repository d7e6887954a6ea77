//! order_by / order_by_desc

mod test_data_gen;

use seqquery::prelude::*;
use serde_json::json;
use test_data_gen::{field, people, rows, scrambled, values};

#[test]
fn test_order_by_record_field() {
    let seq = rows(json!([{ "v": 3 }, { "v": 1 }, { "v": 2 }]));
    let sorted = seq.order_by(&KeySelector::parse("x => x.v").unwrap()).unwrap().unwrap();
    assert_eq!(sorted, values(json!([{ "v": 1 }, { "v": 2 }, { "v": 3 }])));
}

#[test]
fn test_order_by_returns_copy() {
    let seq = rows(json!([{ "v": 3 }, { "v": 1 }, { "v": 2 }]));
    let _ = seq.order_by(&field("v")).unwrap();
    assert_eq!(seq, values(json!([{ "v": 3 }, { "v": 1 }, { "v": 2 }])));
}

#[test]
fn test_order_by_desc_reverses_distinct_keys() {
    let src: Vec<i64> = (0..40).map(|i| (i * 7919) % 101).collect();
    let seq = Sequence::from(src);
    let asc = seq.order_by(&KeySelector::identity()).unwrap().unwrap();
    let desc = seq.order_by_desc(&KeySelector::identity()).unwrap().unwrap();

    let mut reversed = asc.into_vec();
    reversed.reverse();
    assert_eq!(desc, reversed);
}

#[test]
fn test_order_by_is_stable_for_equal_keys() {
    let sorted = people().order_by(&field("age")).unwrap().unwrap();
    let names: Vec<&str> = sorted
        .iter()
        .filter_map(|p| p.get("name").and_then(Value::as_str))
        .collect();
    assert_eq!(names, vec!["bob", "dee", "ada", "cyd"]);

    let desc = people().order_by_desc(&field("age")).unwrap().unwrap();
    let names: Vec<&str> = desc
        .iter()
        .filter_map(|p| p.get("name").and_then(Value::as_str))
        .collect();
    assert_eq!(names, vec!["cyd", "ada", "bob", "dee"]);
}

#[test]
fn test_order_by_empty_is_none() {
    let empty = rows(json!([]));
    assert!(empty.order_by(&field("v")).unwrap().is_none());
    assert!(empty.order_by_desc(&field("v")).unwrap().is_none());
}

#[test]
fn test_order_by_nulls_first_and_mixed_numbers() {
    let seq = rows(json!([2.5, null, 1, -3, 2]));
    let sorted = seq.order_by(&KeySelector::identity()).unwrap().unwrap();
    assert_eq!(sorted, values(json!([null, -3, 1, 2, 2.5])));
}

#[test]
fn test_order_by_unknown_field_errors() {
    let err = people().order_by(&field("salary")).unwrap_err();
    assert!(matches!(err, OpError::UnknownProperty { ref property, .. } if property == "salary"));
}

#[test]
fn test_sorted_output_is_non_decreasing() {
    let seq = Sequence::from(scrambled(500, 1000));
    let sorted = seq.order_by(&KeySelector::identity()).unwrap().unwrap();
    assert_eq!(sorted.len(), 500);
    assert!(sorted.as_slice().windows(2).all(|w| w[0] <= w[1]));
}
