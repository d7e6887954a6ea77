//! distinct / union / intersect / except

mod test_data_gen;

use seqquery::prelude::*;
use seqquery::seqquery_operators::{contains_structurally, equals};
use serde_json::json;
use test_data_gen::{rows, scrambled, values};

#[test]
fn test_distinct_keeps_first_seen_order() {
    let seq = Sequence::from(vec![3, 1, 3, 2, 1]);
    let out = seq.distinct().unwrap().unwrap();
    assert_eq!(out, vec![3, 1, 2]);
}

#[test]
fn test_distinct_is_idempotent() {
    let seq = Sequence::from(scrambled(120, 15));
    let once = seq.distinct().unwrap().unwrap();
    let twice = once.distinct().unwrap().unwrap();
    assert_eq!(once, twice);
    assert!(once.len() <= 15);
}

#[test]
fn test_distinct_on_records_compares_fields() {
    let seq = rows(json!([
        { "a": 1, "b": "x" },
        { "b": "x", "a": 1 },
        { "a": 1, "b": "y" },
    ]));
    let out = seq.distinct().unwrap().unwrap();
    assert_eq!(out, values(json!([{ "a": 1, "b": "x" }, { "a": 1, "b": "y" }])));
}

#[test]
fn test_distinct_empty_is_none() {
    let empty: Sequence<i64> = Sequence::default();
    assert!(empty.distinct().unwrap().is_none());
    assert!(empty.distinct_with([None::<&[i64]>, None]).unwrap().is_none());
}

#[test]
fn test_distinct_with_skips_absent_sequences() {
    let seq = Sequence::from(vec![1, 2]);
    let more = vec![2, 5, 1, 6];
    let out = seq.distinct_with([None, Some(more.as_slice())]).unwrap().unwrap();
    assert_eq!(out, vec![1, 2, 5, 6]);

    let empty: Sequence<i32> = Sequence::default();
    let out = empty.distinct_with([Some(more.as_slice())]).unwrap().unwrap();
    assert_eq!(out, vec![2, 5, 1, 6]);
}

#[test]
fn test_union_is_plain_concatenation() {
    let seq = Sequence::from(vec![1, 2]);
    let other = vec![2, 3];
    let out = seq.union([Some(other.as_slice()), None, Some(other.as_slice())]);
    assert_eq!(out, vec![1, 2, 2, 3, 2, 3]);
}

#[test]
fn test_intersect_except_complementarity() {
    let seq = Sequence::from(scrambled(80, 20));
    let other: Vec<i64> = scrambled(30, 40);

    let both = seq.intersect(&other).unwrap();
    let only = seq.except(&other).unwrap();
    let distinct = seq.distinct().unwrap().unwrap();

    assert_eq!(both.len() + only.len(), distinct.len());
    for x in &distinct {
        let in_both = both.iter().any(|y| y == x);
        let in_only = only.iter().any(|y| y == x);
        assert!(in_both ^ in_only, "{} must land in exactly one side", x);
        assert_eq!(in_both, other.contains(x));
    }
    assert_eq!(both.distinct().unwrap().map_or(0, |s| s.len()), both.len());
    assert_eq!(only.distinct().unwrap().map_or(0, |s| s.len()), only.len());
}

#[test]
fn test_intersect_and_except_with_empty_sides() {
    let seq = Sequence::from(vec![1, 2, 2]);
    let none: Vec<i32> = Vec::new();
    assert!(seq.intersect(&none).unwrap().is_empty());
    assert_eq!(seq.except(&none).unwrap(), vec![1, 2]);

    let empty: Sequence<i32> = Sequence::default();
    assert!(empty.intersect(&[1]).unwrap().is_empty());
    assert!(empty.except(&[1]).unwrap().is_empty());
}

#[test]
fn test_structural_equality_is_asymmetric() {
    let narrow = values(json!([{ "a": 1 }]));
    let wide = values(json!([{ "a": 1, "b": 2 }]));

    assert!(equals(&narrow[0], &wide[0]));
    assert!(!equals(&wide[0], &narrow[0]));
    assert!(contains_structurally(&narrow, &wide[0]));
    assert!(!contains_structurally(&wide, &narrow[0]));

    // The left sequence's representative decides which fields count.
    let narrow_seq = Sequence::from(narrow.clone());
    let wide_seq = Sequence::from(wide.clone());
    assert_eq!(narrow_seq.intersect(&wide).unwrap().len(), 1);
    assert!(wide_seq.intersect(&narrow).unwrap().is_empty());
    assert_eq!(wide_seq.except(&narrow).unwrap(), wide);
}

#[test]
fn test_primitive_equality_is_strict() {
    let seq = rows(json!([1, 1.0, "1", null]));
    let out = seq.distinct().unwrap().unwrap();
    assert_eq!(out, values(json!([1, "1", null])));

    let nan = Sequence::from(vec![f64::NAN, f64::NAN]);
    assert_eq!(nan.distinct().unwrap().unwrap().len(), 2);
}

#[test]
fn test_integral_floats_match_integers() {
    let seq = rows(json!([{ "p": 2 }, { "p": 2.0 }, { "p": 2.5 }]));
    assert_eq!(seq.distinct().unwrap().unwrap().len(), 2);

    let other = values(json!([{ "p": 2.0 }]));
    assert_eq!(seq.intersect(&other).unwrap(), values(json!([{ "p": 2 }])));
    assert_eq!(seq.except(&other).unwrap(), values(json!([{ "p": 2.5 }])));
}

#[test]
fn test_comparison_budget_caps_set_ops() {
    let cfg = QueryConfig::default().with_comparison_budget(100);
    let seq: Sequence<i64> = Sequence::from((0..20).collect::<Vec<_>>()).with_config(cfg);

    // 20 elements need 190 comparisons to deduplicate.
    match seq.distinct() {
        Err(OpError::BudgetExceeded { op, requested, cap }) => {
            assert_eq!(op, "distinct");
            assert_eq!(requested, 190);
            assert_eq!(cap, 100);
        }
        other => panic!("expected BudgetExceeded, got {:?}", other),
    }

    let small = seq.take(5);
    assert_eq!(small.config().comparison_budget, Some(100));
    assert_eq!(small.distinct().unwrap().unwrap().len(), 5);
    assert!(small.except(&[1, 2]).is_ok());
}
