//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use seqquery::prelude::*;
use serde_json::json;

/// Sequence of values from a JSON array.
pub fn rows(json: serde_json::Value) -> Sequence<Value> {
    Sequence::from_json(json)
}

/// Plain values from a JSON array, for comparing operator output.
pub fn values(json: serde_json::Value) -> Vec<Value> {
    Value::list_from_json(json)
}

pub fn field(name: &str) -> KeySelector {
    KeySelector::field(name)
}

pub fn people() -> Sequence<Value> {
    rows(json!([
        { "id": 1, "name": "ada", "age": 36, "city": "london" },
        { "id": 2, "name": "bob", "age": 19, "city": "paris" },
        { "id": 3, "name": "cyd", "age": 52, "city": "london" },
        { "id": 4, "name": "dee", "age": 19, "city": "rome" },
    ]))
}

pub fn orders() -> Sequence<Value> {
    rows(json!([
        { "order": 10, "person": 1, "total": 12.5 },
        { "order": 11, "person": 3, "total": 7.0 },
        { "order": 12, "person": 1, "total": 3.25 },
        { "order": 13, "person": 9, "total": 1.0 },
    ]))
}

/// Deterministic pseudo-random integers for property-style tests.
pub fn scrambled(n: usize, modulus: i64) -> Vec<i64> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % modulus as u64) as i64
        })
        .collect()
}
