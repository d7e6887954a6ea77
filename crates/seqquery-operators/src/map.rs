//! Projection operators: select, select_many and zip.

use seqquery_core::element::Element;
use seqquery_core::types::Value;

use crate::key::KeySelector;
use crate::traits::{OpError, Result};

/// `proj(element, index)` for every element, in order.
///
/// An empty input yields `None`, not an empty vector.
pub fn select<T, U, F>(input: &[T], mut proj: F) -> Option<Vec<U>>
where
    F: FnMut(&T, usize) -> U,
{
    if input.is_empty() {
        return None;
    }
    Some(input.iter().enumerate().map(|(i, v)| proj(v, i)).collect())
}

/// Flatten the list each element carries under `key`.
pub fn select_many<T: Element>(input: &[T], key: &KeySelector) -> Result<Vec<Value>> {
    select_many_with(input, key, |_, inner, _| inner.clone())
}

/// Flatten the list each element carries under `key`, mapping every inner
/// value through `result(outer, inner, inner_index)`.
///
/// The key must resolve on the first element to a list value, otherwise the
/// call fails with `NotASequence`. Only `Value::List` counts as a sequence:
/// a string field is rejected rather than flattened into characters. Later
/// elements whose value is not a list contribute nothing. An empty input
/// yields an empty vector.
pub fn select_many_with<T, R, F>(input: &[T], key: &KeySelector, mut result: F) -> Result<Vec<R>>
where
    T: Element,
    F: FnMut(&T, &Value, usize) -> R,
{
    let Some(first) = input.first() else {
        return Ok(Vec::new());
    };

    let resolved = key.resolve(first)?;
    if !resolved.extract(first).is_sequence() {
        return Err(OpError::NotASequence {
            property: key.label().to_string(),
        });
    }

    let mut out = Vec::new();
    for outer in input {
        let collection = resolved.extract(outer);
        if let Some(items) = collection.as_list() {
            for (j, inner) in items.iter().enumerate() {
                out.push(result(outer, inner, j));
            }
        }
    }
    Ok(out)
}

/// Pairwise `f(first, second)` up to the shorter of the two inputs.
pub fn zip<T, U, R, F>(first: &[T], second: &[U], mut f: F) -> Vec<R>
where
    F: FnMut(&T, &U) -> R,
{
    first.iter().zip(second.iter()).map(|(a, b)| f(a, b)).collect()
}
