//! Aggregation operators: first/last, seedless fold, min/max and quantifiers.

use std::cmp::Ordering;

use seqquery_core::element::Element;

use crate::key::KeySelector;
use crate::traits::{OpError, Result};

pub fn first<T, F>(input: &[T], mut pred: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    input.iter().find(|&v| pred(v))
}

pub fn last<T, F>(input: &[T], mut pred: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    input.iter().rev().find(|&v| pred(v))
}

/// Left fold without a seed: the first element is the initial accumulator and
/// `f(acc, element, index, input)` produces each successor.
///
/// A single-element input is returned as-is without calling `f`.
pub fn aggregate<T, F>(input: &[T], mut f: F) -> Result<T>
where
    T: Clone,
    F: FnMut(T, &T, usize, &[T]) -> T,
{
    let (head, rest) = input.split_first().ok_or(OpError::EmptySequence)?;
    let mut acc = head.clone();
    for (offset, v) in rest.iter().enumerate() {
        acc = f(acc, v, offset + 1, input);
    }
    Ok(acc)
}

pub fn all<T, F>(input: &[T], pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    input.iter().all(pred)
}

pub fn any<T, F>(input: &[T], pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    input.iter().any(pred)
}

/// Smallest element by `key`. Ties keep the earliest element.
pub fn min<'a, T: Element>(input: &'a [T], key: &KeySelector) -> Result<Option<&'a T>> {
    best_by(input, key, Ordering::Less)
}

/// Largest element by `key`. Ties keep the earliest element.
pub fn max<'a, T: Element>(input: &'a [T], key: &KeySelector) -> Result<Option<&'a T>> {
    best_by(input, key, Ordering::Greater)
}

/// Like [`min`] with an explicit property name.
pub fn min_by<'a, T: Element>(input: &'a [T], property: &str) -> Result<Option<&'a T>> {
    best_by(input, &KeySelector::field(property), Ordering::Less)
}

/// Like [`max`] with an explicit property name.
pub fn max_by<'a, T: Element>(input: &'a [T], property: &str) -> Result<Option<&'a T>> {
    best_by(input, &KeySelector::field(property), Ordering::Greater)
}

/// Single forward scan; an element replaces the best-so-far only when its
/// key compares strictly `wanted` against it. Records without the key field
/// never replace it.
fn best_by<'a, T: Element>(
    input: &'a [T],
    key: &KeySelector,
    wanted: Ordering,
) -> Result<Option<&'a T>> {
    let Some((first, rest)) = input.split_first() else {
        return Ok(None);
    };

    let resolved = key.resolve(first)?;
    let mut best = first;
    let mut best_key = resolved.extract(first);
    for v in rest {
        let Some(k) = resolved.lookup(v) else {
            continue;
        };
        if k.total_cmp(&best_key) == wanted {
            best = v;
            best_key = k;
        }
    }
    Ok(Some(best))
}
