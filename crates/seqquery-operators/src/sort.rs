//! Ordering operators.
//!
//! Both operators are copy-returning: the input slice is never reordered.
//! Keys are extracted once per element, then `(key, original_index)` pairs
//! are sorted with a stable sort, so equal keys keep source order.

use std::borrow::Cow;
use std::cmp::Ordering;

use seqquery_core::element::Element;
use seqquery_core::types::Value;

use crate::key::KeySelector;
use crate::traits::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

/// Sorted copy, ascending by `key`. `None` on empty input.
pub fn order_by<T: Element + Clone>(input: &[T], key: &KeySelector) -> Result<Option<Vec<T>>> {
    sort_with(input, key, Direction::Ascending)
}

/// Sorted copy, descending by `key`. `None` on empty input.
pub fn order_by_desc<T: Element + Clone>(
    input: &[T],
    key: &KeySelector,
) -> Result<Option<Vec<T>>> {
    sort_with(input, key, Direction::Descending)
}

pub fn sort_with<T: Element + Clone>(
    input: &[T],
    key: &KeySelector,
    direction: Direction,
) -> Result<Option<Vec<T>>> {
    let Some(first) = input.first() else {
        return Ok(None);
    };
    let resolved = key.resolve(first)?;

    let mut keyed: Vec<(Cow<'_, Value>, usize)> = input
        .iter()
        .enumerate()
        .map(|(idx, v)| (resolved.extract(v), idx))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.total_cmp(b)));

    Ok(Some(keyed.into_iter().map(|(_, idx)| input[idx].clone()).collect()))
}
