//! Nested-loop equality join.

use seqquery_core::budget::ComparisonBudget;
use seqquery_core::element::Element;

use crate::join::{check_key_types, side_keys};
use crate::key::KeySelector;
use crate::traits::{charge, Result};

/// `result(outer, inner)` for every pair whose keys are strictly equal, in
/// outer-major order. O(n·m).
pub fn join_by_key<T, U, R, F>(
    outer: &[T],
    inner: &[U],
    outer_key: &KeySelector,
    inner_key: &KeySelector,
    budget: &ComparisonBudget,
    mut result: F,
) -> Result<Vec<R>>
where
    T: Element,
    U: Element,
    F: FnMut(&T, &U) -> R,
{
    let (Some(outer_first), Some(inner_first)) = (outer.first(), inner.first()) else {
        return Ok(Vec::new());
    };

    let outer_resolved = outer_key.resolve(outer_first)?;
    let inner_resolved = inner_key.resolve(inner_first)?;
    check_key_types(
        outer_key,
        &outer_resolved.extract(outer_first),
        inner_key,
        &inner_resolved.extract(inner_first),
    )?;
    charge(
        budget,
        "join_by_key",
        ComparisonBudget::pairs(outer.len(), inner.len()),
    )?;

    let outer_keys = side_keys(outer, outer_resolved);
    let inner_keys = side_keys(inner, inner_resolved);

    let mut out = Vec::new();
    for (o, ok) in outer.iter().zip(&outer_keys) {
        for (i, ik) in inner.iter().zip(&inner_keys) {
            if ok == ik {
                out.push(result(o, i));
            }
        }
    }
    Ok(out)
}
