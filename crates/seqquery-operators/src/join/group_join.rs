//! Group join: every outer element with all of its matching inner elements.

use seqquery_core::budget::ComparisonBudget;
use seqquery_core::element::Element;

use crate::join::{check_key_types, side_keys};
use crate::key::KeySelector;
use crate::traits::{charge, Result};

/// `result(outer, group)` exactly once per outer element, where `group` holds
/// every inner element with a strictly equal key (possibly none).
pub fn group_join_by_key<T, U, R, F>(
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
    F: FnMut(&T, &[&U]) -> R,
{
    let Some(outer_first) = outer.first() else {
        return Ok(Vec::new());
    };
    let outer_resolved = outer_key.resolve(outer_first)?;

    let Some(inner_first) = inner.first() else {
        let none: &[&U] = &[];
        return Ok(outer.iter().map(|o| result(o, none)).collect());
    };
    let inner_resolved = inner_key.resolve(inner_first)?;
    check_key_types(
        outer_key,
        &outer_resolved.extract(outer_first),
        inner_key,
        &inner_resolved.extract(inner_first),
    )?;
    charge(
        budget,
        "group_join_by_key",
        ComparisonBudget::pairs(outer.len(), inner.len()),
    )?;

    let outer_keys = side_keys(outer, outer_resolved);
    let inner_keys = side_keys(inner, inner_resolved);

    let mut out = Vec::with_capacity(outer.len());
    let mut group: Vec<&U> = Vec::new();
    for (o, ok) in outer.iter().zip(&outer_keys) {
        group.clear();
        group.extend(
            inner
                .iter()
                .zip(&inner_keys)
                .filter(|(_, ik)| *ik == ok)
                .map(|(i, _)| i),
        );
        out.push(result(o, group.as_slice()));
    }
    Ok(out)
}
