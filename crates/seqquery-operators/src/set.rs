//! Set operators over structural equality.
//!
//! Equality is decided over the field set of a representative element: the
//! first element of the (combined) left input. Every membership test is a
//! linear scan, so these operators are O(n²) / O(n·m) and are charged
//! against the comparison budget before they start.

use seqquery_core::budget::ComparisonBudget;
use seqquery_core::element::Element;

use crate::equality::StructuralEq;
use crate::traits::{charge, Result};

/// One representative per structurally-equal group over `input` followed by
/// every present sequence in `others`, in first-seen order.
///
/// Absent (`None`) sequences are skipped. An empty combined input yields
/// `None`.
pub fn distinct<'a, T, I, S>(
    input: &'a [T],
    others: I,
    budget: &ComparisonBudget,
) -> Result<Option<Vec<T>>>
where
    T: Element + Clone + 'a,
    I: IntoIterator<Item = S>,
    S: Into<Option<&'a [T]>>,
{
    let combined: Vec<&T> = input
        .iter()
        .chain(others.into_iter().filter_map(present).flatten())
        .collect();
    let Some(representative) = combined.first() else {
        return Ok(None);
    };
    charge(budget, "distinct", ComparisonBudget::triangle(combined.len()))?;

    let cmp = StructuralEq::from_representative(*representative);
    let mut result: Vec<&T> = Vec::new();
    for candidate in combined.iter().copied() {
        if !result.iter().any(|seen| cmp.eq(*seen, candidate)) {
            result.push(candidate);
        }
    }
    Ok(Some(result.into_iter().cloned().collect()))
}

/// Plain concatenation of `input` and every present sequence in `others`.
/// Not deduplicated.
pub fn union<'a, T, I, S>(input: &'a [T], others: I) -> Vec<T>
where
    T: Clone + 'a,
    I: IntoIterator<Item = S>,
    S: Into<Option<&'a [T]>>,
{
    input
        .iter()
        .chain(others.into_iter().filter_map(present).flatten())
        .cloned()
        .collect()
}

/// Elements of `input`, deduplicated and in order, that have a structurally
/// equal counterpart in `other`.
pub fn intersect<T>(input: &[T], other: &[T], budget: &ComparisonBudget) -> Result<Vec<T>>
where
    T: Element + Clone,
{
    filter_against(input, other, budget, "intersect", true)
}

/// Elements of `input`, in order, with no structurally equal counterpart in
/// `other`. The result is also deduplicated against itself.
pub fn except<T>(input: &[T], other: &[T], budget: &ComparisonBudget) -> Result<Vec<T>>
where
    T: Element + Clone,
{
    filter_against(input, other, budget, "except", false)
}

fn present<'a, T, S: Into<Option<&'a [T]>>>(s: S) -> Option<&'a [T]> {
    s.into()
}

fn filter_against<T>(
    input: &[T],
    other: &[T],
    budget: &ComparisonBudget,
    op: &'static str,
    keep_matches: bool,
) -> Result<Vec<T>>
where
    T: Element + Clone,
{
    let Some(representative) = input.first() else {
        return Ok(Vec::new());
    };
    charge(
        budget,
        op,
        ComparisonBudget::pairs(input.len(), other.len())
            .saturating_add(ComparisonBudget::triangle(input.len())),
    )?;

    let cmp = StructuralEq::from_representative(representative);
    let mut result: Vec<&T> = Vec::new();
    for candidate in input {
        if result.iter().any(|seen| cmp.eq(*seen, candidate)) {
            continue;
        }
        if cmp.contains(other, candidate) == keep_matches {
            result.push(candidate);
        }
    }
    Ok(result.into_iter().cloned().collect())
}
