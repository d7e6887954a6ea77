//! Group-by.
//!
//! Keys are resolved per element and compared by strict equality; groups
//! come out in first-seen key order. Lookups go through a blake3
//! fingerprint index and are confirmed with `==`, so keys that are never
//! strictly equal (NaN) always open a new group.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use seqquery_core::element::Element;
use seqquery_core::hash::{fingerprint, Hash256};
use seqquery_core::types::Value;

use crate::key::KeySelector;
use crate::traits::{OpError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group<V> {
    pub key: Value,
    pub value: V,
}

/// Group keys in first-seen order plus, for every input element, the index
/// of the group it landed in.
#[derive(Debug, Default)]
struct Partition {
    keys: Vec<Value>,
    slots: Vec<usize>,
}

fn partition<T: Element>(input: &[T], key: &KeySelector) -> Result<Partition> {
    let mut part = Partition {
        keys: Vec::new(),
        slots: Vec::with_capacity(input.len()),
    };
    let mut index: HashMap<Hash256, Vec<usize>> = HashMap::new();

    for element in input {
        let resolved = key.resolve(element)?;
        let k = resolved.extract(element);
        if k.is_sequence() {
            return Err(OpError::EnumerableKey {
                property: key.label().to_string(),
            });
        }

        let candidates = index.entry(fingerprint(&k)).or_default();
        let slot = match candidates.iter().copied().find(|&g| part.keys[g] == *k) {
            Some(g) => g,
            None => {
                let g = part.keys.len();
                candidates.push(g);
                part.keys.push(k.into_owned());
                g
            }
        };
        part.slots.push(slot);
    }
    Ok(part)
}

fn collect_groups<T, E, F>(input: &[T], part: Partition, mut select: F) -> Vec<Group<Vec<E>>>
where
    F: FnMut(&T) -> E,
{
    let mut values: Vec<Vec<E>> = part.keys.iter().map(|_| Vec::new()).collect();
    for (element, slot) in input.iter().zip(&part.slots) {
        values[*slot].push(select(element));
    }
    part.keys
        .into_iter()
        .zip(values)
        .map(|(key, value)| Group { key, value })
        .collect()
}

/// Groups of the raw elements.
pub fn group_by<T>(input: &[T], key: &KeySelector) -> Result<Vec<Group<Vec<T>>>>
where
    T: Element + Clone,
{
    let part = partition(input, key)?;
    Ok(collect_groups(input, part, T::clone))
}

/// Groups of `element_selector(element)`.
pub fn group_by_element<T, E, F>(
    input: &[T],
    key: &KeySelector,
    element_selector: F,
) -> Result<Vec<Group<Vec<E>>>>
where
    T: Element,
    F: FnMut(&T) -> E,
{
    let part = partition(input, key)?;
    Ok(collect_groups(input, part, element_selector))
}

/// One computed value per key: `result_selector(key, element_selector(e))`.
///
/// A result selector needs an element selector (`MissingElementSelector`
/// otherwise). Every element overwrites its group's value, so each group
/// ends up holding the result computed from its last element.
pub fn group_by_result<T, E, R, FE, FR>(
    input: &[T],
    key: &KeySelector,
    element_selector: Option<FE>,
    mut result_selector: FR,
) -> Result<Vec<Group<R>>>
where
    T: Element,
    FE: FnMut(&T) -> E,
    FR: FnMut(&Value, E) -> R,
{
    let mut element_selector = element_selector.ok_or(OpError::MissingElementSelector)?;
    let part = partition(input, key)?;

    let mut values: Vec<Option<R>> = part.keys.iter().map(|_| None).collect();
    for (element, slot) in input.iter().zip(&part.slots) {
        let selected = element_selector(element);
        values[*slot] = Some(result_selector(&part.keys[*slot], selected));
    }
    Ok(part
        .keys
        .into_iter()
        .zip(values)
        .filter_map(|(key, value)| value.map(|value| Group { key, value }))
        .collect())
}
