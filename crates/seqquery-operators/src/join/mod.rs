//! Key joins (nested loop).
//!
//! Both sides resolve their key on their first element. The representative
//! key values must not be sequences and must have the same type (a `Null`
//! key is compatible with anything). After that, each element's key is read
//! by its own shape: records read the resolved field, primitives use
//! themselves, so mixed-shape inputs join.

pub mod group_join;
pub mod nested_loop;

pub use group_join::group_join_by_key;
pub use nested_loop::join_by_key;

use std::borrow::Cow;

use seqquery_core::element::Element;
use seqquery_core::types::Value;

use crate::key::{KeySelector, ResolvedKey};
use crate::traits::{OpError, Result};

/// Key value of every element on one side of a join.
pub(crate) fn side_keys<'e, E: Element>(
    elements: &'e [E],
    resolved: ResolvedKey<'_>,
) -> Vec<Cow<'e, Value>> {
    elements.iter().map(|e| resolved.extract(e)).collect()
}

/// Validate the two representative key values.
pub(crate) fn check_key_types(
    outer_key: &KeySelector,
    outer_value: &Value,
    inner_key: &KeySelector,
    inner_value: &Value,
) -> Result<()> {
    for (side, key, value) in [
        ("outer", outer_key, outer_value),
        ("inner", inner_key, inner_value),
    ] {
        if value.is_sequence() {
            return Err(OpError::IncompatibleKeyType(format!(
                "{} key '{}' is a sequence",
                side,
                key.label()
            )));
        }
    }

    if !outer_value.is_null()
        && !inner_value.is_null()
        && outer_value.data_type() != inner_value.data_type()
    {
        return Err(OpError::IncompatibleKeyType(format!(
            "outer key '{}' is {} but inner key '{}' is {}",
            outer_key.label(),
            outer_value.data_type(),
            inner_key.label(),
            inner_value.data_type()
        )));
    }
    Ok(())
}
