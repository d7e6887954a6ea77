//! Structural equality used by the set operators.
//!
//! Equality is asymmetric: it is decided over the field set of the left
//! operand (or of a representative element of the collection being
//! compared). Fields present only on the right side are never examined. When
//! the representative has no fields, elements are compared by strict value
//! equality.

use seqquery_core::element::Element;

/// Field set captured from a representative element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralEq {
    fields: Vec<String>,
}

impl StructuralEq {
    pub fn from_representative<E: Element + ?Sized>(representative: &E) -> Self {
        Self {
            fields: representative
                .field_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Compare `a` and `b` over the captured field set. A field missing on
    /// both sides counts as equal; missing on one side does not.
    pub fn eq<E: Element + ?Sized>(&self, a: &E, b: &E) -> bool {
        if self.fields.is_empty() {
            return a.as_value() == b.as_value();
        }
        self.fields.iter().all(|name| a.field(name) == b.field(name))
    }

    pub fn contains<E: Element>(&self, seq: &[E], candidate: &E) -> bool {
        seq.iter().any(|e| self.eq(e, candidate))
    }
}

/// `a` equals `b` when every own field of `a` exists on `b` with a strictly
/// equal value. Primitives compare by value.
pub fn equals<E: Element + ?Sized>(a: &E, b: &E) -> bool {
    let names = a.field_names();
    if names.is_empty() {
        return a.as_value() == b.as_value();
    }
    names
        .iter()
        .all(|name| matches!((a.field(name), b.field(name)), (Some(x), Some(y)) if x == y))
}

/// Linear scan: does any stored element structurally equal `candidate`?
/// The stored element is the left operand.
pub fn contains_structurally<E: Element>(seq: &[E], candidate: &E) -> bool {
    seq.iter().any(|e| equals(e, candidate))
}
