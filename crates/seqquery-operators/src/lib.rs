#![forbid(unsafe_code)]
//! seqquery-operators: query operators over in-memory sequences
//! (filter/select/aggregate/sort/set/join/group).
//!
//! Design intent:
//! - Pure and synchronous. Every operator reads its input and allocates a new
//!   output; ordering operators return sorted copies.
//! - Key-based operators resolve a `KeySelector` against a representative
//!   element before doing any work. Empty inputs are never resolved.
//! - "Nothing found" is `None`; structural and type problems are `OpError`.
//! - Nested-loop operators are charged against the `ComparisonBudget` from
//!   the sequence's `QueryConfig` up front.

pub mod aggregate;
pub mod equality;
pub mod filter;
pub mod group;
pub mod join;
pub mod key;
pub mod map;
pub mod metrics;
pub mod sequence;
pub mod set;
pub mod sort;
pub mod traits;

pub use equality::{contains_structurally, equals, StructuralEq};
pub use group::Group;
pub use key::{KeySelector, ResolvedKey};
pub use sequence::Sequence;
pub use sort::Direction;
pub use traits::{OpError, Result};
