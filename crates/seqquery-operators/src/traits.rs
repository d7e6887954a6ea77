//! Operator error type + shared budget check.
//!
//! Structural and type problems raise an `OpError`. "Nothing found" is never
//! an error: those operators return `None` instead.

use seqquery_core::budget::ComparisonBudget;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OpError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpError {
    #[error("malformed key selector: {0}")]
    MalformedSelector(String),

    #[error(
        "property '{property}' does not exist on the selected element; fields are:{}",
        list_fields(.available)
    )]
    UnknownProperty {
        property: String,
        available: Vec<String>,
    },

    #[error("property '{property}' has to be a sequence")]
    NotASequence { property: String },

    #[error("incompatible join keys: {0}")]
    IncompatibleKeyType(String),

    #[error("group key '{property}' cannot be a sequence")]
    EnumerableKey { property: String },

    #[error("a result selector requires an element selector")]
    MissingElementSelector,

    #[error("sequence contains no elements")]
    EmptySequence,

    #[error("{op}: {requested} comparisons exceed the budget of {cap}")]
    BudgetExceeded {
        op: &'static str,
        requested: u64,
        cap: u64,
    },
}

fn list_fields(fields: &[String]) -> String {
    if fields.is_empty() {
        return " (none)".to_string();
    }
    fields.iter().map(|f| format!(" '{}'", f)).collect()
}

/// Reject a call up front if its estimated comparisons exceed the budget.
pub(crate) fn charge(budget: &ComparisonBudget, op: &'static str, requested: u64) -> Result<()> {
    budget.check(requested).map_err(|e| {
        #[cfg(feature = "tracing")]
        tracing::debug!(op, requested = e.requested, cap = e.cap, "comparison budget exceeded");
        OpError::BudgetExceeded {
            op,
            requested: e.requested,
            cap: e.cap,
        }
    })
}
