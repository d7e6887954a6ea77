//! Comparison budget for the nested-loop operators.
//!
//! Set, join and group-join operators compare every pair of elements. The
//! budget is checked once per call, before any comparison runs, against an
//! estimate of the pairs the call may touch.

use crate::config::QueryConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetExceeded {
    pub requested: u64,
    pub cap: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComparisonBudget {
    cap: Option<u64>,
}

impl ComparisonBudget {
    pub const fn unbounded() -> Self {
        Self { cap: None }
    }

    pub const fn new(cap: u64) -> Self {
        Self { cap: Some(cap) }
    }

    pub fn from_config(cfg: &QueryConfig) -> Self {
        Self {
            cap: cfg.comparison_budget,
        }
    }

    pub fn cap(&self) -> Option<u64> {
        self.cap
    }

    /// Estimated comparisons for `left x right` pairs.
    pub fn pairs(left: usize, right: usize) -> u64 {
        (left as u64).saturating_mul(right as u64)
    }

    /// Estimated comparisons for a self-deduplicating scan of `n` elements.
    pub fn triangle(n: usize) -> u64 {
        let n = n as u64;
        n.saturating_mul(n.saturating_sub(1)) / 2
    }

    pub fn check(&self, requested: u64) -> Result<(), BudgetExceeded> {
        match self.cap {
            Some(cap) if requested > cap => Err(BudgetExceeded { requested, cap }),
            _ => Ok(()),
        }
    }
}
