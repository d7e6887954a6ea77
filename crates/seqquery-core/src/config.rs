//! Query configuration that callers can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Cap on estimated pairwise comparisons for the nested-loop operators
    /// (distinct, intersect, except, joins). `None` means unbounded.
    pub comparison_budget: Option<u64>,

    /// Emit per-operator trace events. Only effective when the operators
    /// crate is built with the `tracing` feature.
    pub trace_operators: bool,
}

impl QueryConfig {
    pub fn with_comparison_budget(mut self, cap: u64) -> Self {
        self.comparison_budget = Some(cap);
        self
    }

    pub fn with_tracing(mut self, on: bool) -> Self {
        self.trace_operators = on;
        self
    }

    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SEQQUERY_COMPARISON_BUDGET`: comparison cap (unset or `none` = unbounded)
    /// - `SEQQUERY_TRACE_OPERATORS`: `1`/`true` to trace operator calls
    ///
    /// Unparseable values are ignored, like the other `from_env` loaders.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("SEQQUERY_COMPARISON_BUDGET") {
            if let Ok(v) = parse_budget(&s) {
                cfg.comparison_budget = v;
            }
        }

        if let Ok(s) = std::env::var("SEQQUERY_TRACE_OPERATORS") {
            if let Ok(v) = parse_flag(&s) {
                cfg.trace_operators = v;
            }
        }

        cfg
    }

    /// Strict variant of [`QueryConfig::from_env`]: a set but malformed
    /// variable is an error instead of being ignored.
    pub fn try_from_env() -> Result<Self> {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("SEQQUERY_COMPARISON_BUDGET") {
            cfg.comparison_budget = parse_budget(&s)?;
        }
        if let Ok(s) = std::env::var("SEQQUERY_TRACE_OPERATORS") {
            cfg.trace_operators = parse_flag(&s)?;
        }

        Ok(cfg)
    }
}

fn parse_budget(s: &str) -> Result<Option<u64>> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    s.parse::<u64>()
        .map(Some)
        .map_err(|e| Error::Config(format!("SEQQUERY_COMPARISON_BUDGET '{}': {}", s, e)))
}

fn parse_flag(s: &str) -> Result<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(Error::Config(format!(
            "SEQQUERY_TRACE_OPERATORS: expected a boolean, got '{}'",
            other
        ))),
    }
}
