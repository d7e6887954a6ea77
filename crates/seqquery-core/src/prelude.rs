//! Convenient re-exports for downstream crates.

pub use crate::budget::ComparisonBudget;
pub use crate::config::QueryConfig;
pub use crate::element::Element;
pub use crate::error::{Error, Result};
pub use crate::schema::{DataType, Field, Record};
pub use crate::types::Value;
