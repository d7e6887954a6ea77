#![forbid(unsafe_code)]
//! seqquery: declarative query operators over in-memory sequences.
//!
//! Facade over `seqquery-core` (values, records, config) and
//! `seqquery-operators` (the operator engine). Most callers only need the
//! prelude:
//!
//! ```
//! use seqquery::prelude::*;
//!
//! let people = Sequence::from_json(serde_json::json!([
//!     { "name": "ada", "age": 36 },
//!     { "name": "bob", "age": 19 },
//! ]));
//! let youngest = people.min_by("age").unwrap().unwrap();
//! assert_eq!(youngest.get("name"), Some(&Value::from("bob")));
//! ```

pub use seqquery_core;
pub use seqquery_operators;

pub mod prelude {
    pub use seqquery_core::prelude::{ComparisonBudget, DataType, Element, Field, QueryConfig, Record, Value};
    pub use seqquery_operators::{Group, KeySelector, OpError, Sequence};
}
