#![forbid(unsafe_code)]
//! seqquery-core: value model, element seam, configuration and hashing.
//!
//! Operators live in `seqquery-operators`; this crate only defines what they
//! operate on. No I/O and no operator logic here.

pub mod budget;
pub mod config;
pub mod element;
pub mod error;
pub mod hash;
pub mod prelude;
pub mod schema;
pub mod types;

pub use element::Element;
pub use error::{Error, Result};
pub use schema::{DataType, Field, Record};
pub use types::Value;
