//! Candidate dataset ingestion.
//!
//! A dataset is a CSV file with a header row naming at least three
//! columns: a unique-name column, a numeric weight column, and one or
//! more value columns (numeric, or currency-formatted text such as
//! `"$1,234.56"`). [`ColumnSpec`] selects which columns to read;
//! everything is trimmed before matching, since real exports routinely
//! carry incidental whitespace in headers and cells.
//!
//! # Design
//!
//! Numeric cleanup happens exactly once, at ingestion: every record
//! that leaves this module carries validated `f64` attributes, and
//! inputs that cannot be coerced fail the load with
//! [`SelectError::ParseNumber`](crate::error::SelectError). Consumers
//! never branch on string-vs-number again.
//!
//! Duplicate names resolve first-occurrence-wins: later rows with an
//! already-seen name are dropped with a warning so that every name maps
//! to exactly one record downstream.

mod loader;
mod normalize;
mod types;

pub use loader::{load_candidates, read_candidates};
pub use normalize::parse_numeric;
pub use types::{Candidate, ColumnSpec};
