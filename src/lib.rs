//! Budget-constrained lineup selection.
//!
//! Selects an optimal subset of scored candidates under a cumulative
//! weight budget and a maximum pick count, with support for forcing
//! ("locking") named candidates into the lineup before optimization
//! runs. The decision core is a 0/1 integer program solved exactly;
//! everything around it is dataset plumbing.
//!
//! - **dataset**: CSV ingestion with column selection and one-shot
//!   numeric normalization (currency-formatted text included).
//! - **ilp**: domain-agnostic 0/1 linear modeling layer with a
//!   pluggable solver trait and a bundled exact branch-and-bound.
//! - **select**: the selection engine — lock resolution, lock-mode
//!   policy, weight scaling, result assembly.
//! - **report**: human-readable rendering of results.
//! - **batch**: driver loop over multiple dataset files, optionally
//!   parallel across files.
//!
//! # Example
//!
//! ```
//! use lineup_select::dataset::Candidate;
//! use lineup_select::select::{SelectionConfig, SelectionEngine};
//!
//! let pool = vec![
//!     Candidate::new("A", 10.0, 5.0),
//!     Candidate::new("B", 25.0, 9.0),
//!     Candidate::new("C", 5.0, 3.0),
//! ];
//! let config = SelectionConfig::default()
//!     .with_budget_limit(30.0)
//!     .with_count_limit(2)
//!     .with_weight_scale(1);
//!
//! let selection = SelectionEngine::run(&pool, &config, &[]).unwrap();
//! assert_eq!(selection.selected, vec!["B", "C"]);
//! ```

pub mod batch;
pub mod dataset;
pub mod error;
pub mod ilp;
pub mod report;
pub mod select;
