//! Crate error taxonomy.
//!
//! Only configuration and parsing failures are surfaced as errors —
//! they are fatal for a run and propagate to the caller. Everything the
//! solver can report (infeasible, timed out, unknown) is carried in a
//! status enum instead, so callers branch on outcome without exception
//! handling. See [`crate::ilp::SolverStatus`] and
//! [`crate::select::SelectionStatus`].

use thiserror::Error;

/// Errors produced while loading a dataset or configuring a selection.
#[derive(Debug, Error)]
pub enum SelectError {
    /// Underlying I/O failure while reading a dataset file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An expected column is absent from the header row.
    #[error("missing expected column '{0}'")]
    MissingColumn(String),

    /// A cell could not be coerced to a number after normalization.
    #[error("cannot parse '{text}' in column '{column}' as a number")]
    ParseNumber {
        /// Column the cell came from.
        column: String,
        /// The offending text, as read.
        text: String,
    },

    /// A weight parsed but is negative or non-finite.
    #[error("invalid weight {value} for '{name}': weights must be finite and non-negative")]
    InvalidWeight {
        /// Candidate the weight belongs to.
        name: String,
        /// The parsed value.
        value: f64,
    },

    /// The selection configuration failed validation.
    #[error("invalid selection config: {0}")]
    InvalidConfig(String),
}
