//! Constrained subset selection — the decision core.
//!
//! Translates a scored candidate pool plus a set of forced inclusions
//! ("locks") into a 0/1 selection problem and solves it through the
//! [`IlpSolver`](crate::ilp::IlpSolver) seam.
//!
//! # Key Components
//!
//! - **Config**: [`SelectionConfig`] — budget, count limits, direction,
//!   lock mode, weight scaling, solve budget
//! - **Engine**: [`SelectionEngine`] — lock resolution, model
//!   construction, result assembly
//! - **Result**: [`Selection`] — status, chosen names, aggregates
//!
//! # Locking
//!
//! Two locking strategies exist behind [`LockMode`]:
//!
//! - [`LockMode::PreSubtract`] (default): locked candidates leave the
//!   optimization pool; their weight and value are accumulated directly
//!   and the remaining limits are reduced before the solver runs.
//! - [`LockMode::ForceInclude`]: locked candidates stay in the pool
//!   with an equality constraint pinning their decision variable to 1;
//!   budget and count constraints sum over all candidates against the
//!   original limits.
//!
//! A lock naming a candidate that does not exist is a warning, not an
//! error: the run proceeds as if that lock was never requested, and the
//! unresolved name is reported back on the [`Selection`].

mod config;
mod engine;

pub use config::{Direction, LockMode, SelectionConfig};
pub use engine::{Selection, SelectionEngine, SelectionStatus};
