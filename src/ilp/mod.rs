//! 0/1 integer linear programming framework.
//!
//! Provides a domain-agnostic modeling layer for subset-selection style
//! problems: boolean decision variables, linear constraints with integer
//! coefficients, and a linear objective.
//!
//! # Key Components
//!
//! - **Variables**: [`BoolVar`] — one 0/1 decision per candidate
//! - **Constraints**: [`LinearConstraint`] — `Σ aᵢxᵢ {≤,≥,=} b`
//! - **Model**: [`IlpModel`] — container for variables, constraints, objective
//! - **Solver**: [`IlpSolver`] trait — interface for solver implementations
//!
//! # Design
//!
//! This module defines the modeling layer and one exact reference
//! solver. The [`IlpSolver`] trait allows plugging in external solvers
//! (OR-Tools CP-SAT, CBC) without touching consumers; the bundled
//! [`BranchBoundSolver`] is a deterministic depth-first branch-and-bound
//! that is entirely adequate for pools of a few hundred variables.
//!
//! All constraint coefficients are integers. Callers working with
//! fractional quantities scale them to an integer unit first, so every
//! comparison inside a constraint happens in the same domain.

mod model;
mod solver;
mod variables;

pub use model::{CmpOp, IlpModel, LinearConstraint, Objective};
pub use solver::{BranchBoundSolver, IlpSolution, IlpSolver, SolverConfig, SolverStatus};
pub use variables::BoolVar;
