//! Selection engine execution.

use super::config::{Direction, LockMode, SelectionConfig};
use crate::dataset::Candidate;
use crate::error::SelectError;
use crate::ilp::{
    BoolVar, BranchBoundSolver, IlpModel, IlpSolver, Objective, SolverConfig, SolverStatus,
};
use std::collections::HashSet;

/// Outcome classification of one selection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionStatus {
    /// Proven optimal subset.
    Optimal,
    /// A subset was found but optimality was not proven in time.
    Feasible,
    /// The constraints cannot be jointly satisfied.
    Infeasible,
    /// The solver gave up (time or node budget) without any subset.
    Unknown,
}

impl SelectionStatus {
    /// Lowercase label for rendering.
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionStatus::Optimal => "optimal",
            SelectionStatus::Feasible => "feasible",
            SelectionStatus::Infeasible => "infeasible",
            SelectionStatus::Unknown => "unknown",
        }
    }
}

/// Result of a selection run.
///
/// Produced once per request and not mutated afterward.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    /// Outcome classification.
    pub status: SelectionStatus,

    /// Selected names: resolved locks first (in lock-list order), then
    /// solver picks in dataset order. Empty unless a subset was found.
    pub selected: Vec<String>,

    /// Aggregate value of the selection, locked contributions included.
    pub total_value: f64,

    /// Aggregate weight of the selection, recomputed from the raw
    /// candidate records rather than read back from the solver.
    pub total_weight: f64,

    /// Locked names that matched no candidate; the run proceeded
    /// without them.
    pub unresolved_locks: Vec<String>,

    /// Solver wall-clock time in milliseconds.
    pub solve_time_ms: i64,
}

impl Selection {
    /// Whether a subset was found.
    pub fn is_solution_found(&self) -> bool {
        matches!(
            self.status,
            SelectionStatus::Optimal | SelectionStatus::Feasible
        )
    }

    fn empty(status: SelectionStatus, unresolved_locks: Vec<String>, solve_time_ms: i64) -> Self {
        Self {
            status,
            selected: Vec::new(),
            total_value: 0.0,
            total_weight: 0.0,
            unresolved_locks,
            solve_time_ms,
        }
    }
}

/// Solves a single-round constrained subset-selection problem.
///
/// The engine owns no state; each [`run`](SelectionEngine::run) call
/// takes its inputs, produces one [`Selection`], and touches nothing
/// shared.
pub struct SelectionEngine;

impl SelectionEngine {
    /// Runs a selection with the bundled exact solver.
    pub fn run(
        candidates: &[Candidate],
        config: &SelectionConfig,
        locks: &[String],
    ) -> Result<Selection, SelectError> {
        Self::run_with_solver(&BranchBoundSolver::new(), candidates, config, locks)
    }

    /// Runs a selection through a caller-provided solver.
    ///
    /// Configuration problems are the only errors; every solver outcome
    /// (including infeasibility and timeouts) is reported through
    /// [`Selection::status`].
    pub fn run_with_solver<S: IlpSolver>(
        solver: &S,
        candidates: &[Candidate],
        config: &SelectionConfig,
        locks: &[String],
    ) -> Result<Selection, SelectError> {
        config.validate().map_err(SelectError::InvalidConfig)?;

        // First occurrence wins on duplicate or repeated names; blank
        // names never take part.
        let mut seen: HashSet<&str> = HashSet::new();
        let pool: Vec<usize> = (0..candidates.len())
            .filter(|&i| {
                let name = candidates[i].name.trim();
                if name.is_empty() {
                    return false;
                }
                if seen.insert(name) {
                    true
                } else {
                    tracing::warn!(name, "duplicate candidate name, keeping first occurrence");
                    false
                }
            })
            .collect();

        // Resolve each lock to the first not-yet-locked candidate whose
        // trimmed name matches exactly.
        let mut locked: Vec<usize> = Vec::new();
        let mut unresolved: Vec<String> = Vec::new();
        for lock in locks {
            let wanted = lock.trim();
            let found = pool
                .iter()
                .copied()
                .find(|&i| !locked.contains(&i) && candidates[i].name.trim() == wanted);
            match found {
                Some(i) => locked.push(i),
                None => {
                    tracing::warn!(name = wanted, "locked candidate not found in dataset");
                    unresolved.push(wanted.to_string());
                }
            }
        }

        let scale = config.weight_scale as f64;
        let scaled = |w: f64| (w * scale).round() as i64;
        let budget_scaled = scaled(config.budget_limit);

        let solver_config = SolverConfig::default()
            .with_time_limit_ms(config.time_limit_ms)
            .with_max_nodes(config.max_nodes);

        match config.lock_mode {
            LockMode::PreSubtract => {
                let locked_weight: i64 = locked.iter().map(|&i| scaled(candidates[i].weight)).sum();
                let locked_value: f64 = locked.iter().map(|&i| candidates[i].value).sum();

                if locked.len() > config.count_limit {
                    tracing::debug!(
                        locked = locked.len(),
                        count_limit = config.count_limit,
                        "more locks than allowed picks"
                    );
                    return Ok(Selection::empty(SelectionStatus::Infeasible, unresolved, 0));
                }
                let free_budget = budget_scaled - locked_weight;
                if free_budget < 0 {
                    tracing::debug!(locked_weight, budget_scaled, "locked weight exceeds budget");
                    return Ok(Selection::empty(SelectionStatus::Infeasible, unresolved, 0));
                }
                let free_count = (config.count_limit - locked.len()) as i64;
                let min_needed = config
                    .min_count
                    .map(|min| min.saturating_sub(locked.len()) as i64)
                    .filter(|&needed| needed > 0);

                let free: Vec<usize> = pool
                    .iter()
                    .copied()
                    .filter(|i| !locked.contains(i))
                    .collect();
                let model = build_model(
                    candidates,
                    &free,
                    &scaled,
                    free_budget,
                    free_count,
                    min_needed,
                    config.direction,
                );

                let solution = solver.solve(&model, &solver_config);
                let status = map_status(solution.status);
                if !solution.is_solution_found() {
                    return Ok(Selection::empty(status, unresolved, solution.solve_time_ms));
                }

                let picked: Vec<usize> = free
                    .iter()
                    .copied()
                    .filter(|&i| {
                        solution
                            .values
                            .get(candidates[i].name.trim())
                            .copied()
                            .unwrap_or(false)
                    })
                    .collect();

                Ok(assemble(
                    candidates,
                    &locked,
                    &picked,
                    solution.objective_value.unwrap_or(0.0) + locked_value,
                    status,
                    unresolved,
                    solution.solve_time_ms,
                ))
            }

            LockMode::ForceInclude => {
                let mut model = build_model(
                    candidates,
                    &pool,
                    &scaled,
                    budget_scaled,
                    config.count_limit as i64,
                    config.min_count.map(|m| m as i64),
                    config.direction,
                );
                for &i in &locked {
                    model.add_eq(vec![(candidates[i].name.trim().to_string(), 1)], 1);
                }

                let solution = solver.solve(&model, &solver_config);
                let status = map_status(solution.status);
                if !solution.is_solution_found() {
                    return Ok(Selection::empty(status, unresolved, solution.solve_time_ms));
                }

                let picked: Vec<usize> = pool
                    .iter()
                    .copied()
                    .filter(|i| !locked.contains(i))
                    .filter(|&i| {
                        solution
                            .values
                            .get(candidates[i].name.trim())
                            .copied()
                            .unwrap_or(false)
                    })
                    .collect();

                Ok(assemble(
                    candidates,
                    &locked,
                    &picked,
                    solution.objective_value.unwrap_or(0.0),
                    status,
                    unresolved,
                    solution.solve_time_ms,
                ))
            }
        }
    }
}

/// Builds the 0/1 model over `items` (indices into `candidates`).
fn build_model(
    candidates: &[Candidate],
    items: &[usize],
    scaled: &dyn Fn(f64) -> i64,
    budget: i64,
    count: i64,
    min_count: Option<i64>,
    direction: Direction,
) -> IlpModel {
    let mut model = IlpModel::new("selection");
    let mut weight_terms = Vec::with_capacity(items.len());
    let mut count_terms = Vec::with_capacity(items.len());
    let mut value_terms = Vec::with_capacity(items.len());

    for &i in items {
        let name = candidates[i].name.trim().to_string();
        model.add_bool_var(BoolVar::new(&name));
        weight_terms.push((name.clone(), scaled(candidates[i].weight)));
        count_terms.push((name.clone(), 1));
        value_terms.push((name, candidates[i].value));
    }

    model.add_le(weight_terms, budget);
    model.add_le(count_terms.clone(), count);
    if let Some(min) = min_count {
        model.add_ge(count_terms, min);
    }
    model.set_objective(match direction {
        Direction::Maximize => Objective::Maximize { terms: value_terms },
        Direction::Minimize => Objective::Minimize { terms: value_terms },
    });
    model
}

fn assemble(
    candidates: &[Candidate],
    locked: &[usize],
    picked: &[usize],
    total_value: f64,
    status: SelectionStatus,
    unresolved_locks: Vec<String>,
    solve_time_ms: i64,
) -> Selection {
    let selected: Vec<String> = locked
        .iter()
        .chain(picked.iter())
        .map(|&i| candidates[i].name.trim().to_string())
        .collect();
    let total_weight: f64 = locked
        .iter()
        .chain(picked.iter())
        .map(|&i| candidates[i].weight)
        .sum();

    Selection {
        status,
        selected,
        total_value,
        total_weight,
        unresolved_locks,
        solve_time_ms,
    }
}

fn map_status(status: SolverStatus) -> SelectionStatus {
    match status {
        SolverStatus::Optimal => SelectionStatus::Optimal,
        SolverStatus::Feasible => SelectionStatus::Feasible,
        SolverStatus::Infeasible => SelectionStatus::Infeasible,
        SolverStatus::ModelInvalid | SolverStatus::Timeout | SolverStatus::Unknown => {
            SelectionStatus::Unknown
        }
    }
}
