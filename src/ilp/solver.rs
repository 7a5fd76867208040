//! ILP solver interface and the bundled exact solver.

use super::model::{CmpOp, IlpModel, Objective};
use std::collections::HashMap;
use std::time::Instant;

/// Status of the solver after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverStatus {
    /// Proven optimal solution found.
    Optimal,
    /// Feasible (but not necessarily optimal) solution found.
    Feasible,
    /// No feasible solution exists.
    Infeasible,
    /// Model is invalid or malformed.
    ModelInvalid,
    /// Solver exceeded its time budget before finding any solution.
    Timeout,
    /// No solution found for other reasons (e.g. node limit).
    Unknown,
}

/// Solution from an ILP solver.
#[derive(Debug, Clone)]
pub struct IlpSolution {
    /// Solver status.
    pub status: SolverStatus,
    /// Objective function value (if any solution was found and the
    /// model declared an objective).
    pub objective_value: Option<f64>,
    /// Boolean variable assignments.
    pub values: HashMap<String, bool>,
    /// Number of search nodes explored.
    pub nodes: usize,
    /// Solve time in milliseconds.
    pub solve_time_ms: i64,
}

impl IlpSolution {
    /// Creates an empty solution with the given status.
    pub fn empty(status: SolverStatus) -> Self {
        Self {
            status,
            objective_value: None,
            values: HashMap::new(),
            nodes: 0,
            solve_time_ms: 0,
        }
    }

    /// Whether a feasible solution was found.
    pub fn is_solution_found(&self) -> bool {
        matches!(self.status, SolverStatus::Optimal | SolverStatus::Feasible)
    }
}

/// Solver configuration.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum solve time in milliseconds. `0` disables the limit.
    pub time_limit_ms: i64,
    /// Maximum number of search nodes. `0` disables the limit.
    pub max_nodes: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 60_000,
            max_nodes: 1_000_000,
        }
    }
}

impl SolverConfig {
    pub fn with_time_limit_ms(mut self, ms: i64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    pub fn with_max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = nodes;
        self
    }
}

/// Trait for ILP solver implementations.
///
/// Implementors provide the actual search. This can wrap external
/// solvers (e.g., OR-Tools CP-SAT) or provide custom exact/heuristic
/// algorithms.
pub trait IlpSolver {
    /// Solves the model and returns a solution.
    fn solve(&self, model: &IlpModel, config: &SolverConfig) -> IlpSolution;
}

/// Exact depth-first branch-and-bound solver.
///
/// Branches over the free boolean variables in a deterministic order
/// (objective coefficient descending, name ascending), pruning with
/// per-constraint reachability bounds and an optimistic objective
/// bound. Ties between equal-objective solutions resolve to the first
/// one found, so repeated solves of the same model yield the same
/// assignment.
///
/// # Limitations
///
/// - Boolean variables only (by construction of [`IlpModel`])
/// - The objective bound is the sum of remaining positive coefficients,
///   which is weak on loosely constrained instances; intended for pools
///   up to a few hundred variables
pub struct BranchBoundSolver;

impl BranchBoundSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BranchBoundSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl IlpSolver for BranchBoundSolver {
    fn solve(&self, model: &IlpModel, config: &SolverConfig) -> IlpSolution {
        if let Err(reason) = model.validate() {
            tracing::debug!(model = %model.name, %reason, "invalid model");
            return IlpSolution::empty(SolverStatus::ModelInvalid);
        }

        let start = Instant::now();
        let mut search = Search::compile(model, config, start);
        search.dfs(0, search.base_obj);

        let solve_time_ms = start.elapsed().as_millis() as i64;
        let status = search.status();
        let (objective_value, values) = match &search.best {
            Some(incumbent) => {
                let objective = if search.has_objective {
                    Some(search.sense * incumbent.objective)
                } else {
                    None
                };
                let values = model
                    .bool_vars
                    .iter()
                    .enumerate()
                    .map(|(i, var)| (var.name.clone(), incumbent.assignment[i]))
                    .collect();
                (objective, values)
            }
            None => (None, HashMap::new()),
        };

        tracing::debug!(
            model = %model.name,
            ?status,
            nodes = search.nodes,
            solve_time_ms,
            "branch-and-bound finished"
        );

        IlpSolution {
            status,
            objective_value,
            values,
            nodes: search.nodes,
            solve_time_ms,
        }
    }
}

const EPS: f64 = 1e-9;

struct CompiledConstraint {
    coefs: Vec<i64>,
    op: CmpOp,
    rhs: i64,
}

struct Incumbent {
    assignment: Vec<bool>,
    /// Internal (maximization-sense) objective value.
    objective: f64,
}

struct Search {
    /// Free variable indices in branch order.
    order: Vec<usize>,
    cons: Vec<CompiledConstraint>,
    /// Internal objective coefficients per variable (maximization sense).
    obj: Vec<f64>,
    /// Running left-hand side per constraint for the current partial
    /// assignment (fixed variables included).
    lhs: Vec<i64>,
    /// `suffix_min[k][c]` / `suffix_max[k][c]`: least / greatest possible
    /// contribution of `order[k..]` to constraint `c`.
    suffix_min: Vec<Vec<i64>>,
    suffix_max: Vec<Vec<i64>>,
    /// `suffix_pos[k]`: sum of positive objective coefficients over `order[k..]`.
    suffix_pos: Vec<f64>,
    assignment: Vec<Option<bool>>,
    base_obj: f64,
    has_objective: bool,
    sense: f64,
    best: Option<Incumbent>,
    nodes: usize,
    max_nodes: usize,
    time_limit_ms: i64,
    start: Instant,
    hit_node_limit: bool,
    hit_time_limit: bool,
}

impl Search {
    fn compile(model: &IlpModel, config: &SolverConfig, start: Instant) -> Self {
        let n = model.bool_vars.len();
        let index: HashMap<&str, usize> = model
            .bool_vars
            .iter()
            .enumerate()
            .map(|(i, v)| (v.name.as_str(), i))
            .collect();

        // Internally the search always maximizes; minimization negates
        // the coefficients and the reported value.
        let (sense, obj) = match &model.objective {
            Some(Objective::Maximize { terms }) => (1.0, dense_terms(terms, &index, n)),
            Some(Objective::Minimize { terms }) => {
                let mut coefs = dense_terms(terms, &index, n);
                for c in &mut coefs {
                    *c = -*c;
                }
                (-1.0, coefs)
            }
            None => (1.0, vec![0.0; n]),
        };
        let has_objective = model.objective.is_some();

        let cons: Vec<CompiledConstraint> = model
            .constraints
            .iter()
            .map(|c| {
                let mut coefs = vec![0i64; n];
                for (name, a) in &c.terms {
                    coefs[index[name.as_str()]] += a;
                }
                CompiledConstraint {
                    coefs,
                    op: c.op,
                    rhs: c.rhs,
                }
            })
            .collect();

        let mut assignment: Vec<Option<bool>> = vec![None; n];
        for (i, var) in model.bool_vars.iter().enumerate() {
            assignment[i] = var.fixed;
        }

        let mut lhs = vec![0i64; cons.len()];
        let mut base_obj = 0.0;
        for i in 0..n {
            if assignment[i] == Some(true) {
                for (c, row) in cons.iter().enumerate() {
                    lhs[c] += row.coefs[i];
                }
                base_obj += obj[i];
            }
        }

        let mut order: Vec<usize> = (0..n).filter(|&i| assignment[i].is_none()).collect();
        order.sort_by(|&a, &b| {
            obj[b]
                .partial_cmp(&obj[a])
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| model.bool_vars[a].name.cmp(&model.bool_vars[b].name))
        });

        let depth = order.len();
        let mut suffix_min = vec![vec![0i64; cons.len()]; depth + 1];
        let mut suffix_max = vec![vec![0i64; cons.len()]; depth + 1];
        let mut suffix_pos = vec![0.0; depth + 1];
        for k in (0..depth).rev() {
            let i = order[k];
            for (c, row) in cons.iter().enumerate() {
                suffix_min[k][c] = suffix_min[k + 1][c] + row.coefs[i].min(0);
                suffix_max[k][c] = suffix_max[k + 1][c] + row.coefs[i].max(0);
            }
            suffix_pos[k] = suffix_pos[k + 1] + obj[i].max(0.0);
        }

        Self {
            order,
            cons,
            obj,
            lhs,
            suffix_min,
            suffix_max,
            suffix_pos,
            assignment,
            base_obj,
            has_objective,
            sense,
            best: None,
            nodes: 0,
            max_nodes: config.max_nodes,
            time_limit_ms: config.time_limit_ms,
            start,
            hit_node_limit: false,
            hit_time_limit: false,
        }
    }

    fn aborted(&self) -> bool {
        self.hit_node_limit || self.hit_time_limit
    }

    fn dfs(&mut self, k: usize, cur_obj: f64) {
        self.nodes += 1;
        if self.max_nodes > 0 && self.nodes > self.max_nodes {
            self.hit_node_limit = true;
            return;
        }
        if self.time_limit_ms > 0
            && self.nodes % 1024 == 0
            && self.start.elapsed().as_millis() as i64 > self.time_limit_ms
        {
            self.hit_time_limit = true;
            return;
        }

        // Reachability pruning: with order[k..] still free, can each
        // constraint still be satisfied?
        for (c, row) in self.cons.iter().enumerate() {
            let lo = self.lhs[c] + self.suffix_min[k][c];
            let hi = self.lhs[c] + self.suffix_max[k][c];
            let reachable = match row.op {
                CmpOp::Le => lo <= row.rhs,
                CmpOp::Ge => hi >= row.rhs,
                CmpOp::Eq => lo <= row.rhs && hi >= row.rhs,
            };
            if !reachable {
                return;
            }
        }

        // Objective bound pruning.
        if let Some(best) = &self.best {
            if cur_obj + self.suffix_pos[k] <= best.objective + EPS {
                return;
            }
        }

        if k == self.order.len() {
            // All constraints exact at the leaf (suffix bounds are zero),
            // so reaching here means feasible.
            let assignment: Vec<bool> = self
                .assignment
                .iter()
                .map(|a| a.unwrap_or(false))
                .collect();
            self.best = Some(Incumbent {
                assignment,
                objective: cur_obj,
            });
            return;
        }

        let i = self.order[k];
        let branch = if self.obj[i] >= 0.0 {
            [true, false]
        } else {
            [false, true]
        };
        for value in branch {
            self.assignment[i] = Some(value);
            if value {
                for c in 0..self.cons.len() {
                    self.lhs[c] += self.cons[c].coefs[i];
                }
            }
            let child_obj = if value { cur_obj + self.obj[i] } else { cur_obj };
            self.dfs(k + 1, child_obj);
            if value {
                for c in 0..self.cons.len() {
                    self.lhs[c] -= self.cons[c].coefs[i];
                }
            }
            self.assignment[i] = None;
            if self.aborted() {
                return;
            }
        }
    }

    fn status(&self) -> SolverStatus {
        if self.aborted() {
            if self.best.is_some() {
                SolverStatus::Feasible
            } else if self.hit_time_limit {
                SolverStatus::Timeout
            } else {
                SolverStatus::Unknown
            }
        } else if self.best.is_some() {
            SolverStatus::Optimal
        } else {
            SolverStatus::Infeasible
        }
    }
}

fn dense_terms(terms: &[(String, f64)], index: &HashMap<&str, usize>, n: usize) -> Vec<f64> {
    let mut coefs = vec![0.0; n];
    for (name, a) in terms {
        coefs[index[name.as_str()]] += a;
    }
    coefs
}
