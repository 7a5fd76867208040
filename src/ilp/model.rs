//! ILP model definition.

use super::variables::BoolVar;
use std::collections::HashSet;

/// Comparison operator of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    /// `Σ aᵢxᵢ ≤ b`
    Le,
    /// `Σ aᵢxᵢ ≥ b`
    Ge,
    /// `Σ aᵢxᵢ = b`
    Eq,
}

/// A linear constraint over boolean variables.
///
/// Coefficients are integers; fractional inputs are scaled to an
/// integer unit before modeling so that both sides of the comparison
/// live in the same domain.
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    /// (variable name, coefficient) pairs.
    pub terms: Vec<(String, i64)>,
    /// Comparison operator.
    pub op: CmpOp,
    /// Right-hand side.
    pub rhs: i64,
}

/// Objective function for the ILP model.
#[derive(Debug, Clone)]
pub enum Objective {
    /// Minimize a linear combination of boolean variables.
    Minimize {
        /// (variable name, coefficient) pairs.
        terms: Vec<(String, f64)>,
    },

    /// Maximize a linear combination of boolean variables.
    Maximize {
        /// (variable name, coefficient) pairs.
        terms: Vec<(String, f64)>,
    },
}

/// A 0/1 integer linear program.
///
/// Contains variables, constraints, and an optional objective function.
/// Variables keep insertion order, which solvers use for deterministic
/// tie-breaking.
///
/// # Examples
///
/// ```
/// use lineup_select::ilp::{BoolVar, CmpOp, IlpModel, Objective};
///
/// let mut model = IlpModel::new("example");
/// model.add_bool_var(BoolVar::new("a"));
/// model.add_bool_var(BoolVar::new("b"));
/// model.add_le(vec![("a".into(), 3), ("b".into(), 5)], 6);
/// model.set_objective(Objective::Maximize {
///     terms: vec![("a".into(), 1.0), ("b".into(), 2.0)],
/// });
/// assert!(model.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct IlpModel {
    /// Model name.
    pub name: String,
    /// Boolean variables in insertion order.
    pub bool_vars: Vec<BoolVar>,
    /// Constraints.
    pub constraints: Vec<LinearConstraint>,
    /// Objective function.
    pub objective: Option<Objective>,
}

impl IlpModel {
    /// Creates a new empty model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bool_vars: Vec::new(),
            constraints: Vec::new(),
            objective: None,
        }
    }

    /// Adds a boolean variable.
    pub fn add_bool_var(&mut self, var: BoolVar) {
        self.bool_vars.push(var);
    }

    /// Adds a constraint.
    pub fn add_constraint(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    /// Convenience: add a `Σ aᵢxᵢ ≤ rhs` constraint.
    pub fn add_le(&mut self, terms: Vec<(String, i64)>, rhs: i64) {
        self.constraints.push(LinearConstraint {
            terms,
            op: CmpOp::Le,
            rhs,
        });
    }

    /// Convenience: add a `Σ aᵢxᵢ ≥ rhs` constraint.
    pub fn add_ge(&mut self, terms: Vec<(String, i64)>, rhs: i64) {
        self.constraints.push(LinearConstraint {
            terms,
            op: CmpOp::Ge,
            rhs,
        });
    }

    /// Convenience: add a `Σ aᵢxᵢ = rhs` constraint.
    pub fn add_eq(&mut self, terms: Vec<(String, i64)>, rhs: i64) {
        self.constraints.push(LinearConstraint {
            terms,
            op: CmpOp::Eq,
            rhs,
        });
    }

    /// Sets the objective function.
    pub fn set_objective(&mut self, objective: Objective) {
        self.objective = Some(objective);
    }

    /// Validates the model for consistency.
    ///
    /// Checks that variable names are unique and that every name
    /// referenced by a constraint or the objective is defined.
    pub fn validate(&self) -> Result<(), String> {
        let mut names: HashSet<&str> = HashSet::new();
        for var in &self.bool_vars {
            if !names.insert(var.name.as_str()) {
                return Err(format!("duplicate variable: {}", var.name));
            }
        }
        for constraint in &self.constraints {
            for (name, _) in &constraint.terms {
                if !names.contains(name.as_str()) {
                    return Err(format!("undefined variable: {name}"));
                }
            }
        }
        if let Some(objective) = &self.objective {
            let terms = match objective {
                Objective::Minimize { terms } | Objective::Maximize { terms } => terms,
            };
            for (name, _) in terms {
                if !names.contains(name.as_str()) {
                    return Err(format!("undefined variable: {name}"));
                }
            }
        }
        Ok(())
    }

    /// Returns the number of boolean variables.
    pub fn var_count(&self) -> usize {
        self.bool_vars.len()
    }

    /// Returns the number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}
