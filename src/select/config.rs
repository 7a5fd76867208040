//! Selection request configuration.

/// Optimization direction for the value objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Maximize aggregate value.
    #[default]
    Maximize,
    /// Minimize aggregate value.
    Minimize,
}

/// How locked candidates are folded into the optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LockMode {
    /// Remove locked candidates from the pool, accumulate their weight
    /// and value directly, and hand the solver the reduced limits.
    #[default]
    PreSubtract,

    /// Keep locked candidates in the pool and pin their decision
    /// variable to 1 with an equality constraint; limits stay at their
    /// original values and the constraint sums include the locked
    /// candidates.
    ForceInclude,
}

/// Configuration for one selection run.
///
/// Immutable for the duration of one solve. Defaults mirror a
/// ten-pick, 30-point ranking budget with two decimal digits of weight
/// precision.
///
/// # Examples
///
/// ```
/// use lineup_select::select::{Direction, LockMode, SelectionConfig};
///
/// let config = SelectionConfig::default()
///     .with_budget_limit(30.0)
///     .with_count_limit(10)
///     .with_lock_mode(LockMode::PreSubtract)
///     .with_direction(Direction::Maximize);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionConfig {
    /// Maximum cumulative weight across the selected subset.
    pub budget_limit: f64,

    /// Maximum number of selected candidates.
    pub count_limit: usize,

    /// Optional minimum number of selected candidates. Disabled by
    /// default.
    pub min_count: Option<usize>,

    /// Optimization direction.
    pub direction: Direction,

    /// Locking strategy.
    pub lock_mode: LockMode,

    /// Integer scaling factor applied uniformly to candidate weights,
    /// the budget limit, and locked-weight accumulation, so every
    /// quantity in the budget constraint lives in the same integer
    /// unit. `100` preserves two decimal digits; `1` treats weights as
    /// coarse integers.
    pub weight_scale: u32,

    /// Solve-time budget in milliseconds. `0` disables the limit.
    pub time_limit_ms: i64,

    /// Search-node budget for the solver. `0` disables the limit.
    pub max_nodes: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            budget_limit: 30.0,
            count_limit: 10,
            min_count: None,
            direction: Direction::default(),
            lock_mode: LockMode::default(),
            weight_scale: 100,
            time_limit_ms: 60_000,
            max_nodes: 1_000_000,
        }
    }
}

impl SelectionConfig {
    pub fn with_budget_limit(mut self, budget: f64) -> Self {
        self.budget_limit = budget;
        self
    }

    pub fn with_count_limit(mut self, count: usize) -> Self {
        self.count_limit = count;
        self
    }

    pub fn with_min_count(mut self, min: usize) -> Self {
        self.min_count = Some(min);
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_lock_mode(mut self, mode: LockMode) -> Self {
        self.lock_mode = mode;
        self
    }

    pub fn with_weight_scale(mut self, scale: u32) -> Self {
        self.weight_scale = scale;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: i64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    pub fn with_max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = nodes;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.budget_limit.is_finite() || self.budget_limit < 0.0 {
            return Err(format!(
                "budget_limit must be finite and non-negative, got {}",
                self.budget_limit
            ));
        }
        if self.weight_scale == 0 {
            return Err("weight_scale must be at least 1".into());
        }
        if let Some(min) = self.min_count {
            if min > self.count_limit {
                return Err(format!(
                    "min_count {min} exceeds count_limit {}",
                    self.count_limit
                ));
            }
        }
        if self.time_limit_ms < 0 {
            return Err(format!(
                "time_limit_ms must be non-negative, got {}",
                self.time_limit_ms
            ));
        }
        Ok(())
    }
}
