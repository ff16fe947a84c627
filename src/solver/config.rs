use crate::solver::constants::{EPSILON, TARGET};

/// How the search space is walked.
///
/// Both strategies report the same solution for the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Walk every candidate in order on the calling thread
    #[default]
    Sequential,
    /// Spread arrangements over the rayon pool, keeping the earliest match
    Parallel,
}

/// Configuration for the solver
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub target: f64,
    pub epsilon: f64,
    pub strategy: SearchStrategy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target: TARGET,
            epsilon: EPSILON,
            strategy: SearchStrategy::default(),
        }
    }
}
