use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{Candidate, Operand};
use crate::iterator::{arrangements, candidates, candidates_for_arrangement};
use crate::solver::config::{SearchStrategy, SolverConfig};
use crate::solver::errors::SolverError;
use crate::solver::solution::Solution;
use crate::utils::validate_operands;

/// Main solver for finding an expression over four operands that hits the target
#[derive(Debug, Clone, Default)]
pub struct TwentyFourSolver {
    config: SolverConfig,
}

impl TwentyFourSolver {
    /// Create a solver targeting 24
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validate raw numbers, then search.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidInput`] unless `numbers` holds exactly four
    /// whole numbers in `[1, 10]`. Nothing is searched in that case.
    pub fn solve(&self, numbers: &[f64]) -> Result<Option<Solution>, SolverError> {
        let operands = validate_operands(numbers)?;
        Ok(self.find_solution(operands))
    }

    /// Find the first candidate, in search order, whose value matches the target
    pub fn find_solution(&self, operands: [Operand; 4]) -> Option<Solution> {
        info!(
            "Searching {:?} for {} ({:?})",
            operands.map(Operand::value),
            self.config.target,
            self.config.strategy
        );

        let found = match self.config.strategy {
            SearchStrategy::Sequential => candidates(operands).find_map(|c| self.accept(c)),
            SearchStrategy::Parallel => arrangements(operands)
                .collect::<Vec<_>>()
                .into_par_iter()
                .find_map_first(|arrangement| {
                    candidates_for_arrangement(arrangement).find_map(|c| self.accept(c))
                }),
        };

        match &found {
            Some(solution) => info!("Found {} = {}", solution, solution.value()),
            None => info!("No expression reaches {}", self.config.target),
        }

        found
    }

    /// Whether a value counts as hitting the target
    pub fn is_match(&self, value: f64) -> bool {
        value.is_finite() && (value - self.config.target).abs() < self.config.epsilon
    }

    fn accept(&self, candidate: Candidate) -> Option<Solution> {
        match candidate.evaluate() {
            Ok(value) if self.is_match(value) => Some(Solution::new(candidate, value)),
            Ok(_) => None,
            Err(e) => {
                debug!("Skipping {}: {}", candidate, e);
                None
            }
        }
    }
}
