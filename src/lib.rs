//! Twentyfour - find an arithmetic expression over four numbers that equals 24
//!
//! Each of four integers in `[1, 10]` is used exactly once, combined with
//! `+`, `-`, `*` and `/`. The search walks every arrangement of the numbers,
//! every operator assignment and every bracketing in a fixed order and stops
//! at the first expression within `1e-9` of 24.

pub mod expression;
pub mod iterator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Candidate, ExpressionError, Operand, Operator, Shape};
pub use solver::{SearchStrategy, Solution, SolverConfig, SolverError, TwentyFourSolver};
pub use utils::{UtilsError, parse_operands, validate_operands};

/// Returned by [`compute24`] when no expression is produced
pub const NO_SOLUTION: &str = "-1";

/// Find an expression over `numbers` that evaluates to 24
///
/// # Returns
///
/// * `Ok(Some(Solution))` - If a matching expression is found
/// * `Ok(None)` - If no arrangement, operator assignment and bracketing reaches 24
/// * `Err(SolverError)` - If the input is not exactly four whole numbers in `[1, 10]`
///
/// # Errors
///
/// This function will return an error if:
/// * `numbers` does not hold exactly four values
/// * A value has a fractional part or is not finite
/// * A value lies outside `[1, 10]`
///
/// # Examples
///
/// ```
/// use twentyfour::solve;
///
/// match solve(&[3.0, 3.0, 8.0, 8.0]) {
///     Ok(Some(solution)) => assert_eq!(solution.to_string(), "(8 / (3 - (8 / 3)))"),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(numbers: &[f64]) -> Result<Option<Solution>, SolverError> {
    TwentyFourSolver::new().solve(numbers)
}

/// Find an expression over `numbers` that evaluates to 24, as a plain string
///
/// Invalid input and an exhausted search both produce [`NO_SOLUTION`].
/// Use [`solve`] to tell them apart.
///
/// ```
/// use twentyfour::{NO_SOLUTION, compute24};
///
/// assert_eq!(compute24(&[4.0, 1.0, 8.0, 7.0]), "((4 * (1 + 7)) - 8)");
/// assert_eq!(compute24(&[1.0, 1.0, 1.0, 1.0]), NO_SOLUTION);
/// assert_eq!(compute24(&[1.0, 2.0, 3.0]), NO_SOLUTION);
/// ```
pub fn compute24(numbers: &[f64]) -> String {
    match solve(numbers) {
        Ok(Some(solution)) => solution.expression(),
        Ok(None) | Err(_) => NO_SOLUTION.to_string(),
    }
}
