pub mod config;
pub mod constants;
mod core;
mod errors;
mod solution;

pub use config::{SearchStrategy, SolverConfig};
pub use self::core::TwentyFourSolver;
pub use errors::SolverError;
pub use solution::Solution;
