//! Lazy enumerations of the search space

pub mod candidates;
pub mod constants;
pub mod operators;
pub mod permutations;

pub use candidates::{arrangements, candidates, candidates_for_arrangement, shapes};
pub use operators::OperatorTriples;
pub use permutations::Permutations;
