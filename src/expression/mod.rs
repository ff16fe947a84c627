//! Operands, operators, shapes and the candidates built from them

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{Candidate, Operand, Operator, Shape};
pub use errors::ExpressionError;

#[cfg(test)]
mod tests;
