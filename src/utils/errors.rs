use thiserror::Error;

/// Errors raised while validating the operands handed to the solver
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Expected {expected} operands, found {found}")]
    WrongOperandCount { expected: usize, found: usize },
    #[error("Operand cannot be empty")]
    EmptyOperand,
    #[error("Operand must be a whole number: {0}")]
    NotAnInteger(String),
    #[error("Operand {value} is outside the range {min}..={max}")]
    OutOfRange { value: f64, min: u8, max: u8 },
}
