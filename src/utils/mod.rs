//! Input validation and parsing

mod errors;
mod parsing;
mod validation;

pub use errors::UtilsError;
pub use parsing::{parse_operand, parse_operands};
pub use validation::{OPERAND_COUNT, validate_operand, validate_operands};
