use log::{debug, warn};

use crate::expression::Operand;
use crate::utils::errors::UtilsError;
use crate::utils::validation::{OPERAND_COUNT, validate_operand};

/// Parse one raw text field into an operand.
///
/// Surrounding whitespace is ignored and any whole-number spelling is
/// accepted, so `"4"`, `" 4 "` and `"4.0"` all give the operand 4.
///
/// # Errors
///
/// Returns an error if the text is blank, is not a number, is not a whole
/// number, or lies outside `[Operand::MIN, Operand::MAX]`.
pub fn parse_operand(raw: &str) -> Result<Operand, UtilsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        debug!("Rejecting blank operand");
        return Err(UtilsError::EmptyOperand);
    }

    let value = trimmed.parse::<f64>().map_err(|_| {
        warn!("Operand is not a number: '{}'", trimmed);
        UtilsError::NotAnInteger(trimmed.to_string())
    })?;

    validate_operand(value)
}

/// Parse a set of raw text fields into the four operands.
///
/// Blank fields are skipped before counting, so four filled fields among any
/// number of blank ones are accepted.
///
/// # Errors
///
/// Returns an error unless exactly four non-blank fields remain and each
/// parses with [`parse_operand`].
pub fn parse_operands<S: AsRef<str>>(raw: &[S]) -> Result<[Operand; 4], UtilsError> {
    let filled: Vec<&str> = raw
        .iter()
        .map(|field| field.as_ref())
        .filter(|field| !field.trim().is_empty())
        .collect();

    let [a, b, c, d] = filled.as_slice() else {
        warn!("Expected {} operands, got {}", OPERAND_COUNT, filled.len());
        return Err(UtilsError::WrongOperandCount {
            expected: OPERAND_COUNT,
            found: filled.len(),
        });
    };

    Ok([
        parse_operand(a)?,
        parse_operand(b)?,
        parse_operand(c)?,
        parse_operand(d)?,
    ])
}
