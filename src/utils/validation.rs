use log::{debug, warn};

use crate::expression::Operand;
use crate::utils::errors::UtilsError;

pub const OPERAND_COUNT: usize = 4;

/// # Errors
///
/// Returns an error if the value is not finite, has a fractional part, or lies
/// outside `[Operand::MIN, Operand::MAX]`.
pub fn validate_operand(value: f64) -> Result<Operand, UtilsError> {
    if !value.is_finite() || value.fract() != 0.0 {
        warn!("Operand is not a whole number: {}", value);
        return Err(UtilsError::NotAnInteger(value.to_string()));
    }

    let out_of_range = UtilsError::OutOfRange {
        value,
        min: Operand::MIN,
        max: Operand::MAX,
    };

    if value < f64::from(Operand::MIN) || value > f64::from(Operand::MAX) {
        warn!("Operand {} is out of range", value);
        return Err(out_of_range);
    }

    Operand::new(value as u8).ok_or(out_of_range)
}

/// # Errors
///
/// Returns an error unless `numbers` holds exactly four whole numbers, each in
/// `[Operand::MIN, Operand::MAX]`. The count is checked before any value.
pub fn validate_operands(numbers: &[f64]) -> Result<[Operand; 4], UtilsError> {
    debug!("Validating operands: {:?}", numbers);

    let [a, b, c, d] = numbers else {
        warn!("Expected {} operands, got {}", OPERAND_COUNT, numbers.len());
        return Err(UtilsError::WrongOperandCount {
            expected: OPERAND_COUNT,
            found: numbers.len(),
        });
    };

    let operands = [
        validate_operand(*a)?,
        validate_operand(*b)?,
        validate_operand(*c)?,
        validate_operand(*d)?,
    ];

    debug!("Operand validation successful");
    Ok(operands)
}
