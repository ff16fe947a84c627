use log::trace;

use crate::expression::ast::{Candidate, Operator, Shape};
use crate::expression::errors::ExpressionError;

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

impl Operator {
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] when dividing by zero.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, ExpressionError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            Operator::Div => {
                if is_zero(right) {
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl Shape {
    /// Combine `[a, b, c, d]` with `[op1, op2, op3]` following this bracketing.
    ///
    /// # Errors
    ///
    /// Returns an error if any sub-step divides by zero.
    pub fn evaluate(
        self,
        operands: [f64; 4],
        operators: [Operator; 3],
    ) -> Result<f64, ExpressionError> {
        let [a, b, c, d] = operands;
        let [op1, op2, op3] = operators;

        match self {
            Shape::LeftChain => op3.apply(op2.apply(op1.apply(a, b)?, c)?, d),
            Shape::Balanced => op2.apply(op1.apply(a, b)?, op3.apply(c, d)?),
            Shape::LeftNested => op3.apply(op1.apply(a, op2.apply(b, c)?)?, d),
            Shape::RightNested => op1.apply(a, op3.apply(op2.apply(b, c)?, d)?),
            Shape::RightChain => op1.apply(a, op2.apply(b, op3.apply(c, d)?)?),
        }
    }
}

impl Candidate {
    /// # Errors
    ///
    /// Returns an error if evaluation requires dividing by zero at any sub-step.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        let operands = self.arrangement().map(|operand| operand.as_f64());
        let result = self.shape().evaluate(operands, self.operators());

        match &result {
            Ok(value) => trace!("{} evaluated to {}", self, value),
            Err(e) => trace!("{} failed: {}", self, e),
        }

        result
    }
}
