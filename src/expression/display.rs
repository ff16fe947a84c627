use std::fmt;

use crate::expression::ast::{Candidate, Operand, Operator, Shape};

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let template = match self {
            Shape::LeftChain => "((a op1 b) op2 c) op3 d",
            Shape::Balanced => "(a op1 b) op2 (c op3 d)",
            Shape::LeftNested => "(a op1 (b op2 c)) op3 d",
            Shape::RightNested => "a op1 ((b op2 c) op3 d)",
            Shape::RightChain => "a op1 (b op2 (c op3 d))",
        };
        write!(f, "{}", template)
    }
}

/// Fully parenthesized infix form, outermost pair included
impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.arrangement();
        let [s1, s2, s3] = self.operators();

        match self.shape() {
            Shape::LeftChain => write!(f, "((({a} {s1} {b}) {s2} {c}) {s3} {d})"),
            Shape::Balanced => write!(f, "(({a} {s1} {b}) {s2} ({c} {s3} {d}))"),
            Shape::LeftNested => write!(f, "(({a} {s1} ({b} {s2} {c})) {s3} {d})"),
            Shape::RightNested => write!(f, "({a} {s1} (({b} {s2} {c}) {s3} {d}))"),
            Shape::RightChain => write!(f, "({a} {s1} ({b} {s2} ({c} {s3} {d})))"),
        }
    }
}
