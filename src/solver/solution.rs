use std::fmt;

use crate::expression::Candidate;

/// The accepted candidate of a search together with its value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    candidate: Candidate,
    value: f64,
}

impl Solution {
    pub(crate) fn new(candidate: Candidate, value: f64) -> Self {
        Self { candidate, value }
    }

    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// The fully parenthesized expression
    pub fn expression(&self) -> String {
        self.candidate.to_string()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.candidate)
    }
}
