use crate::expression::Operator;
use crate::iterator::constants::OPERATOR_TRIPLE_COUNT;

/// Yields every `[op1, op2, op3]` assignment, repetition allowed.
///
/// `op1` varies slowest and `op3` fastest, each following [`Operator::ALL`].
#[derive(Debug, Clone, Default)]
pub struct OperatorTriples {
    position: usize,
}

impl OperatorTriples {
    pub fn new() -> Self {
        Self { position: 0 }
    }

    fn decode(position: usize) -> Option<[Operator; 3]> {
        let base = Operator::ALL.len();
        Some([
            Operator::from_index(position / (base * base))?,
            Operator::from_index((position / base) % base)?,
            Operator::from_index(position % base)?,
        ])
    }
}

impl Iterator for OperatorTriples {
    type Item = [Operator; 3];

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= OPERATOR_TRIPLE_COUNT {
            return None;
        }

        let triple = Self::decode(self.position)?;
        self.position += 1;
        Some(triple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = OPERATOR_TRIPLE_COUNT.saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OperatorTriples {}
