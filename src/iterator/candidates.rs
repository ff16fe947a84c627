use crate::expression::{Candidate, Operand, Shape};
use crate::iterator::operators::OperatorTriples;
use crate::iterator::permutations::Permutations;

/// All five shapes in index order
pub fn shapes() -> impl Iterator<Item = Shape> + Clone {
    Shape::ALL.into_iter()
}

/// All arrangements of the four operands
pub fn arrangements(operands: [Operand; 4]) -> Permutations<Operand, 4> {
    Permutations::new(operands)
}

/// Every candidate sharing one arrangement: operator triples outer, shapes inner
pub fn candidates_for_arrangement(arrangement: [Operand; 4]) -> impl Iterator<Item = Candidate> {
    OperatorTriples::new().flat_map(move |operators| {
        shapes().map(move |shape| Candidate::new(arrangement, operators, shape))
    })
}

/// The full search space in search order: arrangement, then operator triple, then shape
pub fn candidates(operands: [Operand; 4]) -> impl Iterator<Item = Candidate> {
    arrangements(operands).flat_map(candidates_for_arrangement)
}
