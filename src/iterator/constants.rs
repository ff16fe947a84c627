// Sizes of the fixed enumerations over four operands
pub const ARRANGEMENT_COUNT: usize = 24;
pub const OPERATOR_TRIPLE_COUNT: usize = 64;
pub const SHAPE_COUNT: usize = 5;
pub const CANDIDATE_COUNT: usize = ARRANGEMENT_COUNT * OPERATOR_TRIPLE_COUNT * SHAPE_COUNT;
