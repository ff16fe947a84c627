/// A single input number, validated to lie in `[Operand::MIN, Operand::MAX]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Operand(u8);

impl Operand {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Create an operand from a value, or `None` if it is out of range
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

/// The four binary operators available to an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// All operators, in enumeration order
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Operator::Add => 0,
            Operator::Sub => 1,
            Operator::Mul => 2,
            Operator::Div => 3,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

/// Bracketing of four leaves `a b c d` joined by operators `op1 op2 op3`.
///
/// The leaves always appear left to right. `op1` is the leftmost operator
/// slot and `op3` the rightmost, in every shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `((a op1 b) op2 c) op3 d`
    LeftChain,
    /// `(a op1 b) op2 (c op3 d)`
    Balanced,
    /// `(a op1 (b op2 c)) op3 d`
    LeftNested,
    /// `a op1 ((b op2 c) op3 d)`
    RightNested,
    /// `a op1 (b op2 (c op3 d))`
    RightChain,
}

impl Shape {
    /// All shapes, in enumeration order
    pub const ALL: [Shape; 5] = [
        Shape::LeftChain,
        Shape::Balanced,
        Shape::LeftNested,
        Shape::RightNested,
        Shape::RightChain,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Shape::LeftChain => 0,
            Shape::Balanced => 1,
            Shape::LeftNested => 2,
            Shape::RightNested => 3,
            Shape::RightChain => 4,
        }
    }
}

/// One full expression instance: an arrangement of the operands, an operator
/// in each of the three slots, and a bracketing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    arrangement: [Operand; 4],
    operators: [Operator; 3],
    shape: Shape,
}

impl Candidate {
    pub fn new(arrangement: [Operand; 4], operators: [Operator; 3], shape: Shape) -> Self {
        Self {
            arrangement,
            operators,
            shape,
        }
    }

    pub fn arrangement(&self) -> [Operand; 4] {
        self.arrangement
    }

    pub fn operators(&self) -> [Operator; 3] {
        self.operators
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }
}
