use crate::expression::{Candidate, ExpressionError, Operand, Operator, Shape};

fn operands(values: [u8; 4]) -> [Operand; 4] {
    values.map(|v| Operand::new(v).unwrap_or_else(|| panic!("{} is not a valid operand", v)))
}

fn candidate(values: [u8; 4], operators: [Operator; 3], shape: Shape) -> Candidate {
    Candidate::new(operands(values), operators, shape)
}

#[test]
fn test_operand_range() {
    assert!(Operand::new(0).is_none());
    assert!(Operand::new(1).is_some());
    assert!(Operand::new(10).is_some());
    assert!(Operand::new(11).is_none());
    assert_eq!(Operand::new(7).map(Operand::value), Some(7));
    assert_eq!(Operand::new(7).map(Operand::as_f64), Some(7.0));
}

#[test]
fn test_operator_apply() {
    assert_eq!(Operator::Add.apply(3.0, 4.0), Ok(7.0));
    assert_eq!(Operator::Sub.apply(3.0, 4.0), Ok(-1.0));
    assert_eq!(Operator::Mul.apply(3.0, 4.0), Ok(12.0));
    assert_eq!(Operator::Div.apply(3.0, 4.0), Ok(0.75));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        Operator::Div.apply(5.0, 0.0),
        Err(ExpressionError::DivisionByZero)
    );
    assert_eq!(
        Operator::Div.apply(0.0, 0.0),
        Err(ExpressionError::DivisionByZero)
    );
    assert_eq!(Operator::Div.apply(0.0, 5.0), Ok(0.0));
}

#[test]
fn test_operator_tables() {
    let symbols: String = Operator::ALL.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols, "+-*/");

    for (i, op) in Operator::ALL.iter().enumerate() {
        assert_eq!(op.index(), i);
        assert_eq!(Operator::from_index(i), Some(*op));
    }
    assert_eq!(Operator::from_index(4), None);
}

#[test]
fn test_shape_tables() {
    assert_eq!(Shape::ALL.len(), 5);
    for (i, shape) in Shape::ALL.iter().enumerate() {
        assert_eq!(shape.index(), i);
        assert_eq!(Shape::from_index(i), Some(*shape));
    }
    assert_eq!(Shape::from_index(5), None);
}

#[test]
fn test_shape_bracketing() {
    let values = [8.0, 4.0, 2.0, 1.0];
    let ops = [Operator::Sub, Operator::Div, Operator::Mul];

    // ((8 - 4) / 2) * 1
    assert_eq!(Shape::LeftChain.evaluate(values, ops), Ok(2.0));
    // (8 - 4) / (2 * 1)
    assert_eq!(Shape::Balanced.evaluate(values, ops), Ok(2.0));
    // (8 - (4 / 2)) * 1
    assert_eq!(Shape::LeftNested.evaluate(values, ops), Ok(6.0));
    // 8 - ((4 / 2) * 1)
    assert_eq!(Shape::RightNested.evaluate(values, ops), Ok(6.0));
    // 8 - (4 / (2 * 1))
    assert_eq!(Shape::RightChain.evaluate(values, ops), Ok(6.0));

    let values = [2.0, 3.0, 4.0, 5.0];
    let ops = [Operator::Sub, Operator::Sub, Operator::Sub];
    assert_eq!(Shape::LeftChain.evaluate(values, ops), Ok(-10.0));
    assert_eq!(Shape::Balanced.evaluate(values, ops), Ok(0.0));
    assert_eq!(Shape::LeftNested.evaluate(values, ops), Ok(-2.0));
    assert_eq!(Shape::RightNested.evaluate(values, ops), Ok(8.0));
    assert_eq!(Shape::RightChain.evaluate(values, ops), Ok(-2.0));
}

#[test]
fn test_division_by_zero_in_sub_step() {
    // (3 / (3 - 3)) + 1
    let expr = candidate(
        [3, 3, 3, 1],
        [Operator::Div, Operator::Sub, Operator::Add],
        Shape::LeftNested,
    );
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));

    // The same numbers under a shape that never divides by zero
    let expr = candidate(
        [3, 3, 3, 1],
        [Operator::Div, Operator::Sub, Operator::Add],
        Shape::LeftChain,
    );
    assert_eq!(expr.evaluate(), Ok(-1.0));
}

#[test]
fn test_candidate_evaluate() {
    let expr = candidate(
        [8, 3, 8, 3],
        [Operator::Div, Operator::Sub, Operator::Div],
        Shape::RightChain,
    );
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 24.0).abs() < 1e-9);
    }
}

#[test]
fn test_candidate_display() {
    let ops = [Operator::Add, Operator::Sub, Operator::Mul];
    let cases = [
        (Shape::LeftChain, "(((1 + 2) - 3) * 4)"),
        (Shape::Balanced, "((1 + 2) - (3 * 4))"),
        (Shape::LeftNested, "((1 + (2 - 3)) * 4)"),
        (Shape::RightNested, "(1 + ((2 - 3) * 4))"),
        (Shape::RightChain, "(1 + (2 - (3 * 4)))"),
    ];

    for (shape, expected) in cases {
        assert_eq!(candidate([1, 2, 3, 4], ops, shape).to_string(), expected);
    }
}

#[test]
fn test_candidate_display_uses_integer_form() {
    let expr = candidate(
        [10, 10, 4, 4],
        [Operator::Mul, Operator::Sub, Operator::Div],
        Shape::LeftChain,
    );
    assert_eq!(format!("{}", expr), "(((10 * 10) - 4) / 4)");
    assert!(!expr.to_string().contains('.'));
}

#[test]
fn test_shape_display() {
    assert_eq!(Shape::Balanced.to_string(), "(a op1 b) op2 (c op3 d)");
    assert_eq!(Operator::Div.to_string(), "/");
}
