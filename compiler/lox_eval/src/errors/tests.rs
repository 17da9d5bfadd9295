use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages() {
    assert_eq!(undefined_variable("y").to_string(), "undefined variable `y`");
    assert_eq!(
        binary_type_mismatch(BinaryOp::Add, &Value::from("hello"), &Value::Number(3.0))
            .to_string(),
        "operands of `+` must be two numbers or two strings, found string and number"
    );
    assert_eq!(
        binary_type_mismatch(BinaryOp::Lt, &Value::Nil, &Value::Bool(true)).to_string(),
        "operands of `<` must be numbers, found nil and bool"
    );
    assert_eq!(
        invalid_unary_operand(UnaryOp::Neg, &Value::from("x")).to_string(),
        "operand of `-` must be a number, found string"
    );
    assert_eq!(division_by_zero().to_string(), "division by zero");
    assert_eq!(
        unsupported("assignment").to_string(),
        "assignment is not supported"
    );
}

#[test]
fn codes() {
    assert_eq!(undefined_variable("y").code(), ErrorCode::E6001);
    assert_eq!(
        binary_type_mismatch(BinaryOp::Sub, &Value::Nil, &Value::Nil).code(),
        ErrorCode::E6002
    );
    assert_eq!(
        invalid_unary_operand(UnaryOp::Neg, &Value::Nil).code(),
        ErrorCode::E6003
    );
    assert_eq!(division_by_zero().code(), ErrorCode::E6004);
    assert_eq!(unsupported("assignment").code(), ErrorCode::E6005);
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    assert_eq!(output_failed(&io).code(), ErrorCode::E6006);
}

#[test]
fn with_position_keeps_innermost() {
    let inner = Position::new(6, 1, 7);
    let outer = Position::new(0, 1, 1);
    let error = division_by_zero().with_position(inner).with_position(outer);
    assert_eq!(error.position, Some(inner));
}

#[test]
fn diagnostic_rendering() {
    let error = undefined_variable("y").with_position(Position::new(6, 1, 7));
    assert_eq!(
        error.to_diagnostic().to_string(),
        "error[E6001]: undefined variable `y` at 1:7"
    );
    assert_eq!(
        division_by_zero().to_diagnostic().to_string(),
        "error[E6004]: division by zero"
    );
}
