//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch on the operand pair. The value set is closed,
//! so pattern matching covers every combination.

use lox_ir::BinaryOp;

use crate::errors::{binary_type_mismatch, division_by_zero};
use crate::{EvalResult, Value};

/// Apply `op` to two already-evaluated operands.
///
/// Equality never coerces. `+` adds numbers or concatenates strings; every
/// other operator needs two numbers.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => return Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => return Ok(Value::Bool(left != right)),
        _ => {}
    }

    match (left, right) {
        (Value::Number(a), Value::Number(b)) => eval_number_binary(a, b, op),
        (Value::Str(a), Value::Str(b)) if op == BinaryOp::Add => Ok(Value::Str(a + &b)),
        (left, right) => Err(binary_type_mismatch(op, &left, &right)),
    }
}

fn eval_number_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    let value = match op {
        BinaryOp::Add => Value::Number(a + b),
        BinaryOp::Sub => Value::Number(a - b),
        BinaryOp::Mul => Value::Number(a * b),
        BinaryOp::Div => {
            // Also catches -0.0.
            if b == 0.0 {
                return Err(division_by_zero());
            }
            Value::Number(a / b)
        }
        BinaryOp::Lt => Value::Bool(a < b),
        BinaryOp::LtEq => Value::Bool(a <= b),
        BinaryOp::Gt => Value::Bool(a > b),
        BinaryOp::GtEq => Value::Bool(a >= b),
        BinaryOp::Eq => Value::Bool(a == b),
        BinaryOp::NotEq => Value::Bool(a != b),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;
    use crate::EvalErrorKind;
    use pretty_assertions::assert_eq;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn s(text: &str) -> Value {
        Value::from(text)
    }

    #[test]
    fn arithmetic() {
        assert_eq!(evaluate_binary(num(2.0), num(1.0), BinaryOp::Add).unwrap(), num(3.0));
        assert_eq!(evaluate_binary(num(2.0), num(5.0), BinaryOp::Sub).unwrap(), num(-3.0));
        assert_eq!(evaluate_binary(num(2.5), num(4.0), BinaryOp::Mul).unwrap(), num(10.0));
        assert_eq!(evaluate_binary(num(1.0), num(4.0), BinaryOp::Div).unwrap(), num(0.25));
    }

    #[test]
    fn string_concatenation() {
        assert_eq!(evaluate_binary(s("a"), s("b"), BinaryOp::Add).unwrap(), s("ab"));
        assert_eq!(evaluate_binary(s(""), s(""), BinaryOp::Add).unwrap(), s(""));
    }

    #[test]
    fn mixed_add_is_type_error() {
        let err = evaluate_binary(s("hello"), num(3.0), BinaryOp::Add).unwrap_err();
        assert!(matches!(
            err.kind,
            EvalErrorKind::BinaryTypeMismatch {
                op: BinaryOp::Add,
                left: "string",
                right: "number",
                ..
            }
        ));
        assert!(evaluate_binary(num(3.0), s("hello"), BinaryOp::Add).is_err());
        assert!(evaluate_binary(Value::Nil, Value::Nil, BinaryOp::Add).is_err());
    }

    #[test]
    fn strings_only_support_add() {
        for op in [BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div, BinaryOp::Lt, BinaryOp::GtEq] {
            assert!(evaluate_binary(s("a"), s("b"), op).is_err(), "{op}");
        }
    }

    #[test]
    fn division_by_zero_after_type_check() {
        let err = evaluate_binary(num(0.0), num(0.0), BinaryOp::Div).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
        let err = evaluate_binary(num(1.0), num(-0.0), BinaryOp::Div).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
        // Type mismatch is reported before the zero check.
        let err = evaluate_binary(s("x"), num(0.0), BinaryOp::Div).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::BinaryTypeMismatch { .. }));
    }

    #[test]
    fn comparison() {
        assert_eq!(evaluate_binary(num(1.0), num(2.0), BinaryOp::Lt).unwrap(), Value::Bool(true));
        assert_eq!(evaluate_binary(num(2.0), num(2.0), BinaryOp::LtEq).unwrap(), Value::Bool(true));
        assert_eq!(evaluate_binary(num(1.0), num(2.0), BinaryOp::Gt).unwrap(), Value::Bool(false));
        assert_eq!(evaluate_binary(num(3.0), num(2.0), BinaryOp::GtEq).unwrap(), Value::Bool(true));
        assert!(evaluate_binary(Value::Bool(true), num(2.0), BinaryOp::Lt).is_err());
    }

    #[test]
    fn equality_never_coerces() {
        assert_eq!(evaluate_binary(num(1.0), s("1"), BinaryOp::Eq).unwrap(), Value::Bool(false));
        assert_eq!(evaluate_binary(num(1.0), num(1.0), BinaryOp::Eq).unwrap(), Value::Bool(true));
        assert_eq!(evaluate_binary(Value::Nil, Value::Nil, BinaryOp::Eq).unwrap(), Value::Bool(true));
        assert_eq!(
            evaluate_binary(Value::Nil, Value::Bool(false), BinaryOp::NotEq).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(evaluate_binary(s("a"), s("a"), BinaryOp::Eq).unwrap(), Value::Bool(true));
        assert_eq!(
            evaluate_binary(num(f64::NAN), num(f64::NAN), BinaryOp::Eq).unwrap(),
            Value::Bool(false)
        );
    }
}
