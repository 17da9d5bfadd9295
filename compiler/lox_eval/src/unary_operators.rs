//! Unary operator implementations for the evaluator.

use lox_ir::UnaryOp;

use crate::errors::invalid_unary_operand;
use crate::{EvalResult, Value};

/// Apply `op` to an already-evaluated operand.
///
/// `!` works on any value via truthiness; `-` needs a number.
pub fn evaluate_unary(operand: Value, op: UnaryOp) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Not, value) => Ok(Value::Bool(!value.is_truthy())),
        (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOp::Neg, value) => Err(invalid_unary_operand(op, &value)),
    }
}
