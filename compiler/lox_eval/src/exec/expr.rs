//! Evaluating expression nodes.

use lox_ir::{Expr, ExprKind};
use lox_stack::ensure_sufficient_stack;

use crate::errors::{undefined_variable, unsupported};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::{Environment, EvalResult, Value};

/// Evaluate `expr` against `env`.
///
/// Reads the environment but never changes it. Operands are evaluated left
/// to right before the operator is applied. Errors carry the position of the
/// innermost failing expression.
pub fn evaluate(expr: &Expr, env: &Environment) -> EvalResult {
    ensure_sufficient_stack(|| eval_inner(expr, env))
        .map_err(|error| error.with_position(expr.position))
}

fn eval_inner(expr: &Expr, env: &Environment) -> EvalResult {
    match &expr.kind {
        ExprKind::Bool(b) => Ok(Value::Bool(*b)),
        ExprKind::Nil => Ok(Value::Nil),
        ExprKind::Number(n) => Ok(Value::Number(*n)),
        ExprKind::Str(s) => Ok(Value::Str(s.clone())),
        ExprKind::Variable(name) => env
            .lookup(name)
            .cloned()
            .ok_or_else(|| undefined_variable(name)),
        ExprKind::Grouping(inner) => evaluate(inner, env),
        ExprKind::Unary { op, operand } => {
            let operand = evaluate(operand, env)?;
            evaluate_unary(operand, *op)
        }
        ExprKind::Binary { op, left, right } => {
            let left = evaluate(left, env)?;
            let right = evaluate(right, env)?;
            evaluate_binary(left, right, *op)
        }
        ExprKind::Assign { .. } => Err(unsupported("assignment")),
    }
}
