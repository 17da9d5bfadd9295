//! Runtime errors.
//!
//! Every failure the evaluator can report is an [`EvalErrorKind`] variant.
//! Construct errors through the factory functions (`undefined_variable`,
//! `division_by_zero`, ...) so messages stay in one place. The evaluator
//! attaches the position of the failing expression afterwards.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{BinaryOp, Position, UnaryOp};
use thiserror::Error;

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Structured runtime error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },

    /// Operand types don't fit the operator.
    #[error("operands of `{op}` must be {expected}, found {left} and {right}")]
    BinaryTypeMismatch {
        op: BinaryOp,
        expected: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("operand of `{op}` must be a number, found {found}")]
    InvalidUnaryOperand { op: UnaryOp, found: &'static str },

    #[error("division by zero")]
    DivisionByZero,

    /// A tree node the evaluator does not execute.
    #[error("{feature} is not supported")]
    Unsupported { feature: &'static str },

    /// The print handler failed to write.
    #[error("failed to write output: {message}")]
    Output { message: String },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E6001,
            EvalErrorKind::BinaryTypeMismatch { .. } => ErrorCode::E6002,
            EvalErrorKind::InvalidUnaryOperand { .. } => ErrorCode::E6003,
            EvalErrorKind::DivisionByZero => ErrorCode::E6004,
            EvalErrorKind::Unsupported { .. } => ErrorCode::E6005,
            EvalErrorKind::Output { .. } => ErrorCode::E6006,
        }
    }
}

/// A runtime error, optionally located in source.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Position of the innermost expression that failed.
    pub position: Option<Position>,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            position: None,
        }
    }

    /// Attach `position` unless a more specific one is already set.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position.get_or_insert(position);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code(), self.kind.to_string());
        match self.position {
            Some(position) => diagnostic.at(position),
            None => diagnostic,
        }
    }
}

// Factories

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_owned(),
    })
}

/// Type mismatch in a binary operation.
#[cold]
pub fn binary_type_mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    let expected = match op {
        BinaryOp::Add => "two numbers or two strings",
        _ => "numbers",
    };
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch {
        op,
        expected,
        left: left.type_name(),
        right: right.type_name(),
    })
}

#[cold]
pub fn invalid_unary_operand(op: UnaryOp, operand: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidUnaryOperand {
        op,
        found: operand.type_name(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn unsupported(feature: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Unsupported { feature })
}

#[cold]
pub fn output_failed(error: &std::io::Error) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Output {
        message: error.to_string(),
    })
}

#[cfg(test)]
mod tests;
