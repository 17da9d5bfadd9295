//! Tree-walking evaluator for Lox.
//!
//! Runs parsed statements against a flat [`Environment`], writing `print`
//! output through a [`SharedPrintHandler`].
//!
//! # Architecture
//!
//! - [`evaluate`]: expression evaluation, pure with respect to the tree
//! - [`Interpreter`]: statement execution, owns the environment
//! - [`operators`] / [`unary_operators`]: value-level operator semantics
//! - [`PrintHandlerImpl`]: where `print` output goes (stdout, buffer, nowhere)

mod environment;
mod errors;
mod exec;
mod interpreter;
pub mod operators;
mod print_handler;
pub mod unary_operators;
mod value;

#[cfg(test)]
mod tests;

pub use environment::Environment;
pub use errors::{
    binary_type_mismatch, division_by_zero, invalid_unary_operand, output_failed,
    undefined_variable, unsupported, EvalError, EvalErrorKind, EvalResult,
};
pub use exec::evaluate;
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::Value;
