//! Statement execution.
//!
//! An [`Interpreter`] owns one [`Environment`] and one print handler. It
//! runs statements in order and stops at the first runtime error; bindings
//! made before the error are kept, so a REPL can reuse the interpreter.

mod builder;

pub use builder::InterpreterBuilder;

use lox_ir::{Expr, Stmt, StmtKind};
use tracing::trace;

use crate::errors::output_failed;
use crate::{evaluate, Environment, EvalError, EvalResult, SharedPrintHandler, Value};

pub struct Interpreter {
    env: Environment,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// An interpreter with an empty environment, printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Run `statements` in order, stopping at the first error.
    #[tracing::instrument(level = "debug", skip_all, fields(count = statements.len()))]
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), EvalError> {
        for stmt in statements {
            self.execute(stmt)?;
        }
        self.print_handler.flush().map_err(|e| output_failed(&e))
    }

    fn execute(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        trace!(position = %stmt.position, kind = stmt.kind.name(), "execute");
        match &stmt.kind {
            StmtKind::Expression(expr) => {
                evaluate(expr, &self.env)?;
            }
            StmtKind::Print(expr) => {
                let value = evaluate(expr, &self.env)?;
                self.print_handler
                    .println(&value.to_string())
                    .map_err(|e| output_failed(&e).with_position(stmt.position))?;
            }
            StmtKind::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => evaluate(expr, &self.env)?,
                    None => Value::Nil,
                };
                self.env.define(name.clone(), value);
            }
        }
        Ok(())
    }

    /// Evaluate a single expression against this interpreter's environment.
    pub fn evaluate(&self, expr: &Expr) -> EvalResult {
        evaluate(expr, &self.env)
    }

    /// The current bindings.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
