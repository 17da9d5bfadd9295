//! Core diagnostic type.

use std::fmt;

use lox_ir::Position;

use crate::ErrorCode;

/// A rendered-on-demand error diagnostic.
///
/// Renders as `error[E1003]: message at 1:8`, or without the ` at ...`
/// suffix when no position is known.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub position: Option<Position>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            position: None,
        }
    }

    /// Attach a source position.
    #[must_use]
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Render with a file name prefix: `script.lox:1:8: error[E1003]: ...`.
    pub fn render_with_path(&self, path: &str) -> String {
        match self.position {
            Some(pos) => format!("{path}:{pos}: error[{}]: {}", self.code, self.message),
            None => format!("{path}: error[{}]: {}", self.code, self.message),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        if let Some(pos) = self.position {
            write!(f, " at {pos}")?;
        }
        Ok(())
    }
}
