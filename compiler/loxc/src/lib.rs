//! Lox command-line driver.
//!
//! Glues the scanner, parser and interpreter together for the `lox` binary:
//! run a script file, or read lines from an interactive prompt. Errors are
//! rendered as one-line diagnostics and mapped to `sysexits` exit codes.

pub mod exit;
mod tracing_setup;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use lox_diagnostic::Diagnostic;
use lox_eval::{EvalError, Interpreter};
use lox_parse::ParseError;
use thiserror::Error;

pub use tracing_setup::init_tracing;

/// Anything that stops a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("could not read `{}`: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Syntax(#[from] ParseError),

    #[error(transparent)]
    Runtime(#[from] EvalError),
}

impl RunError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Io { .. } => exit::NO_INPUT,
            RunError::Syntax(_) => exit::DATA_ERR,
            RunError::Runtime(_) => exit::SOFTWARE,
        }
    }

    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        match self {
            RunError::Io { .. } => None,
            RunError::Syntax(error) => Some(error.to_diagnostic()),
            RunError::Runtime(error) => Some(error.to_diagnostic()),
        }
    }

    /// One-line report, prefixed with `path` when the source came from a file.
    pub fn render(&self, path: Option<&str>) -> String {
        match (self.to_diagnostic(), path) {
            (Some(diagnostic), Some(path)) => diagnostic.render_with_path(path),
            (Some(diagnostic), None) => diagnostic.to_string(),
            (None, _) => format!("error: {self}"),
        }
    }
}

/// Scan, parse and run `source` on `interpreter`.
///
/// Nothing runs if the source has a syntax error.
pub fn run_source(interpreter: &mut Interpreter, source: &[u8]) -> Result<(), RunError> {
    let tokens = lox_lexer::scan(source);
    let statements = lox_parse::parse(&tokens).into_result()?;
    interpreter.interpret(&statements)?;
    Ok(())
}

/// Read the script at `path` and run it.
#[tracing::instrument(level = "debug", skip(interpreter))]
pub fn run_file(path: &Path, interpreter: &mut Interpreter) -> Result<(), RunError> {
    let source = std::fs::read(path).map_err(|source| RunError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    run_source(interpreter, &source)
}

/// Interactive prompt.
///
/// Writes `> ` to `out`, reads a line from `input`, runs it, and repeats
/// until end of input. Every line runs on the same interpreter, so bindings
/// carry over. Errors are reported to `err` and the prompt continues.
pub fn run_prompt(
    mut input: impl BufRead,
    mut out: impl Write,
    mut err: impl Write,
    interpreter: &mut Interpreter,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        out.write_all(b"> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // Leave the terminal on a fresh line after Ctrl-D.
            writeln!(out)?;
            return Ok(());
        }

        if let Err(error) = run_source(interpreter, line.as_bytes()) {
            tracing::debug!(code = error.exit_code(), "prompt line failed");
            writeln!(err, "{}", error.render(None))?;
        }
    }
}
