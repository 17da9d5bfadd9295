//! Diagnostic system for error reporting.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Optional position (where it went wrong)
//!
//! Both the parser and the evaluator convert their errors into a
//! [`Diagnostic`], which renders as a single human-readable line.

mod diagnostic;
mod error_code;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
