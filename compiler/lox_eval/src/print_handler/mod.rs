//! Print handler for configurable output.
//!
//! `print` statements write through a handler so output can go to:
//! - stdout (default)
//! - a buffer, for tests and embedding
//! - nowhere
//!
//! # Performance
//! Uses enum dispatch instead of trait objects for static dispatch on this
//! frequently-used path.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Default print handler that writes to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(msg.as_bytes())?;
        out.write_all(b"\n")
    }

    pub fn flush(&self) -> io::Result<()> {
        io::stdout().lock().flush()
    }
}

/// Print handler that captures output to a buffer.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Print a line (with newline). Never fails.
    pub fn println(&self, msg: &str) -> io::Result<()> {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
        Ok(())
    }

    /// Get all captured output.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout(StdoutPrintHandler),
    /// Captures to a buffer.
    Buffer(BufferPrintHandler),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => Ok(()),
        }
    }

    /// Flush buffered output. Only stdout has anything to flush.
    pub fn flush(&self) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.flush(),
            Self::Buffer(_) | Self::Silent => Ok(()),
        }
    }

    /// Get all captured output.
    ///
    /// Returns an empty string for handlers that don't capture (stdout, silent).
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Create a default stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Create a silent print handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_handler_println_captures_with_newline() {
        let handler = BufferPrintHandler::new();
        handler.println("hello").unwrap();
        assert_eq!(handler.get_output(), "hello\n");
    }

    #[test]
    fn buffer_handler_accumulates_lines() {
        let handler = BufferPrintHandler::new();
        handler.println("hello").unwrap();
        handler.println("").unwrap();
        handler.println("world").unwrap();
        assert_eq!(handler.get_output(), "hello\n\nworld\n");
    }

    #[test]
    fn shared_buffer_is_visible_through_clones() {
        let handler = buffer_handler();
        let writer = Arc::clone(&handler);
        writer.println("1").unwrap();
        assert_eq!(handler.get_output(), "1\n");
    }

    #[test]
    fn silent_handler_discards() {
        let handler = silent_handler();
        handler.println("ignored").unwrap();
        handler.flush().unwrap();
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn stdout_handler_get_output_returns_empty() {
        assert_eq!(stdout_handler().get_output(), "");
    }
}
