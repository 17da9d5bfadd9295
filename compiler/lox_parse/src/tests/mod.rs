//! Parser tests.
//!
//! - `parser`: statements, precedence, associativity, positions
//! - `errors`: first-error reporting and error codes

mod errors;

use crate::{parse, ParseOutput};

fn parse_source(source: &str) -> ParseOutput {
    let tokens = lox_lexer::scan(source.as_bytes());
    parse(&tokens)
}

/// Parse a single expression statement and render it as an S-expression.
fn sexpr(source: &str) -> String {
    let output = parse_source(&format!("{source};"));
    assert!(!output.has_errors(), "unexpected error in {source:?}: {:?}", output.error);
    assert_eq!(output.statements.len(), 1);
    let rendered = output.statements[0].to_string();
    rendered.trim_end_matches(';').to_owned()
}
