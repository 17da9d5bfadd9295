//! End-to-end evaluator tests: source text through scanner, parser, and
//! interpreter, with output captured in a buffer.


use crate::{buffer_handler, EvalError, Interpreter, SharedPrintHandler};

/// Run `source` on a fresh interpreter, returning captured output.
///
/// Panics on syntax errors; runtime errors are returned alongside whatever
/// was printed before them.
fn run(source: &str) -> (String, Result<(), EvalError>) {
    let output = buffer_handler();
    let mut interpreter = Interpreter::builder()
        .print_handler(SharedPrintHandler::clone(&output))
        .build();
    let result = run_in(&mut interpreter, source);
    (output.get_output(), result)
}

fn run_in(interpreter: &mut Interpreter, source: &str) -> Result<(), EvalError> {
    let tokens = lox_lexer::scan(source.as_bytes());
    let output = lox_parse::parse(&tokens);
    assert!(
        !output.has_errors(),
        "syntax error in {source:?}: {:?}",
        output.error
    );
    interpreter.interpret(&output.statements)
}
