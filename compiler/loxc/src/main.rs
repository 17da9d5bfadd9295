//! Lox interpreter CLI.
//!
//! ```text
//! lox            interactive prompt
//! lox <script>   run a script file
//! ```

use std::io;
use std::path::Path;

use loxc::{exit, init_tracing, run_file, run_prompt};
use lox_eval::Interpreter;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let code = match args.as_slice() {
        [_] => prompt(),
        [_, script] => file(script),
        _ => {
            eprintln!("usage: lox [script]");
            exit::USAGE
        }
    };
    std::process::exit(code);
}

fn prompt() -> i32 {
    let mut interpreter = Interpreter::new();
    match run_prompt(io::stdin().lock(), io::stdout(), io::stderr(), &mut interpreter) {
        Ok(()) => exit::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            exit::IO_ERR
        }
    }
}

fn file(script: &str) -> i32 {
    let mut interpreter = Interpreter::new();
    match run_file(Path::new(script), &mut interpreter) {
        Ok(()) => exit::SUCCESS,
        Err(error) => {
            eprintln!("{}", error.render(Some(script)));
            error.exit_code()
        }
    }
}
