//! Process exit codes, following BSD `sysexits.h`.

pub const SUCCESS: i32 = 0;
/// Wrong number of command-line arguments.
pub const USAGE: i32 = 64;
/// Syntax error in the script.
pub const DATA_ERR: i32 = 65;
/// Script file could not be read.
pub const NO_INPUT: i32 = 66;
/// Runtime error.
pub const SOFTWARE: i32 = 70;
/// Reading the prompt or writing to the terminal failed.
pub const IO_ERR: i32 = 74;
