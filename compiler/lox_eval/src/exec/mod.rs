//! Expression evaluation.

mod expr;

pub use expr::evaluate;
