//! Lox IR - token and syntax tree types.
//!
//! This crate contains the data structures shared by every stage of the
//! interpreter:
//! - `Position` for source locations
//! - `Token`, `TokenKind` and `Literal` for scanner output
//! - `lookup` for reserved-word resolution
//! - AST nodes (`Expr`, `Stmt`) and their operators
//!
//! # Design Philosophy
//!
//! - **Closed sets**: every node and token category is an enum, so adding a
//!   variant forces each `match` site to be revisited.
//! - **Tree ownership**: children are boxed and owned by exactly one parent.
//!   Trees are built once by the parser and never mutated.

pub mod ast;
mod position;
mod token;

pub use ast::{BinaryOp, Expr, ExprKind, Stmt, StmtKind, UnaryOp};
pub use position::Position;
pub use token::{lookup, Literal, Token, TokenKind};
