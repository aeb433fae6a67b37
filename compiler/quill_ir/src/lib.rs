//! Quill IR - shared data structures for the Quill front end and evaluator.
//!
//! This crate contains:
//! - Spans and row/column locations
//! - Names for interned identifiers
//! - Tokens produced by the lexer
//! - AST nodes (`Expr`, `Stmt`) and the `ExprArena` that owns them
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers become `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//!   into one arena that lives as long as the parsed module
//!
//! Trees built by the parser are never cyclic: a node can only refer to nodes
//! that were allocated before it.

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod span;
mod token;

pub use arena::ExprArena;
pub use ast::{BinaryOp, Expr, ExprKind, Literal, LogicalOp, Module, Stmt, StmtKind, UnaryOp};
pub use expr_id::{ExprId, ExprRange, ParamRange, StmtId, StmtRange};
pub use interner::StringInterner;
pub use name::Name;
pub use span::{Location, Span};
pub use token::{LexError, Token, TokenKind};
