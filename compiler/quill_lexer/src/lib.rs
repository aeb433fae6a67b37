//! Lexer for Quill.
//!
//! Turns source text into a lazy, finite stream of [`Token`]s. The surface
//! language's punctuation, keywords and comment delimiters are not hard-coded:
//! they come from a [`LexerConfig`], with [`LexerConfig::quill`] providing the
//! standard tables.
//!
//! ```
//! use quill_lexer::{Lexer, LexerConfig};
//! use quill_ir::TokenKind;
//!
//! let config = LexerConfig::quill();
//! let kinds: Vec<_> = Lexer::new("var x = 42;", &config).map(|t| t.kind).collect();
//! assert_eq!(kinds.last(), Some(&TokenKind::End));
//! assert!(kinds.contains(&TokenKind::Int(42)));
//! ```

mod config;
mod cook;
mod cursor;
mod lexer;

pub use config::LexerConfig;
pub use cook::cook_string;
pub use lexer::{tokenize, Lexer};

pub use quill_ir::{LexError, Token, TokenKind};
