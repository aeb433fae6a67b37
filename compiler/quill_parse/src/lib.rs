//! Recursive descent parser for Quill.
//!
//! Produces a flat AST in an `ExprArena`. Statements are dispatched on their
//! leading keyword; expressions go through a precedence-climbing chain
//! (assignment, `or`, `and`, equality, comparison, term, factor, unary, call,
//! primary). Parsing stops at the first error, keeping every top-level
//! statement that was completed before it.

mod cursor;
mod error;
mod grammar;

pub use error::{ParseError, ParseErrorKind};

use cursor::Cursor;
use quill_ir::{ExprArena, Module, Span, StringInterner};
use quill_lexer::{Lexer, LexerConfig};

/// Everything a parse produced.
#[derive(Debug)]
pub struct ParseOutput {
    pub module: Module,
    pub arena: ExprArena,
    /// The first syntax error, if any. `module` holds the statements parsed
    /// before it.
    pub error: Option<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.error.is_some()
    }
}

/// Parser state.
pub(crate) struct Parser<'src, 'a> {
    cursor: Cursor<'src, 'a>,
    arena: ExprArena,
    interner: &'a StringInterner,
    /// Nesting depth of `fun` bodies; `return` is only legal when non-zero.
    function_depth: u32,
}

impl<'src, 'a> Parser<'src, 'a> {
    fn new(lexer: Lexer<'src, 'a>, interner: &'a StringInterner, source_len: usize) -> Self {
        Parser {
            cursor: Cursor::new(lexer),
            arena: ExprArena::with_capacity(source_len),
            interner,
            function_depth: 0,
        }
    }

    /// Span from `start` to the end of the last consumed token.
    #[inline]
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.cursor.previous_span())
    }

    fn parse_module(mut self) -> ParseOutput {
        let mut module = Module::new();
        let mut error = None;

        loop {
            self.cursor.skip_newlines();
            if self.cursor.is_at_end() {
                break;
            }
            match self.parse_declaration() {
                Ok(stmt) => module.statements.push(stmt),
                Err(e) => {
                    error = Some(e);
                    break;
                }
            }
        }

        ParseOutput {
            module,
            arena: self.arena,
            error,
        }
    }
}

/// Parse the token stream of `lexer`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse(lexer: Lexer<'_, '_>, interner: &StringInterner) -> ParseOutput {
    Parser::new(lexer, interner, 0).parse_module()
}

/// Lex and parse `source` with the standard Quill tables.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_source(source: &str, interner: &StringInterner) -> ParseOutput {
    let config = LexerConfig::quill();
    Parser::new(Lexer::new(source, &config), interner, source.len()).parse_module()
}
