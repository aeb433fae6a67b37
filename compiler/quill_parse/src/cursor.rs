//! Token cursor: one token of lookahead over a streaming lexer.
//!
//! The grammar is predictive, so the parser only ever inspects the current
//! token. Tokens are pulled from the lexer on demand and never buffered.

use quill_ir::{Span, Token};
use quill_lexer::Lexer;
use tracing::trace;

use crate::{ParseError, ParseErrorKind};

pub(crate) struct Cursor<'src, 'a> {
    lexer: Lexer<'src, 'a>,
    current: Token<'src>,
    previous_span: Span,
}

impl<'src, 'a> Cursor<'src, 'a> {
    pub(crate) fn new(mut lexer: Lexer<'src, 'a>) -> Self {
        let current = lexer.next_token();
        Cursor {
            lexer,
            current,
            previous_span: Span::DUMMY,
        }
    }

    #[inline]
    pub(crate) fn current(&self) -> Token<'src> {
        self.current
    }

    #[inline]
    pub(crate) fn previous_span(&self) -> Span {
        self.previous_span
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.current.is_end()
    }

    /// Whether the current token is the punctuation or keyword `text`.
    #[inline]
    pub(crate) fn check(&self, text: &str) -> bool {
        self.current.is(text)
    }

    /// Consume the current token. `End` is never consumed past.
    pub(crate) fn advance(&mut self) -> Token<'src> {
        let token = self.current;
        trace!(
            kind = token.kind.label(),
            lexeme = token.lexeme,
            row = token.loc.row,
            col = token.loc.col,
            "advance"
        );
        if !token.is_end() {
            self.current = self.lexer.next_token();
        }
        self.previous_span = token.span;
        token
    }

    pub(crate) fn skip_newlines(&mut self) {
        while self.current.is_newline() {
            self.advance();
        }
    }

    /// Consume `text` or fail with `expected 'text' but got '...'`.
    ///
    /// The unexpected token is left in place.
    pub(crate) fn expect(&mut self, text: &str) -> Result<Token<'src>, ParseError> {
        if self.check(text) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(text))
        }
    }

    #[cold]
    #[inline(never)]
    fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::at(
            ParseErrorKind::UnexpectedToken {
                expected: expected.to_owned(),
                found: self.current.describe().to_owned(),
            },
            &self.current,
        )
    }
}
