//! Parse error types.
//!
//! Parsing stops at the first error, so a [`ParseError`] is always a single
//! located fact. Errors raised on a token the lexer could not classify are
//! reported as that lexer error instead of as a grammar error.

use std::fmt;

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{LexError, Location, Span, Token, TokenKind};

/// What went wrong.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ParseErrorKind {
    /// The lexer produced an `Invalid` token here.
    Lex(LexError),
    /// A specific token was required.
    UnexpectedToken { expected: String, found: String },
    ExpectedExpression { found: String },
    ExpectedIdentifier { found: String },
    /// End of input inside `{ ... }`.
    UnterminatedBlock,
    InvalidAssignmentTarget,
    TooManyArguments,
    TooManyParameters,
    ReturnOutsideFunction,
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::Lex(LexError::UnterminatedString) => ErrorCode::E0001,
            ParseErrorKind::Lex(LexError::UnexpectedChar) => ErrorCode::E0002,
            ParseErrorKind::Lex(LexError::IntegerTooLarge) => ErrorCode::E0003,
            ParseErrorKind::Lex(LexError::UnterminatedComment) => ErrorCode::E0004,
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::UnterminatedBlock => ErrorCode::E1003,
            ParseErrorKind::ExpectedIdentifier { .. } => ErrorCode::E1004,
            ParseErrorKind::InvalidAssignmentTarget => ErrorCode::E1005,
            ParseErrorKind::TooManyArguments => ErrorCode::E1006,
            ParseErrorKind::TooManyParameters => ErrorCode::E1007,
            ParseErrorKind::ReturnOutsideFunction => ErrorCode::E1008,
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Lex(err) => write!(f, "{err}"),
            ParseErrorKind::UnexpectedToken { expected, found } => {
                write!(f, "expected '{expected}' but got '{found}'")
            }
            ParseErrorKind::ExpectedExpression { found } => {
                write!(f, "expected expression but got '{found}'")
            }
            ParseErrorKind::ExpectedIdentifier { found } => {
                write!(f, "expected identifier but got '{found}'")
            }
            ParseErrorKind::UnterminatedBlock => {
                write!(f, "unterminated block: expected '}}' before end of input")
            }
            ParseErrorKind::InvalidAssignmentTarget => write!(f, "invalid assignment target"),
            ParseErrorKind::TooManyArguments => write!(f, "can't have more than 255 arguments"),
            ParseErrorKind::TooManyParameters => {
                write!(f, "can't have more than 255 parameters")
            }
            ParseErrorKind::ReturnOutsideFunction => {
                write!(f, "can't return from outside a function")
            }
        }
    }
}

/// A located syntax error.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub loc: Location,
}

impl ParseError {
    /// Error located at `token`.
    ///
    /// If `token` is one the lexer rejected, the lexer's reason wins.
    #[cold]
    pub fn at(kind: ParseErrorKind, token: &Token<'_>) -> Self {
        let kind = match token.kind {
            TokenKind::Invalid(err) => ParseErrorKind::Lex(err),
            _ => kind,
        };
        ParseError {
            kind,
            span: token.span,
            loc: token.loc,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.kind {
            ParseErrorKind::UnterminatedBlock => "block opened here",
            ParseErrorKind::InvalidAssignmentTarget => "only variables can be assigned to",
            ParseErrorKind::ReturnOutsideFunction => "not inside a function body",
            _ => "",
        };
        Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.loc, self.kind)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests;
