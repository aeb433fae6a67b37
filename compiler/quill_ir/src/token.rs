//! Tokens produced by the lexer.

use std::fmt;

use crate::{Location, Span};

/// Why a run of source text could not become a real token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LexError {
    /// A character that matches no punctuation, literal or symbol rule.
    UnexpectedChar,
    /// String literal without its closing quote.
    UnterminatedString,
    /// Multi-line comment without its closing delimiter.
    UnterminatedComment,
    /// Integer literal that does not fit in 64 bits.
    IntegerTooLarge,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedChar => write!(f, "unexpected character"),
            LexError::UnterminatedString => write!(f, "unterminated string literal"),
            LexError::UnterminatedComment => write!(f, "unterminated block comment"),
            LexError::IntegerTooLarge => write!(f, "integer literal is too large"),
        }
    }
}

/// Token classification.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// End of input. Produced exactly once.
    End,
    /// Unsigned integer literal with its value.
    Int(u64),
    /// Double-quoted string literal; the lexeme still holds the quotes and escapes.
    Str,
    /// Identifier that is not a keyword.
    Symbol,
    /// Identifier listed in the keyword table.
    Keyword,
    /// Entry from the punctuation table.
    Punct,
    /// A line break.
    Newline,
    /// Text the lexer could not classify.
    Invalid(LexError),
}

impl TokenKind {
    /// Short upper-case label used by token dumps and error messages.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::End => "END",
            TokenKind::Int(_) => "INT",
            TokenKind::Str => "STRING",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Punct => "PUNCT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Invalid(_) => "INVALID",
        }
    }
}

/// A token: its kind, the exact source text it came from, and where.
///
/// The lexeme borrows from the source buffer, so tokens are `Copy` and cheap
/// to keep around for error reporting.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub span: Span,
    pub loc: Location,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str, span: Span, loc: Location) -> Self {
        Token {
            kind,
            lexeme,
            span,
            loc,
        }
    }

    /// Whether this token's lexeme is exactly `text`.
    ///
    /// Punctuation and keywords are matched by lexeme, never by kind alone,
    /// so a symbol named like a keyword in another table is still a symbol.
    #[inline]
    pub fn is(&self, text: &str) -> bool {
        matches!(self.kind, TokenKind::Punct | TokenKind::Keyword) && self.lexeme == text
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }

    #[inline]
    pub fn is_newline(&self) -> bool {
        self.kind == TokenKind::Newline
    }

    /// Human-readable text for "but got '...'" messages.
    pub fn describe(&self) -> &'src str {
        match self.kind {
            TokenKind::End => "end of input",
            TokenKind::Newline => "newline",
            _ => self.lexeme,
        }
    }
}
