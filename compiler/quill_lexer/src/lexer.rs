//! The lexer proper.

use quill_ir::{LexError, Location, Span, Token, TokenKind};

use crate::cursor::Cursor;
use crate::LexerConfig;

/// Largest integer literal accepted; the evaluator's widest type is `i64`.
const MAX_INT_LITERAL: u64 = i64::MAX.unsigned_abs();

/// Lazy, forward-only tokenizer.
///
/// Each call to [`Lexer::next_token`] consumes input irreversibly. The
/// [`Iterator`] impl yields the `End` token exactly once and then stops;
/// calling `next_token` directly after that keeps returning `End`.
pub struct Lexer<'src, 'cfg> {
    cursor: Cursor<'src>,
    config: &'cfg LexerConfig,
    finished: bool,
}

impl<'src, 'cfg> Lexer<'src, 'cfg> {
    pub fn new(source: &'src str, config: &'cfg LexerConfig) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            config,
            finished: false,
        }
    }

    /// Whether the `End` token has not been produced yet.
    #[inline]
    pub fn has_more(&self) -> bool {
        !self.finished
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token<'src> {
        if let Some(invalid) = self.skip_trivia() {
            return invalid;
        }

        let start = self.cursor.pos();
        let loc = self.cursor.location();
        let Some(byte) = self.cursor.current() else {
            self.finished = true;
            return self.finish(TokenKind::End, start, loc);
        };

        let kind = if byte == b'\n' {
            self.cursor.advance(1);
            TokenKind::Newline
        } else if let Some(len) = self.config.match_punct(self.cursor.rest()) {
            self.cursor.advance(len);
            TokenKind::Punct
        } else if byte.is_ascii_digit() {
            self.lex_int(start)
        } else if byte.is_ascii_alphabetic() || byte == b'_' {
            self.cursor
                .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
            if self.config.is_keyword(self.cursor.slice_from(start)) {
                TokenKind::Keyword
            } else {
                TokenKind::Symbol
            }
        } else if byte == b'"' {
            self.cursor.advance(1);
            if self.cursor.eat_string_body() {
                TokenKind::Str
            } else {
                TokenKind::Invalid(LexError::UnterminatedString)
            }
        } else {
            self.cursor.bump();
            TokenKind::Invalid(LexError::UnexpectedChar)
        };

        self.finish(kind, start, loc)
    }

    /// Skip whitespace (except `\n`) and comments.
    ///
    /// Returns an `Invalid` token if a block comment runs off the end of input.
    fn skip_trivia(&mut self) -> Option<Token<'src>> {
        let config = self.config;
        loop {
            self.cursor
                .eat_while(|b| matches!(b, b' ' | b'\t' | b'\r'));
            if self.cursor.is_eof() {
                return None;
            }

            let rest = self.cursor.rest();
            if config
                .line_comments
                .iter()
                .any(|marker| !marker.is_empty() && rest.starts_with(marker.as_str()))
            {
                self.cursor.eat_until_newline();
                continue;
            }

            let block = config
                .block_comments
                .iter()
                .find(|(open, _)| !open.is_empty() && rest.starts_with(open.as_str()));
            let Some((open, close)) = block else {
                return None;
            };

            let start = self.cursor.pos();
            let loc = self.cursor.location();
            self.cursor.advance(open.len());
            if !self.cursor.eat_past(close) {
                return Some(self.finish(
                    TokenKind::Invalid(LexError::UnterminatedComment),
                    start,
                    loc,
                ));
            }
        }
    }

    /// `value = value * 10 + digit`, rejecting anything past `i64::MAX`.
    fn lex_int(&mut self, start: usize) -> TokenKind {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.cursor
            .slice_from(start)
            .bytes()
            .try_fold(0u64, |acc, digit| {
                acc.checked_mul(10)?.checked_add(u64::from(digit - b'0'))
            })
            .filter(|&value| value <= MAX_INT_LITERAL)
            .map_or(TokenKind::Invalid(LexError::IntegerTooLarge), TokenKind::Int)
    }

    fn finish(&self, kind: TokenKind, start: usize, loc: Location) -> Token<'src> {
        Token::new(
            kind,
            self.cursor.slice_from(start),
            Span::from_range(start..self.cursor.pos()),
            loc,
        )
    }
}

impl<'src> Iterator for Lexer<'src, '_> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_, '_> {}

/// Lex an entire source, including the trailing `End` token.
pub fn tokenize<'src>(source: &'src str, config: &LexerConfig) -> Vec<Token<'src>> {
    Lexer::new(source, config).collect()
}

#[cfg(test)]
mod tests;
