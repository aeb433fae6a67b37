//! Operator matching helpers.
//!
//! Operators are recognised by lexeme; the lexer only knows them as
//! punctuation from its table.

use quill_ir::{BinaryOp, TokenKind, UnaryOp};

use crate::Parser;

impl<'src> Parser<'src, '_> {
    /// Lexeme of the current token if it is punctuation.
    fn current_punct(&self) -> Option<&'src str> {
        let token = self.cursor.current();
        (token.kind == TokenKind::Punct).then_some(token.lexeme)
    }

    pub(super) fn match_equality_op(&self) -> Option<BinaryOp> {
        match self.current_punct()? {
            "==" => Some(BinaryOp::Eq),
            "!=" => Some(BinaryOp::NotEq),
            _ => None,
        }
    }

    pub(super) fn match_comparison_op(&self) -> Option<BinaryOp> {
        match self.current_punct()? {
            ">" => Some(BinaryOp::Gt),
            ">=" => Some(BinaryOp::GtEq),
            "<" => Some(BinaryOp::Lt),
            "<=" => Some(BinaryOp::LtEq),
            _ => None,
        }
    }

    pub(super) fn match_term_op(&self) -> Option<BinaryOp> {
        match self.current_punct()? {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    pub(super) fn match_factor_op(&self) -> Option<BinaryOp> {
        match self.current_punct()? {
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            _ => None,
        }
    }

    pub(super) fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.current_punct()? {
            "-" => Some(UnaryOp::Neg),
            "!" => Some(UnaryOp::Not),
            _ => None,
        }
    }
}
