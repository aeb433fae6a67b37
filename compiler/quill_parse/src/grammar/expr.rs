//! Expression parsing.
//!
//! Each binary level parses one operand at the next-higher level, then loops
//! while the current token is one of its operators, folding left. Newlines
//! are skipped after every operand so an operator may start the next line.

use quill_ir::{
    BinaryOp, Expr, ExprId, ExprKind, ExprRange, Literal, LogicalOp, Span, TokenKind,
};
use quill_lexer::cook_string;
use quill_stack::ensure_sufficient_stack;

use super::MAX_ARGS;
use crate::{ParseError, ParseErrorKind, Parser};

type Level<P> = fn(&mut P) -> Result<ExprId, ParseError>;
type OpMatcher<P> = fn(&P) -> Option<BinaryOp>;

impl Parser<'_, '_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested source cannot overflow
    /// the host stack.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    #[inline]
    fn alloc_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    #[inline]
    fn expr_span(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }

    /// `target = value`, right-associative.
    ///
    /// The target is parsed as an ordinary expression and only checked once
    /// the value has been parsed too.
    fn parse_assignment(&mut self) -> Result<ExprId, ParseError> {
        let target = self.parse_or()?;
        if !self.cursor.check("=") {
            return Ok(target);
        }
        let eq = self.cursor.advance();
        let value = self.parse_expr()?;

        let ExprKind::Variable(name) = self.arena.get_expr(target).kind else {
            return Err(ParseError::at(ParseErrorKind::InvalidAssignmentTarget, &eq));
        };
        let name_span = self.expr_span(target);
        let span = name_span.merge(self.expr_span(value));
        Ok(self.alloc_expr(
            ExprKind::Assign {
                name,
                name_span,
                value,
            },
            span,
        ))
    }

    fn parse_or(&mut self) -> Result<ExprId, ParseError> {
        self.parse_logical(LogicalOp::Or, Self::parse_and)
    }

    fn parse_and(&mut self) -> Result<ExprId, ParseError> {
        self.parse_logical(LogicalOp::And, Self::parse_equality)
    }

    fn parse_logical(&mut self, op: LogicalOp, next: Level<Self>) -> Result<ExprId, ParseError> {
        let mut left = next(self)?;
        loop {
            self.cursor.skip_newlines();
            if !self.cursor.check(op.as_symbol()) {
                break;
            }
            self.cursor.advance();
            let right = next(self)?;
            let span = self.expr_span(left).merge(self.expr_span(right));
            left = self.alloc_expr(ExprKind::Logical { op, left, right }, span);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary(Self::match_equality_op, Self::parse_comparison)
    }

    fn parse_comparison(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary(Self::match_comparison_op, Self::parse_term)
    }

    fn parse_term(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary(Self::match_term_op, Self::parse_factor)
    }

    fn parse_factor(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary(Self::match_factor_op, Self::parse_unary)
    }

    fn parse_binary(
        &mut self,
        matcher: OpMatcher<Self>,
        next: Level<Self>,
    ) -> Result<ExprId, ParseError> {
        let mut left = next(self)?;
        loop {
            self.cursor.skip_newlines();
            let Some(op) = matcher(self) else {
                break;
            };
            self.cursor.advance();
            let right = next(self)?;
            let span = self.expr_span(left).merge(self.expr_span(right));
            left = self.alloc_expr(ExprKind::Binary { op, left, right }, span);
        }
        Ok(left)
    }

    /// `-x`, `!x`, or a call.
    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        self.cursor.skip_newlines();
        let Some(op) = self.match_unary_op() else {
            return self.parse_call();
        };
        let operator = self.cursor.advance();
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = operator.span.merge(self.expr_span(operand));
        Ok(self.alloc_expr(ExprKind::Unary { op, operand }, span))
    }

    /// Primary followed by any number of `( args )` suffixes.
    fn parse_call(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_primary()?;
        while self.cursor.check("(") {
            self.cursor.advance();
            let args = self.parse_arguments()?;
            let span = self.span_from(self.expr_span(expr));
            expr = self.alloc_expr(ExprKind::Call { callee: expr, args }, span);
        }
        Ok(expr)
    }

    /// Comma-separated arguments up to and including `)`.
    fn parse_arguments(&mut self) -> Result<ExprRange, ParseError> {
        let mut args = Vec::new();
        self.cursor.skip_newlines();
        if !self.cursor.check(")") {
            loop {
                self.cursor.skip_newlines();
                if args.len() >= MAX_ARGS {
                    return Err(ParseError::at(
                        ParseErrorKind::TooManyArguments,
                        &self.cursor.current(),
                    ));
                }
                args.push(self.parse_expr()?);
                self.cursor.skip_newlines();
                if self.cursor.check(",") {
                    self.cursor.advance();
                } else {
                    break;
                }
            }
        }
        self.cursor.expect(")")?;
        Ok(self.arena.alloc_expr_list(args))
    }

    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        self.cursor.skip_newlines();
        let token = self.cursor.current();
        let literal = match token.kind {
            TokenKind::Int(value) => Literal::Int(value),
            TokenKind::Str => Literal::Str(self.interner.intern(&cook_string(token.lexeme))),
            TokenKind::Keyword if token.is("true") => Literal::Bool(true),
            TokenKind::Keyword if token.is("false") => Literal::Bool(false),
            TokenKind::Symbol => {
                self.cursor.advance();
                let name = self.interner.intern(token.lexeme);
                return Ok(self.alloc_expr(ExprKind::Variable(name), token.span));
            }
            TokenKind::Punct if token.is("(") => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.skip_newlines();
                self.cursor.expect(")")?;
                let span = self.span_from(token.span);
                return Ok(self.alloc_expr(ExprKind::Grouping(inner), span));
            }
            _ => {
                return Err(ParseError::at(
                    ParseErrorKind::ExpectedExpression {
                        found: token.describe().to_owned(),
                    },
                    &token,
                ));
            }
        };
        self.cursor.advance();
        Ok(self.alloc_expr(ExprKind::Literal(literal), token.span))
    }
}
