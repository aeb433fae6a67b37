//! Statement parsing.
//!
//! `var` is a declaration, not a statement: it is accepted at the top level,
//! directly inside a block and as a `for` initializer, but not as the bare
//! branch of an `if`, `else` or `while`.

mod expr;
mod operators;

use quill_ir::{
    Expr, ExprId, ExprKind, Literal, Name, Span, Stmt, StmtId, StmtKind, StmtRange, Token,
    TokenKind,
};
use quill_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser};

/// Upper bound on call arguments and function parameters.
pub(crate) const MAX_ARGS: usize = 255;

impl Parser<'_, '_> {
    pub(crate) fn parse_declaration(&mut self) -> Result<StmtId, ParseError> {
        self.cursor.skip_newlines();
        if self.cursor.check("var") {
            self.parse_var()
        } else {
            self.parse_statement()
        }
    }

    fn parse_statement(&mut self) -> Result<StmtId, ParseError> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<StmtId, ParseError> {
        self.cursor.skip_newlines();
        let token = self.cursor.current();
        if token.is("if") {
            self.parse_if()
        } else if token.is("while") {
            self.parse_while()
        } else if token.is("for") {
            self.parse_for()
        } else if token.is("fun") {
            self.parse_function()
        } else if token.is("return") {
            self.parse_return()
        } else if token.is("{") {
            let open = self.cursor.advance();
            let body = self.parse_block_body(open)?;
            Ok(self.alloc_stmt(StmtKind::Block(body), open.span))
        } else {
            self.parse_expression_statement()
        }
    }

    #[inline]
    fn alloc_stmt(&mut self, kind: StmtKind, start: Span) -> StmtId {
        let span = self.span_from(start);
        self.arena.alloc_stmt(Stmt::new(kind, span))
    }

    /// `var name [= init] ;`
    fn parse_var(&mut self) -> Result<StmtId, ParseError> {
        let var = self.cursor.advance();
        let name = self.expect_ident()?;
        let init = if self.cursor.check("=") {
            self.cursor.advance();
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.cursor.skip_newlines();
        self.cursor.expect(";")?;
        Ok(self.alloc_stmt(StmtKind::Var { name, init }, var.span))
    }

    /// `if ( cond ) stmt [else stmt]`
    fn parse_if(&mut self) -> Result<StmtId, ParseError> {
        let keyword = self.cursor.advance();
        let cond = self.parse_condition()?;
        let then_branch = self.parse_statement()?;
        self.cursor.skip_newlines();
        let else_branch = if self.cursor.check("else") {
            self.cursor.advance();
            Some(self.parse_statement()?)
        } else {
            None
        };
        Ok(self.alloc_stmt(
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            },
            keyword.span,
        ))
    }

    /// `while ( cond ) stmt`
    fn parse_while(&mut self) -> Result<StmtId, ParseError> {
        let keyword = self.cursor.advance();
        let cond = self.parse_condition()?;
        let body = self.parse_statement()?;
        Ok(self.alloc_stmt(StmtKind::While { cond, body }, keyword.span))
    }

    /// `( expr )` as used by `if` and `while`.
    fn parse_condition(&mut self) -> Result<ExprId, ParseError> {
        self.cursor.skip_newlines();
        self.cursor.expect("(")?;
        let cond = self.parse_expr()?;
        self.cursor.skip_newlines();
        self.cursor.expect(")")?;
        Ok(cond)
    }

    /// `for ( [init] ; [cond] ; [incr] ) body`, lowered to
    /// `{ init; while (cond) { body; incr; } }`.
    ///
    /// A missing condition becomes the literal `true`; missing parts are
    /// otherwise simply left out of the lowered form.
    fn parse_for(&mut self) -> Result<StmtId, ParseError> {
        let keyword = self.cursor.advance();
        self.cursor.skip_newlines();
        self.cursor.expect("(")?;
        self.cursor.skip_newlines();

        let init = if self.cursor.check(";") {
            self.cursor.advance();
            None
        } else if self.cursor.check("var") {
            Some(self.parse_var()?)
        } else {
            Some(self.parse_expression_statement()?)
        };

        self.cursor.skip_newlines();
        let cond = if self.cursor.check(";") {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.cursor.skip_newlines();
        self.cursor.expect(";")?;

        self.cursor.skip_newlines();
        let incr = if self.cursor.check(")") {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.cursor.skip_newlines();
        self.cursor.expect(")")?;

        let body = self.parse_statement()?;

        let body = match incr {
            Some(incr) => {
                let incr_span = self.arena.get_expr(incr).span;
                let incr_stmt = self
                    .arena
                    .alloc_stmt(Stmt::new(StmtKind::Expression(incr), incr_span));
                let list = self.arena.alloc_stmt_list([body, incr_stmt]);
                self.alloc_stmt(StmtKind::Block(list), keyword.span)
            }
            None => body,
        };
        let cond = match cond {
            Some(cond) => cond,
            None => self.arena.alloc_expr(Expr::new(
                ExprKind::Literal(Literal::Bool(true)),
                keyword.span,
            )),
        };
        let lowered = self.alloc_stmt(StmtKind::While { cond, body }, keyword.span);

        match init {
            Some(init) => {
                let list = self.arena.alloc_stmt_list([init, lowered]);
                Ok(self.alloc_stmt(StmtKind::Block(list), keyword.span))
            }
            None => Ok(lowered),
        }
    }

    /// `fun name ( params ) { body }`
    fn parse_function(&mut self) -> Result<StmtId, ParseError> {
        let keyword = self.cursor.advance();
        let name = self.expect_ident()?;

        self.cursor.skip_newlines();
        self.cursor.expect("(")?;
        let mut params = Vec::new();
        self.cursor.skip_newlines();
        if !self.cursor.check(")") {
            loop {
                self.cursor.skip_newlines();
                if params.len() >= MAX_ARGS {
                    return Err(ParseError::at(
                        ParseErrorKind::TooManyParameters,
                        &self.cursor.current(),
                    ));
                }
                params.push(self.expect_ident()?);
                self.cursor.skip_newlines();
                if self.cursor.check(",") {
                    self.cursor.advance();
                } else {
                    break;
                }
            }
        }
        self.cursor.expect(")")?;
        let params = self.arena.alloc_params(params);

        self.cursor.skip_newlines();
        let open = self.cursor.expect("{")?;
        self.function_depth += 1;
        let body = self.parse_block_body(open);
        self.function_depth -= 1;
        let body = body?;

        Ok(self.alloc_stmt(StmtKind::Function { name, params, body }, keyword.span))
    }

    /// `return [value] ;`
    fn parse_return(&mut self) -> Result<StmtId, ParseError> {
        let keyword = self.cursor.current();
        if self.function_depth == 0 {
            return Err(ParseError::at(
                ParseErrorKind::ReturnOutsideFunction,
                &keyword,
            ));
        }
        self.cursor.advance();
        self.cursor.skip_newlines();
        let value = if self.cursor.check(";") {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.cursor.skip_newlines();
        self.cursor.expect(";")?;
        Ok(self.alloc_stmt(StmtKind::Return(value), keyword.span))
    }

    /// Declarations up to the matching `}`; `open` has been consumed.
    fn parse_block_body(&mut self, open: Token<'_>) -> Result<StmtRange, ParseError> {
        let mut stmts = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.check("}") {
                self.cursor.advance();
                break;
            }
            if self.cursor.is_at_end() {
                return Err(ParseError::at(ParseErrorKind::UnterminatedBlock, &open));
            }
            stmts.push(self.parse_declaration()?);
        }
        Ok(self.arena.alloc_stmt_list(stmts))
    }

    /// `expr ;`
    fn parse_expression_statement(&mut self) -> Result<StmtId, ParseError> {
        let expr = self.parse_expr()?;
        let start = self.arena.get_expr(expr).span;
        self.cursor.skip_newlines();
        self.cursor.expect(";")?;
        Ok(self.alloc_stmt(StmtKind::Expression(expr), start))
    }

    fn expect_ident(&mut self) -> Result<Name, ParseError> {
        self.cursor.skip_newlines();
        let token = self.cursor.current();
        if token.kind == TokenKind::Symbol {
            self.cursor.advance();
            Ok(self.interner.intern(token.lexeme))
        } else {
            Err(ParseError::at(
                ParseErrorKind::ExpectedIdentifier {
                    found: token.describe().to_owned(),
                },
                &token,
            ))
        }
    }
}
