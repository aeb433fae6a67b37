//! AST node types.
//!
//! Expressions and statements are tagged variants that refer to their
//! children by arena index. Every node carries the span of the source text
//! it was parsed from.

use std::fmt;

use crate::{ExprId, ExprRange, Name, ParamRange, Span, StmtId, StmtRange};

/// Arithmetic and comparison operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    /// The operator as written in source.
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Short-circuiting operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            LogicalOp::And => "and",
            LogicalOp::Or => "or",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl UnaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Literal values that can appear directly in source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Int(u64),
    /// Cooked string contents (escapes already resolved).
    Str(Name),
    Bool(bool),
}

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Literal(Literal),
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// `and` / `or`; the right operand is only evaluated when needed.
    Logical {
        op: LogicalOp,
        left: ExprId,
        right: ExprId,
    },
    /// Parenthesised expression, kept so the formatter can reproduce it.
    Grouping(ExprId),
    Variable(Name),
    /// `name = value`. Assignment only ever targets a plain variable.
    Assign {
        name: Name,
        name_span: Span,
        value: ExprId,
    },
    Call {
        callee: ExprId,
        args: ExprRange,
    },
}

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    Expression(ExprId),
    /// `var name [= init];`
    Var {
        name: Name,
        init: Option<ExprId>,
    },
    Block(StmtRange),
    If {
        cond: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },
    While {
        cond: ExprId,
        body: StmtId,
    },
    /// `fun name(params) { body }`
    Function {
        name: Name,
        params: ParamRange,
        body: StmtRange,
    },
    Return(Option<ExprId>),
}

/// A parsed program: its top-level statements in source order.
///
/// The nodes themselves live in the `ExprArena` returned alongside.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Module {
    pub statements: Vec<StmtId>,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }
}
