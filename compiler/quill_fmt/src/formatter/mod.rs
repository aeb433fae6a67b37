//! Canonical source formatter.
//!
//! Groupings are kept in the tree, so parentheses are reproduced exactly
//! where the source had them and never inserted. `for` loops were lowered by
//! the parser and come back out as the equivalent block and `while`.

use quill_ir::{
    ExprArena, ExprId, ExprKind, Literal, Module, StmtId, StmtKind, StmtRange, StringInterner,
};
use quill_stack::ensure_sufficient_stack;

use crate::emitter::{Emitter, StringEmitter, INDENT_WIDTH};

/// Formats statements and expressions into an [`Emitter`].
pub struct Formatter<'a, E: Emitter> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    out: E,
    indent: usize,
}

impl<'a, E: Emitter> Formatter<'a, E> {
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner, out: E) -> Self {
        Formatter {
            arena,
            interner,
            out,
            indent: 0,
        }
    }

    pub fn into_emitter(self) -> E {
        self.out
    }

    /// Top-level statements, one per line. Function declarations are
    /// separated from their neighbours by a blank line.
    pub fn format_module(&mut self, module: &Module) {
        let mut prev_was_fun = false;
        for (i, &stmt) in module.statements.iter().enumerate() {
            let is_fun = self.is_function(stmt);
            if i > 0 && (is_fun || prev_was_fun) {
                self.out.emit_newline();
            }
            self.format_stmt(stmt);
            prev_was_fun = is_fun;
        }
    }

    fn is_function(&self, stmt: StmtId) -> bool {
        matches!(self.arena.get_stmt(stmt).kind, StmtKind::Function { .. })
    }

    /// One statement on its own indented line.
    pub fn format_stmt(&mut self, id: StmtId) {
        self.out.emit_indent(self.indent, INDENT_WIDTH);
        self.stmt_inline(id);
        self.out.emit_newline();
    }

    /// A statement continuing the current line. Nested blocks still break
    /// onto their own lines.
    fn stmt_inline(&mut self, id: StmtId) {
        ensure_sufficient_stack(|| self.stmt_inline_inner(id));
    }

    fn stmt_inline_inner(&mut self, id: StmtId) {
        let arena = self.arena;
        match &arena.get_stmt(id).kind {
            StmtKind::Expression(expr) => {
                self.format_expr(*expr);
                self.out.emit(";");
            }
            StmtKind::Var { name, init } => {
                self.out.emit("var ");
                self.out.emit(self.interner.lookup(*name));
                if let Some(init) = init {
                    self.out.emit(" = ");
                    self.format_expr(*init);
                }
                self.out.emit(";");
            }
            StmtKind::Block(body) => self.block(*body),
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.out.emit("if (");
                self.format_expr(*cond);
                self.out.emit(") ");
                self.stmt_inline(*then_branch);
                if let Some(else_branch) = else_branch {
                    self.out.emit(" else ");
                    self.stmt_inline(*else_branch);
                }
            }
            StmtKind::While { cond, body } => {
                self.out.emit("while (");
                self.format_expr(*cond);
                self.out.emit(") ");
                self.stmt_inline(*body);
            }
            StmtKind::Function { name, params, body } => {
                self.out.emit("fun ");
                self.out.emit(self.interner.lookup(*name));
                self.out.emit("(");
                for (i, param) in arena.get_params(*params).iter().enumerate() {
                    if i > 0 {
                        self.out.emit(", ");
                    }
                    self.out.emit(self.interner.lookup(*param));
                }
                self.out.emit(") ");
                self.block(*body);
            }
            StmtKind::Return(value) => {
                self.out.emit("return");
                if let Some(value) = value {
                    self.out.emit_space();
                    self.format_expr(*value);
                }
                self.out.emit(";");
            }
        }
    }

    /// `{}` when empty, otherwise the body indented one level.
    fn block(&mut self, body: StmtRange) {
        if body.is_empty() {
            self.out.emit("{}");
            return;
        }
        self.out.emit("{");
        self.out.emit_newline();
        self.indent += 1;
        let arena = self.arena;
        for &stmt in arena.get_stmt_list(body) {
            self.format_stmt(stmt);
        }
        self.indent -= 1;
        self.out.emit_indent(self.indent, INDENT_WIDTH);
        self.out.emit("}");
    }

    pub fn format_expr(&mut self, id: ExprId) {
        ensure_sufficient_stack(|| self.format_expr_inner(id));
    }

    fn format_expr_inner(&mut self, id: ExprId) {
        let arena = self.arena;
        match &arena.get_expr(id).kind {
            ExprKind::Literal(Literal::Int(n)) => self.out.emit(&n.to_string()),
            ExprKind::Literal(Literal::Str(s)) => {
                self.out.emit(&quote(self.interner.lookup(*s)));
            }
            ExprKind::Literal(Literal::Bool(b)) => {
                self.out.emit(if *b { "true" } else { "false" });
            }
            ExprKind::Unary { op, operand } => {
                self.out.emit(op.as_symbol());
                self.format_expr(*operand);
            }
            ExprKind::Binary { op, left, right } => {
                self.format_expr(*left);
                self.out.emit_space();
                self.out.emit(op.as_symbol());
                self.out.emit_space();
                self.format_expr(*right);
            }
            ExprKind::Logical { op, left, right } => {
                self.format_expr(*left);
                self.out.emit_space();
                self.out.emit(op.as_symbol());
                self.out.emit_space();
                self.format_expr(*right);
            }
            ExprKind::Grouping(inner) => {
                self.out.emit("(");
                self.format_expr(*inner);
                self.out.emit(")");
            }
            ExprKind::Variable(name) => self.out.emit(self.interner.lookup(*name)),
            ExprKind::Assign { name, value, .. } => {
                self.out.emit(self.interner.lookup(*name));
                self.out.emit(" = ");
                self.format_expr(*value);
            }
            ExprKind::Call { callee, args } => {
                self.format_expr(*callee);
                self.out.emit("(");
                for (i, arg) in arena.get_expr_list(*args).iter().enumerate() {
                    if i > 0 {
                        self.out.emit(", ");
                    }
                    self.format_expr(*arg);
                }
                self.out.emit(")");
            }
        }
    }
}

/// String literal source for `text`, escaping what the lexer would cook.
pub(crate) fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Format a whole module as canonical source.
pub fn format_module(module: &Module, arena: &ExprArena, interner: &StringInterner) -> String {
    let mut formatter = Formatter::new(arena, interner, StringEmitter::new());
    formatter.format_module(module);
    formatter.into_emitter().output()
}

/// Format a single expression.
pub fn format_expr(id: ExprId, arena: &ExprArena, interner: &StringInterner) -> String {
    let mut formatter = Formatter::new(arena, interner, StringEmitter::new());
    formatter.format_expr(id);
    formatter.into_emitter().output()
}

#[cfg(test)]
mod tests;
