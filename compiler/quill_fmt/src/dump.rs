//! Indented tree dump of a parsed module.
//!
//! Each node is one line naming its kind, with children indented two
//! spaces below it:
//!
//! ```text
//! Expression Statement:
//!   Binary Expression: +
//!     Literal: 1
//!     Variable: x
//! ```

use quill_ir::{ExprArena, ExprId, ExprKind, Literal, Module, StmtId, StmtKind, StringInterner};
use quill_stack::ensure_sufficient_stack;

use crate::emitter::{Emitter, StringEmitter};
use crate::formatter::quote;

const DUMP_INDENT: usize = 2;

/// Writes the tree of a module into an [`Emitter`].
pub struct TreeDumper<'a, E: Emitter> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    out: E,
}

impl<'a, E: Emitter> TreeDumper<'a, E> {
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner, out: E) -> Self {
        TreeDumper {
            arena,
            interner,
            out,
        }
    }

    pub fn into_emitter(self) -> E {
        self.out
    }

    fn line(&mut self, depth: usize, text: &str) {
        self.out.emit_indent(depth, DUMP_INDENT);
        self.out.emit(text);
        self.out.emit_newline();
    }

    pub fn dump_stmt(&mut self, id: StmtId, depth: usize) {
        ensure_sufficient_stack(|| self.dump_stmt_inner(id, depth));
    }

    fn dump_stmt_inner(&mut self, id: StmtId, depth: usize) {
        let arena = self.arena;
        match &arena.get_stmt(id).kind {
            StmtKind::Expression(expr) => {
                self.line(depth, "Expression Statement:");
                self.dump_expr(*expr, depth + 1);
            }
            StmtKind::Var { name, init } => {
                let name = self.interner.lookup(*name);
                self.line(depth, &format!("Variable Declaration: {name}"));
                if let Some(init) = init {
                    self.line(depth + 1, "Initializer:");
                    self.dump_expr(*init, depth + 2);
                }
            }
            StmtKind::Block(body) => {
                self.line(depth, "Block Statement:");
                for &stmt in arena.get_stmt_list(*body) {
                    self.dump_stmt(stmt, depth + 1);
                }
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.line(depth, "If Statement:");
                self.line(depth + 1, "Condition:");
                self.dump_expr(*cond, depth + 2);
                self.line(depth + 1, "Then Branch:");
                self.dump_stmt(*then_branch, depth + 2);
                if let Some(else_branch) = else_branch {
                    self.line(depth + 1, "Else Branch:");
                    self.dump_stmt(*else_branch, depth + 2);
                }
            }
            StmtKind::While { cond, body } => {
                self.line(depth, "While Statement:");
                self.line(depth + 1, "Condition:");
                self.dump_expr(*cond, depth + 2);
                self.line(depth + 1, "Body:");
                self.dump_stmt(*body, depth + 2);
            }
            StmtKind::Function { name, params, body } => {
                let name = self.interner.lookup(*name);
                self.line(depth, &format!("Function Declaration: {name}"));
                let params: Vec<&str> = arena
                    .get_params(*params)
                    .iter()
                    .map(|p| self.interner.lookup(*p))
                    .collect();
                if params.is_empty() {
                    self.line(depth + 1, "Parameters: (none)");
                } else {
                    self.line(depth + 1, &format!("Parameters: {}", params.join(", ")));
                }
                self.line(depth + 1, "Body:");
                for &stmt in arena.get_stmt_list(*body) {
                    self.dump_stmt(stmt, depth + 2);
                }
            }
            StmtKind::Return(value) => {
                self.line(depth, "Return Statement:");
                if let Some(value) = value {
                    self.dump_expr(*value, depth + 1);
                }
            }
        }
    }

    pub fn dump_expr(&mut self, id: ExprId, depth: usize) {
        ensure_sufficient_stack(|| self.dump_expr_inner(id, depth));
    }

    fn dump_expr_inner(&mut self, id: ExprId, depth: usize) {
        let arena = self.arena;
        match &arena.get_expr(id).kind {
            ExprKind::Literal(literal) => {
                let text = match literal {
                    Literal::Int(n) => n.to_string(),
                    Literal::Str(s) => quote(self.interner.lookup(*s)),
                    Literal::Bool(b) => b.to_string(),
                };
                self.line(depth, &format!("Literal: {text}"));
            }
            ExprKind::Unary { op, operand } => {
                self.line(depth, &format!("Unary Expression: {op}"));
                self.dump_expr(*operand, depth + 1);
            }
            ExprKind::Binary { op, left, right } => {
                self.line(depth, &format!("Binary Expression: {op}"));
                self.dump_expr(*left, depth + 1);
                self.dump_expr(*right, depth + 1);
            }
            ExprKind::Logical { op, left, right } => {
                self.line(depth, &format!("Logical Expression: {op}"));
                self.dump_expr(*left, depth + 1);
                self.dump_expr(*right, depth + 1);
            }
            ExprKind::Grouping(inner) => {
                self.line(depth, "Grouping Expression:");
                self.dump_expr(*inner, depth + 1);
            }
            ExprKind::Variable(name) => {
                let name = self.interner.lookup(*name);
                self.line(depth, &format!("Variable: {name}"));
            }
            ExprKind::Assign { name, value, .. } => {
                let name = self.interner.lookup(*name);
                self.line(depth, &format!("Assignment: {name}"));
                self.dump_expr(*value, depth + 1);
            }
            ExprKind::Call { callee, args } => {
                let args = arena.get_expr_list(*args);
                self.line(depth, &format!("Call Expression: {} arguments", args.len()));
                self.dump_expr(*callee, depth + 1);
                for &arg in args {
                    self.dump_expr(arg, depth + 1);
                }
            }
        }
    }
}

/// Dump every top-level statement of `module`.
pub fn dump_module(module: &Module, arena: &ExprArena, interner: &StringInterner) -> String {
    let mut dumper = TreeDumper::new(arena, interner, StringEmitter::new());
    for &stmt in &module.statements {
        dumper.dump_stmt(stmt, 0);
    }
    dumper.into_emitter().output()
}
