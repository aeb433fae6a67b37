//! Expression evaluation.

use std::rc::Rc;

use quill_ir::{ExprId, ExprKind, Literal, LogicalOp};
use quill_stack::ensure_sufficient_stack;
use smallvec::SmallVec;

use super::Interpreter;
use crate::errors::{type_mismatch, undefined_variable};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::{EvalResult, Value};

impl Interpreter<'_> {
    /// Evaluate an expression to a value.
    pub fn evaluate(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(id))
    }

    fn evaluate_inner(&mut self, id: ExprId) -> EvalResult {
        let arena = self.arena;
        let expr = arena.get_expr(id);
        match &expr.kind {
            ExprKind::Literal(Literal::Int(n)) => {
                Value::from_literal(*n).map_err(|e| self.fail(e, expr.span))
            }
            ExprKind::Literal(Literal::Str(s)) => Ok(Value::Str(Rc::from(self.interner.lookup(*s)))),
            ExprKind::Literal(Literal::Bool(b)) => Ok(Value::from_bool(*b)),

            ExprKind::Grouping(inner) => self.evaluate(*inner),

            ExprKind::Variable(name) => self.env.lookup(*name).ok_or_else(|| {
                self.fail(undefined_variable(self.interner.lookup(*name)), expr.span)
            }),

            ExprKind::Assign {
                name,
                name_span,
                value,
            } => {
                let value = self.evaluate(*value)?;
                if self.env.assign(*name, value.clone()).is_err() {
                    let err = undefined_variable(self.interner.lookup(*name))
                        .with_note("assignment never declares; use `var` first");
                    return Err(self.fail(err, *name_span));
                }
                Ok(value)
            }

            ExprKind::Unary { op, operand } => {
                let operand = self.evaluate(*operand)?;
                evaluate_unary(*op, &operand).map_err(|e| self.fail(e, expr.span))
            }

            ExprKind::Binary { op, left, right } => {
                let left = self.evaluate(*left)?;
                let right = self.evaluate(*right)?;
                evaluate_binary(*op, &left, &right).map_err(|e| self.fail(e, expr.span))
            }

            ExprKind::Logical { op, left, right } => {
                let left_span = arena.get_expr(*left).span;
                let left = self.evaluate(*left)?;
                if !left.is_integer() {
                    let err = type_mismatch("integer", &left)
                        .with_note(format!("left operand of `{op}` must be an integer"));
                    return Err(self.fail(err, left_span));
                }
                let decided = match op {
                    LogicalOp::And => !left.is_truthy(),
                    LogicalOp::Or => left.is_truthy(),
                };
                if decided {
                    Ok(left)
                } else {
                    self.evaluate(*right)
                }
            }

            ExprKind::Call { callee, args } => {
                let callee = self.evaluate(*callee)?;
                let mut values: SmallVec<[Value; 4]> = SmallVec::with_capacity(args.len());
                for &arg in arena.get_expr_list(*args) {
                    values.push(self.evaluate(arg)?);
                }
                self.eval_call(&callee, &values, expr.span)
            }
        }
    }
}
