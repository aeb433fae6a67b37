//! Statement execution.

use std::rc::Rc;

use quill_ir::{ExprId, StmtId, StmtKind, StmtRange};
use quill_stack::ensure_sufficient_stack;

use super::{ExecOutcome, Interpreter};
use crate::errors::type_mismatch;
use crate::{Callable, EvalError, UserFn, Value};

impl Interpreter<'_> {
    /// Execute a statement.
    pub fn execute(&mut self, id: StmtId) -> Result<ExecOutcome, EvalError> {
        ensure_sufficient_stack(|| self.execute_inner(id))
    }

    fn execute_inner(&mut self, id: StmtId) -> Result<ExecOutcome, EvalError> {
        let arena = self.arena;
        match &arena.get_stmt(id).kind {
            StmtKind::Expression(expr) => {
                self.evaluate(*expr)?;
                Ok(ExecOutcome::Normal)
            }

            StmtKind::Var { name, init } => {
                let value = match init {
                    Some(init) => self.evaluate(*init)?,
                    None => Value::Int(0),
                };
                self.env.define(*name, value);
                Ok(ExecOutcome::Normal)
            }

            StmtKind::Block(body) => self.scoped().execute_block(*body),

            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_condition(*cond)?.is_truthy() {
                    self.execute(*then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(*else_branch)
                } else {
                    Ok(ExecOutcome::Normal)
                }
            }

            StmtKind::While { cond, body } => {
                while self.eval_condition(*cond)?.is_truthy() {
                    let outcome = self.scoped().execute(*body)?;
                    if let ExecOutcome::Returned(_) = outcome {
                        return Ok(outcome);
                    }
                }
                Ok(ExecOutcome::Normal)
            }

            StmtKind::Function { name, params, body } => {
                let func = UserFn {
                    name: *name,
                    decl: id,
                    params: *params,
                    body: *body,
                    closure: self.env.current(),
                };
                self.env
                    .define(*name, Value::Callable(Rc::new(Callable::User(func))));
                Ok(ExecOutcome::Normal)
            }

            StmtKind::Return(value) => {
                let value = match value {
                    Some(value) => self.evaluate(*value)?,
                    None => Value::Int(0),
                };
                Ok(ExecOutcome::Returned(value))
            }
        }
    }

    /// Run statements in the active frame, stopping at a `return`.
    pub(crate) fn execute_block(&mut self, body: StmtRange) -> Result<ExecOutcome, EvalError> {
        let arena = self.arena;
        for &stmt in arena.get_stmt_list(body) {
            let outcome = self.execute(stmt)?;
            if let ExecOutcome::Returned(_) = outcome {
                return Ok(outcome);
            }
        }
        Ok(ExecOutcome::Normal)
    }

    /// Condition of an `if` or `while`; must be an integer.
    fn eval_condition(&mut self, cond: ExprId) -> Result<Value, EvalError> {
        let value = self.evaluate(cond)?;
        if value.is_integer() {
            Ok(value)
        } else {
            let err = type_mismatch("integer", &value).with_note("conditions must be integers");
            Err(self.fail(err, self.arena.get_expr(cond).span))
        }
    }
}
