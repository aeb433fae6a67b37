//! Function call evaluation.

use quill_ir::Span;

use super::{ExecOutcome, Interpreter};
use crate::errors::{arity_mismatch, not_callable};
use crate::{CallFrame, Callable, EvalResult, LocalScope, Scope, UserFn, Value};

impl Interpreter<'_> {
    /// Call `callee` with already evaluated arguments. `span` is the call expression.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn eval_call(&mut self, callee: &Value, args: &[Value], span: Span) -> EvalResult {
        let Value::Callable(callable) = callee else {
            return Err(self.fail(not_callable(callee), span));
        };

        let expected = callable.arity();
        if args.len() != expected {
            let name = callable.name(self.interner);
            return Err(self.fail(arity_mismatch(name, expected, args.len()), span));
        }

        match &**callable {
            Callable::Native(native) => {
                tracing::trace!(name = native.name, "native call");
                (native.func)(self, args).map_err(|e| self.fail(e, span))
            }
            Callable::User(func) => self.call_function(func, args, span),
        }
    }

    /// Run a user function in a new frame chained to its closure.
    fn call_function(&mut self, func: &UserFn, args: &[Value], span: Span) -> EvalResult {
        let frame = CallFrame {
            name: func.name,
            call_span: span,
        };
        if let Err(err) = self.call_stack.push(frame) {
            return Err(self.fail(err, span));
        }
        tracing::trace!(depth = self.call_stack.depth(), "enter function");

        let scope = LocalScope::new(Scope::with_parent(func.closure.clone()));
        {
            let mut bindings = scope.borrow_mut();
            for (&param, arg) in self.arena.get_params(func.params).iter().zip(args) {
                bindings.define(param, arg.clone());
            }
        }

        let outcome = self.scoped_in(scope).execute_block(func.body);
        self.call_stack.pop();

        match outcome? {
            ExecOutcome::Returned(value) => Ok(value),
            ExecOutcome::Normal => Ok(Value::Int(0)),
        }
    }
}
