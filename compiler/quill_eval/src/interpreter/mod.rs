//! Tree-walking interpreter for Quill.
//!
//! Evaluation is split by node type:
//! - `expr`: expressions to values
//! - `stmt`: statements to [`ExecOutcome`]s
//! - `function_call`: call dispatch for native and user functions
//!
//! `return` is not an error: it travels back up as
//! [`ExecOutcome::Returned`] until the enclosing call consumes it.

mod builder;
mod expr;
mod function_call;
mod scope_guard;
mod stmt;

pub use builder::InterpreterBuilder;

use quill_ir::{ExprArena, Span, StmtId, StringInterner};

use crate::{CallStack, Environment, EvalError, SharedPrintHandler, Value};

/// Default limit on nested interpreted calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// Interpreter settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of nested user-function calls; `None` for unlimited.
    pub max_call_depth: Option<usize>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}

/// How a statement finished.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecOutcome {
    Normal,
    /// A `return` ran; the value unwinds to the enclosing call.
    Returned(Value),
}

/// Tree-walking interpreter.
///
/// Borrows the arena and interner of the module it runs; function values it
/// creates refer to statements in that arena.
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) arena: &'a ExprArena,
    pub(crate) env: Environment,
    pub(crate) call_stack: CallStack,
    pub(crate) print_handler: SharedPrintHandler,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with default configuration, printing to stdout.
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        InterpreterBuilder::new(interner, arena).build()
    }

    /// Execute top-level statements in order against the global frame.
    ///
    /// Stops at the first runtime error.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = statements.len()))]
    pub fn interpret(&mut self, statements: &[StmtId]) -> Result<(), EvalError> {
        for &stmt in statements {
            if let ExecOutcome::Returned(_) = self.execute(stmt)? {
                break;
            }
        }
        Ok(())
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Current value of a global, looked up by its source name.
    pub fn global(&self, name: &str) -> Option<Value> {
        let name = self.interner.intern(name);
        self.env.global().borrow().lookup(name)
    }

    /// Locate an error raised at `span` and snapshot the call stack into it.
    ///
    /// Errors that already carry a location from a deeper site keep it.
    #[cold]
    pub(crate) fn fail(&self, mut err: EvalError, span: Span) -> EvalError {
        if err.span.is_none() {
            err.span = Some(span);
        }
        self.call_stack.attach_backtrace(err, self.interner)
    }
}

#[cfg(test)]
mod tests;
