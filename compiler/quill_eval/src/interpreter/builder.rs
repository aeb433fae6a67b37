//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::{EvalConfig, Interpreter};
use crate::prelude::register_prelude;
use crate::{stdout_handler, CallStack, Environment, SharedPrintHandler};
use quill_ir::{ExprArena, StringInterner};

/// Builder for [`Interpreter`].
///
/// Every interpreter gets its own global frame with the prelude natives
/// defined in it; nothing is shared between instances except what the
/// caller passes in.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    config: EvalConfig,
    print_handler: Option<SharedPrintHandler>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        Self {
            interner,
            arena,
            config: EvalConfig::default(),
            print_handler: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.config.max_call_depth = depth;
        self
    }

    /// Where `print`/`println` write. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        let mut env = Environment::new();
        register_prelude(&mut env, self.interner);
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            env,
            call_stack: CallStack::new(self.config.max_call_depth),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
