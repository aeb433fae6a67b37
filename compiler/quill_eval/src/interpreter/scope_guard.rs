//! RAII-style scope guards for Interpreter environment management.
//!
//! [`ScopedInterpreter`] makes a frame active and reactivates the previous
//! one when dropped, so the active frame is restored after normal
//! completion, a `return`, an error propagated with `?`, or a panic.

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::{LocalScope, Scope};

/// Access the interpreter through this guard; it implements `Deref` and `DerefMut`.
pub(crate) struct ScopedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
    previous: Option<LocalScope<Scope>>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.interpreter.env.restore(previous);
        }
    }
}

impl<'interp> Deref for ScopedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Run in a fresh child of the active frame (block scope).
    pub(crate) fn scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        let previous = self.env.push_scope();
        ScopedInterpreter {
            interpreter: self,
            previous: Some(previous),
        }
    }

    /// Run in `frame` (call scope).
    pub(crate) fn scoped_in(&mut self, frame: LocalScope<Scope>) -> ScopedInterpreter<'_, 'a> {
        let previous = self.env.enter(frame);
        ScopedInterpreter {
            interpreter: self,
            previous: Some(previous),
        }
    }
}
