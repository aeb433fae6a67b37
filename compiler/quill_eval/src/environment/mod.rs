//! Environment frames for variable scoping in the interpreter.
//!
//! A frame maps names to values and points at its enclosing frame. Frames
//! are shared: a block's frame is a child of the active frame, a call's
//! frame is a child of the callee's closure frame. Lookup and assignment walk
//! outward; declaration only ever touches the innermost frame.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use quill_ir::Name;

use crate::Value;

/// Returned by [`Scope::assign`] when no frame in the chain binds the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Undefined;

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// Wraps `Rc<RefCell<T>>` so that every frame allocation goes through
/// [`LocalScope::new`]. Not thread-safe; each interpreter runs on one thread.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope")
            .field(&Rc::as_ptr(&self.0))
            .finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single frame of variable bindings.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// A frame with no parent.
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    pub fn parent(&self) -> Option<&LocalScope<Scope>> {
        self.parent.as_ref()
    }

    /// Bind `name` in this frame, replacing any existing binding here.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.bindings.get(&name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }

    /// Overwrite the nearest binding of `name`. Never creates one.
    #[inline]
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), Undefined> {
        if let Some(slot) = self.bindings.get_mut(&name) {
            *slot = value;
            return Ok(());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow_mut().assign(name, value);
        }
        Err(Undefined)
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("bindings", &self.bindings.len())
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

/// The global frame plus a pointer to the active frame.
///
/// Changing the active frame hands back the previous one; callers restore
/// it on every exit path (see `ScopedInterpreter`).
pub struct Environment {
    global: LocalScope<Scope>,
    current: LocalScope<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        let global = LocalScope::new(Scope::new());
        Environment {
            current: global.clone(),
            global,
        }
    }

    pub fn global(&self) -> &LocalScope<Scope> {
        &self.global
    }

    /// Handle to the active frame, for closures to capture.
    pub fn current(&self) -> LocalScope<Scope> {
        self.current.clone()
    }

    /// Number of frames from the active one up to and including the global frame.
    #[cfg(test)]
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut next = self.current.borrow().parent().cloned();
        while let Some(scope) = next {
            depth += 1;
            next = scope.borrow().parent().cloned();
        }
        depth
    }

    /// Make `frame` active, returning the frame it replaces.
    #[inline]
    pub fn enter(&mut self, frame: LocalScope<Scope>) -> LocalScope<Scope> {
        std::mem::replace(&mut self.current, frame)
    }

    /// Make a fresh child of the active frame active, returning the old one.
    #[inline]
    pub fn push_scope(&mut self) -> LocalScope<Scope> {
        let child = LocalScope::new(Scope::with_parent(self.current.clone()));
        self.enter(child)
    }

    /// Reactivate a frame returned by [`Environment::enter`] or
    /// [`Environment::push_scope`].
    #[inline]
    pub fn restore(&mut self, previous: LocalScope<Scope>) {
        self.current = previous;
    }

    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.current.borrow_mut().define(name, value);
    }

    pub fn define_global(&mut self, name: Name, value: Value) {
        self.global.borrow_mut().define(name, value);
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.current.borrow().lookup(name)
    }

    #[inline]
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), Undefined> {
        self.current.borrow_mut().assign(name, value)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
