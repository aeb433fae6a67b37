//! Stack growth for deeply nested programs.
//!
//! The parser recurses once per nesting level of the source and the
//! evaluator once per nested expression or interpreted call. Both wrap their
//! recursive entry points in [`ensure_sufficient_stack`] so a script like
//! `((((...))))` or a long recursive countdown cannot overflow the host stack
//! before the interpreter's own call-depth limit is reached.
//!
//! On wasm the wrapper is a plain call.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
