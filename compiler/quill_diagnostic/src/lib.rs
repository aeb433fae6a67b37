//! Diagnostic system for Quill error reporting.
//!
//! Every failure the front end or the evaluator can produce is converted to a
//! [`Diagnostic`] before it reaches the user:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes and a call backtrace (how execution got there)
//!
//! Rendering lives in [`emitter`]; byte-offset to row/column conversion in
//! [`span_utils`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, TraceFrame};
pub use error_code::ErrorCode;
