//! Quill Eval - tree-walking interpreter.
//!
//! Walks the arena AST produced by `quill_parse` against a chain of
//! environment frames. Every user function closes over the frame that was
//! active where it was declared; calls run in a fresh frame whose parent is
//! that closure frame, never the caller's.
//!
//! # Example
//!
//! ```
//! use quill_eval::{buffer_handler, InterpreterBuilder};
//! use quill_ir::StringInterner;
//!
//! let interner = StringInterner::new();
//! let parsed = quill_parse::parse_source("var a = 2; var b = 3; print(a * b + 1);", &interner);
//! assert!(!parsed.has_errors());
//!
//! let output = buffer_handler();
//! let mut interpreter = InterpreterBuilder::new(&interner, &parsed.arena)
//!     .print_handler(output.clone())
//!     .build();
//! interpreter.interpret(&parsed.module.statements).unwrap();
//! assert_eq!(output.get_output(), "7");
//! ```

mod call_stack;
mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod prelude;
mod print_handler;
mod value;

pub use call_stack::{CallFrame, CallStack};
pub use environment::{Environment, LocalScope, Scope, Undefined};
pub use errors::{BacktraceFrame, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{
    EvalConfig, ExecOutcome, Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH,
};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{Callable, NativeFn, NativeFnPtr, UserFn, Value, ValueDisplay};
