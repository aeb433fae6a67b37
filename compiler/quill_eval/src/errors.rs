//! Runtime errors.
//!
//! `EvalErrorKind` is the structured category; the factory functions below
//! are the way the evaluator builds errors. They are `#[cold]` so the happy
//! path stays compact.

use std::fmt;

use quill_diagnostic::{Diagnostic, ErrorCode, TraceFrame};
use quill_ir::{BinaryOp, Span};

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Backtraces longer than this are elided in the middle when rendered.
const MAX_RENDERED_FRAMES: usize = 16;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    UndefinedVariable {
        name: String,
    },
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    NotCallable {
        type_name: &'static str,
    },
    DivisionByZero,
    IntegerOverflow {
        operation: &'static str,
    },
    StackOverflow {
        depth: usize,
    },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UndefinedVariable { .. } => ErrorCode::E6001,
            Self::TypeMismatch { .. } => ErrorCode::E6002,
            Self::ArityMismatch { .. } => ErrorCode::E6003,
            Self::NotCallable { .. } => ErrorCode::E6004,
            Self::DivisionByZero => ErrorCode::E6005,
            Self::IntegerOverflow { .. } => ErrorCode::E6006,
            Self::StackOverflow { .. } => ErrorCode::E6007,
        }
    }

    /// Text for the caret label under the offending source.
    fn label(&self) -> &'static str {
        match self {
            Self::UndefinedVariable { .. } => "not found in this scope",
            Self::TypeMismatch { .. } => "wrong type here",
            Self::ArityMismatch { .. } => "called here",
            Self::NotCallable { .. } => "called here",
            Self::DivisionByZero => "divisor is zero",
            Self::IntegerOverflow { .. } => "result does not fit",
            Self::StackOverflow { .. } => "call exceeds the depth limit",
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "undefined variable '{name}'"),
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{name} expects {expected} {arg_word}, got {got}")
            }
            Self::NotCallable { type_name } => write!(f, "{type_name} is not callable"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
            Self::StackOverflow { depth } => {
                write!(f, "maximum call depth exceeded (limit: {depth})")
            }
        }
    }
}

/// One call in the chain that led to an error, most recent first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Name of the called function.
    pub name: String,
    /// Where it was called from.
    pub call_span: Span,
}

/// Runtime error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Source location where the error occurred.
    pub span: Option<Span>,
    /// Call stack at the error site, most recent call first.
    pub backtrace: Vec<BacktraceFrame>,
    pub notes: Vec<String>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            span: None,
            backtrace: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: Vec<BacktraceFrame>) -> Self {
        self.backtrace = backtrace;
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.message());
        if let Some(span) = self.span {
            diag = diag.with_label(span, self.kind.label());
        }
        for note in &self.notes {
            diag = diag.with_note(note.clone());
        }

        let frames = &self.backtrace;
        if frames.len() > MAX_RENDERED_FRAMES {
            let head = MAX_RENDERED_FRAMES / 2;
            let tail = frames.len() - head;
            let mut trace: Vec<_> = frames[..head].iter().map(to_trace_frame).collect();
            trace.extend(frames[tail..].iter().map(to_trace_frame));
            diag = diag
                .with_trace(trace)
                .with_note(format!("{} intermediate calls omitted", tail - head));
        } else if !frames.is_empty() {
            diag = diag.with_trace(frames.iter().map(to_trace_frame).collect());
        }
        diag
    }
}

fn to_trace_frame(frame: &BacktraceFrame) -> TraceFrame {
    TraceFrame::new(frame.name.clone(), frame.call_span)
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for EvalError {}

// Factory functions

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_owned(),
    })
}

#[cold]
pub fn type_mismatch(expected: &'static str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected,
        got: got.type_name(),
    })
}

/// A binary operator applied to a non-integer operand.
#[cold]
pub fn operand_not_integer(op: BinaryOp, got: &Value) -> EvalError {
    type_mismatch("integer", got).with_note(format!(
        "operator `{}` requires integer operands",
        op.as_symbol()
    ))
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_owned(),
        expected,
        got,
    })
}

#[cold]
pub fn not_callable(got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: got.type_name(),
    })
    .with_note("only functions can be called")
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: op.as_symbol(),
    })
}

#[cold]
pub fn negation_overflow() -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation: "-" })
}

#[cold]
pub fn integer_overflow_literal() -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: "literal",
    })
}

#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
        .with_note("the limit can be changed with --max-depth")
}

#[cfg(test)]
mod tests;
