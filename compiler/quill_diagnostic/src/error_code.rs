//! Error codes for all Quill diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase that raised it.

use std::fmt;

/// Error codes for all Quill diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime / eval errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Integer literal too large
    E0003,
    /// Unterminated block comment
    E0004,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unterminated block
    E1003,
    /// Expected identifier
    E1004,
    /// Invalid assignment target
    E1005,
    /// Too many call arguments
    E1006,
    /// Too many function parameters
    E1007,
    /// `return` outside of a function body
    E1008,

    // Runtime Errors (E6xxx)
    /// Undefined variable
    E6001,
    /// Operand type mismatch
    E6002,
    /// Wrong number of call arguments
    E6003,
    /// Value is not callable
    E6004,
    /// Division by zero
    E6005,
    /// Integer overflow
    E6006,
    /// Call depth limit exceeded
    E6007,
}

impl ErrorCode {
    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
        }
    }

    /// One-line description, used when a diagnostic carries no message.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid character in source",
            ErrorCode::E0003 => "integer literal too large",
            ErrorCode::E0004 => "unterminated block comment",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unterminated block",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E1005 => "invalid assignment target",
            ErrorCode::E1006 => "too many arguments",
            ErrorCode::E1007 => "too many parameters",
            ErrorCode::E1008 => "return outside of a function",
            ErrorCode::E6001 => "undefined variable",
            ErrorCode::E6002 => "type mismatch",
            ErrorCode::E6003 => "wrong number of arguments",
            ErrorCode::E6004 => "value is not callable",
            ErrorCode::E6005 => "division by zero",
            ErrorCode::E6006 => "integer overflow",
            ErrorCode::E6007 => "maximum call depth exceeded",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
