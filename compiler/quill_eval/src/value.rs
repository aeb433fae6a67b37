//! Runtime values.
//!
//! The value domain is closed: two widths of signed integer, shared strings
//! and callables. Values are cheap to clone; strings and callables are
//! reference counted.

use std::fmt;
use std::rc::Rc;

use quill_ir::{Name, ParamRange, StmtId, StmtRange, StringInterner};

use crate::environment::{LocalScope, Scope};
use crate::errors::{integer_overflow_literal, EvalResult};
use crate::Interpreter;

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    /// 32-bit integer. Literals that fit, and `true`/`false` as 1/0.
    Int(i32),
    /// 64-bit integer. Large literals and anything computed from one.
    Wide(i64),
    Str(Rc<str>),
    Callable(Rc<Callable>),
}

impl Value {
    /// Value of an integer literal: `Int` when it fits in 32 bits, `Wide` otherwise.
    pub fn from_literal(n: u64) -> EvalResult {
        if let Ok(small) = i32::try_from(n) {
            return Ok(Value::Int(small));
        }
        i64::try_from(n)
            .map(Value::Wide)
            .map_err(|_| integer_overflow_literal())
    }

    #[inline]
    pub fn from_bool(b: bool) -> Self {
        Value::Int(i32::from(b))
    }

    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    /// Truthiness: exactly the integer 1, at either width.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        matches!(self, Value::Int(1) | Value::Wide(1))
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Wide(_))
    }

    /// The integer value widened to 64 bits, or `None` for non-integers.
    #[inline]
    pub fn as_wide(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(i64::from(*n)),
            Value::Wide(n) => Some(*n),
            Value::Str(_) | Value::Callable(_) => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Wide(_) => "wide int",
            Value::Str(_) => "string",
            Value::Callable(_) => "function",
        }
    }

    /// Render the value the way `print` does.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> ValueDisplay<'a> {
        ValueDisplay {
            value: self,
            interner,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Wide(a), Value::Wide(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Callable(a), Value::Callable(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Wide(n) => write!(f, "Wide({n})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Callable(c) => write!(f, "Callable({c:?})"),
        }
    }
}

/// `Display` adapter returned by [`Value::display`].
pub struct ValueDisplay<'a> {
    value: &'a Value,
    interner: &'a StringInterner,
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Int(n) => write!(f, "{n}"),
            Value::Wide(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Callable(c) => match &**c {
                Callable::Native(native) => write!(f, "<native fn {}>", native.name),
                Callable::User(func) => write!(f, "<fn {}>", self.interner.lookup(func.name)),
            },
        }
    }
}

/// Host function signature. Arity has been checked before the call.
pub type NativeFnPtr = fn(&Interpreter<'_>, &[Value]) -> EvalResult;

/// A function implemented by the host.
#[derive(Copy, Clone)]
pub struct NativeFn {
    pub name: &'static str,
    pub arity: usize,
    pub func: NativeFnPtr,
}

/// A function declared in Quill source.
#[derive(Clone)]
pub struct UserFn {
    pub name: Name,
    /// The `fun` statement this function came from.
    pub decl: StmtId,
    pub params: ParamRange,
    pub body: StmtRange,
    /// Frame that was active at the declaration.
    pub closure: LocalScope<Scope>,
}

pub enum Callable {
    Native(NativeFn),
    User(UserFn),
}

impl Callable {
    pub fn arity(&self) -> usize {
        match self {
            Callable::Native(native) => native.arity,
            Callable::User(func) => func.params.len(),
        }
    }

    pub fn name<'a>(&'a self, interner: &'a StringInterner) -> &'a str {
        match self {
            Callable::Native(native) => native.name,
            Callable::User(func) => interner.lookup(func.name),
        }
    }
}

// Closure frames can reach the function that captured them, so the
// environment is deliberately left out.
impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Native(native) => f
                .debug_struct("Native")
                .field("name", &native.name)
                .field("arity", &native.arity)
                .finish(),
            Callable::User(func) => f
                .debug_struct("User")
                .field("name", &func.name)
                .field("decl", &func.decl)
                .field("arity", &func.params.len())
                .finish_non_exhaustive(),
        }
    }
}
