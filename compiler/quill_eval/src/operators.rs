//! Arithmetic, comparison and prefix operators on values.
//!
//! Operands must be integers. Two `Int`s compute in 32 bits; if either side
//! is `Wide` both are widened and the result is `Wide`. Every arithmetic
//! operation is checked.

use quill_ir::{BinaryOp, UnaryOp};

use crate::errors::{
    division_by_zero, integer_overflow, negation_overflow, operand_not_integer, type_mismatch,
    EvalError, EvalResult,
};
use crate::Value;

/// Both operands as `i64`, plus whether the result should be wide.
fn integer_operands(
    op: BinaryOp,
    left: &Value,
    right: &Value,
) -> Result<(i64, i64, bool), EvalError> {
    let Some(a) = left.as_wide() else {
        return Err(operand_not_integer(op, left));
    };
    let Some(b) = right.as_wide() else {
        return Err(operand_not_integer(op, right));
    };
    let wide = matches!(left, Value::Wide(_)) || matches!(right, Value::Wide(_));
    Ok((a, b, wide))
}

pub(crate) fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    let (a, b, wide) = integer_operands(op, left, right)?;

    let result = match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            a.checked_div(b)
        }
        BinaryOp::Eq => return Ok(Value::from_bool(a == b)),
        BinaryOp::NotEq => return Ok(Value::from_bool(a != b)),
        BinaryOp::Lt => return Ok(Value::from_bool(a < b)),
        BinaryOp::LtEq => return Ok(Value::from_bool(a <= b)),
        BinaryOp::Gt => return Ok(Value::from_bool(a > b)),
        BinaryOp::GtEq => return Ok(Value::from_bool(a >= b)),
    };

    let n = result.ok_or_else(|| integer_overflow(op))?;
    if wide {
        Ok(Value::Wide(n))
    } else {
        i32::try_from(n)
            .map(Value::Int)
            .map_err(|_| integer_overflow(op))
    }
}

pub(crate) fn evaluate_unary(op: UnaryOp, operand: &Value) -> EvalResult {
    match op {
        UnaryOp::Not => match operand {
            Value::Int(_) | Value::Wide(_) => Ok(Value::from_bool(!operand.is_truthy())),
            Value::Str(_) | Value::Callable(_) => Err(type_mismatch("integer", operand)
                .with_note("unary `!` requires an integer operand")),
        },
        UnaryOp::Neg => match operand {
            Value::Int(n) => n.checked_neg().map(Value::Int).ok_or_else(negation_overflow),
            Value::Wide(n) => n.checked_neg().map(Value::Wide).ok_or_else(negation_overflow),
            Value::Str(_) | Value::Callable(_) => Err(type_mismatch("integer", operand)
                .with_note("unary `-` requires an integer operand")),
        },
    }
}
