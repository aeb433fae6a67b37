//! Native functions defined in every interpreter's global frame.

use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use quill_ir::StringInterner;

use crate::{Callable, Environment, EvalResult, Interpreter, NativeFn, Value};

const PRELUDE: &[NativeFn] = &[
    NativeFn {
        name: "clock",
        arity: 0,
        func: native_clock,
    },
    NativeFn {
        name: "print",
        arity: 1,
        func: native_print,
    },
    NativeFn {
        name: "println",
        arity: 1,
        func: native_println,
    },
];

pub(crate) fn register_prelude(env: &mut Environment, interner: &StringInterner) {
    for native in PRELUDE {
        let name = interner.intern(native.name);
        env.define_global(name, Value::Callable(Rc::new(Callable::Native(*native))));
    }
}

/// Whole seconds since the UNIX epoch, as a wide integer.
fn native_clock(_: &Interpreter<'_>, _: &[Value]) -> EvalResult {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());
    Ok(Value::Wide(i64::try_from(secs).unwrap_or(i64::MAX)))
}

fn native_print(interp: &Interpreter<'_>, args: &[Value]) -> EvalResult {
    for arg in args {
        let text = arg.display(interp.interner()).to_string();
        interp.print_handler().print(&text);
    }
    Ok(Value::Int(0))
}

fn native_println(interp: &Interpreter<'_>, args: &[Value]) -> EvalResult {
    for arg in args {
        let text = arg.display(interp.interner()).to_string();
        interp.print_handler().println(&text);
    }
    Ok(Value::Int(0))
}
