#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::{buffer_handler, EvalErrorKind};
use pretty_assertions::assert_eq;
use quill_diagnostic::ErrorCode;
use quill_parse::parse_source;

/// Output and final result of running `source`.
struct Run {
    output: String,
    result: Result<(), EvalError>,
}

fn run_with(source: &str, max_depth: Option<usize>) -> Run {
    let interner = StringInterner::new();
    let parsed = parse_source(source, &interner);
    assert!(parsed.error.is_none(), "parse error: {:?}", parsed.error);
    let output = buffer_handler();
    let mut interpreter = InterpreterBuilder::new(&interner, &parsed.arena)
        .max_call_depth(max_depth)
        .print_handler(output.clone())
        .build();
    let result = interpreter.interpret(&parsed.module.statements);
    Run {
        output: output.get_output(),
        result,
    }
}

fn run(source: &str) -> Run {
    run_with(source, Some(DEFAULT_MAX_CALL_DEPTH))
}

fn output(source: &str) -> String {
    let run = run(source);
    if let Err(err) = run.result {
        panic!("runtime error: {err}");
    }
    run.output
}

fn error(source: &str) -> EvalError {
    run(source).result.unwrap_err()
}

// === Expressions ===

#[test]
fn arithmetic_precedence() {
    assert_eq!(output("print(1 + 2 * 3);"), "7");
    assert_eq!(output("print((1 + 2) * 3);"), "9");
    assert_eq!(output("print(-1 + 2);"), "1");
    assert_eq!(output("print(10 - 3 - 2);"), "5");
}

#[test]
fn example_program() {
    assert_eq!(output("var a = 2; var b = 3; print(a * b + 1);"), "7");
}

#[test]
fn chained_assignment() {
    assert_eq!(
        output("var a; var b; a = b = 3; print(a); print(b);"),
        "33"
    );
}

#[test]
fn assignment_yields_the_value() {
    assert_eq!(output("var a = 1; println(a = 5); println(a);"), "5\n5\n");
}

#[test]
fn booleans_are_zero_and_one() {
    assert_eq!(output("print(true); print(false); print(!true); print(!7);"), "1001");
}

#[test]
fn comparisons() {
    assert_eq!(
        output("print(1 < 2); print(2 <= 1); print(3 == 3); print(3 != 3); print(4 > 2); print(2 >= 2);"),
        "101011"
    );
}

#[test]
fn short_circuit_skips_the_right_operand() {
    assert_eq!(output("print(false and (1 / 0));"), "0");
    assert_eq!(output("print(true or (1 / 0));"), "1");
}

#[test]
fn logical_operators_return_the_deciding_operand() {
    assert_eq!(output("print(2 or 3);"), "3");
    assert_eq!(output("print(1 and 5);"), "5");
    assert_eq!(output("print(0 and 5);"), "0");
    assert_eq!(output(r#"print(1 and "yes");"#), "yes");
}

#[test]
fn logical_left_operand_must_be_integer() {
    let err = error(r#"print("a" or 1);"#);
    assert_eq!(err.code(), ErrorCode::E6002);
    assert_eq!(err.span, Some(quill_ir::Span::new(6, 9)));
}

#[test]
fn strings_print_raw() {
    assert_eq!(output(r#"println("tab\there"); print("q\"q");"#), "tab\there\nq\"q");
}

#[test]
fn wide_integers() {
    assert_eq!(output("print(3000000000 + 1);"), "3000000001");
    assert_eq!(output("print(2147483647 * 1);"), "2147483647");
}

#[test]
fn int_overflow_is_reported() {
    let err = error("print(2147483647 + 1);");
    assert_eq!(err.code(), ErrorCode::E6006);
    assert_eq!(err.span, Some(quill_ir::Span::new(6, 20)));
}

#[test]
fn division_by_zero_is_reported() {
    let err = error("var a = 1;\nprint(a / 0);");
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.span, Some(quill_ir::Span::new(17, 22)));
}

#[test]
fn arithmetic_on_strings_is_a_type_error() {
    assert_eq!(error(r#"print("a" + 1);"#).code(), ErrorCode::E6002);
    assert_eq!(error(r#"print(-"a");"#).code(), ErrorCode::E6002);
}

#[test]
fn not_on_strings_and_callables_is_a_type_error() {
    assert_eq!(error(r#"print(!"abc");"#).code(), ErrorCode::E6002);
    assert_eq!(error("print(!clock);").code(), ErrorCode::E6002);
}

// === Variables and scope ===

#[test]
fn uninitialized_var_is_zero() {
    assert_eq!(output("var a; print(a);"), "0");
}

#[test]
fn block_scope_ends_at_the_brace() {
    let err = error("{ var x = 1; } x;");
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable { name: "x".into() }
    );
    assert_eq!(err.span, Some(quill_ir::Span::new(15, 16)));
}

#[test]
fn inner_declaration_shadows() {
    assert_eq!(output("var a = 1; { var a = 2; print(a); } print(a);"), "21");
}

#[test]
fn assignment_reaches_enclosing_frame() {
    assert_eq!(output("var a = 1; { a = 2; } print(a);"), "2");
}

#[test]
fn assignment_to_undeclared_name_fails() {
    let err = error("b = 1;");
    assert_eq!(err.code(), ErrorCode::E6001);
    assert_eq!(err.span, Some(quill_ir::Span::new(0, 1)));
}

#[test]
fn redeclaring_a_global_overwrites() {
    assert_eq!(output("var a = 1; var a = a + 1; print(a);"), "2");
}

// === Control flow ===

#[test]
fn if_else() {
    assert_eq!(output("if (1) print(1); else print(2);"), "1");
    assert_eq!(output("if (0) print(1); else print(2);"), "2");
    assert_eq!(output("if (5) print(1); else print(2);"), "2");
}

#[test]
fn condition_must_be_integer() {
    assert_eq!(error(r#"if ("s") print(1);"#).code(), ErrorCode::E6002);
    assert_eq!(error("fun f() {} while (f) {}").code(), ErrorCode::E6002);
}

#[test]
fn while_loop() {
    assert_eq!(output("var i = 0; while (i < 3) { print(i); i = i + 1; }"), "012");
}

#[test]
fn for_loop_variable_is_scoped_to_the_loop() {
    assert_eq!(output("for (var i = 0; i < 3; i = i + 1) print(i);"), "012");
    assert_eq!(
        error("for (var i = 0; i < 1; i = i + 1) {} print(i);").code(),
        ErrorCode::E6001
    );
}

#[test]
fn each_iteration_gets_a_fresh_frame() {
    let source = "
        var first; var second; var i = 0;
        while (i < 2) {
            var j = i;
            fun get() { return j; }
            if (i == 0) first = get; else second = get;
            i = i + 1;
        }
        print(first()); print(second());
    ";
    assert_eq!(output(source), "01");
}

// === Functions ===

#[test]
fn function_call_and_return() {
    assert_eq!(output("fun add(a, b) { return a + b; } print(add(2, 3));"), "5");
}

#[test]
fn missing_return_yields_zero() {
    assert_eq!(output("fun f() {} print(f());"), "0");
    assert_eq!(output("fun g() { return; } print(g());"), "0");
}

#[test]
fn return_unwinds_nested_loops_and_ifs() {
    let source = "
        fun find() {
            var i = 0;
            while (true) {
                if (i == 3) { return i; }
                i = i + 1;
            }
            print(99);
        }
        print(find());
    ";
    assert_eq!(output(source), "3");
}

#[test]
fn recursion() {
    let source = "
        fun fib(n) {
            if (n < 2) return n;
            return fib(n - 1) + fib(n - 2);
        }
        print(fib(15));
    ";
    assert_eq!(output(source), "610");
}

#[test]
fn closures_capture_independent_frames() {
    let source = "
        fun makeCounter() {
            var i = 0;
            fun count() { i = i + 1; return i; }
            return count;
        }
        var a = makeCounter();
        var b = makeCounter();
        print(a()); print(a()); print(b()); print(a());
    ";
    assert_eq!(output(source), "1213");
}

#[test]
fn closure_sees_later_assignments_to_captured_frame() {
    let source = "
        var x = 1;
        fun show() { print(x); }
        x = 2;
        show();
    ";
    assert_eq!(output(source), "2");
}

#[test]
fn call_frame_parent_is_the_closure_not_the_caller() {
    let source = "
        var x = \"global\";
        fun show() { print(x); }
        fun caller() { var x = \"local\"; show(); }
        caller();
    ";
    assert_eq!(output(source), "global");
}

#[test]
fn functions_are_values() {
    assert_eq!(output("fun f() {} print(f); print(clock);"), "<fn f><native fn clock>");
    assert_eq!(output("fun f() { return 4; } var g = f; print(g());"), "4");
}

#[test]
fn call_chaining() {
    let source = "
        fun outer() { fun inner(n) { return n * 2; } return inner; }
        print(outer()(21));
    ";
    assert_eq!(output(source), "42");
}

#[test]
fn arity_mismatch() {
    let err = error("fun f(a) {}\nf();");
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            name: "f".into(),
            expected: 1,
            got: 0
        }
    );
    assert_eq!(err.span, Some(quill_ir::Span::new(12, 15)));
    assert_eq!(error("print(1, 2);").code(), ErrorCode::E6003);
}

#[test]
fn calling_a_non_function() {
    assert_eq!(error("var x = 1; x();").code(), ErrorCode::E6004);
    assert_eq!(error(r#""s"();"#).code(), ErrorCode::E6004);
}

#[test]
fn arguments_evaluate_left_to_right() {
    let source = "
        fun id(v) { print(v); return v; }
        fun three(a, b, c) { return 0; }
        three(id(1), id(2), id(3));
    ";
    assert_eq!(output(source), "123");
}

#[test]
fn error_backtrace_names_the_calls() {
    let source = "fun div(a, b) { return a / b; }\nfun outer() { return div(1, 0); }\nouter();";
    let err = error(source);
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    let names: Vec<_> = err.backtrace.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["div", "outer"]);
    assert_eq!(err.backtrace[1].call_span, quill_ir::Span::new(66, 73));
}

// === Limits ===

#[test]
fn default_depth_limit() {
    let source = "fun down(n) { if (n == 0) return 0; return down(n - 1); }";
    assert_eq!(output(&format!("{source} print(down(998));")), "0");

    let err = error(&format!("{source} down(1000);"));
    assert_eq!(err.kind, EvalErrorKind::StackOverflow { depth: 1000 });
    assert_eq!(err.backtrace.len(), 1000);
}

#[test]
fn configured_depth_limit() {
    let run = run_with("fun r(n) { return r(n + 1); } r(0);", Some(50));
    let err = run.result.unwrap_err();
    assert_eq!(err.code(), ErrorCode::E6007);
    assert_eq!(err.backtrace.len(), 50);
}

#[test]
fn unlimited_depth_relies_on_stack_growth() {
    let run = run_with(
        "fun down(n) { if (n == 0) return 7; return down(n - 1); } print(down(10000));",
        None,
    );
    assert!(run.result.is_ok());
    assert_eq!(run.output, "7");
}

// === Interpreter state ===

#[test]
fn errors_stop_execution() {
    let run = run("print(1); missing; print(2);");
    assert_eq!(run.output, "1");
    assert_eq!(run.result.unwrap_err().code(), ErrorCode::E6001);
}

#[test]
fn frames_are_restored_after_errors() {
    let interner = StringInterner::new();
    let parsed = parse_source("fun f() { { { nope; } } } f();", &interner);
    let mut interpreter = InterpreterBuilder::new(&interner, &parsed.arena)
        .print_handler(crate::silent_handler())
        .build();
    assert!(interpreter.interpret(&parsed.module.statements).is_err());
    assert_eq!(interpreter.env().depth(), 1);
    assert!(interpreter.call_stack.is_empty());
}

#[test]
fn globals_are_visible_to_the_embedder() {
    let interner = StringInterner::new();
    let parsed = parse_source("var answer = 6 * 7;", &interner);
    let mut interpreter = Interpreter::new(&interner, &parsed.arena);
    interpreter.interpret(&parsed.module.statements).unwrap();
    assert_eq!(interpreter.global("answer"), Some(Value::Int(42)));
    assert_eq!(interpreter.global("missing"), None);
    assert!(interpreter.global("println").is_some());
}

#[test]
fn clock_returns_wide_seconds() {
    let interner = StringInterner::new();
    let parsed = parse_source("var now = clock();", &interner);
    let mut interpreter = Interpreter::new(&interner, &parsed.arena);
    interpreter.interpret(&parsed.module.statements).unwrap();
    match interpreter.global("now") {
        Some(Value::Wide(secs)) => assert!(secs > 1_600_000_000),
        other => panic!("unexpected clock value {other:?}"),
    }
}

#[test]
fn separate_interpreters_do_not_share_globals() {
    let interner = StringInterner::new();
    let parsed = parse_source("var x = 1;", &interner);
    let mut first = Interpreter::new(&interner, &parsed.arena);
    first.interpret(&parsed.module.statements).unwrap();
    let second = Interpreter::new(&interner, &parsed.arena);
    assert!(first.global("x").is_some());
    assert!(second.global("x").is_none());
}

#[test]
fn evaluate_and_execute_directly() {
    let interner = StringInterner::new();
    let parsed = parse_source("1 + 2; fun f() { return 9; }", &interner);
    let mut interpreter = Interpreter::new(&interner, &parsed.arena);
    let stmts = &parsed.module.statements;
    let quill_ir::StmtKind::Expression(expr) = parsed.arena.get_stmt(stmts[0]).kind else {
        panic!("expected an expression statement");
    };
    assert_eq!(interpreter.evaluate(expr).unwrap(), Value::Int(3));
    assert_eq!(interpreter.execute(stmts[1]).unwrap(), ExecOutcome::Normal);
    assert!(matches!(interpreter.global("f"), Some(Value::Callable(_))));
}
