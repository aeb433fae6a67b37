#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;
use quill_ir::{StmtKind, StringInterner};
use quill_parse::parse_source;

use super::*;

fn fmt(source: &str) -> String {
    let interner = StringInterner::new();
    let output = parse_source(source, &interner);
    assert!(!output.has_errors(), "{:?}", output.error);
    format_module(&output.module, &output.arena, &interner)
}

#[test]
fn normalises_spacing() {
    assert_eq!(
        fmt("var   x=1+2*  3;print( x ,\"a\" );"),
        "var x = 1 + 2 * 3;\nprint(x, \"a\");\n"
    );
}

#[test]
fn keeps_source_parentheses_only() {
    assert_eq!(fmt("((1 + 2)) * -(3);"), "((1 + 2)) * -(3);\n");
    assert_eq!(fmt("1 + 2 * 3;"), "1 + 2 * 3;\n");
}

#[test]
fn blocks_indent_and_close_on_their_own_line() {
    assert_eq!(
        fmt("{ var a = 1; { a = a + 1; } {} }"),
        "\
{
    var a = 1;
    {
        a = a + 1;
    }
    {}
}
"
    );
}

#[test]
fn if_else_chains() {
    assert_eq!(fmt("if (a) b; else c;"), "if (a) b; else c;\n");
    assert_eq!(
        fmt("if (a) { b; } else if (c) { d; }"),
        "\
if (a) {
    b;
} else if (c) {
    d;
}
"
    );
}

#[test]
fn for_loop_comes_back_lowered() {
    assert_eq!(
        fmt("for (var i = 0; i < 3; i = i + 1) print(i);"),
        "\
{
    var i = 0;
    while (i < 3) {
        print(i);
        i = i + 1;
    }
}
"
    );
    assert_eq!(fmt("for (;;) x;"), "while (true) x;\n");
}

#[test]
fn functions_are_set_apart_by_blank_lines() {
    assert_eq!(
        fmt("var a = 1; fun f(x, y) { return x and y; } fun g() {} var b;"),
        "\
var a = 1;

fun f(x, y) {
    return x and y;
}

fun g() {}

var b;
"
    );
}

#[test]
fn nested_function_and_bare_return() {
    assert_eq!(
        fmt("fun outer() { fun inner() { return; } return inner; }"),
        "\
fun outer() {
    fun inner() {
        return;
    }
    return inner;
}
"
    );
}

#[test]
fn calls_chain_and_assignments_nest() {
    assert_eq!(fmt("a = b = f(1)(2, g());"), "a = b = f(1)(2, g());\n");
    assert_eq!(fmt("!!x or y and -z;"), "!!x or y and -z;\n");
}

#[test]
fn string_escapes_are_reproduced() {
    assert_eq!(
        fmt(r#"print("tab\there \"q\" back\\slash\nend\0");"#),
        "print(\"tab\\there \\\"q\\\" back\\\\slash\\nend\\0\");\n"
    );
}

#[test]
fn quote_escapes_control_characters() {
    assert_eq!(quote("a\r\nb"), "\"a\\r\\nb\"");
    assert_eq!(quote(""), "\"\"");
}

#[test]
fn formatting_is_idempotent() {
    let source = "
        // comment dropped
        fun fib(n) {
            if (n < 2) return n;
            return fib(n - 1)
                + fib(n - 2);
        }
        for (var i = 0; i < 10; i = i + 1) { println(fib(i)); }
    ";
    let once = fmt(source);
    assert_eq!(fmt(&once), once);
}

#[test]
fn format_single_expression() {
    let interner = StringInterner::new();
    let output = parse_source("f(a, (b));", &interner);
    let stmt = *output.module.statements.first().unwrap();
    let StmtKind::Expression(expr) = output.arena.get_stmt(stmt).kind else {
        panic!("expected an expression statement");
    };
    assert_eq!(format_expr(expr, &output.arena, &interner), "f(a, (b))");
}

#[test]
fn empty_module_formats_to_nothing() {
    assert_eq!(fmt(""), "");
    assert_eq!(fmt("// only a comment\n"), "");
}
