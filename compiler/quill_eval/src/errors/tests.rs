use super::*;
use pretty_assertions::assert_eq;
use quill_diagnostic::Label;

#[test]
fn factory_codes() {
    assert_eq!(undefined_variable("x").code(), ErrorCode::E6001);
    assert_eq!(type_mismatch("integer", &Value::string("s")).code(), ErrorCode::E6002);
    assert_eq!(arity_mismatch("f", 1, 2).code(), ErrorCode::E6003);
    assert_eq!(not_callable(&Value::Int(1)).code(), ErrorCode::E6004);
    assert_eq!(division_by_zero().code(), ErrorCode::E6005);
    assert_eq!(integer_overflow(BinaryOp::Mul).code(), ErrorCode::E6006);
    assert_eq!(recursion_limit_exceeded(10).code(), ErrorCode::E6007);
}

#[test]
fn messages() {
    assert_eq!(undefined_variable("x").message(), "undefined variable 'x'");
    assert_eq!(
        type_mismatch("integer", &Value::string("s")).message(),
        "type mismatch: expected integer, got string"
    );
    assert_eq!(arity_mismatch("f", 1, 2).message(), "f expects 1 argument, got 2");
    assert_eq!(
        arity_mismatch("add", 2, 0).message(),
        "add expects 2 arguments, got 0"
    );
    assert_eq!(not_callable(&Value::Int(1)).message(), "int is not callable");
    assert_eq!(
        integer_overflow(BinaryOp::Add).to_string(),
        "integer overflow in +"
    );
    assert_eq!(
        recursion_limit_exceeded(1000).to_string(),
        "maximum call depth exceeded (limit: 1000)"
    );
}

#[test]
fn operand_error_names_the_operator() {
    let err = operand_not_integer(BinaryOp::Lt, &Value::string("a"));
    assert_eq!(err.kind.code(), ErrorCode::E6002);
    assert_eq!(err.notes, vec!["operator `<` requires integer operands".to_owned()]);
}

#[test]
fn diagnostic_carries_span_notes_and_trace() {
    let mut err = division_by_zero().with_backtrace(vec![BacktraceFrame {
            name: "f".into(),
            call_span: Span::new(20, 23),
        }]);
    err.span = Some(Span::new(4, 9));
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E6005);
    assert_eq!(diag.message, "division by zero");
    assert_eq!(diag.labels, vec![Label::new(Span::new(4, 9), "divisor is zero")]);
    assert_eq!(diag.trace, vec![TraceFrame::new("f", Span::new(20, 23))]);
}

#[test]
fn long_backtraces_are_elided() {
    let frames: Vec<_> = (0..100u32)
        .map(|i| BacktraceFrame {
            name: format!("f{i}"),
            call_span: Span::new(i, i + 1),
        })
        .collect();
    let diag = recursion_limit_exceeded(100)
        .with_backtrace(frames)
        .to_diagnostic();
    assert_eq!(diag.trace.len(), MAX_RENDERED_FRAMES);
    assert_eq!(diag.trace[0].name, "f0");
    assert_eq!(diag.trace[MAX_RENDERED_FRAMES - 1].name, "f99");
    assert!(diag
        .notes
        .iter()
        .any(|n| n == "84 intermediate calls omitted"));
}

#[test]
fn no_span_means_no_label() {
    let diag = undefined_variable("y").to_diagnostic();
    assert!(diag.labels.is_empty());
    assert!(diag.trace.is_empty());
}
