#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Tests can panic"
)]

//! End-to-end tests driving the `quill` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn quill(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quill"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn quill")
}

fn write_script(dir: &TempDir, name: &str, source: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, source).expect("failed to write script");
    path
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn run_prints_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "fib.quill",
        "fun fib(n) {\n  if (n < 2) return n;\n  return fib(n - 1) + fib(n - 2);\n}\nprintln(fib(10));\n",
    );
    let output = quill(&["run", arg(&script)]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "55\n");
}

#[test]
fn bare_script_path_runs_it() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "hello.quill", "print(\"hello\");");
    let output = quill(&[arg(&script)]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "hello");
}

#[test]
fn runtime_error_exits_nonzero_with_diagnostic() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "bad.quill", "println(1);\nprintln(missing);\n");
    let output = quill(&["run", arg(&script)]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "1\n");
    let err = stderr(&output);
    assert!(err.contains("[E6001]"), "{err}");
    assert!(err.contains("undefined variable 'missing'"), "{err}");
    assert!(err.contains("bad.quill:2:9"), "{err}");
}

#[test]
fn max_depth_flag_limits_recursion() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "deep.quill",
        "fun down(n) { if (n > 0) down(n - 1); }\ndown(100);\nprintln(\"done\");\n",
    );
    let ok = quill(&["run", arg(&script)]);
    assert!(ok.status.success(), "{}", stderr(&ok));
    assert_eq!(stdout(&ok), "done\n");

    let limited = quill(&["run", "--max-depth=20", arg(&script)]);
    assert!(!limited.status.success());
    assert!(stderr(&limited).contains("[E6007]"), "{}", stderr(&limited));
}

#[test]
fn several_scripts_report_in_argument_order() {
    let dir = TempDir::new().unwrap();
    let scripts: Vec<PathBuf> = (0..6)
        .map(|i| {
            write_script(
                &dir,
                &format!("s{i}.quill"),
                &format!("var total = 0;\nfor (var k = 0; k < 1000; k = k + 1) total = total + k;\nprintln({i});\n"),
            )
        })
        .collect();
    let mut args = vec!["run"];
    args.extend(scripts.iter().map(|p| arg(p)));
    let output = quill(&args);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "0\n1\n2\n3\n4\n5\n");
}

#[test]
fn one_failing_script_fails_the_batch() {
    let dir = TempDir::new().unwrap();
    let good = write_script(&dir, "good.quill", "println(\"good\");");
    let bad = write_script(&dir, "bad.quill", "println(1 / 0);");
    let output = quill(&["run", arg(&good), arg(&bad)]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "good\n");
    assert!(stderr(&output).contains("[E6005]"), "{}", stderr(&output));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.quill");
    let output = quill(&["run", arg(&missing)]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("cannot find file"), "{}", stderr(&output));
}

#[test]
fn parse_dumps_the_tree() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "expr.quill", "var a = 1 + 2;");
    let output = quill(&["parse", arg(&script)]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Variable Declaration: a\n  Initializer:\n    Binary Expression: +\n      Literal: 1\n      Literal: 2\n"
    );
}

#[test]
fn parse_reports_syntax_errors() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "broken.quill", "var a = 1;\nprint(a\n");
    let output = quill(&["parse", arg(&script)]);
    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        "Variable Declaration: a\n  Initializer:\n    Literal: 1\n"
    );
    assert!(stderr(&output).contains("[E1001]"), "{}", stderr(&output));
}

#[test]
fn lex_lists_tokens() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "tokens.quill", "x = 1;");
    let output = quill(&["lex", arg(&script)]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "1:1 SYMBOL 'x'\n1:3 PUNCT '='\n1:5 INT '1'\n1:6 PUNCT ';'\n1:7 END ''\n"
    );
}

#[test]
fn fmt_prints_canonical_source_and_checks() {
    let dir = TempDir::new().unwrap();
    let messy = write_script(&dir, "messy.quill", "var   x=1;if(x==1){println( x );}");
    let output = quill(&["fmt", arg(&messy)]);
    assert!(output.status.success());
    let formatted = stdout(&output);
    assert_eq!(formatted, "var x = 1;\nif (x == 1) {\n    println(x);\n}\n");

    let check = quill(&["fmt", "--check", arg(&messy)]);
    assert!(!check.status.success());

    let clean = write_script(&dir, "clean.quill", &formatted);
    let check = quill(&["fmt", "--check", arg(&clean)]);
    assert!(check.status.success(), "{}", stderr(&check));
}

#[test]
fn unknown_command_prints_usage() {
    let output = quill(&["frobnicate"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown command 'frobnicate'"));
    assert!(stdout(&output).contains("Usage: quill <command>"));
}

#[test]
fn run_without_files_is_a_usage_error() {
    let output = quill(&["run"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("usage: quill run"), "{}", stderr(&output));
}
