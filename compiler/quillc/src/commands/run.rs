//! The `run` command: parse and evaluate Quill scripts.
//!
//! One script runs on the calling thread and prints as it goes. Several
//! scripts run in parallel, each with a buffered print handler, and their
//! output is replayed in argument order once all of them have finished.

use std::io::Write;

use quill_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use quill_eval::{
    buffer_handler, stdout_handler, EvalConfig, InterpreterBuilder, SharedPrintHandler,
};
use quill_ir::StringInterner;
use quill_parse::parse_source;
use rayon::prelude::*;

use super::{read_file, stderr_emitter, Status};
use crate::{CliError, CliResult};

const RUN_USAGE: &str = "quill run <file>... [--max-depth=N|none]";

/// Arguments of `quill run`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunArgs {
    pub files: Vec<String>,
    pub config: EvalConfig,
}

/// Parse the arguments following `run`.
pub fn parse_run_args(args: &[String]) -> CliResult<RunArgs> {
    let mut files = Vec::new();
    let mut config = EvalConfig::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            config.max_call_depth = parse_depth(value)?;
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else {
            files.push(arg.clone());
        }
    }
    if files.is_empty() {
        return Err(CliError::Usage(RUN_USAGE));
    }
    Ok(RunArgs { files, config })
}

fn parse_depth(value: &str) -> CliResult<Option<usize>> {
    if value == "none" {
        return Ok(None);
    }
    match value.parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(Some(depth)),
        _ => Err(CliError::InvalidDepth(value.to_owned())),
    }
}

/// Parse and evaluate one script, reporting any error through `emitter`.
pub fn run_source<W: Write>(
    path: &str,
    source: &str,
    config: EvalConfig,
    print_handler: SharedPrintHandler,
    emitter: &mut TerminalEmitter<W>,
) -> Status {
    tracing::debug!(path, "running script");
    let interner = StringInterner::new();
    let output = parse_source(source, &interner);
    if let Some(error) = &output.error {
        tracing::debug!(path, code = %error.code(), "parse failed");
        emitter.emit(&error.to_diagnostic());
        emitter.flush();
        return Status::Failure;
    }

    let mut interpreter = InterpreterBuilder::new(&interner, &output.arena)
        .config(config)
        .print_handler(print_handler)
        .build();
    let status = match interpreter.interpret(&output.module.statements) {
        Ok(()) => Status::Success,
        Err(error) => {
            emitter.emit(&error.to_diagnostic());
            emitter.flush();
            Status::Failure
        }
    };
    tracing::debug!(path, success = status.is_success(), "script finished");
    status
}

/// Captured result of a script run off the main thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptReport {
    pub status: Status,
    /// Everything the script printed.
    pub output: String,
    /// Rendered diagnostics, uncolored.
    pub diagnostics: String,
}

fn run_buffered(path: &str, config: EvalConfig) -> CliResult<ScriptReport> {
    let source = read_file(path)?;
    let handler = buffer_handler();
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source(path, source.as_str());
    let status = run_source(path, &source, config, handler.clone(), &mut emitter);
    Ok(ScriptReport {
        status,
        output: handler.get_output(),
        diagnostics: String::from_utf8_lossy(&emitter.into_inner()).into_owned(),
    })
}

/// Run every script named in `args`.
///
/// A missing or unreadable file is an error when it is the only script;
/// among several it is reported and counted as a failure.
pub fn run_files(args: &RunArgs) -> CliResult<Status> {
    if let [path] = args.files.as_slice() {
        let source = read_file(path)?;
        let mut emitter = stderr_emitter(path, &source);
        return Ok(run_source(
            path,
            &source,
            args.config,
            stdout_handler(),
            &mut emitter,
        ));
    }

    let config = args.config;
    let reports: Vec<_> = args
        .files
        .par_iter()
        .map(|path| run_buffered(path, config))
        .collect();

    let mut status = Status::Success;
    let mut stdout = std::io::stdout().lock();
    for report in reports {
        match report {
            Ok(report) => {
                let _ = stdout.write_all(report.output.as_bytes());
                let _ = stdout.flush();
                eprint!("{}", report.diagnostics);
                status = status.and(report.status);
            }
            Err(error) => {
                eprintln!("error: {error}");
                status = Status::Failure;
            }
        }
    }
    Ok(status)
}
