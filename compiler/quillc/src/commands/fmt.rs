//! The `fmt` command: print a file in canonical form.

use quill_diagnostic::emitter::DiagnosticEmitter;
use quill_fmt::format_module;
use quill_ir::StringInterner;
use quill_parse::parse_source;

use super::{read_file, stderr_emitter, Status};
use crate::CliResult;

/// Format `path` to stdout. The file itself is never rewritten.
///
/// With `check`, nothing is printed and the status says whether the file
/// is already formatted.
pub fn format_file(path: &str, check: bool) -> CliResult<Status> {
    let source = read_file(path)?;
    let interner = StringInterner::new();
    let output = parse_source(&source, &interner);
    if let Some(error) = &output.error {
        let mut emitter = stderr_emitter(path, &source);
        emitter.emit(&error.to_diagnostic());
        emitter.flush();
        return Ok(Status::Failure);
    }

    let formatted = format_module(&output.module, &output.arena, &interner);
    if !check {
        print!("{formatted}");
        return Ok(Status::Success);
    }
    if formatted == source {
        Ok(Status::Success)
    } else {
        eprintln!("'{path}' is not formatted");
        Ok(Status::Failure)
    }
}
