//! Subcommand implementations.

mod debug;
mod fmt;
mod run;

pub use debug::{lex_file, parse_file};
pub use fmt::format_file;
pub use run::{parse_run_args, run_files, run_source, RunArgs, ScriptReport};

use std::io::{self, IsTerminal, Stderr};
use std::process::ExitCode;

use quill_diagnostic::emitter::{ColorMode, TerminalEmitter};

use crate::{CliError, CliResult};

/// How a command went, as far as the exit status is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    pub fn is_success(self) -> bool {
        self == Status::Success
    }

    /// `Failure` if either is.
    #[must_use]
    pub fn and(self, other: Status) -> Status {
        if self.is_success() {
            other
        } else {
            Status::Failure
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

pub(crate) fn read_file(path: &str) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Diagnostic emitter for stderr, rendering snippets from `source`.
pub(crate) fn stderr_emitter(path: &str, source: &str) -> TerminalEmitter<Stderr> {
    let is_tty = io::stderr().is_terminal();
    TerminalEmitter::stderr(ColorMode::Auto, is_tty).with_source(path, source)
}
