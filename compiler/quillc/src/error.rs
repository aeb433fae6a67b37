//! Driver errors.

use std::io;

use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

/// Failures of the driver itself, as opposed to diagnostics about a script.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}", describe_read_error(.path, .source))]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid value for --max-depth: '{0}' (expected a number or 'none')")]
    InvalidDepth(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

impl CliError {
    /// Whether the usage text should follow the message.
    pub fn wants_usage(&self) -> bool {
        matches!(
            self,
            CliError::UnknownCommand(_) | CliError::UnknownOption(_) | CliError::Usage(_)
        )
    }
}

fn describe_read_error(path: &str, error: &io::Error) -> String {
    match error.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {error}"),
    }
}
