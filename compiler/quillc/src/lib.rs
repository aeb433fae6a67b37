//! Quill driver.
//!
//! The `quill` binary only dispatches on its arguments; every subcommand lives
//! in [`commands`] so it can be exercised in-process.

pub mod commands;
mod error;
mod tracing_setup;

pub use error::{CliError, CliResult};
pub use tracing_setup::init_tracing;
