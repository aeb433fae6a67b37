//! Quill Formatter
//!
//! Two printers over a parsed module:
//!
//! - [`format_module`] renders canonical source: one statement per line,
//!   four-space indentation, single spaces around binary operators, braces
//!   on the same line. Parsing the output yields the same tree.
//! - [`dump_module`] renders the tree itself, one node per line, for
//!   inspecting what the parser built.

pub mod dump;
pub mod emitter;
pub mod formatter;

pub use dump::{dump_module, TreeDumper};
pub use emitter::{Emitter, StringEmitter, INDENT_WIDTH};
pub use formatter::{format_expr, format_module, Formatter};
