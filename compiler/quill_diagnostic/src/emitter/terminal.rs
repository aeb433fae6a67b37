//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! When the emitter knows the source file, labels are rendered as
//! `--> path:row:col` followed by the offending line and a caret underline.

use std::io::{self, Write};

use quill_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// The file a diagnostic's spans point into.
struct SourceContext {
    path: String,
    text: String,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source file so spans render as `path:row:col` with a snippet.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = LineOffsetTable::build(&text);
        self.source = Some(SourceContext {
            path: path.into(),
            text,
            lines,
        });
        self
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }


    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    /// `path:row:col` when the source is known, the raw span otherwise.
    fn position(&self, span: Span) -> String {
        match &self.source {
            Some(src) => format!(
                "{}:{}",
                src.path,
                src.lines.span_location(&src.text, span)
            ),
            None => format!("{span:?}"),
        }
    }

    fn write_label(&mut self, label: &Label, gutter: usize) {
        let position = self.position(label.span);
        let _ = writeln!(self.writer, "{:gutter$}--> {position}", "");

        let Some(src) = &self.source else {
            let _ = write!(self.writer, "{:gutter$} = ", "");
            self.write_colored(&label.message, colors::ERROR);
            let _ = writeln!(self.writer);
            return;
        };

        let loc = src.lines.span_location(&src.text, label.span);
        let line = src.lines.line_text(&src.text, loc.row).unwrap_or("");
        let line = line.to_owned();
        let line_no = loc.row.to_string();

        // Caret width: span length in characters, clipped to the line.
        let start_col = loc.col as usize - 1;
        let line_chars = line.chars().count();
        let span_text = src.text.get(label.span.to_range()).unwrap_or("");
        let width = span_text
            .chars()
            .take_while(|&c| c != '\n')
            .count()
            .min(line_chars.saturating_sub(start_col))
            .max(1);

        // Tabs before the caret stay tabs so it lines up under the span.
        let padding: String = line
            .chars()
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .chain(std::iter::repeat(' '))
            .take(start_col)
            .collect();

        let _ = writeln!(self.writer, "{:gutter$} |", "");
        let _ = writeln!(self.writer, "{line_no:>gutter$} | {line}");
        let _ = write!(self.writer, "{:gutter$} | {padding}", "");
        let mut underline = "^".repeat(width);
        if !label.message.is_empty() {
            underline.push(' ');
            underline.push_str(&label.message);
        }
        self.write_colored(&underline, colors::ERROR);
        let _ = writeln!(self.writer);
    }

    /// Width of the line-number gutter: wide enough for every labelled row.
    fn gutter_width(&self, diagnostic: &Diagnostic) -> usize {
        let Some(src) = &self.source else {
            return 1;
        };
        diagnostic
            .labels
            .iter()
            .map(|l| {
                src.lines
                    .span_location(&src.text, l.span)
                    .row
                    .to_string()
                    .len()
            })
            .max()
            .unwrap_or(1)
    }

    fn write_tagged(&mut self, gutter: usize, tag: &str, text: &str) {
        let _ = write!(self.writer, "{:gutter$} = ", "");
        self.write_colored(tag, colors::BOLD);
        let _ = writeln!(self.writer, ": {text}");
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let message = if diagnostic.message.is_empty() {
            diagnostic.code.description()
        } else {
            diagnostic.message.as_str()
        };
        let _ = writeln!(self.writer, ": {message}");

        let gutter = self.gutter_width(diagnostic);
        for label in &diagnostic.labels {
            self.write_label(label, gutter);
        }

        for note in &diagnostic.notes {
            self.write_tagged(gutter, "note", note);
        }

        for frame in &diagnostic.trace {
            let text = format!(
                "in `{}` called at {}",
                frame.name,
                self.position(frame.call_span)
            );
            self.write_tagged(gutter, "trace", &text);
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
