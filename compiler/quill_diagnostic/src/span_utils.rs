//! Span utility functions for diagnostic rendering.
//!
//! Diagnostics carry byte spans; users want `row:col`. [`LineOffsetTable`]
//! pre-computes line starts so each conversion is a binary search.

use quill_ir::{Location, Span};

/// Pre-computed line offset table for row/column lookup.
///
/// ```
/// use quill_diagnostic::span_utils::LineOffsetTable;
/// use quill_ir::Location;
///
/// let source = "var a = 1;\nprint(a);";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.location(source, 0), Location::new(1, 1));
/// assert_eq!(table.location(source, 17), Location::new(2, 7));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0]` is always 0.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// Get the 1-based line number containing a byte offset.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Get the 1-based row and column of a byte offset.
    ///
    /// Columns count characters, not bytes, matching the lexer.
    pub fn location(&self, source: &str, offset: u32) -> Location {
        let row = self.line_from_offset(offset);
        let line_start = self.line_start(row).unwrap_or(0) as usize;
        let end = (offset as usize).clamp(line_start, source.len());
        let prefix = source.get(line_start..end).unwrap_or("");
        let col = u32::try_from(prefix.chars().count()).unwrap_or(u32::MAX - 1) + 1;
        Location::new(row, col)
    }

    /// Location of the first byte of `span`.
    pub fn span_location(&self, source: &str, span: Span) -> Location {
        self.location(source, span.start)
    }

    /// Byte offset of a line start (1-based line number).
    pub fn line_start(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Text of a 1-based line, without its line terminator.
    pub fn line_text<'a>(&self, source: &'a str, line: u32) -> Option<&'a str> {
        let start = self.line_start(line)? as usize;
        let end = self
            .line_start(line + 1)
            .map_or(source.len(), |next| next as usize);
        let text = source.get(start..end)?;
        Some(text.trim_end_matches(['\n', '\r']))
    }
}
