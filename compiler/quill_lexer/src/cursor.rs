//! Byte cursor over the source with row/column tracking.
//!
//! The cursor only ever moves forward. Every advance goes through
//! [`Cursor::advance`], which keeps `row`/`col` in sync with `pos` no matter
//! how far a single step jumps (comment bodies and string literals are
//! skipped with `memchr` rather than char by char).

use quill_ir::Location;

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'src> {
    src: &'src str,
    pos: usize,
    row: u32,
    col: u32,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(src: &'src str) -> Self {
        Cursor {
            src,
            pos: 0,
            row: 1,
            col: 1,
        }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn location(&self) -> Location {
        Location::new(self.row, self.col)
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Unconsumed input.
    #[inline]
    pub(crate) fn rest(&self) -> &'src str {
        &self.src[self.pos..]
    }

    /// Source text between `start` and the current position.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'src str {
        &self.src[start..self.pos]
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    /// Advance by `n` bytes. `n` must land on a char boundary.
    pub(crate) fn advance(&mut self, n: usize) {
        let end = (self.pos + n).min(self.src.len());
        let skipped = &self.src[self.pos..end];
        let bytes = skipped.as_bytes();
        match memchr::memrchr(b'\n', bytes) {
            Some(last) => {
                self.row += saturating_u32(memchr::memchr_iter(b'\n', bytes).count());
                self.col = saturating_u32(skipped[last + 1..].chars().count()) + 1;
            }
            None => self.col += saturating_u32(skipped.chars().count()),
        }
        self.pos = end;
    }

    /// Advance past one full character.
    pub(crate) fn bump(&mut self) {
        let width = self.rest().chars().next().map_or(0, char::len_utf8);
        self.advance(width);
    }

    /// Advance while `pred` holds for the current ASCII byte.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        let n = self
            .rest()
            .bytes()
            .take_while(|&b| b.is_ascii() && pred(b))
            .count();
        self.advance(n);
    }

    /// Advance to the next `\n` (not consuming it) or to end of input.
    pub(crate) fn eat_until_newline(&mut self) {
        let rest = self.rest().as_bytes();
        let n = memchr::memchr(b'\n', rest).unwrap_or(rest.len());
        self.advance(n);
    }

    /// Advance past the next occurrence of `needle`.
    ///
    /// Returns `false` (positioned at end of input) when `needle` never occurs.
    pub(crate) fn eat_past(&mut self, needle: &str) -> bool {
        let rest = self.rest();
        match memchr::memmem::find(rest.as_bytes(), needle.as_bytes()) {
            Some(at) => {
                self.advance(at + needle.len());
                true
            }
            None => {
                self.advance(rest.len());
                false
            }
        }
    }

    /// Advance past the closing quote of a string literal whose opening quote
    /// has already been consumed. A backslash always escapes the next char.
    ///
    /// Returns `false` (positioned at end of input) when the literal never closes.
    pub(crate) fn eat_string_body(&mut self) -> bool {
        loop {
            let rest = self.rest().as_bytes();
            match memchr::memchr2(b'"', b'\\', rest) {
                Some(at) if rest[at] == b'"' => {
                    self.advance(at + 1);
                    return true;
                }
                Some(at) => {
                    self.advance(at + 1);
                    self.bump();
                }
                None => {
                    self.advance(rest.len());
                    return false;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
