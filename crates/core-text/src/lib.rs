//! Line-oriented text buffer.
//!
//! The document is held as a growable `Vec<String>`, one entry per on-disk row
//! with the `\n` terminator stripped. Columns are counted in `char`s; every
//! character occupies exactly one column.
//!
//! Invariants:
//! * The line sequence is never empty (an empty file is one empty line).
//! * Row/column arguments are validated by the cursor layer before they reach
//!   this module. An out-of-range row or column is a bug upstream and panics.

use std::str::Utf8Error;

/// The in-memory document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }
}

impl LineBuffer {
    /// Split raw file bytes on `\n`.
    ///
    /// A final terminator does not produce a trailing empty line; an
    /// unterminated last line is kept. Bytes that are not valid UTF-8 are
    /// rejected rather than replaced, so a later write cannot alter them.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Utf8Error> {
        let text = std::str::from_utf8(bytes)?;
        if text.is_empty() {
            return Ok(Self::default());
        }
        let body = text.strip_suffix('\n').unwrap_or(text);
        Ok(Self {
            lines: body.split('\n').map(str::to_owned).collect(),
        })
    }

    /// Build a buffer from already separated lines (test and tooling helper).
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            return Self::default();
        }
        Self { lines }
    }

    /// Serialize back to disk form: every line followed by `\n`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.byte_len());
        for line in &self.lines {
            out.extend_from_slice(line.as_bytes());
            out.push(b'\n');
        }
        out
    }

    /// Size of `to_bytes()` without building it.
    pub fn byte_len(&self) -> usize {
        self.lines.iter().map(|l| l.len() + 1).sum()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_at(&self, row: usize) -> &str {
        self.check_row(row);
        &self.lines[row]
    }

    /// Length of line `row` in columns.
    pub fn line_length(&self, row: usize) -> usize {
        self.line_at(row).chars().count()
    }

    /// Divide line `row` at `column`; the tail becomes a new line at `row + 1`.
    pub fn split_at(&mut self, row: usize, column: usize) {
        let at = self.byte_offset(row, column);
        let tail = self.lines[row].split_off(at);
        self.lines.insert(row + 1, tail);
    }

    /// Append line `row` to line `row - 1` and remove it.
    pub fn merge_with_previous(&mut self, row: usize) {
        assert!(row > 0, "merge_with_previous called on the first line");
        self.check_row(row);
        let line = self.lines.remove(row);
        self.lines[row - 1].push_str(&line);
    }

    /// Insert `text` into line `row` before `column`.
    pub fn insert_char(&mut self, row: usize, column: usize, text: &str) {
        let at = self.byte_offset(row, column);
        self.lines[row].insert_str(at, text);
    }

    /// Remove the character at `column - 1` on line `row`.
    pub fn delete_char_before(&mut self, row: usize, column: usize) {
        assert!(column > 0, "delete_char_before called at column 0");
        let at = self.byte_offset(row, column - 1);
        self.lines[row].remove(at);
    }

    pub fn insert_blank_line_after(&mut self, row: usize) {
        self.check_row(row);
        self.lines.insert(row + 1, String::new());
    }

    pub fn insert_blank_line_before(&mut self, row: usize) {
        self.check_row(row);
        self.lines.insert(row, String::new());
    }

    fn check_row(&self, row: usize) {
        assert!(
            row < self.lines.len(),
            "row {row} out of bounds (line count {})",
            self.lines.len()
        );
    }

    /// Byte index of `column` within line `row`; `column == length` maps to the end.
    fn byte_offset(&self, row: usize, column: usize) -> usize {
        let line = self.line_at(row);
        if column == 0 {
            return 0;
        }
        match line.char_indices().nth(column) {
            Some((idx, _)) => idx,
            None => {
                let len = line.chars().count();
                assert!(
                    column == len,
                    "column {column} out of bounds on row {row} (length {len})"
                );
                line.len()
            }
        }
    }
}
