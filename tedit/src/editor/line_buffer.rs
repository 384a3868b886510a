// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The document: an ordered list of lines.
//!
//! - No line contains a line terminator.
//! - Columns are counted in characters (not bytes), so a column can always be turned
//!   into a byte offset on a char boundary.
//! - An empty buffer (zero rows) is different from a buffer with one empty row. The
//!   editor starts with zero rows.
//!
//! Out of range row indices are clamped or ignored, never a panic.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Line terminators in the given lines are dropped.
    pub fn from_lines<S: AsRef<str>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines
                .into_iter()
                .map(|it| it.as_ref().replace(['\n', '\r'], ""))
                .collect(),
        }
    }

    /// Total number of rows.
    #[must_use]
    pub fn len(&self) -> usize { self.lines.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    #[must_use]
    pub fn line(&self, row_index: usize) -> Option<&str> {
        self.lines.get(row_index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> { self.lines.iter().map(String::as_str) }

    /// Length of the row in characters. A row that doesn't exist has length 0.
    #[must_use]
    pub fn line_len(&self, row_index: usize) -> usize {
        self.line(row_index).map_or(0, |it| it.chars().count())
    }

    /// Sum of all line lengths, in characters.
    #[must_use]
    pub fn char_count(&self) -> usize { self.iter().map(|it| it.chars().count()).sum() }

    /// Inserts a row at `at`, shifting the rows below it down. Returns `false` (and does
    /// nothing) if `at` is past the end.
    pub fn insert_row(&mut self, at: usize, text: impl Into<String>) -> bool {
        if at > self.lines.len() {
            return false;
        }
        let text: String = text.into();
        self.lines.insert(at, text.replace(['\n', '\r'], ""));
        true
    }

    /// Appends an empty row.
    pub fn push_empty_row(&mut self) { self.lines.push(String::new()); }

    /// Removes a row, shifting the rows below it up.
    pub fn remove_row(&mut self, at: usize) -> Option<String> {
        (at < self.lines.len()).then(|| self.lines.remove(at))
    }

    /// Inserts `ch` at column `col_index` (clamped to the line length). Returns `false`
    /// if the row doesn't exist.
    pub fn insert_char(&mut self, row_index: usize, col_index: usize, ch: char) -> bool {
        let Some(line) = self.lines.get_mut(row_index) else {
            return false;
        };
        let byte_index = byte_index_for_col(line, col_index);
        line.insert(byte_index, ch);
        true
    }

    /// Removes the character at column `col_index`.
    pub fn remove_char(&mut self, row_index: usize, col_index: usize) -> Option<char> {
        let line = self.lines.get_mut(row_index)?;
        let (byte_index, _) = line.char_indices().nth(col_index)?;
        Some(line.remove(byte_index))
    }

    /// Moves everything from column `col_index` to the end of the row into a new row
    /// right below it. Returns `false` if the row doesn't exist.
    pub fn split_row(&mut self, row_index: usize, col_index: usize) -> bool {
        let Some(line) = self.lines.get_mut(row_index) else {
            return false;
        };
        let byte_index = byte_index_for_col(line, col_index);
        let suffix = line.split_off(byte_index);
        self.lines.insert(row_index + 1, suffix);
        true
    }

    /// Appends row `row_index` to the end of the row above it and removes it. Returns
    /// the length (in characters) the row above had before the merge, ie: the column of
    /// the join point.
    pub fn merge_with_previous_row(&mut self, row_index: usize) -> Option<usize> {
        if row_index == 0 || row_index >= self.lines.len() {
            return None;
        }
        let this_line = self.lines.remove(row_index);
        let prev_line = &mut self.lines[row_index - 1];
        let join_col_index = prev_line.chars().count();
        prev_line.push_str(&this_line);
        Some(join_col_index)
    }
}

/// Byte offset of the character at `col_index`, or the line's byte length if the
/// column is at (or past) the end.
fn byte_index_for_col(line: &str, col_index: usize) -> usize {
    line.char_indices()
        .nth(col_index)
        .map_or(line.len(), |(byte_index, _)| byte_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    fn lines_of(buffer: &LineBuffer) -> Vec<&str> { buffer.iter().collect() }

    #[test]
    fn test_empty_buffer_is_not_one_empty_row() {
        let empty = LineBuffer::new();
        let one_empty_row = LineBuffer::from_lines([""]);
        assert_eq2!(empty.len(), 0);
        assert_eq2!(one_empty_row.len(), 1);
        assert_ne!(empty, one_empty_row);
    }

    #[test]
    fn test_insert_row_clamps() {
        let mut buffer = LineBuffer::from_lines(["a", "c"]);
        assert!(buffer.insert_row(1, "b"));
        assert!(buffer.insert_row(3, "d"));
        assert!(!buffer.insert_row(9, "x"));
        assert_eq2!(lines_of(&buffer), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_rows_never_contain_line_terminators() {
        let mut buffer = LineBuffer::from_lines(["a\nb"]);
        buffer.insert_row(0, "x\r\ny");
        assert_eq2!(lines_of(&buffer), vec!["xy", "ab"]);
    }

    #[test]
    fn test_insert_and_remove_char_use_char_columns() {
        let mut buffer = LineBuffer::from_lines(["héllo"]);
        assert!(buffer.insert_char(0, 2, 'X'));
        assert_eq2!(buffer.line(0), Some("héXllo"));
        assert_eq2!(buffer.remove_char(0, 1), Some('é'));
        assert_eq2!(buffer.line(0), Some("hXllo"));
        assert_eq2!(buffer.line_len(0), 5);
        assert_eq2!(buffer.remove_char(0, 5), None);
        assert!(!buffer.insert_char(3, 0, 'z'));
    }

    #[test]
    fn test_insert_char_past_end_appends() {
        let mut buffer = LineBuffer::from_lines(["ab"]);
        buffer.insert_char(0, 10, 'c');
        assert_eq2!(buffer.line(0), Some("abc"));
    }

    #[test]
    fn test_split_then_merge_round_trip() {
        let mut buffer = LineBuffer::from_lines(["hello world", "next"]);
        assert!(buffer.split_row(0, 5));
        assert_eq2!(lines_of(&buffer), vec!["hello", " world", "next"]);
        assert_eq2!(buffer.merge_with_previous_row(1), Some(5));
        assert_eq2!(lines_of(&buffer), vec!["hello world", "next"]);
    }

    #[test]
    fn test_merge_out_of_range() {
        let mut buffer = LineBuffer::from_lines(["a", "b"]);
        assert_eq2!(buffer.merge_with_previous_row(0), None);
        assert_eq2!(buffer.merge_with_previous_row(2), None);
        assert_eq2!(buffer.len(), 2);
    }

    #[test]
    fn test_remove_row() {
        let mut buffer = LineBuffer::from_lines(["a", "b", "c"]);
        assert_eq2!(buffer.remove_row(1), Some("b".to_string()));
        assert_eq2!(buffer.remove_row(5), None);
        assert_eq2!(lines_of(&buffer), vec!["a", "c"]);
    }

    #[test]
    fn test_counts() {
        let buffer = LineBuffer::from_lines(["abc", "", "dé"]);
        assert_eq2!(buffer.char_count(), 5);
        assert_eq2!(buffer.line_len(2), 2);
        assert_eq2!(buffer.line_len(3), 0);
        assert_eq2!(buffer.len(), 3);
    }
}
