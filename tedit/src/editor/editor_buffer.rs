// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use crate::{Caret, DEBUG_TEDIT_EDITOR, EditorConfig, LineBuffer, Size, Viewport};

/// All the editor state: the document, the caret, the window onto it, and where it gets
/// saved. It is owned by the event loop and passed by reference to the mutation
/// functions ([`crate::content_mut`], [`crate::caret_mut`]), which are the only code that
/// changes it. The renderer and persistence only read it.
///
/// Invariants, restored by every mutation:
/// - `caret.row_index < max(lines.len(), 1)`. The caret is past the last row only for
///   an empty buffer (row 0 of 0 rows).
/// - `caret.col_index <= lines.line_len(caret.row_index)`.
/// - The caret is inside the viewport (see [`Viewport::reconcile`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorBuffer {
    pub lines: LineBuffer,
    pub caret: Caret,
    pub viewport: Viewport,
    pub wrap_width: usize,
    /// Unset until the first save. Once set it is used for every later save.
    pub maybe_file_path: Option<PathBuf>,
}

impl EditorBuffer {
    /// An empty document (zero rows), with the caret at the origin.
    #[must_use]
    pub fn new_empty(terminal_size: Size, config: &EditorConfig) -> Self {
        Self {
            lines: LineBuffer::new(),
            caret: Caret::default(),
            viewport: Viewport::new(terminal_size),
            wrap_width: config.wrap_width.max(1),
            maybe_file_path: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    #[must_use]
    pub fn total_rows(&self) -> usize { self.lines.len() }

    /// Length of the line the caret is on (0 if that row doesn't exist yet).
    #[must_use]
    pub fn line_len_at_caret(&self) -> usize { self.lines.line_len(self.caret.row_index) }

    /// Creates the caret's row if the caret is past the last row. After this the caret
    /// always addresses an existing row.
    pub fn ensure_caret_row_exists(&mut self) {
        while self.caret.row_index >= self.lines.len() {
            self.lines.push_empty_row();
        }
    }

    /// Scrolls the viewport so the caret is visible. Call after anything that moves the
    /// caret or changes the row count.
    pub fn reconcile_viewport(&mut self) {
        let total_rows = self.lines.len();
        self.viewport.reconcile(self.caret, total_rows);

        DEBUG_TEDIT_EDITOR.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "reconcile_viewport",
                caret = ?self.caret,
                scr_ofs = ?self.viewport.scr_ofs,
                total_rows
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ScrOfs, assert_eq2, height, width};

    #[test]
    fn test_new_empty() {
        let size = width(40) + height(10);
        let buffer = EditorBuffer::new_empty(size, &EditorConfig::new(size));
        assert!(buffer.is_empty());
        assert_eq2!(buffer.caret, Caret::new(0, 0));
        assert_eq2!(buffer.viewport.scr_ofs, ScrOfs::new(0, 0));
        assert_eq2!(buffer.wrap_width, 40);
        assert_eq2!(buffer.maybe_file_path, None);
    }

    #[test]
    fn test_ensure_caret_row_exists() {
        let size = width(40) + height(10);
        let mut buffer = EditorBuffer::new_empty(size, &EditorConfig::new(size));
        buffer.ensure_caret_row_exists();
        assert_eq2!(buffer.total_rows(), 1);
        buffer.ensure_caret_row_exists();
        assert_eq2!(buffer.total_rows(), 1);
    }
}
