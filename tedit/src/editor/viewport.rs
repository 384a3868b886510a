// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The visible window onto the buffer.
//!
//! ```text
//!          gutter  text area (size.col_width - gutter columns)
//!          ┌─┴─┐┌───────────┴────────────┐
//! row_ofs ─▸ 4 │ text starting at col_ofs│  ┐
//!            5 │                         │  │ size.row_height rows
//!            6 │ ...                     │  ┘
//!          ──────────────────────────────── status line
//!          ──────────────────────────────── message line
//! ```
//!
//! [`Viewport::reconcile`] recomputes the scroll offset from the caret after every
//! operation that can move the caret or change the row count. It never moves the
//! caret, only the window.

use crate::{Caret, Pos, ScrOfs, Size, height, width};

/// Rows at the bottom of the terminal used by the status line and the message line.
pub const RESERVED_BOTTOM_ROWS: usize = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Viewport {
    pub scr_ofs: ScrOfs,
    /// Size of the text area, including the gutter.
    pub size: Size,
}

/// Width of the line number gutter: the digits of the largest line number, plus one
/// separator column. An empty buffer gets room for line number `1`.
#[must_use]
pub fn gutter_width(total_rows: usize) -> usize {
    let mut num = total_rows.max(1);
    let mut digits = 1;
    while num >= 10 {
        num /= 10;
        digits += 1;
    }
    digits + 1
}

impl Viewport {
    /// The text area is the whole terminal minus the bottom rows used for status and
    /// messages (but always at least one row).
    #[must_use]
    pub fn new(terminal_size: Size) -> Self {
        let rows = (*terminal_size.row_height)
            .saturating_sub(RESERVED_BOTTOM_ROWS)
            .max(1);
        Self {
            scr_ofs: ScrOfs::default(),
            size: width(*terminal_size.col_width) + height(rows),
        }
    }

    /// Columns available for text once the gutter is drawn (at least one).
    #[must_use]
    pub fn text_col_width(&self, total_rows: usize) -> usize {
        (*self.size.col_width)
            .saturating_sub(gutter_width(total_rows))
            .max(1)
    }

    /// Scrolls just enough that the caret is inside the window.
    pub fn reconcile(&mut self, caret: Caret, total_rows: usize) {
        let rows = (*self.size.row_height).max(1);
        let cols = self.text_col_width(total_rows);

        if caret.row_index < self.scr_ofs.row_index {
            self.scr_ofs.row_index = caret.row_index;
        } else if caret.row_index >= self.scr_ofs.row_index + rows {
            self.scr_ofs.row_index = caret.row_index + 1 - rows;
        }

        if caret.col_index < self.scr_ofs.col_index {
            self.scr_ofs.col_index = caret.col_index;
        } else if caret.col_index >= self.scr_ofs.col_index + cols {
            self.scr_ofs.col_index = caret.col_index + 1 - cols;
        }
    }

    /// Where the hardware cursor goes for this caret. On a terminal narrower than the
    /// gutter plus one column the cursor is pinned to the last column.
    #[must_use]
    pub fn caret_screen_pos(&self, caret: Caret, total_rows: usize) -> Pos {
        let last_col_index = (*self.size.col_width).saturating_sub(1);
        Pos::new(
            caret.row_index.saturating_sub(self.scr_ofs.row_index),
            (caret.col_index + gutter_width(total_rows))
                .saturating_sub(self.scr_ofs.col_index)
                .min(last_col_index),
        )
    }
}
