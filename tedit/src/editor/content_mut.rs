// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Mutations of the document at the caret. Each function leaves the caret on an
//! existing row (or at the origin of an empty buffer), within the line, and inside the
//! viewport.

use crate::{DEBUG_TEDIT_EDITOR, EditorBuffer};

/// Inserts `ch` at the caret and advances the caret. When the caret column reaches the
/// wrap width the caret moves to the start of the next row (which is created if the
/// caret is on the last row). The characters already typed stay where they are.
///
/// ```text
/// wrap_width: 5, type "f" then "g"
///
/// R ┌─────┐      R ┌─────┐      R ┌─────┐
/// 0 ▸abcd░│  ➜   0 │abcdf│  ➜   0 │abcdf│
///   └────▴┘      1 ▸░    │      1 ▸g░   │
///   C01234         └▴────┘        └─▴───┘
/// ```
pub fn insert_char_at_caret(buffer: &mut EditorBuffer, ch: char) {
    buffer.ensure_caret_row_exists();

    let caret = buffer.caret;
    buffer.lines.insert_char(caret.row_index, caret.col_index, ch);
    buffer.caret.col_index = (caret.col_index + 1).min(buffer.line_len_at_caret());

    if buffer.caret.col_index >= buffer.wrap_width {
        buffer.caret.col_index = 0;
        if buffer.caret.row_index + 1 >= buffer.lines.len() {
            buffer.lines.push_empty_row();
        }
        buffer.caret.row_index += 1;
    }

    log_mutation("insert_char_at_caret", buffer);
    buffer.reconcile_viewport();
}

/// Splits the caret's row at the caret, and moves the caret to the start of the
/// following row.
pub fn insert_new_line_at_caret(buffer: &mut EditorBuffer) {
    buffer.ensure_caret_row_exists();

    if buffer.caret.col_index == 0 {
        insert_new_line_helper::insert_new_line_at_start_of_current_line(buffer);
    } else {
        insert_new_line_helper::insert_new_line_at_middle_of_current_line(buffer);
    }

    log_mutation("insert_new_line_at_caret", buffer);
    buffer.reconcile_viewport();
}

mod insert_new_line_helper {
    use super::EditorBuffer;

    /// ```text
    /// R ┌──────────┐      R ┌──────────┐
    /// 0 ▸abc       │  ➜   0 │          │
    ///   └▴─────────┘      1 ▸abc       │
    ///   C0123456789         └▴─────────┘
    /// ```
    pub fn insert_new_line_at_start_of_current_line(buffer: &mut EditorBuffer) {
        let row_index = buffer.caret.row_index;
        buffer.lines.insert_row(row_index, "");
        buffer.caret.row_index += 1;
        buffer.caret.col_index = 0;
    }

    /// The caret may also be at the end of the line, in which case the new row is
    /// empty.
    ///
    /// ```text
    /// R ┌──────────┐      R ┌──────────┐
    /// 0 ▸abcd      │  ➜   0 │ab        │
    ///   └──▴───────┘      1 ▸cd        │
    ///   C0123456789         └▴─────────┘
    /// ```
    pub fn insert_new_line_at_middle_of_current_line(buffer: &mut EditorBuffer) {
        let row_index = buffer.caret.row_index;
        let col_index = buffer.caret.col_index;
        buffer.lines.split_row(row_index, col_index);
        buffer.caret.row_index += 1;
        buffer.caret.col_index = 0;
    }
}

/// Deletes the character to the left of the caret, or joins the caret's row onto the
/// end of the previous row when the caret is at column 0. A no-op at the origin, and
/// when the caret's row doesn't exist (empty buffer).
pub fn backspace_at_caret(buffer: &mut EditorBuffer) {
    let caret = buffer.caret;
    if caret.row_index >= buffer.lines.len() || (caret.row_index == 0 && caret.col_index == 0)
    {
        return;
    }

    if caret.col_index > 0 {
        backspace_helper::backspace_in_middle_of_line(buffer);
    } else {
        backspace_helper::backspace_at_start_of_line(buffer);
    }

    log_mutation("backspace_at_caret", buffer);
    buffer.reconcile_viewport();
}

mod backspace_helper {
    use super::EditorBuffer;

    /// ```text
    /// R ┌──────────┐      R ┌──────────┐
    /// 0 ▸abc       │  ➜   0 ▸ac        │
    ///   └──▴───────┘        └─▴────────┘
    ///   C0123456789         C0123456789
    /// ```
    pub fn backspace_in_middle_of_line(buffer: &mut EditorBuffer) {
        let row_index = buffer.caret.row_index;
        let col_index = buffer.caret.col_index;
        if buffer.lines.remove_char(row_index, col_index - 1).is_some() {
            buffer.caret.col_index -= 1;
        } else {
            // The caret was past the end of the line.
            buffer.caret.col_index = buffer.lines.line_len(row_index);
        }
    }

    /// The join point becomes the new caret column, so the text on both sides of it
    /// stays contiguous.
    ///
    /// ```text
    /// R ┌──────────┐      R ┌──────────┐
    /// 0 │abc       │  ➜   0 ▸abcde     │
    /// 1 ▸de        │        └───▴──────┘
    ///   └▴─────────┘        C0123456789
    /// ```
    pub fn backspace_at_start_of_line(buffer: &mut EditorBuffer) {
        let row_index = buffer.caret.row_index;
        if let Some(join_col_index) = buffer.lines.merge_with_previous_row(row_index) {
            buffer.caret.row_index -= 1;
            buffer.caret.col_index = join_col_index;
        }
    }
}

fn log_mutation(op: &'static str, buffer: &EditorBuffer) {
    DEBUG_TEDIT_EDITOR.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = op,
            caret = ?buffer.caret,
            total_rows = buffer.lines.len()
        );
    });
}
