// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Caret movement. None of these functions change the document; moves that would leave
//! the document (up from the first row, down from the last, right from the end of the
//! last line) do nothing.

use crate::EditorBuffer;

pub fn up(buffer: &mut EditorBuffer) {
    if buffer.caret.row_index == 0 {
        return;
    }
    buffer.caret.row_index -= 1;
    clamp_col_to_line_len(buffer);
    buffer.reconcile_viewport();
}

pub fn down(buffer: &mut EditorBuffer) {
    if buffer.caret.row_index + 1 >= buffer.lines.len() {
        return;
    }
    buffer.caret.row_index += 1;
    clamp_col_to_line_len(buffer);
    buffer.reconcile_viewport();
}

/// At column 0 the caret wraps to the end of the previous row.
///
/// ```text
/// R ┌──────────┐      R ┌──────────┐
/// 0 │abc       │  ➜   0 ▸abc       │
/// 1 ▸de        │        └───▴──────┘
///   └▴─────────┘        C0123456789
/// ```
pub fn left(buffer: &mut EditorBuffer) {
    if buffer.caret.col_index > 0 {
        buffer.caret.col_index -= 1;
    } else if buffer.caret.row_index > 0 {
        buffer.caret.row_index -= 1;
        buffer.caret.col_index = buffer.line_len_at_caret();
    } else {
        return;
    }
    buffer.reconcile_viewport();
}

/// At the end of a line the caret wraps to the start of the next row, if there is one.
pub fn right(buffer: &mut EditorBuffer) {
    if buffer.caret.col_index < buffer.line_len_at_caret() {
        buffer.caret.col_index += 1;
    } else if buffer.caret.row_index + 1 < buffer.lines.len() {
        buffer.caret.row_index += 1;
        buffer.caret.col_index = 0;
    } else {
        return;
    }
    buffer.reconcile_viewport();
}

fn clamp_col_to_line_len(buffer: &mut EditorBuffer) {
    let line_len = buffer.line_len_at_caret();
    if buffer.caret.col_index > line_len {
        buffer.caret.col_index = line_len;
    }
}
