// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns the editor state into one frame of [`RenderOps`]. Nothing here touches the
//! terminal, so frames can be checked in tests.
//!
//! ```text
//! ┌───────────────────────────────────────┐
//! │ 1 first line                          │ ┐
//! │ 2 second line                         │ │ text rows
//! │ ~                                     │ ┘ (rows past the end of the buffer)
//! │Characters: 21 | Rows: 2 | Position: 2:7 ◀ status line (rows - 2)
//! │File saved as notes.txt (23 bytes)     │ ◀ message line (rows - 1)
//! └───────────────────────────────────────┘
//! ```

use crate::{EditorBuffer, Pos, RenderOp, RenderOps, Size, gutter_width};

/// What to show on the bottom row of the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MessageLine<'a> {
    #[default]
    Empty,
    Status(&'a str),
    /// The cursor is placed after `input`, instead of at the caret.
    Prompt { label: &'a str, input: &'a str },
}

#[must_use]
pub fn render_editor(
    buffer: &EditorBuffer,
    terminal_size: Size,
    message_line: MessageLine<'_>,
) -> RenderOps {
    let rows = *terminal_size.row_height;
    let cols = *terminal_size.col_width;
    let total_rows = buffer.lines.len();
    let text_rows = (*buffer.viewport.size.row_height).min(rows);

    let mut render_ops = RenderOps::new();
    render_ops += RenderOp::HideCursor;

    for screen_row_index in 0..text_rows {
        let row_index = buffer.viewport.scr_ofs.row_index + screen_row_index;
        let row_text = match buffer.lines.line(row_index) {
            Some(line) => render_helpers::line_with_gutter(buffer, line, row_index),
            None => "~".to_string(),
        };
        render_helpers::paint_row(&mut render_ops, screen_row_index, &row_text, cols);
    }

    // On very short terminals the text area gets the rows first.
    let status_row_index = rows.saturating_sub(2);
    if status_row_index >= text_rows {
        let status = format!(
            "Characters: {} | Rows: {} | Position: {}:{}",
            buffer.lines.char_count(),
            total_rows,
            buffer.caret.row_index + 1,
            buffer.caret.col_index + 1
        );
        render_helpers::paint_row(&mut render_ops, status_row_index, &status, cols);
    }

    let message_row_index = rows.saturating_sub(1);
    let message_row_is_free = message_row_index >= text_rows && message_row_index > 0;
    if message_row_is_free {
        let message = match message_line {
            MessageLine::Empty => String::new(),
            MessageLine::Status(text) => text.to_string(),
            MessageLine::Prompt { label, input } => format!("{label}{input}"),
        };
        render_helpers::paint_row(&mut render_ops, message_row_index, &message, cols);
    }

    let cursor_pos = match message_line {
        MessageLine::Prompt { label, input } if message_row_is_free => {
            let prompt_len = label.chars().count() + input.chars().count();
            Pos::new(message_row_index, prompt_len.min(cols.saturating_sub(1)))
        }
        _ => buffer.viewport.caret_screen_pos(buffer.caret, total_rows),
    };
    render_ops += RenderOp::MoveCursorPositionAbs(cursor_pos);
    render_ops += RenderOp::ShowCursor;

    render_ops
}

mod render_helpers {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// Line number right aligned in the gutter, then the part of the line that is
    /// scrolled into view.
    pub fn line_with_gutter(buffer: &EditorBuffer, line: &str, row_index: usize) -> String {
        let total_rows = buffer.lines.len();
        let number_width = gutter_width(total_rows) - 1;
        let visible_text: String = line
            .chars()
            .skip(buffer.viewport.scr_ofs.col_index)
            .take(buffer.viewport.text_col_width(total_rows))
            .collect();
        format!("{:>number_width$} {visible_text}", row_index + 1)
    }

    pub fn paint_row(render_ops: &mut RenderOps, row_index: usize, text: &str, cols: usize) {
        *render_ops += RenderOp::MoveCursorPositionAbs(Pos::new(row_index, 0));
        *render_ops += RenderOp::ClearCurrentLine;
        let clipped: String = text.chars().take(cols).collect();
        if !clipped.is_empty() {
            *render_ops += RenderOp::PaintText(clipped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Caret, EditorConfig, LineBuffer, assert_eq2, height, width};

    fn buffer_with(lines: &[&str], caret: Caret, terminal_size: Size) -> EditorBuffer {
        let mut buffer =
            EditorBuffer::new_empty(terminal_size, &EditorConfig::new(terminal_size));
        buffer.lines = LineBuffer::from_lines(lines.iter().copied());
        buffer.caret = caret;
        buffer.reconcile_viewport();
        buffer
    }

    #[test]
    fn test_empty_buffer() {
        let terminal_size = width(40) + height(5);
        let buffer = buffer_with(&[], Caret::new(0, 0), terminal_size);
        let render_ops = render_editor(&buffer, terminal_size, MessageLine::Empty);

        for row_index in 0..3 {
            assert_eq2!(render_ops.text_on_row(row_index), "~");
        }
        assert_eq2!(
            render_ops.text_on_row(3),
            "Characters: 0 | Rows: 0 | Position: 1:1"
        );
        assert_eq2!(render_ops.text_on_row(4), "");
        assert_eq2!(render_ops.final_cursor_pos(), Some(Pos::new(0, 2)));
        assert_eq2!(render_ops.first(), Some(&RenderOp::HideCursor));
        assert_eq2!(render_ops.last(), Some(&RenderOp::ShowCursor));
    }

    #[test]
    fn test_lines_with_gutter_and_status() {
        let terminal_size = width(40) + height(6);
        let buffer = buffer_with(&["hello", "", "wörld"], Caret::new(2, 3), terminal_size);
        let render_ops =
            render_editor(&buffer, terminal_size, MessageLine::Status("File saved"));

        assert_eq2!(render_ops.text_on_row(0), "1 hello");
        assert_eq2!(render_ops.text_on_row(1), "2 ");
        assert_eq2!(render_ops.text_on_row(2), "3 wörld");
        assert_eq2!(render_ops.text_on_row(3), "~");
        assert_eq2!(
            render_ops.text_on_row(4),
            "Characters: 10 | Rows: 3 | Position: 3:4"
        );
        assert_eq2!(render_ops.text_on_row(5), "File saved");
        assert_eq2!(render_ops.final_cursor_pos(), Some(Pos::new(2, 5)));
    }

    #[test]
    fn test_gutter_right_aligns_line_numbers() {
        let terminal_size = width(20) + height(14);
        let lines: Vec<String> = (0..12).map(|it| format!("l{it}")).collect();
        let line_refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let buffer = buffer_with(&line_refs, Caret::new(0, 0), terminal_size);
        let render_ops = render_editor(&buffer, terminal_size, MessageLine::Empty);

        assert_eq2!(render_ops.text_on_row(0), " 1 l0");
        assert_eq2!(render_ops.text_on_row(11), "12 l11");
        assert_eq2!(render_ops.final_cursor_pos(), Some(Pos::new(0, 3)));
    }

    #[test]
    fn test_scrolled_viewport() {
        let terminal_size = width(8) + height(4); // 2 text rows, 6 text columns.
        let buffer = buffer_with(
            &["a", "b", "0123456789"],
            Caret::new(2, 9),
            terminal_size,
        );
        assert_eq2!(*buffer.viewport.scr_ofs, Pos::new(1, 4));
        let render_ops = render_editor(&buffer, terminal_size, MessageLine::Empty);

        assert_eq2!(render_ops.text_on_row(0), "2 ");
        assert_eq2!(render_ops.text_on_row(1), "3 456789");
        assert_eq2!(render_ops.final_cursor_pos(), Some(Pos::new(1, 7)));
    }

    #[test]
    fn test_prompt_owns_the_cursor() {
        let terminal_size = width(40) + height(5);
        let buffer = buffer_with(&["abc"], Caret::new(0, 3), terminal_size);
        let render_ops = render_editor(
            &buffer,
            terminal_size,
            MessageLine::Prompt {
                label: "Save as: ",
                input: "notes",
            },
        );
        assert_eq2!(render_ops.text_on_row(4), "Save as: notes");
        assert_eq2!(render_ops.final_cursor_pos(), Some(Pos::new(4, 14)));
    }

    #[test]
    fn test_rows_are_clipped_to_terminal_width() {
        let terminal_size = width(10) + height(5);
        let buffer = buffer_with(&["abc"], Caret::new(0, 0), terminal_size);
        let render_ops = render_editor(&buffer, terminal_size, MessageLine::Empty);
        assert_eq2!(render_ops.text_on_row(3), "Characters");
    }

    #[test]
    fn test_tiny_terminal_does_not_overlap_rows() {
        let terminal_size = width(10) + height(1);
        let buffer = buffer_with(&["abc"], Caret::new(0, 1), terminal_size);
        let render_ops = render_editor(&buffer, terminal_size, MessageLine::Status("x"));
        assert_eq2!(render_ops.text_on_row(0), "1 abc");
        assert_eq2!(render_ops.final_cursor_pos(), Some(Pos::new(0, 3)));
    }
}
