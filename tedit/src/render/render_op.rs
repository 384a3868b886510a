// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{AddAssign, Deref};

use crate::Pos;

/// One terminal drawing command. A frame is a [`RenderOps`] list that is produced by
/// [`crate::render_editor`] without touching the terminal, and then executed by
/// [`crate::paint`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderOp {
    HideCursor,
    ShowCursor,
    /// [Pos] is the absolute row and column on the terminal screen.
    MoveCursorPositionAbs(Pos),
    /// Erases the row the cursor is on, leaving the cursor where it is.
    ClearCurrentLine,
    /// Plain text, already clipped to the terminal width by the renderer.
    PaintText(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOps {
    pub list: Vec<RenderOp>,
}

impl RenderOps {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// All the text painted on the given screen row, in paint order. Handy for checking
    /// a frame without a terminal.
    #[must_use]
    pub fn text_on_row(&self, row_index: usize) -> String {
        let mut acc = String::new();
        let mut current_row = None;
        for op in &self.list {
            match op {
                RenderOp::MoveCursorPositionAbs(pos) => current_row = Some(pos.row_index),
                RenderOp::PaintText(text) if current_row == Some(row_index) => {
                    acc.push_str(text);
                }
                _ => {}
            }
        }
        acc
    }

    /// Where the hardware cursor ends up after the frame.
    #[must_use]
    pub fn final_cursor_pos(&self) -> Option<Pos> {
        self.list.iter().rev().find_map(|op| match op {
            RenderOp::MoveCursorPositionAbs(pos) => Some(*pos),
            _ => None,
        })
    }
}

impl Deref for RenderOps {
    type Target = Vec<RenderOp>;
    fn deref(&self) -> &Self::Target { &self.list }
}

impl AddAssign<RenderOp> for RenderOps {
    fn add_assign(&mut self, rhs: RenderOp) { self.list.push(rhs); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_text_on_row_and_final_cursor() {
        let mut render_ops = RenderOps::new();
        render_ops += RenderOp::MoveCursorPositionAbs(Pos::new(0, 0));
        render_ops += RenderOp::PaintText("1 ".into());
        render_ops += RenderOp::PaintText("abc".into());
        render_ops += RenderOp::MoveCursorPositionAbs(Pos::new(1, 0));
        render_ops += RenderOp::PaintText("~".into());
        render_ops += RenderOp::MoveCursorPositionAbs(Pos::new(0, 5));

        assert_eq2!(render_ops.text_on_row(0), "1 abc");
        assert_eq2!(render_ops.text_on_row(1), "~");
        assert_eq2!(render_ops.text_on_row(2), "");
        assert_eq2!(render_ops.final_cursor_pos(), Some(Pos::new(0, 5)));
        assert_eq2!(render_ops.len(), 6);
    }
}
