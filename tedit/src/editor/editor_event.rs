// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BACKSPACE, ENTER, EditorBuffer, KeyEvent, SpecialKey, caret_mut,
            content_mut};

/// Events that change the [`EditorBuffer`]. Keys that don't edit the document (quit,
/// save, escape) are handled by the event loop and never become an `EditorEvent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorEvent {
    InsertChar(char),
    InsertNewLine,
    Backspace,
    MoveCaret(CaretDirection),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaretDirection {
    Up,
    Down,
    Left,
    Right,
}

impl TryFrom<KeyEvent> for EditorEvent {
    type Error = KeyEvent;

    /// Returns the key back if it doesn't map to an edit.
    fn try_from(key: KeyEvent) -> Result<Self, Self::Error> {
        match key {
            KeyEvent::Char(ENTER) => Ok(Self::InsertNewLine),
            KeyEvent::Char(BACKSPACE) => Ok(Self::Backspace),
            KeyEvent::Char(ch) if !ch.is_control() => Ok(Self::InsertChar(ch)),
            KeyEvent::Special(SpecialKey::Up) => Ok(Self::MoveCaret(CaretDirection::Up)),
            KeyEvent::Special(SpecialKey::Down) => {
                Ok(Self::MoveCaret(CaretDirection::Down))
            }
            KeyEvent::Special(SpecialKey::Left) => {
                Ok(Self::MoveCaret(CaretDirection::Left))
            }
            KeyEvent::Special(SpecialKey::Right) => {
                Ok(Self::MoveCaret(CaretDirection::Right))
            }
            _ => Err(key),
        }
    }
}

impl EditorEvent {
    pub fn apply_editor_event(buffer: &mut EditorBuffer, editor_event: EditorEvent) {
        match editor_event {
            EditorEvent::InsertChar(ch) => content_mut::insert_char_at_caret(buffer, ch),
            EditorEvent::InsertNewLine => content_mut::insert_new_line_at_caret(buffer),
            EditorEvent::Backspace => content_mut::backspace_at_caret(buffer),
            EditorEvent::MoveCaret(direction) => match direction {
                CaretDirection::Up => caret_mut::up(buffer),
                CaretDirection::Down => caret_mut::down(buffer),
                CaretDirection::Left => caret_mut::left(buffer),
                CaretDirection::Right => caret_mut::right(buffer),
            },
        }
    }

    pub fn apply_editor_events(
        buffer: &mut EditorBuffer,
        editor_events: impl IntoIterator<Item = EditorEvent>,
    ) {
        for editor_event in editor_events {
            Self::apply_editor_event(buffer, editor_event);
        }
    }
}
