// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::TerminationSignal;

/// A decoded logical key, produced by [`crate::read_key`].
///
/// Control bytes (`0x00..=0x1F`, `0x7F`) are passed through as [`KeyEvent::Char`] so
/// the dispatcher can map them, eg: `Ctrl+S` arrives as `'\x13'`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEvent {
    Char(char),
    Special(SpecialKey),
    /// A complete escape sequence or byte sequence that has no meaning here. It is
    /// consumed in full and ignored.
    Unidentified,
    Interrupted(TerminationSignal),
    InputClosed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialKey {
    Up,
    Down,
    Left,
    Right,
    Escape,
}

/// Maps a letter to the byte the terminal sends when it is pressed with `Ctrl`.
#[must_use]
pub const fn ctrl_key(ch: u8) -> char { (ch & 0x1f) as char }

pub const CTRL_C: char = ctrl_key(b'c');
pub const CTRL_Q: char = ctrl_key(b'q');
pub const CTRL_S: char = ctrl_key(b's');
pub const ENTER: char = '\r';
pub const BACKSPACE: char = '\x7f';
pub const ESC: u8 = 0x1b;

impl KeyEvent {
    /// `true` for the bytes that should be inserted into the buffer, ie: anything that
    /// isn't a control character.
    #[must_use]
    pub fn is_printable(&self) -> bool {
        matches!(self, KeyEvent::Char(ch) if !ch.is_control())
    }
}
