// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CTRL_C, CTRL_Q, CTRL_S, EditorEvent, KeyEvent, TerminationSignal};

/// What the event loop does with a key.
///
/// | Key                          | Command                     |
/// | :--------------------------- | :-------------------------- |
/// | `Ctrl+Q`                     | [`AppCommand::Quit`]        |
/// | `Ctrl+C`, `SIGINT`, `SIGTERM`| [`AppCommand::Interrupt`]   |
/// | `Ctrl+S`                     | [`AppCommand::Save`]        |
/// | printable, Enter, Backspace, arrows | [`AppCommand::Edit`] |
/// | end of input                 | [`AppCommand::InputClosed`] |
/// | anything else                | [`AppCommand::Ignore`]      |
///
/// Raw mode turns off `ISIG`, so `Ctrl+C` arrives as a byte and not as a signal. It is
/// treated exactly like `SIGINT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppCommand {
    Quit,
    Interrupt(TerminationSignal),
    Save,
    Edit(EditorEvent),
    InputClosed,
    Ignore,
}

impl From<KeyEvent> for AppCommand {
    fn from(key: KeyEvent) -> Self {
        match key {
            KeyEvent::Char(CTRL_Q) => Self::Quit,
            KeyEvent::Char(CTRL_C) => Self::Interrupt(TerminationSignal::Interrupt),
            KeyEvent::Char(CTRL_S) => Self::Save,
            KeyEvent::Interrupted(signal) => Self::Interrupt(signal),
            KeyEvent::InputClosed => Self::InputClosed,
            _ => EditorEvent::try_from(key).map_or(Self::Ignore, Self::Edit),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{CaretDirection, ENTER, SpecialKey, assert_eq2};

    #[test_case(KeyEvent::Char(CTRL_Q), AppCommand::Quit)]
    #[test_case(KeyEvent::Char(CTRL_C), AppCommand::Interrupt(TerminationSignal::Interrupt))]
    #[test_case(KeyEvent::Interrupted(TerminationSignal::Terminate), AppCommand::Interrupt(TerminationSignal::Terminate))]
    #[test_case(KeyEvent::Char(CTRL_S), AppCommand::Save)]
    #[test_case(KeyEvent::InputClosed, AppCommand::InputClosed)]
    #[test_case(KeyEvent::Char('q'), AppCommand::Edit(EditorEvent::InsertChar('q')))]
    #[test_case(KeyEvent::Char(ENTER), AppCommand::Edit(EditorEvent::InsertNewLine))]
    #[test_case(KeyEvent::Special(SpecialKey::Up), AppCommand::Edit(EditorEvent::MoveCaret(CaretDirection::Up)))]
    #[test_case(KeyEvent::Special(SpecialKey::Escape), AppCommand::Ignore)]
    #[test_case(KeyEvent::Unidentified, AppCommand::Ignore)]
    #[test_case(KeyEvent::Char('\x01'), AppCommand::Ignore)]
    fn test_key_to_command(key: KeyEvent, expected: AppCommand) {
        assert_eq2!(AppCommand::from(key), expected);
    }
}
