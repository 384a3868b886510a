// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The one line "Save as: " prompt, shown on the message line the first time the
//! buffer is saved. Raw mode stays on the whole time; the typed text is echoed by
//! rendering it as part of [`crate::MessageLine::Prompt`].

use crate::{BACKSPACE, CTRL_C, CTRL_Q, ENTER, ExitReason, KeyEvent, SpecialKey};

pub const SAVE_AS_LABEL: &str = "Save as: ";

/// How the prompt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Non empty file name.
    Accepted(String),
    /// Escape, `Ctrl+C`, `Ctrl+Q`, or Enter on an empty answer.
    Cancelled,
    /// A termination signal arrived, or input closed, while prompting.
    Exit(ExitReason),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavePrompt {
    input: String,
    max_len: usize,
}

impl SavePrompt {
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        Self {
            input: String::new(),
            max_len,
        }
    }

    #[must_use]
    pub fn input(&self) -> &str { &self.input }

    /// Feeds one key to the prompt. Returns `None` while the prompt is still open.
    /// Printable characters past `max_len` are dropped.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PromptOutcome> {
        match key {
            KeyEvent::Char(ENTER) => {
                let file_name = std::mem::take(&mut self.input);
                Some(if file_name.is_empty() {
                    PromptOutcome::Cancelled
                } else {
                    PromptOutcome::Accepted(file_name)
                })
            }
            KeyEvent::Char(BACKSPACE) => {
                self.input.pop();
                None
            }
            KeyEvent::Char(CTRL_C | CTRL_Q) | KeyEvent::Special(SpecialKey::Escape) => {
                Some(PromptOutcome::Cancelled)
            }
            KeyEvent::Char(ch) if !ch.is_control() => {
                if self.input.chars().count() < self.max_len {
                    self.input.push(ch);
                }
                None
            }
            KeyEvent::Interrupted(signal) => {
                Some(PromptOutcome::Exit(ExitReason::Interrupted(signal)))
            }
            KeyEvent::InputClosed => Some(PromptOutcome::Exit(ExitReason::InputClosed)),
            KeyEvent::Char(_) | KeyEvent::Special(_) | KeyEvent::Unidentified => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TerminationSignal, assert_eq2};

    fn type_keys(prompt: &mut SavePrompt, text: &str) {
        for ch in text.chars() {
            assert_eq2!(prompt.handle_key(KeyEvent::Char(ch)), None);
        }
    }

    #[test]
    fn test_enter_accepts() {
        let mut prompt = SavePrompt::new(255);
        type_keys(&mut prompt, "notes.txt");
        assert_eq2!(prompt.input(), "notes.txt");
        assert_eq2!(
            prompt.handle_key(KeyEvent::Char(ENTER)),
            Some(PromptOutcome::Accepted("notes.txt".into()))
        );
    }

    #[test]
    fn test_backspace_edits() {
        let mut prompt = SavePrompt::new(255);
        type_keys(&mut prompt, "ab");
        prompt.handle_key(KeyEvent::Char(BACKSPACE));
        prompt.handle_key(KeyEvent::Char(BACKSPACE));
        prompt.handle_key(KeyEvent::Char(BACKSPACE));
        type_keys(&mut prompt, "c");
        assert_eq2!(prompt.input(), "c");
    }

    #[test]
    fn test_empty_answer_cancels() {
        let mut prompt = SavePrompt::new(255);
        assert_eq2!(
            prompt.handle_key(KeyEvent::Char(ENTER)),
            Some(PromptOutcome::Cancelled)
        );
    }

    #[test]
    fn test_cancel_keys() {
        for key in [
            KeyEvent::Special(SpecialKey::Escape),
            KeyEvent::Char(CTRL_C),
            KeyEvent::Char(CTRL_Q),
        ] {
            let mut prompt = SavePrompt::new(255);
            type_keys(&mut prompt, "x");
            assert_eq2!(prompt.handle_key(key), Some(PromptOutcome::Cancelled));
        }
    }

    #[test]
    fn test_input_is_bounded() {
        let mut prompt = SavePrompt::new(3);
        type_keys(&mut prompt, "abcdef");
        assert_eq2!(prompt.input(), "abc");
    }

    #[test]
    fn test_ignored_keys() {
        let mut prompt = SavePrompt::new(255);
        for key in [
            KeyEvent::Special(SpecialKey::Left),
            KeyEvent::Unidentified,
            KeyEvent::Char('\t'),
        ] {
            assert_eq2!(prompt.handle_key(key), None);
        }
        assert_eq2!(prompt.input(), "");
    }

    #[test]
    fn test_signal_and_eof_exit() {
        let mut prompt = SavePrompt::new(255);
        assert_eq2!(
            prompt.handle_key(KeyEvent::Interrupted(TerminationSignal::Terminate)),
            Some(PromptOutcome::Exit(ExitReason::Interrupted(
                TerminationSignal::Terminate
            )))
        );
        assert_eq2!(
            prompt.handle_key(KeyEvent::InputClosed),
            Some(PromptOutcome::Exit(ExitReason::InputClosed))
        );
    }
}
