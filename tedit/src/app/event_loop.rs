// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The single threaded event loop. Each iteration paints the current state, blocks for
//! one key, and dispatches it:
//!
//! ```text
//!            ┌─────────────── key ────────────────┐
//!            ▼                                    │
//!      ┌───────────┐  Ctrl+Q, Ctrl+C, SIGINT,   ┌──┴───────────────────┐
//!  ───▶│  Running  ├───SIGTERM, end of input───▶│ Quitting(ExitReason) │
//!      └───────────┘                            └──────────────────────┘
//! ```
//!
//! Nothing in the loop touches the terminal modes. The caller owns a
//! [`crate::TerminalSession`] that restores the terminal however the loop ends,
//! including when it returns an error.

use std::path::PathBuf;

use crate::{AppCommand, DEBUG_TEDIT_EDITOR, EditorBuffer, EditorConfig, EditorEvent,
            InputDevice, KeyEvent, MessageLine, OutputDevice, PromptOutcome,
            SAVE_AS_LABEL, SavePrompt, Size, TerminationSignal, paint, read_key,
            render_editor, save_to_path};

/// Why the loop stopped. All of these are a normal exit (status 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    UserQuit,
    Interrupted(TerminationSignal),
    InputClosed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Quitting(ExitReason),
}

#[allow(missing_debug_implementations)]
pub struct EditorApp<I: InputDevice> {
    pub buffer: EditorBuffer,
    pub config: EditorConfig,
    pub terminal_size: Size,
    pub input_device: I,
    pub output_device: OutputDevice,
    /// Shown on the message line until the next key is handled.
    pub maybe_message: Option<String>,
    pub state: LoopState,
}

impl<I: InputDevice> EditorApp<I> {
    /// Starts with an empty buffer. There is no way to load a file.
    pub fn new(
        config: EditorConfig,
        terminal_size: Size,
        input_device: I,
        output_device: OutputDevice,
    ) -> Self {
        Self {
            buffer: EditorBuffer::new_empty(terminal_size, &config),
            config,
            terminal_size,
            input_device,
            output_device,
            maybe_message: None,
            state: LoopState::Running,
        }
    }

    /// Runs until the state becomes [`LoopState::Quitting`].
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or painting fails. A failed save is not an
    /// error, it is reported on the message line.
    pub fn run_event_loop(&mut self) -> miette::Result<ExitReason> {
        loop {
            if let LoopState::Quitting(exit_reason) = self.state {
                tracing::info!(
                    message = "run_event_loop -> quitting",
                    exit_reason = ?exit_reason
                );
                return Ok(exit_reason);
            }

            let message_line = self
                .maybe_message
                .as_deref()
                .map_or(MessageLine::Empty, MessageLine::Status);
            self.render(message_line)?;

            let key = read_key(&mut self.input_device, self.config.escape_timeout)?;
            self.state = self.dispatch_key(key)?;
        }
    }

    /// Applies one key to the editor and returns the next state.
    ///
    /// # Errors
    ///
    /// Returns an error if the save prompt can't read input or paint.
    pub fn dispatch_key(&mut self, key: KeyEvent) -> miette::Result<LoopState> {
        let app_command = AppCommand::from(key);

        DEBUG_TEDIT_EDITOR.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "dispatch_key",
                key = ?key,
                app_command = ?app_command
            );
        });

        self.maybe_message = None;

        Ok(match app_command {
            AppCommand::Quit => LoopState::Quitting(ExitReason::UserQuit),
            AppCommand::Interrupt(signal) => {
                tracing::info!(message = "interrupted", %signal);
                LoopState::Quitting(ExitReason::Interrupted(signal))
            }
            AppCommand::InputClosed => LoopState::Quitting(ExitReason::InputClosed),
            AppCommand::Save => match self.save()? {
                Some(exit_reason) => LoopState::Quitting(exit_reason),
                None => LoopState::Running,
            },
            AppCommand::Edit(editor_event) => {
                EditorEvent::apply_editor_event(&mut self.buffer, editor_event);
                LoopState::Running
            }
            AppCommand::Ignore => LoopState::Running,
        })
    }

    /// Writes the buffer to its save target, prompting for the target first if it is
    /// unset. Returns an exit reason if the user or a signal ended the process while
    /// the prompt was open.
    fn save(&mut self) -> miette::Result<Option<ExitReason>> {
        let path = match self.buffer.maybe_file_path.clone() {
            Some(path) => path,
            None => match self.prompt_for_file_name()? {
                PromptOutcome::Accepted(file_name) => {
                    let path = PathBuf::from(file_name);
                    self.buffer.maybe_file_path = Some(path.clone());
                    path
                }
                PromptOutcome::Cancelled => {
                    self.maybe_message = Some("Save aborted".to_string());
                    return Ok(None);
                }
                PromptOutcome::Exit(exit_reason) => return Ok(Some(exit_reason)),
            },
        };

        self.maybe_message = Some(match save_to_path(&self.buffer.lines, &path) {
            Ok(bytes_written) => {
                format!("File saved as {} ({bytes_written} bytes)", path.display())
            }
            Err(error) => {
                tracing::warn!(message = "save failed", error = %error);
                format!("Can't save! {error}")
            }
        });

        Ok(None)
    }

    fn prompt_for_file_name(&mut self) -> miette::Result<PromptOutcome> {
        let mut prompt = SavePrompt::new(self.config.max_filename_len);
        loop {
            self.render(MessageLine::Prompt {
                label: SAVE_AS_LABEL,
                input: prompt.input(),
            })?;
            let key = read_key(&mut self.input_device, self.config.escape_timeout)?;
            if let Some(prompt_outcome) = prompt.handle_key(key) {
                return Ok(prompt_outcome);
            }
        }
    }

    fn render(&self, message_line: MessageLine<'_>) -> miette::Result<()> {
        let render_ops = render_editor(&self.buffer, self.terminal_size, message_line);
        paint(&render_ops, &self.output_device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BACKSPACE, CTRL_C, CTRL_Q, CTRL_S, Caret, ENTER, InputDeviceMock,
                LineBuffer, OutputDeviceExt, ReadOutcome, StdoutMock, assert_eq2,
                height, try_create_temp_dir, width};

    fn new_app(bytes: &[u8]) -> (EditorApp<InputDeviceMock>, StdoutMock) {
        let terminal_size = width(200) + height(10);
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let app = EditorApp::new(
            EditorConfig::new(terminal_size),
            terminal_size,
            InputDeviceMock::from_bytes(bytes),
            output_device,
        );
        (app, stdout_mock)
    }

    fn lines_of<I: InputDevice>(app: &EditorApp<I>) -> Vec<&str> {
        app.buffer.lines.iter().collect()
    }

    #[test]
    fn test_quit_key() {
        let (mut app, stdout_mock) = new_app(&[b'h', b'i', CTRL_Q as u8, b'x']);
        assert_eq2!(app.run_event_loop().unwrap(), ExitReason::UserQuit);
        assert_eq2!(lines_of(&app), vec!["hi"]);
        assert!(
            stdout_mock
                .get_copy_of_buffer_as_string()
                .contains("Characters: 2 | Rows: 1 | Position: 1:3")
        );
    }

    #[test]
    fn test_ctrl_c_key_is_interrupt() {
        let (mut app, _) = new_app(&[CTRL_C as u8]);
        assert_eq2!(
            app.run_event_loop().unwrap(),
            ExitReason::Interrupted(TerminationSignal::Interrupt)
        );
    }

    #[test]
    fn test_signal_ends_loop() {
        let (mut app, _) = new_app(b"ab");
        app.input_device
            .push([ReadOutcome::Interrupted(TerminationSignal::Terminate)]);
        assert_eq2!(
            app.run_event_loop().unwrap(),
            ExitReason::Interrupted(TerminationSignal::Terminate)
        );
        assert_eq2!(lines_of(&app), vec!["ab"]);
    }

    #[test]
    fn test_end_of_input_ends_loop() {
        let (mut app, _) = new_app(b"abc");
        assert_eq2!(app.run_event_loop().unwrap(), ExitReason::InputClosed);
        assert_eq2!(app.state, LoopState::Quitting(ExitReason::InputClosed));
    }

    #[test]
    fn test_editing_keys() {
        let (mut app, _) = new_app(b"ab\rcd\x1b[D\x7f\x1b[A\x1b[3~z");
        app.run_event_loop().unwrap();
        // "ab", "cd" -> Left -> Backspace removes 'c' -> Up (column clamps to 0) ->
        // Delete key is ignored -> 'z' is inserted at the start of the first row.
        assert_eq2!(lines_of(&app), vec!["zab", "d"]);
        assert_eq2!(app.buffer.caret, Caret::new(0, 1));
    }

    #[test]
    fn test_meta_prefixed_arrow_moves_caret_without_typing() {
        // Alt+Left on a terminal that sends a meta prefix: ESC ESC [ D.
        let (mut app, _) = new_app(b"ab\x1b\x1b[Dx");
        app.run_event_loop().unwrap();
        assert_eq2!(lines_of(&app), vec!["axb"]);
        assert_eq2!(app.buffer.caret, Caret::new(0, 2));
    }

    #[test]
    fn test_save_prompts_then_reuses_target() {
        let temp_dir = try_create_temp_dir().unwrap();
        let path = temp_dir.join("out.txt");

        let mut bytes = b"one".to_vec();
        bytes.push(CTRL_S as u8);
        bytes.extend(path.to_string_lossy().as_bytes());
        bytes.push(ENTER as u8);
        bytes.extend(b"\rtwo");
        bytes.push(CTRL_S as u8);
        bytes.push(CTRL_Q as u8);

        let (mut app, stdout_mock) = new_app(&bytes);
        assert_eq2!(app.run_event_loop().unwrap(), ExitReason::UserQuit);

        assert_eq2!(app.buffer.maybe_file_path.as_ref(), Some(&path));
        assert_eq2!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert!(output.contains(SAVE_AS_LABEL));
        assert!(output.contains("(4 bytes)"));
        assert!(output.contains("(8 bytes)"));
    }

    #[test]
    fn test_cancelled_prompt_leaves_target_unset() {
        let mut bytes = b"x".to_vec();
        bytes.push(CTRL_S as u8);
        bytes.extend(b"name");
        bytes.push(0x1b);
        let (mut app, _) = new_app(&bytes);
        app.input_device.push([ReadOutcome::TimedOut]);
        app.input_device.push([ReadOutcome::Byte(CTRL_Q as u8)]);

        assert_eq2!(app.run_event_loop().unwrap(), ExitReason::UserQuit);
        assert_eq2!(app.buffer.maybe_file_path, None);
        assert_eq2!(lines_of(&app), vec!["x"]);
    }

    #[test]
    fn test_empty_file_name_aborts() {
        // The prompt reads these after Ctrl+S is dispatched.
        let bytes = [BACKSPACE as u8, ENTER as u8];
        let (mut app, _) = new_app(&bytes);
        app.state = app.dispatch_key(KeyEvent::Char(CTRL_S)).unwrap();
        assert_eq2!(app.state, LoopState::Running);
        assert_eq2!(app.maybe_message.as_deref(), Some("Save aborted"));
        assert_eq2!(app.buffer.maybe_file_path, None);
    }

    #[test]
    fn test_failed_save_keeps_buffer_and_loop() {
        let temp_dir = try_create_temp_dir().unwrap();
        let bad_path = temp_dir.join("missing_dir").join("out.txt");

        let (mut app, _) = new_app(b"");
        app.buffer.lines = LineBuffer::from_lines(["keep me"]);
        app.buffer.maybe_file_path = Some(bad_path);

        let state = app.dispatch_key(KeyEvent::Char(CTRL_S)).unwrap();

        assert_eq2!(state, LoopState::Running);
        assert_eq2!(lines_of(&app), vec!["keep me"]);
        assert!(
            app.maybe_message
                .as_deref()
                .is_some_and(|it| it.starts_with("Can't save! "))
        );
    }

    #[test]
    fn test_signal_during_prompt_exits() {
        let (mut app, _) = new_app(&[CTRL_S as u8, b'a']);
        app.input_device
            .push([ReadOutcome::Interrupted(TerminationSignal::Interrupt)]);
        assert_eq2!(
            app.run_event_loop().unwrap(),
            ExitReason::Interrupted(TerminationSignal::Interrupt)
        );
        assert_eq2!(app.buffer.maybe_file_path, None);
    }
}
