// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Owns the terminal while the editor runs: raw mode, the alternate screen, and the
//! hidden cursor. [`TerminalSession::end`] puts everything back, and it runs on every
//! exit path because [`Drop`] calls it too (quit key, signal, end of input, or an error
//! propagating out of the event loop).
//!
//! | Step    | Start                        | End                              |
//! | :------ | :--------------------------- | :------------------------------- |
//! | termios | raw mode on                  | original attributes restored     |
//! | screen  | enter alternate screen, clear| leave alternate screen           |
//! | cursor  | hidden                       | shown                            |
//! | last    |                              | `ESC[2J ESC[H` (clear and home)  |

use crossterm::{cursor::{Hide, MoveTo, Show},
                terminal::{Clear, ClearType, EnterAlternateScreen,
                           LeaveAlternateScreen}};
use miette::IntoDiagnostic;

use crate::{DEBUG_TEDIT_TERMINAL, LockedOutputDevice, OutputDevice, RawModeGuard,
            lock_output_device_as_mut, queue_terminal_command};

/// Written after everything else is restored, straight to the output device.
pub const CLEAR_SCREEN_AND_HOME: &[u8] = b"\x1b[2J\x1b[H";

#[allow(missing_debug_implementations)]
pub struct TerminalSession {
    output_device: OutputDevice,
    /// `None` for a mock output device, which has no tty behind it.
    maybe_raw_mode_guard: Option<RawModeGuard>,
    is_active: bool,
}

impl TerminalSession {
    /// # Errors
    ///
    /// Returns an error if raw mode can't be enabled, or the alternate screen can't be
    /// entered. In the second case the terminal has already been restored.
    pub fn try_start(output_device: OutputDevice) -> miette::Result<Self> {
        let maybe_raw_mode_guard = if output_device.is_mock {
            None
        } else {
            Some(RawModeGuard::new()?)
        };

        let session = Self {
            output_device,
            maybe_raw_mode_guard,
            is_active: true,
        };
        session.enter_alternate_screen()?;

        DEBUG_TEDIT_TERMINAL.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "TerminalSession::try_start",
                is_raw_mode = session.maybe_raw_mode_guard.is_some()
            );
        });
        Ok(session)
    }

    /// Restores the terminal. Only the first call does anything. Every step is
    /// attempted even if an earlier one fails; the first error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal or restoring termios fails.
    pub fn end(&mut self) -> miette::Result<()> {
        if !std::mem::take(&mut self.is_active) {
            return Ok(());
        }

        let leave_result = self.leave_alternate_screen();
        let raw_mode_result = self
            .maybe_raw_mode_guard
            .take()
            .map_or(Ok(()), RawModeGuard::restore);
        let clear_result = self.clear_screen_and_home();

        DEBUG_TEDIT_TERMINAL.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "TerminalSession::end",
                leave_result = ?leave_result,
                raw_mode_result = ?raw_mode_result,
                clear_result = ?clear_result
            );
        });
        leave_result.and(raw_mode_result).and(clear_result)
    }

    fn enter_alternate_screen(&self) -> miette::Result<()> {
        let locked_output_device: LockedOutputDevice<'_> =
            lock_output_device_as_mut!(self.output_device);
        queue_terminal_command!(
            locked_output_device,
            "enter_alternate_screen",
            EnterAlternateScreen,
            Hide,
            Clear(ClearType::All),
            MoveTo(0, 0),
        );
        locked_output_device.flush().into_diagnostic()
    }

    fn leave_alternate_screen(&self) -> miette::Result<()> {
        let locked_output_device: LockedOutputDevice<'_> =
            lock_output_device_as_mut!(self.output_device);
        queue_terminal_command!(
            locked_output_device,
            "leave_alternate_screen",
            LeaveAlternateScreen,
            Show,
        );
        locked_output_device.flush().into_diagnostic()
    }

    fn clear_screen_and_home(&self) -> miette::Result<()> {
        let locked_output_device: LockedOutputDevice<'_> =
            lock_output_device_as_mut!(self.output_device);
        locked_output_device
            .write_all(CLEAR_SCREEN_AND_HOME)
            .and_then(|()| locked_output_device.flush())
            .into_diagnostic()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(error) = self.end() {
            tracing::error!(message = "Failed to restore terminal", error = ?error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OutputDeviceExt, assert_eq2};

    const ENTER_ALT_SCREEN: &str = "\x1b[?1049h";
    const LEAVE_ALT_SCREEN: &str = "\x1b[?1049l";
    const SHOW_CURSOR: &str = "\x1b[?25h";

    #[test]
    fn test_start_and_end() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let mut session = TerminalSession::try_start(output_device).unwrap();
        assert!(
            stdout_mock
                .get_copy_of_buffer_as_string()
                .starts_with(ENTER_ALT_SCREEN)
        );

        session.end().unwrap();
        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert!(output.contains(LEAVE_ALT_SCREEN));
        assert!(output.contains(SHOW_CURSOR));
        assert!(output.ends_with("\x1b[2J\x1b[H"));

        // Ending again, or dropping, writes nothing more.
        let len_after_end = output.len();
        session.end().unwrap();
        drop(session);
        assert_eq2!(stdout_mock.get_copy_of_buffer_as_string().len(), len_after_end);
    }

    #[test]
    fn test_drop_restores_terminal() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        {
            let _session = TerminalSession::try_start(output_device).unwrap();
        }
        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert!(output.contains(LEAVE_ALT_SCREEN));
        assert!(output.ends_with("\x1b[2J\x1b[H"));
    }

    #[test]
    fn test_mock_output_skips_raw_mode() {
        let (output_device, _stdout_mock) = OutputDevice::new_mock();
        let mut session = TerminalSession::try_start(output_device).unwrap();
        assert!(session.maybe_raw_mode_guard.is_none());
        assert!(session.is_active);

        session.end().unwrap();
        assert!(!session.is_active);
    }
}
