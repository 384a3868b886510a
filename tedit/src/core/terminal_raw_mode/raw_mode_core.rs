// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Platform-agnostic raw mode API and the [`RawModeGuard`] RAII wrapper.

#[cfg(unix)]
use super::raw_mode_unix;

/// Enable raw mode on the terminal.
///
/// # Errors
///
/// Returns a [`crate::TerminalError`] if the terminal attributes can't be retrieved or
/// set, or if the platform isn't supported.
pub fn enable_raw_mode() -> miette::Result<()> {
    #[cfg(unix)]
    {
        Ok(raw_mode_unix::enable_raw_mode()?)
    }

    #[cfg(not(unix))]
    {
        crossterm::terminal::enable_raw_mode().map_err(|source| {
            crate::TerminalError::RawMode {
                action: "set",
                source,
            }
            .into()
        })
    }
}

/// Disable raw mode and restore the original terminal settings.
///
/// Safe to call more than once, and safe to call if raw mode was never enabled (it is a
/// no-op in both cases).
///
/// # Errors
///
/// Returns a [`crate::TerminalError`] if the terminal attributes can't be set.
pub fn disable_raw_mode() -> miette::Result<()> {
    #[cfg(unix)]
    {
        Ok(raw_mode_unix::disable_raw_mode()?)
    }

    #[cfg(not(unix))]
    {
        crossterm::terminal::disable_raw_mode().map_err(|source| {
            crate::TerminalError::RawMode {
                action: "set",
                source,
            }
            .into()
        })
    }
}

/// RAII guard that disables raw mode when dropped.
#[derive(Debug)]
pub struct RawModeGuard;

impl RawModeGuard {
    /// Create a new guard and enable raw mode.
    ///
    /// # Errors
    ///
    /// See [`enable_raw_mode()`] for error conditions.
    pub fn new() -> miette::Result<Self> {
        enable_raw_mode()?;
        Ok(RawModeGuard)
    }

    /// Restores the terminal now and returns the error, instead of only logging it on
    /// drop. The drop that follows is a no-op.
    ///
    /// # Errors
    ///
    /// See [`disable_raw_mode()`] for error conditions.
    pub fn restore(self) -> miette::Result<()> { disable_raw_mode() }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(error) = disable_raw_mode() {
            tracing::error!(message = "Failed to restore terminal", error = ?error);
        }
    }
}
