// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios tcgetattr tcsetattr cfmakeraw

//! Unix implementation of raw mode using rustix's safe termios API.

use std::{fs::File,
          io,
          sync::{LazyLock, Mutex}};

use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, OptionalActions, Termios}};

use crate::TerminalError;

/// The terminal settings captured before raw mode was enabled. Taken (set back to
/// `None`) when they are restored.
static ORIGINAL_TERMIOS: LazyLock<Mutex<Option<Termios>>> =
    LazyLock::new(|| Mutex::new(None));

/// Either stdin (when it is a tty) or `/dev/tty` (when stdin is redirected).
enum TerminalFd {
    Stdin(io::Stdin),
    DevTty(File),
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::DevTty(file) => file.as_fd(),
        }
    }
}

fn get_terminal_fd() -> io::Result<TerminalFd> {
    let stdin = io::stdin();
    if termios::isatty(&stdin) {
        Ok(TerminalFd::Stdin(stdin))
    } else {
        let file = File::options().read(true).write(true).open("/dev/tty")?;
        Ok(TerminalFd::DevTty(file))
    }
}

/// Saves the current attributes (only if none are saved yet), then applies
/// [`Termios::make_raw`], which matches `cfmakeraw`: no canonical mode, no echo, no
/// signal keys, no input / output post processing, `VMIN=1`, `VTIME=0`.
pub fn enable_raw_mode() -> Result<(), TerminalError> {
    let fd = get_terminal_fd().map_err(|source| TerminalError::RawMode {
        action: "open",
        source,
    })?;

    let mut termios = termios::tcgetattr(&fd).map_err(|e| TerminalError::RawMode {
        action: "retrieve",
        source: e.into(),
    })?;

    {
        let mut original = ORIGINAL_TERMIOS
            .lock()
            .map_err(|_| TerminalError::LockPoisoned)?;
        if original.is_none() {
            *original = Some(termios.clone());
        }
    }

    termios.make_raw();

    termios::tcsetattr(&fd, OptionalActions::Now, &termios).map_err(|e| {
        TerminalError::RawMode {
            action: "set",
            source: e.into(),
        }
    })
}

/// Restores the attributes saved by [`enable_raw_mode`]. No-op if there is nothing
/// saved, so a second call (or a call without a prior enable) does nothing.
pub fn disable_raw_mode() -> Result<(), TerminalError> {
    let maybe_saved = ORIGINAL_TERMIOS
        .lock()
        .map_err(|_| TerminalError::LockPoisoned)?
        .take();

    let Some(saved) = maybe_saved else {
        return Ok(());
    };

    let fd = get_terminal_fd().map_err(|source| TerminalError::RawMode {
        action: "open",
        source,
    })?;

    termios::tcsetattr(&fd, OptionalActions::Now, &saved).map_err(|e| {
        TerminalError::RawMode {
            action: "set",
            source: e.into(),
        }
    })
}
