// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use miette::Diagnostic;

/// Fatal failures of the terminal adapter. Any of these ends the process (after the
/// terminal has been restored), since the editor can't run without a working tty.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum TerminalError {
    /// Querying or setting the termios attributes failed.
    #[error("Failed to {action} terminal attributes")]
    #[diagnostic(
        code(tedit::terminal::raw_mode),
        help("Make sure tedit is running in an interactive terminal")
    )]
    RawMode {
        action: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The saved termios attributes are behind a poisoned lock.
    #[error("Terminal settings lock poisoned")]
    #[diagnostic(code(tedit::terminal::lock_poisoned))]
    LockPoisoned,

    /// The window size ioctl failed.
    #[error("Failed to query the terminal size")]
    #[diagnostic(
        code(tedit::terminal::size),
        help("Make sure stdout is connected to a terminal")
    )]
    SizeQuery(#[source] std::io::Error),

    /// The terminal reported a width of zero, which leaves nothing to render into.
    #[error("Terminal reported zero columns")]
    #[diagnostic(code(tedit::terminal::zero_columns))]
    ZeroColumns,

    /// Creating or registering the stdin / signal poll failed.
    #[error("Failed to set up input polling: {what}")]
    #[diagnostic(
        code(tedit::terminal::poll_setup),
        help("Check OS resource limits - use `ulimit -n` for file descriptors")
    )]
    PollSetup {
        what: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Recoverable failures when writing the buffer to its save target. These are shown on
/// the message line and never end the process.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum SaveError {
    #[error("{}: {source}", path.display())]
    #[diagnostic(
        code(tedit::save::open),
        help("Check that the directory exists and is writable")
    )]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    #[diagnostic(code(tedit::save::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
