// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words EINTR FIONREAD epoll kqueue

//! [`InputDevice`] backed by stdin, polled with [`mio`] together with a
//! [`signal_hook_mio`] source for `SIGINT` and `SIGTERM`.
//!
//! Both sources are registered with one [`Poll`], so a blocked read wakes up either
//! when the user types or when a termination signal arrives. The signal is then handed
//! to the event loop as [`ReadOutcome::Interrupted`] and the loop shuts down the same
//! way it does for `Ctrl+Q`, restoring the terminal.
//!
//! # EINTR handling
//!
//! Both [`Poll::poll`] and `read(2)` can fail with `EINTR` when a signal is delivered.
//! That is not an error: the call is retried (with the remaining part of the timeout),
//! and the signal itself is picked up from the signal source on the next poll.

use std::{collections::VecDeque,
          io::{ErrorKind, Stdin},
          os::fd::AsRawFd,
          time::{Duration, Instant}};

use mio::{Events, Interest, Poll, Token, unix::SourceFd};
use rustix::io::Errno;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_mio::v1_0::Signals;

use crate::{DEBUG_TEDIT_INPUT, InputDevice, ReadOutcome, TerminalError,
            TerminationSignal};

pub const STDIN_READ_BUFFER_SIZE: usize = 1_024;
const EVENTS_CAPACITY: usize = 8;
const STDIN_TOKEN: Token = Token(0);
const SIGNALS_TOKEN: Token = Token(1);

#[allow(missing_debug_implementations)]
pub struct StdinInputDevice {
    poll_handle: Poll,
    ready_events_buffer: Events,
    stdin: Stdin,
    signals: Signals,
    /// Bytes read from stdin that have not been handed out yet. One readiness event
    /// reads up to [`STDIN_READ_BUFFER_SIZE`] bytes (eg: a whole escape sequence, or a
    /// paste).
    pending_bytes: VecDeque<u8>,
    stdin_read_buffer: [u8; STDIN_READ_BUFFER_SIZE],
    is_stdin_closed: bool,
    /// The last read filled the whole buffer. The poll is edge triggered, so any bytes
    /// left in the tty won't produce another readiness event.
    maybe_more_input: bool,
}

impl StdinInputDevice {
    /// Creates the poll and registers stdin and the termination signals with it.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::PollSetup`] if the poll can't be created, or either
    /// source can't be registered.
    pub fn try_new() -> miette::Result<Self> {
        let poll_handle = Poll::new().map_err(|source| TerminalError::PollSetup {
            what: "create mio::Poll",
            source,
        })?;

        let stdin = std::io::stdin();
        poll_handle
            .registry()
            .register(
                &mut SourceFd(&stdin.as_raw_fd()),
                STDIN_TOKEN,
                Interest::READABLE,
            )
            .map_err(|source| TerminalError::PollSetup {
                what: "register stdin",
                source,
            })?;

        let mut signals =
            Signals::new([SIGINT, SIGTERM]).map_err(|source| TerminalError::PollSetup {
                what: "install SIGINT / SIGTERM handler",
                source,
            })?;
        poll_handle
            .registry()
            .register(&mut signals, SIGNALS_TOKEN, Interest::READABLE)
            .map_err(|source| TerminalError::PollSetup {
                what: "register signals",
                source,
            })?;

        Ok(Self {
            poll_handle,
            ready_events_buffer: Events::with_capacity(EVENTS_CAPACITY),
            stdin,
            signals,
            pending_bytes: VecDeque::with_capacity(STDIN_READ_BUFFER_SIZE),
            stdin_read_buffer: [0; STDIN_READ_BUFFER_SIZE],
            is_stdin_closed: false,
            maybe_more_input: false,
        })
    }

    /// Drains the signal source. Returns the first termination signal, if any.
    fn consume_pending_signals(&mut self) -> Option<TerminationSignal> {
        let mut it = None;
        for signal in self.signals.pending() {
            if let Some(termination_signal) = termination_signal_from(signal) {
                it.get_or_insert(termination_signal);
            }
        }
        it
    }

    /// Reads whatever stdin has (up to [`STDIN_READ_BUFFER_SIZE`]) into
    /// [`Self::pending_bytes`]. The fd is read directly, bypassing the buffer in
    /// [`Stdin`], so bytes are never hidden from the poll.
    fn consume_stdin_input(&mut self) -> miette::Result<()> {
        match rustix::io::read(&self.stdin, &mut self.stdin_read_buffer[..]) {
            Ok(0) => {
                DEBUG_TEDIT_INPUT.then(|| {
                    tracing::debug!(message = "stdin: EOF (0 bytes)");
                });
                self.is_stdin_closed = true;
                Ok(())
            }
            Ok(bytes_read) => {
                self.maybe_more_input = bytes_read == STDIN_READ_BUFFER_SIZE;
                self.pending_bytes
                    .extend(&self.stdin_read_buffer[..bytes_read]);
                Ok(())
            }
            // EINTR or spurious wakeup. Check again before the next poll.
            Err(Errno::INTR | Errno::AGAIN) => {
                self.maybe_more_input = true;
                Ok(())
            }
            Err(errno) => Err(miette::miette!("failed to read stdin: {errno}")),
        }
    }
}

/// Maps a raw signal number from [`Signals::pending`] to the signals that end the
/// editor.
#[must_use]
pub fn termination_signal_from(signal: i32) -> Option<TerminationSignal> {
    match signal {
        SIGINT => Some(TerminationSignal::Interrupt),
        SIGTERM => Some(TerminationSignal::Terminate),
        _ => None,
    }
}

impl InputDevice for StdinInputDevice {
    fn read_byte(&mut self, timeout: Option<Duration>) -> miette::Result<ReadOutcome> {
        let deadline = timeout.map(|it| Instant::now() + it);

        loop {
            if let Some(byte) = self.pending_bytes.pop_front() {
                return Ok(ReadOutcome::Byte(byte));
            }
            if self.is_stdin_closed {
                return Ok(ReadOutcome::Eof);
            }
            if std::mem::take(&mut self.maybe_more_input)
                && rustix::io::ioctl_fionread(&self.stdin).is_ok_and(|it| it > 0)
            {
                self.consume_stdin_input()?;
                continue;
            }

            let remaining = deadline.map(|it| it.saturating_duration_since(Instant::now()));
            if let Err(err) = self.poll_handle.poll(&mut self.ready_events_buffer, remaining)
            {
                if err.kind() == ErrorKind::Interrupted {
                    continue;
                }
                return Err(miette::miette!("failed to poll stdin: {err}"));
            }

            if self.ready_events_buffer.is_empty() {
                if deadline.is_some_and(|it| Instant::now() >= it) {
                    return Ok(ReadOutcome::TimedOut);
                }
                continue;
            }

            let ready_tokens: Vec<Token> = self
                .ready_events_buffer
                .iter()
                .map(mio::event::Event::token)
                .collect();

            for token in ready_tokens {
                match token {
                    SIGNALS_TOKEN => {
                        if let Some(signal) = self.consume_pending_signals() {
                            tracing::info!(message = "termination signal", %signal);
                            return Ok(ReadOutcome::Interrupted(signal));
                        }
                    }
                    STDIN_TOKEN => self.consume_stdin_input()?,
                    _ => {}
                }
            }
        }
    }
}
