// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use strum_macros::{AsRefStr, Display};

/// The signals that end the editor. They are delivered to the event loop as input, so
/// that teardown runs the same way it does for a quit key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr)]
pub enum TerminationSignal {
    #[strum(to_string = "SIGINT")]
    Interrupt,

    #[strum(to_string = "SIGTERM")]
    Terminate,
}

/// Result of waiting for one byte of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    Byte(u8),
    /// The timeout passed to [`InputDevice::read_byte`] elapsed with no input.
    TimedOut,
    /// A termination signal arrived while waiting.
    Interrupted(TerminationSignal),
    /// The input stream is closed. Every later read returns this too.
    Eof,
}

/// Source of raw input bytes. The stdin implementation lives in
/// [`crate::StdinInputDevice`], tests use [`crate::InputDeviceMock`].
pub trait InputDevice {
    /// Waits for the next byte. `None` blocks until a byte, a signal, or end of input
    /// arrives. `Some(timeout)` gives up after `timeout` and returns
    /// [`ReadOutcome::TimedOut`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read or poll fails (other than being
    /// interrupted, which is retried).
    fn read_byte(&mut self, timeout: Option<Duration>) -> miette::Result<ReadOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_signal_display() {
        assert_eq2!(TerminationSignal::Interrupt.to_string(), "SIGINT");
        assert_eq2!(TerminationSignal::Terminate.as_ref(), "SIGTERM");
    }
}
