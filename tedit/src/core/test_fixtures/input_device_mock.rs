// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque, time::Duration};

use crate::{InputDevice, ReadOutcome};

/// Replays a scripted sequence of [`ReadOutcome`]s. Once the script runs out every read
/// returns [`ReadOutcome::Eof`], like a closed stdin.
///
/// A scripted [`ReadOutcome::TimedOut`] only makes sense for a read that has a timeout.
/// A blocking read (no timeout) skips over it, since it would never time out.
#[derive(Debug, Default)]
pub struct InputDeviceMock {
    pub script: VecDeque<ReadOutcome>,
    /// The timeout of every read, in order. Lets tests check which reads were bounded.
    pub requested_timeouts: Vec<Option<Duration>>,
}

impl InputDeviceMock {
    #[must_use]
    pub fn new(script: Vec<ReadOutcome>) -> Self {
        Self {
            script: script.into(),
            requested_timeouts: vec![],
        }
    }

    /// All bytes are available immediately, as if typed faster than the escape
    /// timeout.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().copied().map(ReadOutcome::Byte).collect())
    }

    /// Appends more outcomes to the end of the script.
    pub fn push(&mut self, outcomes: impl IntoIterator<Item = ReadOutcome>) {
        self.script.extend(outcomes);
    }
}

impl InputDevice for InputDeviceMock {
    fn read_byte(&mut self, timeout: Option<Duration>) -> miette::Result<ReadOutcome> {
        self.requested_timeouts.push(timeout);
        loop {
            match self.script.pop_front() {
                None => return Ok(ReadOutcome::Eof),
                Some(ReadOutcome::TimedOut) if timeout.is_none() => {}
                Some(outcome) => return Ok(outcome),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_script_then_eof() {
        let mut device = InputDeviceMock::from_bytes(b"a");
        assert_eq2!(device.read_byte(None).unwrap(), ReadOutcome::Byte(b'a'));
        assert_eq2!(device.read_byte(None).unwrap(), ReadOutcome::Eof);
        assert_eq2!(device.read_byte(None).unwrap(), ReadOutcome::Eof);
    }

    #[test]
    fn test_timed_out_only_for_bounded_reads() {
        let timeout = Some(Duration::from_millis(10));
        let mut device = InputDeviceMock::new(vec![
            ReadOutcome::TimedOut,
            ReadOutcome::TimedOut,
            ReadOutcome::Byte(b'b'),
        ]);
        assert_eq2!(device.read_byte(timeout).unwrap(), ReadOutcome::TimedOut);
        assert_eq2!(device.read_byte(None).unwrap(), ReadOutcome::Byte(b'b'));
        assert_eq2!(device.requested_timeouts, vec![timeout, None]);
    }
}
