// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::Size;

pub const DEFAULT_ESCAPE_TIMEOUT: Duration = Duration::from_millis(100);
pub const DEFAULT_MAX_FILENAME_LEN: usize = 255;

/// Runtime settings, built once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    /// Typing a character that brings the caret column to this value moves the caret
    /// to the start of the next row. This is a real row break in the buffer, not a
    /// display wrap.
    pub wrap_width: usize,
    /// How long to wait for each byte after the first byte of a key (escape sequence
    /// tails, UTF-8 continuation bytes).
    pub escape_timeout: Duration,
    /// Longest file name accepted by the save prompt, in characters.
    pub max_filename_len: usize,
}

impl EditorConfig {
    /// Wraps at the terminal width, which is what the size query at startup returned.
    #[must_use]
    pub fn new(terminal_size: Size) -> Self {
        Self {
            wrap_width: (*terminal_size.col_width).max(1),
            escape_timeout: DEFAULT_ESCAPE_TIMEOUT,
            max_filename_len: DEFAULT_MAX_FILENAME_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, height, width};

    #[test]
    fn test_wrap_width_follows_terminal_width() {
        let config = EditorConfig::new(width(72) + height(20));
        assert_eq2!(config.wrap_width, 72);
        assert_eq2!(config.escape_timeout, DEFAULT_ESCAPE_TIMEOUT);
        assert_eq2!(config.max_filename_len, 255);
    }
}
