// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios VMIN VTIME ICANON ECHONL IEXTEN OPOST

//! Raw mode for the controlling terminal.
//!
//! In the default "cooked" mode the tty driver buffers input until Enter is pressed,
//! echoes every key, and turns `Ctrl+C` / `Ctrl+Z` into signals. An editor needs every
//! byte as soon as it is typed, with no echo, so it switches the terminal into raw mode:
//!
//! | Flag      | Cooked | Raw |
//! | :-------- | :----- | :-- |
//! | `ICANON`  | on     | off (no line buffering) |
//! | `ECHO`    | on     | off |
//! | `ISIG`    | on     | off (`Ctrl+C` arrives as byte `0x03`) |
//! | `IEXTEN`  | on     | off |
//! | `OPOST`   | on     | off (no `\n` to `\r\n` translation) |
//! | `VMIN`    | -      | 1 |
//! | `VTIME`   | -      | 0 |
//!
//! The original attributes are captured the first time raw mode is enabled and restored
//! by [`disable_raw_mode`]. Restoring is idempotent. Prefer [`RawModeGuard`] so that the
//! terminal is restored on every exit path, including panics.

// Attach.
pub mod raw_mode_core;
#[cfg(unix)]
mod raw_mode_unix;

// Re-export.
pub use raw_mode_core::*;
