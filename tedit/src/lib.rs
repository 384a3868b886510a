// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios

//! # tedit
//!
//! A minimal full-screen terminal scratch pad. It starts with an empty in-memory
//! buffer, lets you edit it with the keyboard, and saves it to a plain text file.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//! - [Keys](#keys)
//! - [Architecture](#architecture)
//! - [Life of a keystroke](#life-of-a-keystroke)
//! - [Coordinates](#coordinates)
//! <!-- /TOC -->
//!
//! # Keys
//!
//! | Key           | Action                                           |
//! | :------------ | :----------------------------------------------- |
//! | `Ctrl+Q`      | Quit                                             |
//! | `Ctrl+S`      | Save (prompts for a file name the first time)    |
//! | `Ctrl+C`      | Interrupt (same orderly teardown as quit)        |
//! | `Backspace`   | Delete the character left of the caret, or join  |
//! | `Enter`       | Split the line at the caret                      |
//! | Arrow keys    | Move the caret                                   |
//! | Printable     | Insert at the caret (hard wraps at the wrap width) |
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐   bytes    ┌─────────────┐  KeyEvent  ┌─────────────┐
//! │ InputDevice      ├───────────▶│ read_key()  ├───────────▶│ EditorApp   │
//! │ (stdin + mio +   │            │ VT100 decode│            │ event loop  │
//! │  SIGINT/SIGTERM) │            └─────────────┘            └──────┬──────┘
//! └──────────────────┘                                              │
//!                        EditorEvent (insert, split, join, move)    │
//!        ┌──────────────────────────────────────────────────────────┤
//!        ▼                                                          │ save
//! ┌──────────────┐  read-only  ┌──────────────┐  RenderOps  ┌───────▼──────┐
//! │ EditorBuffer ├────────────▶│ render_editor├────────────▶│ paint()      │
//! │ lines, caret │             │ (pure)       │             │ OutputDevice │
//! │ viewport     │             └──────────────┘             └──────────────┘
//! └──────┬───────┘
//!        │ read-only
//!        ▼
//! ┌──────────────┐
//! │ persistence  │ ──▶ "line\n" per row
//! └──────────────┘
//! ```
//!
//! # Life of a keystroke
//!
//! 1. [`EditorApp::run_event_loop`] renders the current state with
//!    [`render_editor`] and paints it.
//! 2. It blocks in [`read_key`], which pulls bytes from an [`InputDevice`]. An `ESC`
//!    byte is followed by a bounded wait (see [`EditorConfig::escape_timeout`]) so a
//!    lone `Escape` press never hangs the loop.
//! 3. The [`KeyEvent`] is mapped to an [`AppCommand`]. Edits become [`EditorEvent`]s
//!    that mutate the [`EditorBuffer`], after which the [`Viewport`] is reconciled so
//!    the caret is always visible.
//! 4. Quit, interrupt (key or signal) and end of input move the loop into the
//!    [`LoopState::Quitting`] state. The [`TerminalSession`] guard restores the
//!    terminal on every exit path.
//!
//! # Coordinates
//!
//! - [`Caret`] is the logical insertion point in the buffer: a row index and a column
//!   index counted in characters. The column may equal the line length (end of line).
//! - [`ScrOfs`] is the scroll offset of the viewport.
//! - Screen position = caret − scroll offset (+ gutter width for the column).

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod app;
pub mod core;
pub mod editor;
pub mod persistence;
pub mod render;
pub mod terminal_io;

// Re-export.
pub use app::*;
pub use core::*;
pub use editor::*;
pub use persistence::*;
pub use render::*;
pub use terminal_io::*;
