// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod common;
pub mod dimens;
pub mod log;
pub mod term;
pub mod terminal_raw_mode;
pub mod test_fixtures;

// Re-export.
pub use common::*;
pub use dimens::*;
pub use log::*;
pub use term::*;
pub use terminal_raw_mode::*;
pub use test_fixtures::*;
