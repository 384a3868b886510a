// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod app_command;
pub mod clap_config;
pub mod event_loop;
pub mod prompt;
pub mod terminal_session;

// Re-export.
pub use app_command::*;
pub use clap_config::*;
pub use event_loop::*;
pub use prompt::*;
pub use terminal_session::*;
