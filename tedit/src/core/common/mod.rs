// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Enable or disable debug logging of decoded key events and dispatched commands.
pub const DEBUG_TEDIT_INPUT: bool = true;

/// Enable or disable debug logging of buffer mutations and viewport reconciliation.
pub const DEBUG_TEDIT_EDITOR: bool = true;

/// Enable or disable debug logging of terminal session setup and teardown.
pub const DEBUG_TEDIT_TERMINAL: bool = true;

// Attach sources.
pub mod decl_macros;
pub mod miette_setup_global_report_handler;
pub mod tedit_errors;

// Re-export.
pub use miette_setup_global_report_handler::*;
pub use tedit_errors::*;
