// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod save_file;

// Re-export.
pub use save_file::*;
