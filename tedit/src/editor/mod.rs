// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod caret;
pub mod caret_mut;
pub mod content_mut;
pub mod editor_buffer;
pub mod editor_config;
pub mod editor_event;
pub mod line_buffer;
pub mod viewport;

// Re-export.
pub use caret::*;
pub use editor_buffer::*;
pub use editor_config::*;
pub use editor_event::*;
pub use line_buffer::*;
pub use viewport::*;
