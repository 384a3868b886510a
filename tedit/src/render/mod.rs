// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod paint;
pub mod render_editor;
pub mod render_op;

// Re-export.
pub use paint::*;
pub use render_editor::*;
pub use render_op::*;
