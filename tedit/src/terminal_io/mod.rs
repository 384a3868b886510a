// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod input_device;
pub mod key_event;
pub mod output_device;
pub mod read_key;
#[cfg(unix)]
pub mod stdin_input_device;

// Re-export.
pub use input_device::*;
pub use key_event::*;
pub use output_device::*;
pub use read_key::*;
#[cfg(unix)]
pub use stdin_input_device::*;
