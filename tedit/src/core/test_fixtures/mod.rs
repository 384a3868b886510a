// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures for unit and integration tests: scripted input, captured output, and
//! temporary directories.

// Attach.
pub mod input_device_mock;
pub mod output_device_ext;
pub mod stdout_mock;
pub mod temp_dir;

// Re-export.
pub use input_device_mock::*;
pub use output_device_ext::*;
pub use stdout_mock::*;
pub use temp_dir::*;
