// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Writes the buffer to a plain text file: every row followed by a single `\n`. An
//! empty buffer produces an empty file, a buffer with one empty row produces `"\n"`.

use std::{fs::File,
          io::{BufWriter, Write},
          path::Path};

use crate::{LineBuffer, SaveError};

#[must_use]
pub fn serialize(lines: &LineBuffer) -> String {
    let mut acc = String::with_capacity(lines.iter().map(|it| it.len() + 1).sum());
    for line in lines.iter() {
        acc.push_str(line);
        acc.push('\n');
    }
    acc
}

/// Creates (or truncates) the file at `path` and writes the buffer to it. Returns the
/// number of bytes written.
///
/// # Errors
///
/// Returns [`SaveError::Open`] if the file can't be created, and [`SaveError::Write`] if
/// writing to it fails. The buffer is never modified.
pub fn save_to_path(lines: &LineBuffer, path: &Path) -> Result<usize, SaveError> {
    let file = File::create(path).map_err(|source| SaveError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let content = serialize(lines);
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|source| SaveError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        message = "save_to_path",
        path = %path.display(),
        bytes = content.len()
    );

    Ok(content.len())
}
