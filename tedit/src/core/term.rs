// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words tcgetwinsize winsize

use crate::{Size, TerminalError, height, width};

/// Get the terminal size by querying the window size of stdout with [`tcgetwinsize`].
/// The size is queried once at startup; resizes aren't tracked.
///
/// # Errors
///
/// Returns an error if:
/// - The window size ioctl fails (eg: stdout is not a terminal)
/// - The terminal reports zero columns
///
/// [`tcgetwinsize`]: fn@rustix::termios::tcgetwinsize
#[cfg(unix)]
pub fn get_size() -> miette::Result<Size> {
    let winsize = rustix::termios::tcgetwinsize(std::io::stdout())
        .map_err(|e| TerminalError::SizeQuery(e.into()))?;
    Ok(validate_size(
        usize::from(winsize.ws_col),
        usize::from(winsize.ws_row),
    )?)
}

/// Get the terminal size.
///
/// # Errors
///
/// Returns an error if the terminal size can't be determined, or it has zero columns.
#[cfg(not(unix))]
pub fn get_size() -> miette::Result<Size> {
    let (columns, rows) = crossterm::terminal::size()
        .map_err(TerminalError::SizeQuery)?;
    Ok(validate_size(usize::from(columns), usize::from(rows))?)
}

/// Rendering can't proceed without a known, non-zero width.
///
/// # Errors
///
/// Returns [`TerminalError::ZeroColumns`] if `columns` is zero.
pub fn validate_size(columns: usize, rows: usize) -> Result<Size, TerminalError> {
    if columns == 0 {
        return Err(TerminalError::ZeroColumns);
    }
    Ok(width(columns) + height(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_validate_size_rejects_zero_columns() {
        let result = validate_size(0, 24);
        assert!(matches!(result, Err(TerminalError::ZeroColumns)));
    }

    #[test]
    fn test_validate_size_ok() {
        let size = validate_size(80, 24).unwrap();
        assert_eq2!(size, width(80) + height(24));
    }
}
