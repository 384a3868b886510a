// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// Creates a file appender that never rolls over. A bare file name (eg: `log.txt`) is
/// created in the current working directory.
///
/// Note that if you wrap this up in a non blocking writer, the worker guard has to be
/// kept alive for the life of the process, otherwise nothing gets written.
///
/// # Errors
///
/// Returns an error if the path has no file name.
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(&path_str);

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::try_create_temp_dir;

    #[test]
    fn test_try_create_in_dir() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = dir.join("tedit_test.log");
        let appender = try_create(file_path.to_str().unwrap());
        assert!(appender.is_ok());
        assert!(file_path.exists());
    }

    #[test]
    fn test_try_create_rejects_path_without_file_name() {
        assert!(try_create("..").is_err());
    }
}
