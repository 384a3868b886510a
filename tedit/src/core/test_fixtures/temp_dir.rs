// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          ops::Deref,
          path::{Path, PathBuf},
          sync::atomic::{AtomicUsize, Ordering},
          time::{SystemTime, UNIX_EPOCH}};

use miette::IntoDiagnostic;

/// A temporary directory that is deleted (with everything in it) when dropped.
#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Creates a new, uniquely named directory under [`std::env::temp_dir`].
///
/// # Errors
///
/// Returns an error if the directory can't be created.
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |it| it.as_nanos());
    let count = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir_name = format!("tedit_{}_{nanos}_{count}", std::process::id());

    let new_temp_dir = std::env::temp_dir().join(dir_name);
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

impl Drop for TempDir {
    fn drop(&mut self) {
        // Best effort, there is nobody to report a failure to.
        let _unused = std::fs::remove_dir_all(&self.inner);
    }
}

/// Allow access to the inner [`PathBuf`], eg: `temp_dir.join("file.txt")`.
impl Deref for TempDir {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}

impl Display for TempDir {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}

impl AsRef<Path> for TempDir {
    fn as_ref(&self) -> &Path { &self.inner }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_is_deleted_on_drop() {
        let temp_dir = try_create_temp_dir().unwrap();
        std::fs::write(temp_dir.join("file.txt"), "content").unwrap();
        assert!(temp_dir.exists());

        let copy_of_path = temp_dir.inner.clone();
        drop(temp_dir);
        assert!(!copy_of_path.exists());
    }

    #[test]
    fn test_temp_dirs_are_unique() {
        let a = try_create_temp_dir().unwrap();
        let b = try_create_temp_dir().unwrap();
        assert_ne!(a.inner, b.inner);
    }
}
