// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configures the tracing subscriber. The editor owns the whole screen, so the only
/// writer that makes sense while it runs is a file.
///
/// - `writer_config`: where the log output goes, see [`WriterConfig`].
/// - `level_filter`: the maximum verbosity. [`LevelFilter::OFF`] disables logging.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WriterConfig {
    None,
    File(String /* tracing_log_file_path */),
}

impl Default for TracingConfig {
    /// Logging is disabled by default.
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }
}

impl TracingConfig {
    /// Debug level logging to the given file, or to [`DEFAULT_LOG_FILE_NAME`].
    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

impl From<bool /* enable_logging */> for TracingConfig {
    fn from(enable_logging: bool) -> Self {
        if enable_logging {
            Self::new_file(None)
        } else {
            Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_logging_is_off_by_default() {
        let config: TracingConfig = false.into();
        assert_eq2!(config.get_level_filter(), LevelFilter::OFF);
        assert_eq2!(config.get_writer_config(), WriterConfig::None);
    }

    #[test]
    fn test_enable_logging_writes_to_default_file() {
        let config: TracingConfig = true.into();
        assert_eq2!(config.get_level_filter(), LevelFilter::DEBUG);
        assert_eq2!(
            config.get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );
    }
}
