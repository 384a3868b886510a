// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::{TracingConfig, try_create_layers};

/// Global default subscriber, which once set, can't be unset or changed. This is what the
/// `tedit` binary uses.
///
/// Logging is **DISABLED** by **default**. If the config's level filter is
/// [`tracing_core::LevelFilter::OFF`] (or there is no writer) this is a no-op, and the
/// [`tracing::info!`], [`tracing::debug!`], etc. calls in the crate produce nothing.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is
/// already installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(());
    }

    match try_create_layers(&it)? {
        Some(layers) => tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic(),
        None => Ok(()),
    }
}

/// Thread local subscriber. This is useful in tests, where each test can capture its own
/// log output. Drop the returned guard to uninstall it.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    Ok(try_create_layers(&it)?
        .map(|layers| tracing_subscriber::registry().with(layers).set_default()))
}
