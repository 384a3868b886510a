// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Global [miette](https://docs.rs/miette/latest/miette/index.html) report hook.
//!
//! The hook is only run when a [`miette::Report`] is displayed, which for `tedit` is
//! when `main` returns an error. By then the terminal session has been torn down, so
//! the report is printed to a normal (cooked) terminal and can be sized to its width.

use miette::MietteHandlerOpts;

/// Fallback width used when the terminal width can't be queried (eg: stdout is piped).
pub const DEFAULT_REPORT_WIDTH: usize = 80;

/// Registers a graphical report handler. The terminal width is computed lazily, at the
/// time the report is rendered.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_REPORT_WIDTH, |(columns, _rows)| usize::from(columns));
            tracing::debug!(message = "miette::set_hook", terminal_width = it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
