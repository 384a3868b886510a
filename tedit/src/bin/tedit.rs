// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use tedit::{CLIArg, setup_default_miette_global_report_handler,
            try_initialize_logging_global};

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);

    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;

    should_log.then(|| {
        try_initialize_logging_global(true).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let result = launch_tedit();

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    result
}

#[cfg(unix)]
fn launch_tedit() -> miette::Result<()> {
    use tedit::{EditorApp, EditorConfig, OutputDevice, StdinInputDevice, TerminalSession,
                get_size};

    let terminal_size = get_size()?;
    // % is Display, ? is Debug.
    tracing::info!(message = "launch_tedit", terminal_size = ?terminal_size);

    let config = EditorConfig::new(terminal_size);
    let input_device = StdinInputDevice::try_new()?;
    let output_device = OutputDevice::new_stdout();

    let mut terminal_session = TerminalSession::try_start(output_device.clone())?;
    let mut app = EditorApp::new(config, terminal_size, input_device, output_device);
    let loop_result = app.run_event_loop();

    // Restore the terminal before any error report is printed.
    let end_result = terminal_session.end();

    let exit_reason = loop_result?;
    end_result?;

    tracing::info!(message = "tedit exit", exit_reason = ?exit_reason);
    Ok(())
}

#[cfg(not(unix))]
fn launch_tedit() -> miette::Result<()> {
    Err(miette::miette!("tedit reads raw input from a unix terminal"))
}
