// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
///
/// There are no positional arguments. The editor always starts with an empty buffer,
/// and a file name is asked for on the first save.
#[derive(Debug, Parser)]
#[command(bin_name = "tedit")]
#[command(about = "Minimal full-screen terminal scratch pad")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nKeys: Ctrl+S save, Ctrl+Q quit, Ctrl+C interrupt, arrows move.\nUSAGE:\n  tedit [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_logging_flag() {
        let cli_arg = CLIArg::try_parse_from(["tedit", "-l"]).unwrap();
        assert!(cli_arg.global_options.enable_logging);

        let cli_arg = CLIArg::try_parse_from(["tedit"]).unwrap();
        assert!(!cli_arg.global_options.enable_logging);
    }

    #[test]
    fn test_file_arguments_are_rejected() {
        assert!(CLIArg::try_parse_from(["tedit", "notes.txt"]).is_err());
    }
}
