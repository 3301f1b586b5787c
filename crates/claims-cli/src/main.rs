//! Home-care claims billing CLI.

use clap::{ColorChoice, Parser};
use claims_cli::logging::{LogConfig, LogFormat, init_logging};
use claims_submit::ExportOutcome;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_export, run_generate, run_submit, run_validate};
use crate::summary::{
    print_export, print_export_validation, print_failure, print_generate, print_submit,
    print_validation,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Validate(args) => match run_validate(&args) {
            Ok(response) => {
                print_validation(&response);
                if response.error_count > 0 { 1 } else { 0 }
            }
            Err(error) => {
                print_failure(&error);
                1
            }
        },
        Command::Submit(args) => match run_submit(&args) {
            Ok(run) => {
                print_submit(&run.response, Some(&run.written_to));
                0
            }
            Err(error) => {
                print_failure(&error);
                1
            }
        },
        Command::Export(args) => match run_export(&args) {
            Ok(run) => match run.outcome {
                ExportOutcome::Exported(result) => {
                    // A produced export always has a written path.
                    if let Some(path) = &run.written_to {
                        print_export(&result, path);
                    }
                    0
                }
                ExportOutcome::Validated(validation) => {
                    print_export_validation(&validation);
                    if validation.valid { 0 } else { 1 }
                }
            },
            Err(error) => {
                print_failure(&error);
                1
            }
        },
        Command::Generate(args) => match run_generate(&args) {
            Ok(run) => {
                print_generate(&run.report);
                println!("Book updated: {}", run.written_to.display());
                0
            }
            Err(error) => {
                print_failure(&error);
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
