//! Sheet renumbering CLI.

use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use sheetnum_cli::logging::{LogConfig, LogFormat, init_logging};
use sheetnum_cli::project::JsonProject;
use sheetnum_cli::prompt::PromptSelector;
use sheetnum_core::RenumberEngine;
use sheetnum_model::{RenumberError, RenumberOutcome};

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(outcome) => {
            println!("Renumbered {} sheet(s).", outcome.renumbered);
            0
        }
        Err(error) => match error.downcast_ref::<RenumberError>() {
            Some(RenumberError::Cancelled) => {
                println!("Operation cancelled; no sheets were changed.");
                0
            }
            _ => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<RenumberOutcome> {
    let mut project = JsonProject::load(&cli.project)
        .map_err(RenumberError::Host)
        .with_context(|| format!("loading project {}", cli.project.display()))?;
    let engine = RenumberEngine::new(project.definitions().to_vec());
    let snapshot = project.snapshot();
    let stdin = io::stdin();
    let mut selector = PromptSelector::new(stdin.lock(), io::stdout());
    let outcome = engine.run(&snapshot, &mut selector, &mut project)?;
    Ok(outcome)
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
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
