//! Command-line front end: append one line to the dated log from a shell script.

use crate::config::Config;
use crate::internal;
use crate::level::Level;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// dailylog - Append a line to today's log file.
#[derive(Debug, Parser)]
#[command(name = "dailylog", version, about = "Append a line to today's log file")]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log directory, overriding the config file
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Print dailylog's own diagnostics to stderr
    #[arg(long)]
    pub diagnostics: bool,

    /// Log level (debug, info, warn, error)
    #[arg(value_parser = str::parse::<Level>)]
    pub level: Level,

    /// Message words, joined with single spaces
    #[arg(required = true)]
    pub message: Vec<String>,
}

/// Loads config, builds the writer, and logs the message.
#[must_use]
pub fn run(cli: Cli) -> ExitCode {
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config = match config {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    config.general.diagnostics |= cli.diagnostics;
    internal::init_with_config(&config);

    if let Some(root) = cli.root {
        config.file.root = root.to_string_lossy().into_owned();
    }

    let writer = match config.writer() {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::debug("CLI", &format!("Logging at {} to {}", cli.level, writer.root().display()));
    writer.log(cli.level, format_args!("{}", cli.message.join(" ")));

    match writer.close() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
