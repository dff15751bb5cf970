//! Appends a single line to today's log file. Handy from cron jobs and
//! shell scripts that want the same layout as the library.
//!
//! Usage:
//!   dailylog [--config PATH] [--root DIR] [--diagnostics] <LEVEL> <MESSAGE>...

use clap::Parser;
use dailylog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    run(Cli::parse())
}
