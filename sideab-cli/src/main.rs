//! `sideab` command-line entry point

use clap::Parser;
use sideab_cli::commands::Commands;
use std::process::ExitCode;

/// Build the sideab portfolio site and segment Japanese text
#[derive(Debug, Parser)]
#[command(name = "sideab", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
