//! Hot/cold - terminal entry point.

#![warn(missing_docs)]

mod cli;

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use hotcold::{JsonResultLog, SessionController, TerminalInput, TerminalOutput, print_stats};
use hotcold_game::ThreadRngPicker;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so they never interleave with the game.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_game(&cli),
        Command::Stats => show_stats(&cli),
    }
}

/// Plays interactive rounds on stdin/stdout.
#[instrument(skip(cli), fields(results = %cli.results.display()))]
fn run_game(cli: &Cli) -> Result<()> {
    info!("Starting hotcold");

    let stdout = io::stdout();
    let color = !cli.no_color && stdout.is_terminal();

    let mut controller = SessionController::new(
        TerminalInput::new(io::stdin().lock()),
        TerminalOutput::new(stdout.lock(), color),
        ThreadRngPicker::new(),
        JsonResultLog::open(&cli.results),
    );
    controller.run()
}

/// Prints aggregated statistics from the result log.
#[instrument(skip(cli), fields(results = %cli.results.display()))]
fn show_stats(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let color = !cli.no_color && stdout.is_terminal();
    let mut output = TerminalOutput::new(stdout.lock(), color);
    print_stats(&JsonResultLog::open(&cli.results), &mut output)
}
