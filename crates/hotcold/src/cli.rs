//! Command-line interface for hotcold.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hot/cold - guess the secret number before your attempts run out
#[derive(Parser, Debug)]
#[command(name = "hotcold")]
#[command(about = "Terminal number-guessing game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the JSON result log (created if it doesn't exist)
    #[arg(long, default_value = "data/results.json")]
    pub results: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Subcommand to run (defaults to play)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play rounds until you decline another
    Play,

    /// Print a summary of recorded games and exit
    Stats,
}
