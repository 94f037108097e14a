//! Command-line interface definition.
use clap::Parser;

use crate::sync::Direction;

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "dotfile-sync",
    about = "Copy dotfiles between this repository and the home directory",
    version = crate::version()
)]
pub struct Cli {
    /// `write` copies repository files into the home directory, `sync`
    /// copies home directory files back into the repository
    #[arg(value_enum, ignore_case = true)]
    pub command: Direction,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
