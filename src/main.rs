//! `dotfile-sync` binary.
use anyhow::Result;
use clap::Parser;

use dotfile_sync::cli::Cli;
use dotfile_sync::logging::{self, Logger};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber(args.verbose);

    let log = Logger::new();
    dotfile_sync::commands::run(args.command, &log)?;
    Ok(())
}
