// entsift/src/main.rs
//! EntSift entry point.
//!
//! Parses the CLI, bootstraps logging, and dispatches to the command
//! implementations.

use anyhow::Result;
use clap::Parser;

use entsift::cli::{Cli, Commands};
use entsift::{commands, logger};

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match &args.command {
        Commands::Analyze(cmd) => commands::analyze::run(cmd),
        Commands::Rules(cmd) => commands::rules::run(cmd),
    }
}
