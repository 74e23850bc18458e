//! Cairn CLI - consistent naming and labeling for infrastructure stacks
//!
//! This is the main entry point for the Cairn command-line interface.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let stack = cli.stack_source();
    match cli.command {
        Commands::Name(args) => commands::name::run(args),
        Commands::Labels(args) => commands::labels::run(args),
        Commands::Region(cmd) => commands::region::run(cmd),
        Commands::Config(cmd) => commands::config::run(cmd, &stack),
        Commands::Preview(args) => commands::preview::run(args, &stack),
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
