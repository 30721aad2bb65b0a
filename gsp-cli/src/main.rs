//! GSP command-line entry point

use anyhow::Result;
use clap::Parser;
use gsp_cli::commands::Commands;

/// Mine frequent sequential patterns from transaction files
#[derive(Debug, Parser)]
#[command(name = "gsp", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
