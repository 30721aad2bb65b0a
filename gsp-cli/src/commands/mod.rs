//! CLI command implementations

use crate::error::CliError;
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use gsp_core::{Miner, MiningReport};

pub mod mine;
pub mod sample;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Mine frequent sequential patterns from a transaction file
    Mine(mine::MineArgs),

    /// Mine the built-in demonstration dataset
    Sample(sample::SampleArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List accepted input formats
    Inputs,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Mine(args) => args.execute(),
            Commands::Sample(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Formats => {
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        println!("{}", value.get_name());
                    }
                }
            }
            ListCommands::Inputs => {
                println!("json\tarray of transactions; item sets are nested arrays");
                println!("text\tone transaction per line; item sets are written {{c,d}}");
            }
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A second initialization (e.g. from tests) keeps the first logger.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

/// Run the miner with a progress spinner on stderr
pub(crate) fn mine_with_progress(
    miner: &Miner<String>,
    quiet: bool,
) -> Result<MiningReport<String>> {
    let progress = ProgressReporter::new(quiet);
    let result = miner.run_with_progress(|summary| progress.level_completed(summary));
    progress.finish();

    Ok(result.map_err(CliError::from)?)
}
