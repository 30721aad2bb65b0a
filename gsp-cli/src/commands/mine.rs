//! Mine command implementation

use super::{init_logging, mine_with_progress};
use crate::config::{CliConfig, JoinChoice};
use crate::error::CliError;
use crate::input::{self, InputFormat};
use crate::output::{write_report, OutputFormat, RenderOptions};
use anyhow::Result;
use clap::Args;
use gsp_core::{ExecutionMode, Miner, MinerConfig};
use std::path::PathBuf;

/// Arguments for the mine command
#[derive(Debug, Args)]
pub struct MineArgs {
    /// Transaction file (JSON or text)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Input format (default: inferred from the file extension)
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Minimum support fraction in (0.0, 1.0]
    #[arg(short = 's', long, value_name = "FRACTION")]
    pub min_support: Option<f64>,

    /// Mismatches tolerated per matching window
    #[arg(short = 'w', long, value_name = "N", allow_negative_numbers = true)]
    pub mismatch_budget: Option<i64>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Always count on the worker pool
    #[arg(short, long, conflicts_with = "sequential")]
    pub parallel: bool,

    /// Always count on the calling thread
    #[arg(long)]
    pub sequential: bool,

    /// Worker thread count (default: number of CPUs)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Join collision policy
    #[arg(long, value_enum)]
    pub join: Option<JoinChoice>,

    /// Print every level instead of only the final one
    #[arg(long)]
    pub all_levels: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl MineArgs {
    /// Execute the mine command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting pattern mining");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let miner_config = self.miner_config(&file_config)?;
        let transactions = input::load_transactions(&self.input, self.input_format)?;

        let miner = Miner::with_config(transactions, miner_config).map_err(CliError::from)?;
        let report = mine_with_progress(&miner, self.quiet)?;

        write_report(&report, self.render_options(&file_config), self.output.as_deref())
    }

    /// Resolve the miner configuration; flags take precedence over the file
    pub fn miner_config(&self, file: &CliConfig) -> Result<MinerConfig> {
        let min_support = self
            .min_support
            .or(file.mining.min_support)
            .ok_or_else(|| {
                CliError::ConfigError(
                    "minimum support is required (--min-support or [mining] min_support)"
                        .to_string(),
                )
            })?;

        let mode = if self.parallel {
            ExecutionMode::Parallel
        } else if self.sequential {
            ExecutionMode::Sequential
        } else {
            file.performance.execution_mode.into()
        };

        let threads = self.threads.or(match file.performance.worker_threads {
            0 => None,
            n => Some(n),
        });

        let mut builder = MinerConfig::builder()
            .min_support(min_support)
            .mismatch_budget(self.mismatch_budget.unwrap_or(file.mining.mismatch_budget))
            .execution_mode(mode)
            .threads(threads)
            .join_strategy(self.join.unwrap_or(file.mining.join_strategy).into());
        if let Some(work) = file.performance.parallel_threshold {
            builder = builder.parallel_threshold(work);
        }

        Ok(builder.build().map_err(CliError::from)?)
    }

    /// Resolve rendering options; flags take precedence over the file
    pub fn render_options(&self, file: &CliConfig) -> RenderOptions {
        RenderOptions {
            format: self.format.unwrap_or(file.output.default_format),
            all_levels: self.all_levels || file.output.all_levels,
            pretty_json: file.output.pretty_json,
        }
    }
}
