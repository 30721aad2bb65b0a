//! Sample command implementation

use super::{init_logging, mine_with_progress};
use crate::error::CliError;
use crate::output::{write_report, OutputFormat, RenderOptions};
use anyhow::Result;
use clap::Args;
use gsp_core::{Element, Miner, Transaction};

/// Arguments for the sample command
#[derive(Debug, Args)]
pub struct SampleArgs {
    /// Minimum support fraction in (0.0, 1.0]
    #[arg(short = 's', long, default_value_t = 0.1)]
    pub min_support: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

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

/// The three demonstration transactions
pub fn sample_transactions() -> Vec<Transaction<String>> {
    let item = |s: &str| Element::item(s.to_string());
    let set = |items: [&str; 2]| Element::set(items.map(str::to_string));

    vec![
        vec![item("a"), item("b"), item("c"), set(["c", "d"]), item("d")],
        vec![item("a"), item("a"), item("b"), set(["c", "d"])],
        vec![item("a"), item("a")],
    ]
}

impl SampleArgs {
    /// Execute the sample command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let miner = Miner::new(sample_transactions(), self.min_support).map_err(CliError::from)?;
        let report = mine_with_progress(&miner, self.quiet)?;

        let options = RenderOptions {
            format: self.format,
            all_levels: self.all_levels,
            pretty_json: true,
        };
        write_report(&report, options, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dataset_shape() {
        let transactions = sample_transactions();
        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions.iter().map(Vec::len).max(), Some(5));
        assert!(matches!(transactions[0][3], Element::ItemSet(_)));
    }
}
