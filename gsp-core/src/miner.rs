//! Level-wise mining engine
//!
//! The miner owns its dataset and drives the generate → count → prune loop:
//!
//! 1. count the level-1 seeds against `minsup × |transactions|`;
//! 2. while the last level is non-empty and one more item still fits in the
//!    longest transaction, join the last level's survivors and count them;
//! 3. return the level before the last one appended (the last level that
//!    still had survivors when the loop stopped on an empty level), or an
//!    empty table when only level 1 was counted.
//!
//! Levels run strictly one after another; every counting call is a full
//! barrier.

use crate::{
    config::MinerConfig,
    domain::{join, seed, Candidate, Dataset, FrequencyTable, Item, MismatchBudget, Transaction},
    error::{Result, Stage},
    executor::ExecutionMode,
    support::SupportCounter,
};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// GSP miner over an owned dataset
#[derive(Debug, Clone)]
pub struct Miner<T: Item> {
    dataset: Dataset<T>,
    config: MinerConfig,
}

/// Per-level statistics, reported as each level completes
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSummary {
    /// Candidate length of this level
    pub level: usize,
    /// Candidates generated for this level
    pub candidates: usize,
    /// Candidates that met the threshold
    pub survivors: usize,
    /// Mode the counting actually ran in
    pub execution_mode: ExecutionMode,
    /// Wall time spent generating and counting
    pub elapsed: Duration,
}

/// Run metadata
#[derive(Debug, Clone, PartialEq)]
pub struct MiningMetadata {
    /// Absolute support threshold (`minsup × |transactions|`)
    pub threshold: f64,
    /// Number of levels counted, including a final empty one
    pub levels_explored: usize,
    /// Total candidates counted across all levels
    pub candidates_evaluated: usize,
    /// Per-level statistics
    pub levels: Vec<LevelSummary>,
    /// Total run time
    pub processing_time: Duration,
}

/// Full result of a mining run
#[derive(Debug, Clone)]
pub struct MiningReport<T: Item> {
    /// The second-to-last counted level; empty when only level 1 was counted
    pub patterns: FrequencyTable<T>,
    /// Every counted level, indexed by candidate length minus one
    pub levels: Vec<FrequencyTable<T>>,
    /// Run metadata
    pub metadata: MiningMetadata,
}

impl<T: Item> MiningReport<T> {
    /// Frequent patterns of a given length, if that level was counted
    pub fn level(&self, length: usize) -> Option<&FrequencyTable<T>> {
        length.checked_sub(1).and_then(|index| self.levels.get(index))
    }
}

impl<T: Item> Miner<T> {
    /// Create a miner with default settings
    pub fn new(transactions: Vec<Transaction<T>>, min_support: f64) -> Result<Self> {
        Self::with_config(transactions, MinerConfig::new(min_support)?)
    }

    /// Create a miner with a custom configuration
    pub fn with_config(transactions: Vec<Transaction<T>>, config: MinerConfig) -> Result<Self> {
        Self::from_dataset(Dataset::new(transactions)?, config)
    }

    /// Create a miner over an existing dataset
    pub fn from_dataset(dataset: Dataset<T>, config: MinerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { dataset, config })
    }

    /// The dataset being mined
    pub fn dataset(&self) -> &Dataset<T> {
        &self.dataset
    }

    /// The active configuration
    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Absolute support threshold; fractional values are kept as-is
    pub fn threshold(&self) -> f64 {
        self.config.min_support * self.dataset.len() as f64
    }

    /// Mine and return the frequent patterns
    pub fn run(&self) -> Result<FrequencyTable<T>> {
        Ok(self.run_report()?.patterns)
    }

    /// Mine and return the result with the level history and metadata
    pub fn run_report(&self) -> Result<MiningReport<T>> {
        self.run_with_progress(|_| {})
    }

    /// Mine, calling `on_level` after each level is counted
    pub fn run_with_progress<F>(&self, mut on_level: F) -> Result<MiningReport<T>>
    where
        F: FnMut(&LevelSummary),
    {
        let start = Instant::now();
        let threshold = self.threshold();
        let budget = self.config.mismatch_budget;
        let max_size = self.dataset.max_size();

        log::info!(
            "Mining {} transactions (minsup {}, threshold {threshold}, max length {max_size})",
            self.dataset.len(),
            self.config.min_support
        );

        let counter = SupportCounter::new(&self.dataset, &self.config)
            .map_err(|e| e.at_level(1, Stage::Seed))?;

        let mut summaries = Vec::new();
        let mut levels: Vec<FrequencyTable<T>> = Vec::new();

        let level_start = Instant::now();
        let seeds = seed(&self.dataset);
        let first = self.count_level(&counter, 1, seeds, budget, level_start, &mut summaries)?;
        if let Some(summary) = summaries.last() {
            on_level(summary);
        }
        levels.push(first);

        while let Some(last) = levels.last() {
            let next = levels.len() + 1;
            if last.is_empty() || next > max_size {
                break;
            }

            let level_start = Instant::now();
            let candidates = join(last.candidates(), self.config.join_strategy)
                .map_err(|e| e.at_level(next, Stage::Join))?;
            let table = self.count_level(
                &counter,
                next,
                candidates,
                budget,
                level_start,
                &mut summaries,
            )?;
            if let Some(summary) = summaries.last() {
                on_level(summary);
            }
            levels.push(table);
        }

        let patterns = levels
            .len()
            .checked_sub(2)
            .and_then(|index| levels.get(index))
            .cloned()
            .unwrap_or_default();

        let metadata = MiningMetadata {
            threshold,
            levels_explored: levels.len(),
            candidates_evaluated: summaries.iter().map(|s| s.candidates).sum(),
            levels: summaries,
            processing_time: start.elapsed(),
        };

        log::info!(
            "Found {} frequent patterns after {} levels in {:?}",
            patterns.len(),
            metadata.levels_explored,
            metadata.processing_time
        );

        Ok(MiningReport {
            patterns,
            levels,
            metadata,
        })
    }

    fn count_level(
        &self,
        counter: &SupportCounter<'_, T>,
        level: usize,
        candidates: HashSet<Candidate<T>>,
        budget: MismatchBudget,
        started: Instant,
        summaries: &mut Vec<LevelSummary>,
    ) -> Result<FrequencyTable<T>> {
        let candidate_count = candidates.len();
        let (table, execution_mode) = counter
            .count_with_mode(candidates, self.threshold(), budget)
            .map_err(|e| e.at_level(level, Stage::Count))?;

        let summary = LevelSummary {
            level,
            candidates: candidate_count,
            survivors: table.len(),
            execution_mode,
            elapsed: started.elapsed(),
        };
        log::debug!(
            "Level {level}: {} candidates, {} frequent ({} mode, {:?})",
            summary.candidates,
            summary.survivors,
            execution_mode.name(),
            summary.elapsed
        );
        summaries.push(summary);

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Element;
    use crate::error::Error;

    fn items(labels: &[&'static str]) -> Transaction<&'static str> {
        labels.iter().map(|label| Element::item(*label)).collect()
    }

    #[test]
    fn test_invalid_min_support() {
        let result = Miner::new(vec![items(&["a"])], 0.0);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_empty_transactions_rejected() {
        let result = Miner::<&str>::new(Vec::new(), 0.5);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_threshold_is_fractional() {
        let miner = Miner::new(vec![items(&["a"]), items(&["b"]), items(&["c"])], 0.5).unwrap();
        assert_eq!(miner.threshold(), 1.5);
    }

    #[test]
    fn test_nothing_frequent_returns_empty_table() {
        // Each item appears once; threshold 2.0 keeps nothing.
        let miner = Miner::new(vec![items(&["a"]), items(&["b"])], 1.0).unwrap();
        let report = miner.run_report().unwrap();

        assert!(report.patterns.is_empty());
        assert_eq!(report.levels.len(), 1);
        assert_eq!(report.metadata.levels_explored, 1);
    }

    #[test]
    fn test_all_empty_transactions() {
        let miner = Miner::<&str>::new(vec![vec![], vec![]], 0.5).unwrap();
        assert!(miner.run().unwrap().is_empty());
    }

    #[test]
    fn test_returns_level_before_final_empty_one() {
        let miner = Miner::new(
            vec![items(&["a", "b", "x"]), items(&["a", "b", "y"])],
            1.0,
        )
        .unwrap();
        let report = miner.run_report().unwrap();

        // Level 3 is counted and comes back empty.
        assert_eq!(report.levels.len(), 3);
        assert!(report.levels[2].is_empty());
        assert_eq!(report.patterns.len(), 1);
        assert_eq!(report.patterns.get(&Candidate::new(["a", "b"])), Some(2));
    }

    #[test]
    fn test_stops_at_max_size() {
        let miner = Miner::new(vec![items(&["a", "b"]), items(&["a", "b"])], 1.0).unwrap();
        let report = miner.run_report().unwrap();

        // No length-3 level is attempted. The result is still the
        // second-to-last level, even though the final one is non-empty.
        assert_eq!(report.levels.len(), 2);
        assert!(report.level(3).is_none());
        assert_eq!(report.level(2).and_then(|l| l.get(&Candidate::new(["a", "b"]))), Some(2));
        assert_eq!(report.patterns.len(), 2);
        assert_eq!(report.patterns.get(&Candidate::single("a")), Some(2));
        assert_eq!(report.patterns.get(&Candidate::single("b")), Some(2));
    }

    #[test]
    fn test_single_level_run_returns_empty_table() {
        // Every transaction has one element, so the loop body never runs.
        let miner = Miner::new(vec![items(&["a"]), items(&["a"])], 0.5).unwrap();
        let report = miner.run_report().unwrap();

        assert_eq!(report.levels.len(), 1);
        assert_eq!(report.level(1).map(FrequencyTable::len), Some(1));
        assert!(report.patterns.is_empty());
    }

    #[test]
    fn test_progress_callback_sees_every_level() {
        let miner = Miner::new(
            vec![items(&["a", "b", "c"]), items(&["a", "b", "c"])],
            0.5,
        )
        .unwrap();

        let mut seen = Vec::new();
        let report = miner
            .run_with_progress(|summary| seen.push(summary.level))
            .unwrap();

        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(report.metadata.levels.len(), 3);
        assert_eq!(
            report.metadata.candidates_evaluated,
            report.metadata.levels.iter().map(|l| l.candidates).sum::<usize>()
        );
    }
}
