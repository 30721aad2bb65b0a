//! Support counting with per-level execution mode selection

use crate::{
    config::MinerConfig,
    domain::{Candidate, Dataset, FrequencyTable, Item, MismatchBudget},
    error::Result,
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
};

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Counts candidate support over a dataset and prunes below a threshold
pub struct SupportCounter<'a, T: Item> {
    dataset: &'a Dataset<T>,
    mode: ExecutionMode,
    parallel_threshold: usize,
    sequential: SequentialExecutor,
    #[cfg(feature = "parallel")]
    parallel: Option<ParallelExecutor>,
}

impl<'a, T: Item> SupportCounter<'a, T> {
    /// Create a counter over `dataset`.
    ///
    /// The worker pool is built here, once per run, unless the configuration
    /// forces sequential counting.
    pub fn new(dataset: &'a Dataset<T>, config: &MinerConfig) -> Result<Self> {
        #[cfg(feature = "parallel")]
        let parallel = match config.execution_mode() {
            ExecutionMode::Sequential => None,
            ExecutionMode::Parallel | ExecutionMode::Adaptive => {
                Some(ParallelExecutor::new(config.threads())?)
            }
        };

        Ok(Self {
            dataset,
            mode: config.execution_mode(),
            parallel_threshold: config.parallel_threshold(),
            sequential: SequentialExecutor,
            #[cfg(feature = "parallel")]
            parallel,
        })
    }

    /// The dataset being counted against
    pub fn dataset(&self) -> &'a Dataset<T> {
        self.dataset
    }

    /// Concrete mode used for a level with `candidate_count` candidates
    pub fn select_mode(&self, candidate_count: usize) -> ExecutionMode {
        match self.mode {
            ExecutionMode::Adaptive => auto_select(
                candidate_count.saturating_mul(self.dataset.len()),
                self.parallel_threshold,
            ),
            mode => mode,
        }
    }

    /// Count every candidate and keep those with `frequency >= threshold`
    pub fn count<I>(
        &self,
        candidates: I,
        threshold: f64,
        budget: MismatchBudget,
    ) -> Result<FrequencyTable<T>>
    where
        I: IntoIterator<Item = Candidate<T>>,
    {
        self.count_with_mode(candidates, threshold, budget)
            .map(|(table, _)| table)
    }

    /// Like [`count`](Self::count), also reporting the mode that ran
    pub fn count_with_mode<I>(
        &self,
        candidates: I,
        threshold: f64,
        budget: MismatchBudget,
    ) -> Result<(FrequencyTable<T>, ExecutionMode)>
    where
        I: IntoIterator<Item = Candidate<T>>,
    {
        let candidates: Vec<Candidate<T>> = candidates.into_iter().collect();
        let mode = self.select_mode(candidates.len());
        log::trace!(
            "Counting {} candidates ({} mode)",
            candidates.len(),
            mode.name()
        );

        #[cfg(feature = "parallel")]
        if let (ExecutionMode::Parallel, Some(parallel)) = (mode, &self.parallel) {
            let table = parallel.count(candidates, self.dataset, threshold, budget)?;
            return Ok((table, parallel.mode()));
        }

        // Without a pool, parallel requests fall back to sequential
        let table = self
            .sequential
            .count(candidates, self.dataset, threshold, budget)?;
        Ok((table, self.sequential.mode()))
    }
}
