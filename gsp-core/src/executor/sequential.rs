//! Sequential counting strategy

use crate::{
    domain::{frequency, Candidate, Dataset, FrequencyTable, Item, MismatchBudget},
    error::Result,
    executor::{ExecutionMode, Executor},
};

/// Sequential single-threaded executor
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn count<T: Item>(
        &self,
        candidates: Vec<Candidate<T>>,
        dataset: &Dataset<T>,
        threshold: f64,
        budget: MismatchBudget,
    ) -> Result<FrequencyTable<T>> {
        let counted = candidates.into_iter().map(|candidate| {
            let count = frequency(&candidate, dataset, budget);
            (candidate, count)
        });

        Ok(FrequencyTable::try_from_counts(counted)?.retain_frequent(threshold))
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
