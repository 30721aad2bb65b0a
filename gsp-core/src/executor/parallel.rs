//! Parallel counting strategy

use crate::{
    domain::{frequency, Candidate, Dataset, FrequencyTable, Item, MismatchBudget},
    error::{Error, Result},
    executor::{ExecutionMode, Executor},
};
use rayon::prelude::*;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Multi-threaded executor backed by a dedicated rayon pool
#[derive(Debug)]
pub struct ParallelExecutor {
    pool: rayon::ThreadPool,
}

impl ParallelExecutor {
    /// Create an executor with `threads` workers (`None` = one per CPU)
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let num_threads = threads.unwrap_or_else(num_cpus::get);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|index| format!("gsp-count-{index}"))
            .build()
            .map_err(|e| Error::worker_failure(format!("failed to build worker pool: {e}")))?;

        log::debug!("Built counting pool with {num_threads} threads");
        Ok(Self { pool })
    }

    /// Number of workers in the pool
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `count_one` for every candidate on the pool.
    ///
    /// Blocks until every task has finished. A panicking task fails the whole
    /// call; no partial table is returned.
    pub(crate) fn count_by<T, F>(
        &self,
        candidates: Vec<Candidate<T>>,
        threshold: f64,
        count_one: F,
    ) -> Result<FrequencyTable<T>>
    where
        T: Item,
        F: Fn(&Candidate<T>) -> usize + Sync,
    {
        let counted: Vec<(Candidate<T>, usize)> = self.pool.install(|| {
            candidates
                .into_par_iter()
                .map(|candidate| {
                    panic::catch_unwind(AssertUnwindSafe(|| count_one(&candidate)))
                        .map(|count| (candidate, count))
                        .map_err(|payload| Error::worker_failure(panic_message(payload)))
                })
                .collect::<Result<Vec<_>>>()
        })?;

        Ok(FrequencyTable::try_from_counts(counted)?.retain_frequent(threshold))
    }
}

impl Executor for ParallelExecutor {
    fn count<T: Item>(
        &self,
        candidates: Vec<Candidate<T>>,
        dataset: &Dataset<T>,
        threshold: f64,
        budget: MismatchBudget,
    ) -> Result<FrequencyTable<T>> {
        self.count_by(candidates, threshold, |candidate| {
            frequency(candidate, dataset, budget)
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("counting task panicked: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("counting task panicked: {msg}")
    } else {
        "counting task panicked".to_string()
    }
}
