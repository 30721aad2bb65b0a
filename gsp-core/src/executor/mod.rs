//! Execution strategies for support counting

use crate::domain::{Candidate, Dataset, FrequencyTable, Item, MismatchBudget};
use crate::error::Result;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Single-threaded counting
    Sequential,
    /// One task per candidate on a worker pool
    Parallel,
    /// Pick sequential or parallel per level from the amount of work
    #[default]
    Adaptive,
}

impl ExecutionMode {
    /// Lower-case name of the mode
    pub fn name(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        }
    }
}

/// Trait for counting strategies
pub trait Executor: Send + Sync {
    /// Count the support of every candidate and keep those meeting
    /// `threshold`.
    ///
    /// `candidates` must be free of duplicates; a duplicate is reported as a
    /// worker failure rather than silently merged.
    fn count<T: Item>(
        &self,
        candidates: Vec<Candidate<T>>,
        dataset: &Dataset<T>,
        threshold: f64,
        budget: MismatchBudget,
    ) -> Result<FrequencyTable<T>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Choose a concrete mode for a level.
///
/// `work` is the number of matcher invocations the level needs
/// (candidates × transactions).
pub fn auto_select(work: usize, threshold: usize) -> ExecutionMode {
    if work >= threshold && cfg!(feature = "parallel") {
        ExecutionMode::Parallel
    } else {
        ExecutionMode::Sequential
    }
}
