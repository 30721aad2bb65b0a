//! Configuration for mining runs

use crate::domain::{JoinStrategy, MismatchBudget};
use crate::error::{Error, Result};
use crate::executor::ExecutionMode;

/// Default configuration constants
pub mod defaults {
    /// Matcher invocations per level above which adaptive mode goes parallel
    pub const PARALLEL_THRESHOLD: usize = 10_000;

    /// Mismatches tolerated per window
    pub const MISMATCH_BUDGET: usize = 0;
}

/// Mining configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MinerConfig {
    pub(crate) min_support: f64,
    pub(crate) mismatch_budget: MismatchBudget,
    pub(crate) execution_mode: ExecutionMode,
    pub(crate) threads: Option<usize>, // None = all available threads
    pub(crate) parallel_threshold: usize,
    pub(crate) join_strategy: JoinStrategy,
}

impl MinerConfig {
    /// Create a configuration with default settings and the given minimum
    /// support fraction
    pub fn new(min_support: f64) -> Result<Self> {
        Self::builder().min_support(min_support).build()
    }

    /// Preset that always counts on the calling thread
    pub fn sequential(min_support: f64) -> Result<Self> {
        Self::builder().min_support(min_support).sequential().build()
    }

    /// Preset that always counts on a pool with one worker per CPU
    pub fn parallel(min_support: f64) -> Result<Self> {
        Self::builder().min_support(min_support).parallel().build()
    }

    /// Create a configuration builder
    pub fn builder() -> MinerConfigBuilder {
        MinerConfigBuilder::default()
    }

    /// Minimum support fraction in (0.0, 1.0]
    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    /// Mismatches tolerated per matching window
    pub fn mismatch_budget(&self) -> MismatchBudget {
        self.mismatch_budget
    }

    /// Requested execution mode
    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution_mode
    }

    /// Worker count (`None` = one per CPU)
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Adaptive-mode switch point, in matcher invocations per level
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Join collision policy
    pub fn join_strategy(&self) -> JoinStrategy {
        self.join_strategy
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if !(self.min_support > 0.0 && self.min_support <= 1.0) {
            return Err(Error::invalid_argument(format!(
                "minsup must be in (0.0, 1.0], got {}",
                self.min_support
            )));
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(Error::invalid_argument("threads must be greater than 0"));
            }
        }

        Ok(())
    }
}

/// Fluent builder for [`MinerConfig`]
#[derive(Debug, Default)]
pub struct MinerConfigBuilder {
    min_support: Option<f64>,
    mismatch_budget: Option<i64>,
    execution_mode: Option<ExecutionMode>,
    threads: Option<usize>,
    parallel_threshold: Option<usize>,
    join_strategy: Option<JoinStrategy>,
}

impl MinerConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum support fraction (required)
    pub fn min_support(mut self, fraction: f64) -> Self {
        self.min_support = Some(fraction);
        self
    }

    /// Set the per-window mismatch budget; negative values are rejected by
    /// [`build`](Self::build)
    pub fn mismatch_budget(mut self, budget: i64) -> Self {
        self.mismatch_budget = Some(budget);
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = Some(mode);
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Set the adaptive-mode switch point
    pub fn parallel_threshold(mut self, work: usize) -> Self {
        self.parallel_threshold = Some(work);
        self
    }

    /// Set the join collision policy
    pub fn join_strategy(mut self, strategy: JoinStrategy) -> Self {
        self.join_strategy = Some(strategy);
        self
    }

    /// Always count on the calling thread
    pub fn sequential(self) -> Self {
        self.execution_mode(ExecutionMode::Sequential)
    }

    /// Always count on the worker pool
    pub fn parallel(self) -> Self {
        self.execution_mode(ExecutionMode::Parallel)
    }

    /// Build the configuration
    pub fn build(self) -> Result<MinerConfig> {
        let min_support = self
            .min_support
            .ok_or_else(|| Error::invalid_argument("minsup is required"))?;

        let mismatch_budget = match self.mismatch_budget {
            Some(budget) => MismatchBudget::try_from(budget)?,
            None => MismatchBudget::new(defaults::MISMATCH_BUDGET),
        };

        let config = MinerConfig {
            min_support,
            mismatch_budget,
            execution_mode: self.execution_mode.unwrap_or_default(),
            threads: self.threads,
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults::PARALLEL_THRESHOLD),
            join_strategy: self.join_strategy.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MinerConfig::new(0.5).unwrap();
        assert_eq!(config.min_support(), 0.5);
        assert_eq!(config.mismatch_budget(), MismatchBudget::EXACT);
        assert_eq!(config.execution_mode(), ExecutionMode::Adaptive);
        assert_eq!(config.threads(), None);
        assert_eq!(config.parallel_threshold(), defaults::PARALLEL_THRESHOLD);
        assert_eq!(config.join_strategy(), JoinStrategy::Grouped);
    }

    #[test]
    fn test_min_support_bounds() {
        assert!(MinerConfig::new(1.0).is_ok());
        assert!(MinerConfig::new(f64::MIN_POSITIVE).is_ok());

        for bad in [0.0, -0.1, 1.0001, f64::NAN, f64::INFINITY] {
            let result = MinerConfig::new(bad);
            assert!(
                matches!(result, Err(Error::InvalidArgument(_))),
                "minsup {bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_missing_min_support() {
        let result = MinerConfig::builder().build();
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_negative_budget_rejected() {
        let result = MinerConfig::builder()
            .min_support(0.5)
            .mismatch_budget(-1)
            .build();
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let result = MinerConfig::builder()
            .min_support(0.5)
            .threads(Some(0))
            .build();
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_presets() {
        let config = MinerConfig::builder()
            .min_support(0.2)
            .sequential()
            .mismatch_budget(1)
            .join_strategy(JoinStrategy::LastWins)
            .build()
            .unwrap();

        assert_eq!(config.execution_mode(), ExecutionMode::Sequential);
        assert_eq!(config.mismatch_budget().get(), 1);
        assert_eq!(config.join_strategy(), JoinStrategy::LastWins);

        let parallel = MinerConfig::builder()
            .min_support(0.2)
            .parallel()
            .threads(Some(2))
            .build()
            .unwrap();
        assert_eq!(parallel.execution_mode(), ExecutionMode::Parallel);
        assert_eq!(parallel.threads(), Some(2));

        assert_eq!(
            MinerConfig::sequential(0.3).unwrap().execution_mode(),
            ExecutionMode::Sequential
        );
        assert_eq!(
            MinerConfig::parallel(0.3).unwrap().execution_mode(),
            ExecutionMode::Parallel
        );
        assert!(MinerConfig::sequential(0.0).is_err());
    }
}
