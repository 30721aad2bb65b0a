//! Configuration module
//!
//! An optional TOML file supplies defaults; command-line flags override it.
//!
//! ```toml
//! [mining]
//! min_support = 0.1
//! mismatch_budget = 0
//! join_strategy = "grouped"
//!
//! [performance]
//! execution_mode = "adaptive"
//! worker_threads = 0
//!
//! [output]
//! default_format = "json"
//! all_levels = true
//! ```

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use gsp_core::{ExecutionMode, JoinStrategy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Mining configuration
    #[serde(default)]
    pub mining: MiningConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

/// Mining-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct MiningConfig {
    /// Minimum support fraction
    pub min_support: Option<f64>,

    /// Mismatches tolerated per matching window
    #[serde(default)]
    pub mismatch_budget: i64,

    /// Join collision policy
    #[serde(default)]
    pub join_strategy: JoinChoice,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: None,
            mismatch_budget: 0,
            join_strategy: JoinChoice::Grouped,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct PerformanceConfig {
    /// Counting execution mode
    #[serde(default)]
    pub execution_mode: ModeChoice,

    /// Number of worker threads (0 = auto)
    #[serde(default)]
    pub worker_threads: usize,

    /// Adaptive switch point in matcher calls per level
    pub parallel_threshold: Option<usize>,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            execution_mode: ModeChoice::Adaptive,
            worker_threads: 0,
            parallel_threshold: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Print every level instead of only the final one
    #[serde(default)]
    pub all_levels: bool,

    /// Pretty print JSON output
    #[serde(default = "default_true")]
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            all_levels: false,
            pretty_json: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Join collision policy as spelled on the command line and in config files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum JoinChoice {
    /// Join every overlapping pair of survivors
    #[default]
    Grouped,
    /// Keep one survivor per join key
    LastWins,
}

impl From<JoinChoice> for JoinStrategy {
    fn from(choice: JoinChoice) -> Self {
        match choice {
            JoinChoice::Grouped => JoinStrategy::Grouped,
            JoinChoice::LastWins => JoinStrategy::LastWins,
        }
    }
}

/// Execution mode as spelled in config files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeChoice {
    /// Count on the calling thread
    Sequential,
    /// Count on a worker pool
    Parallel,
    /// Decide per level
    #[default]
    Adaptive,
}

impl From<ModeChoice> for ExecutionMode {
    fn from(choice: ModeChoice) -> Self {
        match choice {
            ModeChoice::Sequential => ExecutionMode::Sequential,
            ModeChoice::Parallel => ExecutionMode::Parallel,
            ModeChoice::Adaptive => ExecutionMode::Adaptive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::parse("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_full_config() {
        let config = CliConfig::parse(
            r#"
            [mining]
            min_support = 0.25
            mismatch_budget = 1
            join_strategy = "last-wins"

            [performance]
            execution_mode = "parallel"
            worker_threads = 4
            parallel_threshold = 500

            [output]
            default_format = "markdown"
            all_levels = true
            pretty_json = false
            "#,
        )
        .unwrap();

        assert_eq!(config.mining.min_support, Some(0.25));
        assert_eq!(config.mining.mismatch_budget, 1);
        assert_eq!(config.mining.join_strategy, JoinChoice::LastWins);
        assert_eq!(config.performance.execution_mode, ModeChoice::Parallel);
        assert_eq!(config.performance.worker_threads, 4);
        assert_eq!(config.performance.parallel_threshold, Some(500));
        assert_eq!(config.output.default_format, OutputFormat::Markdown);
        assert!(config.output.all_levels);
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_invalid_config() {
        let result = CliConfig::parse("[mining]\nmin_support = \"high\"");
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gsp.toml");
        fs::write(&path, "[mining]\nmin_support = 0.5\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.mining.min_support, Some(0.5));
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/gsp.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_choice_conversions() {
        assert_eq!(JoinStrategy::from(JoinChoice::LastWins), JoinStrategy::LastWins);
        assert_eq!(ExecutionMode::from(ModeChoice::Sequential), ExecutionMode::Sequential);
    }
}
