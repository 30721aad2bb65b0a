//! Progress reporting module

use gsp_core::LevelSummary;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for the level-wise search
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a new progress reporter; a quiet reporter draws nothing
    pub fn new(quiet: bool) -> Self {
        if quiet {
            return Self { spinner: None };
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} [{elapsed_precise}] {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Counting level 1");
        spinner.enable_steady_tick(Duration::from_millis(100));

        Self {
            spinner: Some(spinner),
        }
    }

    /// Report a finished level
    pub fn level_completed(&self, summary: &LevelSummary) {
        if let Some(spinner) = &self.spinner {
            spinner.println(format!(
                "Level {}: {} candidates, {} frequent ({})",
                summary.level,
                summary.candidates,
                summary.survivors,
                summary.execution_mode.name()
            ));
            spinner.set_message(format!("Counting level {}", summary.level + 1));
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }
}
