//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use gsp_core::{FrequencyTable, MiningReport, PatternEntry};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs a single document once mining is done
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    levels: Vec<LevelData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct ReportData<'a> {
    /// Absolute support threshold
    pub threshold: f64,
    /// Number of levels counted
    pub levels_explored: usize,
    /// Candidates counted across all levels
    pub candidates_evaluated: usize,
    /// Total run time in milliseconds
    pub processing_time_ms: f64,
    /// Patterns grouped by length
    pub levels: &'a [LevelData],
}

/// Patterns of one length
#[derive(Debug, Serialize)]
pub struct LevelData {
    /// Pattern length
    pub length: usize,
    /// Patterns sorted by descending support
    pub patterns: Vec<PatternEntry<String>>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            levels: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_level(&mut self, length: usize, table: &FrequencyTable<String>) -> Result<()> {
        self.levels.push(LevelData {
            length,
            patterns: table.entries(),
        });
        Ok(())
    }

    fn finish(&mut self, report: &MiningReport<String>) -> Result<()> {
        let data = ReportData {
            threshold: report.metadata.threshold,
            levels_explored: report.metadata.levels_explored,
            candidates_evaluated: report.metadata.candidates_evaluated,
            processing_time_ms: report.metadata.processing_time.as_secs_f64() * 1000.0,
            levels: &self.levels,
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &data)?;
        } else {
            serde_json::to_writer(&mut self.writer, &data)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
