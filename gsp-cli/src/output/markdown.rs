//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use gsp_core::{FrequencyTable, MiningReport};
use std::io::Write;

/// Markdown formatter - outputs one table per pattern length
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    pattern_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pattern_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_level(&mut self, length: usize, table: &FrequencyTable<String>) -> Result<()> {
        writeln!(self.writer, "## Length {length}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Pattern | Support |")?;
        writeln!(self.writer, "|---------|---------|")?;
        for (pattern, support) in table.sorted() {
            let items: Vec<String> = pattern.iter().map(|item| format!("`{item}`")).collect();
            writeln!(self.writer, "| {} | {support} |", items.join(" → "))?;
            self.pattern_count += 1;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self, report: &MiningReport<String>) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total patterns: {}, threshold: {}, levels explored: {}*",
            self.pattern_count, report.metadata.threshold, report.metadata.levels_explored
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
