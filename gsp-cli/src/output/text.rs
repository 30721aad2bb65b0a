//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use gsp_core::{FrequencyTable, MiningReport};
use std::io::Write;

/// Plain text formatter - outputs one pattern per line
pub struct TextFormatter<W: Write> {
    writer: W,
    patterns_written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            patterns_written: 0,
        }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_level(&mut self, _length: usize, table: &FrequencyTable<String>) -> Result<()> {
        for (pattern, support) in table.sorted() {
            writeln!(self.writer, "{pattern}\t{support}")?;
            self.patterns_written += 1;
        }
        Ok(())
    }

    fn finish(&mut self, _report: &MiningReport<String>) -> Result<()> {
        if self.patterns_written == 0 {
            log::warn!("No frequent patterns found");
        }
        self.writer.flush()?;
        Ok(())
    }
}
