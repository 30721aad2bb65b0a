//! Output formatting module

use anyhow::Result;
use gsp_core::{FrequencyTable, MiningReport};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format the frequent patterns of one length
    fn format_level(&mut self, length: usize, table: &FrequencyTable<String>) -> Result<()>;

    /// Finalize output (e.g., write the JSON document)
    fn finish(&mut self, report: &MiningReport<String>) -> Result<()>;
}

/// Supported output formats
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One pattern per line with its support
    #[default]
    Text,
    /// JSON document with metadata and patterns per level
    Json,
    /// Markdown tables
    Markdown,
}

/// Rendering options
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Output format
    pub format: OutputFormat,
    /// Render every non-empty level, not only the final result
    pub all_levels: bool,
    /// Pretty-print JSON
    pub pretty_json: bool,
}

/// Render a report to `output` (stdout when `None`)
pub fn write_report(
    report: &MiningReport<String>,
    options: RenderOptions,
    output: Option<&Path>,
) -> Result<()> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    let mut formatter: Box<dyn OutputFormatter> = match options.format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options.pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    };

    render(report, options.all_levels, formatter.as_mut())
}

/// Feed a report's levels through `formatter`
pub fn render(
    report: &MiningReport<String>,
    all_levels: bool,
    formatter: &mut dyn OutputFormatter,
) -> Result<()> {
    if all_levels {
        for (index, table) in report.levels.iter().enumerate() {
            if !table.is_empty() {
                formatter.format_level(index + 1, table)?;
            }
        }
    } else if let Some(length) = pattern_length(&report.patterns) {
        formatter.format_level(length, &report.patterns)?;
    }

    formatter.finish(report)
}

fn pattern_length(table: &FrequencyTable<String>) -> Option<usize> {
    table.candidates().next().map(|candidate| candidate.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsp_core::{Element, Miner};

    fn report() -> MiningReport<String> {
        let t = |items: &[&str]| -> Vec<Element<String>> {
            items.iter().map(|item| Element::item(item.to_string())).collect()
        };
        Miner::new(vec![t(&["a", "b", "c"]), t(&["a", "b"]), t(&["b", "c"])], 0.5)
            .unwrap()
            .run_report()
            .unwrap()
    }

    fn render_to_string(format: OutputFormat, all_levels: bool) -> String {
        let report = report();
        let mut buf = Vec::new();
        {
            let mut formatter: Box<dyn OutputFormatter + '_> = match format {
                OutputFormat::Text => Box::new(TextFormatter::new(&mut buf)),
                OutputFormat::Json => Box::new(JsonFormatter::new(&mut buf, false)),
                OutputFormat::Markdown => Box::new(MarkdownFormatter::new(&mut buf)),
            };
            render(&report, all_levels, formatter.as_mut()).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_final_level_only() {
        // Threshold 1.5: (a, b) and (b, c) each occur twice.
        let output = render_to_string(OutputFormat::Text, false);
        assert_eq!(output, "(a, b)\t2\n(b, c)\t2\n");
    }

    #[test]
    fn test_text_all_levels() {
        let output = render_to_string(OutputFormat::Text, true);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "(b)\t3");
        assert!(lines.contains(&"(a)\t2"));
        assert!(lines.contains(&"(a, b)\t2"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_json_document() {
        let output = render_to_string(OutputFormat::Json, false);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["threshold"], 1.5);
        assert_eq!(value["levels"][0]["length"], 2);
        assert_eq!(value["levels"][0]["patterns"][0]["pattern"], serde_json::json!(["a", "b"]));
        assert_eq!(value["levels"][0]["patterns"][0]["support"], 2);
    }

    #[test]
    fn test_markdown_tables() {
        let output = render_to_string(OutputFormat::Markdown, true);
        assert!(output.contains("## Length 1"));
        assert!(output.contains("## Length 2"));
        assert!(output.contains("| `a` → `b` | 2 |"));
        assert!(output.contains("*Total patterns: 5"));
    }

    #[test]
    fn test_format_names_deserialize() {
        #[derive(Deserialize)]
        struct Holder {
            format: OutputFormat,
        }
        let holder: Holder = toml::from_str("format = \"markdown\"").unwrap();
        assert_eq!(holder.format, OutputFormat::Markdown);
    }
}
