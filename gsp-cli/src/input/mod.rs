//! Input handling module

pub mod file_reader;
pub mod text;

pub use file_reader::FileReader;

use crate::error::CliError;
use anyhow::{Context, Result};
use gsp_core::Transaction;
use std::path::Path;

/// Supported transaction file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// JSON array of transactions; item sets are nested arrays
    Json,
    /// One transaction per line; item sets are written `{c,d}`
    Text,
}

impl InputFormat {
    /// Guess the format from a file extension, defaulting to text
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Text,
        }
    }
}

/// Load transactions from `path`
pub fn load_transactions(path: &Path, format: Option<InputFormat>) -> Result<Vec<Transaction<String>>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }

    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    let content = FileReader::read_text(path)?;

    let transactions = match format {
        InputFormat::Json => parse_json(&content),
        InputFormat::Text => text::parse_transactions(&content).map_err(Into::into),
    }
    .with_context(|| format!("Failed to parse transactions from: {}", path.display()))?;

    if transactions.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "no transactions in {}",
            path.display()
        ))
        .into());
    }

    log::info!(
        "Loaded {} transactions from {} ({:?})",
        transactions.len(),
        path.display(),
        format
    );
    Ok(transactions)
}

/// Parse a JSON transaction array
pub fn parse_json(content: &str) -> Result<Vec<Transaction<String>>> {
    serde_json::from_str(content).map_err(|e| CliError::InvalidInput(e.to_string()).into())
}
