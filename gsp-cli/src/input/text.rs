//! Line-oriented transaction format
//!
//! One transaction per line. Items are separated by whitespace and an item set
//! is written in braces, e.g. `a b {c,d} d`. Blank lines and lines starting
//! with `#` are skipped.

use crate::error::CliError;
use gsp_core::{Element, Transaction};
use std::collections::BTreeSet;

/// Parse a whole text document
pub fn parse_transactions(content: &str) -> Result<Vec<Transaction<String>>, CliError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| parse_line(line, index + 1))
        .collect()
}

/// Parse one transaction line; `line_no` is used in error messages
pub fn parse_line(line: &str, line_no: usize) -> Result<Transaction<String>, CliError> {
    let mut elements = Vec::new();
    let mut rest = line.trim();

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('{') {
            let end = after.find('}').ok_or_else(|| {
                CliError::InvalidInput(format!("line {line_no}: unclosed '{{'"))
            })?;

            let items: BTreeSet<String> = after[..end]
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect();
            if items.is_empty() {
                return Err(CliError::InvalidInput(format!(
                    "line {line_no}: empty item set"
                )));
            }
            if items.iter().any(|item| item.contains('{')) {
                return Err(CliError::InvalidInput(format!(
                    "line {line_no}: nested item sets are not supported"
                )));
            }

            elements.push(Element::ItemSet(items));
            rest = after[end + 1..].trim_start();
        } else {
            let end = rest
                .find(|c: char| c.is_whitespace() || c == '{')
                .unwrap_or(rest.len());
            let token = &rest[..end];
            if token.contains('}') {
                return Err(CliError::InvalidInput(format!(
                    "line {line_no}: unexpected '}}'"
                )));
            }

            elements.push(Element::Item(token.to_string()));
            rest = rest[end..].trim_start();
        }
    }

    Ok(elements)
}
