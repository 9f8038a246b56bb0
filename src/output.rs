use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::tokenizer::TokenKind;

/// A token as it appears in JSON output.
#[derive(Debug, Serialize)]
pub struct TokenRecord<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

fn records(tokens: &[String]) -> Vec<TokenRecord<'_>> {
    tokens
        .iter()
        .map(|t| TokenRecord {
            text: t,
            kind: TokenKind::of(t),
        })
        .collect()
}

/// Formats one token sequence for display.
pub fn render(tokens: &[String], format: OutputFormat, separator: &str) -> Result<String> {
    match format {
        OutputFormat::Joined => Ok(tokens.join(separator)),
        OutputFormat::Lines => Ok(tokens
            .iter()
            .map(|t| format!("{:?}", t))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string(&records(tokens)).context("Failed to encode tokens as JSON")
        }
    }
}

/// Formats one token sequence per input line.
///
/// JSON output is a single array of per-line arrays; the other formats
/// render each line on its own and separate lines with a newline
/// (`lines` adds a blank line between input lines).
pub fn render_all(lines: &[Vec<String>], format: OutputFormat, separator: &str) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let all: Vec<_> = lines.iter().map(Vec::as_slice).map(records).collect();
            serde_json::to_string(&all).context("Failed to encode tokens as JSON")
        }
        OutputFormat::Joined | OutputFormat::Lines => {
            let joiner = if format == OutputFormat::Lines { "\n\n" } else { "\n" };
            let rendered = lines
                .iter()
                .map(|tokens| render(tokens, format, separator))
                .collect::<Result<Vec<_>>>()?;
            Ok(rendered.join(joiner))
        }
    }
}
