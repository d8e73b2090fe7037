//! Output formatting module

use anyhow::Result;
use clitica_core::Finding;
use serde::{Deserialize, Serialize};

/// Trait for report formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single finding
    fn format_finding(&mut self, finding: &Finding) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated rows, written in two phases (general, then adjacent)
    Csv,
    /// JSON array of findings with pass and matched suffix
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// Every supported format
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Csv,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Format name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "comma-separated report (default)",
            OutputFormat::Json => "JSON array of findings",
            OutputFormat::Markdown => "Markdown table",
        }
    }
}

pub mod csv;
pub mod json;
pub mod markdown;

pub use self::csv::CsvFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;

#[cfg(test)]
pub(crate) mod test_support {
    use clitica_core::{CliticPosition, Finding, Pass};

    pub fn finding(id: &str, sentence: &str, clitic: &str, position: CliticPosition) -> Finding {
        Finding {
            source_id: id.to_string(),
            sentence: sentence.to_string(),
            clitic: clitic.to_string(),
            position,
            suffix: None,
            pass: Pass::General,
        }
    }
}
