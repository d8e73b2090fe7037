//! Extracted findings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a clitic sits relative to the verb cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CliticPosition {
    /// Free-standing pronoun before the verb (`me lo dijo`)
    Proclitic,
    /// Suffixed to the verb (`dímelo`)
    Enclitic,
}

impl CliticPosition {
    /// Label used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            CliticPosition::Proclitic => "proclitic",
            CliticPosition::Enclitic => "enclitic",
        }
    }
}

impl fmt::Display for CliticPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which scan produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pass {
    /// Gap-filtered clitic scan
    General,
    /// Adjacent-verb scan
    Adjacent,
}

/// One report row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Source file identifier (file name without extension)
    pub source_id: String,
    /// Sentence with tags stripped
    pub sentence: String,
    /// The clitic pronoun, or the verb form carrying the enclitic
    pub clitic: String,
    /// Proclitic or enclitic
    pub position: CliticPosition,
    /// Clitic suffix matched on an enclitic verb
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Scan that emitted the row
    pub pass: Pass,
}

impl Finding {
    /// Column titles for tabular reports
    pub const HEADER: [&'static str; 4] = ["ID", "Sentence", "Clitic", "Clitic Position"];

    /// The four report columns in header order
    pub fn columns(&self) -> [&str; 4] {
        [
            self.source_id.as_str(),
            self.sentence.as_str(),
            self.clitic.as_str(),
            self.position.as_str(),
        ]
    }
}
