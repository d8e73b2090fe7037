//! Configuration structures and validation
//!
//! This module defines the TOML schema for clitic rule files.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Root rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub corpus: CorpusSettings,
    pub clitics: CliticSettings,
    #[serde(default)]
    pub gaps: Vec<GapRule>,
}

/// Rule set metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// How sentences are laid out in corpus files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusSettings {
    #[serde(default = "default_line_prefix")]
    pub line_prefix: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            line_prefix: default_line_prefix(),
            delimiter: default_delimiter(),
            extensions: default_extensions(),
        }
    }
}

/// Clitic pronoun inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliticSettings {
    pub forms: Vec<String>,
    #[serde(default = "default_true")]
    pub combine: bool,
}

/// Connective sequences permitted between two verbs `length` tokens apart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapRule {
    pub length: usize,
    pub sequences: Vec<String>,
}

fn default_line_prefix() -> String {
    "%pos:".to_string()
}

fn default_delimiter() -> char {
    '.'
}

fn default_extensions() -> Vec<String> {
    vec!["cha".to_string(), "txt".to_string()]
}

fn default_true() -> bool {
    true
}

impl RuleConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Rule set code must not be empty".to_string());
        }

        if self.corpus.line_prefix.is_empty() {
            return Err("Corpus line prefix must not be empty".to_string());
        }

        if self.corpus.delimiter.is_whitespace() {
            return Err("Tag delimiter must not be whitespace".to_string());
        }

        if self.corpus.extensions.is_empty() {
            return Err("No corpus file extensions defined".to_string());
        }

        for extension in &self.corpus.extensions {
            let bare = extension.trim_start_matches('.');
            if bare.is_empty()
                || bare.chars().any(|c| c.is_whitespace() || matches!(c, '/' | '\\'))
            {
                return Err(format!("Invalid corpus file extension '{extension}'"));
            }
        }

        if self.clitics.forms.is_empty() {
            return Err("No clitic forms defined".to_string());
        }

        for form in &self.clitics.forms {
            if form.is_empty() {
                return Err("Clitic forms must not be empty".to_string());
            }
            if form.chars().any(char::is_whitespace) || form.contains(self.corpus.delimiter) {
                return Err(format!(
                    "Clitic form '{form}' contains whitespace or the tag delimiter"
                ));
            }
        }

        let mut lengths = HashSet::new();
        for gap in &self.gaps {
            if gap.length == 0 {
                return Err("Gap length must be at least 1".to_string());
            }
            if !lengths.insert(gap.length) {
                return Err(format!("Gap length {} is defined twice", gap.length));
            }
            for sequence in &gap.sequences {
                if sequence.contains(self.corpus.delimiter) {
                    return Err(format!(
                        "Gap sequence '{sequence}' contains the tag delimiter"
                    ));
                }
                let words = sequence.split_whitespace().count();
                if words != gap.length {
                    return Err(format!(
                        "Gap sequence '{sequence}' has {words} words, expected {}",
                        gap.length
                    ));
                }
            }
        }

        Ok(())
    }
}
