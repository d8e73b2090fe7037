//! Runtime clitic rules
//!
//! Bridges the TOML configuration and the tables the matchers query.

use crate::error::{CoreError, Result};
use crate::rules::config::RuleConfig;
use crate::rules::tables::{CliticTable, GapTable};
use std::fs;
use std::path::Path;

/// Immutable rule set shared by every matcher
#[derive(Debug, Clone)]
pub struct CliticRules {
    code: String,
    name: String,
    line_prefix: String,
    delimiter: char,
    extensions: Vec<String>,
    clitics: CliticTable,
    gaps: GapTable,
}

impl CliticRules {
    /// Create from configuration
    pub(crate) fn from_config(config: &RuleConfig) -> Result<Self> {
        config.validate().map_err(CoreError::Config)?;

        let clitics = CliticTable::new(config.clitics.forms.clone(), config.clitics.combine);
        let gaps = GapTable::new(
            config
                .gaps
                .iter()
                .map(|gap| (gap.length, gap.sequences.clone())),
        );

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            line_prefix: config.corpus.line_prefix.clone(),
            delimiter: config.corpus.delimiter,
            extensions: config
                .corpus
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect(),
            clitics,
            gaps,
        })
    }

    /// Parse and validate a TOML rule document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: RuleConfig =
            toml::from_str(toml_str).map_err(|e| CoreError::Config(e.to_string()))?;
        Self::from_config(&config)
    }

    /// Load and validate a rule file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Rule set code, e.g. `es`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human readable rule set name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prefix marking POS-tagged sentence lines
    pub fn line_prefix(&self) -> &str {
        &self.line_prefix
    }

    /// Character separating a surface form from its tag
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Corpus file extensions, without the leading dot
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Clitic inventory
    pub fn clitics(&self) -> &CliticTable {
        &self.clitics
    }

    /// Allowed verb gaps
    pub fn gaps(&self) -> &GapTable {
        &self.gaps
    }
}
