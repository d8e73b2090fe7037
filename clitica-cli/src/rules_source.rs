//! Rule source management for CLI

use anyhow::{Context, Result};
use clitica_core::{get_rules, CliticRules, DEFAULT_RULES};
use std::path::PathBuf;
use std::sync::Arc;

/// Source of clitic rules
#[derive(Debug, Clone, PartialEq)]
pub enum RulesSource {
    /// Embedded rule set, by code
    BuiltIn(String),
    /// External rule file
    External(PathBuf),
}

impl RulesSource {
    /// Pick the external file when given, the embedded default otherwise
    pub fn from_option(path: Option<&PathBuf>) -> Self {
        match path {
            Some(path) => RulesSource::External(path.clone()),
            None => RulesSource::BuiltIn(DEFAULT_RULES.to_string()),
        }
    }

    /// Get the display name for the rule source
    pub fn display_name(&self) -> String {
        match self {
            RulesSource::BuiltIn(code) => format!("Built-in: {code}"),
            RulesSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Load and validate the rules
    pub fn load(&self) -> Result<Arc<CliticRules>> {
        match self {
            RulesSource::BuiltIn(code) => {
                get_rules(code).with_context(|| format!("Failed to load rules '{code}'"))
            }
            RulesSource::External(path) => CliticRules::from_file(path)
                .map(Arc::new)
                .with_context(|| format!("Failed to load rules from {}", path.display())),
        }
    }
}
