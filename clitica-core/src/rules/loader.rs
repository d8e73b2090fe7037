//! Rule set loader
//!
//! Manages embedded rule sets with caching.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{CoreError, Result};
use crate::rules::runtime::CliticRules;

/// Code of the rule set used when none is requested
pub const DEFAULT_RULES: &str = "es";

/// Embedded rule sets
static EMBEDDED: OnceLock<HashMap<String, Arc<CliticRules>>> = OnceLock::new();

/// Load embedded rules by code or name
pub fn get_rules(code: &str) -> Result<Arc<CliticRules>> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        match CliticRules::from_toml_str(include_str!("../../configs/languages/spanish.toml")) {
            Ok(rules) => {
                let rules = Arc::new(rules);
                map.insert("es".to_string(), rules.clone());
                map.insert("spanish".to_string(), rules);
            }
            Err(e) => {
                log::error!("Failed to load embedded Spanish rules: {e}");
            }
        }

        map
    });

    embedded
        .get(&code.to_lowercase())
        .cloned()
        .ok_or_else(|| CoreError::UnknownRules {
            code: code.to_string(),
        })
}

/// Codes of every embedded rule set
pub fn embedded_codes() -> Vec<&'static str> {
    vec![DEFAULT_RULES]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_rules_match_reference_inventory() {
        let rules = get_rules("es").unwrap();
        assert_eq!(rules.line_prefix(), "%pos:");
        assert_eq!(rules.delimiter(), '.');
        for clitic in ["me", "te", "se", "lo", "la", "le", "les"] {
            assert!(rules.clitics().is_clitic(clitic), "{clitic}");
        }
        assert_eq!(rules.clitics().forms().len(), 7);
        assert!(rules.gaps().permits(1, "dando"));
        assert!(rules.gaps().permits(2, "de que"));
    }

    #[test]
    fn test_aliases_share_instance() {
        let by_code = get_rules("es").unwrap();
        let by_name = get_rules("Spanish").unwrap();
        assert!(Arc::ptr_eq(&by_code, &by_name));
    }

    #[test]
    fn test_unknown_code() {
        let err = get_rules("xx").unwrap_err();
        assert!(matches!(err, CoreError::UnknownRules { ref code } if code == "xx"));
    }

    #[test]
    fn test_embedded_codes_resolve() {
        for code in embedded_codes() {
            assert!(get_rules(code).is_ok());
        }
    }
}
