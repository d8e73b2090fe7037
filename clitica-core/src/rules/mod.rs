//! Data-driven clitic rules
//!
//! Clitic inventories, allowed verb gaps and corpus layout are read from TOML
//! rule files. A Spanish rule set is embedded; others can be loaded from disk.

pub(crate) mod config;
pub(crate) mod loader;
pub(crate) mod runtime;
pub mod tables;

pub use loader::{embedded_codes, get_rules, DEFAULT_RULES};
pub use runtime::CliticRules;
