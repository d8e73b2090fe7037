//! Validate command implementation

use anyhow::Result;
use clap::Args;
use clitica_core::CliticRules;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rule file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule file: {}", self.rules.display());

        match CliticRules::from_file(&self.rules) {
            Ok(rules) => {
                println!("✓ Rule file is valid!");
                println!("  Code: {}", rules.code());
                println!("  Name: {}", rules.name());
                println!("  Clitic forms: {}", rules.clitics().forms().len());
                println!("  Gap lengths: {}", rules.gaps().iter().count());
                println!("  Line prefix: {:?}", rules.line_prefix());
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule file is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            rules: PathBuf::from("test.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_rules() {
        let toml_content = r#"
[metadata]
code = "test"
name = "Test Rules"

[clitics]
forms = ["lo", "la"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            rules: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_rules() {
        let toml_content = r#"
[metadata]
code = "test"
name = "Test"

[clitics]
forms = ["lo"]

[[gaps]]
length = 2
sequences = ["a"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            rules: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_err());
    }
}
