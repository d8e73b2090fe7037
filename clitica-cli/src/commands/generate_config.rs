//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use clitica_core::CliticRules;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Code for the new rule set
    #[arg(short = 'c', long, value_name = "CODE", required = true)]
    pub code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating rule file template...");
        println!("  Code: {}", self.code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();
        CliticRules::from_toml_str(&template)
            .with_context(|| format!("Code {:?} does not yield a valid rule file", self.code))?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rule template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the clitic forms and allowed gaps");
        println!("2. Validate your rules:");
        println!("   clitica validate --rules {}", self.output.display());
        println!("3. Use them for analysis:");
        println!("   clitica analyze <DIR> --rules {}", self.output.display());

        Ok(())
    }

    /// Generate template rule file content
    fn generate_template(&self) -> String {
        let code = toml::Value::String(self.code.clone()).to_string();
        format!(
            r#"# Clitic rules for {code}

[metadata]
code = {code}
name = "Custom Rules"

# Corpus layout
[corpus]
# Lines starting with this prefix carry POS-tagged sentences
line_prefix = "%pos:"
# Separates the surface form from its tag: quiero.VERB
delimiter = "."
# Corpus file extensions (without the dot)
extensions = ["cha", "txt"]

# Clitic pronouns
[clitics]
forms = ["me", "te", "se", "lo", "la", "le", "les"]
# Also treat every two-clitic concatenation (e.g. "melo") as an enclitic suffix
combine = true

# Connective words allowed between two verbs, one table per gap length.
# Each sequence must contain exactly `length` words.
[[gaps]]
length = 1
sequences = ["a", "que", "dando"]

[[gaps]]
length = 2
sequences = ["a a", "de que"]

# Add longer gaps as needed:
# [[gaps]]
# length = 3
# sequences = ["a punto de"]
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            code: "es-cl".to_string(),
            output: PathBuf::from("chile.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("es-cl"));
        assert!(debug_str.contains("chile.toml"));
    }

    #[test]
    fn test_template_is_valid_rules() {
        let args = GenerateConfigArgs {
            code: "test".to_string(),
            output: PathBuf::from("test.toml"),
        };

        let template = args.generate_template();
        assert!(template.contains("code = \"test\""));

        let rules = CliticRules::from_toml_str(&template).unwrap();
        assert_eq!(rules.code(), "test");
        assert!(rules.gaps().permits(2, "de que"));
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("test_rules.toml");

        let args = GenerateConfigArgs {
            code: "test".to_string(),
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        assert!(output_path.exists());

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("code = \"test\""));
    }

    #[test]
    fn test_quoted_code_is_escaped() {
        let code = r#"es "rioplatense" \ v2"#;
        let args = GenerateConfigArgs {
            code: code.to_string(),
            output: PathBuf::from("rioplatense.toml"),
        };

        let rules = CliticRules::from_toml_str(&args.generate_template()).unwrap();
        assert_eq!(rules.code(), code);
    }

    #[test]
    fn test_invalid_code_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("blank.toml");

        let args = GenerateConfigArgs {
            code: "   ".to_string(),
            output: output_path.clone(),
        };

        assert!(args.execute().is_err());
        assert!(!output_path.exists());
    }
}
