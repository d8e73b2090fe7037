//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;
use crate::rules_source::RulesSource;

pub mod analyze;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a corpus directory for variable clitic placement
    Analyze(analyze::AnalyzeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a rule file
    Validate(validate::ValidateArgs),

    /// Write a rule file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List clitic forms and derived suffixes
    Clitics(RulesArg),

    /// List allowed connective gaps between verbs
    Gaps(RulesArg),

    /// List available output formats
    Formats,
}

/// Optional external rule file
#[derive(Debug, Args)]
pub struct RulesArg {
    /// Rule file (default: embedded Spanish rules)
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Clitics(arg) => {
                let rules = RulesSource::from_option(arg.rules.as_ref()).load()?;
                let clitics = rules.clitics();
                println!("Clitic forms ({}):", rules.name());
                for form in clitics.forms() {
                    println!("  {form}");
                }
                println!("Combined suffixes: {}", clitics.combined_count());
            }
            ListCommands::Gaps(arg) => {
                let rules = RulesSource::from_option(arg.rules.as_ref()).load()?;
                println!("Allowed verb gaps ({}):", rules.name());
                if rules.gaps().is_empty() {
                    println!("  (none)");
                }
                for (length, sequences) in rules.gaps().iter() {
                    println!("  {length}: {}", sequences.join(", "));
                }
            }
            ListCommands::Formats => {
                println!("Output formats:");
                for format in OutputFormat::ALL {
                    println!("  {:<10} {}", format.as_str(), format.description());
                }
            }
        }
        Ok(())
    }
}
