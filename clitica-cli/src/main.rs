//! `clitica` command-line entry point

use anyhow::Result;
use clap::Parser;
use clitica_cli::commands::Commands;

/// Detect variable clitic placement in POS-tagged transcripts
#[derive(Debug, Parser)]
#[command(name = "clitica", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_analyze() {
        let cli = Cli::try_parse_from(["clitica", "analyze", "corpus", "-f", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::Analyze(_)));
    }
}
