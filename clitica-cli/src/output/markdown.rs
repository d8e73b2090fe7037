//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use clitica_core::Finding;
use std::io::Write;

/// Markdown formatter - outputs findings as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    row_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            row_count: 0,
        }
    }

    fn write_row(&mut self, cells: &[&str]) -> Result<()> {
        let cells: Vec<String> = cells.iter().map(|cell| cell.replace('|', "\\|")).collect();
        writeln!(self.writer, "| {} |", cells.join(" | "))?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_finding(&mut self, finding: &Finding) -> Result<()> {
        if self.row_count == 0 {
            self.write_row(&Finding::HEADER)?;
            writeln!(self.writer, "|---|---|---|---|")?;
        }
        self.row_count += 1;
        self.write_row(&finding.columns())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total rows: {}*", self.row_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::finding;
    use clitica_core::CliticPosition;

    #[test]
    fn test_markdown_table() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter
                .format_finding(&finding("ses01", "lo quiero hacer", "lo", CliticPosition::Proclitic))
                .unwrap();
            formatter
                .format_finding(&finding("ses01", "a|b", "me", CliticPosition::Proclitic))
                .unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("| ID | Sentence | Clitic | Clitic Position |\n|---|---|---|---|\n"));
        assert!(output.contains("| ses01 | lo quiero hacer | lo | proclitic |"));
        assert!(output.contains("| ses01 | a\\|b | me | proclitic |"));
        assert!(output.ends_with("*Total rows: 2*\n"));
    }

    #[test]
    fn test_no_rows_no_table() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter.finish().unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();
        assert!(!output.contains("| ID |"));
        assert!(output.contains("*Total rows: 0*"));
    }
}
