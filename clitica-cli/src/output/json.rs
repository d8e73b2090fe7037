//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use clitica_core::Finding;
use std::io::Write;

/// JSON formatter - outputs findings as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    findings: Vec<Finding>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            findings: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_finding(&mut self, finding: &Finding) -> Result<()> {
        self.findings.push(finding.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.findings)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
