//! CSV report writer
//!
//! The report is written in two phases: the general pass creates the file and
//! writes the header, then the adjacent pass appends its rows to the same
//! file without repeating the header.

use super::OutputFormatter;
use anyhow::{Context, Result};
use clitica_core::{CorpusReport, Finding};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV formatter - one finding per row
pub struct CsvFormatter<W: Write> {
    writer: W,
}

impl<W: Write> CsvFormatter<W> {
    /// Create a formatter that appends rows without a header
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Create a formatter and write the header row
    pub fn with_header(writer: W) -> Result<Self> {
        let mut formatter = Self::new(writer);
        write_record(&mut formatter.writer, &Finding::HEADER)?;
        Ok(formatter)
    }
}

impl<W: Write + Send + Sync> OutputFormatter for CsvFormatter<W> {
    fn format_finding(&mut self, finding: &Finding) -> Result<()> {
        write_record(&mut self.writer, &finding.columns())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Write `report` to `path`: create with header and general rows, then
/// reopen in append mode for the adjacent rows.
pub fn write_report(path: &Path, report: &CorpusReport) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report: {}", path.display()))?;
    let mut formatter = CsvFormatter::with_header(BufWriter::new(file))?;
    for finding in report.general_rows() {
        formatter.format_finding(finding)?;
    }
    formatter.finish()?;
    drop(formatter);

    let file = OpenOptions::new()
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to append to report: {}", path.display()))?;
    let mut formatter = CsvFormatter::new(BufWriter::new(file));
    for finding in report.adjacent_rows() {
        formatter.format_finding(finding)?;
    }
    formatter.finish()
}

fn write_record<W: Write>(writer: &mut W, fields: &[&str]) -> Result<()> {
    let line = fields
        .iter()
        .map(|field| escape(field))
        .collect::<Vec<_>>()
        .join(",");
    write!(writer, "{line}\r\n")?;
    Ok(())
}

/// Quote a field when it contains a separator, a quote or a line break
fn escape(field: &str) -> String {
    if field.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
