//! Per-file analysis and report assembly
//!
//! Each document is processed on its own: sentence lines are extracted,
//! parsed once, then fed to two independent passes.
//!
//! - **General pass**: sentences with an allowed verb gap are searched for
//!   their first clitic, giving at most one finding per sentence.
//! - **Adjacent pass**: every sentence is scanned for directly adjacent verb
//!   pairs, giving up to two findings per pair.
//!
//! The passes do not deduplicate against each other.

use crate::corpus::sentence_lines;
use crate::error::{CoreError, Result};
use crate::finding::{Finding, Pass};
use crate::matcher::{adjacent_matches, find_clitic, has_verb_gap, CliticMatch};
use crate::rules::{get_rules, CliticRules, DEFAULT_RULES};
use crate::token::TaggedSentence;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Findings and counters for one source file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    /// File identifier (file name without extension)
    pub source_id: String,
    /// General pass findings in sentence order
    pub general: Vec<Finding>,
    /// Adjacent pass findings in sentence order
    pub adjacent: Vec<Finding>,
    /// Sentence lines parsed successfully
    pub sentences_scanned: usize,
    /// Sentence lines skipped because of a malformed token
    pub malformed_lines: usize,
}

impl FileReport {
    /// Rows contributed by both passes
    pub fn total_rows(&self) -> usize {
        self.general.len() + self.adjacent.len()
    }
}

/// Runs both passes over documents with a shared rule set
#[derive(Debug, Clone)]
pub struct Analyzer {
    rules: Arc<CliticRules>,
}

impl Analyzer {
    /// Create an analyzer over `rules`
    pub fn new(rules: Arc<CliticRules>) -> Self {
        Self { rules }
    }

    /// Analyzer using the embedded Spanish rules
    pub fn spanish() -> Result<Self> {
        Ok(Self::new(get_rules(DEFAULT_RULES)?))
    }

    /// Active rule set
    pub fn rules(&self) -> &CliticRules {
        &self.rules
    }

    /// General pass for one sentence: gap filter, then first clitic
    pub fn general_match<'a>(&'a self, sentence: &'a TaggedSentence) -> Option<CliticMatch<'a>> {
        if !has_verb_gap(sentence, &self.rules) {
            return None;
        }
        find_clitic(sentence, &self.rules)
    }

    /// Analyze the text of one document
    pub fn analyze_document(&self, source_id: &str, text: &str) -> FileReport {
        let mut report = FileReport {
            source_id: source_id.to_string(),
            ..FileReport::default()
        };
        let delimiter = self.rules.delimiter();

        for line in sentence_lines(text, self.rules.line_prefix()) {
            let sentence = match TaggedSentence::parse(line.text, delimiter) {
                Ok(sentence) => sentence,
                Err(e) => {
                    log::warn!("{source_id}:{}: skipping sentence: {e}", line.line_number);
                    report.malformed_lines += 1;
                    continue;
                }
            };
            report.sentences_scanned += 1;

            // Built on the first finding only
            let mut untagged: Option<String> = None;

            if let Some(found) = self.general_match(&sentence) {
                let plain = untagged.get_or_insert_with(|| sentence.untagged());
                log::debug!(
                    "{source_id}:{}: {} clitic '{}' in \"{plain}\"",
                    line.line_number,
                    found.position,
                    found.word
                );
                report
                    .general
                    .push(to_finding(source_id, plain, &found, Pass::General));
            }

            for adjacent in adjacent_matches(&sentence, &self.rules) {
                let plain = untagged.get_or_insert_with(|| sentence.untagged());
                log::debug!(
                    "{source_id}:{}: adjacent verbs with {} clitic '{}' in \"{plain}\"",
                    line.line_number,
                    adjacent.clitic.position,
                    adjacent.clitic.word
                );
                report.adjacent.push(to_finding(
                    source_id,
                    plain,
                    &adjacent.clitic,
                    Pass::Adjacent,
                ));
            }
        }

        log::info!(
            "{source_id}: {} sentences, {} general, {} adjacent, {} skipped",
            report.sentences_scanned,
            report.general.len(),
            report.adjacent.len(),
            report.malformed_lines
        );

        report
    }

    /// Read and analyze a corpus file
    pub fn analyze_file(&self, path: &Path) -> Result<FileReport> {
        let text = fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.analyze_document(&source_id(path), &text))
    }
}

/// File identifier: the file name without its last extension
pub fn source_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn to_finding(source_id: &str, untagged: &str, found: &CliticMatch<'_>, pass: Pass) -> Finding {
    Finding {
        source_id: source_id.to_string(),
        sentence: untagged.to_string(),
        clitic: found.word.to_string(),
        position: found.position,
        suffix: found.suffix.map(str::to_string),
        pass,
    }
}

/// Findings for a whole corpus, in file processing order
#[derive(Debug, Clone, Default)]
pub struct CorpusReport {
    files: Vec<FileReport>,
}

impl CorpusReport {
    /// Empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the report of the next file
    pub fn push(&mut self, file: FileReport) {
        self.files.push(file);
    }

    /// Per-file reports in processing order
    pub fn files(&self) -> &[FileReport] {
        &self.files
    }

    /// General pass rows: file order, then sentence order
    pub fn general_rows(&self) -> impl Iterator<Item = &Finding> {
        self.files.iter().flat_map(|file| file.general.iter())
    }

    /// Adjacent pass rows: file order, then sentence order
    pub fn adjacent_rows(&self) -> impl Iterator<Item = &Finding> {
        self.files.iter().flat_map(|file| file.adjacent.iter())
    }

    /// All rows as they appear in the report: general rows, then adjacent rows
    pub fn rows(&self) -> impl Iterator<Item = &Finding> {
        self.general_rows().chain(self.adjacent_rows())
    }

    /// Number of general pass rows
    pub fn general_count(&self) -> usize {
        self.files.iter().map(|file| file.general.len()).sum()
    }

    /// Number of adjacent pass rows
    pub fn adjacent_count(&self) -> usize {
        self.files.iter().map(|file| file.adjacent.len()).sum()
    }

    /// Rows across both passes
    pub fn total_rows(&self) -> usize {
        self.general_count() + self.adjacent_count()
    }

    /// Sentence lines skipped across the corpus
    pub fn malformed_lines(&self) -> usize {
        self.files.iter().map(|file| file.malformed_lines).sum()
    }
}

impl FromIterator<FileReport> for CorpusReport {
    fn from_iter<I: IntoIterator<Item = FileReport>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}
