//! Analyze command implementation

use anyhow::{Context, Result};
use clap::Args;
use clitica_core::{Analyzer, CorpusReport, FileReport};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::resolve_corpus;
use crate::output::{self, JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use crate::rules_source::RulesSource;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Directory holding the tagged transcripts
    #[arg(value_name = "DIR")]
    pub directory: PathBuf,

    /// Report file (CSV default: variable_clitic_results.csv inside DIR;
    /// other formats default to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Rule file (default: embedded Spanish rules)
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// CLI configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Process files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel processing
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Abort when a corpus file cannot be read
    #[arg(long)]
    pub strict: bool,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Outcome of one corpus file
type FileOutcome = (PathBuf, Result<FileReport>);

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting corpus analysis");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let source = RulesSource::from_option(self.rules.as_ref());
        let rules = source.load()?;
        log::info!("Rules: {}", source.display_name());

        let format = self.format.unwrap_or(config.output.default_format);
        let report_path = match format {
            OutputFormat::Csv => Some(
                self.output
                    .clone()
                    .unwrap_or_else(|| self.directory.join(&config.output.file_name)),
            ),
            _ => self.output.clone(),
        };

        let files = resolve_corpus(&self.directory, rules.extensions(), report_path.as_deref())?;
        self.status(&format!("Found {} files in the directory.", files.len()));
        if files.is_empty() {
            log::warn!(
                "No files with extensions {:?} in {}",
                rules.extensions(),
                self.directory.display()
            );
        }

        let analyzer = Analyzer::new(rules);
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let outcomes = if self.parallel || config.performance.parallel {
            self.run_parallel(&analyzer, &files, &progress, &config)?
        } else {
            run_sequential(&analyzer, &files, &progress)
        };
        progress.finish();

        let report = self.collect(outcomes)?;

        write_report(format, report_path.as_deref(), &report)?;

        self.status(&format!(
            "Found {} sentences with variable clitics.",
            report.general_count()
        ));
        self.status(&format!(
            "Found {} sentences with adjacent verbs having variable clitics.",
            report.adjacent_count()
        ));
        if report.malformed_lines() > 0 {
            self.status(&format!(
                "Skipped {} malformed sentence lines.",
                report.malformed_lines()
            ));
        }
        if let Some(path) = &report_path {
            self.status(&format!("Results written to {}", path.display()));
        }

        Ok(())
    }

    /// Merge per-file outcomes in discovery order
    fn collect(&self, outcomes: Vec<FileOutcome>) -> Result<CorpusReport> {
        let mut report = CorpusReport::new();
        let mut failed = 0;

        for (path, outcome) in outcomes {
            match outcome {
                Ok(file_report) => report.push(file_report),
                Err(e) if self.strict => {
                    return Err(CliError::ProcessingError(format!("{e:#}")).into());
                }
                Err(e) => {
                    log::error!("Skipping {}: {e:#}", path.display());
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            self.status(&format!("{failed} files could not be read and were skipped."));
        }

        Ok(report)
    }

    #[cfg(feature = "parallel")]
    fn run_parallel(
        &self,
        analyzer: &Analyzer,
        files: &[PathBuf],
        progress: &ProgressReporter,
        config: &CliConfig,
    ) -> Result<Vec<FileOutcome>> {
        use rayon::prelude::*;

        let threads = match self.threads {
            Some(n) if n > 0 => n,
            _ if config.performance.worker_threads > 0 => config.performance.worker_threads,
            _ => num_cpus::get(),
        };
        log::info!("Processing {} files on {threads} threads", files.len());

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")?;

        // par_iter().collect() keeps discovery order
        Ok(pool.install(|| {
            files
                .par_iter()
                .map(|path| analyze_path(analyzer, path, progress))
                .collect()
        }))
    }

    #[cfg(not(feature = "parallel"))]
    fn run_parallel(
        &self,
        analyzer: &Analyzer,
        files: &[PathBuf],
        progress: &ProgressReporter,
        _config: &CliConfig,
    ) -> Result<Vec<FileOutcome>> {
        log::warn!("Built without the `parallel` feature; processing sequentially");
        Ok(run_sequential(analyzer, files, progress))
    }

    /// Print a status line on stderr unless quiet
    fn status(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // Ignore repeated initialization within one process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn run_sequential(
    analyzer: &Analyzer,
    files: &[PathBuf],
    progress: &ProgressReporter,
) -> Vec<FileOutcome> {
    files
        .iter()
        .map(|path| analyze_path(analyzer, path, progress))
        .collect()
}

fn analyze_path(analyzer: &Analyzer, path: &Path, progress: &ProgressReporter) -> FileOutcome {
    log::info!("Processing file: {}", path.display());
    let outcome = analyzer.analyze_file(path).map_err(anyhow::Error::from);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    progress.file_completed(&name);

    (path.to_path_buf(), outcome)
}

/// Write the report to `path`, or stdout for the streamed formats
fn write_report(format: OutputFormat, path: Option<&Path>, report: &CorpusReport) -> Result<()> {
    match (format, path) {
        (OutputFormat::Csv, Some(path)) => output::csv::write_report(path, report),
        (OutputFormat::Csv, None) => Err(anyhow::anyhow!("CSV reports need an output path")),
        (OutputFormat::Json | OutputFormat::Markdown, path) => {
            let writer = open_writer(path)?;
            let mut formatter: Box<dyn OutputFormatter> = match format {
                OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
                _ => Box::new(MarkdownFormatter::new(writer)),
            };
            for finding in report.rows() {
                formatter.format_finding(finding)?;
            }
            formatter.finish()
        }
    }
}

fn open_writer(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create report: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
