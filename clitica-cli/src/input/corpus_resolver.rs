//! Corpus file discovery using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};

/// List the corpus files directly inside `dir` with one of `extensions`.
///
/// Files are returned in lexical order so reports are reproducible across
/// platforms. Subdirectories are not searched. `exclude` names the report
/// file, which is skipped when it already exists inside the corpus.
pub fn resolve_corpus(
    dir: &Path,
    extensions: &[String],
    exclude: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(CliError::DirectoryNotFound(dir.display().to_string()).into());
    }

    let excluded = exclude.and_then(|path| path.canonicalize().ok());

    let escaped = Pattern::escape(&dir.to_string_lossy());
    let mut files = Vec::new();

    for extension in extensions {
        let pattern = format!("{escaped}/*.{}", Pattern::escape(extension));
        let paths = glob(&pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if !path.is_file() {
                continue;
            }
            if excluded.is_some() && path.canonicalize().ok() == excluded {
                log::info!("Skipping report file {}", path.display());
                continue;
            }
            files.push(path);
        }
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}
