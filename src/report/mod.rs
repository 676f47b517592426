//! Report renderers for a dictionary generation run.
//!
//! - [`terminal`]: colored per-lockfile table; respects `--verbose` / `--quiet`.
//! - JSON output serializes [`Summary`] directly.

pub mod terminal;

use std::path::{Path, PathBuf};

use serde::Serialize;

use lockfile_words::{Generation, LockfileFormat};

/// Machine-readable outcome of a run, for `--report json`.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub project: PathBuf,
    pub total_words: usize,
    /// `None` when no words were found and nothing was written.
    pub dictionary: Option<PathBuf>,
    pub sources: Vec<SourceSummary>,
    pub skipped: Vec<SkippedFile>,
}

#[derive(Debug, Serialize)]
pub struct SourceSummary {
    pub source: String,
    pub format: Option<LockfileFormat>,
    pub words: usize,
}

#[derive(Debug, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

impl Summary {
    pub fn new(generation: &Generation, project: &Path) -> Self {
        Summary {
            project: project.to_path_buf(),
            total_words: generation.dictionary.len(),
            dictionary: generation.written_to.clone(),
            sources: generation
                .dictionary
                .sources()
                .iter()
                .map(|s| SourceSummary {
                    source: s.source.clone(),
                    format: s.format,
                    words: s.words.len(),
                })
                .collect(),
            skipped: generation
                .skipped
                .iter()
                .map(|(path, reason)| SkippedFile {
                    path: path.clone(),
                    reason: reason.clone(),
                })
                .collect(),
        }
    }
}
