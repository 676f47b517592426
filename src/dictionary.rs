//! Aggregation of per-lockfile words into the persisted dictionary file.
//!
//! The file is plain text: `#` comment lines for the header and per-source
//! sections, one word per line otherwise.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{Error, Result};
use crate::models::{LockfileFormat, SourceWords, WordSet};

/// Words merged from many lockfiles, with a per-source breakdown.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: WordSet,
    sources: Vec<SourceWords>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the words of one lockfile.
    ///
    /// Adding the same source twice replaces its provenance section in place;
    /// words already merged into the global list stay.
    pub fn add_source(&mut self, source: &str, format: Option<LockfileFormat>, words: WordSet) {
        self.words.extend(words.iter().cloned());

        let entry = SourceWords {
            source: source.to_string(),
            format,
            words,
        };
        match self.sources.iter_mut().find(|s| s.source == source) {
            Some(existing) => *existing = entry,
            None => self.sources.push(entry),
        }
    }

    /// All words, sorted.
    pub fn words(&self) -> &WordSet {
        &self.words
    }

    /// Per-source words in the order the sources were added.
    pub fn sources(&self) -> &[SourceWords] {
        &self.sources
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Render the dictionary file contents.
    pub fn render(&self, generated_at: DateTime<Utc>) -> String {
        let mut out = String::new();

        out.push_str("# CSpell Lockfile Words\n");
        let _ = writeln!(
            out,
            "# Generated on {}",
            generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        );
        out.push('\n');

        out.push_str("# All words (sorted alphabetically)\n");
        for word in &self.words {
            out.push_str(word);
            out.push('\n');
        }
        out.push('\n');

        for source in self.sources.iter().filter(|s| !s.words.is_empty()) {
            let _ = writeln!(
                out,
                "# Words from {} ({} words)",
                source.source,
                source.words.len()
            );
            let _ = writeln!(out, "# {}", "-".repeat(40));
            for word in &source.words {
                out.push_str(word);
                out.push('\n');
            }
            out.push('\n');
        }

        out
    }

    /// Write the dictionary to `path`, creating parent directories and
    /// replacing any previous file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                tracing::debug!("creating directory {}", dir.display());
                std::fs::create_dir_all(dir).map_err(|source| Error::Write {
                    path: dir.to_path_buf(),
                    source,
                })?;
            }
        }

        std::fs::write(path, self.render(Utc::now())).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("dictionary saved to {}", path.display());

        Ok(())
    }
}
