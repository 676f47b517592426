use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::detector::{detect_format, resolve_patterns};
use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::extractor::extract_words_from_file;
use crate::models::{ExtractionConfig, LockfileFormat, WordSet};

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct Generation {
    pub dictionary: Dictionary,
    /// Where the dictionary was written; `None` when no words were found.
    pub written_to: Option<PathBuf>,
    /// Lockfiles that could not be read, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

impl Generation {
    /// Record the result of [`process_lockfile`] for `path`.
    ///
    /// Failures are kept in [`Generation::skipped`]; they never abort the batch.
    pub fn record(&mut self, path: &Path, result: Result<(Option<LockfileFormat>, WordSet)>) {
        match result {
            Ok((format, words)) => {
                tracing::debug!("{}: {} words", path.display(), words.len());
                self.dictionary
                    .add_source(&path.display().to_string(), format, words);
            }
            Err(e) => {
                tracing::warn!("skipping {}: {}", path.display(), e);
                self.skipped.push((path.to_path_buf(), e.to_string()));
            }
        }
    }

    /// Persist the dictionary when it holds at least one word.
    pub fn write(&mut self, dictionary_path: &Path) -> Result<()> {
        if self.dictionary.is_empty() {
            tracing::info!("no words found, dictionary not written");
            return Ok(());
        }
        self.dictionary.save(dictionary_path)?;
        self.written_to = Some(dictionary_path.to_path_buf());
        tracing::info!(
            "dictionary with {} words written to {}",
            self.dictionary.len(),
            dictionary_path.display()
        );
        Ok(())
    }
}

/// The lockfiles a batch run will process: the explicit list, then any
/// auto-detected files not already listed.
///
/// Fails with [`Error::MissingFiles`] when any explicitly listed file is
/// missing.
pub fn resolve_lockfiles(config: &Config) -> Result<Vec<PathBuf>> {
    let explicit: Vec<PathBuf> = config
        .lockfiles
        .iter()
        .map(|p| resolve_against(&config.base_dir, p))
        .collect();

    let missing: Vec<PathBuf> = explicit.iter().filter(|p| !p.exists()).cloned().collect();
    if !missing.is_empty() {
        return Err(Error::MissingFiles(missing));
    }

    let mut lockfiles = explicit;
    if config.auto_detect {
        for found in resolve_patterns(&config.base_dir, &config.auto_detect_patterns) {
            if !lockfiles.iter().any(|p| same_file(p, &found)) {
                lockfiles.push(found);
            }
        }
    }

    tracing::debug!("lockfiles to process: {:?}", lockfiles);
    Ok(lockfiles)
}

/// Detect the format of `path` and extract its words.
pub fn process_lockfile(
    path: &Path,
    config: &ExtractionConfig,
) -> Result<(Option<LockfileFormat>, WordSet)> {
    let format = detect_format(path);
    match format {
        Some(format) => tracing::debug!("{} detected as {}", path.display(), format),
        None => tracing::debug!("{} is not a known lockfile name", path.display()),
    }
    let words = extract_words_from_file(path, format, config)?;
    Ok((format, words))
}

/// Run the whole batch: resolve lockfiles, extract, aggregate, and write the
/// dictionary to `config.dictionary_path`.
pub fn generate_dictionary(config: &Config) -> Result<Generation> {
    if !config.enabled {
        tracing::info!("dictionary generation disabled");
        return Ok(Generation::default());
    }

    let lockfiles = resolve_lockfiles(config)?;
    let extraction = config.extraction();

    let mut generation = Generation::default();
    for path in &lockfiles {
        generation.record(path, process_lockfile(path, &extraction));
    }

    generation.write(&config.dictionary_path)?;
    Ok(generation)
}

fn resolve_against(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || base_dir == Path::new(".") {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
