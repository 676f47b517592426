//! Per-format word extractors and the dispatcher that routes a lockfile to
//! them.
//!
//! Every extractor implements [`Extractor`]. Extractors may fail internally
//! (malformed JSON, unparsable TOML); [`extract_or_empty`] turns such failures
//! into an empty [`WordSet`], so callers never see them.

use std::path::Path;

use anyhow::Result;

use crate::error::Error;
use crate::models::{ExtractionConfig, LockfileFormat, WordSet};

pub mod cargo;
pub mod composer;
pub mod generic;
pub mod go;
pub mod gradle;
pub mod npm;
pub mod pipenv;
pub mod poetry;
pub mod python;
pub mod ruby;
pub mod yarn;

pub trait Extractor: Send + Sync {
    /// Name used in log lines, usually the lockfile name.
    fn name(&self) -> &'static str;

    fn extract(&self, content: &str, config: &ExtractionConfig) -> Result<WordSet>;
}

/// Run `extractor`, recovering any failure into an empty set.
pub fn extract_or_empty(
    extractor: &dyn Extractor,
    content: &str,
    config: &ExtractionConfig,
) -> WordSet {
    match extractor.extract(content, config) {
        Ok(words) => {
            tracing::debug!("{} extractor found {} words", extractor.name(), words.len());
            words
        }
        Err(e) => {
            tracing::debug!("{} extractor failed: {:#}", extractor.name(), e);
            WordSet::new()
        }
    }
}

/// The dedicated extractor for a format, if there is one.
pub fn extractor_for(format: LockfileFormat) -> Option<&'static dyn Extractor> {
    match format {
        LockfileFormat::PackageLock => Some(&npm::NpmExtractor),
        LockfileFormat::YarnLock => Some(&yarn::YarnExtractor),
        LockfileFormat::GemfileLock => Some(&ruby::GemfileExtractor),
        LockfileFormat::ComposerLock => Some(&composer::ComposerExtractor),
        LockfileFormat::CargoLock => Some(&cargo::CargoExtractor),
        LockfileFormat::PoetryLock | LockfileFormat::PipfileLock => {
            Some(&python::PythonExtractor)
        }
        LockfileFormat::GoMod => Some(&go::GoModExtractor),
        LockfileFormat::GoSum => Some(&go::GoSumExtractor),
        LockfileFormat::GradleLock => Some(&gradle::GradleExtractor),
        LockfileFormat::SbtLock
        | LockfileFormat::MavenLock
        | LockfileFormat::NugetLock
        | LockfileFormat::PodfileLock
        | LockfileFormat::CocoapodsLock
        | LockfileFormat::MixLock
        | LockfileFormat::CarthageResolved
        | LockfileFormat::SwiftResolved => None,
    }
}

/// Extract words from lockfile text.
///
/// Formats without a dedicated extractor, and dedicated extractors that find
/// nothing in non-blank content, fall back to [`generic::GenericExtractor`].
pub fn extract_words(
    content: &str,
    format: Option<LockfileFormat>,
    config: &ExtractionConfig,
) -> WordSet {
    let Some(extractor) = format.and_then(extractor_for) else {
        tracing::debug!(
            "no dedicated extractor for {}, using generic",
            format.map_or("unknown format", |f| f.label())
        );
        return extract_or_empty(&generic::GenericExtractor, content, config);
    };

    let words = extract_or_empty(extractor, content, config);
    if words.is_empty() && !content.trim().is_empty() {
        tracing::debug!(
            "{} extractor matched nothing, falling back to generic",
            extractor.name()
        );
        return extract_or_empty(&generic::GenericExtractor, content, config);
    }

    words
}

/// Read `path` and extract its words.
pub fn extract_words_from_file(
    path: &Path,
    format: Option<LockfileFormat>,
    config: &ExtractionConfig,
) -> Result<WordSet, Error> {
    tracing::debug!("reading {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("{}: {} characters", path.display(), content.len());

    let words = extract_words(&content, format, config);
    tracing::debug!("extracted {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Accumulates words while dropping numeric and version-shaped noise.
#[derive(Debug, Default)]
pub(crate) struct WordCollector {
    words: WordSet,
}

impl WordCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert `word` unless it is empty, all digits, or shaped like `1.2.3`.
    pub(crate) fn add(&mut self, word: &str) {
        if word.is_empty() || is_numeric(word) || is_version(word) {
            return;
        }
        if !self.words.contains(word) {
            self.words.insert(word.to_string());
        }
    }

    /// Split `word` on `separators` and insert the parts that are at least
    /// `min_len` characters long.
    pub(crate) fn add_parts(&mut self, word: &str, separators: &[char], min_len: usize) {
        for part in word.split(separators) {
            if part.chars().count() >= min_len {
                self.add(part);
            }
        }
    }

    /// Insert a version with its dots removed (`1.2.3` → `123`).
    ///
    /// Skipped when [`ExtractionConfig::version_words`] is off; the result is
    /// kept when longer than two digits.
    pub(crate) fn add_version(&mut self, version: &str, config: &ExtractionConfig) {
        if !config.version_words {
            return;
        }
        let digits: String = version.chars().filter(|c| *c != '.').collect();
        if digits.chars().count() > 2 {
            self.words.insert(digits);
        }
    }

    pub(crate) fn into_words(self) -> WordSet {
        self.words
    }
}

fn is_numeric(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_digit())
}

fn is_version(word: &str) -> bool {
    let mut parts = 0;
    for part in word.split('.') {
        if part.is_empty() || !is_numeric(part) {
            return false;
        }
        parts += 1;
    }
    parts >= 2
}

/// `^[A-Za-z][A-Za-z0-9_-]*$` with more than one character.
pub(crate) fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    word.len() > 1
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Sorted, and no dotted `1.2.3`-shaped words. Holds for every format.
    pub(crate) fn assert_no_dotted_versions(words: &WordSet) {
        for word in words {
            assert!(!is_version(word), "version word {word:?}");
        }
        let listed: Vec<_> = words.iter().cloned().collect();
        let mut sorted = listed.clone();
        sorted.sort();
        assert_eq!(listed, sorted);
    }

    /// [`assert_no_dotted_versions`] plus no numeric-only words, for formats
    /// that never emit version words or runs with them turned off.
    pub(crate) fn assert_clean(words: &WordSet) {
        assert_no_dotted_versions(words);
        for word in words {
            assert!(!is_numeric(word), "numeric word {word:?}");
        }
    }

    #[test]
    fn test_collector_rejects_noise() {
        let mut words = WordCollector::new();
        words.add("123");
        words.add("1.2.3");
        words.add("4.5");
        words.add("");
        words.add("serde");
        words.add("v1.2.3");
        let words = words.into_words();
        assert_eq!(
            words.into_iter().collect::<Vec<_>>(),
            vec!["serde", "v1.2.3"]
        );
    }

    #[test]
    fn test_collector_parts_respect_min_len() {
        let mut words = WordCollector::new();
        words.add_parts("a-bc-def-64", &['-'], 2);
        let words = words.into_words();
        assert!(words.contains("bc"));
        assert!(words.contains("def"));
        assert!(!words.contains("a"));
        assert!(!words.contains("64"));
    }

    #[test]
    fn test_version_words_on_by_default() {
        let mut words = WordCollector::new();
        words.add_version("1.2.3", &ExtractionConfig::default());
        words.add_version("1.0", &ExtractionConfig::default());
        assert_eq!(
            words.words.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["123"]
        );

        let opt_out = ExtractionConfig {
            version_words: false,
            ..Default::default()
        };
        let mut words = WordCollector::new();
        words.add_version("4.5.6", &opt_out);
        assert!(words.into_words().is_empty());
    }

    #[test]
    fn test_dispatcher_keeps_generic_version_words() {
        let words = extract_words(
            "PODS:\n  - Alamofire (5.4.0)\n",
            Some(LockfileFormat::PodfileLock),
            &ExtractionConfig::default(),
        );
        assert!(words.contains("540"));
        assert_no_dotted_versions(&words);
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("dict-monkeyc"));
        assert!(is_identifier("co"));
        assert!(!is_identifier("x"));
        assert!(!is_identifier("@babel"));
        assert!(!is_identifier("1abc"));
        assert!(!is_identifier(">=0.10"));
    }

    #[test]
    fn test_unregistered_format_uses_generic() {
        let words = extract_words(
            "PODS:\n  - Alamofire (5.4.0)\n",
            Some(LockfileFormat::PodfileLock),
            &ExtractionConfig::default(),
        );
        assert!(words.contains("PODS"));
        assert!(words.contains("Alamofire"));
    }

    #[test]
    fn test_malformed_json_falls_back_to_generic() {
        let words = extract_words(
            "{ \"packages\": { broken-json",
            Some(LockfileFormat::PackageLock),
            &ExtractionConfig::default(),
        );
        assert!(words.contains("packages"));
        assert!(words.contains("broken-json"));
        assert_clean(&words);
    }

    #[test]
    fn test_blank_content_stays_empty() {
        let words = extract_words(
            "  \n",
            Some(LockfileFormat::YarnLock),
            &ExtractionConfig::default(),
        );
        assert!(words.is_empty());
    }

    #[test]
    fn test_extract_words_from_missing_file() {
        let err = extract_words_from_file(
            Path::new("/nonexistent/yarn.lock"),
            Some(LockfileFormat::YarnLock),
            &ExtractionConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn test_extract_words_from_file() {
        use std::io::Write;
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "go.opentelemetry.io/otel v1.19.0 h1:abc=\n").unwrap();
        let words = extract_words_from_file(
            f.path(),
            Some(LockfileFormat::GoSum),
            &ExtractionConfig::default(),
        )
        .unwrap();
        assert!(words.contains("go.opentelemetry.io/otel"));
        assert!(words.contains("opentelemetry"));
        assert!(words.contains("otel"));
    }
}
