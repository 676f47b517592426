use anyhow::Result;
use regex::Regex;

use super::{Extractor, WordCollector};
use crate::models::{ExtractionConfig, WordSet};

const SEPARATORS: &[char] = &['.', '_', '-'];

/// Fallback extractor for files without a dedicated format, or whose
/// dedicated extractor found nothing.
pub struct GenericExtractor;

impl Extractor for GenericExtractor {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn extract(&self, content: &str, config: &ExtractionConfig) -> Result<WordSet> {
        let identifier_re = Regex::new(r"[a-zA-Z][a-zA-Z0-9_.-]{2,}")?;
        let version_re = Regex::new(r"\b(\d+\.\d+\.\d+)\b")?;

        let mut words = WordCollector::new();

        for m in identifier_re.find_iter(content) {
            // `sentence.` and `word-` carry punctuation, not meaning
            let word = m.as_str().trim_end_matches(SEPARATORS);
            if word.chars().count() < 3 {
                continue;
            }
            words.add(word);
            words.add_parts(word, SEPARATORS, 3);
        }

        for caps in version_re.captures_iter(content) {
            words.add_version(&caps[1], config);
        }

        Ok(words.into_words())
    }
}
