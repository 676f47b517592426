use anyhow::Result;
use regex::Regex;

use super::{Extractor, WordCollector};
use crate::models::{ExtractionConfig, WordSet};

/// Extractor for `poetry.lock`.
pub struct PoetryExtractor;

impl Extractor for PoetryExtractor {
    fn name(&self) -> &'static str {
        "poetry.lock"
    }

    fn extract(&self, content: &str, config: &ExtractionConfig) -> Result<WordSet> {
        let name_re = Regex::new(r#"name = "([^"]+)""#)?;
        let description_re = Regex::new(r#"description = "([^"]+)""#)?;
        let version_re = Regex::new(r#"version = "([0-9]+\.[0-9]+\.[0-9]+)""#)?;
        let category_re = Regex::new(r#"category = "([^"]+)""#)?;

        let mut words = WordCollector::new();

        for caps in name_re.captures_iter(content) {
            words.add(&caps[1]);
            words.add_parts(&caps[1], &['-'], 2);
        }

        for caps in description_re.captures_iter(content) {
            for word in caps[1].split_whitespace() {
                let cleaned: String = word
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                    .collect();
                if cleaned.chars().count() > 2 {
                    words.add(&cleaned);
                }
            }
        }

        for caps in version_re.captures_iter(content) {
            words.add_version(&caps[1], config);
        }

        for caps in category_re.captures_iter(content) {
            words.add(&caps[1]);
        }

        Ok(words.into_words())
    }
}
