use anyhow::Result;
use serde_json::Value;

use super::{Extractor, WordCollector};
use crate::models::{ExtractionConfig, WordSet};

/// Extractor for `composer.lock`.
///
/// Unlike npm, the full `vendor/name` is kept next to its parts.
pub struct ComposerExtractor;

impl Extractor for ComposerExtractor {
    fn name(&self) -> &'static str {
        "composer.lock"
    }

    fn extract(&self, content: &str, _config: &ExtractionConfig) -> Result<WordSet> {
        let lock: Value = serde_json::from_str(content)?;
        let mut words = WordCollector::new();

        for section in &["packages", "packages-dev"] {
            let Some(packages) = lock.get(section).and_then(Value::as_array) else {
                continue;
            };
            for package in packages {
                if let Some(name) = package.get("name").and_then(Value::as_str) {
                    words.add(name);
                    if name.contains('/') {
                        words.add_parts(name, &['/'], 2);
                    }
                }
            }
        }

        Ok(words.into_words())
    }
}
