use anyhow::Result;
use serde_json::Value;

use super::{Extractor, WordCollector};
use crate::models::{ExtractionConfig, WordSet};

/// Extractor for `Pipfile.lock`: package names under `default` and `develop`.
pub struct PipenvExtractor;

impl Extractor for PipenvExtractor {
    fn name(&self) -> &'static str {
        "Pipfile.lock"
    }

    fn extract(&self, content: &str, _config: &ExtractionConfig) -> Result<WordSet> {
        let lock: Value = serde_json::from_str(content)?;
        let mut words = WordCollector::new();

        for section in &["default", "develop"] {
            if let Some(packages) = lock.get(section).and_then(Value::as_object) {
                for name in packages.keys() {
                    words.add(name);
                    words.add_parts(name, &['-', '_'], 2);
                }
            }
        }

        Ok(words.into_words())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::tests::assert_clean;

    #[test]
    fn test_extract_default_and_develop() {
        let content = r#"{
    "_meta": { "hash": { "sha256": "abc" }, "pipfile-spec": 6 },
    "default": {
        "requests": { "version": "==2.31.0" },
        "typing_extensions": { "version": "==4.7.1" }
    },
    "develop": {
        "pytest-cov": { "version": "==4.1.0" }
    }
}"#;
        let words = PipenvExtractor
            .extract(content, &ExtractionConfig::default())
            .unwrap();

        assert_eq!(
            words.iter().map(String::as_str).collect::<Vec<_>>(),
            vec![
                "cov",
                "extensions",
                "pytest",
                "pytest-cov",
                "requests",
                "typing",
                "typing_extensions",
            ]
        );
        assert_clean(&words);
    }
}
