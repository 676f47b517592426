use anyhow::Result;

use super::pipenv::PipenvExtractor;
use super::poetry::PoetryExtractor;
use super::Extractor;
use crate::models::{ExtractionConfig, WordSet};

/// Content-sniffing extractor for Python lockfiles.
///
/// JSON content is read as `Pipfile.lock`, anything else as `poetry.lock`,
/// whatever the file happens to be called.
pub struct PythonExtractor;

impl Extractor for PythonExtractor {
    fn name(&self) -> &'static str {
        "python lockfile"
    }

    fn extract(&self, content: &str, config: &ExtractionConfig) -> Result<WordSet> {
        if content.trim_start().starts_with('{')
            && serde_json::from_str::<serde_json::Value>(content).is_ok()
        {
            tracing::debug!("content is JSON, reading as Pipfile.lock");
            return PipenvExtractor.extract(content, config);
        }

        tracing::debug!("content is not JSON, reading as poetry.lock");
        PoetryExtractor.extract(content, config)
    }
}
