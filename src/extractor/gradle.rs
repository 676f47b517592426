use anyhow::Result;
use regex::Regex;

use super::{Extractor, WordCollector};
use crate::models::{ExtractionConfig, WordSet};

/// Extractor for Gradle dependency lockfiles (`gradle.lockfile`,
/// `*.gradle.lockfile`).
///
/// Lines look like `group:artifact:version=configurations`. The group and
/// artifact are emitted separately; the `group:artifact` coordinate is not.
pub struct GradleExtractor;

impl Extractor for GradleExtractor {
    fn name(&self) -> &'static str {
        "gradle.lockfile"
    }

    fn extract(&self, content: &str, _config: &ExtractionConfig) -> Result<WordSet> {
        let re = Regex::new(r"^([^:]+):([^:]+):([^=\s]+)")?;
        let mut words = WordCollector::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(caps) = re.captures(line) {
                let group = &caps[1];
                let artifact = &caps[2];

                words.add(group);
                words.add_parts(group, &['.'], 2);
                words.add(artifact);
                words.add_parts(artifact, &['-'], 2);
            }
        }

        Ok(words.into_words())
    }
}
