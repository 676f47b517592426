use anyhow::Result;
use regex::Regex;

use super::{Extractor, WordCollector};
use crate::models::{ExtractionConfig, WordSet};

/// Extractor for `Gemfile.lock`.
///
/// Gem names are recognized purely by indentation: four spaces for the gems
/// listed under `specs:`, six for their transitive dependencies.
pub struct GemfileExtractor;

impl Extractor for GemfileExtractor {
    fn name(&self) -> &'static str {
        "Gemfile.lock"
    }

    fn extract(&self, content: &str, config: &ExtractionConfig) -> Result<WordSet> {
        let gem_re = Regex::new(r"(?m)^ {4}([A-Za-z0-9_-]+)(?:\s|$)")?;
        let transitive_re = Regex::new(r"(?m)^ {6}([A-Za-z0-9_-]+)(?:\s|$)")?;
        let github_re = Regex::new(r"github\.com/([A-Za-z0-9_-]+)/([A-Za-z0-9_-]+)")?;
        let branch_re = Regex::new(r"(?m)^ {2}branch: ([A-Za-z0-9_-]+)")?;
        let revision_re = Regex::new(r"(?m)^ {2}revision: ([A-Za-z0-9_-]+)")?;
        let version_re = Regex::new(r"\(([0-9]+\.[0-9]+\.[0-9]+)\)")?;

        let mut words = WordCollector::new();

        for caps in gem_re.captures_iter(content) {
            words.add(&caps[1]);
        }
        for caps in transitive_re.captures_iter(content) {
            words.add(&caps[1]);
        }

        for caps in github_re.captures_iter(content) {
            words.add(&caps[1]);
            words.add(&caps[2]);
        }

        for caps in branch_re.captures_iter(content) {
            words.add(&caps[1]);
        }
        for caps in revision_re.captures_iter(content) {
            words.add(&caps[1]);
        }

        for caps in version_re.captures_iter(content) {
            words.add_version(&caps[1], config);
        }

        Ok(words.into_words())
    }
}
