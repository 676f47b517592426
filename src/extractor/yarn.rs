use anyhow::Result;
use regex::Regex;

use super::{Extractor, WordCollector};
use crate::models::{ExtractionConfig, WordSet};

/// Extractor for `yarn.lock` (classic and berry).
///
/// Package names come from the unindented declaration lines such as
/// `"@scope/name@^1.0.0", "@scope/name@^1.2.0":`.
pub struct YarnExtractor;

impl Extractor for YarnExtractor {
    fn name(&self) -> &'static str {
        "yarn.lock"
    }

    fn extract(&self, content: &str, config: &ExtractionConfig) -> Result<WordSet> {
        let version_re = Regex::new(r#"^\s+version:?\s+"?(\d+\.\d+\.\d+)"?\s*$"#)?;
        let mut words = WordCollector::new();

        for line in content.lines() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with(' ') || line.starts_with('\t') {
                if let Some(caps) = version_re.captures(line) {
                    words.add_version(&caps[1], config);
                }
                continue;
            }

            let Some(header) = line.trim_end().strip_suffix(':') else {
                continue;
            };

            for spec in header.split(',') {
                if let Some(name) = package_name(spec.trim().trim_matches('"')) {
                    add_package_name(&mut words, name);
                }
            }
        }

        Ok(words.into_words())
    }
}

/// Name part of a `name@range` spec; the `@` of a scope is not a separator.
fn package_name(spec: &str) -> Option<&str> {
    let offset = usize::from(spec.starts_with('@'));
    let at = spec[offset..].find('@')? + offset;
    let name = &spec[..at];

    if name.is_empty() || name.contains(char::is_whitespace) {
        None
    } else {
        Some(name)
    }
}

fn add_package_name(words: &mut WordCollector, name: &str) {
    match name.strip_prefix('@') {
        Some(scoped) => {
            if let Some((scope, leaf)) = scoped.split_once('/') {
                words.add(scope);
                words.add(leaf);
            }
        }
        None => words.add(name),
    }
}
