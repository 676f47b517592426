use anyhow::Result;
use regex::Regex;

use super::{Extractor, WordCollector};
use crate::models::{ExtractionConfig, WordSet};

/// Extractor for `go.mod`.
///
/// Collects the module path and every required module. A loose scan for
/// `github.com/...` and `golang.org/...` paths catches requirements that the
/// structured patterns miss.
pub struct GoModExtractor;

impl Extractor for GoModExtractor {
    fn name(&self) -> &'static str {
        "go.mod"
    }

    fn extract(&self, content: &str, _config: &ExtractionConfig) -> Result<WordSet> {
        let module_re = Regex::new(r"(?m)^module\s+(\S+)")?;
        let require_re = Regex::new(r"require\s+\(([^)]+)\)|require\s+(\S+)\s+(\S+)")?;
        let block_line_re = Regex::new(r"^\s*(\S+)\s+v[0-9.]+")?;
        let known_host_re = Regex::new(
            r"github\.com/[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+|golang\.org/[A-Za-z0-9_./-]+",
        )?;

        let mut words = WordCollector::new();

        if let Some(caps) = module_re.captures(content) {
            add_module_path(&mut words, &caps[1]);
        }

        for caps in require_re.captures_iter(content) {
            if let Some(block) = caps.get(1) {
                for line in block.as_str().lines() {
                    if let Some(line_caps) = block_line_re.captures(line) {
                        add_module_path(&mut words, &line_caps[1]);
                    }
                }
            } else if let Some(path) = caps.get(2) {
                add_module_path(&mut words, path.as_str());
            }
        }

        for m in known_host_re.find_iter(content) {
            add_module_path(&mut words, m.as_str());
        }

        Ok(words.into_words())
    }
}

/// Extractor for `go.sum`: module paths from `<path> <version> <hash>` lines.
pub struct GoSumExtractor;

impl Extractor for GoSumExtractor {
    fn name(&self) -> &'static str {
        "go.sum"
    }

    fn extract(&self, content: &str, _config: &ExtractionConfig) -> Result<WordSet> {
        let mut words = WordCollector::new();

        for line in content.lines() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 3 {
                continue;
            }

            let path = fields[0];
            words.add(path);
            for segment in path.split('/') {
                if segment.chars().count() > 1 {
                    words.add(segment);
                    words.add_parts(segment, &['.', '-'], 2);
                }
            }
        }

        Ok(words.into_words())
    }
}

fn add_module_path(words: &mut WordCollector, path: &str) {
    words.add(path);
    words.add_parts(path, &['/'], 2);
}
