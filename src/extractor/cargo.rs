use anyhow::Result;
use regex::Regex;
use serde::Deserialize;

use super::{Extractor, WordCollector};
use crate::models::{ExtractionConfig, WordSet};

#[derive(Debug, Deserialize)]
struct CargoLock {
    #[serde(default)]
    package: Vec<CargoLockPackage>,
    #[serde(default)]
    patch: CargoLockPatch,
}

/// `[[patch.unused]]` lists `[patch]` entries that matched no dependency.
#[derive(Debug, Default, Deserialize)]
struct CargoLockPatch {
    #[serde(default)]
    unused: Vec<CargoLockPackage>,
}

#[derive(Debug, Deserialize)]
struct CargoLockPackage {
    name: String,
    /// Local workspace members have no `source`.
    source: Option<String>,
}

/// Extractor for `Cargo.lock`.
///
/// Reads the `[[package]]` and `[[patch.unused]]` tables; a file that is not valid TOML is scanned
/// line by line for `name = "..."` and `source = "..."` instead.
pub struct CargoExtractor;

impl Extractor for CargoExtractor {
    fn name(&self) -> &'static str {
        "Cargo.lock"
    }

    fn extract(&self, content: &str, _config: &ExtractionConfig) -> Result<WordSet> {
        let mut words = WordCollector::new();

        match toml::from_str::<CargoLock>(content) {
            Ok(lock) => {
                for package in lock.package.iter().chain(&lock.patch.unused) {
                    add_name(&mut words, &package.name);
                    if let Some(source) = &package.source {
                        add_source(&mut words, source);
                    }
                }
            }
            Err(e) => {
                tracing::debug!("Cargo.lock is not valid TOML, scanning lines: {}", e);
                let name_re = Regex::new(r#"name = "([^"]+)""#)?;
                let source_re = Regex::new(r#"source = "([^"]+)""#)?;

                for caps in name_re.captures_iter(content) {
                    add_name(&mut words, &caps[1]);
                }
                for caps in source_re.captures_iter(content) {
                    add_source(&mut words, &caps[1]);
                }
            }
        }

        Ok(words.into_words())
    }
}

fn add_name(words: &mut WordCollector, name: &str) {
    words.add(name);
    words.add_parts(name, &['-'], 2);
}

/// `registry+https://github.com/rust-lang/crates.io-index` →
/// `github.com`, `rust-lang`, `crates.io-index`.
fn add_source(words: &mut WordCollector, source: &str) {
    let Some((_, location)) = source.split_once("://") else {
        return;
    };
    // Drop `?rev=...` and `#<commit>` from git sources
    let location = location.split(&['?', '#'][..]).next().unwrap_or(location);
    words.add_parts(location, &['/'], 2);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::tests::assert_clean;

    const CARGO_LOCK: &str = r#"# This file is automatically @generated by Cargo.
version = 3

[[package]]
name = "my-app"
version = "0.1.0"
dependencies = [
 "serde",
 "tokio-util",
]

[[package]]
name = "serde"
version = "1.0.150"
source = "registry+https://github.com/rust-lang/crates.io-index"
checksum = "abc123"

[[package]]
name = "tokio-util"
version = "0.7.8"
source = "git+https://github.com/tokio-rs/tokio?branch=master#d2f51fd"

[[package]]
name = "base-64"
version = "0.1.0"
"#;

    #[test]
    fn test_extract_names_and_sources() {
        let words = CargoExtractor
            .extract(CARGO_LOCK, &ExtractionConfig::default())
            .unwrap();

        assert!(words.contains("my-app"));
        assert!(words.contains("my"));
        assert!(words.contains("app"));
        assert!(words.contains("serde"));
        assert!(words.contains("tokio-util"));
        assert!(words.contains("tokio"));
        assert!(words.contains("util"));
        assert!(words.contains("base-64"));
        assert!(words.contains("base"));

        assert!(words.contains("github.com"));
        assert!(words.contains("rust-lang"));
        assert!(words.contains("crates.io-index"));
        assert!(words.contains("tokio-rs"));

        assert!(!words.contains("registry+https"));
        assert!(!words.contains("d2f51fd"));
        assert_clean(&words);
    }

    #[test]
    fn test_unused_patches_are_included() {
        let content = r#"version = 3

[[package]]
name = "serde"
version = "1.0.150"
source = "registry+https://github.com/rust-lang/crates.io-index"

[[patch.unused]]
name = "my-fork"
version = "0.2.0"
source = "git+https://github.com/someone/my-fork?rev=abc#abc"
"#;
        let words = CargoExtractor
            .extract(content, &ExtractionConfig::default())
            .unwrap();

        assert!(words.contains("serde"));
        assert!(words.contains("my-fork"));
        assert!(words.contains("fork"));
        assert!(words.contains("someone"));
        assert_clean(&words);
    }

    #[test]
    fn test_malformed_toml_falls_back_to_regex() {
        let content = r#"[[package]
name = "broken-crate"
source = "registry+https://github.com/rust-lang/crates.io-index"
"#;
        let words = CargoExtractor
            .extract(content, &ExtractionConfig::default())
            .unwrap();

        assert!(words.contains("broken-crate"));
        assert!(words.contains("broken"));
        assert!(words.contains("crate"));
        assert!(words.contains("rust-lang"));
    }
}
