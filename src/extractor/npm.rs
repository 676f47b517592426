use anyhow::Result;
use serde_json::{Map, Value};

use super::{is_identifier, Extractor, WordCollector};
use crate::models::{ExtractionConfig, WordSet};

/// Package-entry keys whose values are never useful words.
const SKIPPED_KEYS: &[&str] = &[
    "version",
    "resolved",
    "integrity",
    "requires",
    "dev",
    "optional",
    "bundled",
];

/// Extractor for `package-lock.json`.
///
/// Handles both the `packages` map (lockfile v2/v3) and the legacy nested
/// `dependencies` map (v1). Scoped names contribute the scope (without `@`)
/// and the package name, never the joined `@scope/name`, and names are not
/// split on hyphens.
pub struct NpmExtractor;

impl Extractor for NpmExtractor {
    fn name(&self) -> &'static str {
        "package-lock.json"
    }

    fn extract(&self, content: &str, config: &ExtractionConfig) -> Result<WordSet> {
        let lock: Value = serde_json::from_str(content)?;
        let mut words = WordCollector::new();

        let project = lock
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("not specified");
        let lockfile_version = lock
            .get("lockfileVersion")
            .map(Value::to_string)
            .unwrap_or_else(|| "unknown".to_string());
        tracing::debug!(
            "parsed package-lock.json for {} (lockfileVersion {})",
            project,
            lockfile_version
        );

        if let Some(packages) = lock.get("packages").and_then(Value::as_object) {
            tracing::debug!("using packages map ({} entries)", packages.len());
            for (pkg_path, info) in packages {
                // The root project is keyed by the empty path
                if pkg_path.is_empty() {
                    continue;
                }
                add_package_path(&mut words, pkg_path, config);
                if let Some(info) = info.as_object() {
                    walk_object(&mut words, info, config);
                }
            }
        } else if let Some(deps) = lock.get("dependencies").and_then(Value::as_object) {
            tracing::debug!("using dependencies map ({} entries)", deps.len());
            add_dependencies(&mut words, deps, 0, config);
        } else {
            tracing::debug!("no packages or dependencies in package-lock.json");
        }

        Ok(words.into_words())
    }
}

/// `node_modules/@scope/name` → `scope`, `name`; `node_modules/name` → `name`.
fn add_package_path(words: &mut WordCollector, pkg_path: &str, config: &ExtractionConfig) {
    let segments: Vec<&str> = pkg_path.split('/').collect();
    if segments.len() < 2 {
        return;
    }

    let name = segments[segments.len() - 1];
    let parent = segments[segments.len() - 2];

    if let Some(scope) = parent.strip_prefix('@') {
        words.add(scope);
        words.add(name);
        if config.debug {
            tracing::trace!("scoped package {} / {}", scope, name);
        }
    } else {
        words.add(name);
        if config.debug {
            tracing::trace!("package {}", name);
        }
    }
}

fn add_dependencies(
    words: &mut WordCollector,
    deps: &Map<String, Value>,
    depth: usize,
    config: &ExtractionConfig,
) {
    tracing::debug!("{} dependencies at depth {}", deps.len(), depth);

    for (name, dep) in deps {
        if !name.starts_with('@') {
            words.add(name);
        }

        if let Some((scope, leaf)) = name.split_once('/') {
            if let Some(scope) = scope.strip_prefix('@') {
                words.add(scope);
                words.add(leaf.split('/').next().unwrap_or(leaf));
            }
        }

        if let Some(dep) = dep.as_object() {
            walk_object(words, dep, config);
            if let Some(nested) = dep.get("dependencies").and_then(Value::as_object) {
                add_dependencies(words, nested, depth + 1, config);
            }
        }
    }
}

/// Collect identifier-shaped keys and string values from a package entry.
fn walk_object(words: &mut WordCollector, object: &Map<String, Value>, config: &ExtractionConfig) {
    for (key, value) in object {
        if SKIPPED_KEYS.contains(&key.as_str()) {
            continue;
        }

        if is_identifier(key) {
            words.add(key);
        }

        match value {
            Value::Object(nested) => walk_object(words, nested, config),
            Value::Array(items) => {
                for item in items {
                    match item {
                        Value::String(s) if is_identifier(s) => words.add(s),
                        Value::Object(nested) => walk_object(words, nested, config),
                        _ => {}
                    }
                }
            }
            Value::String(s) if is_identifier(s) => {
                words.add(s);
                if config.debug {
                    tracing::trace!("value {} under key {}", s, key);
                }
            }
            _ => {}
        }
    }
}
