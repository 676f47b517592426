use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::ExtractionConfig;

/// Default location of the generated dictionary.
pub const DEFAULT_DICTIONARY_PATH: &str = ".cspell/lockfile-words.txt";

/// Batch configuration, deserialized from `.lockfile-words/config.toml`.
///
/// Keys are snake_case; the camelCase spellings used by the cspell plugin
/// (`autoDetect`, `dictionaryPath`, ...) are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lockfiles to process. Every listed file must exist.
    pub lockfiles: Vec<PathBuf>,
    /// When false, nothing is extracted or written.
    pub enabled: bool,
    /// Also pick up lockfiles matching `auto_detect_patterns` in `base_dir`.
    #[serde(alias = "autoDetect")]
    pub auto_detect: bool,
    #[serde(alias = "autoDetectPatterns")]
    pub auto_detect_patterns: Vec<String>,
    #[serde(alias = "dictionaryPath")]
    pub dictionary_path: PathBuf,
    pub debug: bool,
    /// Emit digit-concatenated version words (`1.2.3` → `123`). On by default.
    #[serde(alias = "versionWords")]
    pub version_words: bool,
    /// Directory auto-detect patterns are resolved against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lockfiles: Vec::new(),
            enabled: true,
            auto_detect: true,
            auto_detect_patterns: default_patterns(),
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            debug: false,
            version_words: true,
            base_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// The subset of options extractors care about.
    pub fn extraction(&self) -> ExtractionConfig {
        ExtractionConfig {
            debug: self.debug,
            version_words: self.version_words,
        }
    }
}

pub fn default_patterns() -> Vec<String> {
    [
        "**/package-lock.json",
        "**/yarn.lock",
        "**/Gemfile.lock",
        "**/composer.lock",
        "**/Cargo.lock",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

/// Load the configuration, searching in order:
///
/// 1. `config_override`: path passed via `--config`
/// 2. `<project_path>/.lockfile-words/config.toml`
/// 3. `~/.config/lockfile-words/config.toml`
/// 4. Built-in [`Config::default`]
///
/// `base_dir` is set to `project_path`.
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    let mut config = match find_config_file(project_path, config_override) {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            read_config(&path)?
        }
        None => Config::default(),
    };
    config.base_dir = project_path.to_path_buf();
    Ok(config)
}

fn find_config_file(project_path: &Path, config_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = config_override {
        return Some(path.to_path_buf());
    }

    let project_config = project_path.join(".lockfile-words").join("config.toml");
    if project_config.exists() {
        return Some(project_config);
    }

    let home_config = dirs::home_dir()?
        .join(".config")
        .join("lockfile-words")
        .join("config.toml");
    home_config.exists().then_some(home_config)
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    toml::from_str(&content).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.enabled);
        assert!(config.auto_detect);
        assert!(!config.debug);
        assert!(config.version_words);
        assert_eq!(config.auto_detect_patterns.len(), 5);
        assert_eq!(
            config.dictionary_path,
            PathBuf::from(".cspell/lockfile-words.txt")
        );
        assert_eq!(config.extraction(), ExtractionConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
lockfiles = ["yarn.lock", "go.sum"]
autoDetect = false
version_words = false
"#,
        )
        .unwrap();

        assert_eq!(
            config.lockfiles,
            vec![PathBuf::from("yarn.lock"), PathBuf::from("go.sum")]
        );
        assert!(!config.auto_detect);
        assert!(!config.version_words);
        assert!(config.enabled);
        assert_eq!(config.auto_detect_patterns, default_patterns());
    }

    #[test]
    fn test_load_project_config() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(".lockfile-words");
        std::fs::create_dir(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config.toml"),
            "dictionary_path = \"words/deps.txt\"\ndebug = true\n",
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.dictionary_path, PathBuf::from("words/deps.txt"));
        assert!(config.debug);
        assert_eq!(config.base_dir, dir.path());
    }

    #[test]
    fn test_override_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load_config(dir.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "enabled = \"maybe\"").unwrap();
        let err = load_config(dir.path(), Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
