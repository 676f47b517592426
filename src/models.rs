use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Sorted, de-duplicated set of dictionary words.
pub type WordSet = BTreeSet<String>;

/// A lockfile family recognized by file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LockfileFormat {
    GemfileLock,
    YarnLock,
    PackageLock,
    ComposerLock,
    CargoLock,
    PoetryLock,
    PipfileLock,
    GradleLock,
    SbtLock,
    MavenLock,
    NugetLock,
    PodfileLock,
    CocoapodsLock,
    MixLock,
    CarthageResolved,
    SwiftResolved,
    GoSum,
    GoMod,
}

impl LockfileFormat {
    /// Stable kebab-case label used in logs and JSON output.
    pub fn label(&self) -> &'static str {
        match self {
            LockfileFormat::GemfileLock => "gemfile-lock",
            LockfileFormat::YarnLock => "yarn-lock",
            LockfileFormat::PackageLock => "package-lock",
            LockfileFormat::ComposerLock => "composer-lock",
            LockfileFormat::CargoLock => "cargo-lock",
            LockfileFormat::PoetryLock => "poetry-lock",
            LockfileFormat::PipfileLock => "pipfile-lock",
            LockfileFormat::GradleLock => "gradle-lock",
            LockfileFormat::SbtLock => "sbt-lock",
            LockfileFormat::MavenLock => "maven-lock",
            LockfileFormat::NugetLock => "nuget-lock",
            LockfileFormat::PodfileLock => "podfile-lock",
            LockfileFormat::CocoapodsLock => "cocoapods-lock",
            LockfileFormat::MixLock => "mix-lock",
            LockfileFormat::CarthageResolved => "carthage-resolved",
            LockfileFormat::SwiftResolved => "swift-resolved",
            LockfileFormat::GoSum => "go-sum",
            LockfileFormat::GoMod => "go-mod",
        }
    }
}

impl std::fmt::Display for LockfileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Options handed to every extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Emit verbose per-word tracing.
    pub debug: bool,
    /// Emit digit-concatenated version words (`1.2.3` → `123`) for the
    /// formats that carry them (yarn, Gemfile, poetry, generic). On by default.
    pub version_words: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        ExtractionConfig {
            debug: false,
            version_words: true,
        }
    }
}

/// Words extracted from a single lockfile, kept for provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceWords {
    pub source: String,
    pub format: Option<LockfileFormat>,
    pub words: WordSet,
}
