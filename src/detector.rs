use std::path::{Path, PathBuf};

use crate::models::LockfileFormat;

/// Exact (lowercased) file names and the format they declare.
const KNOWN_FILES: &[(&str, LockfileFormat)] = &[
    ("gemfile.lock", LockfileFormat::GemfileLock),
    ("yarn.lock", LockfileFormat::YarnLock),
    ("package-lock.json", LockfileFormat::PackageLock),
    ("composer.lock", LockfileFormat::ComposerLock),
    ("cargo.lock", LockfileFormat::CargoLock),
    ("poetry.lock", LockfileFormat::PoetryLock),
    ("pipfile.lock", LockfileFormat::PipfileLock),
    ("gradle.lockfile", LockfileFormat::GradleLock),
    ("buildscript-gradle.lockfile", LockfileFormat::GradleLock),
    ("build.sbt.lock", LockfileFormat::SbtLock),
    ("pom.xml.lock", LockfileFormat::MavenLock),
    ("packages.lock.json", LockfileFormat::NugetLock),
    ("podfile.lock", LockfileFormat::PodfileLock),
    ("cocoapods.lock", LockfileFormat::CocoapodsLock),
    ("mix.lock", LockfileFormat::MixLock),
    ("cartfile.resolved", LockfileFormat::CarthageResolved),
    ("package.resolved", LockfileFormat::SwiftResolved),
    ("go.sum", LockfileFormat::GoSum),
    ("go.mod", LockfileFormat::GoMod),
];

/// Detect the lockfile format from the base file name, ignoring case.
///
/// Returns `None` for names that are not a known lockfile.
pub fn detect_format(path: &Path) -> Option<LockfileFormat> {
    let file_name = path.file_name()?.to_string_lossy().to_lowercase();

    if let Some((_, format)) = KNOWN_FILES.iter().find(|(name, _)| *name == file_name) {
        return Some(*format);
    }

    if file_name.ends_with(".gradle.lockfile") {
        return Some(LockfileFormat::GradleLock);
    }

    None
}

/// Resolve auto-detect patterns to lockfiles present in `base_dir`.
///
/// Patterns are reduced to a bare file name by dropping a leading `**/`;
/// no directory traversal happens.
pub fn resolve_patterns(base_dir: &Path, patterns: &[String]) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for pattern in patterns {
        let file_name = pattern.strip_prefix("**/").unwrap_or(pattern);
        let candidate = if base_dir == Path::new(".") {
            PathBuf::from(file_name)
        } else {
            base_dir.join(file_name)
        };
        if candidate.is_file() {
            tracing::debug!("found lockfile {}", candidate.display());
            if !found.contains(&candidate) {
                found.push(candidate);
            }
        } else {
            tracing::debug!("lockfile not found: {}", candidate.display());
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_detect_is_case_insensitive() {
        assert_eq!(
            detect_format(Path::new("GEMFILE.LOCK")),
            Some(LockfileFormat::GemfileLock)
        );
        assert_eq!(
            detect_format(Path::new("project/Gemfile.lock")),
            Some(LockfileFormat::GemfileLock)
        );
        assert_eq!(
            detect_format(Path::new("Cargo.lock")),
            Some(LockfileFormat::CargoLock)
        );
        assert_eq!(
            detect_format(Path::new("Pipfile.lock")),
            Some(LockfileFormat::PipfileLock)
        );
    }

    #[test]
    fn test_detect_gradle_suffix() {
        assert_eq!(
            detect_format(Path::new("app/buildscript-gradle.lockfile")),
            Some(LockfileFormat::GradleLock)
        );
        assert_eq!(detect_format(Path::new("app/gradle.lockfile.bak")), None);
        assert_eq!(
            detect_format(Path::new("app/settings.gradle.lockfile")),
            Some(LockfileFormat::GradleLock)
        );
        assert_eq!(
            detect_format(Path::new("gradle.lockfile")),
            Some(LockfileFormat::GradleLock)
        );
    }

    #[test]
    fn test_detect_go_files() {
        assert_eq!(detect_format(Path::new("go.sum")), Some(LockfileFormat::GoSum));
        assert_eq!(detect_format(Path::new("GO.MOD")), Some(LockfileFormat::GoMod));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(detect_format(Path::new("README.md")), None);
        assert_eq!(detect_format(Path::new("package.json")), None);
        assert_eq!(detect_format(Path::new("")), None);
        assert_eq!(detect_format(Path::new("/")), None);
    }

    #[test]
    fn test_resolve_patterns_strips_glob_prefix() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("yarn.lock"), "").unwrap();

        let patterns = vec![
            "**/yarn.lock".to_string(),
            "**/Cargo.lock".to_string(),
            "yarn.lock".to_string(),
        ];
        let found = resolve_patterns(dir.path(), &patterns);

        assert_eq!(found, vec![dir.path().join("yarn.lock")]);
    }
}
