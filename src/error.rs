use std::path::PathBuf;

/// Errors surfaced by the extraction pipeline.
///
/// Malformed lockfile content is not an error: extractors recover it into an
/// empty word set.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One or more explicitly requested lockfiles do not exist.
    #[error("lockfiles not found: {}", display_paths(.0))]
    MissingFiles(Vec<PathBuf>),

    /// A lockfile could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dictionary file or its directory could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be loaded.
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_lists_every_path() {
        let err = Error::MissingFiles(vec![
            PathBuf::from("missing.lock"),
            PathBuf::from("other/yarn.lock"),
        ]);
        assert_eq!(
            err.to_string(),
            "lockfiles not found: missing.lock, other/yarn.lock"
        );
    }
}
