//! Adapter for spell-checker hosts that hand files to a parser.
//!
//! [`LockfileParser::parse`] must answer synchronously, so it only tags the
//! input and queues the lockfile for extraction. A single worker task drains
//! the queue in order, merges the words, and rewrites the dictionary file.
//! The dictionary therefore lags behind the most recent `parse` call.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::sync::{mpsc, oneshot};

use crate::config::Config;
use crate::detector::detect_format;
use crate::dictionary::Dictionary;
use crate::extractor::extract_words_from_file;
use crate::models::LockfileFormat;

pub const PARSER_NAME: &str = "lockfile-parser";

/// Scope attached to spans of recognized lockfiles.
pub const LOCKFILE_SCOPE: &str = "lockfile";

/// A span of text handed back to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedText {
    pub text: String,
    /// Byte range `[start, end)` within the original content.
    pub range: (usize, usize),
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    pub content: String,
    pub filename: String,
    pub parsed_texts: Vec<ParsedText>,
}

enum Job {
    Extract {
        path: PathBuf,
        format: LockfileFormat,
    },
    Flush(oneshot::Sender<()>),
}

pub struct LockfileParser {
    config: Config,
    jobs: mpsc::UnboundedSender<Job>,
}

impl LockfileParser {
    /// Create the parser and spawn its extraction worker.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: Config) -> Self {
        let (jobs, queue) = mpsc::unbounded_channel();
        tokio::spawn(run_worker(queue, config.clone()));
        Self { config, jobs }
    }

    pub fn name(&self) -> &'static str {
        PARSER_NAME
    }

    /// Return `content` as a single span, queueing recognized lockfiles for
    /// extraction.
    ///
    /// The returned result is never transformed; extraction happens after
    /// this call returns and its failures are only logged.
    pub fn parse(&self, content: &str, filename: &str) -> ParseResult {
        let path = Path::new(filename);
        let format = detect_format(path);

        let scope = match format {
            Some(format) => {
                tracing::debug!("{} detected as {}", filename, format);
                if self.config.enabled {
                    let job = Job::Extract {
                        path: path.to_path_buf(),
                        format,
                    };
                    if self.jobs.send(job).is_err() {
                        tracing::debug!("extraction worker stopped, {} not queued", filename);
                    }
                }
                Some(LOCKFILE_SCOPE.to_string())
            }
            None => {
                tracing::debug!("not a recognized lockfile: {}", filename);
                None
            }
        };

        ParseResult {
            content: content.to_string(),
            filename: filename.to_string(),
            parsed_texts: vec![ParsedText {
                text: content.to_string(),
                range: (0, content.len()),
                scope,
            }],
        }
    }

    /// Wait until every extraction queued so far has finished.
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.jobs.send(Job::Flush(done)).is_ok() {
            let _ = wait.await;
        }
    }
}

async fn run_worker(mut queue: mpsc::UnboundedReceiver<Job>, config: Config) {
    let mut dictionary = Dictionary::new();

    while let Some(job) = queue.recv().await {
        match job {
            Job::Extract { path, format } => {
                if let Err(e) = extract_and_save(&mut dictionary, &path, format, &config).await {
                    if config.debug {
                        tracing::warn!("error processing {}: {:#}", path.display(), e);
                    }
                }
            }
            Job::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
}

async fn extract_and_save(
    dictionary: &mut Dictionary,
    path: &Path,
    format: LockfileFormat,
    config: &Config,
) -> anyhow::Result<()> {
    let extraction = config.extraction();
    let task_path = path.to_path_buf();
    let words = tokio::task::spawn_blocking(move || {
        extract_words_from_file(&task_path, Some(format), &extraction)
    })
    .await??;

    let count = words.len();
    dictionary.add_source(&path.display().to_string(), Some(format), words);
    dictionary.save(&config.dictionary_path)?;

    tracing::debug!(
        "extracted {} words from {} and saved to {}",
        count,
        path.display(),
        config.dictionary_path.display()
    );
    Ok(())
}
