//! `lockfile-words`: build a spell-checker dictionary from dependency lockfiles.
//!
//! # Flow
//! 1. Resolve the lockfiles to read ([`pipeline::resolve_lockfiles`]).
//! 2. Detect each file's format from its name ([`detector::detect_format`]).
//! 3. Extract package-identifier words with the matching extractor
//!    ([`extractor::extract_words`]), falling back to a generic scan.
//! 4. Merge the words per source ([`dictionary::Dictionary`]) and write the
//!    dictionary file.
//!
//! [`parser::LockfileParser`] exposes the same extraction to spell-checker
//! hosts, deferring the work to a background task.

pub mod config;
pub mod detector;
pub mod dictionary;
pub mod error;
pub mod extractor;
pub mod models;
pub mod parser;
pub mod pipeline;

pub use config::{load_config, Config};
pub use detector::detect_format;
pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use extractor::extract_words;
pub use models::{ExtractionConfig, LockfileFormat, SourceWords, WordSet};
pub use parser::{LockfileParser, ParseResult, ParsedText};
pub use pipeline::{generate_dictionary, Generation};
