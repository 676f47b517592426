use std::path::PathBuf;

use clap::Parser;

use lockfile_words::Config;

#[derive(Parser, Debug)]
#[command(
    name = "lockfile-words",
    about = "Extract package names from lockfiles into a spell-checker dictionary",
    version
)]
pub struct Cli {
    /// Project directory holding the lockfiles
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Dictionary output path [default: .cspell/lockfile-words.txt]
    #[arg(short, long, value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Lockfiles to process (repeatable, comma separated)
    #[arg(short, long, value_name = "FILE", value_delimiter = ',')]
    pub lockfiles: Vec<PathBuf>,

    /// Only process the lockfiles given with --lockfiles
    #[arg(long)]
    pub no_auto_detect: bool,

    /// Patterns used to find lockfiles (repeatable, comma separated)
    #[arg(short, long, value_name = "PATTERN", value_delimiter = ',')]
    pub auto_detect_patterns: Vec<String>,

    /// Config file [default: ./.lockfile-words/config.toml, fallback ~/.config/lockfile-words/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip digit-only version words (1.2.3 becomes 123)
    #[arg(long)]
    pub no_version_words: bool,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// List every word per lockfile
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if self.debug {
            config.debug = true;
        }
        if let Some(path) = &self.path {
            config.dictionary_path = path.clone();
        }
        if !self.lockfiles.is_empty() {
            config.lockfiles = self.lockfiles.clone();
        }
        if self.no_auto_detect {
            config.auto_detect = false;
        }
        if !self.auto_detect_patterns.is_empty() {
            config.auto_detect_patterns = self.auto_detect_patterns.clone();
        }
        if self.no_version_words {
            config.version_words = false;
        }
    }
}
