//! `lockfile-words`: turn dependency lockfiles into a spell-checker dictionary.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`lockfile_words::load_config`]) and apply CLI overrides.
//! 3. Resolve explicit and auto-detected lockfiles.
//! 4. Extract words from each lockfile, skipping unreadable ones.
//! 5. Write the dictionary when at least one word was found.
//! 6. Render the requested report ([`report`]).

mod cli;
mod report;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use cli::{Cli, ReportFormat};
use lockfile_words::config::load_config;
use lockfile_words::pipeline::{process_lockfile, resolve_lockfiles, Generation};
use report::Summary;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let mut config = load_config(&cli.dir, cli.config.as_deref())?;
    cli.apply(&mut config);

    if !config.enabled {
        if !cli.quiet {
            eprintln!("{} dictionary generation is disabled", "→".cyan());
        }
        return Ok(());
    }

    let lockfiles = match resolve_lockfiles(&config) {
        Ok(lockfiles) => lockfiles,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    if lockfiles.is_empty() && !cli.quiet {
        eprintln!("No lockfiles found in {}", cli.dir.display());
    }

    let pb = if !cli.quiet && cli.report == ReportFormat::Terminal && !lockfiles.is_empty() {
        let pb = ProgressBar::new(lockfiles.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let extraction = config.extraction();
    let mut generation = Generation::default();

    for path in lockfiles {
        if let Some(pb) = &pb {
            pb.set_message(path.display().to_string());
        }
        let task_path = path.clone();
        let result =
            tokio::task::spawn_blocking(move || process_lockfile(&task_path, &extraction)).await?;
        generation.record(&path, result);
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    if let Err(e) = generation.write(&config.dictionary_path) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&generation, &cli.dir, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            let summary = Summary::new(&generation, &cli.dir);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `--debug`.
fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("lockfile_words=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
