use std::path::Path;

use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lockfile_words::{Generation, SourceWords};

/// Render a colored terminal report.
pub fn render(generation: &Generation, path: &Path, verbose: bool, quiet: bool) -> Result<()> {
    let dictionary = &generation.dictionary;
    let total = dictionary.len();
    let source_count = dictionary.sources().len();
    let skipped_count = generation.skipped.len();

    if quiet {
        println!(
            "Words: {}  Lockfiles: {}  Skipped: {}",
            total.to_string().green(),
            source_count,
            skipped_count.to_string().yellow(),
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "lockfile-words".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Project: {}\n", path.display());

    if source_count > 0 {
        render_table(dictionary.sources());
        println!();
    }

    if skipped_count > 0 {
        println!(" {} Lockfiles that could not be read:\n", "[WARN]".yellow().bold());
        for (path, reason) in &generation.skipped {
            println!("   {} {}: {}", "⚠".yellow(), path.display(), reason);
        }
        println!();
    }

    if verbose {
        for source in dictionary.sources().iter().filter(|s| !s.words.is_empty()) {
            println!(" {} {}", "[WORDS]".cyan().bold(), source.source);
            let words: Vec<&str> = source.words.iter().map(String::as_str).collect();
            println!("   {}\n", words.join(" "));
        }
    }

    match &generation.written_to {
        Some(dest) => println!(
            " {} {} words written to {}",
            "✓".green(),
            total,
            dest.display()
        ),
        None => println!(
            " {} No words were found in lockfiles, dictionary not written",
            "⚠".yellow()
        ),
    }

    Ok(())
}

fn render_table(sources: &[SourceWords]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Lockfile").add_attribute(Attribute::Bold),
            Cell::new("Format").add_attribute(Attribute::Bold),
            Cell::new("Words").add_attribute(Attribute::Bold),
        ]);

    for source in sources {
        let (format, format_color) = match source.format {
            Some(format) => (format.to_string(), Color::Cyan),
            None => ("generic".to_string(), Color::DarkGrey),
        };
        let count_color = if source.words.is_empty() {
            Color::Yellow
        } else {
            Color::Green
        };

        table.add_row(vec![
            Cell::new(&source.source),
            Cell::new(format).fg(format_color),
            Cell::new(source.words.len())
                .fg(count_color)
                .set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", table);
}
