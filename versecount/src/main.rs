//! # versecount
//!
//! CLI for counting words, characters, and verses per chapter across a
//! 66-book text corpus.
//!
//! ## Overview
//!
//! versecount is built on top of versecountlib. One run reads every book file
//! in order, writes one tab-delimited summary row per chapter, optionally
//! concatenates the whole corpus into a single text file, and prints the
//! grand totals and elapsed time.
//!
//! ## Usage
//!
//! ```bash
//! # Count the corpus in ./KJV, writing wordcount.txt
//! versecount
//!
//! # Corpus elsewhere, combined text enabled
//! versecount --corpus-dir /data/kjv --full-bible
//!
//! # Machine-readable run report
//! versecount --output json
//! ```

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use serde::Serialize;
use versecountlib::{run, CorpusLayout, RunOptions, RunSummary};

/// Run report for `--output json`
#[derive(Debug, Serialize)]
struct JsonReport {
    books: u32,
    chapters: u64,
    words: u64,
    characters: u64,
    elapsed_ms: u128,
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("versecount")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Per-chapter word, character, and verse counts for a 66-book text corpus")
        .arg(
            Arg::new("corpus-dir")
                .short('d')
                .long("corpus-dir")
                .default_value("KJV")
                .help("Directory containing the book files"),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .default_value("")
                .hide_default_value(true)
                .help("Book filename prefix before the two-digit book number"),
        )
        .arg(
            Arg::new("suffix")
                .long("suffix")
                .default_value(".txt")
                .help("Book filename suffix after the two-digit book number"),
        )
        .arg(
            Arg::new("books")
                .long("books")
                .value_parser(clap::value_parser!(u32).range(1..))
                .help("Number of book files to process [default: 66]"),
        )
        .arg(
            Arg::new("summary")
                .short('s')
                .long("summary")
                .default_value("wordcount.txt")
                .help("Tab-delimited summary output file"),
        )
        .arg(
            Arg::new("combined")
                .long("combined")
                .default_value("whole_bible.txt")
                .help("Combined text output file (written with --full-bible)"),
        )
        .arg(
            Arg::new("full-bible")
                .short('f')
                .long("full-bible")
                .action(ArgAction::SetTrue)
                .help("Also concatenate all books into the combined text file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format for the run report"),
        )
}

/// Build run options from matches
fn build_options(matches: &ArgMatches) -> RunOptions {
    let dir = matches
        .get_one::<String>("corpus-dir")
        .map(String::as_str)
        .unwrap_or("KJV");
    let prefix = matches
        .get_one::<String>("prefix")
        .map(String::as_str)
        .unwrap_or("");
    let suffix = matches
        .get_one::<String>("suffix")
        .map(String::as_str)
        .unwrap_or(".txt");

    let mut layout = CorpusLayout::new(dir).prefix(prefix).suffix(suffix);
    if let Some(&books) = matches.get_one::<u32>("books") {
        layout = layout.books(books);
    }

    let mut options = RunOptions::new().layout(layout);
    if let Some(path) = matches.get_one::<String>("summary") {
        options = options.summary_path(path);
    }
    if let Some(path) = matches.get_one::<String>("combined") {
        options = options.combined_path(path);
    }
    if matches.get_flag("full-bible") {
        options = options.with_combined();
    }
    options
}

/// Print the human-readable run report
fn print_text(summary: &RunSummary, elapsed_ms: u128) {
    let value = Style::new().bold();
    println!("Word Count = {}", value.apply_to(summary.totals.words));
    println!(
        "Character Count = {}",
        value.apply_to(summary.totals.characters)
    );
    println!("took {elapsed_ms} ms");
}

/// Print the run report as JSON
fn print_json(summary: &RunSummary, elapsed_ms: u128) -> anyhow::Result<()> {
    let report = JsonReport {
        books: summary.books,
        chapters: summary.chapters,
        words: summary.totals.words,
        characters: summary.totals.characters,
        elapsed_ms,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn execute(matches: &ArgMatches) -> anyhow::Result<()> {
    let options = build_options(matches);

    let started = Instant::now();
    let summary = run(&options).with_context(|| {
        format!(
            "counting run over '{}' failed",
            options.layout.dir.display()
        )
    })?;
    let elapsed_ms = started.elapsed().as_millis();

    match matches.get_one::<String>("output").map(String::as_str) {
        Some("json") => print_json(&summary, elapsed_ms)?,
        _ => print_text(&summary, elapsed_ms),
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    match execute(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
