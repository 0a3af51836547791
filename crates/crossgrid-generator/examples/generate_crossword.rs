//! Example demonstrating crossword generation.
//!
//! This example shows how to:
//! - Build clue/answer entries from raw author input
//! - Generate a crossword with a `CrosswordGenerator`
//! - Display the grid, the placed words, the dropped words and the seed
//! - Emit the JSON wire format consumed by renderers and persistence
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_crossword -- \
//!     --entry "Opposite of hot=COLD" --entry "Feline pet=CAT"
//! ```
//!
//! Read entries from a JSON file (an array of `{"clue": ..., "answer": ...}`):
//!
//! ```sh
//! cargo run --example generate_crossword -- --input clues.json --size 20
//! ```
//!
//! Reproduce a previous run and print JSON:
//!
//! ```sh
//! cargo run --example generate_crossword -- --input clues.json \
//!     --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef --json
//! ```
//!
//! Set `RUST_LOG=debug` to see each placement decision.

use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use crossgrid_core::{ClueAnswer, ClueId, Crossword, MIN_ANSWER_LEN};
use crossgrid_generator::{CrosswordGenerator, GridSeed};
use serde::Deserialize;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid size (rows and columns).
    #[arg(long, value_name = "SIZE", default_value_t = 15)]
    size: usize,

    /// Seed to reproduce (64 hex digits).
    #[arg(long, value_name = "HEX")]
    seed: Option<GridSeed>,

    /// Clue and answer separated by `=`. Repeatable.
    #[arg(short, long = "entry", value_name = "CLUE=ANSWER")]
    entries: Vec<String>,

    /// JSON file containing an array of `{"clue", "answer"}` objects.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print the crossword as JSON instead of a text grid.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    clue: String,
    answer: String,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum ReadEntriesError {
    #[display("cannot read file: {_0}")]
    Io(io::Error),
    #[display("invalid clue list: {_0}")]
    Json(serde_json::Error),
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.size < MIN_ANSWER_LEN + 2 {
        eprintln!("--size must be at least {}.", MIN_ANSWER_LEN + 2);
        process::exit(2);
    }

    let mut raw = args
        .entries
        .iter()
        .map(|entry| parse_entry(entry))
        .collect::<Vec<_>>();
    if let Some(path) = &args.input {
        match read_entries(path) {
            Ok(entries) => raw.extend(entries),
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                process::exit(1);
            }
        }
    }

    let clues = build_clues(raw);
    if clues.is_empty() {
        eprintln!("No valid clue/answer pairs given.");
        process::exit(2);
    }

    let generator = CrosswordGenerator::new();
    let generated = match args.seed {
        Some(seed) => generator.generate_with_seed(&clues, args.size, seed),
        None => generator.generate(&clues, args.size),
    };

    if args.json {
        match serde_json::to_string_pretty(&generated.crossword) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize crossword: {e}");
                process::exit(1);
            }
        }
        return;
    }

    print_crossword(&generated.crossword, &clues, generated.seed);
}

fn parse_entry(entry: &str) -> RawEntry {
    let (clue, answer) = entry.rsplit_once('=').unwrap_or((entry, ""));
    RawEntry {
        clue: clue.to_owned(),
        answer: answer.to_owned(),
    }
}

fn read_entries(path: &Path) -> Result<Vec<RawEntry>, ReadEntriesError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn build_clues(raw: Vec<RawEntry>) -> Vec<ClueAnswer> {
    (1..)
        .zip(raw)
        .filter_map(
            |(id, entry)| match ClueAnswer::from_raw(ClueId(id), entry.clue, &entry.answer) {
                Ok(clue) => Some(clue),
                Err(e) => {
                    eprintln!("Skipping entry {id} ({:?}): {e}", entry.answer);
                    None
                }
            },
        )
        .collect()
}

fn print_crossword(crossword: &Crossword, clues: &[ClueAnswer], seed: GridSeed) {
    println!("Seed:");
    println!("  {seed}");
    println!();

    println!("Grid:");
    for line in crossword.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Words:");
    for word in &crossword.words {
        println!(
            "  {:>2}. {} ({} at {}, {}): {}",
            word.number, word.answer, word.direction, word.row, word.col, word.clue
        );
    }

    let unplaced = crossword.unplaced(clues);
    if !unplaced.is_empty() {
        println!();
        println!("Not placed:");
        for clue in unplaced {
            println!("  {}: {}", clue.answer, clue.clue);
        }
    }
}
