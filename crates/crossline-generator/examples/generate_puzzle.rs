//! Example demonstrating crossword layout generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` with a custom attempt budget
//! - Generate a layout from a seed, or from many random seeds in parallel
//! - Display the layout, clue list, and seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Supply your own clues as `HINT=ANSWER` pairs:
//!
//! ```sh
//! cargo run --example generate_puzzle -- "Feline=cat" "Automobile=car" "Rodent=rat"
//! ```
//!
//! Reproduce a layout from a seed printed by an earlier run:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Sample many seeds and keep the most compact layout:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --samples 64
//! ```

use std::process;

use clap::Parser;
use crossline_core::{Bounds, Clue, Direction, Entry, Point};
use crossline_generator::{GeneratedPuzzle, GeneratorConfig, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

const DEFAULT_CLUES: [(&str, &str); 8] = [
    ("Capital of France", "PARIS"),
    ("Capital of Italy", "ROME"),
    ("Capital of Spain", "MADRID"),
    ("Capital of Germany", "BERLIN"),
    ("Capital of Norway", "OSLO"),
    ("Capital of Peru", "LIMA"),
    ("Capital of Austria", "VIENNA"),
    ("Capital of Latvia", "RIGA"),
];

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Clues as `HINT=ANSWER`. A built-in list is used when omitted.
    #[arg(value_name = "HINT=ANSWER")]
    clues: Vec<String>,

    /// Seed as 64 hex digits; any other text is hashed into a seed.
    #[arg(long, value_name = "SEED", conflicts_with = "samples")]
    seed: Option<String>,

    /// Attempts per generation.
    #[arg(long, value_name = "COUNT", default_value_t = GeneratorConfig::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Number of random seeds to try; the most compact layout is shown.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    samples: usize,
}

fn main() {
    let args = Args::parse();
    let clues = match parse_clues(&args.clues) {
        Ok(clues) => clues,
        Err(bad) => {
            eprintln!("Expected HINT=ANSWER, got {bad:?}");
            process::exit(2);
        }
    };
    let generator =
        PuzzleGenerator::with_config(GeneratorConfig::default().with_max_attempts(args.max_attempts));

    if let Some(seed) = &args.seed {
        let seed = seed
            .parse()
            .unwrap_or_else(|_| PuzzleSeed::from_phrase(seed));
        match generator.generate_with_seed(&clues, seed) {
            Ok(puzzle) => print_puzzle(&puzzle, None),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
        return;
    }

    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let best = (0..args.samples)
        .into_par_iter()
        .filter_map(|_| generator.generate(&clues).ok())
        .map(|puzzle| {
            let score = Bounds::of(&puzzle.entries).map_or(0, |bounds| bounds.area());
            (puzzle, score)
        })
        .min_by_key(|(_, score)| *score);

    if let Some((puzzle, score)) = best {
        print_puzzle(&puzzle, Some((args.samples, score)));
        return;
    }

    eprintln!("No sample produced a layout.");
    process::exit(1);
}

fn parse_clues(args: &[String]) -> Result<Vec<Clue>, String> {
    if args.is_empty() {
        return Ok(DEFAULT_CLUES
            .iter()
            .map(|&(hint, answer)| Clue::new(hint, answer))
            .collect());
    }
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .map(|(hint, answer)| Clue::new(hint.trim(), answer.trim()))
                .ok_or_else(|| arg.clone())
        })
        .collect()
}

fn print_puzzle(puzzle: &GeneratedPuzzle, selection: Option<(usize, i64)>) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    if let Some((samples, best_score)) = selection {
        println!("Selection:");
        println!("  Samples: {samples}");
        println!("  Best score: {best_score}");
        println!();
    }

    println!("Layout:");
    for line in render(&puzzle.entries) {
        println!("  {line}");
    }
    println!();

    for direction in Direction::ALL {
        println!("{direction}:");
        for entry in puzzle.entries.iter().filter(|e| e.direction() == direction) {
            println!("  {:>2}. {} ({})", entry.number(), entry.hint(), entry.answer());
        }
    }
}

fn render(entries: &[Entry]) -> Vec<String> {
    let Some(bounds) = Bounds::of(entries) else {
        return Vec::new();
    };
    (bounds.min.y..bounds.max.y)
        .map(|y| {
            (bounds.min.x..bounds.max.x)
                .map(|x| {
                    let point = Point::new(x, y);
                    entries
                        .iter()
                        .find_map(|entry| entry.letter_at(point))
                        .unwrap_or('.')
                })
                .collect()
        })
        .collect()
}
