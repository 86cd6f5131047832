//! Command-line host for Crossline.
//!
//! Lays out word lists into crosswords, saves them as JSON and lets a player
//! solve them one typed command at a time.

use std::{
    fs,
    io::{self, Write as _},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use crossline_core::Clue;
use crossline_game::Game;
use crossline_generator::{GenerateError, GeneratorConfig, PuzzleGenerator, PuzzleSeed};
use log::info;

use crate::{
    error::CliError,
    render::{Board, ClueList},
    state::{SavedState, WordListDto},
};

mod error;
mod play;
mod render;
mod state;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Lay out a word list as a crossword ready to solve.
    ///
    /// The input is a JSON array of `{"hint": ..., "answer": ...}` objects,
    /// or a puzzle file whose word list is laid out again.
    Generate {
        /// Word list or puzzle file.
        input: PathBuf,
        /// Seed as 64 hex digits; any other text is hashed into a seed.
        #[arg(long, value_name = "SEED")]
        seed: Option<String>,
        /// Shuffled layout attempts before giving up.
        #[arg(long, value_name = "COUNT", default_value_t = GeneratorConfig::DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,
        /// Where to save the puzzle; printed to stdout when omitted.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print the grid and clues of a puzzle file.
    Show {
        /// Puzzle file.
        state: PathBuf,
    },
    /// Solve a puzzle file interactively; progress is saved on exit.
    Play {
        /// Puzzle file.
        state: PathBuf,
    },
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Generate {
            input,
            seed,
            max_attempts,
            output,
        } => generate(&input, seed.as_deref(), max_attempts, output.as_deref()),
        Command::Show { state } => show(&state),
        Command::Play { state } => play_puzzle(&state),
    }
}

fn generate(
    input: &Path,
    seed: Option<&str>,
    max_attempts: usize,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let word_list: WordListDto = read_json(input)?;
    let clues = word_list.into_clues();
    let seed = seed.map_or_else(PuzzleSeed::random, |seed| {
        seed.parse()
            .unwrap_or_else(|_| PuzzleSeed::from_phrase(seed))
    });
    lay_out(&clues, seed, max_attempts, output)
}

/// Lays out `clues` and saves the result to `output`.
///
/// When every attempt fails the word list is still saved, marked as not yet
/// generated, and the generator error is returned.
fn lay_out(
    clues: &[Clue],
    seed: PuzzleSeed,
    max_attempts: usize,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let generator =
        PuzzleGenerator::with_config(GeneratorConfig::default().with_max_attempts(max_attempts));

    match generator.generate_with_seed(clues, seed) {
        Ok(puzzle) => {
            info!("generated {} entries from seed {}", puzzle.entries.len(), puzzle.seed);
            eprintln!("seed: {}", puzzle.seed);
            let game = Game::new(puzzle.entries);
            write_state(output, &SavedState::solving(clues, &game))
        }
        Err(e @ GenerateError::Exhausted { .. }) => {
            write_state(output, &SavedState::generating(clues))?;
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn show(path: &Path) -> Result<(), CliError> {
    let game = load_game(path)?;
    println!("{}", Board(&game));
    print!("{}", ClueList(game.entries()));
    Ok(())
}

fn play_puzzle(path: &Path) -> Result<(), CliError> {
    let state: SavedState = read_json(path)?;
    let clues = state.clues();
    let mut game = restore(path, &state)?;

    let stdin = io::stdin();
    play::run(&mut game, stdin.lock(), io::stdout().lock())?;

    write_state(Some(path), &SavedState::solving(&clues, &game))?;
    if game.is_solved() {
        println!("Solved. Saved to {}.", path.display());
    } else {
        println!("Progress saved to {}.", path.display());
    }
    Ok(())
}

fn load_game(path: &Path) -> Result<Game, CliError> {
    let state: SavedState = read_json(path)?;
    restore(path, &state)
}

fn restore(path: &Path, state: &SavedState) -> Result<Game, CliError> {
    state
        .to_game()
        .map_err(|source| CliError::State {
            path: path.to_owned(),
            source,
        })?
        .ok_or_else(|| CliError::NotGenerated {
            path: path.to_owned(),
        })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Parse {
        path: path.to_owned(),
        source,
    })
}

fn write_state(path: Option<&Path>, state: &SavedState) -> Result<(), CliError> {
    let mut json = serde_json::to_string_pretty(state)?;
    json.push('\n');
    let Some(path) = path else {
        io::stdout().lock().write_all(json.as_bytes())?;
        return Ok(());
    };
    fs::write(path, json).map_err(|source| CliError::Write {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("crossline-{}-{name}.json", std::process::id()))
    }

    fn read_value(path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let args = Args::try_parse_from([
            "crossline",
            "generate",
            "words.json",
            "--seed",
            "capitals",
            "--max-attempts",
            "20",
            "-o",
            "puzzle.json",
        ])
        .unwrap();
        let Command::Generate {
            input,
            seed,
            max_attempts,
            output,
        } = args.command
        else {
            panic!("expected generate");
        };
        assert_eq!(input, Path::new("words.json"));
        assert_eq!(seed.as_deref(), Some("capitals"));
        assert_eq!(max_attempts, 20);
        assert_eq!(output.as_deref(), Some(Path::new("puzzle.json")));
    }

    #[test]
    fn test_max_attempts_defaults() {
        let args = Args::try_parse_from(["crossline", "generate", "words.json"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Generate {
                max_attempts: GeneratorConfig::DEFAULT_MAX_ATTEMPTS,
                output: None,
                ..
            }
        ));
    }

    #[test]
    fn test_exhausted_generation_saves_word_list() {
        let path = temp_path("exhausted");
        let clues = [Clue::new("Letters", "abc"), Clue::new("More letters", "xyz")];
        let result = lay_out(&clues, PuzzleSeed::from_phrase("exhausted"), 10, Some(&path));
        let json = read_value(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(CliError::Generate(GenerateError::Exhausted { attempts: 10 }))
        ));
        assert_eq!(json["activity"], "generating");
        assert_eq!(json["clues"][0]["hint"], "Letters");
        assert_eq!(json["clues"][0]["answer"], "abc");
        assert_eq!(json["clues"][1]["answer"], "xyz");
        assert!(json.get("entries").is_none());

        let state: SavedState = serde_json::from_value(json).unwrap();
        assert_eq!(state.clues(), clues);
        assert!(matches!(
            restore(&path, &state),
            Err(CliError::NotGenerated { .. })
        ));
    }

    #[test]
    fn test_zero_attempts_saves_word_list() {
        let path = temp_path("zero-attempts");
        let clues = [Clue::new("Feline", "cat"), Clue::new("Vehicle", "car")];
        let result = lay_out(&clues, PuzzleSeed::from_phrase("zero"), 0, Some(&path));
        let json = read_value(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(CliError::Generate(GenerateError::Exhausted { attempts: 0 }))
        ));
        assert_eq!(json["activity"], "generating");
        assert_eq!(json["clues"][1]["hint"], "Vehicle");
    }

    #[test]
    fn test_generated_puzzle_can_be_loaded() {
        let path = temp_path("generated");
        let clues = [Clue::new("Feline", "cat"), Clue::new("Vehicle", "car")];
        lay_out(&clues, PuzzleSeed::from_phrase("generated"), 5, Some(&path)).unwrap();
        let json = read_value(&path);
        let game = load_game(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(json["activity"], "solving");
        let game = game.unwrap();
        assert_eq!(game.entries().len(), 2);
        assert!(game.grid().is_empty());
    }
}
