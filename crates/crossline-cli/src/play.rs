//! The interactive `play` loop.
//!
//! Reads one command per line and applies it to a [`Game`]. Unknown or
//! malformed commands are reported and skipped.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use crossline_core::Point;
use crossline_game::{ArrowKey, Game, InputOutcome};

use crate::render::{Board, ClueList, CursorLine};

const HELP: &str = "\
commands:
  select X Y             move the cursor to a cell (again to switch direction)
  up|down|left|right     move the cursor one cell
  toggle                 switch between across and down
  type LETTERS           type letters at the cursor
  erase                  clear the cursor cell and step back
  show                   print the grid and clues
  help                   print this message
  quit                   save and exit";

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlayCommand {
    Select(Point),
    Move(ArrowKey),
    Toggle,
    Type(String),
    Erase,
    Show,
    Help,
    Quit,
}

/// Errors that can occur when parsing a [`PlayCommand`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum ParseCommandError {
    #[display("unknown command {command:?} (try \"help\")")]
    Unknown { command: String },
    #[display("usage: {usage}")]
    Usage { usage: &'static str },
    #[display("invalid coordinate {value:?}")]
    InvalidCoordinate { value: String },
}

impl FromStr for PlayCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(command) = words.next() else {
            return Err(ParseCommandError::Usage { usage: "help" });
        };
        let rest = words.collect::<Vec<_>>();
        let command = command.to_ascii_lowercase();
        let parsed = match (command.as_str(), rest.as_slice()) {
            ("select", [x, y]) => Self::Select(Point::new(coordinate(x)?, coordinate(y)?)),
            ("select", _) => return Err(ParseCommandError::Usage { usage: "select X Y" }),
            ("up", []) => Self::Move(ArrowKey::Up),
            ("down", []) => Self::Move(ArrowKey::Down),
            ("left", []) => Self::Move(ArrowKey::Left),
            ("right", []) => Self::Move(ArrowKey::Right),
            ("toggle", []) => Self::Toggle,
            ("type", [_, ..]) => Self::Type(rest.concat()),
            ("type", []) => return Err(ParseCommandError::Usage { usage: "type LETTERS" }),
            ("erase", []) => Self::Erase,
            ("show", []) => Self::Show,
            ("help", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            _ => return Err(ParseCommandError::Unknown { command }),
        };
        Ok(parsed)
    }
}

fn coordinate(value: &str) -> Result<i32, ParseCommandError> {
    value
        .parse()
        .map_err(|_| ParseCommandError::InvalidCoordinate {
            value: value.to_owned(),
        })
}

/// Runs commands from `input` until `quit` or end of input.
pub(crate) fn run<R, W>(game: &mut Game, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", Board(game))?;
    writeln!(output, "{}", ClueList(game.entries()))?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            return Ok(());
        };
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<PlayCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };
        if command == PlayCommand::Quit {
            return Ok(());
        }
        apply(game, command, &mut output)?;
    }
}

fn apply<W: Write>(game: &mut Game, command: PlayCommand, output: &mut W) -> io::Result<()> {
    match command {
        PlayCommand::Select(point) => {
            if !game.select_cell(point) {
                writeln!(output, "no entry covers {point}")?;
                return Ok(());
            }
        }
        PlayCommand::Move(key) => {
            if !game.move_cursor(key) {
                writeln!(output, "cannot move there")?;
                return Ok(());
            }
        }
        PlayCommand::Toggle => {
            if !game.toggle_direction() {
                writeln!(output, "no crossing entry here")?;
                return Ok(());
            }
        }
        PlayCommand::Type(letters) => {
            for letter in letters.chars() {
                let outcome = game.input_letter(letter);
                report(game, letter, &outcome, output)?;
            }
        }
        PlayCommand::Erase => {
            if game.erase_letter().is_ignored() {
                writeln!(output, "nothing to erase")?;
            }
        }
        PlayCommand::Show => {
            writeln!(output, "{}", Board(game))?;
            writeln!(output, "{}", ClueList(game.entries()))?;
        }
        PlayCommand::Help => writeln!(output, "{HELP}")?,
        PlayCommand::Quit => return Ok(()),
    }
    writeln!(output, "{}", CursorLine(game))
}

fn report<W: Write>(
    game: &Game,
    letter: char,
    outcome: &InputOutcome,
    output: &mut W,
) -> io::Result<()> {
    match outcome {
        InputOutcome::Ignored => writeln!(output, "{letter:?} not accepted"),
        InputOutcome::Applied {
            newly_solved,
            completed,
        } => {
            for &i in newly_solved {
                let entry = &game.entries()[i];
                writeln!(output, "Solved {} {}!", entry.number(), entry.direction())?;
            }
            if *completed {
                writeln!(output, "Puzzle complete!")?;
            }
            Ok(())
        }
    }
}
