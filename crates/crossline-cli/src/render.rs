//! Plain-text views of a game.

use std::fmt::{self, Display, Write as _};

use crossline_core::{Direction, Entry, Point};
use crossline_game::Game;

const BLOCKED_CELL: char = '#';
const EMPTY_CELL: char = '_';

/// The letter grid with column/row rulers; the cursor cell is bracketed.
///
/// ```text
///    0 1 2 3
///  0[C]O D E
///  1 O # # #
///  2 _ # # #
/// ```
pub(crate) struct Board<'a>(pub(crate) &'a Game);

impl Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        let grid = game.grid();
        let cursor = game.cursor().map(|c| c.position);

        write!(f, "   ")?;
        for col in 0..grid.cols() {
            write!(f, "{}", col % 10)?;
            if col + 1 < grid.cols() {
                f.write_char(' ')?;
            }
        }
        writeln!(f)?;

        for row in 0..grid.rows() {
            let mut cells = vec![' '; grid.cols() * 2 + 1];
            for col in 0..grid.cols() {
                let point = cell_point(row, col);
                cells[col * 2 + 1] = cell_char(game, point);
                if cursor == Some(point) {
                    cells[col * 2] = '[';
                    cells[col * 2 + 2] = ']';
                }
            }
            let cells = cells.into_iter().collect::<String>();
            writeln!(f, "{row:>2}{}", cells.trim_end())?;
        }
        Ok(())
    }
}

/// Across and Down clue lists, with solved entries marked.
pub(crate) struct ClueList<'a>(pub(crate) &'a [Entry]);

impl Display for ClueList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, direction) in Direction::ALL.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", capitalize(&direction.to_string()))?;
            for entry in self.0.iter().filter(|e| e.direction() == direction) {
                write!(
                    f,
                    "  {:>2}. {} ({})",
                    entry.number(),
                    entry.hint(),
                    entry.len()
                )?;
                if entry.is_solved() {
                    write!(f, " - solved")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// One line describing where the cursor is.
pub(crate) struct CursorLine<'a>(pub(crate) &'a Game);

impl Display for CursorLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        match (game.cursor(), game.current_entry()) {
            (Some(cursor), Some((_, entry))) => write!(
                f,
                "Cursor at {}, typing {} {}",
                cursor.position,
                entry.number(),
                entry.direction()
            ),
            _ => write!(f, "No cell selected"),
        }
    }
}

fn cell_point(row: usize, col: usize) -> Point {
    // Grid dimensions come from a layout with `i32` coordinates.
    let x = i32::try_from(col).unwrap_or(i32::MAX);
    let y = i32::try_from(row).unwrap_or(i32::MAX);
    Point::new(x, y)
}

fn cell_char(game: &Game, point: Point) -> char {
    if !game.is_covered(point) {
        return BLOCKED_CELL;
    }
    game.letter_at(point).unwrap_or(EMPTY_CELL)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use crossline_core::Answer;

    use super::*;

    fn sample_game() -> Game {
        Game::new(vec![
            Entry::new(
                "Programs",
                Answer::new("code").unwrap(),
                Point::ORIGIN,
                Direction::Across,
                1,
            ),
            Entry::new(
                "Dairy animal",
                Answer::new("cow").unwrap(),
                Point::ORIGIN,
                Direction::Down,
                1,
            ),
        ])
    }

    #[test]
    fn test_board_marks_blocked_and_empty_cells() {
        let game = sample_game();
        assert_eq!(
            Board(&game).to_string(),
            "   0 1 2 3\n 0 _ _ _ _\n 1 _ # # #\n 2 _ # # #\n"
        );
    }

    #[test]
    fn test_board_brackets_cursor() {
        let mut game = sample_game();
        game.select_cell(Point::ORIGIN);
        game.input_letter('c');
        game.input_letter('o');
        assert_eq!(
            Board(&game).to_string(),
            "   0 1 2 3\n 0 C O[_]_\n 1 _ # # #\n 2 _ # # #\n"
        );
    }

    #[test]
    fn test_clue_list() {
        let mut game = sample_game();
        game.select_cell(Point::ORIGIN);
        for ch in "CODE".chars() {
            game.input_letter(ch);
        }
        assert_eq!(
            ClueList(game.entries()).to_string(),
            "Across\n   1. Programs (4) - solved\n\nDown\n   1. Dairy animal (3)\n"
        );
    }

    #[test]
    fn test_cursor_line() {
        let mut game = sample_game();
        assert_eq!(CursorLine(&game).to_string(), "No cell selected");
        game.select_cell(Point::new(0, 2));
        assert_eq!(
            CursorLine(&game).to_string(),
            "Cursor at (0, 2), typing 1 down"
        );
    }
}
