//! Saved puzzle files.
//!
//! A file always carries the word list. Once a layout has been generated it
//! also carries the placed entries and the letters typed so far, with the
//! grid stored as a compact row-major string ('.' for empty cells).

use crossline_core::{
    Answer, AnswerError, Clue, Entry, LetterGrid, LetterGridError, ParseDirectionError, Point,
};
use crossline_game::{Game, GameError};
use serde::{Deserialize, Serialize};

const EMPTY_CELL: char = '.';

/// Contents of a puzzle file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SavedState {
    pub(crate) clues: Vec<ClueDto>,
    #[serde(flatten)]
    pub(crate) activity: ActivityDto,
}

/// What the host was doing when the file was saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "activity", rename_all = "snake_case")]
pub(crate) enum ActivityDto {
    /// The word list has not been laid out yet, or laying it out failed.
    Generating,
    /// A layout is being solved.
    Solving {
        entries: Vec<EntryDto>,
        grid: GridDto,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ClueDto {
    pub(crate) hint: String,
    pub(crate) answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct EntryDto {
    pub(crate) hint: String,
    pub(crate) answer: String,
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) direction: String,
    pub(crate) number: u32,
    pub(crate) solved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct GridDto {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) letters: String,
}

/// Input accepted by `crossline generate`: a bare word list or a saved file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum WordListDto {
    Clues(Vec<ClueDto>),
    State(SavedState),
}

/// Errors that can occur when converting a saved file back into a game.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum StateError {
    #[display("invalid answer: {_0}")]
    Answer(#[from] AnswerError),
    #[display("invalid entry: {_0}")]
    Direction(#[from] ParseDirectionError),
    #[display("invalid letter grid: {_0}")]
    Grid(#[from] LetterGridError),
    #[display("inconsistent game: {_0}")]
    Game(#[from] GameError),
}

impl SavedState {
    pub(crate) fn generating(clues: &[Clue]) -> Self {
        Self {
            clues: clues.iter().map(ClueDto::from).collect(),
            activity: ActivityDto::Generating,
        }
    }

    pub(crate) fn solving(clues: &[Clue], game: &Game) -> Self {
        Self {
            clues: clues.iter().map(ClueDto::from).collect(),
            activity: ActivityDto::Solving {
                entries: game.entries().iter().map(EntryDto::from).collect(),
                grid: GridDto::from(game.grid()),
            },
        }
    }

    pub(crate) fn clues(&self) -> Vec<Clue> {
        self.clues.iter().cloned().map(Clue::from).collect()
    }

    /// Rebuilds the game being solved; `None` while still generating.
    pub(crate) fn to_game(&self) -> Result<Option<Game>, StateError> {
        let ActivityDto::Solving { entries, grid } = &self.activity else {
            return Ok(None);
        };
        let entries = entries
            .iter()
            .map(Entry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let grid = LetterGrid::try_from(grid)?;
        Ok(Some(Game::restore(entries, grid)?))
    }
}

impl WordListDto {
    pub(crate) fn into_clues(self) -> Vec<Clue> {
        match self {
            Self::Clues(clues) => clues.into_iter().map(Clue::from).collect(),
            Self::State(state) => state.clues(),
        }
    }
}

impl From<&Clue> for ClueDto {
    fn from(clue: &Clue) -> Self {
        Self {
            hint: clue.hint.clone(),
            answer: clue.answer.clone(),
        }
    }
}

impl From<ClueDto> for Clue {
    fn from(dto: ClueDto) -> Self {
        Clue::new(dto.hint, dto.answer)
    }
}

impl From<&Entry> for EntryDto {
    fn from(entry: &Entry) -> Self {
        Self {
            hint: entry.hint().to_owned(),
            answer: entry.answer().to_string(),
            x: entry.position().x,
            y: entry.position().y,
            direction: entry.direction().to_string(),
            number: entry.number(),
            solved: entry.is_solved(),
        }
    }
}

impl TryFrom<&EntryDto> for Entry {
    type Error = StateError;

    fn try_from(dto: &EntryDto) -> Result<Self, Self::Error> {
        let answer = Answer::new(&dto.answer)?;
        let direction = dto.direction.parse()?;
        let mut entry = Entry::new(
            dto.hint.clone(),
            answer,
            Point::new(dto.x, dto.y),
            direction,
            dto.number,
        );
        if dto.solved {
            entry.mark_solved();
        }
        Ok(entry)
    }
}

impl From<&LetterGrid> for GridDto {
    fn from(grid: &LetterGrid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            letters: grid
                .to_letters()
                .into_iter()
                .map(|ch| ch.unwrap_or(EMPTY_CELL))
                .collect(),
        }
    }
}

impl TryFrom<&GridDto> for LetterGrid {
    type Error = LetterGridError;

    fn try_from(dto: &GridDto) -> Result<Self, Self::Error> {
        let letters = dto
            .letters
            .chars()
            .map(|ch| (ch != EMPTY_CELL).then_some(ch))
            .collect::<Vec<_>>();
        LetterGrid::from_letters(dto.rows, dto.cols, &letters)
    }
}

#[cfg(test)]
mod tests {
    use crossline_core::Direction;

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

    fn sample_clues() -> Vec<Clue> {
        vec![Clue::new("Programs", "code"), Clue::new("Dairy animal", "cow")]
    }

    #[test]
    fn test_solving_state_json_shape() {
        let mut game = sample_game();
        game.select_cell(Point::ORIGIN);
        game.input_letter('C');

        let state = SavedState::solving(&sample_clues(), &game);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["activity"], "solving");
        assert_eq!(json["clues"][1]["answer"], "cow");
        assert_eq!(json["entries"][1]["direction"], "down");
        assert_eq!(json["entries"][0]["answer"], "CODE");
        assert_eq!(json["grid"]["rows"], 3);
        assert_eq!(json["grid"]["cols"], 4);
        assert_eq!(json["grid"]["letters"], "C...........");
    }

    #[test]
    fn test_generating_state_has_no_layout() {
        let state = SavedState::generating(&sample_clues());
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains(r#""activity":"generating""#));
        assert!(!json.contains("entries"));

        let parsed: SavedState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
        assert!(parsed.to_game().unwrap().is_none());
    }

    #[test]
    fn test_restore_game_from_json() {
        let mut game = sample_game();
        game.select_cell(Point::ORIGIN);
        for ch in "CODE".chars() {
            game.input_letter(ch);
        }
        let json = serde_json::to_string(&SavedState::solving(&sample_clues(), &game)).unwrap();

        let parsed: SavedState = serde_json::from_str(&json).unwrap();
        let restored = parsed.to_game().unwrap().unwrap();
        assert_eq!(restored.entries(), game.entries());
        assert_eq!(restored.grid(), game.grid());
        assert!(restored.entries()[0].is_solved());
        assert_eq!(restored.cursor(), None);
    }

    #[test]
    fn test_word_list_accepts_both_shapes() {
        let bare = r#"[{"hint": "Feline", "answer": "cat"}]"#;
        let clues = serde_json::from_str::<WordListDto>(bare)
            .unwrap()
            .into_clues();
        assert_eq!(clues, [Clue::new("Feline", "cat")]);

        let saved = serde_json::to_string(&SavedState::generating(&sample_clues())).unwrap();
        let clues = serde_json::from_str::<WordListDto>(&saved)
            .unwrap()
            .into_clues();
        assert_eq!(clues, sample_clues());
    }

    #[test]
    fn test_rejects_corrupt_files() {
        let game = sample_game();
        let mut state = SavedState::solving(&sample_clues(), &game);
        if let ActivityDto::Solving { entries, .. } = &mut state.activity {
            entries[0].direction = "sideways".to_owned();
        }
        assert!(matches!(state.to_game(), Err(StateError::Direction(_))));

        let mut state = SavedState::solving(&sample_clues(), &game);
        if let ActivityDto::Solving { grid, .. } = &mut state.activity {
            grid.letters.pop();
        }
        assert!(matches!(state.to_game(), Err(StateError::Grid(_))));

        let mut state = SavedState::solving(&sample_clues(), &game);
        if let ActivityDto::Solving { entries, .. } = &mut state.activity {
            entries[1].solved = true;
        }
        assert!(matches!(
            state.to_game(),
            Err(StateError::Game(GameError::UnsolvedEntryMarkedSolved { .. }))
        ));
    }
}
