use crossline_core::Direction;

/// Errors raised when restoring a saved game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The saved letter grid does not fit the saved entries.
    #[display(
        "letter grid is {rows}x{cols} but the entries need {expected_rows}x{expected_cols}"
    )]
    GridSizeMismatch {
        /// Rows required by the entries.
        expected_rows: usize,
        /// Columns required by the entries.
        expected_cols: usize,
        /// Rows of the saved grid.
        rows: usize,
        /// Columns of the saved grid.
        cols: usize,
    },
    /// An entry is flagged as solved but the grid does not spell it out.
    #[display("{number} {direction} is marked solved but its letters do not match")]
    UnsolvedEntryMarkedSolved {
        /// Clue number of the entry.
        number: u32,
        /// Direction of the entry.
        direction: Direction,
    },
}
