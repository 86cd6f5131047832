use crossline_core::AnswerError;

/// Reasons a puzzle could not be generated.
///
/// All variants are recoverable: the caller is expected to let the user edit
/// the word list and try again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// There are no clues to place.
    #[display("the clue list is empty")]
    EmptyClueList,
    /// A clue's answer cannot be placed on a grid.
    #[display("clue #{} ({answer:?}): {reason}", index + 1)]
    InvalidAnswer {
        /// Zero-based position of the clue in the input list.
        index: usize,
        /// The answer as supplied.
        answer: String,
        /// What is wrong with it.
        #[error(source)]
        reason: AnswerError,
    },
    /// Every attempt left at least one word unplaced.
    #[display("could not generate a puzzle from this word list ({attempts} attempts)")]
    Exhausted {
        /// Number of attempts made.
        attempts: usize,
    },
}
