use crate::{Card, Outcome};

/// The error type for updating, reverting and scoring a [`Board`](crate::Board).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// During the fill phase, cards may only be placed on empty cells.
    NotAnEmptyCell {
        row: usize,
        column: usize,
        empty: Vec<(usize, usize)>,
    },
    /// During the shift phase, exactly one coordinate must be on the rim.
    NotOnRim { row: usize, column: usize },
    ScoreOnFinalizedBoard,
    /// A fill-phase revert was requested for a cell that does not hold the played card.
    NotAnInsertion { row: usize, column: usize },
    /// Reverting a shift would push off something other than the played card.
    RevertMismatch { expected: Card },
    /// Only outcomes of a forward update can be reverted.
    NotRevertible { outcome: Outcome },
}

impl BoardError {
    /// Whether this is a bad target coordinate, as opposed to a desynchronized board.
    pub fn is_invalid_target(&self) -> bool {
        matches!(
            self,
            BoardError::NotAnEmptyCell { .. } | BoardError::NotOnRim { .. }
        )
    }
}

impl std::error::Error for BoardError {}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::NotAnEmptyCell { row, column, empty } => {
                write!(f, "({}, {}) is not empty, choose from the empty cells", row, column)?;
                for (r, c) in empty {
                    write!(f, " ({}, {})", r, c)?;
                }
                Ok(())
            }
            BoardError::NotOnRim { row, column } => write!(
                f,
                "({}, {}) does not address a row or column from outside the board",
                row, column
            ),
            BoardError::ScoreOnFinalizedBoard => write!(f, "Tried to score a finalized board"),
            BoardError::NotAnInsertion { row, column } => write!(
                f,
                "Cannot revert ({}, {}), the card placed there is not on it",
                row, column
            ),
            BoardError::RevertMismatch { expected } => {
                write!(f, "Reverting the shift would not take back {}", expected)
            }
            BoardError::NotRevertible { outcome } => {
                write!(f, "{:?} is not the outcome of a forward update", outcome)
            }
        }
    }
}
