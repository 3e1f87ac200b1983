use crate::{BoardError, Card};

#[derive(Clone, Debug, PartialEq, Eq)]
/// The error type for making and unmaking moves on a [`Game`](crate::Game).
pub enum GameError {
    Board(BoardError),
    CardNotInHand { card: Card },
    /// A card that is being taken back is somehow still in the hand.
    CardAlreadyInHand { card: Card },
    /// The turn was handed to a player without cards.
    EmptyHandAtMoveTime { player_idx: usize },
    GameOver,
    NothingToUndo,
}

impl GameError {
    /// Whether the error stems from a bad choice of card or target, which an
    /// interactive player can simply be asked to correct.
    ///
    /// All other errors mean the game state has become inconsistent.
    pub fn is_bad_input(&self) -> bool {
        match self {
            GameError::Board(err) => err.is_invalid_target(),
            GameError::CardNotInHand { .. } => true,
            _ => false,
        }
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::Board(_) => write!(f, "The board rejected the move"),
            GameError::CardNotInHand { card } => {
                write!(f, "Tried to play {}, which is not in the player's hand", card)
            }
            GameError::CardAlreadyInHand { card } => {
                write!(f, "Tried to take back {}, but it is still in the player's hand", card)
            }
            GameError::EmptyHandAtMoveTime { player_idx } => {
                write!(f, "Player {} has to move but has no cards left", player_idx + 1)
            }
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::NothingToUndo => write!(f, "There is no move to take back"),
        }
    }
}
