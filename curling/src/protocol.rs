use serde::{Deserialize, Serialize};

use crate::{Board, Card, Player};

/// Specifies which card to play, and where.
///
/// `row` and `column` are 1-based. During the fill phase they name an empty
/// cell. During the shift phase one of them is `0` or `size + 1`, i.e. just
/// outside the board: `(2, 0)` pushes the card into the second row from the
/// left, `(size + 1, 4)` into the fourth column from below.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ply {
    pub card: Card,
    pub row: usize,
    pub column: usize,
}

impl std::fmt::Display for Ply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}, {}", self.card, self.row, self.column)
    }
}

/// What a player gets to see before choosing a move.
///
/// This is a read-only view into a [`Game`](crate::Game); a fresh one is
/// handed out after every move.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct GameState<'a> {
    pub board: &'a Board,
    pub players: &'a [Player],
    /// Cards pushed off the board, oldest first.
    pub discard: &'a [Card],
    /// Index of the player to move.
    pub turn: usize,
    pub game_over: bool,
}

impl<'a> GameState<'a> {
    pub fn next_player(&self) -> &'a Player {
        &self.players[self.turn]
    }
}

/// An owned copy of a [`GameState`], e.g. for loading a saved game.
///
/// The serialized form is the same as that of a [`GameState`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub board: Board,
    pub players: Vec<Player>,
    pub discard: Vec<Card>,
    pub turn: usize,
    pub game_over: bool,
}

impl SavedGame {
    /// Whether this could have come out of a real game.
    pub fn is_consistent(&self) -> bool {
        self.board.is_consistent()
            && self.turn < self.players.len()
            && self.board.is_final() == self.game_over
    }
}

impl From<GameState<'_>> for SavedGame {
    fn from(state: GameState<'_>) -> Self {
        Self {
            board: state.board.clone(),
            players: state.players.to_vec(),
            discard: state.discard.to_vec(),
            turn: state.turn,
            game_over: state.game_over,
        }
    }
}
