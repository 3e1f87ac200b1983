use std::collections::BTreeSet;

use crate::{Board, Card, GameError, GameState, Outcome, Player, Ply, SavedGame};

/// Where a game stands, derived from the board and the hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The board still has empty cells.
    Setup,
    /// The board is full and cards are being pushed in from the rim.
    Playing,
    /// All hands are played and the final scores are settled.
    Final,
}

// Points credited to players when a move was made, so that unmake_move()
// can take back exactly these.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Credit {
    /// The player whose turn it became scored their current board position.
    Turn(u32),
    /// The game ended and every player scored their board position, by seat.
    Settlement(Vec<u32>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct PlayedPly {
    ply: Ply,
    outcome: Outcome,
    hand_position: usize,
    credit: Credit,
}

/// The authoritative state of one game.
///
/// Moves are applied with [`Self::make_move()`] and can be taken back in
/// reverse order with [`Self::unmake_move()`], which restores the previous
/// state exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
    discard: Vec<Card>,
    turn: usize,
    game_over: bool,
    history: Vec<PlayedPly>,
}

impl Game {
    /// Starts a game on the given board, with the first player to move.
    ///
    /// Panics if there are no players, two players share a suit, or the board
    /// is already finalized.
    pub fn new(board: Board, players: Vec<Player>) -> Self {
        assert!(!players.is_empty(), "a game needs players");
        let suits: BTreeSet<_> = players.iter().map(|p| p.suit).collect();
        assert_eq!(suits.len(), players.len(), "every player needs their own suit");
        assert!(!board.is_final());
        Self {
            board,
            players,
            discard: Vec::new(),
            turn: 0,
            game_over: false,
            history: Vec::new(),
        }
    }

    /// An independent copy of the game the state was taken from.
    ///
    /// The copy has no move history, so only moves made on it can be unmade.
    pub fn from_state(state: &GameState<'_>) -> Self {
        Self::from_saved(SavedGame::from(*state))
    }

    pub fn from_saved(saved: SavedGame) -> Self {
        let SavedGame {
            board,
            players,
            discard,
            turn,
            game_over,
        } = saved;
        Self {
            board,
            players,
            discard,
            turn,
            game_over,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> GameState<'_> {
        GameState {
            board: &self.board,
            players: &self.players,
            discard: &self.discard,
            turn: self.turn,
            game_over: self.game_over,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Index of the player to move.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::Final
        } else if self.board.is_fill_phase() {
            Phase::Setup
        } else {
            Phase::Playing
        }
    }

    pub fn is_discarded(&self, card: Card) -> bool {
        self.discard.contains(&card)
    }

    /// Number of moves that can currently be unmade.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Indices of the players sharing the highest score.
    pub fn leaders(&self) -> Vec<usize> {
        let best = self.players.iter().map(|p| p.score).max().unwrap_or(0);
        (0..self.players.len())
            .filter(|&idx| self.players[idx].score == best)
            .collect()
    }

    /// Plays a card for the player whose turn it is.
    ///
    /// After the move, the turn passes on and the next player scores what
    /// their suit currently holds around the anchor. If the next player has
    /// no cards left, the game is settled instead: every player scores their
    /// board position one last time and the board is finalized.
    ///
    /// If the move is rejected, nothing is changed.
    pub fn make_move(&mut self, ply: Ply) -> Result<Outcome, GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        let mover = self.turn;
        if self.players[mover].hand.is_empty() {
            return Err(GameError::EmptyHandAtMoveTime { player_idx: mover });
        }
        if !self.players[mover].holds(ply.card) {
            return Err(GameError::CardNotInHand { card: ply.card });
        }

        let outcome = self.board.update(&ply)?;
        let hand_position = self.players[mover].play(ply.card)?;
        if let Some(card) = outcome.evicted_card() {
            self.discard.push(card);
        }

        self.turn = (mover + 1) % self.players.len();
        let credit = if self.players[self.turn].hand.is_empty() {
            Credit::Settlement(self.settle()?)
        } else {
            let points = self.board.score(self.players[self.turn].suit)?;
            self.players[self.turn].score += points;
            Credit::Turn(points)
        };

        self.history.push(PlayedPly {
            ply,
            outcome,
            hand_position,
            credit,
        });
        Ok(outcome)
    }

    /// Takes back the most recent move made on this game.
    pub fn unmake_move(&mut self) -> Result<(), GameError> {
        let last = self.history.last().cloned().ok_or(GameError::NothingToUndo)?;
        let mover = (self.turn + self.players.len() - 1) % self.players.len();
        if self.players[mover].holds(last.ply.card) {
            return Err(GameError::CardAlreadyInHand {
                card: last.ply.card,
            });
        }

        self.board.revert(&last.ply, last.outcome)?;

        match &last.credit {
            Credit::Turn(points) => self.players[self.turn].score -= points,
            Credit::Settlement(points) => {
                for (player, points) in self.players.iter_mut().zip(points) {
                    player.score -= points;
                }
                self.board.unfinalize();
                self.game_over = false;
            }
        }
        if let Some(card) = last.outcome.evicted_card() {
            debug_assert_eq!(self.discard.last(), Some(&card));
            self.discard.pop();
        }
        self.turn = mover;
        self.players[mover].unplay(last.ply.card, last.hand_position)?;
        self.history.pop();
        Ok(())
    }

    /// Makes the move, runs `f` on the resulting game, and then unmakes the
    /// move again, whether `f` succeeded or not.
    pub fn with_move<T>(
        &mut self,
        ply: Ply,
        f: impl FnOnce(&mut Self) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        self.make_move(ply)?;
        let result = f(self);
        self.unmake_move()?;
        result
    }

    fn settle(&mut self) -> Result<Vec<u32>, GameError> {
        let mut settlement = Vec::with_capacity(self.players.len());
        for player in self.players.iter() {
            settlement.push(self.board.score(player.suit)?);
        }
        for (player, points) in self.players.iter_mut().zip(&settlement) {
            player.score += points;
        }
        self.board.finalize();
        self.game_over = true;
        Ok(settlement)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::MoveScript;
    use crate::{card, BoardError, Cell, Suit};

    fn three_players() -> Vec<Player> {
        vec![
            Player::new("Matt", Suit::Heart),
            Player::new("F. Rob", Suit::Diamond),
            Player::new("Rob H.", Suit::Club),
        ]
    }

    fn first_legal_ply(game: &Game) -> Ply {
        let card = game.current_player().hand[0];
        let (row, column) = game.board().targets()[0];
        Ply { card, row, column }
    }

    #[test]
    fn game_ends_after_every_card_is_played() {
        for board in [Board::standard(), Board::new(5), Board::prefilled(5)] {
            let mut game = Game::new(board, three_players());
            for moves in 0..39 {
                assert!(!game.is_over(), "ended after {} moves", moves);
                game.make_move(first_legal_ply(&game)).unwrap();
            }
            assert!(game.is_over());
            assert_eq!(game.phase(), Phase::Final);
            assert!(game.board().is_final());
            assert!(game.players().iter().all(|p| p.hand.is_empty()));
            assert_eq!(game.turn(), 0);
            assert_eq!(
                game.make_move(Ply {
                    card: card!("K♥"),
                    row: 0,
                    column: 1
                }),
                Err(GameError::GameOver)
            );
        }
    }

    #[test]
    fn score_accrues_when_the_turn_arrives() {
        let mut game = Game::new(Board::new(5), three_players());
        // Matt puts a heart next to the anchor, which only scores once Matt's turn comes round again
        game.make_move(Ply {
            card: card!("5♥"),
            row: 2,
            column: 2,
        })
        .unwrap();
        assert_eq!(game.players()[0].score, 0);
        game.make_move(Ply {
            card: card!("K♦"),
            row: 1,
            column: 1,
        })
        .unwrap();
        // F. Rob's king is far from the anchor
        assert_eq!(game.players()[1].score, 0);
        game.make_move(Ply {
            card: card!("K♣"),
            row: 3,
            column: 2,
        })
        .unwrap();
        assert_eq!(game.players()[0].score, 5);
        assert_eq!(game.players()[2].score, 0);
        game.make_move(first_legal_ply(&game)).unwrap();
        game.make_move(first_legal_ply(&game)).unwrap();
        // Rob H.'s king is orthogonally next to the anchor
        assert_eq!(game.players()[2].score, 20);
    }

    #[test]
    fn rejected_moves_change_nothing() {
        let mut game = Game::new(Board::standard(), three_players());
        let before = game.clone();
        let err = game
            .make_move(Ply {
                card: card!("K♥"),
                row: 3,
                column: 3,
            })
            .unwrap_err();
        assert!(matches!(err, GameError::Board(BoardError::NotAnEmptyCell { .. })));
        assert!(err.is_bad_input());
        let err = game
            .make_move(Ply {
                card: card!("K♦"),
                row: 1,
                column: 1,
            })
            .unwrap_err();
        assert_eq!(err, GameError::CardNotInHand { card: card!("K♦") });
        assert_eq!(game, before);
        assert_eq!(game.unmake_move(), Err(GameError::NothingToUndo));
    }

    #[test]
    fn scenario_diagonal_then_orthogonal() {
        let mut game = Game::new(Board::with_empty(5, &[(2, 2), (2, 5)]), three_players());
        game.make_move(Ply {
            card: card!("5♥"),
            row: 2,
            column: 2,
        })
        .unwrap();
        assert_eq!(game.board().score(Suit::Heart), Ok(5));
        game.make_move(Ply {
            card: card!("3♦"),
            row: 2,
            column: 5,
        })
        .unwrap();
        assert_eq!(game.phase(), Phase::Playing);
        let outcome = game
            .make_move(Ply {
                card: card!("7♣"),
                row: 2,
                column: 0,
            })
            .unwrap();
        assert_eq!(outcome, Outcome::Evicted(card!("3♦")));
        assert_eq!(game.discard(), &[card!("3♦")]);
        assert!(game.is_discarded(card!("3♦")));
        assert_eq!(game.board().get(2, 3), Some(Cell::Card(card!("5♥"))));
        assert_eq!(game.board().score(Suit::Heart), Ok(10));
        // Matt's turn again, so Matt is credited with the ten points
        assert_eq!(game.players()[0].score, 10);
    }

    #[test]
    fn unmake_reverts_settlement() {
        let mut game = Game::new(Board::prefilled(3), vec![Player::new("Solo", Suit::Spade)]);
        while game.current_player().hand.len() > 1 {
            game.make_move(first_legal_ply(&game)).unwrap();
        }
        let before = game.clone();
        game.make_move(first_legal_ply(&game)).unwrap();
        assert!(game.is_over());
        game.unmake_move().unwrap();
        assert_eq!(game, before);
        assert!(!game.board().is_final());
    }

    #[test]
    fn with_move_always_restores() {
        let mut game = Game::new(Board::standard(), three_players());
        let before = game.clone();
        let ply = first_legal_ply(&game);
        let moved: Result<(), GameError> = game.with_move(ply, |g| {
            assert_eq!(g.history_len(), 1);
            Err(GameError::NothingToUndo)
        });
        assert_eq!(moved, Err(GameError::NothingToUndo));
        assert_eq!(game, before);
        let turn = game.with_move(ply, |g| Ok(g.turn())).unwrap();
        assert_eq!(turn, 1);
        assert_eq!(game, before);
    }

    #[test]
    fn sandbox_copy_is_independent() {
        let mut game = Game::new(Board::standard(), three_players());
        game.make_move(first_legal_ply(&game)).unwrap();
        let mut sandbox = Game::from_state(&game.state());
        sandbox.make_move(first_legal_ply(&sandbox)).unwrap();
        assert_eq!(game.history_len(), 1);
        assert_ne!(sandbox.board(), game.board());
        sandbox.unmake_move().unwrap();
        assert_eq!(sandbox.board(), game.board());
        assert_eq!(sandbox.unmake_move(), Err(GameError::NothingToUndo));
    }

    quickcheck! {
        fn unmake_inverts_make_everywhere(script: MoveScript) -> bool {
            let mut game = script.new_game();
            let mut previous_empty = game.board().get_empty().len();
            for &pick in &script.picks {
                if game.is_over() {
                    break;
                }
                let ply = script.ply_for(&game, pick);
                let before = game.clone();
                let fill_phase = game.board().is_fill_phase();
                if game.make_move(ply).is_err() {
                    return false;
                }
                let empty = game.board().get_empty().len();
                // Emptiness only ever shrinks
                if empty > previous_empty || (!fill_phase && empty != 0) {
                    return false;
                }
                previous_empty = empty;
                // The anchor stays put and never ends up in a hand or the discard pile
                let (anchor_row, anchor_column) = game.board().anchor();
                if game.board().get(anchor_row, anchor_column) != Some(Cell::Anchor)
                    || !game.board().is_consistent()
                {
                    return false;
                }
                let mut undone = game.clone();
                if undone.unmake_move().is_err() || undone != before {
                    return false;
                }
            }
            true
        }
    }
}
