use curling::{GameState, Ply};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::Bot;

/// Plays its most valuable card where it does the most good right away:
/// where its own suit gains the most points on the board compared to
/// everyone's suits together.
pub struct GreedyBot {
    rng: StdRng,
}

impl GreedyBot {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Bot for GreedyBot {
    fn propose(&mut self, state: &GameState<'_>) -> anyhow::Result<Ply> {
        let player = state.next_player();
        let card = player
            .highest_card()
            .ok_or_else(|| anyhow::anyhow!("{} has no cards left", player))?;

        let targets = state.board.targets();
        let first = targets
            .first()
            .ok_or_else(|| anyhow::anyhow!("The board offers no targets"))?;
        // The first target is kept as a fallback if every target does harm.
        let mut top_choices = vec![Ply {
            card,
            row: first.0,
            column: first.1,
        }];
        let mut top_value = 0;
        for &(row, column) in targets.iter() {
            let ply = Ply { card, row, column };
            let mut board = state.board.clone();
            board.update(&ply)?;

            let own = i64::from(board.score(player.suit)?);
            let mut total = 0;
            for other in state.players {
                total += i64::from(board.score(other.suit)?);
            }
            let value = 2 * own - total;

            if value > top_value {
                top_value = value;
                top_choices = vec![ply];
            } else if value == top_value && !top_choices.contains(&ply) {
                top_choices.push(ply);
            }
        }

        top_choices
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("The board offers no targets"))
    }
}

#[cfg(test)]
mod tests {
    use curling::{card, Board, Game, Outcome, Player, Suit};
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn goes_for_the_orthogonal_cell() {
        let game = Game::new(
            Board::with_empty(5, &[(1, 1), (2, 2), (2, 3), (5, 5)]),
            vec![Player::new("Ann", Suit::Diamond), Player::new("Bo", Suit::Club)],
        );
        for seed in 0..5 {
            let ply = GreedyBot::new(StdRng::seed_from_u64(seed))
                .propose(&game.state())
                .unwrap();
            assert_eq!(ply, Ply { card: card!("K♦"), row: 2, column: 3 });
        }
    }

    #[test]
    fn pushes_rival_cards_off_the_board() {
        let mut game = Game::new(
            Board::with_empty(3, &[(2, 1), (2, 3)]),
            vec![Player::new("Ann", Suit::Heart), Player::new("Bo", Suit::Club)],
        );
        game.make_move(Ply {
            card: card!("K♥"),
            row: 2,
            column: 1,
        })
        .unwrap();
        game.make_move(Ply {
            card: card!("K♣"),
            row: 2,
            column: 3,
        })
        .unwrap();
        assert!(!game.board().is_fill_phase());

        // Pushing the middle row from the left evicts Bo's K and moves Ann's
        // K past the anchor, where it keeps scoring.
        let ply = GreedyBot::new(StdRng::seed_from_u64(1))
            .propose(&game.state())
            .unwrap();
        assert_eq!(ply, Ply { card: card!("Q♥"), row: 2, column: 0 });
        let mut board = game.board().clone();
        assert_eq!(board.update(&ply), Ok(Outcome::Evicted(card!("K♣"))));
        assert_eq!(board.score(Suit::Heart), Ok(40));
        assert_eq!(board.score(Suit::Club), Ok(0));
    }
}
