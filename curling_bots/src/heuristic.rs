use curling::{Game, GameError};

/// How much each part of a position counts for [`evaluate()`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    /// For what the player's suit holds on the board, see [`evaluate()`].
    pub board_potential: f64,
    /// For the value of the cards still in hand.
    pub hand_potential: f64,
    /// Per point of an own card in a row or column next to the anchor.
    pub near_anchor: f64,
    /// Per point of an own card anywhere else on the board.
    pub elsewhere: f64,
    /// Reward for winning (or sharing the win of) a finished game, and
    /// penalty for losing it.
    pub terminal: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            board_potential: 0.2,
            hand_potential: 0.5,
            near_anchor: 0.5,
            elsewhere: 0.2,
            terminal: 10000.0,
        }
    }
}

/// Estimates how good the position is for each player, by seat.
///
/// A finished game is worth `terminal` to everyone sharing the highest score
/// and `-terminal` to everybody else. Otherwise a player's value is their
/// lead over the best other player, plus the weighted board and hand
/// potential. The board potential is what their suit currently scores around
/// the anchor, multiplied by how often they can still cash it in before it
/// changes (more the sooner their turn comes), plus a little for every
/// other card of theirs on the board.
pub fn evaluate(game: &Game, weights: &Weights) -> Result<Vec<f64>, GameError> {
    let players = game.players();
    let n = players.len();

    if game.is_over() {
        let leaders = game.leaders();
        return Ok((0..n)
            .map(|idx| {
                if leaders.contains(&idx) {
                    weights.terminal
                } else {
                    -weights.terminal
                }
            })
            .collect());
    }

    let board = game.board();
    let (anchor_row, anchor_column) = board.anchor();
    let mut values = Vec::with_capacity(n);
    for (idx, player) in players.iter().enumerate() {
        let best_other = players
            .iter()
            .enumerate()
            .filter(|&(other, _)| other != idx)
            .map(|(_, p)| p.score)
            .max()
            .unwrap_or(0);
        let point_diff = f64::from(player.score) - f64::from(best_other);

        let wait = (idx + n - game.turn()) % n;
        let mut board_potential = f64::from(board.score(player.suit)?) * (n + 1 - wait) as f64;
        for ((row, column), card) in board.cards() {
            if card.suit != player.suit {
                continue;
            }
            let weight = if row.abs_diff(anchor_row) <= 1 || column.abs_diff(anchor_column) <= 1 {
                weights.near_anchor
            } else {
                weights.elsewhere
            };
            board_potential += weight * f64::from(card.value());
        }

        let hand_potential = f64::from(player.hand_value());
        values.push(
            point_diff
                + weights.board_potential * board_potential
                + weights.hand_potential * hand_potential,
        );
    }
    Ok(values)
}
