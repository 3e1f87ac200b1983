use curling::{Game, GameError, GameState, Ply};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

use crate::{evaluate, Bot, Weights};

/// Looks ahead a fixed number of moves, assuming every player picks what is
/// best for themselves according to the [heuristic](evaluate).
pub struct TreeSearchBot {
    depth: usize,
    rng: StdRng,
    weights: Weights,
}

impl TreeSearchBot {
    /// With `depth` 0, only the bot's own move is tried out.
    pub fn new(depth: usize, rng: StdRng) -> Self {
        Self {
            depth,
            rng,
            weights: Weights::default(),
        }
    }

    pub fn with_weights(depth: usize, rng: StdRng, weights: Weights) -> Self {
        Self {
            depth,
            rng,
            weights,
        }
    }
}

impl Bot for TreeSearchBot {
    fn propose(&mut self, state: &GameState<'_>) -> anyhow::Result<Ply> {
        // The search makes and unmakes moves, so it gets its own copy.
        let mut game = Game::from_state(state);
        let (values, ply) = search(&mut game, self.depth, &self.weights, &mut self.rng)?;
        debug!(
            player = %state.next_player(),
            %ply,
            value = values[state.turn],
            "Search finished"
        );
        Ok(ply)
    }
}

/// The moves worth looking at for the player to move: their most and least
/// valuable card, on every target the board currently allows.
pub fn candidate_plies(game: &Game) -> Vec<Ply> {
    let player = game.current_player();
    let mut cards = Vec::with_capacity(2);
    cards.extend(player.highest_card());
    if let Some(lowest) = player.lowest_card() {
        if !cards.contains(&lowest) {
            cards.push(lowest);
        }
    }
    let targets = game.board().targets();
    cards
        .into_iter()
        .flat_map(|card| {
            targets
                .iter()
                .map(move |&(row, column)| Ply { card, row, column })
        })
        .collect()
}

/// Finds the best move for the player to move and the values it leads to.
///
/// Every candidate is played on `game` and taken back afterwards. Below it,
/// the search continues for `depth` more moves, each one chosen by whoever
/// is to move there, and the position at the bottom is scored with
/// [`evaluate()`]. Among equally good moves one is picked at random.
///
/// On success `game` is left as it was. An error means an inconsistent game
/// and `game` should not be used any further.
pub fn search<R: Rng>(
    game: &mut Game,
    depth: usize,
    weights: &Weights,
    rng: &mut R,
) -> Result<(Vec<f64>, Ply), GameError> {
    if game.is_over() {
        return Err(GameError::GameOver);
    }
    let mover = game.turn();
    let candidates = candidate_plies(game);
    if candidates.is_empty() {
        return Err(GameError::EmptyHandAtMoveTime { player_idx: mover });
    }

    let mut best: Option<(Vec<f64>, Ply)> = None;
    let mut num_ties = 0;
    for ply in candidates {
        let values = game.with_move(ply, |game| {
            if game.is_over() || depth == 0 {
                evaluate(game, weights)
            } else {
                search(game, depth - 1, weights, &mut *rng).map(|(values, _)| values)
            }
        })?;
        trace!(depth, mover, %ply, value = values[mover]);

        let replace = match &best {
            Some((best_values, _)) if values[mover] < best_values[mover] => false,
            Some((best_values, _)) if values[mover] == best_values[mover] => {
                // Keeps each of the tied moves with equal probability
                num_ties += 1;
                rng.gen_range(0..num_ties) == 0
            }
            _ => {
                num_ties = 1;
                true
            }
        };
        if replace {
            best = Some((values, ply));
        }
    }
    best.ok_or(GameError::EmptyHandAtMoveTime { player_idx: mover })
}
