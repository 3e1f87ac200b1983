mod greedy;
mod heuristic;
mod human;
mod random;
mod search;
pub use greedy::*;
pub use heuristic::*;
pub use human::*;
pub use random::*;
pub use search::*;

use curling::{GameState, Ply};

/// A trait to simplify writing bots.
///
/// A bot is asked for a move whenever it is its seat's turn. It gets a
/// read-only view of the game and must not assume anything about the
/// previous calls; the same bot may be reused across games.
pub trait Bot {
    fn propose(&mut self, state: &GameState<'_>) -> anyhow::Result<Ply>;

    /// Whether a rejected move should be answered with another chance
    /// instead of ending the game. Only true for bots driven by a person.
    fn is_interactive(&self) -> bool {
        false
    }
}
