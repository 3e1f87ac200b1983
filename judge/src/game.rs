use anyhow::Context;
use curling::Game;
use curling_bots::Bot;
use tracing::{debug, info, warn};

use crate::error::{error_chain, IllegalMove};
use crate::Config;

/// The final scores of a game, by seat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub scores: Vec<u32>,
    /// The seats sharing the highest score.
    pub winners: Vec<usize>,
}

/// Plays `game` to the end, asking `bots[i]` for the moves of seat `i`.
///
/// A rejected move from an interactive bot is reported back and asked for
/// again. From any other bot it ends the run with an [`IllegalMove`] error,
/// as does any error from a bot itself.
pub fn play_game(
    game: &mut Game,
    bots: &mut [Box<dyn Bot>],
    config: &mut Config,
) -> anyhow::Result<GameResult> {
    if bots.len() != game.players().len() {
        anyhow::bail!(
            "The game has {} players, but {} bots were given",
            game.players().len(),
            bots.len()
        );
    }

    if let Some(save_file) = &config.save_file {
        save_file.store(&game.state())?;
    }

    while !game.is_over() {
        let player_idx = game.turn();
        if config.verbose {
            println!("{}\n", game.state());
        }

        let bot = &mut bots[player_idx];
        loop {
            let ply = bot
                .propose(&game.state())
                .with_context(|| format!("{} could not come up with a move", game.current_player()))?;
            match game.make_move(ply) {
                Ok(outcome) => {
                    debug!(player = %game.players()[player_idx], %ply, ?outcome);
                    if config.verbose {
                        println!("{}", ply);
                    }
                    break;
                }
                Err(err) if bot.is_interactive() && err.is_bad_input() => {
                    warn!(%ply, "Rejected move: {}", error_chain(&err));
                    println!("{}", error_chain(&err));
                }
                Err(err) => {
                    return Err(IllegalMove {
                        player_idx,
                        ply,
                        err,
                    }
                    .into())
                }
            }
        }

        if let Some(save_file) = &config.save_file {
            save_file.store(&game.state())?;
        }
    }

    if config.verbose {
        println!("{}", game.state());
    }

    let result = GameResult {
        scores: game.players().iter().map(|p| p.score).collect(),
        winners: game.leaders(),
    };
    info!(scores = ?result.scores, winners = ?result.winners, "Game over");
    Ok(result)
}
