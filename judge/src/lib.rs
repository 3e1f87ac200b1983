mod error;
mod game;
mod savefile;
mod seat;
mod stats;
pub use error::*;
pub use game::*;
pub use savefile::*;
pub use seat::*;
pub use stats::*;

pub struct Config {
    pub rng: rand::rngs::StdRng,
    /// Print the board and whose turn it is before every move.
    pub verbose: bool,
    /// Where to store the game after every move, if anywhere.
    pub save_file: Option<SaveFile>,
}
