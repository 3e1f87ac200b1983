pub use board::*;
pub use cards::*;
pub use errors::*;
pub use game::*;
pub use player::*;
pub use protocol::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod cards;
mod errors;
mod game;
mod player;
mod protocol;
mod visualization;
