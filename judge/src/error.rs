use curling::{GameError, Ply};

#[derive(Debug)]
/// A move the game refused from a seat that can't be asked again.
pub struct IllegalMove {
    pub player_idx: usize,
    pub ply: Ply,
    pub err: GameError,
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.err)
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player {} tried to play {}, which is not allowed",
            self.player_idx + 1,
            self.ply
        )
    }
}

/// Joins an error and all its sources into one line.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut msg = err.to_string();
    let mut err_dyn = err;
    while let Some(src_err) = err_dyn.source() {
        msg += ": ";
        msg += &src_err.to_string();
        err_dyn = src_err;
    }
    msg
}
