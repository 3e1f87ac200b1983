use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use curling::{Game, GameState, SavedGame};

/// A JSON file holding the latest state of a game.
///
/// The file is rewritten after every move, so a game can be picked up again
/// where it was left off. Only the state is stored, not the moves leading
/// up to it.
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn store(&self, state: &GameState<'_>) -> anyhow::Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Could not create '{}'", self.path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, state)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load(&self) -> anyhow::Result<Game> {
        let file = File::open(&self.path)
            .with_context(|| format!("Could not open '{}'", self.path.display()))?;
        let saved: SavedGame = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("'{}' is not a saved game", self.path.display()))?;
        if !saved.is_consistent() {
            anyhow::bail!(
                "The game saved in '{}' is inconsistent",
                self.path.display()
            );
        }
        Ok(Game::from_saved(saved))
    }
}
