use curling::{Axis, GameState, Ply, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::Bot;

/// The rows and columns (1-based, inclusive) the random bot aims for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetRange {
    pub min: usize,
    pub max: usize,
}

impl TargetRange {
    pub fn full(size: usize) -> Self {
        Self { min: 1, max: size }
    }

    /// The first three rows and columns.
    pub fn r1() -> Self {
        Self { min: 1, max: 3 }
    }

    /// The rows and columns two to four.
    pub fn r2() -> Self {
        Self { min: 2, max: 4 }
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.min..=self.max).contains(&index)
    }

    // Restricted to what fits on a board of this size, never empty.
    fn clamped(&self, size: usize) -> Self {
        let max = self.max.clamp(1, size);
        let min = self.min.clamp(1, max);
        Self { min, max }
    }
}

/// Plays its most valuable card on a random target.
pub struct RandomBot {
    rng: StdRng,
    range: Option<TargetRange>,
}

impl RandomBot {
    pub fn new(rng: StdRng) -> Self {
        Self { rng, range: None }
    }

    pub fn with_range(rng: StdRng, range: TargetRange) -> Self {
        Self {
            rng,
            range: Some(range),
        }
    }

    fn pick_empty_cell(
        &mut self,
        empty: &[(usize, usize)],
        range: TargetRange,
    ) -> Option<(usize, usize)> {
        let both: Vec<_> = empty
            .iter()
            .copied()
            .filter(|&(row, column)| range.contains(row) && range.contains(column))
            .collect();
        let candidates = if !both.is_empty() {
            both
        } else {
            let rows: Vec<_> = empty
                .iter()
                .copied()
                .filter(|&(row, _)| range.contains(row))
                .collect();
            let columns: Vec<_> = empty
                .iter()
                .copied()
                .filter(|&(_, column)| range.contains(column))
                .collect();
            // A random axis first, then the other one.
            let (first, second) = if self.rng.gen::<bool>() {
                (rows, columns)
            } else {
                (columns, rows)
            };
            if !first.is_empty() {
                first
            } else if !second.is_empty() {
                second
            } else {
                empty.to_vec()
            }
        };
        candidates.choose(&mut self.rng).copied()
    }

    fn pick_rim_slot(&mut self, size: usize, range: TargetRange) -> (usize, usize) {
        let index = self.rng.gen_range(range.min..=range.max);
        let axis = if self.rng.gen::<bool>() {
            Axis::Row
        } else {
            Axis::Column
        };
        let side = if self.rng.gen::<bool>() {
            Side::Near
        } else {
            Side::Far
        };
        let rim = match side {
            Side::Near => 0,
            Side::Far => size + 1,
        };
        match axis {
            Axis::Row => (index, rim),
            Axis::Column => (rim, index),
        }
    }
}

impl Bot for RandomBot {
    fn propose(&mut self, state: &GameState<'_>) -> anyhow::Result<Ply> {
        let player = state.next_player();
        let card = player
            .highest_card()
            .ok_or_else(|| anyhow::anyhow!("{} has no cards left", player))?;

        let size = state.board.size();
        let range = self
            .range
            .unwrap_or_else(|| TargetRange::full(size))
            .clamped(size);
        let empty = state.board.get_empty();
        let (row, column) = if empty.is_empty() {
            self.pick_rim_slot(size, range)
        } else {
            self.pick_empty_cell(&empty, range)
                .ok_or_else(|| anyhow::anyhow!("No empty cell to play on"))?
        };
        Ok(Ply { card, row, column })
    }
}
