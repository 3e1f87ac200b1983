mod error;
mod line;

pub use error::*;
pub use line::*;

use serde::{Deserialize, Serialize};

use crate::{Card, Ply, Suit};

/// Side length of the standard board.
pub const STANDARD_SIZE: usize = 5;

/// The cells left empty on the standard board, 1-based. Everything else
/// except the anchor starts out as a [blank](Cell::Blank).
pub const STANDARD_EMPTY: [(usize, usize); 12] = [
    (1, 1),
    (1, 2),
    (1, 4),
    (1, 5),
    (2, 1),
    (2, 5),
    (4, 1),
    (4, 5),
    (5, 1),
    (5, 2),
    (5, 4),
    (5, 5),
];

// (weight, offsets from the anchor)
const SCORING_TIERS: [(u32, [(isize, isize); 4]); 2] = [
    (1, [(-1, -1), (-1, 1), (1, -1), (1, 1)]),
    (2, [(-1, 0), (0, -1), (1, 0), (0, 1)]),
];

/// The content of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    /// The immovable token in the center.
    Anchor,
    /// Neutral filler on a pre-filled board. It is not a card and vanishes
    /// when pushed off the board.
    Blank,
    Card(Card),
}

/// What a successful [`Board::update()`] or [`Board::revert()`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The card was placed on an empty cell.
    Inserted,
    /// The card was pushed into a line, and this card fell off the far end.
    Evicted(Card),
    /// The card was pushed into a line, and a blank fell off the far end.
    EvictedBlank,
    UndoInsert,
    UndoShift,
}

impl Cell {
    pub fn card(&self) -> Option<Card> {
        match self {
            Cell::Card(card) => Some(*card),
            _ => None,
        }
    }
}

impl Outcome {
    pub fn evicted_card(&self) -> Option<Card> {
        match self {
            Outcome::Evicted(card) => Some(*card),
            _ => None,
        }
    }
}

/// A square board with the anchor in its center.
///
/// While the board has empty cells (fill phase), cards are placed directly on
/// them. Once it is full (shift phase), a card is pushed into a row or column
/// from outside the board, moving every other card in that line one step
/// further and pushing the last one off. The anchor never moves; cards skip
/// over it.
///
/// All coordinates in the public interface are 1-based, with `0` and
/// `size + 1` denoting the rim just outside the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Row-major.
    cells: Vec<Cell>,
    #[serde(rename = "final")]
    finalized: bool,
}

impl Board {
    /// Creates a board where every cell but the anchor is empty.
    ///
    /// Panics if `size < 3`.
    pub fn new(size: usize) -> Self {
        assert!(size >= 3, "a board needs room around the anchor");
        let mut cells = vec![Cell::Empty; size * size];
        cells[(size / 2) * size + size / 2] = Cell::Anchor;
        Self {
            size,
            cells,
            finalized: false,
        }
    }

    /// Creates a board where only the given 1-based cells are empty and the
    /// rest is filled with blanks.
    ///
    /// Panics if a coordinate is off the board or is the anchor.
    pub fn with_empty(size: usize, empty: &[(usize, usize)]) -> Self {
        let mut board = Self::prefilled(size);
        for &(row, column) in empty {
            assert!((1..=size).contains(&row) && (1..=size).contains(&column));
            let idx = board.idx(row - 1, column - 1);
            assert_ne!(board.cells[idx], Cell::Anchor, "the anchor cell cannot be empty");
            board.cells[idx] = Cell::Empty;
        }
        board
    }

    /// A full board of blanks. Play starts directly in the shift phase.
    pub fn prefilled(size: usize) -> Self {
        let mut board = Self::new(size);
        for cell in board.cells.iter_mut() {
            if *cell == Cell::Empty {
                *cell = Cell::Blank;
            }
        }
        board
    }

    /// The 5x5 board with the [default empty cells](STANDARD_EMPTY).
    pub fn standard() -> Self {
        Self::with_empty(STANDARD_SIZE, &STANDARD_EMPTY)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// 1-based coordinates of the anchor.
    pub fn anchor(&self) -> (usize, usize) {
        (self.size / 2 + 1, self.size / 2 + 1)
    }

    /// Returns the cell at 1-based coordinates, or `None` if off the board.
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if !(1..=self.size).contains(&row) || !(1..=self.size).contains(&column) {
            return None;
        }
        Some(self.cells[self.idx(row - 1, column - 1)])
    }

    /// All cells with their 1-based coordinates, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| ((idx / self.size + 1, idx % self.size + 1), cell))
    }

    /// The cards on the board with their 1-based coordinates.
    pub fn cards(&self) -> impl Iterator<Item = ((usize, usize), Card)> + '_ {
        self.iter().filter_map(|(pos, cell)| match cell {
            Cell::Card(card) => Some((pos, card)),
            _ => None,
        })
    }

    /// The 1-based coordinates of all empty cells.
    ///
    /// An empty result means the board is in the shift phase.
    pub fn get_empty(&self) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|(_, cell)| *cell == Cell::Empty)
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn is_fill_phase(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    /// Every rim coordinate from which a card can be pushed into the board.
    pub fn rim_slots(&self) -> Vec<(usize, usize)> {
        Line::all(self.size).map(|line| line.rim_coordinate()).collect()
    }

    /// The coordinates a ply may currently target: the empty cells during the
    /// fill phase, the rim slots afterwards.
    pub fn targets(&self) -> Vec<(usize, usize)> {
        let empty = self.get_empty();
        if empty.is_empty() {
            self.rim_slots()
        } else {
            empty
        }
    }

    /// Plays the card of a ply onto the board.
    ///
    /// Nothing is changed if the target is invalid for the current phase.
    pub fn update(&mut self, ply: &Ply) -> Result<Outcome, BoardError> {
        let Ply { card, row, column } = *ply;
        let empty = self.get_empty();
        if !empty.is_empty() {
            if !empty.contains(&(row, column)) {
                return Err(BoardError::NotAnEmptyCell { row, column, empty });
            }
            let idx = self.idx(row - 1, column - 1);
            self.cells[idx] = Cell::Card(card);
            return Ok(Outcome::Inserted);
        }

        let line =
            Line::from_rim(row, column, self.size).ok_or(BoardError::NotOnRim { row, column })?;
        match self.shift(line, Cell::Card(card)) {
            Cell::Card(evicted) => Ok(Outcome::Evicted(evicted)),
            Cell::Blank => Ok(Outcome::EvictedBlank),
            // There are no empty cells in the shift phase, and shift() skips the anchor.
            other => unreachable!("{:?} was pushed off the board", other),
        }
    }

    /// Takes back a ply that [`Self::update()`] answered with `outcome`.
    ///
    /// A fill-phase placement is cleared again. A shift is replayed from the
    /// opposite end of the line with the evicted card (or blank), which
    /// restores the line exactly, anchor included.
    pub fn revert(&mut self, ply: &Ply, outcome: Outcome) -> Result<Outcome, BoardError> {
        let Ply { card, row, column } = *ply;
        let reinstated = match outcome {
            Outcome::Inserted => {
                if self.get(row, column) != Some(Cell::Card(card)) {
                    return Err(BoardError::NotAnInsertion { row, column });
                }
                let idx = self.idx(row - 1, column - 1);
                self.cells[idx] = Cell::Empty;
                return Ok(Outcome::UndoInsert);
            }
            Outcome::Evicted(evicted) => Cell::Card(evicted),
            Outcome::EvictedBlank => Cell::Blank,
            Outcome::UndoInsert | Outcome::UndoShift => {
                return Err(BoardError::NotRevertible { outcome })
            }
        };

        let line =
            Line::from_rim(row, column, self.size).ok_or(BoardError::NotOnRim { row, column })?;
        let (entry_row, entry_column) = line.cell(0);
        if self.cells[self.idx(entry_row, entry_column)] != Cell::Card(card) {
            return Err(BoardError::RevertMismatch { expected: card });
        }
        self.shift(line.reversed(), reinstated);
        Ok(Outcome::UndoShift)
    }

    /// The points the given suit currently holds around the anchor.
    ///
    /// Cards diagonally next to the anchor count their value once, cards
    /// directly above, below, left or right of it count double.
    pub fn score(&self, suit: Suit) -> Result<u32, BoardError> {
        if self.finalized {
            return Err(BoardError::ScoreOnFinalizedBoard);
        }
        let center = self.size / 2;
        let mut total = 0;
        for (weight, offsets) in SCORING_TIERS {
            for (di, dj) in offsets {
                // The anchor is never on the edge, so its neighbours exist
                let i = center.wrapping_add_signed(di);
                let j = center.wrapping_add_signed(dj);
                if let Cell::Card(card) = self.cells[self.idx(i, j)] {
                    if card.suit == suit {
                        total += weight * card.value();
                    }
                }
            }
        }
        Ok(total)
    }

    pub fn finalize(&mut self) {
        self.finalized = true;
    }

    pub fn unfinalize(&mut self) {
        self.finalized = false;
    }

    pub fn is_final(&self) -> bool {
        self.finalized
    }

    /// Checks the structural invariants, e.g. after deserialization.
    pub fn is_consistent(&self) -> bool {
        let center = self.idx(self.size / 2, self.size / 2);
        self.size >= 3
            && self.cells.len() == self.size * self.size
            && self
                .cells
                .iter()
                .enumerate()
                .all(|(idx, &cell)| (cell == Cell::Anchor) == (idx == center))
    }

    // Pushes `piece` into the line from its entry side and returns whatever
    // falls off the far end. The anchor's slot is left out, so the pieces
    // on either side of it move past it.
    fn shift(&mut self, line: Line, piece: Cell) -> Cell {
        let anchor_idx = self.idx(self.size / 2, self.size / 2);
        let mut carried = piece;
        for (i, j) in line.cells() {
            let idx = self.idx(i, j);
            if idx != anchor_idx {
                carried = std::mem::replace(&mut self.cells[idx], carried);
            }
        }
        carried
    }

    fn idx(&self, i: usize, j: usize) -> usize {
        i * self.size + j
    }
}
