/// Whether a shift moves cards along a row or along a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

/// The end of the line a card is pushed in from.
///
/// `Near` is the left end of a row or the top end of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Near,
    Far,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Near => Side::Far,
            Side::Far => Side::Near,
        }
    }
}

/// A row or column of the board, seen from the side a card enters it.
///
/// Position `0` is the cell the new card lands on, position `size - 1` is the
/// cell whose occupant gets pushed off. Rows and columns from either end are
/// all handled through [`Line::cell()`], so the shifting code never has to
/// care about orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub axis: Axis,
    /// 0-based index of the row or column.
    pub index: usize,
    pub side: Side,
    pub size: usize,
}

impl Line {
    /// Interprets a rim coordinate of a ply.
    ///
    /// Row/column `0` and `size + 1` lie just outside the board; exactly one of
    /// the two coordinates must be on the rim and the other one inside.
    pub fn from_rim(row: usize, column: usize, size: usize) -> Option<Self> {
        let inside = |x: usize| (1..=size).contains(&x);
        let side_of = |x: usize| match x {
            0 => Some(Side::Near),
            x if x == size + 1 => Some(Side::Far),
            _ => None,
        };
        match (side_of(row), side_of(column)) {
            (None, Some(side)) if inside(row) => Some(Line {
                axis: Axis::Row,
                index: row - 1,
                side,
                size,
            }),
            (Some(side), None) if inside(column) => Some(Line {
                axis: Axis::Column,
                index: column - 1,
                side,
                size,
            }),
            _ => None,
        }
    }

    /// The same line, entered from the other end.
    pub fn reversed(self) -> Self {
        Line {
            side: self.side.opposite(),
            ..self
        }
    }

    /// 0-based grid coordinates of the `k`-th cell counted from the entry side.
    pub fn cell(&self, k: usize) -> (usize, usize) {
        debug_assert!(k < self.size);
        let along = match self.side {
            Side::Near => k,
            Side::Far => self.size - 1 - k,
        };
        match self.axis {
            Axis::Row => (self.index, along),
            Axis::Column => (along, self.index),
        }
    }

    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        (0..self.size).map(move |k| self.cell(k))
    }

    /// The 1-based rim coordinate a ply uses to address this line.
    pub fn rim_coordinate(&self) -> (usize, usize) {
        let outside = match self.side {
            Side::Near => 0,
            Side::Far => self.size + 1,
        };
        match self.axis {
            Axis::Row => (self.index + 1, outside),
            Axis::Column => (outside, self.index + 1),
        }
    }

    /// All `4 * size` lines, addressed from every rim slot.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        [
            (Axis::Column, Side::Near),
            (Axis::Column, Side::Far),
            (Axis::Row, Side::Near),
            (Axis::Row, Side::Far),
        ]
        .into_iter()
        .flat_map(move |(axis, side)| {
            (0..size).map(move |index| Line {
                axis,
                index,
                side,
                size,
            })
        })
    }
}
