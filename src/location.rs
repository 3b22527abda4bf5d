use core::fmt;

/// A cell on the grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub row: i64,
    pub col: i64,
}

impl Location {
    /// The cell every knot starts out in.
    pub const ORIGIN: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Location after applying the given move.
    #[inline]
    pub fn translate(self, m: Move) -> Self {
        Self::new(self.row + m.dy, self.col + m.dx)
    }

    /// Chebyshev distance between two locations.
    #[inline]
    pub fn distance(self, other: Self) -> i64 {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single step a knot can take, `dx` moves along columns and `dy` along
/// rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub dx: i64,
    pub dy: i64,
}

impl Move {
    pub const UP: Self = Self::new(0, 1);
    pub const DOWN: Self = Self::new(0, -1);
    pub const LEFT: Self = Self::new(-1, 0);
    pub const RIGHT: Self = Self::new(1, 0);

    #[inline]
    pub const fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }

    /// Test if this moves exactly one cell, straight or diagonally.
    #[inline]
    pub fn is_unit(self) -> bool {
        self.dx.abs() <= 1 && self.dy.abs() <= 1 && (self.dx, self.dy) != (0, 0)
    }
}
