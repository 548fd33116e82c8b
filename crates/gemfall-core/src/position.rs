//! Discrete grid cell coordinates.

use std::fmt::{self, Display};

/// A grid cell coordinate `(x, y)`.
///
/// Coordinates are signed: converting an arbitrary world position to a cell
/// index can land outside the board (including at negative indices), and the
/// result is only meaningful after a bounds check against the grid (see
/// [`Grid::is_valid`](crate::grid::Grid::is_valid)).
///
/// # Examples
///
/// ```
/// use gemfall_core::CellPos;
///
/// let a = CellPos::new(2, 3);
/// let b = CellPos::new(2, 4);
/// assert!(a.is_adjacent(b));
/// assert_eq!(a.manhattan_distance(CellPos::new(0, 0)), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellPos {
    /// The column index.
    pub x: i32,
    /// The row index.
    pub y: i32,
}

impl CellPos {
    /// Creates a new cell coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the Manhattan distance to `other`.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Returns `true` if `other` is 4-directionally adjacent to this cell.
    ///
    /// Adjacency is a Manhattan distance of exactly 1; diagonal neighbors and
    /// the cell itself are not adjacent.
    ///
    /// # Examples
    ///
    /// ```
    /// use gemfall_core::CellPos;
    ///
    /// let pos = CellPos::new(1, 1);
    /// assert!(pos.is_adjacent(CellPos::new(0, 1)));
    /// assert!(!pos.is_adjacent(CellPos::new(0, 0))); // diagonal
    /// assert!(!pos.is_adjacent(pos));
    /// ```
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let origin = CellPos::new(0, 0);
        assert_eq!(origin.manhattan_distance(origin), 0);
        assert_eq!(origin.manhattan_distance(CellPos::new(3, 4)), 7);
        assert_eq!(origin.manhattan_distance(CellPos::new(-3, 4)), 7);
    }

    #[test]
    fn test_adjacency() {
        let pos = CellPos::new(5, 5);
        for neighbor in [
            CellPos::new(4, 5),
            CellPos::new(6, 5),
            CellPos::new(5, 4),
            CellPos::new(5, 6),
        ] {
            assert!(pos.is_adjacent(neighbor), "{neighbor} should be adjacent");
        }
        assert!(!pos.is_adjacent(CellPos::new(4, 4)));
        assert!(!pos.is_adjacent(CellPos::new(7, 5)));
        assert!(!pos.is_adjacent(pos));
    }
}
