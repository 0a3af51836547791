//! Grid coordinates and word directions.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// The orientation of a word in the grid.
///
/// [`Across`](Direction::Across) words advance the column index,
/// [`Down`](Direction::Down) words advance the row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right.
    Across,
    /// Top to bottom.
    Down,
}

impl Direction {
    /// Returns the perpendicular direction.
    #[must_use]
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Across => "across",
            Self::Down => "down",
        })
    }
}

/// A cell coordinate, `row` from the top and `col` from the left.
///
/// Positions are not tied to a grid size; use
/// [`LetterGrid::contains`](crate::LetterGrid::contains) for bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position `distance` cells further along `direction`.
    #[must_use]
    #[inline]
    pub const fn offset(self, direction: Direction, distance: usize) -> Self {
        match direction {
            Direction::Across => Self::new(self.row, self.col + distance),
            Direction::Down => Self::new(self.row + distance, self.col),
        }
    }

    /// Returns the cell immediately before this one along `direction`, or
    /// `None` at the top or left edge.
    #[must_use]
    #[inline]
    pub fn before(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Across => Some(Self::new(self.row, self.col.checked_sub(1)?)),
            Direction::Down => Some(Self::new(self.row.checked_sub(1)?, self.col)),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_before() {
        let pos = Position::new(2, 3);
        assert_eq!(pos.offset(Direction::Across, 4), Position::new(2, 7));
        assert_eq!(pos.offset(Direction::Down, 4), Position::new(6, 3));
        assert_eq!(pos.before(Direction::Across), Some(Position::new(2, 2)));
        assert_eq!(pos.before(Direction::Down), Some(Position::new(1, 3)));

        assert_eq!(Position::new(0, 5).before(Direction::Down), None);
        assert_eq!(Position::new(5, 0).before(Direction::Across), None);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::Across.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Across);
        assert_eq!(Direction::Across.to_string(), "across");
        assert_eq!(Direction::Down.to_string(), "down");
    }
}
