//! Proposed word positions.

use crossgrid_core::{Direction, Position};

/// Where and how a word is proposed to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Origin cell: leftmost for across, topmost for down.
    pub position: Position,
    /// Orientation of the word.
    pub direction: Direction,
}

impl Placement {
    /// Creates a new placement.
    #[must_use]
    #[inline]
    pub const fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Returns the anchor placement of the seed word.
    ///
    /// The seed word is always across, on the middle row, horizontally
    /// centered: `row = size / 2`, `col = (size - len) / 2`.
    #[must_use]
    pub const fn anchor(size: usize, len: usize) -> Self {
        Self::new(
            Position::new(size / 2, size.saturating_sub(len) / 2),
            Direction::Across,
        )
    }

    /// Returns the cell just past the end of a word of length `len`.
    #[must_use]
    #[inline]
    pub const fn end_exclusive(self, len: usize) -> Position {
        self.position.offset(self.direction, len)
    }
}

/// A validated placement found by the intersection search.
///
/// Candidates only live during the search for a single word, where they are
/// ranked by `intersections`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementCandidate {
    /// The proposed placement.
    pub placement: Placement,
    /// Number of letters shared with already placed words.
    pub intersections: usize,
}
