//! Square grid of letters.

use std::{
    fmt::{self, Display, Write as _},
    ops::Index,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Letter, Position};

/// Errors produced when parsing a [`LetterGrid`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// A row has a different number of cells than there are rows.
    #[display("row {row} has {len} cells, expected {size}")]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found in the row.
        len: usize,
        /// Expected number of cells.
        size: usize,
    },
    /// A cell is neither `.` nor an uppercase letter.
    #[display("invalid cell {ch:?} at row {row}, column {col}")]
    InvalidCell {
        /// The offending character.
        ch: char,
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },
}

/// Errors produced when deserializing a [`LetterGrid`] from its wire format.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridShapeError {
    /// A row has a different number of cells than there are rows.
    #[display("row {row} has {len} cells, expected {size}")]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found in the row.
        len: usize,
        /// Expected number of cells.
        size: usize,
    },
    /// A cell is neither `""` nor a single uppercase letter.
    #[display("invalid cell {value:?} at row {row}, column {col}")]
    InvalidCell {
        /// The offending cell value.
        value: String,
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },
}

/// A `size × size` grid where each cell is empty or holds one [`Letter`].
///
/// The text form (used by [`Display`] and [`FromStr`]) has one line per row
/// with `.` for empty cells. On the wire the grid is an array of rows, each an
/// array of strings, `""` for an empty cell.
///
/// # Examples
///
/// ```
/// use crossgrid_core::{Letter, LetterGrid, Position};
///
/// let mut grid = LetterGrid::new(5);
/// grid.set(Position::new(2, 1), Letter::from_char('H').unwrap());
/// grid.set(Position::new(2, 2), Letter::from_char('I').unwrap());
///
/// assert_eq!(grid.cell(Position::new(2, 2)).unwrap().as_char(), 'I');
/// assert_eq!(grid.cell(Position::new(9, 9)), None);
/// assert_eq!(grid.to_string(), ".....\n.....\n.HI..\n.....\n.....");
///
/// let parsed: LetterGrid = grid.to_string().parse().unwrap();
/// assert_eq!(parsed, grid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct LetterGrid {
    size: usize,
    cells: Vec<Option<Letter>>,
}

impl LetterGrid {
    /// Creates an empty grid with `size` rows and `size` columns.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Returns the letter at `pos`.
    ///
    /// Returns `None` both for empty cells and for positions outside the grid.
    #[must_use]
    #[inline]
    pub fn cell(&self, pos: Position) -> Option<Letter> {
        if self.contains(pos) {
            self.cells[self.offset(pos)]
        } else {
            None
        }
    }

    /// Writes `letter` into the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[inline]
    pub fn set(&mut self, pos: Position, letter: Letter) {
        assert!(self.contains(pos), "position {pos} outside {0}x{0} grid", self.size);
        let offset = self.offset(pos);
        self.cells[offset] = Some(letter);
    }

    /// Returns an iterator over the rows from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Option<Letter>]> + '_ {
        // `chunks` rejects a zero chunk size, and a 0x0 grid has no rows anyway.
        self.cells.chunks(self.size.max(1)).take(self.size)
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if no cell is filled.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    #[inline]
    fn offset(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }
}

impl Index<Position> for LetterGrid {
    type Output = Option<Letter>;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(self.contains(pos), "position {pos} outside {0}x{0} grid", self.size);
        &self.cells[self.offset(pos)]
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(cell.map_or('.', Letter::as_char))?;
            }
        }
        Ok(())
    }
}

impl FromStr for LetterGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        let size = lines.len();
        let mut grid = Self::new(size);
        for (row, line) in lines.into_iter().enumerate() {
            let len = line.chars().count();
            if len != size {
                return Err(GridParseError::NotSquare { row, len, size });
            }
            for (col, ch) in line.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let letter =
                    Letter::from_char(ch).ok_or(GridParseError::InvalidCell { ch, row, col })?;
                grid.set(Position::new(row, col), letter);
            }
        }
        Ok(grid)
    }
}

impl TryFrom<Vec<Vec<String>>> for LetterGrid {
    type Error = GridShapeError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        let size = rows.len();
        let mut grid = Self::new(size);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != size {
                return Err(GridShapeError::NotSquare {
                    row,
                    len: cells.len(),
                    size,
                });
            }
            for (col, value) in cells.into_iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                let mut chars = value.chars();
                let letter = match (chars.next(), chars.next()) {
                    (Some(ch), None) => Letter::from_char(ch),
                    _ => None,
                };
                let Some(letter) = letter else {
                    return Err(GridShapeError::InvalidCell { value, row, col });
                };
                grid.set(Position::new(row, col), letter);
            }
        }
        Ok(grid)
    }
}

impl From<LetterGrid> for Vec<Vec<String>> {
    fn from(grid: LetterGrid) -> Self {
        grid.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(|letter| letter.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn test_new_is_blank() {
        let grid = LetterGrid::new(10);
        assert_eq!(grid.size(), 10);
        assert!(grid.is_blank());
        assert_eq!(grid.filled_count(), 0);
        assert_eq!(grid.rows().len(), 10);
        assert!(grid.rows().all(|row| row.len() == 10));
    }

    #[test]
    fn test_zero_size() {
        let grid = LetterGrid::new(0);
        assert_eq!(grid.rows().len(), 0);
        assert_eq!(grid.to_string(), "");
        assert!(!grid.contains(Position::new(0, 0)));
        let rows: Vec<Vec<String>> = grid.into();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_cell_out_of_bounds_is_none() {
        let mut grid = LetterGrid::new(3);
        grid.set(Position::new(2, 2), letter('Z'));
        assert_eq!(grid.cell(Position::new(2, 2)), Some(letter('Z')));
        assert_eq!(grid.cell(Position::new(3, 0)), None);
        assert_eq!(grid.cell(Position::new(0, 3)), None);
        assert_eq!(grid[Position::new(2, 2)], Some(letter('Z')));
        assert_eq!(grid[Position::new(0, 0)], None);
    }

    #[test]
    #[should_panic(expected = "outside 3x3 grid")]
    fn test_set_out_of_bounds_panics() {
        let mut grid = LetterGrid::new(3);
        grid.set(Position::new(0, 3), letter('A'));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "AB.\n...".parse::<LetterGrid>(),
            Err(GridParseError::NotSquare {
                row: 0,
                len: 3,
                size: 2
            })
        );
        assert_eq!(
            "A.\n.b".parse::<LetterGrid>(),
            Err(GridParseError::InvalidCell {
                ch: 'b',
                row: 1,
                col: 1
            })
        );
    }

    #[test]
    fn test_parse_trims_lines() {
        let grid: LetterGrid = "
            C..
            A..
            T..
        "
        .parse()
        .unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.filled_count(), 3);
        assert_eq!(grid.cell(Position::new(1, 0)), Some(letter('A')));
    }

    #[test]
    fn test_wire_format() {
        let grid: LetterGrid = "HI\n..".parse().unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"[["H","I"],["",""]]"#);

        let back: LetterGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_wire_format_rejects_bad_shapes() {
        assert!(serde_json::from_str::<LetterGrid>(r#"[["A",""]]"#).is_err());
        assert!(serde_json::from_str::<LetterGrid>(r#"[["AB",""],["",""]]"#).is_err());
        assert!(serde_json::from_str::<LetterGrid>(r#"[["a",""],["",""]]"#).is_err());
        assert_eq!(
            LetterGrid::try_from(vec![vec!["1".to_owned()]]),
            Err(GridShapeError::InvalidCell {
                value: "1".to_owned(),
                row: 0,
                col: 0
            })
        );
    }
}
