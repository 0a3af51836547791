//! Generated crosswords: placed words plus the filled grid.

use serde::{Deserialize, Serialize};

use crate::{Answer, ClueAnswer, ClueId, Direction, Letter, LetterGrid, Position};

/// A word committed to the grid.
///
/// `row`/`col` name the origin cell: the leftmost cell of an across word or
/// the topmost cell of a down word.
///
/// `number` is the sequence number assigned in placement order: the seed
/// word is 1 and every later placement takes the next integer. It does not
/// follow the row-major reading order of the finished grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    /// The placed answer.
    pub answer: Answer,
    /// Clue text for this answer.
    pub clue: String,
    /// Identifier of the clue this word was placed for.
    ///
    /// Not part of the wire format; deserialized words carry the default id.
    #[serde(skip)]
    pub clue_id: ClueId,
    /// Row of the origin cell.
    pub row: usize,
    /// Column of the origin cell.
    pub col: usize,
    /// Orientation of the word.
    pub direction: Direction,
    /// Sequence number, starting at 1.
    pub number: u32,
}

impl PlacedWord {
    /// Returns the origin cell.
    #[must_use]
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Returns the number of cells spanned.
    #[must_use]
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.answer.len()
    }

    /// Returns every spanned cell with the letter it must hold, in answer
    /// order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = (Position, Letter)> + '_ {
        let origin = self.position();
        self.answer
            .letters()
            .enumerate()
            .map(move |(i, letter)| (origin.offset(self.direction, i), letter))
    }

    /// Returns `true` if the word spans `pos`.
    #[must_use]
    pub fn covers(&self, pos: Position) -> bool {
        let (along, fixed, start, fixed_start) = match self.direction {
            Direction::Across => (pos.col, pos.row, self.col, self.row),
            Direction::Down => (pos.row, pos.col, self.row, self.col),
        };
        fixed == fixed_start && along >= start && along - start < self.len()
    }

    /// Returns the cells immediately before the first letter and after the
    /// last letter, along the word's direction.
    ///
    /// The first is `None` when the word starts on the top or left edge. Both
    /// cells must stay empty (or lie outside the grid) for the word to keep its
    /// length.
    #[must_use]
    pub fn end_caps(&self) -> [Option<Position>; 2] {
        let origin = self.position();
        [
            origin.before(self.direction),
            Some(origin.offset(self.direction, self.len())),
        ]
    }
}

/// A violated crossword invariant, reported by [`Crossword::check_consistency`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConsistencyError {
    /// A word spans a cell outside the grid.
    #[display("word {number} leaves the {size}x{size} grid")]
    OutOfBounds {
        /// Number of the offending word.
        number: u32,
        /// Grid size.
        size: usize,
    },
    /// A spanned cell does not hold the word's letter.
    #[display("word {number} expects {expected} at {pos}, found {found:?}")]
    LetterMismatch {
        /// Number of the offending word.
        number: u32,
        /// The mismatching cell.
        pos: Position,
        /// Letter required by the word.
        expected: Letter,
        /// Letter found in the grid.
        found: Option<Letter>,
    },
    /// The cell just before or just after a word is filled.
    #[display("word {number} runs into the filled cell at {pos}")]
    NotIsolated {
        /// Number of the offending word.
        number: u32,
        /// The filled neighbouring cell.
        pos: Position,
    },
    /// Word numbers are not `1, 2, 3, ...` in list order.
    #[display("word at index {index} has number {number}, expected {expected}")]
    Numbering {
        /// Index into the word list.
        index: usize,
        /// Number found.
        number: u32,
        /// Number expected.
        expected: u32,
    },
}

/// The outcome of a generation run: the placed words and the filled grid.
///
/// This is the only structure handed to renderers, persistence and export.
/// Its serialized form is
///
/// ```json
/// {
///   "words": [{"answer": "COLD", "clue": "...", "row": 5, "col": 3, "direction": "across", "number": 1}],
///   "grid": [["", "", "C", "..."], ["..."]]
/// }
/// ```
///
/// # Examples
///
/// ```
/// use crossgrid_core::{Crossword, Position};
///
/// let crossword = Crossword::empty(10);
/// assert!(crossword.words.is_empty());
/// assert!(crossword.grid.is_blank());
/// assert_eq!(crossword.number_at(Position::new(0, 0)), None);
/// assert!(crossword.check_consistency().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crossword {
    /// Placed words in placement order.
    pub words: Vec<PlacedWord>,
    /// The filled grid.
    pub grid: LetterGrid,
}

impl Crossword {
    /// Creates a crossword with no words on a blank `size × size` grid.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            words: Vec::new(),
            grid: LetterGrid::new(size),
        }
    }

    /// Returns the grid size.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Returns the number of the first word starting at `pos`, used to label
    /// the cell.
    #[must_use]
    pub fn number_at(&self, pos: Position) -> Option<u32> {
        self.words
            .iter()
            .find(|word| word.position() == pos)
            .map(|word| word.number)
    }

    /// Returns every word spanning `pos`.
    pub fn words_at(&self, pos: Position) -> impl Iterator<Item = &PlacedWord> + '_ {
        self.words.iter().filter(move |word| word.covers(pos))
    }

    /// Returns the word placed for clue `id`, if any.
    #[must_use]
    pub fn word_for_clue(&self, id: ClueId) -> Option<&PlacedWord> {
        self.words.iter().find(|word| word.clue_id == id)
    }

    /// Returns the entries of `input` that were not placed.
    ///
    /// Entries are matched by [`ClueId`], so duplicate answers are told apart.
    #[must_use]
    pub fn unplaced<'a>(&self, input: &'a [ClueAnswer]) -> Vec<&'a ClueAnswer> {
        input
            .iter()
            .filter(|entry| self.word_for_clue(entry.id).is_none())
            .collect()
    }

    /// Verifies the structural invariants of the crossword.
    ///
    /// Every word must lie inside the grid, every spanned cell must hold the
    /// word's letter, the cells just before and after each word along its
    /// direction must be empty or outside the grid, and words must be
    /// numbered `1, 2, 3, ...` in list order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConsistencyError`] found.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        let size = self.size();
        for (index, word) in self.words.iter().enumerate() {
            let number = word.number;
            let expected = u32::try_from(index + 1).unwrap_or(u32::MAX);
            if number != expected {
                return Err(ConsistencyError::Numbering {
                    index,
                    number,
                    expected,
                });
            }

            for (pos, expected) in word.cells() {
                if !self.grid.contains(pos) {
                    return Err(ConsistencyError::OutOfBounds { number, size });
                }
                let found = self.grid.cell(pos);
                if found != Some(expected) {
                    return Err(ConsistencyError::LetterMismatch {
                        number,
                        pos,
                        expected,
                        found,
                    });
                }
            }

            for pos in word.end_caps().into_iter().flatten() {
                if self.grid.cell(pos).is_some() {
                    return Err(ConsistencyError::NotIsolated { number, pos });
                }
            }
        }
        Ok(())
    }
}
