//! Grid committer: writes validated placements into the working grid.

use crossgrid_core::{ClueAnswer, Crossword, LetterGrid, PlacedWord};

use crate::placement::Placement;

/// Progress of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutState {
    /// More words may still be placed.
    Collecting,
    /// The word cap has been reached.
    Done,
}

/// The grid and word list of one generation run.
///
/// A layout is owned by a single run and handed out only as a finished
/// [`Crossword`]; nothing else can observe or alias the working grid.
///
/// # Examples
///
/// ```
/// use crossgrid_core::{ClueAnswer, ClueId, Direction, Position};
/// use crossgrid_generator::{Layout, LayoutState, Placement};
///
/// let cold = ClueAnswer::from_raw(ClueId(1), "Opposite of hot", "COLD")?;
/// let cat = ClueAnswer::from_raw(ClueId(2), "Feline pet", "CAT")?;
///
/// let mut layout = Layout::new(10, 2);
/// layout.place_seed(&cold);
/// layout.commit(&cat, Placement::new(Position::new(5, 3), Direction::Down));
/// assert_eq!(layout.state(), LayoutState::Done);
///
/// let crossword = layout.into_crossword();
/// assert_eq!(crossword.words[1].number, 2);
/// assert!(crossword.check_consistency().is_ok());
/// # Ok::<(), crossgrid_core::ClueError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Layout {
    grid: LetterGrid,
    words: Vec<PlacedWord>,
    max_words: usize,
}

impl Layout {
    /// Creates an empty layout on a blank `size × size` grid that accepts at
    /// most `max_words` words.
    #[must_use]
    pub fn new(size: usize, max_words: usize) -> Self {
        Self {
            grid: LetterGrid::new(size),
            words: Vec::with_capacity(max_words.min(size * size)),
            max_words,
        }
    }

    /// Returns the working grid.
    #[must_use]
    #[inline]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Returns the words placed so far, in placement order.
    #[must_use]
    #[inline]
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// Returns whether more words may be placed.
    #[must_use]
    #[inline]
    pub fn state(&self) -> LayoutState {
        if self.words.len() < self.max_words {
            LayoutState::Collecting
        } else {
            LayoutState::Done
        }
    }

    /// Places the seed word across the middle of the grid.
    ///
    /// The anchor is [`Placement::anchor`]; it is committed without
    /// validation, since the grid is still blank.
    ///
    /// # Panics
    ///
    /// Panics if words have already been placed, or if the answer is longer
    /// than the grid.
    pub fn place_seed(&mut self, entry: &ClueAnswer) -> &PlacedWord {
        assert!(self.words.is_empty(), "seed word must be placed first");
        let placement = Placement::anchor(self.grid.size(), entry.answer.len());
        self.commit(entry, placement)
    }

    /// Writes `entry` into the grid at `placement` and records it with the
    /// next sequence number.
    ///
    /// The placement must already have passed
    /// [`validator::can_place`](crate::validator::can_place); cells shared with
    /// earlier words are rewritten with the same letter.
    ///
    /// # Panics
    ///
    /// Panics if the word leaves the grid.
    pub fn commit(&mut self, entry: &ClueAnswer, placement: Placement) -> &PlacedWord {
        let number = u32::try_from(self.words.len() + 1).unwrap_or(u32::MAX);
        let word = PlacedWord {
            answer: entry.answer.clone(),
            clue: entry.clue.clone(),
            clue_id: entry.id,
            row: placement.position.row,
            col: placement.position.col,
            direction: placement.direction,
            number,
        };
        for (pos, letter) in word.cells() {
            debug_assert!(
                self.grid.cell(pos).is_none_or(|existing| existing == letter),
                "{} conflicts at {pos}",
                word.answer,
            );
            self.grid.set(pos, letter);
        }
        self.words.push(word);
        &self.words[self.words.len() - 1]
    }

    /// Finishes the run, yielding the crossword.
    #[must_use]
    pub fn into_crossword(self) -> Crossword {
        Crossword {
            words: self.words,
            grid: self.grid,
        }
    }
}
