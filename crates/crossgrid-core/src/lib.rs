//! Core data structures for crossword generation.
//!
//! This crate provides the types shared by the placement engine and by the
//! collaborators that consume its output (renderers, solvers, persistence).
//!
//! # Overview
//!
//! 1. **Input types** - What the puzzle author supplies
//!    - [`letter`]: A single uppercase letter `A`-`Z`
//!    - [`answer`]: Validated answers of two or more letters
//!    - [`clue`]: Clue/answer pairs with caller-assigned identifiers
//!
//! 2. **Geometry** - Where words go
//!    - [`position`]: Cell coordinates and the across/down directions
//!    - [`grid`]: The square letter grid
//!
//! 3. **Output types** - What generation produces
//!    - [`crossword`]: Placed words plus the filled grid, with consistency
//!      checks and cell queries
//!
//! # Examples
//!
//! ```
//! use crossgrid_core::{ClueAnswer, ClueId, Crossword, Direction, PlacedWord};
//!
//! let entry = ClueAnswer::from_raw(ClueId(1), "Opposite of hot", "cold")?;
//!
//! let mut crossword = Crossword::empty(10);
//! let word = PlacedWord {
//!     answer: entry.answer.clone(),
//!     clue: entry.clue.clone(),
//!     clue_id: entry.id,
//!     row: 5,
//!     col: 3,
//!     direction: Direction::Across,
//!     number: 1,
//! };
//! for (pos, letter) in word.cells() {
//!     crossword.grid.set(pos, letter);
//! }
//! crossword.words.push(word);
//!
//! assert!(crossword.check_consistency().is_ok());
//! assert!(crossword.unplaced(&[entry]).is_empty());
//! # Ok::<(), crossgrid_core::ClueError>(())
//! ```

pub mod answer;
pub mod clue;
pub mod crossword;
pub mod grid;
pub mod letter;
pub mod position;

// Re-export commonly used types
pub use self::{
    answer::{Answer, AnswerError, MIN_ANSWER_LEN},
    clue::{ClueAnswer, ClueError, ClueId},
    crossword::{ConsistencyError, Crossword, PlacedWord},
    grid::{GridParseError, GridShapeError, LetterGrid},
    letter::Letter,
    position::{Direction, Position},
};
