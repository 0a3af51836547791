//! Clue/answer pairs supplied by the puzzle author.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{Answer, AnswerError};

/// Caller-assigned identifier of a clue.
///
/// Identifiers are carried through generation into
/// [`PlacedWord::clue_id`](crate::PlacedWord::clue_id), so two clues sharing
/// the same answer text stay distinguishable.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ClueId(pub u32);

impl Display for ClueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<u32> for ClueId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Errors produced when building a [`ClueAnswer`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ClueError {
    /// The clue text is empty or whitespace only.
    #[display("clue cannot be empty")]
    EmptyClue,
    /// The answer failed validation.
    #[display("invalid answer: {_0}")]
    Answer(#[from] AnswerError),
}

/// A clue together with its answer.
///
/// # Examples
///
/// ```
/// use crossgrid_core::{ClueAnswer, ClueError, ClueId};
///
/// let entry = ClueAnswer::from_raw(ClueId(1), "Opposite of hot", "cold")?;
/// assert_eq!(entry.answer.as_str(), "COLD");
///
/// assert_eq!(
///     ClueAnswer::from_raw(ClueId(2), "   ", "WARM"),
///     Err(ClueError::EmptyClue)
/// );
/// # Ok::<(), ClueError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueAnswer {
    /// Identifier of this clue.
    #[serde(default)]
    pub id: ClueId,
    /// Clue text shown to the solver.
    pub clue: String,
    /// The answer to place in the grid.
    pub answer: Answer,
}

impl ClueAnswer {
    /// Creates a clue from an already validated answer.
    ///
    /// # Errors
    ///
    /// Returns [`ClueError::EmptyClue`] if `clue` is empty or whitespace only.
    pub fn new(id: ClueId, clue: impl Into<String>, answer: Answer) -> Result<Self, ClueError> {
        let clue = clue.into();
        if clue.trim().is_empty() {
            return Err(ClueError::EmptyClue);
        }
        Ok(Self { id, clue, answer })
    }

    /// Creates a clue from raw author input, normalizing the answer with
    /// [`Answer::normalize`].
    ///
    /// # Errors
    ///
    /// Returns [`ClueError::EmptyClue`] for a blank clue and
    /// [`ClueError::Answer`] if the normalized answer is invalid.
    pub fn from_raw(id: ClueId, clue: impl Into<String>, answer: &str) -> Result<Self, ClueError> {
        let answer = Answer::normalize(answer)?;
        Self::new(id, clue, answer)
    }
}
