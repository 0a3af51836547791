//! Validated crossword answers.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::Letter;

/// Minimum number of letters in an answer.
pub const MIN_ANSWER_LEN: usize = 2;

/// Errors produced when validating an answer.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AnswerError {
    /// The answer has fewer than [`MIN_ANSWER_LEN`] letters.
    #[display("answer must be at least 2 letters, got {len}")]
    TooShort {
        /// Number of letters found.
        len: usize,
    },
    /// The answer contains a character outside `A`-`Z`.
    #[display("invalid character {ch:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Character index of the offending character.
        index: usize,
    },
}

/// A crossword answer: two or more uppercase letters `A`-`Z`.
///
/// The invariant is checked on construction, so the engine can index letters
/// without further validation.
///
/// # Examples
///
/// ```
/// use crossgrid_core::{Answer, AnswerError};
///
/// let answer = Answer::new("COLD")?;
/// assert_eq!(answer.len(), 4);
/// assert_eq!(answer.letter(0).as_char(), 'C');
///
/// // Authoring input is uppercased and stripped of non-letters first.
/// let answer = Answer::normalize("ice cream!")?;
/// assert_eq!(answer.as_str(), "ICECREAM");
///
/// assert_eq!(Answer::new("A"), Err(AnswerError::TooShort { len: 1 }));
/// # Ok::<(), AnswerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Answer(String);

impl Answer {
    /// Validates `text` as an answer.
    ///
    /// # Errors
    ///
    /// Returns [`AnswerError::InvalidCharacter`] for the first character that
    /// is not an uppercase ASCII letter, or [`AnswerError::TooShort`] if the
    /// answer has fewer than [`MIN_ANSWER_LEN`] letters.
    pub fn new(text: impl Into<String>) -> Result<Self, AnswerError> {
        let text = text.into();
        if let Some((index, ch)) = text
            .chars()
            .enumerate()
            .find(|(_, ch)| Letter::from_char(*ch).is_none())
        {
            return Err(AnswerError::InvalidCharacter { ch, index });
        }
        if text.len() < MIN_ANSWER_LEN {
            return Err(AnswerError::TooShort { len: text.len() });
        }
        Ok(Self(text))
    }

    /// Normalizes free-form input into an answer.
    ///
    /// The input is uppercased and every character outside `A`-`Z` is dropped
    /// before validation, so `"ice cream"` becomes `ICECREAM`.
    ///
    /// # Errors
    ///
    /// Returns [`AnswerError::TooShort`] if fewer than [`MIN_ANSWER_LEN`]
    /// letters remain.
    pub fn normalize(raw: &str) -> Result<Self, AnswerError> {
        let text = raw
            .chars()
            .flat_map(char::to_uppercase)
            .filter(char::is_ascii_uppercase)
            .collect::<String>();
        Self::new(text)
    }

    /// Returns the number of letters.
    #[must_use]
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the letter at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    #[inline]
    pub fn letter(&self, index: usize) -> Letter {
        let byte = self.0.as_bytes()[index];
        Letter::from_byte(byte).unwrap_or_else(|| unreachable!("answer holds only A-Z"))
    }

    /// Returns an iterator over the letters in order.
    pub fn letters(&self) -> impl ExactSizeIterator<Item = Letter> + '_ {
        self.0.bytes().map(|byte| {
            Letter::from_byte(byte).unwrap_or_else(|| unreachable!("answer holds only A-Z"))
        })
    }

    /// Returns the answer text.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Answer {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Answer {
    type Error = AnswerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Answer> for String {
    fn from(answer: Answer) -> Self {
        answer.0
    }
}

impl AsRef<str> for Answer {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
