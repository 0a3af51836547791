//! Crossword letter representation.

use std::fmt::{self, Display};

/// A single uppercase ASCII letter in the range `A`-`Z`.
///
/// Every filled cell of a [`LetterGrid`](crate::LetterGrid) holds exactly one
/// `Letter`, and every [`Answer`](crate::Answer) is a sequence of them.
///
/// # Examples
///
/// ```
/// use crossgrid_core::Letter;
///
/// let letter = Letter::from_char('Q').unwrap();
/// assert_eq!(letter.as_char(), 'Q');
/// assert_eq!(letter.index(), 16);
///
/// assert!(Letter::from_char('q').is_none());
/// assert!(Letter::from_char('7').is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// The letter `A`.
    pub const A: Self = Self(b'A');
    /// The letter `Z`.
    pub const Z: Self = Self(b'Z');

    /// Creates a letter from an uppercase ASCII byte.
    ///
    /// Returns `None` if `byte` is not in `b'A'..=b'Z'`.
    #[must_use]
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_uppercase() {
            Some(Self(byte))
        } else {
            None
        }
    }

    /// Creates a letter from an uppercase ASCII character.
    ///
    /// Lowercase letters are rejected; normalization is the caller's job
    /// (see [`Answer::normalize`](crate::Answer::normalize)).
    #[must_use]
    #[inline]
    pub fn from_char(ch: char) -> Option<Self> {
        u8::try_from(ch).ok().and_then(Self::from_byte)
    }

    /// Returns the letter as a `char`.
    #[must_use]
    #[inline]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Returns the letter as an ASCII byte.
    #[must_use]
    #[inline]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    /// Returns the zero-based alphabet index (`A` = 0, `Z` = 25).
    #[must_use]
    #[inline]
    pub const fn index(self) -> u8 {
        self.0 - b'A'
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}
