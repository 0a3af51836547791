//! Seeds that make generation reproducible.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;

/// Seed for reproducible crossword generation.
///
/// A seed fixes every random choice the generator makes, so the same clues,
/// size and seed always yield the same crossword. Seeds print as 64 lowercase
/// hex digits and parse back from the same form.
///
/// # Examples
///
/// ```
/// use crossgrid_generator::GridSeed;
///
/// let seed = GridSeed::random();
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<GridSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSeed([u8; 32]);

/// Errors produced when parsing a [`GridSeed`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The input contains a non-hex character.
    #[display("seed contains a non-hex digit at index {index}")]
    InvalidHex {
        /// Index of the first byte pair that failed to parse.
        index: usize,
    },
}

impl GridSeed {
    /// Draws a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the random generator driven by this seed.
    #[must_use]
    pub fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for GridSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hex = String::with_capacity(64);
        for byte in self.0 {
            write!(hex, "{byte:02x}")?;
        }
        f.write_str(&hex)
    }
}

impl FromStr for GridSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::InvalidLength { len });
        }
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let index = i * 2;
            *byte = s
                .get(index..index + 2)
                .filter(|pair| pair.bytes().all(|b| b.is_ascii_hexdigit()))
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or(SeedParseError::InvalidHex { index })?;
        }
        Ok(Self(bytes))
    }
}
