//! Crossword grid placement engine.
//!
//! This crate arranges clue/answer pairs into a single square grid of
//! intersecting words. Generation is a fixed pipeline:
//!
//! 1. [`normalizer`] drops answers that cannot fit and orders the rest,
//!    longest first.
//! 2. The longest answer is the seed word, placed across the middle of the
//!    grid ([`Layout::place_seed`]).
//! 3. Each following answer is handed to [`search`], which looks for a legal
//!    crossing with the words already placed ([`validator`] decides
//!    legality) and falls back to a bounded number of random placements.
//! 4. [`committer`] writes each accepted placement into the grid and numbers
//!    it in placement order.
//!
//! At most [`MAX_WORDS`] words are placed, and each word gets at most
//! [`MAX_RANDOM_ATTEMPTS`] random tries, so generation always terminates.
//! Words that cannot be placed are dropped; [`Crossword::unplaced`] lists
//! them.
//!
//! All randomness comes from the caller's generator or from a [`GridSeed`],
//! so runs are reproducible.
//!
//! # Examples
//!
//! ```
//! use crossgrid_core::{ClueAnswer, ClueId, Direction};
//! use crossgrid_generator::{CrosswordGenerator, GridSeed};
//!
//! let clues = [
//!     ClueAnswer::from_raw(ClueId(1), "Opposite of hot", "COLD")?,
//!     ClueAnswer::from_raw(ClueId(2), "Feline pet", "CAT")?,
//! ];
//!
//! let generator = CrosswordGenerator::new();
//! let generated = generator.generate(&clues, 10);
//! let crossword = &generated.crossword;
//!
//! assert_eq!(crossword.words.len(), 2);
//! assert_eq!(crossword.words[0].direction, Direction::Across);
//! assert_eq!(crossword.words[1].direction, Direction::Down);
//!
//! // The seed reproduces the same crossword.
//! let again = generator.generate_with_seed(&clues, 10, generated.seed);
//! assert_eq!(again.crossword, generated.crossword);
//! # Ok::<(), crossgrid_core::ClueError>(())
//! ```

use crossgrid_core::{ClueAnswer, Crossword};
use rand::RngExt;

pub use self::{
    committer::{Layout, LayoutState},
    placement::{Placement, PlacementCandidate},
    seed::{GridSeed, SeedParseError},
};

pub mod committer;
pub mod normalizer;
pub mod placement;
pub mod search;
mod seed;
pub mod validator;

/// Default cap on the number of placed words, seed word included.
pub const MAX_WORDS: usize = 10;

/// Default number of random placements tried for a word with no legal
/// crossing.
pub const MAX_RANDOM_ATTEMPTS: usize = 50;

/// Limits applied by a [`CrosswordGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Maximum number of words placed, seed word included.
    pub max_words: usize,
    /// Random placements tried per word before it is dropped.
    pub random_attempts: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            max_words: MAX_WORDS,
            random_attempts: MAX_RANDOM_ATTEMPTS,
        }
    }
}

/// A generated crossword together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCrossword {
    /// The generated crossword.
    pub crossword: Crossword,
    /// Seed that reproduces this crossword for the same clues and size.
    pub seed: GridSeed,
}

/// Crossword generator.
///
/// The generator holds only its [`GeneratorOptions`]; every call works on its
/// own grid, so one generator may serve any number of runs, including
/// parallel ones.
#[derive(Debug, Clone, Default)]
pub struct CrosswordGenerator {
    options: GeneratorOptions,
}

impl CrosswordGenerator {
    /// Creates a generator with the default caps ([`MAX_WORDS`],
    /// [`MAX_RANDOM_ATTEMPTS`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with custom caps.
    #[must_use]
    pub fn with_options(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Returns the caps in effect.
    #[must_use]
    pub fn options(&self) -> GeneratorOptions {
        self.options
    }

    /// Generates a crossword using a fresh random seed.
    ///
    /// The seed is returned alongside the crossword so the run can be
    /// reproduced with [`generate_with_seed`](Self::generate_with_seed).
    #[must_use]
    pub fn generate(&self, clues: &[ClueAnswer], size: usize) -> GeneratedCrossword {
        self.generate_with_seed(clues, size, GridSeed::random())
    }

    /// Generates a crossword from a specific seed.
    ///
    /// The same clues, size and seed always produce the same crossword.
    #[must_use]
    pub fn generate_with_seed(
        &self,
        clues: &[ClueAnswer],
        size: usize,
        seed: GridSeed,
    ) -> GeneratedCrossword {
        let mut rng = seed.rng();
        let crossword = self.generate_with_rng(clues, size, &mut rng);
        GeneratedCrossword { crossword, seed }
    }

    /// Generates a crossword drawing random choices from `rng`.
    ///
    /// Answers shorter than 2 or longer than `size - 2` letters are ignored.
    /// The longest remaining answer is placed across the middle of the grid;
    /// the others follow longest first, each crossing an earlier word where
    /// possible, placed at random otherwise, or dropped. An input with no
    /// usable answer yields a crossword with no words and a blank grid.
    pub fn generate_with_rng<R>(&self, clues: &[ClueAnswer], size: usize, rng: &mut R) -> Crossword
    where
        R: RngExt + ?Sized,
    {
        let entries = normalizer::normalize(clues, size);
        let Some((seed_entry, rest)) = entries.split_first() else {
            log::debug!("no answer fits a {size}x{size} grid");
            return Crossword::empty(size);
        };

        let mut layout = Layout::new(size, self.options.max_words);
        if layout.state() == LayoutState::Done {
            return layout.into_crossword();
        }

        let seed_word = layout.place_seed(seed_entry);
        log::debug!(
            "seed word {} placed across at ({}, {})",
            seed_word.answer,
            seed_word.row,
            seed_word.col
        );

        for entry in rest {
            if layout.state() == LayoutState::Done {
                log::debug!("word cap of {} reached", self.options.max_words);
                break;
            }
            let placement = search::find_placement(
                layout.grid(),
                &entry.answer,
                layout.words(),
                self.options.random_attempts,
                rng,
            );
            match placement {
                Some(placement) => {
                    let word = layout.commit(entry, placement);
                    log::debug!(
                        "word {} {} placed {} at ({}, {})",
                        word.number,
                        word.answer,
                        word.direction,
                        word.row,
                        word.col
                    );
                }
                None => log::debug!("no placement for {}, dropped", entry.answer),
            }
        }

        let crossword = layout.into_crossword();
        log::debug!(
            "placed {} of {} answers on a {size}x{size} grid",
            crossword.words.len(),
            clues.len()
        );
        crossword
    }
}
