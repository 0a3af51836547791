//! Candidate filtering and ordering.

use std::cmp::Reverse;

use crossgrid_core::{ClueAnswer, MIN_ANSWER_LEN};

/// Returns the longest answer that fits a `size × size` grid.
///
/// Every fittable word keeps at least one cell of margin on each side, so the
/// bound is `size - 2`.
#[must_use]
#[inline]
pub const fn max_answer_len(size: usize) -> usize {
    size.saturating_sub(2)
}

/// Selects the entries that can be placed and orders them for placement.
///
/// Entries whose answer length lies outside `2..=size - 2` are discarded. The
/// rest are sorted by answer length, longest first; entries of equal length
/// keep their input order.
///
/// # Examples
///
/// ```
/// use crossgrid_core::{ClueAnswer, ClueId};
/// use crossgrid_generator::normalizer;
///
/// let clues = [
///     ClueAnswer::from_raw(ClueId(1), "Feline pet", "CAT")?,
///     ClueAnswer::from_raw(ClueId(2), "Opposite of hot", "COLD")?,
///     ClueAnswer::from_raw(ClueId(3), "Far too long", "EXTRAORDINARY")?,
/// ];
/// let ordered = normalizer::normalize(&clues, 10);
/// let answers = ordered.iter().map(|c| c.answer.as_str()).collect::<Vec<_>>();
/// assert_eq!(answers, ["COLD", "CAT"]);
/// # Ok::<(), crossgrid_core::ClueError>(())
/// ```
#[must_use]
pub fn normalize(clues: &[ClueAnswer], size: usize) -> Vec<&ClueAnswer> {
    let fits = MIN_ANSWER_LEN..=max_answer_len(size);
    let mut entries = clues
        .iter()
        .filter(|entry| fits.contains(&entry.answer.len()))
        .collect::<Vec<_>>();
    // `sort_by_key` is stable, so equal lengths keep input order.
    entries.sort_by_key(|entry| Reverse(entry.answer.len()));
    entries
}
