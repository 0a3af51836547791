//! Placement search: intersections first, random fallback second.

use crossgrid_core::{Answer, Direction, LetterGrid, PlacedWord, Position};
use rand::RngExt;

use crate::{
    placement::{Placement, PlacementCandidate},
    validator,
};

/// Finds a legal placement for `answer`, or `None` if the word must be
/// dropped.
///
/// Intersections with `placed` words are tried first and the best candidate
/// wins (see [`best_candidate`]). Only when no intersection is legal does the
/// search fall back to up to `random_attempts` random placements.
pub fn find_placement<R>(
    grid: &LetterGrid,
    answer: &Answer,
    placed: &[PlacedWord],
    random_attempts: usize,
    rng: &mut R,
) -> Option<Placement>
where
    R: RngExt + ?Sized,
{
    let candidates = intersection_candidates(grid, answer, placed);
    log::trace!("{answer}: {} intersection candidates", candidates.len());
    if let Some(best) = best_candidate(&candidates) {
        return Some(best.placement);
    }
    let placement = random_placement(grid, placed, answer, random_attempts, rng);
    if placement.is_some() {
        log::trace!("{answer}: placed by random fallback");
    }
    placement
}

/// Enumerates every legal placement of `answer` crossing a placed word.
///
/// For each placed word, each letter position `i` in it and each position `j`
/// in `answer` where the letters match, the new word is proposed in the
/// opposite direction so that its `j`-th letter lands on the placed word's
/// `i`-th cell. Proposals that fail [`validator::can_place`] or leave the
/// grid's top/left edge are skipped, as are repeats of an earlier proposal.
///
/// Candidates are returned in discovery order: placed words in placement
/// order, then increasing `i`, then increasing `j`. Each records a single
/// intersection.
#[must_use]
pub fn intersection_candidates(
    grid: &LetterGrid,
    answer: &Answer,
    placed: &[PlacedWord],
) -> Vec<PlacementCandidate> {
    let mut candidates: Vec<PlacementCandidate> = Vec::new();
    for word in placed {
        for (i, existing) in word.answer.letters().enumerate() {
            for (j, letter) in answer.letters().enumerate() {
                if existing != letter {
                    continue;
                }
                let Some(placement) = crossing(word, i, j) else {
                    continue;
                };
                if candidates.iter().any(|c| c.placement == placement) {
                    continue;
                }
                if validator::can_place(grid, placed, answer, placement) {
                    candidates.push(PlacementCandidate {
                        placement,
                        intersections: 1,
                    });
                }
            }
        }
    }
    candidates
}

/// Places the new word across `word` so that its `j`-th letter sits on
/// `word`'s `i`-th cell.
fn crossing(word: &PlacedWord, i: usize, j: usize) -> Option<Placement> {
    let (row, col) = match word.direction {
        Direction::Across => (word.row.checked_sub(j)?, word.col + i),
        Direction::Down => (word.row + i, word.col.checked_sub(j)?),
    };
    Some(Placement::new(
        Position::new(row, col),
        word.direction.opposite(),
    ))
}

/// Picks the candidate with the most intersections.
///
/// Ties go to the candidate discovered first.
#[must_use]
pub fn best_candidate(candidates: &[PlacementCandidate]) -> Option<&PlacementCandidate> {
    candidates.iter().reduce(|best, candidate| {
        if candidate.intersections > best.intersections {
            candidate
        } else {
            best
        }
    })
}

/// Tries up to `attempts` uniformly random placements of `answer`.
///
/// Each attempt draws a direction, then a row and a column among those that
/// keep the whole word inside the grid, and returns the first one accepted by
/// [`validator::can_place`].
pub fn random_placement<R>(
    grid: &LetterGrid,
    placed: &[PlacedWord],
    answer: &Answer,
    attempts: usize,
    rng: &mut R,
) -> Option<Placement>
where
    R: RngExt + ?Sized,
{
    let size = grid.size();
    let len = answer.len();
    if len > size {
        return None;
    }
    let starts = size - len + 1;
    for _ in 0..attempts {
        let direction = if rng.random_bool(0.5) {
            Direction::Across
        } else {
            Direction::Down
        };
        let (rows, cols) = match direction {
            Direction::Across => (size, starts),
            Direction::Down => (starts, size),
        };
        let row = rng.random_range(0..rows);
        let col = rng.random_range(0..cols);
        let placement = Placement::new(Position::new(row, col), direction);
        if validator::can_place(grid, placed, answer, placement) {
            return Some(placement);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use crossgrid_core::ClueId;

    use super::*;
    use crate::GridSeed;

    fn placed(answer: &str, row: usize, col: usize, direction: Direction) -> PlacedWord {
        PlacedWord {
            answer: Answer::new(answer).unwrap(),
            clue: String::new(),
            clue_id: ClueId::default(),
            row,
            col,
            direction,
            number: 1,
        }
    }

    fn at(row: usize, col: usize, direction: Direction) -> Placement {
        Placement::new(Position::new(row, col), direction)
    }

    fn grid_with(words: &[PlacedWord], size: usize) -> LetterGrid {
        let mut grid = LetterGrid::new(size);
        for word in words {
            for (pos, letter) in word.cells() {
                grid.set(pos, letter);
            }
        }
        grid
    }

    #[test]
    fn test_crossing_geometry() {
        let across = placed("COLD", 5, 3, Direction::Across);
        assert_eq!(crossing(&across, 0, 0), Some(at(5, 3, Direction::Down)));
        assert_eq!(crossing(&across, 2, 1), Some(at(4, 5, Direction::Down)));
        assert_eq!(crossing(&across, 0, 6), None);

        let down = placed("CAT", 2, 4, Direction::Down);
        assert_eq!(crossing(&down, 1, 2), Some(at(3, 2, Direction::Across)));
        assert_eq!(crossing(&down, 0, 5), None);
    }

    #[test]
    fn test_candidates_in_discovery_order() {
        let words = [placed("COLD", 5, 3, Direction::Across)];
        let grid = grid_with(&words, 10);
        let answer = Answer::new("CLOD").unwrap();
        let found = intersection_candidates(&grid, &answer, &words)
            .into_iter()
            .map(|c| c.placement)
            .collect::<Vec<_>>();
        // C(0)-C(0), O(1)-O(2), L(2)-L(1), D(3)-D(3)
        assert_eq!(
            found,
            [
                at(5, 3, Direction::Down),
                at(3, 4, Direction::Down),
                at(4, 5, Direction::Down),
                at(2, 6, Direction::Down),
            ]
        );
    }

    #[test]
    fn test_candidates_skip_illegal() {
        // Every shared letter would start BAT above the top edge.
        let words = [placed("AT", 0, 2, Direction::Across)];
        let grid = grid_with(&words, 6);
        let answer = Answer::new("BAT").unwrap();
        let found = intersection_candidates(&grid, &answer, &words);
        assert!(found.is_empty());
    }

    #[test]
    fn test_candidates_are_deduplicated() {
        // CAT down at (2, 5) crosses both XC and TY; it is reported once.
        let words = [
            placed("XC", 2, 4, Direction::Across),
            placed("TY", 4, 5, Direction::Across),
        ];
        let grid = grid_with(&words, 8);
        let answer = Answer::new("CAT").unwrap();
        let found = intersection_candidates(&grid, &answer, &words);
        assert_eq!(
            found,
            [PlacementCandidate {
                placement: at(2, 5, Direction::Down),
                intersections: 1,
            }]
        );
    }

    #[test]
    fn test_best_candidate_prefers_first_on_ties() {
        let candidates = [
            PlacementCandidate {
                placement: at(0, 0, Direction::Across),
                intersections: 1,
            },
            PlacementCandidate {
                placement: at(1, 0, Direction::Across),
                intersections: 2,
            },
            PlacementCandidate {
                placement: at(2, 0, Direction::Across),
                intersections: 2,
            },
        ];
        assert_eq!(
            best_candidate(&candidates).map(|c| c.placement),
            Some(at(1, 0, Direction::Across))
        );
        assert_eq!(
            best_candidate(&candidates[..1]).map(|c| c.placement),
            Some(at(0, 0, Direction::Across))
        );
        assert_eq!(best_candidate(&[]), None);
    }

    #[test]
    fn test_random_placement_is_legal() {
        let words = [placed("COLD", 5, 3, Direction::Across)];
        let grid = grid_with(&words, 10);
        let answer = Answer::new("FIZZ").unwrap();
        let mut rng = GridSeed::from_bytes([1; 32]).rng();
        for _ in 0..20 {
            if let Some(placement) = random_placement(&grid, &words, &answer, 50, &mut rng) {
                assert!(validator::can_place(&grid, &words, &answer, placement));
            }
        }
    }

    #[test]
    fn test_random_placement_gives_up() {
        // Every row and column is blocked by the filled grid.
        let grid: LetterGrid = "QQQQ\nQQQQ\nQQQQ\nQQQQ".parse().unwrap();
        let answer = Answer::new("AB").unwrap();
        let mut rng = GridSeed::from_bytes([2; 32]).rng();
        assert_eq!(random_placement(&grid, &[], &answer, 50, &mut rng), None);
        assert_eq!(
            random_placement(&LetterGrid::new(1), &[], &answer, 50, &mut rng),
            None
        );
        assert_eq!(
            random_placement(&LetterGrid::new(5), &[], &answer, 0, &mut rng),
            None
        );
    }

    fn random_draws(size: usize, len: usize, draws: usize) -> Vec<Placement> {
        let grid = LetterGrid::new(size);
        let answer = Answer::new("A".repeat(len)).unwrap();
        let mut rng = GridSeed::from_bytes([4; 32]).rng();
        // On a blank grid every in-bounds draw is accepted on its first attempt.
        (0..draws)
            .map(|_| random_placement(&grid, &[], &answer, 1, &mut rng).unwrap())
            .collect()
    }

    /// Splits a start into its index along the word and across it.
    fn along_across(placement: Placement) -> (usize, usize) {
        let Position { row, col } = placement.position;
        match placement.direction {
            Direction::Across => (col, row),
            Direction::Down => (row, col),
        }
    }

    #[test]
    fn test_random_placement_reaches_last_start() {
        let (size, len) = (10, 3);
        let draws = random_draws(size, len, 4000);
        for direction in [Direction::Across, Direction::Down] {
            let starts = draws
                .iter()
                .filter(|p| p.direction == direction)
                .map(|p| along_across(*p))
                .collect::<Vec<_>>();
            let max_along = starts.iter().map(|(along, _)| *along).max();
            let max_across = starts.iter().map(|(_, across)| *across).max();
            assert_eq!(max_along, Some(size - len), "{direction}");
            assert_eq!(max_across, Some(size - 1), "{direction}");
            assert!(starts.contains(&(0, 0)), "{direction}");
        }
    }

    #[test]
    fn test_random_placement_stays_in_range() {
        for (size, len) in [(10, 3), (6, 4), (5, 5), (4, 2)] {
            for placement in random_draws(size, len, 500) {
                let (along, across) = along_across(placement);
                assert!(along <= size - len, "{placement:?} on {size}x{size}");
                assert!(across < size, "{placement:?} on {size}x{size}");
            }
        }
    }

    #[test]
    fn test_find_placement_prefers_intersection() {
        let words = [placed("COLD", 5, 3, Direction::Across)];
        let grid = grid_with(&words, 10);
        let answer = Answer::new("CAT").unwrap();
        let mut rng = GridSeed::from_bytes([3; 32]).rng();
        assert_eq!(
            find_placement(&grid, &answer, &words, 50, &mut rng),
            Some(at(5, 3, Direction::Down))
        );
    }
}
