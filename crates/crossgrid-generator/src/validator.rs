//! Legality checks for proposed placements.

use crossgrid_core::{Answer, LetterGrid, PlacedWord};

use crate::placement::Placement;

/// Returns `true` if `answer` may be written at `placement`.
///
/// A placement is legal when:
///
/// - the whole word lies inside the grid;
/// - every spanned cell is empty or already holds the letter the word needs
///   there;
/// - the cells immediately before the first letter and after the last letter,
///   along the word's direction, are empty or outside the grid;
/// - none of the spanned cells is the cell just before or just after a word in
///   `placed`, along that word's direction.
///
/// Cells beside the word (perpendicular to its direction) are otherwise not
/// inspected, so parallel words may touch.
///
/// # Examples
///
/// ```
/// use crossgrid_core::{Answer, ClueId, Direction, LetterGrid, PlacedWord, Position};
/// use crossgrid_generator::{Placement, validator};
///
/// let grid: LetterGrid = "
///     .....
///     .....
///     .COL.
///     .....
///     .....
/// "
/// .parse()?;
/// let col = PlacedWord {
///     answer: Answer::new("COL")?,
///     clue: "Mountain pass".to_owned(),
///     clue_id: ClueId(1),
///     row: 2,
///     col: 1,
///     direction: Direction::Across,
///     number: 1,
/// };
/// let placed = [col];
/// let cat = Answer::new("CAT")?;
///
/// // Crosses the C of COL.
/// let down = Placement::new(Position::new(2, 1), Direction::Down);
/// assert!(validator::can_place(&grid, &placed, &cat, down));
///
/// // Would overwrite the O of COL.
/// let clash = Placement::new(Position::new(1, 2), Direction::Down);
/// assert!(!validator::can_place(&grid, &placed, &cat, clash));
///
/// // Would turn COL into COLT.
/// let extends = Placement::new(Position::new(0, 4), Direction::Down);
/// assert!(!validator::can_place(&grid, &placed, &cat, extends));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn can_place(
    grid: &LetterGrid,
    placed: &[PlacedWord],
    answer: &Answer,
    placement: Placement,
) -> bool {
    fits(grid, answer, placement)
        && letters_agree(grid, answer, placement)
        && is_isolated(grid, answer, placement)
        && keeps_placed_isolated(placed, answer, placement)
}

fn fits(grid: &LetterGrid, answer: &Answer, placement: Placement) -> bool {
    let last = placement
        .position
        .offset(placement.direction, answer.len().saturating_sub(1));
    grid.contains(placement.position) && grid.contains(last)
}

fn letters_agree(grid: &LetterGrid, answer: &Answer, placement: Placement) -> bool {
    answer.letters().enumerate().all(|(i, letter)| {
        let pos = placement.position.offset(placement.direction, i);
        grid.cell(pos).is_none_or(|existing| existing == letter)
    })
}

fn is_isolated(grid: &LetterGrid, answer: &Answer, placement: Placement) -> bool {
    let before = placement.position.before(placement.direction);
    let after = placement.end_exclusive(answer.len());
    before.is_none_or(|pos| grid.cell(pos).is_none()) && grid.cell(after).is_none()
}

fn keeps_placed_isolated(placed: &[PlacedWord], answer: &Answer, placement: Placement) -> bool {
    (0..answer.len()).all(|i| {
        let pos = Some(placement.position.offset(placement.direction, i));
        placed.iter().all(|word| !word.end_caps().contains(&pos))
    })
}

#[cfg(test)]
mod tests {
    use crossgrid_core::{ClueId, ConsistencyError, Crossword, Direction, Position};

    use super::*;

    fn grid(text: &str) -> LetterGrid {
        text.parse().unwrap()
    }

    fn answer(text: &str) -> Answer {
        Answer::new(text).unwrap()
    }

    fn at(row: usize, col: usize, direction: Direction) -> Placement {
        Placement::new(Position::new(row, col), direction)
    }

    fn word(text: &str, row: usize, col: usize, direction: Direction) -> PlacedWord {
        PlacedWord {
            answer: answer(text),
            clue: String::new(),
            clue_id: ClueId::default(),
            row,
            col,
            direction,
            number: 1,
        }
    }

    fn grid_of(words: &[PlacedWord], size: usize) -> LetterGrid {
        let mut grid = LetterGrid::new(size);
        for word in words {
            for (pos, letter) in word.cells() {
                grid.set(pos, letter);
            }
        }
        grid
    }

    #[test]
    fn test_bounds() {
        let grid = LetterGrid::new(5);
        let word = answer("ABC");
        assert!(can_place(&grid, &[], &word, at(0, 0, Direction::Across)));
        assert!(can_place(&grid, &[], &word, at(4, 2, Direction::Across)));
        assert!(!can_place(&grid, &[], &word, at(4, 3, Direction::Across)));
        assert!(can_place(&grid, &[], &word, at(2, 4, Direction::Down)));
        assert!(!can_place(&grid, &[], &word, at(3, 4, Direction::Down)));
        assert!(!can_place(&grid, &[], &word, at(5, 0, Direction::Across)));
        assert!(!can_place(&grid, &[], &word, at(0, 5, Direction::Down)));
    }

    #[test]
    fn test_letter_conflicts() {
        let grid = grid(
            "
            .....
            .....
            .COL.
            .....
            .....
            ",
        );
        // Shares the L.
        assert!(can_place(&grid, &[], &answer("OLD"), at(1, 3, Direction::Down)));
        // Would put D on the L.
        assert!(!can_place(&grid, &[], &answer("OLD"), at(0, 3, Direction::Down)));
    }

    #[test]
    fn test_isolation_along_direction() {
        let grid = grid(
            "
            .......
            .......
            ..HI...
            .......
            .......
            .......
            .......
            ",
        );
        // Ends flush against H.
        assert!(!can_place(&grid, &[], &answer("AB"), at(2, 0, Direction::Across)));
        // Starts flush after I.
        assert!(!can_place(&grid, &[], &answer("AB"), at(2, 4, Direction::Across)));
        // One empty cell of gap on either side is fine.
        assert!(can_place(&grid, &[], &answer("AB"), at(2, 5, Direction::Across)));
        // Down word ending just above the H.
        assert!(!can_place(&grid, &[], &answer("AB"), at(0, 2, Direction::Down)));
        // Down word starting just below the I.
        assert!(!can_place(&grid, &[], &answer("AB"), at(3, 3, Direction::Down)));
    }

    #[test]
    fn test_parallel_adjacency_is_allowed() {
        let placed = [word("COL", 2, 1, Direction::Across)];
        let grid = grid_of(&placed, 5);
        // Directly below COL, touching it side by side.
        assert!(can_place(&grid, &placed, &answer("ABC"), at(3, 1, Direction::Across)));
        // Directly above the O and L.
        assert!(can_place(&grid, &placed, &answer("AB"), at(1, 2, Direction::Across)));
        // Would run through the cell before the C, making YCOL.
        assert!(!can_place(&grid, &placed, &answer("XYZ"), at(1, 0, Direction::Down)));
    }

    #[test]
    fn test_placed_word_ends_stay_empty() {
        let placed = [word("COLD", 5, 3, Direction::Across)];
        let grid = grid_of(&placed, 10);
        let xyz = answer("XYZ");
        // Own ends are clear, but Y would land right after the D.
        assert!(!can_place(&grid, &placed, &xyz, at(4, 7, Direction::Down)));
        // Y would land right before the C.
        assert!(!can_place(&grid, &placed, &xyz, at(4, 2, Direction::Down)));
        // One column further out leaves a gap.
        assert!(can_place(&grid, &placed, &xyz, at(4, 8, Direction::Down)));
        assert!(can_place(&grid, &placed, &xyz, at(4, 1, Direction::Down)));

        let placed = [word("CAT", 2, 4, Direction::Down)];
        let grid = grid_of(&placed, 8);
        // Would sit right under the T.
        assert!(!can_place(&grid, &placed, &answer("AB"), at(5, 3, Direction::Across)));
        // Would sit right above the C.
        assert!(!can_place(&grid, &placed, &answer("AB"), at(1, 4, Direction::Across)));
        // Diagonal to the T.
        assert!(can_place(&grid, &placed, &answer("AB"), at(5, 5, Direction::Across)));
    }

    #[test]
    fn test_rejected_extension_would_break_consistency() {
        let placed = vec![word("COLD", 5, 3, Direction::Across)];
        let mut grid = grid_of(&placed, 10);
        let extension = word("XYZ", 4, 7, Direction::Down);
        let placement = Placement::new(extension.position(), extension.direction);
        assert!(!can_place(&grid, &placed, &extension.answer, placement));

        for (pos, letter) in extension.cells() {
            grid.set(pos, letter);
        }
        let crossword = Crossword {
            words: [placed, vec![PlacedWord {
                number: 2,
                ..extension
            }]]
            .concat(),
            grid,
        };
        assert_eq!(
            crossword.check_consistency(),
            Err(ConsistencyError::NotIsolated {
                number: 1,
                pos: Position::new(5, 7),
            })
        );
    }

    #[test]
    fn test_grid_edges_count_as_isolated() {
        let grid = LetterGrid::new(4);
        assert!(can_place(&grid, &[], &answer("ABCD"), at(0, 0, Direction::Across)));
        assert!(can_place(&grid, &[], &answer("ABCD"), at(0, 3, Direction::Down)));
    }
}
