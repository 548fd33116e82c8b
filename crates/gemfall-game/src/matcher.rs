//! Row and column match detection.

use std::collections::BTreeSet;

use gemfall_core::CellPos;

use crate::{board::Board, token::TokenType};

/// Finds every cell participating in a run of three or more same-type tokens.
///
/// Scans every row and every column for maximal runs of at least three
/// consecutive occupied cells sharing a token type (identity equality), and
/// returns the deduplicated union of their cells. A cell that sits in both a
/// row run and a column run appears once. Empty cells break runs.
///
/// The result depends only on the current board contents; it is recomputed
/// fresh on every call and never carries state between cascade steps.
#[must_use]
pub fn find_matches(board: &Board) -> BTreeSet<CellPos> {
    let mut matches = BTreeSet::new();
    let width = board.width() as i32;
    let height = board.height() as i32;

    for y in 0..height {
        scan_line((0..width).map(|x| CellPos::new(x, y)), board, &mut matches);
    }
    for x in 0..width {
        scan_line((0..height).map(|y| CellPos::new(x, y)), board, &mut matches);
    }

    matches
}

/// Feeds one row or column through a run accumulator.
fn scan_line(
    line: impl Iterator<Item = CellPos>,
    board: &Board,
    matches: &mut BTreeSet<CellPos>,
) {
    let mut run: Vec<CellPos> = Vec::new();
    let mut run_type: Option<TokenType> = None;

    for pos in line {
        let token_type = board.token_type(pos);
        if token_type.is_some() && token_type == run_type {
            run.push(pos);
            continue;
        }
        flush_run(&run, matches);
        run.clear();
        run_type = token_type;
        if token_type.is_some() {
            run.push(pos);
        }
    }
    flush_run(&run, matches);
}

fn flush_run(run: &[CellPos], matches: &mut BTreeSet<CellPos>) {
    if run.len() >= 3 {
        matches.extend(run.iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use gemfall_core::{CoordinateConverter, Orientation, Point};

    use super::*;
    use crate::token::{AppearanceId, Token, TokenTypeId, VisualId};

    /// Builds a board from rows listed top to bottom; letters are type ids,
    /// `.` is an empty cell.
    fn board_from_rows(rows: &[&str]) -> Board {
        let height = u32::try_from(rows.len()).unwrap();
        let width = u32::try_from(rows[0].len()).unwrap();
        let converter = CoordinateConverter::new(1.0, Point::ZERO, Orientation::Flat);
        let mut board = Board::new(width, height, converter);
        let mut next_visual = 0;
        for (row_index, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let id = TokenTypeId::new(u16::try_from(ch as u32 - 'a' as u32).unwrap());
                let token_type = TokenType::new(id, AppearanceId::new(0));
                let pos = CellPos::new(
                    i32::try_from(x).unwrap(),
                    i32::try_from(rows.len() - 1 - row_index).unwrap(),
                );
                board.set(pos, Some(Token::new(token_type, VisualId::new(next_visual))));
                next_visual += 1;
            }
        }
        board
    }

    fn positions(cells: &[(i32, i32)]) -> BTreeSet<CellPos> {
        cells.iter().map(|&(x, y)| CellPos::new(x, y)).collect()
    }

    #[test]
    fn test_horizontal_run_of_three() {
        let board = board_from_rows(&[
            "bcbc", //
            "aaab",
        ]);
        assert_eq!(
            find_matches(&board),
            positions(&[(0, 0), (1, 0), (2, 0)])
        );
    }

    #[test]
    fn test_no_false_positives() {
        let board = board_from_rows(&[
            "abc", //
            "bca",
            "cab",
        ]);
        assert!(find_matches(&board).is_empty());
    }

    #[test]
    fn test_vertical_run_of_three() {
        let board = board_from_rows(&[
            "ab", //
            "ac",
            "ab",
        ]);
        assert_eq!(
            find_matches(&board),
            positions(&[(0, 0), (0, 1), (0, 2)])
        );
    }

    #[test]
    fn test_longer_runs_are_included_whole() {
        let board = board_from_rows(&[
            "bcbcb", //
            "aaaaa",
        ]);
        assert_eq!(
            find_matches(&board),
            positions(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)])
        );
    }

    #[test]
    fn test_crossing_runs_deduplicate_shared_cell() {
        let board = board_from_rows(&[
            "bab", //
            "aaa",
            "bab",
        ]);
        // Row run (0..=2, 1) and column run (1, 0..=2) share cell (1, 1).
        assert_eq!(
            find_matches(&board),
            positions(&[(0, 1), (1, 1), (2, 1), (1, 0), (1, 2)])
        );
    }

    #[test]
    fn test_empty_cells_break_runs() {
        let board = board_from_rows(&[
            "ccc", //
            "a.a",
            "aba",
        ]);
        // The hole at (1, 1) splits its row and keeps both side columns at
        // two-in-a-row; only the top row matches.
        assert_eq!(
            find_matches(&board),
            positions(&[(0, 2), (1, 2), (2, 2)])
        );
    }

    #[test]
    fn test_two_in_a_row_is_not_a_match() {
        let board = board_from_rows(&[
            "aab", //
            "bba",
        ]);
        assert!(find_matches(&board).is_empty());
    }
}
