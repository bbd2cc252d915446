//! Four-in-a-row detection around a freshly placed piece.
//!
//! Every axis is a pair of opposite rays. The run along an axis is the number of
//! matching slots walking each ray from the placed piece, with the piece itself
//! counted once.

use super::{Board, Direction, PlayerMark, Slot};

/// Pieces in a row needed to win.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// bottom-left to top-right, /
    DiagonalUp,
    /// top-left to bottom-right, \
    DiagonalDown,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalUp,
        Axis::DiagonalDown,
    ];

    /// The two opposite rays of this axis, each a sequence of orthogonal steps
    fn rays(self) -> (&'static [Direction], &'static [Direction]) {
        use Direction::*;
        match self {
            Axis::Horizontal => (&[Left], &[Right]),
            Axis::Vertical => (&[Down], &[Up]),
            Axis::DiagonalUp => (&[Down, Left], &[Up, Right]),
            Axis::DiagonalDown => (&[Down, Right], &[Up, Left]),
        }
    }
}

fn step(board: &Board, from: (usize, usize), ray: &[Direction]) -> Option<(usize, usize)> {
    ray.iter()
        .try_fold(from, |(row, col), &dir| board.neighbor(row, col, dir))
}

/// Matching slots along a ray, starting with (and including) the origin
fn ray_coords(
    board: &Board,
    row: usize,
    col: usize,
    mark: PlayerMark,
    ray: &[Direction],
) -> Vec<(usize, usize)> {
    let mut coords = Vec::new();
    let mut pos = Some((row, col));
    while let Some((r, c)) = pos {
        if board.occupant(r, c) != Ok(Slot::Occupied(mark)) {
            break;
        }
        coords.push((r, c));
        pos = step(board, (r, c), ray);
    }
    coords
}

/// Length of the contiguous `mark` run through (row, col) along `axis`.
/// Zero if the slot itself does not hold `mark`.
pub fn run_length(board: &Board, row: usize, col: usize, mark: PlayerMark, axis: Axis) -> usize {
    let (back, forward) = axis.rays();
    let back = ray_coords(board, row, col, mark, back).len();
    let forward = ray_coords(board, row, col, mark, forward).len();
    // the origin starts both rays
    (back + forward).saturating_sub(1)
}

/// Check if the piece at (row, col) completes four in a row for `mark`
pub fn check(board: &Board, row: usize, col: usize, mark: PlayerMark) -> bool {
    Axis::ALL
        .iter()
        .any(|&axis| run_length(board, row, col, mark, axis) >= WIN_LENGTH)
}

/// Coordinates of the first winning run through (row, col), ordered along the axis
pub fn winning_line(
    board: &Board,
    row: usize,
    col: usize,
    mark: PlayerMark,
) -> Option<Vec<(usize, usize)>> {
    Axis::ALL.iter().find_map(|&axis| {
        let (back, forward) = axis.rays();
        let mut line = ray_coords(board, row, col, mark, back);
        line.reverse();
        line.extend(ray_coords(board, row, col, mark, forward).into_iter().skip(1));
        (line.len() >= WIN_LENGTH).then_some(line)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use PlayerMark::{PlayerOne, PlayerTwo};

    fn board_with(rows: usize, cols: usize, pieces: &[(usize, usize, PlayerMark)]) -> Board {
        let mut board = Board::new(rows, cols).unwrap();
        for &(row, col, mark) in pieces {
            board.set(row, col, Slot::Occupied(mark));
        }
        board
    }

    /// Whether any four-slot window through (row, col) is entirely `mark`
    fn brute_force(board: &Board, row: usize, col: usize, mark: PlayerMark) -> bool {
        let deltas: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
        for (dr, dc) in deltas {
            for start in -(WIN_LENGTH as isize - 1)..=0 {
                let all = (0..WIN_LENGTH as isize).all(|k| {
                    let r = row as isize + (start + k) * dr;
                    let c = col as isize + (start + k) * dc;
                    r >= 0
                        && c >= 0
                        && board.occupant(r as usize, c as usize)
                            == Ok(Slot::Occupied(mark))
                });
                if all {
                    return true;
                }
            }
        }
        false
    }

    #[test]
    fn test_horizontal_win_from_middle() {
        let board = board_with(
            6,
            7,
            &[(0, 1, PlayerOne), (0, 2, PlayerOne), (0, 3, PlayerOne), (0, 4, PlayerOne)],
        );
        for col in 1..=4 {
            assert!(check(&board, 0, col, PlayerOne));
        }
        assert_eq!(run_length(&board, 0, 2, PlayerOne, Axis::Horizontal), 4);
    }

    #[test]
    fn test_vertical_win_checked_both_ways() {
        let board = board_with(
            6,
            7,
            &[(1, 5, PlayerTwo), (2, 5, PlayerTwo), (3, 5, PlayerTwo), (4, 5, PlayerTwo)],
        );
        // the lowest piece only sees the run by walking up
        assert!(check(&board, 1, 5, PlayerTwo));
        assert!(check(&board, 4, 5, PlayerTwo));
    }

    #[test]
    fn test_diagonal_fixture_every_coordinate() {
        let run = [(0, 0), (1, 1), (2, 2), (3, 3)];
        let mut pieces: Vec<_> = run.iter().map(|&(r, c)| (r, c, PlayerOne)).collect();
        pieces.push((4, 4, PlayerTwo));
        let board = board_with(6, 7, &pieces);

        for &(row, col) in &run {
            assert!(check(&board, row, col, PlayerOne), "({row}, {col})");
        }
        assert!(!check(&board, 4, 4, PlayerTwo));
        assert_eq!(run_length(&board, 4, 4, PlayerTwo, Axis::DiagonalUp), 1);
    }

    #[test]
    fn test_diagonal_down_anchored_at_edge() {
        // \ from the top-left corner, blocked by the opponent at the fifth slot
        let board = board_with(
            6,
            7,
            &[
                (5, 0, PlayerTwo),
                (4, 1, PlayerTwo),
                (3, 2, PlayerTwo),
                (2, 3, PlayerTwo),
                (1, 4, PlayerOne),
            ],
        );
        assert!(check(&board, 3, 2, PlayerTwo));
        assert!(check(&board, 5, 0, PlayerTwo));
        assert_eq!(run_length(&board, 4, 1, PlayerTwo, Axis::DiagonalDown), 4);
        assert!(!check(&board, 1, 4, PlayerOne));
    }

    #[test]
    fn test_no_win_with_three() {
        let board = board_with(
            6,
            7,
            &[(0, 0, PlayerOne), (0, 1, PlayerOne), (0, 2, PlayerOne), (0, 3, PlayerTwo)],
        );
        assert!(!check(&board, 0, 1, PlayerOne));
        assert_eq!(run_length(&board, 0, 1, PlayerOne, Axis::Horizontal), 3);
    }

    #[test]
    fn test_gap_breaks_run() {
        let board = board_with(
            6,
            7,
            &[(0, 0, PlayerOne), (0, 1, PlayerOne), (0, 3, PlayerOne), (0, 4, PlayerOne)],
        );
        assert!(!check(&board, 0, 1, PlayerOne));
        assert!(!check(&board, 0, 3, PlayerOne));
    }

    #[test]
    fn test_wrong_mark_at_origin() {
        let board = board_with(6, 7, &[(0, 0, PlayerOne)]);
        assert!(!check(&board, 0, 0, PlayerTwo));
        assert_eq!(run_length(&board, 0, 0, PlayerTwo, Axis::Horizontal), 0);
        assert_eq!(run_length(&board, 3, 3, PlayerOne, Axis::Vertical), 0);
    }

    #[test]
    fn test_five_in_a_row_counts_once() {
        let pieces: Vec<_> = (0..5).map(|col| (2, col, PlayerOne)).collect();
        let board = board_with(6, 7, &pieces);
        assert_eq!(run_length(&board, 2, 2, PlayerOne, Axis::Horizontal), 5);
    }

    #[test]
    fn test_winning_line_is_ordered() {
        let board = board_with(
            6,
            7,
            &[(0, 3, PlayerOne), (1, 2, PlayerOne), (2, 1, PlayerOne), (3, 0, PlayerOne)],
        );
        assert_eq!(
            winning_line(&board, 1, 2, PlayerOne),
            Some(vec![(0, 3), (1, 2), (2, 1), (3, 0)])
        );
        assert_eq!(winning_line(&board, 1, 2, PlayerTwo), None);
    }

    #[test]
    fn test_matches_brute_force_on_random_boards() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..300 {
            let rows = rng.random_range(4..=13);
            let cols = rng.random_range(4..=14);
            let mut board = Board::new(rows, cols).unwrap();
            for row in 0..rows {
                for col in 0..cols {
                    let slot = match rng.random_range(0..3) {
                        0 => Slot::Empty,
                        1 => Slot::Occupied(PlayerOne),
                        _ => Slot::Occupied(PlayerTwo),
                    };
                    board.set(row, col, slot);
                }
            }

            for row in 0..rows {
                for col in 0..cols {
                    if let Ok(Slot::Occupied(mark)) = board.occupant(row, col) {
                        assert_eq!(
                            check(&board, row, col, mark),
                            brute_force(&board, row, col, mark),
                            "mismatch at ({row}, {col}) on {rows}x{cols}"
                        );
                    }
                }
            }
        }
    }
}
