//! Board representation and moves for the 3x3 sliding-tile puzzle.
//!
//! The board is a flat array of 9 tiles in row-major order where 0 marks
//! the blank. The goal configuration is 1..=8 followed by the blank in the
//! bottom-right corner.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Cells per row (and column).
const SIDE: u8 = 3;

/// A direction the blank can move.
///
/// `ALL` is also the successor expansion order. The order is not needed for
/// optimality, but it is fixed so that equal-cost solutions tie-break the
/// same way on every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Expansion order for successor generation.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row/column delta applied to the blank's position.
    #[inline]
    pub fn offset(self) -> (i8, i8) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// The move that undoes this one.
    pub fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Move::Up => "UP",
            Move::Down => "DOWN",
            Move::Left => "LEFT",
            Move::Right => "RIGHT",
        };
        write!(f, "{}", label)
    }
}

/// Rejected board input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The input did not contain exactly 9 tiles.
    WrongLength(usize),
    /// A tile value outside 0..=8, or a value seen twice.
    NotAPermutation(u8),
    /// A character that is not a tile digit or separator.
    InvalidToken(char),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::WrongLength(n) => write!(f, "expected 9 tiles, got {}", n),
            BoardError::NotAPermutation(v) => {
                write!(f, "tiles must be a permutation of 0..=8 (offending value {})", v)
            }
            BoardError::InvalidToken(c) => write!(f, "unexpected character {:?} in board", c),
        }
    }
}

impl std::error::Error for BoardError {}

/// A 3x3 board state.
///
/// Always a valid permutation of 0..=8 by construction; the blank index is
/// cached so move generation does not rescan the tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; CELLS],
    blank: u8,
}

impl Board {
    /// The solved configuration: 1..=8 with the blank bottom-right.
    pub const fn goal() -> Board {
        Board {
            tiles: [1, 2, 3, 4, 5, 6, 7, 8, 0],
            blank: 8,
        }
    }

    /// Validates and wraps a tile array.
    pub fn from_tiles(tiles: [u8; CELLS]) -> Result<Board, BoardError> {
        let mut seen = [false; CELLS];
        for &tile in &tiles {
            if tile as usize >= CELLS || seen[tile as usize] {
                return Err(BoardError::NotAPermutation(tile));
            }
            seen[tile as usize] = true;
        }
        // exactly one 0 is implied: all 9 values distinct in 0..=8
        let blank = tiles.iter().position(|&t| t == 0).unwrap_or(0) as u8;
        Ok(Board { tiles, blank })
    }

    /// The raw tiles in row-major order.
    #[inline]
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    #[inline]
    pub fn is_goal(&self) -> bool {
        *self == Board::goal()
    }

    /// Manhattan-distance heuristic: for every non-blank tile, the grid
    /// distance between its current cell and its goal cell.
    ///
    /// Never overestimates the true number of remaining moves, so A* using
    /// it returns optimal paths.
    pub fn manhattan(&self) -> u32 {
        let mut distance = 0u32;
        for (idx, &tile) in self.tiles.iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let goal = tile - 1;
            let row = idx as u8 / SIDE;
            let col = idx as u8 % SIDE;
            let goal_row = goal / SIDE;
            let goal_col = goal % SIDE;
            distance += row.abs_diff(goal_row) as u32 + col.abs_diff(goal_col) as u32;
        }
        distance
    }

    /// Returns the board with the blank moved one cell in `movement`,
    /// or `None` if that would leave the grid.
    pub fn slide(&self, movement: Move) -> Option<Board> {
        let (row_delta, col_delta) = movement.offset();
        let row = (self.blank / SIDE) as i8 + row_delta;
        let col = (self.blank % SIDE) as i8 + col_delta;
        if !(0..SIDE as i8).contains(&row) || !(0..SIDE as i8).contains(&col) {
            return None;
        }

        let target = (row as u8 * SIDE + col as u8) as usize;
        let mut tiles = self.tiles;
        tiles.swap(self.blank as usize, target);
        Some(Board {
            tiles,
            blank: target as u8,
        })
    }

    /// Whether the goal is reachable from this board.
    ///
    /// For odd-width puzzles a board is solvable iff its inversion count is
    /// even. The blank does not count as a tile.
    pub fn is_solvable(&self) -> bool {
        self.count_inversions() % 2 == 0
    }

    fn count_inversions(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(idx, &tile)| {
                self.tiles[idx + 1..]
                    .iter()
                    .filter(|&&later| later != 0 && later < tile)
                    .count()
            })
            .sum()
    }

    /// Produces a board by walking `steps` random legal blank moves from the
    /// goal, never immediately undoing the previous move.
    ///
    /// Every board produced this way is solvable.
    pub fn scrambled<R: Rng>(rng: &mut R, steps: usize) -> Board {
        let mut board = Board::goal();
        let mut previous: Option<Move> = None;

        for _ in 0..steps {
            let candidates: Vec<Move> = Move::ALL
                .into_iter()
                .filter(|&m| previous != Some(m.opposite()))
                .filter(|&m| board.slide(m).is_some())
                .collect();

            // at most one direction is excluded per filter, so at least one
            // candidate always remains on a 3x3 grid
            if let Some(&movement) = candidates.choose(rng) {
                board = board.slide(movement).unwrap_or(board);
                previous = Some(movement);
            }
        }

        board
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Accepts `"1,2,3,4,5,6,7,8,0"` (any of `,`/space as separators) or the
    /// compact `"123456780"`.
    fn from_str(s: &str) -> Result<Board, BoardError> {
        let mut tiles = [0u8; CELLS];
        let mut count = 0usize;

        for c in s.chars() {
            match c {
                '0'..='9' => {
                    if count == CELLS {
                        return Err(BoardError::WrongLength(count + 1));
                    }
                    tiles[count] = c as u8 - b'0';
                    count += 1;
                }
                ',' | ' ' | '\t' => {}
                other => return Err(BoardError::InvalidToken(other)),
            }
        }

        if count != CELLS {
            return Err(BoardError::WrongLength(count));
        }
        Board::from_tiles(tiles)
    }
}

impl fmt::Display for Board {
    /// Three rows of tiles, the blank rendered as '.'.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(SIDE as usize) {
            for (col, &tile) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if tile == 0 {
                    f.write_str(".")?;
                } else {
                    write!(f, "{}", tile)?;
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_goal_is_goal() {
        assert!(Board::goal().is_goal());
        assert_eq!(Board::goal().manhattan(), 0);
    }

    #[test]
    fn test_from_tiles_rejects_duplicates() {
        let err = Board::from_tiles([1, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap_err();
        assert_eq!(err, BoardError::NotAPermutation(1));
    }

    #[test]
    fn test_from_tiles_rejects_out_of_range() {
        let err = Board::from_tiles([1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap_err();
        assert_eq!(err, BoardError::NotAPermutation(9));
    }

    #[test]
    fn test_parse_compact_and_separated() {
        let a: Board = "123456780".parse().unwrap();
        let b: Board = "1,2,3,4,5,6,7,8,0".parse().unwrap();
        assert_eq!(a, b);
        assert!(a.is_goal());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("12345678".parse::<Board>(), Err(BoardError::WrongLength(8)));
        assert_eq!(
            "1234567800".parse::<Board>(),
            Err(BoardError::WrongLength(10))
        );
        assert_eq!(
            "12345678x".parse::<Board>(),
            Err(BoardError::InvalidToken('x'))
        );
        assert_eq!(
            "123456789".parse::<Board>(),
            Err(BoardError::NotAPermutation(9))
        );
    }

    #[test]
    fn test_manhattan_single_displacement() {
        // blank and 8 swapped: only tile 8 is one cell from home
        let board = Board::from_tiles([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        assert_eq!(board.manhattan(), 1);
    }

    #[test]
    fn test_manhattan_shifted_bottom_row() {
        // 7 and 8 each one cell right of home
        let board = Board::from_tiles([1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
        assert_eq!(board.manhattan(), 2);
    }

    #[test]
    fn test_slide_respects_bounds() {
        let goal = Board::goal();
        // blank is bottom-right: only UP and LEFT are legal
        assert!(goal.slide(Move::Down).is_none());
        assert!(goal.slide(Move::Right).is_none());
        assert!(goal.slide(Move::Up).is_some());
        assert!(goal.slide(Move::Left).is_some());
    }

    #[test]
    fn test_slide_swaps_blank_with_target() {
        let goal = Board::goal();
        let up = goal.slide(Move::Up).unwrap();
        assert_eq!(up.tiles(), &[1, 2, 3, 4, 5, 0, 7, 8, 6]);
        // sliding back restores the original
        assert_eq!(up.slide(Move::Down).unwrap(), goal);
    }

    #[test]
    fn test_slide_does_not_mutate_source() {
        let board = Board::from_tiles([1, 2, 3, 4, 0, 5, 7, 8, 6]).unwrap();
        let copy = board;
        let _ = board.slide(Move::Right);
        assert_eq!(board, copy);
    }

    #[test]
    fn test_solvability_parity() {
        assert!(Board::goal().is_solvable());
        // single swap of two tiles flips parity
        let unsolvable = Board::from_tiles([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        assert!(!unsolvable.is_solvable());
    }

    #[test]
    fn test_scrambled_is_always_solvable() {
        let mut rng = SmallRng::seed_from_u64(7);
        for steps in [0, 1, 5, 30, 100] {
            let board = Board::scrambled(&mut rng, steps);
            assert!(board.is_solvable(), "scramble of {} steps", steps);
            assert!(Board::from_tiles(*board.tiles()).is_ok());
        }
    }

    #[test]
    fn test_scramble_zero_steps_is_goal() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(Board::scrambled(&mut rng, 0).is_goal());
    }

    #[test]
    fn test_display_marks_blank() {
        let board = Board::from_tiles([1, 2, 3, 4, 0, 5, 7, 8, 6]).unwrap();
        assert_eq!(board.to_string(), "1 2 3\n4 . 5\n7 8 6\n");
    }
}
