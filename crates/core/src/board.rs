//! Board module - the 3x3 sliding-puzzle grid
//!
//! The board is 9 slots holding 8 numbered tiles and one blank, stored as a
//! flat array for zero-allocation access. Position `p` maps to the grid as
//! `row = p / 3`, `col = p % 3`. The blank position is tracked alongside the
//! cells so adjacency checks never scan the array.

use arrayvec::ArrayVec;

use crate::types::{Cell, BOARD_CELLS, GRID_SIZE, SOLVED_BLANK_INDEX, TILE_COUNT};

/// Grid-adjacent positions of `blank`, in up/down/left/right order.
///
/// Pure function of the blank index only: up (`-3`) when not on the top row,
/// down (`+3`) when not on the bottom row, left (`-1`) when not in the left
/// column, right (`+1`) when not in the right column. Corners yield 2
/// positions, edges 3, the center 4.
pub fn valid_moves(blank: u8) -> ArrayVec<u8, 4> {
    let mut moves = ArrayVec::new();
    let row = blank / GRID_SIZE;
    let col = blank % GRID_SIZE;

    if row > 0 {
        moves.push(blank - GRID_SIZE);
    }
    if row < GRID_SIZE - 1 {
        moves.push(blank + GRID_SIZE);
    }
    if col > 0 {
        moves.push(blank - 1);
    }
    if col < GRID_SIZE - 1 {
        moves.push(blank + 1);
    }

    moves
}

/// Whether two positions are grid-adjacent (Manhattan distance exactly 1).
pub fn is_adjacent(a: u8, b: u8) -> bool {
    let (row_a, col_a) = (a / GRID_SIZE, a % GRID_SIZE);
    let (row_b, col_b) = (b / GRID_SIZE, b % GRID_SIZE);
    row_a.abs_diff(row_b) + col_a.abs_diff(col_b) == 1
}

/// The puzzle board.
///
/// Invariant: `cells[blank] == None` and exactly one slot is blank. The only
/// mutator is [`Board::slide`], which preserves both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
    blank: u8,
}

impl Board {
    /// The solved configuration: tile `i` at position `i`, blank at 8.
    pub fn solved() -> Self {
        let mut cells: [Cell; BOARD_CELLS] = [None; BOARD_CELLS];
        for (i, cell) in cells.iter_mut().take(TILE_COUNT as usize).enumerate() {
            *cell = Some(i as u8);
        }
        Self {
            cells,
            blank: SOLVED_BLANK_INDEX,
        }
    }

    /// Cell at `pos`, or `None` for an out-of-range position.
    pub fn get(&self, pos: u8) -> Option<Cell> {
        self.cells.get(pos as usize).copied()
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Current blank position.
    pub fn blank(&self) -> u8 {
        self.blank
    }

    /// Positions a tile could slide from, given the current blank.
    pub fn valid_moves(&self) -> ArrayVec<u8, 4> {
        valid_moves(self.blank)
    }

    /// Slide the tile at `target` into the blank.
    ///
    /// Returns false (board untouched) unless `target` is grid-adjacent to
    /// the blank. On success the blank moves to `target`.
    pub fn slide(&mut self, target: u8) -> bool {
        if target as usize >= BOARD_CELLS || !is_adjacent(target, self.blank) {
            return false;
        }
        self.cells.swap(target as usize, self.blank as usize);
        self.blank = target;
        true
    }

    /// True iff tile `i` occupies position `i` for every `i in 0..8`.
    ///
    /// The blank is not checked explicitly: with all 8 tiles in place it can
    /// only occupy position 8.
    pub fn is_solved(&self) -> bool {
        self.cells[..TILE_COUNT as usize]
            .iter()
            .enumerate()
            .all(|(i, cell)| *cell == Some(i as u8))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::solved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_board_layout() {
        let board = Board::solved();
        for i in 0..TILE_COUNT {
            assert_eq!(board.get(i), Some(Some(i)));
        }
        assert_eq!(board.get(SOLVED_BLANK_INDEX), Some(None));
        assert_eq!(board.blank(), SOLVED_BLANK_INDEX);
        assert!(board.is_solved());
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::solved();
        assert_eq!(board.get(9), None);
        assert_eq!(board.get(200), None);
    }

    #[test]
    fn test_valid_moves_corner_edge_center() {
        // Corners: exactly 2 moves.
        for corner in [0u8, 2, 6, 8] {
            assert_eq!(valid_moves(corner).len(), 2, "corner {}", corner);
        }
        // Edges: exactly 3 moves.
        for edge in [1u8, 3, 5, 7] {
            assert_eq!(valid_moves(edge).len(), 3, "edge {}", edge);
        }
        // Center: exactly 4 moves.
        assert_eq!(valid_moves(4).len(), 4);
    }

    #[test]
    fn test_valid_moves_contents() {
        let from_corner = valid_moves(0);
        assert!(from_corner.contains(&1));
        assert!(from_corner.contains(&3));

        let from_center = valid_moves(4);
        for p in [1u8, 3, 5, 7] {
            assert!(from_center.contains(&p));
        }
    }

    #[test]
    fn test_valid_moves_are_all_adjacent() {
        for blank in 0..BOARD_CELLS as u8 {
            for target in valid_moves(blank) {
                assert!(is_adjacent(blank, target));
            }
        }
    }

    #[test]
    fn test_is_adjacent_rejects_wraparound() {
        // 2 and 3 are neighbors in the flat array but on different rows.
        assert!(!is_adjacent(2, 3));
        assert!(!is_adjacent(5, 6));
        // A position is not adjacent to itself.
        assert!(!is_adjacent(4, 4));
        // Diagonals are not adjacent.
        assert!(!is_adjacent(0, 4));
    }

    #[test]
    fn test_slide_swaps_and_tracks_blank() {
        let mut board = Board::solved();

        // Tile 5 sits above the blank at 8.
        assert!(board.slide(5));
        assert_eq!(board.blank(), 5);
        assert_eq!(board.get(8), Some(Some(5)));
        assert_eq!(board.get(5), Some(None));
        assert!(!board.is_solved());

        // Sliding it back restores the solved board.
        assert!(board.slide(8));
        assert!(board.is_solved());
    }

    #[test]
    fn test_slide_rejects_non_adjacent() {
        let mut board = Board::solved();
        let before = board.clone();

        assert!(!board.slide(0));
        assert!(!board.slide(4));
        assert!(!board.slide(8)); // the blank itself
        assert!(!board.slide(9)); // out of range
        assert_eq!(board, before);
    }

    #[test]
    fn test_is_solved_one_swap_off() {
        let mut board = Board::solved();
        board.slide(7);
        assert!(!board.is_solved());
    }

    #[test]
    fn test_blank_invariant_under_slides() {
        let mut board = Board::solved();
        for target in [5u8, 4, 3, 0, 1, 2, 5, 8] {
            board.slide(target);
            assert_eq!(board.get(board.blank()), Some(None));
            let blanks = board.cells().iter().filter(|c| c.is_none()).count();
            assert_eq!(blanks, 1);
        }
    }
}
