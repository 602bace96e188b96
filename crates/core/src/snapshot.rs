//! Plain-data observation of the engine, consumed by the terminal views.

use crate::types::{Cell, PlayState, BOARD_CELLS, SOLVED_BLANK_INDEX};

/// A copyable view of the puzzle state at one instant.
///
/// Views render from this instead of borrowing the engine, so the render path
/// never holds the engine across a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleSnapshot {
    pub cells: [Cell; BOARD_CELLS],
    pub blank: u8,
    pub move_count: u32,
    pub state: PlayState,
    pub game_id: u32,
}

impl PuzzleSnapshot {
    pub fn playable(&self) -> bool {
        self.state == PlayState::Playing
    }
}

impl Default for PuzzleSnapshot {
    fn default() -> Self {
        let mut cells: [Cell; BOARD_CELLS] = [None; BOARD_CELLS];
        for (i, cell) in cells.iter_mut().take(BOARD_CELLS - 1).enumerate() {
            *cell = Some(i as u8);
        }
        Self {
            cells,
            blank: SOLVED_BLANK_INDEX,
            move_count: 0,
            state: PlayState::Idle,
            game_id: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_solved_layout() {
        let snap = PuzzleSnapshot::default();
        assert_eq!(snap.blank, SOLVED_BLANK_INDEX);
        assert_eq!(snap.cells[8], None);
        assert_eq!(snap.cells[0], Some(0));
        assert!(!snap.playable());
    }
}
