//! Engine module - the puzzle state machine
//!
//! Owns the board, the move counter, and the play state, and is the only
//! mutator of all three. The surrounding application (menu, renderer, timer,
//! ambient layer) calls in and reacts to the returned values; nothing here
//! performs I/O.
//!
//! State transitions:
//!
//! ```text
//! Idle --start_new_game--> Playing
//! Playing --attempt_move (adjacent, not solved)--> Playing
//! Playing --attempt_move (solved)--> Won
//! Playing --reset_with_new_shuffle--> Playing
//! Won/Playing --return_to_menu--> Idle
//! ```
//!
//! Moves while `Idle` or `Won` are rejected via the result value, never an
//! error.

use crate::board::{is_adjacent, Board};
use crate::rng::SimpleRng;
use crate::snapshot::PuzzleSnapshot;
use crate::types::{MoveOutcome, PlayState, SHUFFLE_STEPS};

/// The sliding-puzzle state machine.
#[derive(Debug, Clone)]
pub struct PuzzleEngine {
    board: Board,
    move_count: u32,
    state: PlayState,
    rng: SimpleRng,
    /// Monotonic game id (increments on every new game).
    game_id: u32,
}

impl PuzzleEngine {
    /// Create an idle engine with the given shuffle seed.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::solved(),
            move_count: 0,
            state: PlayState::Idle,
            rng: SimpleRng::new(seed),
            game_id: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn blank(&self) -> u8 {
        self.board.blank()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    /// Positions currently accepted by [`PuzzleEngine::attempt_move`].
    pub fn valid_moves(&self) -> arrayvec::ArrayVec<u8, 4> {
        self.board.valid_moves()
    }

    /// Start a new game: solved board, fresh shuffle, zero moves, `Playing`.
    ///
    /// Valid from any state; the menu uses it for game entry and re-entry
    /// after a win.
    pub fn start_new_game(&mut self) {
        let mut rng = self.rng.clone();
        self.begin(|moves| rng.choose(moves));
        self.rng = rng;
    }

    /// As [`PuzzleEngine::start_new_game`], but with a caller-supplied move
    /// picker so tests can drive an exact shuffle trace.
    pub fn start_new_game_with(&mut self, picker: impl FnMut(&[u8]) -> u8) {
        self.begin(picker);
    }

    /// Re-shuffle mid-game: fresh board and shuffle, move count back to 0.
    ///
    /// Gated to `Playing` (the calling layer only exposes the control there);
    /// from `Idle` or `Won` this is a defined no-op returning false. The
    /// elapsed-time display is owned by the caller and deliberately not
    /// affected.
    pub fn reset_with_new_shuffle(&mut self) -> bool {
        if self.state != PlayState::Playing {
            return false;
        }
        self.start_new_game();
        true
    }

    /// Leave the game: state becomes `Idle`.
    ///
    /// Board and move count keep their last values; a subsequent
    /// [`PuzzleEngine::start_new_game`] reinitializes them.
    pub fn return_to_menu(&mut self) {
        self.state = PlayState::Idle;
    }

    /// Request sliding the tile at `target` into the blank.
    ///
    /// Rejected (`applied: false`, nothing mutated) unless the engine is
    /// `Playing` and `target` is grid-adjacent to the blank. On success the
    /// move counter increments by exactly 1 and the win condition is checked;
    /// reaching the solved board transitions to `Won` with `won: true`.
    pub fn attempt_move(&mut self, target: u8) -> MoveOutcome {
        if self.state != PlayState::Playing {
            return MoveOutcome::REJECTED;
        }
        if !is_adjacent(target, self.board.blank()) || !self.board.slide(target) {
            return MoveOutcome::REJECTED;
        }

        self.move_count += 1;

        let won = self.board.is_solved();
        if won {
            self.state = PlayState::Won;
        }
        MoveOutcome { applied: true, won }
    }

    /// Shuffle by repeated legal slides: from the solved board, pick one of
    /// the blank's valid moves uniformly and slide it, `SHUFFLE_STEPS` times.
    ///
    /// Every step is a legal single-tile slide, so the result is reachable
    /// from solved and therefore always solvable. A walk that happens to end
    /// back on the solved board is accepted; with 200 steps the probability
    /// is negligible.
    fn begin(&mut self, mut picker: impl FnMut(&[u8]) -> u8) {
        self.board = Board::solved();
        for _ in 0..SHUFFLE_STEPS {
            let moves = self.board.valid_moves();
            let target = picker(&moves);
            debug_assert!(self.board.valid_moves().contains(&target));
            self.board.slide(target);
        }
        self.move_count = 0;
        self.state = PlayState::Playing;
        self.game_id = self.game_id.wrapping_add(1);
    }

    /// Fill `out` with an observation of the current state.
    pub fn snapshot_into(&self, out: &mut PuzzleSnapshot) {
        out.cells = *self.board.cells();
        out.blank = self.board.blank();
        out.move_count = self.move_count;
        out.state = self.state;
        out.game_id = self.game_id;
    }

    pub fn snapshot(&self) -> PuzzleSnapshot {
        let mut s = PuzzleSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for PuzzleEngine {
    fn default() -> Self {
        Self::new(1)
    }
}
