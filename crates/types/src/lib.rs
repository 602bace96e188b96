//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board layout
//!
//! The puzzle is a fixed 3x3 grid of 9 slots holding 8 numbered tiles and one
//! blank. Slots are addressed by a flat position index `0..9`, mapped to the
//! grid as `row = pos / 3`, `col = pos % 3`:
//!
//! ```text
//!   0 1 2
//!   3 4 5
//!   6 7 8
//! ```
//!
//! In the solved configuration tile `i` occupies position `i` and the blank
//! occupies position 8.
//!
//! # Timing constants
//!
//! Values are in milliseconds. The app runs a fixed 16 ms timestep (~60 FPS);
//! the visible timer advances once per `TIMER_STEP_MS`. The ambient constants
//! drive the decorative bee/honey-drip layer and match the pacing of the
//! original gallery app (spawn intervals, crossing times, drip stagger).

/// Puzzle grid edge length (fixed 3x3).
pub const GRID_SIZE: u8 = 3;

/// Number of movable tiles.
pub const TILE_COUNT: u8 = 8;

/// Total slots on the board (tiles + blank).
pub const BOARD_CELLS: usize = 9;

/// Blank position in the solved configuration.
pub const SOLVED_BLANK_INDEX: u8 = 8;

/// Number of random legal slides performed by a shuffle.
pub const SHUFFLE_STEPS: u32 = 200;

/// Fixed timestep interval in milliseconds (16 ms, ~60 FPS).
pub const TICK_MS: u32 = 16;

/// Visible timer granularity (whole seconds).
pub const TIMER_STEP_MS: u32 = 1000;

/// Menu screen: bees spawned at startup, staggered `BEE_STAGGER_MS` apart.
pub const MENU_BEE_COUNT: u32 = 8;

/// Game screen: bees spawned at startup.
pub const GAME_BEE_COUNT: u32 = 10;

/// Delay between the initial staggered bee spawns.
pub const BEE_STAGGER_MS: u32 = 2000;

/// Menu screen: interval between respawned bees.
pub const MENU_BEE_INTERVAL_MS: u32 = 4000;

/// Game screen: interval between respawned bees.
pub const GAME_BEE_INTERVAL_MS: u32 = 5000;

/// Menu bee screen-crossing time range (min, spread).
pub const MENU_BEE_CROSS_MS: (u32, u32) = (10_000, 8_000);

/// Game bee screen-crossing time range (min, spread).
pub const GAME_BEE_CROSS_MS: (u32, u32) = (12_000, 10_000);

/// Honey drips hanging from the top edge.
pub const HONEY_DRIP_COUNT: u32 = 10;

/// Delay between successive drip starts.
pub const DRIP_STAGGER_MS: u32 = 300;

/// Full drip animation cycle length.
pub const DRIP_CYCLE_MS: u32 = 3000;

/// A board slot: `None` is the blank, `Some(t)` holds tile id `t` in `0..8`.
pub type Cell = Option<u8>;

/// Puzzle lifecycle state.
///
/// `Idle` before a game starts or after returning to the menu, `Playing`
/// during an active puzzle, `Won` once the solved configuration is reached.
/// Moves are rejected in `Idle` and `Won`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayState {
    Idle,
    Playing,
    Won,
}

impl PlayState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayState::Idle => "idle",
            PlayState::Playing => "playing",
            PlayState::Won => "won",
        }
    }
}

/// Direction a tile slides (into the blank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Position of the tile that would slide this way into the blank at
    /// `blank`, or `None` if no tile sits on that side.
    ///
    /// A tile sliding up sits *below* the blank, so the source is `blank + 3`;
    /// the other directions mirror accordingly. This is the click-to-position
    /// translation the engine expects to have happened upstream.
    pub fn source_position(&self, blank: u8) -> Option<u8> {
        let row = blank / GRID_SIZE;
        let col = blank % GRID_SIZE;
        match self {
            Direction::Up if row < GRID_SIZE - 1 => Some(blank + GRID_SIZE),
            Direction::Down if row > 0 => Some(blank - GRID_SIZE),
            Direction::Left if col < GRID_SIZE - 1 => Some(blank + 1),
            Direction::Right if col > 0 => Some(blank - 1),
            _ => None,
        }
    }
}

/// Result of a move request.
///
/// `applied` is false when the move was rejected (not adjacent to the blank,
/// or the engine was not in `Playing`); rejection is a no-op, not an error.
/// `won` is true only on the move that reached the solved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    pub applied: bool,
    pub won: bool,
}

impl MoveOutcome {
    pub const REJECTED: MoveOutcome = MoveOutcome {
        applied: false,
        won: false,
    };
}

/// Actions available on the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Slide(Direction),
    Reshuffle,
    /// Start a fresh game; only honored from the win banner.
    NewGame,
    BackToMenu,
}

/// Actions available on the menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    PrevTheme,
    NextTheme,
    SelectTheme(usize),
    Start,
}
