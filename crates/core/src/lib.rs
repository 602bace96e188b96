//! Core puzzle logic module - pure, deterministic, and testable
//!
//! This module contains the sliding-puzzle rules and state management. It has
//! **zero dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces the same shuffle
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: runs in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 3x3 board with blank tracking, adjacency, and win detection
//! - [`engine`]: the puzzle state machine (shuffle, moves, lifecycle)
//! - [`rng`]: small LCG used for shuffles and the ambient layer
//! - [`snapshot`]: plain-data observation of the engine for rendering
//!
//! # Rules
//!
//! The shuffle performs 200 random *legal* slides starting from the solved
//! board, so every generated puzzle is reachable from solved by construction
//! and therefore always solvable. No permutation-parity check is needed.
//!
//! # Example
//!
//! ```
//! use tui_slide_core::PuzzleEngine;
//!
//! let mut engine = PuzzleEngine::new(12345);
//! engine.start_new_game();
//!
//! // Forward any requested position; the engine validates adjacency.
//! let outcome = engine.attempt_move(5);
//! if outcome.applied {
//!     assert_eq!(engine.blank(), 5);
//! }
//! ```

pub mod board;
pub mod engine;
pub mod rng;
pub mod snapshot;

pub use tui_slide_types as types;

// Re-export commonly used types for convenience
pub use board::{is_adjacent, valid_moves, Board};
pub use engine::PuzzleEngine;
pub use rng::SimpleRng;
pub use snapshot::PuzzleSnapshot;
