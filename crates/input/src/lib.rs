//! Input mapping for the terminal app.
//!
//! Pure key-to-action translation; the app loop owns the event pump.

pub mod map;

pub use tui_slide_types as types;

pub use map::{handle_game_key, handle_menu_key, should_quit};
