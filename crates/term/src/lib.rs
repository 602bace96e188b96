//! Terminal layer: framebuffer, renderer, screen views, ambient decoration.
//!
//! The views ([`GameView`], [`MenuView`]) and the ambient layer are pure
//! (render into a [`FrameBuffer`], no I/O) so they can be unit-tested; only
//! [`TerminalRenderer`] touches the terminal.

pub mod ambient;
pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod renderer;

pub use tui_slide_core as core;
pub use tui_slide_types as types;

pub use ambient::AmbientField;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, HudView, Viewport};
pub use menu_view::MenuView;
pub use renderer::TerminalRenderer;
