//! Terminal 8-puzzle (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them under `tui_slide::{core,term,input,types}` and adds the
//! screen-flow state machine driven by the default binary.

pub mod app;

pub use tui_slide_core as core;
pub use tui_slide_input as input;
pub use tui_slide_term as term;
pub use tui_slide_types as types;
