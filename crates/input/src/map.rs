//! Key mapping from terminal events to screen actions.
//!
//! The arrow (or hjkl/wasd) keys name the direction a tile slides into the
//! blank; translating that into a board position is the engine caller's job.

use crate::types::{Direction, GameAction, MenuAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game-screen actions.
pub fn handle_game_key(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::Slide(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Slide(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::Slide(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::Slide(Direction::Right))
        }

        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reshuffle),
        KeyCode::Enter => Some(GameAction::NewGame),
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => Some(GameAction::BackToMenu),

        _ => None,
    }
}

/// Map keyboard input to menu-screen actions.
pub fn handle_menu_key(key: KeyEvent) -> Option<MenuAction> {
    match key.code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            Some(MenuAction::PrevTheme)
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            Some(MenuAction::NextTheme)
        }
        KeyCode::Char(c @ '1'..='9') => Some(MenuAction::SelectTheme(c as usize - '1' as usize)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuAction::Start),
        _ => None,
    }
}

/// Check if key should quit the app.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
