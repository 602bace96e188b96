//! End-to-end screen flow: key events in, rendered frames out.

use crossterm::event::{KeyCode, KeyEvent};

use tui_slide::app::{App, Screen};
use tui_slide::input::{handle_game_key, handle_menu_key};
use tui_slide::term::{FrameBuffer, GameView, MenuView};
use tui_slide::types::{PlayState, TICK_MS};

fn press(app: &mut App, code: KeyCode) {
    let key = KeyEvent::from(code);
    match app.screen() {
        Screen::Menu => {
            if let Some(action) = handle_menu_key(key) {
                app.on_menu_action(action);
            }
        }
        Screen::Game => {
            if let Some(action) = handle_game_key(key) {
                app.on_game_action(action);
            }
        }
    }
}

fn frame(app: &App) -> FrameBuffer {
    let mut fb = FrameBuffer::new(80, 24);
    app.ambient().render_into(&mut fb);
    match app.screen() {
        Screen::Menu => MenuView.render_into(app.selected_theme(), &mut fb),
        Screen::Game => GameView::default().render_into(&app.snapshot(), &app.hud(), &mut fb),
    }
    fb
}

#[test]
fn test_menu_to_game_and_back() {
    let mut app = App::new(321);
    assert!(frame(&app).contains_str("H O N E Y"));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen(), Screen::Game);
    assert_eq!(app.engine().state(), PlayState::Playing);
    let fb = frame(&app);
    assert!(fb.contains_str("MOVES"));
    assert!(fb.contains_str("TIME"));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen(), Screen::Menu);
    assert_eq!(app.engine().state(), PlayState::Idle);
}

#[test]
fn test_arrow_keys_drive_the_engine() {
    let mut app = App::new(321);
    press(&mut app, KeyCode::Enter);

    // At least one arrow press must land: every blank position has 2-4
    // legal directions. Stop after the first applied slide so the board
    // observably differs from the starting layout.
    let before = app.snapshot().cells;
    for code in [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right] {
        press(&mut app, code);
        if app.engine().move_count() > 0 {
            break;
        }
    }
    assert_eq!(app.engine().move_count(), 1);
    assert_ne!(app.snapshot().cells, before);
}

#[test]
fn test_reshuffle_key_starts_fresh_walk() {
    let mut app = App::new(321);
    press(&mut app, KeyCode::Enter);
    let id = app.engine().game_id();

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.engine().game_id(), id + 1);
    assert_eq!(app.engine().move_count(), 0);
    assert_eq!(app.engine().state(), PlayState::Playing);
}

#[test]
fn test_timer_ticks_on_game_screen_only() {
    let mut app = App::new(321);

    // A minute of menu time: bees fly, the clock does not.
    for _ in 0..60_000 / TICK_MS {
        app.tick(TICK_MS);
    }
    assert_eq!(app.elapsed_secs(), 0);
    assert!(app.ambient().bee_count() > 0);

    press(&mut app, KeyCode::Enter);
    // 188 ticks of 16 ms cross the 3 s mark.
    for _ in 0..188 {
        app.tick(TICK_MS);
    }
    assert_eq!(app.elapsed_secs(), 3);
    assert!(frame(&app).contains_str("3s"));
}

#[test]
fn test_menu_gallery_selection() {
    let mut app = App::new(321);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.selected_theme(), 1);
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.selected_theme(), 2);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.selected_theme(), 1);

    // The choice survives entering the game.
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.hud().theme, 1);
}
