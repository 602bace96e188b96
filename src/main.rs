//! Terminal 8-puzzle runner (default binary).
//!
//! Owns the event pump and the fixed 16 ms timestep; all game semantics live
//! in [`tui_slide::app::App`] and the crates it drives.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_slide::app::{App, Screen};
use tui_slide::input::{handle_game_key, handle_menu_key, should_quit};
use tui_slide::term::{FrameBuffer, GameView, MenuView, TerminalRenderer};
use tui_slide::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1);

    let mut app = App::new(seed);
    let game_view = GameView::default();
    let menu_view = MenuView;

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render: ambient layer first, screen view on top.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        fb.resize(w, h);
        fb.clear(Default::default());
        app.ambient().render_into(&mut fb);
        match app.screen() {
            Screen::Menu => menu_view.render_into(app.selected_theme(), &mut fb),
            Screen::Game => game_view.render_into(&app.snapshot(), &app.hud(), &mut fb),
        }
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
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
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick(TICK_MS);
        }
    }
}
