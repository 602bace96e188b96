//! App state machine: screen flow, timer, and ambient lifecycle.
//!
//! Everything here is pure with respect to the terminal: the binary feeds in
//! actions and elapsed time and renders from the exposed state, so the whole
//! menu/game/win flow can be tested headlessly.
//!
//! The elapsed-time display is owned here, not by the engine: it accumulates
//! only while the engine is `Playing`, restarts on game entry, and
//! deliberately keeps running across a mid-game reshuffle.

use crate::core::{PuzzleEngine, PuzzleSnapshot};
use crate::term::game_view::THEMES;
use crate::term::{AmbientField, HudView};
use crate::types::{GameAction, MenuAction, MoveOutcome, PlayState, TIMER_STEP_MS};

/// Which screen is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Game,
}

pub struct App {
    engine: PuzzleEngine,
    screen: Screen,
    selected_theme: usize,
    timer_ms: u32,
    elapsed_secs: u32,
    menu_ambient: AmbientField,
    game_ambient: AmbientField,
}

impl App {
    pub fn new(seed: u32) -> Self {
        Self {
            engine: PuzzleEngine::new(seed),
            screen: Screen::Menu,
            selected_theme: 0,
            timer_ms: 0,
            elapsed_secs: 0,
            menu_ambient: AmbientField::menu(seed ^ 0xB33),
            game_ambient: AmbientField::game(seed ^ 0xD41),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn engine(&self) -> &PuzzleEngine {
        &self.engine
    }

    pub fn selected_theme(&self) -> usize {
        self.selected_theme
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn hud(&self) -> HudView {
        HudView {
            elapsed_secs: self.elapsed_secs,
            theme: self.selected_theme,
        }
    }

    pub fn snapshot(&self) -> PuzzleSnapshot {
        self.engine.snapshot()
    }

    /// Ambient field of the visible screen; the hidden one is not ticked.
    pub fn ambient(&self) -> &AmbientField {
        match self.screen {
            Screen::Menu => &self.menu_ambient,
            Screen::Game => &self.game_ambient,
        }
    }

    /// Advance time: visible ambient layer always, game timer while Playing.
    pub fn tick(&mut self, elapsed_ms: u32) {
        match self.screen {
            Screen::Menu => self.menu_ambient.tick(elapsed_ms),
            Screen::Game => self.game_ambient.tick(elapsed_ms),
        }

        if self.screen == Screen::Game && self.engine.state() == PlayState::Playing {
            self.timer_ms += elapsed_ms;
            while self.timer_ms >= TIMER_STEP_MS {
                self.timer_ms -= TIMER_STEP_MS;
                self.elapsed_secs += 1;
            }
        }
    }

    pub fn on_menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::PrevTheme => {
                self.selected_theme = (self.selected_theme + THEMES.len() - 1) % THEMES.len();
            }
            MenuAction::NextTheme => {
                self.selected_theme = (self.selected_theme + 1) % THEMES.len();
            }
            MenuAction::SelectTheme(i) => {
                if i < THEMES.len() {
                    self.selected_theme = i;
                }
            }
            MenuAction::Start => self.enter_game(),
        }
    }

    /// Dispatch a game-screen action. Returns the move outcome for slides so
    /// the caller can react (it currently only re-renders either way).
    pub fn on_game_action(&mut self, action: GameAction) -> MoveOutcome {
        match action {
            GameAction::Slide(dir) => {
                match dir.source_position(self.engine.blank()) {
                    Some(target) => self.engine.attempt_move(target),
                    None => MoveOutcome::REJECTED,
                }
            }
            GameAction::Reshuffle => {
                // Gated to Playing inside the engine; the timer keeps running.
                self.engine.reset_with_new_shuffle();
                MoveOutcome::REJECTED
            }
            GameAction::NewGame => {
                // Only honored from the win banner.
                if self.engine.state() == PlayState::Won {
                    self.enter_game();
                }
                MoveOutcome::REJECTED
            }
            GameAction::BackToMenu => {
                self.engine.return_to_menu();
                self.screen = Screen::Menu;
                MoveOutcome::REJECTED
            }
        }
    }

    fn enter_game(&mut self) {
        self.engine.start_new_game();
        self.timer_ms = 0;
        self.elapsed_secs = 0;
        self.screen = Screen::Game;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn test_starts_on_menu() {
        let app = App::new(1);
        assert_eq!(app.screen(), Screen::Menu);
        assert_eq!(app.engine().state(), PlayState::Idle);
    }

    #[test]
    fn test_start_enters_game_playing() {
        let mut app = App::new(1);
        app.on_menu_action(MenuAction::Start);
        assert_eq!(app.screen(), Screen::Game);
        assert_eq!(app.engine().state(), PlayState::Playing);
        assert_eq!(app.elapsed_secs(), 0);
    }

    #[test]
    fn test_theme_selection_wraps() {
        let mut app = App::new(1);
        app.on_menu_action(MenuAction::PrevTheme);
        assert_eq!(app.selected_theme(), THEMES.len() - 1);
        app.on_menu_action(MenuAction::NextTheme);
        assert_eq!(app.selected_theme(), 0);
        app.on_menu_action(MenuAction::SelectTheme(1));
        assert_eq!(app.selected_theme(), 1);
        // Out-of-range gallery picks are ignored.
        app.on_menu_action(MenuAction::SelectTheme(99));
        assert_eq!(app.selected_theme(), 1);
    }

    #[test]
    fn test_timer_runs_only_while_playing() {
        let mut app = App::new(1);

        // Menu: no accumulation.
        app.tick(5000);
        assert_eq!(app.elapsed_secs(), 0);

        app.on_menu_action(MenuAction::Start);
        app.tick(2500);
        assert_eq!(app.elapsed_secs(), 2);

        // Back on the menu the timer freezes.
        app.on_game_action(GameAction::BackToMenu);
        app.tick(5000);
        assert_eq!(app.elapsed_secs(), 2);
    }

    #[test]
    fn test_reshuffle_keeps_timer_resets_moves() {
        let mut app = App::new(1);
        app.on_menu_action(MenuAction::Start);
        app.tick(3000);

        // Make at least one move (some direction always has a source tile).
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            if app.on_game_action(GameAction::Slide(dir)).applied {
                break;
            }
        }
        assert!(app.engine().move_count() > 0);

        app.on_game_action(GameAction::Reshuffle);
        assert_eq!(app.engine().move_count(), 0);
        assert_eq!(app.elapsed_secs(), 3, "reshuffle must not reset the timer");
        assert_eq!(app.engine().state(), PlayState::Playing);
    }

    #[test]
    fn test_slide_against_wall_is_rejected() {
        let mut app = App::new(1);
        app.on_menu_action(MenuAction::Start);

        // A center blank has tiles on all sides; nudge it onto an edge first.
        if app.engine().blank() == 4 {
            assert!(app.on_game_action(GameAction::Slide(Direction::Up)).applied);
        }

        // Pick a direction with no source tile for this blank position.
        let blank = app.engine().blank();
        let dir = if blank / 3 == 0 {
            Direction::Down
        } else if blank / 3 == 2 {
            Direction::Up
        } else if blank % 3 == 0 {
            Direction::Right
        } else {
            Direction::Left
        };

        let before = app.engine().move_count();
        assert!(!app.on_game_action(GameAction::Slide(dir)).applied);
        assert_eq!(app.engine().move_count(), before);
    }

    #[test]
    fn test_back_to_menu_goes_idle() {
        let mut app = App::new(1);
        app.on_menu_action(MenuAction::Start);
        app.on_game_action(GameAction::BackToMenu);
        assert_eq!(app.screen(), Screen::Menu);
        assert_eq!(app.engine().state(), PlayState::Idle);
    }

    #[test]
    fn test_new_game_action_ignored_while_playing() {
        let mut app = App::new(1);
        app.on_menu_action(MenuAction::Start);
        let game_id = app.engine().game_id();
        app.on_game_action(GameAction::NewGame);
        assert_eq!(app.engine().game_id(), game_id);
    }

    #[test]
    fn test_ambient_only_visible_screen_ticks() {
        let mut app = App::new(1);
        app.tick(10_000);
        let menu_bees = app.ambient().bee_count();
        assert!(menu_bees > 0);

        app.on_menu_action(MenuAction::Start);
        // Fresh game field has had no time yet.
        assert_eq!(app.ambient().bee_count(), 0);
        app.tick(16);
        assert_eq!(app.ambient().bee_count(), 1);
    }
}
