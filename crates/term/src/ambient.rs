//! Ambient decoration: drifting bees and honey drips.
//!
//! Purely cosmetic. Each screen owns one `AmbientField`; the app loop ticks
//! the field of the visible screen and stops ticking it when the screen is
//! hidden. The field never touches puzzle state.
//!
//! Spawn pacing mirrors the original gallery app: a batch of bees staggered
//! 2 s apart at startup plus an interval respawner (menu 4 s, game 5 s), each
//! bee crossing the screen in 10-18 s (menu) or 12-22 s (game) and despawning
//! at the far edge; ten honey drips start 300 ms apart and cycle on a 3 s
//! phase.

use crate::core::SimpleRng;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    BEE_STAGGER_MS, DRIP_CYCLE_MS, DRIP_STAGGER_MS, GAME_BEE_COUNT, GAME_BEE_CROSS_MS,
    GAME_BEE_INTERVAL_MS, HONEY_DRIP_COUNT, MENU_BEE_COUNT, MENU_BEE_CROSS_MS,
    MENU_BEE_INTERVAL_MS,
};

#[derive(Debug, Clone, Copy)]
struct Bee {
    /// Vertical placement as a percentage of the field height (10-90).
    row_pct: u32,
    age_ms: u32,
    /// Time to cross the full field width; the bee expires when reached.
    cross_ms: u32,
}

#[derive(Debug, Clone, Copy)]
struct Drip {
    /// Horizontal placement as a percentage of the field width.
    col_pct: u32,
    /// Phase offset into the drip cycle.
    offset_ms: u32,
    age_ms: u32,
}

/// One screen's worth of decorative animation state.
#[derive(Debug, Clone)]
pub struct AmbientField {
    bees: Vec<Bee>,
    drips: Vec<Drip>,
    rng: SimpleRng,
    cross_ms: (u32, u32),
    /// Initial staggered bee spawns still owed.
    pending_bees: u32,
    stagger_timer_ms: u32,
    /// Steady-state respawn interval.
    interval_ms: u32,
    interval_timer_ms: u32,
    /// Drips still to be started.
    pending_drips: u32,
    drip_timer_ms: u32,
}

impl AmbientField {
    /// Field for the menu screen (8 bees, 4 s respawn).
    pub fn menu(seed: u32) -> Self {
        Self::new(seed, MENU_BEE_COUNT, MENU_BEE_INTERVAL_MS, MENU_BEE_CROSS_MS)
    }

    /// Field for the game screen (10 bees, 5 s respawn).
    pub fn game(seed: u32) -> Self {
        Self::new(seed, GAME_BEE_COUNT, GAME_BEE_INTERVAL_MS, GAME_BEE_CROSS_MS)
    }

    fn new(seed: u32, initial_bees: u32, interval_ms: u32, cross_ms: (u32, u32)) -> Self {
        Self {
            bees: Vec::new(),
            drips: Vec::new(),
            rng: SimpleRng::new(seed),
            cross_ms,
            pending_bees: initial_bees,
            // First staggered bee spawns on the first tick.
            stagger_timer_ms: BEE_STAGGER_MS,
            interval_ms,
            interval_timer_ms: 0,
            pending_drips: HONEY_DRIP_COUNT,
            drip_timer_ms: DRIP_STAGGER_MS,
        }
    }

    pub fn bee_count(&self) -> usize {
        self.bees.len()
    }

    pub fn drip_count(&self) -> usize {
        self.drips.len()
    }

    /// Advance the animation by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        // Initial staggered batch, one bee per stagger step.
        self.stagger_timer_ms += elapsed_ms;
        while self.pending_bees > 0 && self.stagger_timer_ms >= BEE_STAGGER_MS {
            self.stagger_timer_ms -= BEE_STAGGER_MS;
            self.pending_bees -= 1;
            self.spawn_bee();
        }

        // Steady-state respawner, running concurrently with the batch.
        self.interval_timer_ms += elapsed_ms;
        while self.interval_timer_ms >= self.interval_ms {
            self.interval_timer_ms -= self.interval_ms;
            self.spawn_bee();
        }

        // Drips appear once, staggered, then cycle forever.
        self.drip_timer_ms += elapsed_ms;
        while self.pending_drips > 0 && self.drip_timer_ms >= DRIP_STAGGER_MS {
            self.drip_timer_ms -= DRIP_STAGGER_MS;
            self.pending_drips -= 1;
            let col_pct = self.rng.next_range(100);
            let offset_ms = self.rng.next_range(DRIP_CYCLE_MS);
            self.drips.push(Drip {
                col_pct,
                offset_ms,
                age_ms: 0,
            });
        }

        for bee in &mut self.bees {
            bee.age_ms = bee.age_ms.saturating_add(elapsed_ms);
        }
        self.bees.retain(|bee| bee.age_ms < bee.cross_ms);

        for drip in &mut self.drips {
            drip.age_ms = drip.age_ms.wrapping_add(elapsed_ms);
        }
    }

    fn spawn_bee(&mut self) {
        let row_pct = 10 + self.rng.next_range(80);
        let cross_ms = self.cross_ms.0 + self.rng.next_range(self.cross_ms.1);
        self.bees.push(Bee {
            row_pct,
            age_ms: 0,
            cross_ms,
        });
    }

    /// Draw the field. Called before the foreground view so the decoration
    /// sits behind it.
    pub fn render_into(&self, fb: &mut FrameBuffer) {
        let width = fb.width();
        let height = fb.height();
        if width == 0 || height == 0 {
            return;
        }

        let drip_style = CellStyle::colored(Rgb::new(235, 170, 40), Rgb::new(0, 0, 0));
        for drip in &self.drips {
            let x = (width as u32 * drip.col_pct / 100) as u16;
            let phase = (drip.age_ms + drip.offset_ms) % DRIP_CYCLE_MS;
            // Stretch down over the first half of the cycle, then reset.
            let len = (phase * 6 / DRIP_CYCLE_MS).min(3) as u16;
            for y in 0..len {
                fb.put_char(x, y, '│', drip_style);
            }
            if len > 0 {
                fb.put_char(x, len, '•', drip_style);
            }
        }

        let bee_style = CellStyle {
            fg: Rgb::new(250, 210, 60),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        for bee in &self.bees {
            let y = (height as u32 * bee.row_pct / 100) as u16;
            // Enter one column off-screen, exit off the far side.
            let span = width as u32 + 2;
            let x = (span * bee.age_ms / bee.cross_ms) as i32 - 1;
            if x < 0 || x >= width as i32 {
                continue;
            }
            // Wing flap: alternate glyphs a few times a second.
            let glyph = if (bee.age_ms / 250) % 2 == 0 { 'ø' } else { 'o' };
            fb.put_char(x as u16, y, glyph, bee_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_batch_is_staggered() {
        let mut field = AmbientField::menu(42);
        assert_eq!(field.bee_count(), 0);

        // First staggered bee arrives on the first tick.
        field.tick(16);
        assert_eq!(field.bee_count(), 1);

        // One more per stagger step.
        field.tick(BEE_STAGGER_MS);
        assert_eq!(field.bee_count(), 2);
    }

    #[test]
    fn test_batch_and_interval_spawns() {
        let mut field = AmbientField::menu(42);
        // 14 s: most of the 8-bee batch (staggered 2 s) plus interval
        // respawns at 4 s, 8 s, and 12 s; the earliest spawns may already
        // have crossed (minimum crossing time 10 s).
        for _ in 0..(14_000 / 100) {
            field.tick(100);
        }
        assert!(field.bee_count() >= 6);
        assert!(field.bee_count() <= 11);
    }

    #[test]
    fn test_bees_expire() {
        let mut field = AmbientField::game(7);
        // Run for two minutes; population must stay bounded because bees
        // despawn after at most 22 s while spawns arrive every 5 s.
        for _ in 0..(120_000 / 100) {
            field.tick(100);
        }
        assert!(field.bee_count() > 0);
        assert!(field.bee_count() <= 10);
    }

    #[test]
    fn test_drips_reach_fixed_population() {
        let mut field = AmbientField::menu(1);
        for _ in 0..40 {
            field.tick(100);
        }
        assert_eq!(field.drip_count(), HONEY_DRIP_COUNT as usize);

        // Population is stable afterwards.
        for _ in 0..100 {
            field.tick(100);
        }
        assert_eq!(field.drip_count(), HONEY_DRIP_COUNT as usize);
    }

    #[test]
    fn test_deterministic_under_seed() {
        let mut a = AmbientField::menu(99);
        let mut b = AmbientField::menu(99);
        for _ in 0..500 {
            a.tick(16);
            b.tick(16);
        }
        assert_eq!(a.bee_count(), b.bee_count());

        let mut fa = FrameBuffer::new(40, 12);
        let mut fbb = FrameBuffer::new(40, 12);
        a.render_into(&mut fa);
        b.render_into(&mut fbb);
        assert_eq!(fa, fbb);
    }

    #[test]
    fn test_render_into_empty_framebuffer_is_safe() {
        let mut field = AmbientField::game(3);
        field.tick(5000);
        let mut fb = FrameBuffer::new(0, 0);
        field.render_into(&mut fb);
    }
}
