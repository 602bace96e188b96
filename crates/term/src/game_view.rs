//! GameView: maps a `PuzzleSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::PuzzleSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PlayState, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Tile art theme, chosen from the menu gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub tile_fg: Rgb,
    pub tile_bg: Rgb,
    pub glyph: char,
}

/// The selectable gallery (stands in for the original's photo gallery).
pub const THEMES: [Theme; 3] = [
    Theme {
        name: "Honeycomb",
        tile_fg: Rgb::new(40, 30, 10),
        tile_bg: Rgb::new(240, 185, 60),
        glyph: '⬡',
    },
    Theme {
        name: "Amber",
        tile_fg: Rgb::new(55, 25, 5),
        tile_bg: Rgb::new(215, 130, 40),
        glyph: '◆',
    },
    Theme {
        name: "Clover",
        tile_fg: Rgb::new(20, 45, 15),
        tile_bg: Rgb::new(120, 190, 90),
        glyph: '❀',
    },
];

/// Caller-owned display state rendered alongside the board.
///
/// The elapsed timer lives in the app loop, not the engine; the view only
/// prints it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudView {
    pub elapsed_secs: u32,
    pub theme: usize,
}

/// Renders the game screen: board grid, side panel, win overlay.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square under typical glyph aspect ratios.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render into an existing framebuffer (the reusable hot path).
    ///
    /// The framebuffer is not cleared, so the ambient layer can be drawn
    /// first and show through the margins.
    pub fn render_into(&self, snap: &PuzzleSnapshot, hud: &HudView, fb: &mut FrameBuffer) {
        let theme = THEMES[hud.theme % THEMES.len()];

        let grid = GRID_SIZE as u16;
        let board_px_w = grid * self.cell_w;
        let board_px_h = grid * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = fb.width().saturating_sub(frame_w) / 2;
        let start_y = fb.height().saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 170, 90),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let well = CellStyle::colored(Rgb::new(90, 70, 30), Rgb::new(35, 28, 12));

        // Board background and border.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', well);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Tiles.
        for pos in 0..(grid * grid) as u8 {
            let row = (pos / GRID_SIZE) as u16;
            let col = (pos % GRID_SIZE) as u16;
            let px = start_x + 1 + col * self.cell_w;
            let py = start_y + 1 + row * self.cell_h;

            match snap.cells[pos as usize] {
                Some(tile) => self.draw_tile(fb, px, py, tile, theme),
                None => {
                    // The blank reads as a dark gap in the grid.
                    fb.fill_rect(px, py, self.cell_w, self.cell_h, '·', well);
                }
            }
        }

        self.draw_side_panel(fb, snap, hud, start_x, start_y, frame_w);

        if snap.state == PlayState::Won {
            self.draw_win_banner(fb, snap, hud, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &PuzzleSnapshot, hud: &HudView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, px: u16, py: u16, tile: u8, theme: Theme) {
        let style = CellStyle {
            fg: theme.tile_fg,
            bg: theme.tile_bg,
            bold: true,
            dim: false,
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        // Theme glyph in the corner, 1-based tile number centered.
        let deco = CellStyle { bold: false, ..style };
        fb.put_char(px, py, theme.glyph, deco);
        let label_x = px + self.cell_w / 2;
        let label_y = py + self.cell_h / 2;
        fb.put_u32(label_x, label_y, tile as u32 + 1, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &PuzzleSnapshot,
        hud: &HudView,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= fb.width() {
            return;
        }
        if fb.width() - panel_x < 10 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(230, 210, 150),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle::colored(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let dim = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, hud.elapsed_secs, value);
        fb.put_char(panel_x + digits(hud.elapsed_secs), y, 's', value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.move_count, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "arrows slide", dim);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "r shuffle", dim);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "b back  q quit", dim);
    }

    fn draw_win_banner(
        &self,
        fb: &mut FrameBuffer,
        snap: &PuzzleSnapshot,
        hud: &HudView,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let style = CellStyle {
            fg: Rgb::new(30, 20, 0),
            bg: Rgb::new(255, 215, 80),
            bold: true,
            dim: false,
        };

        let mid_y = start_y.saturating_add(frame_h / 2);
        let center = |fb: &mut FrameBuffer, y: u16, text: &str| {
            let w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(w) / 2);
            fb.put_str(x, y, text, style);
        };

        center(fb, mid_y.saturating_sub(1), " YOU WIN! ");
        let summary = format!(" {}s / {} moves ", hud.elapsed_secs, snap.move_count);
        center(fb, mid_y, &summary);
        center(fb, mid_y.saturating_add(1), " enter: again  b: menu ");
    }
}

fn digits(value: u32) -> u16 {
    let mut n = value;
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
