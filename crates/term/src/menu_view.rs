//! MenuView: the gallery screen where a game is started.
//!
//! Pure like `GameView`; renders the title, the selectable theme gallery, and
//! the key help over whatever the ambient layer already drew.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::THEMES;

pub struct MenuView;

impl MenuView {
    /// Render the menu with `selected` highlighted in the gallery.
    pub fn render_into(&self, selected: usize, fb: &mut FrameBuffer) {
        let title = CellStyle {
            fg: Rgb::new(255, 200, 60),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let plain = CellStyle::colored(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let dim = CellStyle { dim: true, ..plain };

        let mid_x = fb.width() / 2;
        let top = fb.height() / 3;

        let center = |fb: &mut FrameBuffer, y: u16, text: &str, style: CellStyle| {
            let w = text.chars().count() as u16;
            fb.put_str(mid_x.saturating_sub(w / 2), y, text, style);
        };

        center(fb, top, "H O N E Y   S L I D E", title);
        center(fb, top + 1, "an 8-puzzle", dim);

        // Gallery: one entry per theme, selection marked.
        let mut y = top + 3;
        for (i, theme) in THEMES.iter().enumerate() {
            let entry = format!(
                "{} {} {}",
                if i == selected { '▶' } else { ' ' },
                theme.glyph,
                theme.name
            );
            let style = if i == selected {
                CellStyle {
                    fg: theme.tile_bg,
                    bg: Rgb::new(0, 0, 0),
                    bold: true,
                    dim: false,
                }
            } else {
                plain
            };
            center(fb, y, &entry, style);
            y += 1;
        }

        center(fb, y + 1, "←/→ pick  enter start  q quit", dim);
    }

    pub fn render(&self, selected: usize, width: u16, height: u16) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, height);
        self.render_into(selected, &mut fb);
        fb
    }
}

impl Default for MenuView {
    fn default() -> Self {
        Self
    }
}
