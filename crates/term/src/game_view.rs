//! GameView: maps a `core::FieldSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom:
//!
//! ```text
//! SCORE: 36
//! HIGHSCORE: 1024          (only once a session has ended with points)
//! +------+------+------+------+
//! |  2   |      |  4   |      |
//! +------+------+------+------+
//! ...
//! (W)Up (S)Down (A)Left (D)Right   (or YOU WIN! / GAMEOVER)
//! (R)Restart (Q)Exit
//! ```

use crate::core::FieldSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::SessionState;

pub const HELP_MOVE: &str = "(W)Up (S)Down (A)Left (D)Right";
pub const HELP_SESSION: &str = "(R)Restart (Q)Exit";
pub const WIN_TEXT: &str = "YOU WIN!";
pub const GAMEOVER_TEXT: &str = "GAMEOVER";

/// Narrowest tile field; wider when a tile needs more digits.
const MIN_TILE_W: u16 = 5;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Renders the board, score lines and help text.
#[derive(Debug, Clone)]
pub struct GameView {
    anchor_y: AnchorY,
    center_x: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
            center_x: true,
        }
    }
}

/// Measured block for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Digits reserved per tile
    pub tile_w: u16,
    /// Columns used by the grid including walls
    pub grid_w: u16,
    /// Columns used by the whole block (grid or help text, whichever is wider)
    pub block_w: u16,
    /// Rows used by the whole block
    pub block_h: u16,
    /// Header rows above the grid
    pub header_h: u16,
}

impl Layout {
    pub fn measure(snap: &FieldSnapshot) -> Self {
        let widest = snap
            .cells
            .iter()
            .copied()
            .max()
            .unwrap_or(0)
            .max(snap.win_value);
        let tile_w = MIN_TILE_W.max(digits(widest));
        // Each cell is "|" + tile + " ", then a closing "|".
        let grid_w = side(snap.width)
            .saturating_mul(tile_w + 2)
            .saturating_add(1);
        let block_w = grid_w.max(HELP_MOVE.len() as u16);
        let header_h = if snap.highscore != 0 { 2 } else { 1 };
        let grid_h = side(snap.height).saturating_mul(2).saturating_add(1);
        Self {
            tile_w,
            grid_w,
            block_w,
            block_h: grid_h.saturating_add(header_h + 2),
            header_h,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_center_x(mut self, center_x: bool) -> Self {
        self.center_x = center_x;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &FieldSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = Layout::measure(snap);
        let x0 = if self.center_x {
            viewport.width.saturating_sub(layout.block_w) / 2
        } else {
            0
        };
        let y0 = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(layout.block_h) / 2,
            AnchorY::Top => 0,
        };

        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let end = fb.put_str(x0, y0, "SCORE: ", label);
        fb.put_u64(end, y0, snap.score, value);
        if snap.highscore != 0 {
            let end = fb.put_str(x0, y0.saturating_add(1), "HIGHSCORE: ", label);
            fb.put_u64(end, y0.saturating_add(1), snap.highscore, value);
        }

        let grid_y = y0.saturating_add(layout.header_h);
        self.draw_grid(fb, snap, &layout, x0, grid_y);

        let footer_y = grid_y.saturating_add(side(snap.height).saturating_mul(2)).saturating_add(1);
        match snap.state {
            SessionState::Won => {
                let style = CellStyle::plain(Rgb::new(120, 230, 120)).bold();
                fb.put_centered(x0, footer_y, layout.grid_w, WIN_TEXT, style);
            }
            SessionState::Lost => {
                let style = CellStyle::plain(Rgb::new(230, 90, 90)).bold();
                fb.put_centered(x0, footer_y, layout.grid_w, GAMEOVER_TEXT, style);
            }
            _ => {
                fb.put_str(x0, footer_y, HELP_MOVE, value);
            }
        }
        fb.put_str(x0, footer_y.saturating_add(1), HELP_SESSION, value);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &FieldSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Draws only the part of the grid that lands inside the framebuffer.
    fn draw_grid(&self, fb: &mut FrameBuffer, snap: &FieldSnapshot, layout: &Layout, x0: u16, y0: u16) {
        let wall = CellStyle::plain(Rgb::new(160, 160, 170));
        let cell_w = layout.tile_w + 2;
        let cols = side(snap.width);
        let right_wall = x0.saturating_add(cols.saturating_mul(cell_w));

        for (row_idx, row) in snap.rows().enumerate() {
            let sep_y = y0.saturating_add(side(row_idx).saturating_mul(2));
            if sep_y >= fb.height() {
                return;
            }
            self.draw_separator(fb, x0, sep_y, cols, cell_w, wall);

            let y = sep_y.saturating_add(1);
            for (col, &tile) in row.iter().enumerate() {
                let x = x0.saturating_add(side(col).saturating_mul(cell_w));
                if x >= fb.width() {
                    break;
                }
                fb.put_char(x, y, '|', wall);
                if tile > 0 {
                    fb.put_centered(x + 1, y, layout.tile_w, &tile.to_string(), tile_style(tile));
                }
            }
            fb.put_char(right_wall, y, '|', wall);
        }
        let bottom = y0.saturating_add(side(snap.height).saturating_mul(2));
        self.draw_separator(fb, x0, bottom, cols, cell_w, wall);
    }

    fn draw_separator(&self, fb: &mut FrameBuffer, x0: u16, y: u16, cols: u16, cell_w: u16, style: CellStyle) {
        if y >= fb.height() {
            return;
        }
        for col in 0..cols {
            let x = x0.saturating_add(col.saturating_mul(cell_w));
            if x >= fb.width() {
                return;
            }
            fb.put_char(x, y, '+', style);
            fb.fill_rect(x + 1, y, cell_w - 1, 1, '-', style);
        }
        fb.put_char(x0.saturating_add(cols.saturating_mul(cell_w)), y, '+', style);
    }
}

/// Board sides and indices as screen units; anything past `u16::MAX` is off screen anyway.
fn side(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn digits(v: u32) -> u16 {
    v.checked_ilog10().map(|d| d as u16 + 1).unwrap_or(1)
}

/// Colour ramp by tile exponent: warm for small tiles, hot for large ones.
fn tile_style(tile: u32) -> CellStyle {
    let fg = match tile.trailing_zeros() {
        1 => Rgb::new(230, 230, 220),
        2 => Rgb::new(235, 220, 180),
        3 => Rgb::new(245, 175, 120),
        4 => Rgb::new(245, 150, 100),
        5 => Rgb::new(245, 125, 95),
        6 => Rgb::new(245, 95, 60),
        7..=9 => Rgb::new(240, 210, 110),
        10 | 11 => Rgb::new(240, 200, 60),
        _ => Rgb::new(120, 200, 255),
    };
    let style = CellStyle::plain(fg);
    if tile >= 128 {
        style.bold()
    } else {
        style
    }
}
