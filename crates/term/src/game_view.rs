//! GameView: maps an [`EngineView`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{EngineView, PuzzleState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Pos, Tile, MAX_STARS};

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

const BOARD_BG: Rgb = Rgb::new(24, 26, 36);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const SNAKE_BODY: Rgb = Rgb::new(70, 180, 90);
const SNAKE_HEAD: Rgb = Rgb::new(120, 240, 130);
const EAT_FLASH: Rgb = Rgb::new(255, 240, 120);

/// Terminal renderer for the puzzle board and its side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Screen origin of board cell (0, 0), inside the border.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Columns the board frame is pushed right while the fall shake decays
    pub fn shake_offset(fall_shake: f32) -> u16 {
        if fall_shake.is_finite() && fall_shake > 0.0 {
            (fall_shake.min(1.0) * 2.0).round() as u16
        } else {
            0
        }
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized only when
    /// the viewport changes.
    pub fn render_into(&self, view: &EngineView<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).cell(' '));

        let state = view.state;
        let board_w = state.width() as u16 * self.cell_w;
        let board_h = state.height() as u16 * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        // Leave room for the shake so the frame never moves off screen.
        let start_x = viewport.width.saturating_sub(frame_w + 2) / 2
            + Self::shake_offset(state.fall_shake());
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let origin = Origin {
            x: start_x + 1,
            y: start_y + 1,
        };

        let border = CellStyle::new(Rgb::new(170, 170, 190), PANEL_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..state.height() {
            for x in 0..state.width() {
                let pos = Pos::new(x as i32, y as i32);
                let (left, right, style) = tile_art(state.tile(pos));
                self.draw_cell(fb, origin, pos, left, right, style);
            }
        }

        self.draw_snake(fb, origin, state);
        self.draw_side_panel(fb, view, viewport, start_x + frame_w + 2, start_y);

        if state.won() {
            let stars = stars_text(state.stars());
            let lines = ["LEVEL CLEAR", stars.as_str(), "enter: next"];
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, &lines);
        } else if state.dead() {
            let lines = ["SNAKE LOST", "r: retry"];
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, &lines);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, view: &EngineView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(view, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    /// Fill one board cell: first column gets `left`, the rest `right`.
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        pos: Pos,
        left: char,
        right: char,
        style: CellStyle,
    ) {
        let px = origin.x + pos.x as u16 * self.cell_w;
        let py = origin.y + pos.y as u16 * self.cell_h;
        for dy in 0..self.cell_h {
            fb.put_char(px, py + dy, left, style);
            fb.fill_rect(px + 1, py + dy, self.cell_w - 1, 1, right, style);
        }
    }

    fn draw_snake(&self, fb: &mut FrameBuffer, origin: Origin, state: &PuzzleState) {
        let board = state.board();
        let body = CellStyle::new(SNAKE_BODY, BOARD_BG);
        // Tail first so the head wins on overlap.
        for &seg in state.snake().iter().skip(1).rev() {
            if board.in_bounds(seg) {
                self.draw_cell(fb, origin, seg, '█', '█', body);
            }
        }

        let Some(head) = state.head() else {
            return;
        };
        if !board.in_bounds(head) {
            return;
        }
        let color = if state.dead() {
            Rgb::new(200, 60, 60)
        } else {
            SNAKE_HEAD.lerp(EAT_FLASH, state.eat_flash())
        };
        let style = CellStyle::new(color, BOARD_BG).bold();
        self.draw_cell(fb, origin, head, '█', '█', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        view: &EngineView<'_>,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let state = view.state;

        let mut y = start_y;
        fb.put_str(panel_x, y, "LEVEL", label);
        y += 1;
        let x = fb.put_u32(panel_x, y, view.level_number() as u32, value);
        let x = fb.put_str(x, y, "/", value);
        fb.put_u32(x, y, view.level_count as u32, value);
        y += 1;
        fb.put_str(panel_x, y, view.level_name, value.dim());
        y += 2;

        fb.put_str(panel_x, y, "APPLES", label);
        y += 1;
        fb.put_u32(panel_x, y, state.apples(), value);
        y += 2;

        fb.put_str(panel_x, y, "MOVES", label);
        y += 1;
        fb.put_u32(panel_x, y, state.moves(), value);
        y += 2;

        fb.put_str(panel_x, y, "BEST", label);
        y += 1;
        fb.put_str(panel_x, y, &stars_text(view.best_stars), value);
        y += 2;

        let help = value.dim();
        for line in ["arrows/wasd move", "z undo  r restart", "n/p level  q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let top = start_y.saturating_add((frame_h / 2).saturating_sub(lines.len() as u16 / 2));
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, top + i as u16, text, style);
        }
    }
}

fn tile_art(tile: Tile) -> (char, char, CellStyle) {
    let on_board = |fg| CellStyle::new(fg, BOARD_BG);
    match tile {
        Tile::Empty => (' ', ' ', on_board(Rgb::new(60, 60, 70))),
        Tile::Floor => ('█', '█', on_board(Rgb::new(130, 100, 70))),
        Tile::Apple => ('(', ')', on_board(Rgb::new(230, 70, 70)).bold()),
        Tile::Portal => ('{', '}', on_board(Rgb::new(200, 110, 240)).bold()),
        Tile::Box => ('[', ']', on_board(Rgb::new(210, 170, 90))),
        Tile::Trap => ('^', '^', on_board(Rgb::new(240, 90, 40)).bold()),
    }
}

/// Filled and hollow stars out of the maximum rating
fn stars_text(stars: u8) -> String {
    (0..MAX_STARS)
        .map(|i| if i < stars { '*' } else { '.' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_text() {
        assert_eq!(stars_text(0), "...");
        assert_eq!(stars_text(2), "**.");
        assert_eq!(stars_text(3), "***");
    }

    #[test]
    fn test_shake_offset() {
        assert_eq!(GameView::shake_offset(0.0), 0);
        assert_eq!(GameView::shake_offset(1.0), 2);
        assert_eq!(GameView::shake_offset(0.3), 1);
        assert_eq!(GameView::shake_offset(f32::NAN), 0);
    }
}
