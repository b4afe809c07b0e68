//! GameView: maps a `core::GameSnapshot` onto a canvas.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::{Canvas, Rgb};
use crate::core::GameSnapshot;
use crate::palette::{piece_rgb, BLACK, DARKGRAY, LIGHTGRAY, RAYWHITE, RED};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

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

/// Top-left of the bordered board frame inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

pub const GAME_OVER_TEXT: &str = "Game Over";

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square with typical terminal glyphs.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Render one frame into an existing canvas, resizing it to the viewport.
    ///
    /// A finished game shows only the game-over screen.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, canvas: &mut Canvas) {
        canvas.resize(viewport.width, viewport.height);
        canvas.clear_background(RAYWHITE);

        if snap.game_over {
            self.draw_game_over(canvas, snap.score, viewport);
        } else {
            self.draw_playfield(canvas, snap, viewport);
        }
    }

    /// Convenience helper that allocates a new canvas.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> Canvas {
        let mut canvas = Canvas::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut canvas);
        canvas
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    fn draw_playfield(&self, canvas: &mut Canvas, snap: &GameSnapshot, viewport: Viewport) {
        let frame = self.frame(viewport);
        self.draw_border(canvas, frame);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => {
                        self.draw_cell(canvas, frame, x as u16, y as u16, piece_rgb(*color))
                    }
                    None => self.draw_empty_cell(canvas, frame, x as u16, y as u16),
                }
            }
        }

        if let Some(active) = snap.active {
            let color = piece_rgb(active.color);
            for &(x, y) in active.cells.iter() {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_cell(canvas, frame, x as u16, y as u16, color);
                }
            }
        }

        let score = score_text(snap.score);
        canvas.draw_text_bold(frame.x + 1, frame.y, &score, BLACK);
    }

    fn draw_game_over(&self, canvas: &mut Canvas, score: u32, viewport: Viewport) {
        let x = viewport
            .width
            .saturating_sub(GAME_OVER_TEXT.len() as u16)
            / 2;
        let y = (viewport.height / 2).saturating_sub(1);
        canvas.draw_text_bold(x, y, GAME_OVER_TEXT, RED);
        canvas.draw_text(x, y + 1, &score_text(score), BLACK);
    }

    fn draw_border(&self, canvas: &mut Canvas, f: Frame) {
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);

        canvas.draw_char(f.x, f.y, '┌', DARKGRAY);
        canvas.draw_char(right, f.y, '┐', DARKGRAY);
        canvas.draw_char(f.x, bottom, '└', DARKGRAY);
        canvas.draw_char(right, bottom, '┘', DARKGRAY);

        for x in f.x + 1..right {
            canvas.draw_char(x, f.y, '─', DARKGRAY);
            canvas.draw_char(x, bottom, '─', DARKGRAY);
        }
        for y in f.y + 1..bottom {
            canvas.draw_char(f.x, y, '│', DARKGRAY);
            canvas.draw_char(right, y, '│', DARKGRAY);
        }
    }

    fn cell_origin(&self, f: Frame, x: u16, y: u16) -> (u16, u16) {
        (f.x + 1 + x * self.cell_w, f.y + 1 + y * self.cell_h)
    }

    fn draw_cell(&self, canvas: &mut Canvas, f: Frame, x: u16, y: u16, color: Rgb) {
        let (px, py) = self.cell_origin(f, x, y);
        canvas.draw_rect(px, py, self.cell_w, self.cell_h, color);
    }

    fn draw_empty_cell(&self, canvas: &mut Canvas, f: Frame, x: u16, y: u16) {
        let (px, py) = self.cell_origin(f, x, y);
        canvas.draw_char(px, py, '·', LIGHTGRAY);
    }
}

pub fn score_text(score: u32) -> String {
    format!("Score:{}", score)
}
