//! SnakeView: maps a snake snapshot into a terminal framebuffer.

use crate::core::SnakeSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::view::{
    border_style, draw_border, draw_overlay_lines, draw_stat, frame_origin, hint_style, AnchorY,
    Viewport, PLAYFIELD_BG,
};

const PANEL_W: u16 = 14;

const HEAD: Rgb = Rgb::new(120, 255, 120);
const BODY: Rgb = Rgb::new(0, 200, 0);
const FOOD: Rgb = Rgb::new(240, 0, 0);

pub struct SnakeView {
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for SnakeView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl SnakeView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn render_into(&self, snap: &SnakeSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let grid = snap.grid as u16;
        let frame_w = grid * self.cell_w + 2;
        let frame_h = grid + 2;
        let (start_x, start_y) = frame_origin(viewport, self.anchor_y, frame_w, frame_h, PANEL_W);

        let bg = CellStyle::new(Rgb::new(60, 60, 70), PLAYFIELD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, grid * self.cell_w, grid, ' ', bg);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border_style());

        self.fill_tile(fb, start_x, start_y, snap.food.x, snap.food.y, FOOD);
        // Draw tail first so the head wins if segments overlap.
        for (i, p) in snap.segments.iter().enumerate().rev() {
            let color = if i == 0 { HEAD } else { BODY };
            self.fill_tile(fb, start_x, start_y, p.x, p.y, color);
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x < viewport.width {
            let y = draw_stat(fb, panel_x, start_y, "SCORE", snap.score);
            let y = draw_stat(fb, panel_x, y, "LENGTH", snap.segments.len() as u32);
            let hint = hint_style();
            fb.put_str(panel_x, y, "arrows steer", hint);
            fb.put_str(panel_x, y.saturating_add(1), "R restart", hint);
            fb.put_str(panel_x, y.saturating_add(2), "Q quit", hint);
        }

        if snap.game_over() {
            let score = format!("SCORE {}", snap.score);
            draw_overlay_lines(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["GAME OVER", &score, "R to restart"],
            );
        }
    }

    pub fn render(&self, snap: &SnakeSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        color: Rgb,
    ) {
        if x < 0 || y < 0 {
            return;
        }
        let px = start_x + 1 + x as u16 * self.cell_w;
        let py = start_y + 1 + y as u16;
        let style = CellStyle::new(color, PLAYFIELD_BG);
        fb.fill_rect(px, py, self.cell_w, 1, '█', style);
    }
}
