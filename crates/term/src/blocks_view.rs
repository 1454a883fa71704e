//! BlocksView: maps a block stacker snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActiveSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
use crate::view::{
    border_style, draw_border, draw_overlay_lines, draw_stat, frame_origin, hint_style, label_style,
    AnchorY, Viewport, PLAYFIELD_BG,
};

/// Columns reserved right of the board for the stats panel.
const PANEL_W: u16 = 16;

const HINTS: [&str; 6] = [
    "←→ move",
    "↓ drop",
    "↑ rotate",
    "SPC pause",
    "R reset",
    "Q quit",
];

pub struct BlocksView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for BlocksView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl BlocksView {
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

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;
        let (start_x, start_y) = frame_origin(viewport, self.anchor_y, frame_w, frame_h, PANEL_W);

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAYFIELD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border_style());

        // Locked cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                match PieceKind::from_index(v) {
                    Some(kind) => {
                        self.draw_board_cell(fb, start_x, start_y, x as u16, y as u16, kind)
                    }
                    None => self.draw_empty_cell(fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        // Active piece; cells above the top edge are not drawn.
        if let Some(active) = snap.active {
            for (x, y) in piece_cells(&active) {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_board_cell(fb, start_x, start_y, x as u16, y as u16, active.kind);
                }
            }
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, viewport, panel_x, start_y);

        match snap.phase {
            Phase::Idle => draw_overlay_lines(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["BLOCKS", "ENTER to start"],
            ),
            Phase::Paused => draw_overlay_lines(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["PAUSED", "SPACE to resume"],
            ),
            Phase::GameOver => {
                let score = format!("SCORE {}", snap.score);
                let level = format!("LEVEL {}", snap.level);
                let lines = format!("LINES {}", snap.lines);
                draw_overlay_lines(
                    fb,
                    start_x,
                    start_y,
                    frame_w,
                    frame_h,
                    &["GAME OVER", &score, &level, &lines, "R to restart"],
                );
            }
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', piece_style(kind));
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let mut y = start_y;
        y = draw_stat(fb, panel_x, y, "SCORE", snap.score);
        y = draw_stat(fb, panel_x, y, "LEVEL", snap.level);
        y = draw_stat(fb, panel_x, y, "LINES", snap.lines);

        fb.put_str(panel_x, y, "NEXT", label_style());
        y = y.saturating_add(1);
        if let Some(next) = snap.next {
            // Preview at the shape's own size, one terminal row per cell row.
            let style = piece_style(next.kind);
            for (dx, dy) in next.shape.filled_cells() {
                let px = panel_x + dx as u16 * self.cell_w;
                fb.fill_rect(px, y + dy as u16, self.cell_w, 1, '█', style);
            }
        }
        y = y.saturating_add(3);

        let hint = hint_style();
        for line in HINTS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }
}

fn piece_style(kind: PieceKind) -> CellStyle {
    CellStyle::new(Rgb::from(kind.color()), PLAYFIELD_BG).bold()
}

fn piece_cells(active: &ActiveSnapshot) -> impl Iterator<Item = (i8, i8)> + '_ {
    active
        .shape
        .filled_cells()
        .map(move |(dx, dy)| (active.x + dx, active.y + dy))
}
