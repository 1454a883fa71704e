//! Layout and drawing helpers shared by the game views.

use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

pub(crate) const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);

pub(crate) fn border_style() -> CellStyle {
    CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0))
}

pub(crate) fn label_style() -> CellStyle {
    CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold()
}

pub(crate) fn value_style() -> CellStyle {
    CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0))
}

pub(crate) fn hint_style() -> CellStyle {
    value_style().dim()
}

/// Top-left corner of a `frame_w × frame_h` box placed in `viewport`.
///
/// `extra_w` reserves columns to the right (the side panel) when centering.
pub(crate) fn frame_origin(
    viewport: Viewport,
    anchor_y: AnchorY,
    frame_w: u16,
    frame_h: u16,
    extra_w: u16,
) -> (u16, u16) {
    let total_w = frame_w.saturating_add(extra_w);
    let x = if total_w <= viewport.width {
        (viewport.width - total_w) / 2
    } else {
        viewport.width.saturating_sub(frame_w) / 2
    };
    let y = match anchor_y {
        AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
        AnchorY::Top => 0,
    };
    (x, y)
}

pub(crate) fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

/// Centered lines over a frame; the first one bold.
pub(crate) fn draw_overlay_lines(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    lines: &[&str],
) {
    let title = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    let body = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));

    let top = start_y
        .saturating_add(frame_h / 2)
        .saturating_sub(lines.len() as u16 / 2);
    for (i, line) in lines.iter().enumerate() {
        let text_w = line.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = if i == 0 { title } else { body };
        fb.put_str(x, top.saturating_add(i as u16), line, style);
    }
}

/// Label, then a number on the line below. Returns the next free row.
pub(crate) fn draw_stat(fb: &mut FrameBuffer, x: u16, y: u16, label: &str, value: u32) -> u16 {
    fb.put_str(x, y, label, label_style());
    fb.put_u32(x, y.saturating_add(1), value, value_style());
    y.saturating_add(3)
}
