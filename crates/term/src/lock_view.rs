//! LockView: maps a `core::LockSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It also owns the dial layout math, which the
//! runner uses in reverse to turn mouse cells into pointer deltas for the
//! engine.

use tui_lockpick_core::LockSnapshot;
use tui_lockpick_types::{SoundCue, BREAKING_BASE, BREAKING_RANGE, TURN_COMPLETE_DEG};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal glyphs are roughly twice as tall as wide; one dial unit spans
/// this many columns horizontally and one row vertically.
const CELL_ASPECT: f32 = 2.0;

/// Columns reserved for the side panel.
const PANEL_WIDTH: u16 = 22;

/// Rows reserved under the dial for the turn/stress bars and the hint line.
const BOTTOM_ROWS: u16 = 4;

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

/// Where the dial sits on screen, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialLayout {
    pub center_x: u16,
    pub center_y: u16,
    /// Dial radius in rows; the horizontal extent is `radius * CELL_ASPECT`.
    pub radius: f32,
}

impl DialLayout {
    /// Pointer delta in dial units for a mouse cell.
    ///
    /// Returns `None` when the pointer is off the dial surface; the caller
    /// drops the event silently.
    pub fn pointer_delta(&self, column: u16, row: u16) -> Option<(f32, f32)> {
        let dx = (column as f32 - self.center_x as f32) / CELL_ASPECT;
        let dy = row as f32 - self.center_y as f32;
        if dx == 0.0 && dy == 0.0 {
            // Dead center carries no direction.
            return None;
        }
        let dist = (dx * dx + dy * dy).sqrt();
        if dist > self.radius * 1.5 {
            return None;
        }
        Some((dx, dy))
    }
}

/// Renders the lock dial, needle, bars and side panel.
pub struct LockView {
    /// Preferred dial radius in rows; shrunk to fit small viewports.
    radius: u16,
}

impl Default for LockView {
    fn default() -> Self {
        Self { radius: 9 }
    }
}

impl LockView {
    pub fn new(radius: u16) -> Self {
        Self { radius }
    }

    /// Compute where the dial lands for a viewport.
    pub fn layout(&self, viewport: Viewport) -> DialLayout {
        let avail_w = viewport.width.saturating_sub(PANEL_WIDTH);
        let avail_h = viewport.height.saturating_sub(BOTTOM_ROWS);

        let fit_rows = avail_h.saturating_sub(1) / 2;
        let fit_cols = avail_w.saturating_sub(1) / (2 * CELL_ASPECT as u16);
        let r = self.radius.min(fit_rows).min(fit_cols).max(2);

        DialLayout {
            center_x: (avail_w / 2).max(r * CELL_ASPECT as u16),
            center_y: (avail_h / 2).max(r),
            radius: r as f32,
        }
    }

    /// Render a snapshot into an existing framebuffer (allocation-free).
    pub fn render_into(
        &self,
        snap: &LockSnapshot,
        last_cue: Option<SoundCue>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let layout = self.layout(viewport);

        self.draw_ring(fb, &layout, snap);
        self.draw_keyhole(fb, &layout, snap);
        self.draw_needle(fb, &layout, snap);
        self.draw_bars(fb, &layout, viewport, snap);
        self.draw_panel(fb, viewport, snap, last_cue);
        self.draw_overlay(fb, &layout, snap);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &LockSnapshot,
        last_cue: Option<SoundCue>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, last_cue, viewport, &mut fb);
        fb
    }

    fn draw_ring(&self, fb: &mut FrameBuffer, layout: &DialLayout, snap: &LockSnapshot) {
        let ring = CellStyle::default().fg(Rgb::new(90, 90, 100)).dimmed();
        let zone = CellStyle::default().fg(Rgb::new(90, 220, 110)).bold();

        let mut deg = -180.0f32;
        while deg < 180.0 {
            let (x, y) = polar_cell(layout, deg, layout.radius);
            let in_zone = deg >= snap.zone_start && deg <= snap.zone_end;
            let (ch, style) = if in_zone { ('█', zone) } else { ('·', ring) };
            put_signed(fb, x, y, ch, style);
            deg += 2.0;
        }
    }

    fn draw_needle(&self, fb: &mut FrameBuffer, layout: &DialLayout, snap: &LockSnapshot) {
        let style = if snap.breaking {
            CellStyle::default().fg(Rgb::new(230, 70, 70)).bold()
        } else if snap.is_success {
            CellStyle::default().fg(Rgb::new(120, 230, 140)).bold()
        } else {
            CellStyle::default().fg(Rgb::new(230, 230, 230))
        };

        let mut r = 1.0f32;
        while r < layout.radius {
            let (x, y) = polar_cell(layout, snap.pin_angle, r);
            put_signed(fb, x, y, '█', style);
            r += 0.5;
        }
    }

    fn draw_keyhole(&self, fb: &mut FrameBuffer, layout: &DialLayout, snap: &LockSnapshot) {
        let style = CellStyle::default().fg(Rgb::new(220, 190, 90));

        // The keyhole points down at rest and sweeps clockwise as the
        // screwdriver turns.
        let angle = 180.0 + snap.screwdriver_angle;
        let mut r = 0.5f32;
        while r < layout.radius * 0.5 {
            let (x, y) = polar_cell(layout, angle, r);
            put_signed(fb, x, y, '▓', style);
            r += 0.5;
        }
        fb.put_char(layout.center_x, layout.center_y, 'O', style.bold());
    }

    fn draw_bars(
        &self,
        fb: &mut FrameBuffer,
        layout: &DialLayout,
        viewport: Viewport,
        snap: &LockSnapshot,
    ) {
        let label = CellStyle::default().bold();
        let y0 = (layout.center_y + layout.radius as u16).saturating_add(2);
        let bar_w = 20u16;
        let x0 = layout
            .center_x
            .saturating_sub(bar_w / 2 + 4)
            .min(viewport.width.saturating_sub(bar_w + 8));

        let turn_frac = (snap.screwdriver_angle / TURN_COMPLETE_DEG).clamp(0.0, 1.0);
        fb.put_str(x0, y0, "TURN", label);
        draw_bar(fb, x0 + 6, y0, bar_w, turn_frac, Rgb::new(220, 190, 90));

        let stress_frac = (snap.pressure / (BREAKING_BASE + BREAKING_RANGE)).clamp(0.0, 1.0);
        let stress_color = if stress_frac > 0.5 {
            Rgb::new(230, 70, 70)
        } else if stress_frac > 0.25 {
            Rgb::new(230, 190, 80)
        } else {
            Rgb::new(120, 230, 140)
        };
        fb.put_str(x0, y0 + 1, "STRESS", label);
        draw_bar(fb, x0 + 6, y0 + 1, bar_w, stress_frac, stress_color);

        let hint = CellStyle::default().dimmed();
        fb.put_str(
            x0.saturating_sub(4),
            y0 + 2,
            "mouse: set pick   hold a: turn   r: retry   q: quit",
            hint,
        );
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        snap: &LockSnapshot,
        last_cue: Option<SoundCue>,
    ) {
        let panel_x = viewport.width.saturating_sub(PANEL_WIDTH);
        if panel_x == 0 {
            return;
        }
        let label = CellStyle::default().bold();
        let value = CellStyle::default().fg(Rgb::new(200, 200, 200));

        let mut y = 1u16;
        fb.put_str(panel_x, y, "PINS", label);
        y += 1;
        let left = snap.pin_budget.saturating_sub(snap.broken_pins);
        fb.put_u32(panel_x, y, left, value);
        let slash_x = panel_x + decimal_width(left);
        fb.put_char(slash_x, y, '/', value);
        fb.put_u32(slash_x + 1, y, snap.pin_budget, value);
        y += 2;

        fb.put_str(panel_x, y, "SKILL", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.skill, value);
        y += 2;

        fb.put_str(panel_x, y, "LOCK", label);
        y += 1;
        fb.put_str(panel_x, y, snap.difficulty.as_str(), value);
        y += 2;

        // Zone width derived from skill and the difficulty modifier.
        fb.put_str(panel_x, y, "ZONE", label);
        y += 1;
        let width = snap.zone_size.round() as u32;
        fb.put_u32(panel_x, y, width, value);
        fb.put_char(panel_x + decimal_width(width), y, '°', value);
        y += 2;

        fb.put_str(panel_x, y, "PIN #", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.pin_generation + 1, value);
        y += 2;

        if let Some(cue) = last_cue {
            let dim = CellStyle::default().dimmed();
            fb.put_char(panel_x, y, '♪', dim);
            fb.put_str(panel_x + 2, y, cue.as_str(), dim);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &DialLayout, snap: &LockSnapshot) {
        let text = if snap.cracked {
            "UNLOCKED"
        } else if snap.game_over {
            "OUT OF PICKS"
        } else if snap.breaking {
            "PICK BROKE"
        } else {
            return;
        };

        let style = CellStyle::default().fg(Rgb::new(255, 255, 255)).bold();
        let w = text.chars().count() as u16;
        let x = layout.center_x.saturating_sub(w / 2);
        let y = layout.center_y.saturating_sub(layout.radius as u16 / 2);
        fb.put_str(x, y, text, style);
    }
}

fn decimal_width(mut v: u32) -> u16 {
    let mut w = 1u16;
    while v >= 10 {
        v /= 10;
        w += 1;
    }
    w
}

/// Cell for a polar coordinate on the dial (0° up, clockwise positive).
fn polar_cell(layout: &DialLayout, angle_deg: f32, r: f32) -> (i32, i32) {
    let rad = angle_deg.to_radians();
    let x = layout.center_x as f32 + rad.sin() * r * CELL_ASPECT;
    let y = layout.center_y as f32 - rad.cos() * r;
    (x.round() as i32, y.round() as i32)
}

fn put_signed(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, style: CellStyle) {
    if x < 0 || y < 0 {
        return;
    }
    fb.put_char(x as u16, y as u16, ch, style);
}

fn draw_bar(fb: &mut FrameBuffer, x: u16, y: u16, width: u16, frac: f32, color: Rgb) {
    let filled = (frac * width as f32).round() as u16;
    let on = CellStyle::default().fg(color);
    let off = CellStyle::default().fg(Rgb::new(70, 70, 80)).dimmed();
    for i in 0..width {
        let (ch, style) = if i < filled { ('█', on) } else { ('░', off) };
        fb.put_char(x + i, y, ch, style);
    }
}
