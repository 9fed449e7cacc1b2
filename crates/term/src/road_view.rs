//! RoadView: maps a world snapshot into a terminal framebuffer.
//!
//! Pure (no I/O) and unit-testable. The view owns the cosmetic road scroll
//! offset; it advances once per rendered frame while the game runs and wraps
//! at the field height, independent of simulation state.

use crate::core::{ObstacleView, WorldSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{
    VehicleKind, FIELD_HEIGHT, FIELD_WIDTH, LANE_WIDTH, ROAD_MARGIN, ROAD_SCROLL_STEP,
};

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

/// Field pixels per terminal column.
const PX_PER_COL: f64 = 10.0;
/// Field pixels per terminal row (glyphs are roughly twice as tall as wide).
const PX_PER_ROW: f64 = 20.0;
/// Dashed lane divider period in field pixels (20 px dash, 20 px gap).
const DASH_PERIOD: f64 = 40.0;

const FIELD_COLS: u16 = (FIELD_WIDTH / PX_PER_COL) as u16;
const FIELD_ROWS: u16 = (FIELD_HEIGHT / PX_PER_ROW) as u16;
/// Side panel width, including the gap to the field.
const PANEL_COLS: u16 = 12;

pub struct RoadView {
    scroll: f64,
}

impl Default for RoadView {
    fn default() -> Self {
        Self { scroll: 0.0 }
    }
}

impl RoadView {
    /// Current scroll offset in field pixels (cosmetic).
    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// The allocation-free hot path: callers reuse one framebuffer across
    /// frames. The scroll offset advances only while the game is running.
    pub fn render_into(&mut self, snap: &WorldSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        if snap.playing() {
            self.scroll = (self.scroll + ROAD_SCROLL_STEP) % FIELD_HEIGHT;
        }

        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        // Center the field plus the side panel when both fit, else the field.
        let block = if viewport.width >= FIELD_COLS + PANEL_COLS {
            FIELD_COLS + PANEL_COLS
        } else {
            FIELD_COLS
        };
        let start_x = viewport.width.saturating_sub(block) / 2;
        let start_y = viewport.height.saturating_sub(FIELD_ROWS) / 2;

        self.draw_road(fb, start_x, start_y);
        for obstacle in &snap.obstacles {
            self.draw_obstacle(fb, start_x, start_y, obstacle);
        }
        self.draw_vehicle(fb, start_x, start_y, snap);
        self.draw_side_panel(fb, snap, viewport, start_x, start_y);
        self.draw_overlays(fb, snap, start_x, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, snap: &WorldSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_road(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16) {
        let verge = CellStyle {
            fg: Rgb::new(60, 140, 60),
            bg: Rgb::new(20, 60, 20),
            bold: false,
            dim: false,
        };
        let asphalt = CellStyle {
            fg: Rgb::new(70, 70, 70),
            bg: Rgb::new(25, 25, 25),
            bold: false,
            dim: false,
        };
        let verge_cols = (ROAD_MARGIN / PX_PER_COL) as u16;
        let road_cols = FIELD_COLS - 2 * verge_cols;

        fb.fill_rect(start_x, start_y, verge_cols, FIELD_ROWS, '▒', verge);
        fb.fill_rect(
            start_x + FIELD_COLS - verge_cols,
            start_y,
            verge_cols,
            FIELD_ROWS,
            '▒',
            verge,
        );
        fb.fill_rect(start_x + verge_cols, start_y, road_cols, FIELD_ROWS, ' ', asphalt);

        let divider = CellStyle {
            fg: Rgb::new(230, 230, 230),
            bg: Rgb::new(25, 25, 25),
            bold: false,
            dim: false,
        };
        for boundary in 1..4u16 {
            let px = ROAD_MARGIN + boundary as f64 * LANE_WIDTH;
            let col = start_x + (px / PX_PER_COL) as u16;
            let solid = boundary == 2;
            for row in 0..FIELD_ROWS {
                // Dash phase follows the scrolling road surface.
                let py = row as f64 * PX_PER_ROW + PX_PER_ROW / 2.0;
                let dashed_on = (py + self.scroll).rem_euclid(DASH_PERIOD) < DASH_PERIOD / 2.0;
                if solid || dashed_on {
                    fb.put_char(col, start_y + row, '│', divider);
                }
            }
        }
    }

    fn draw_obstacle(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, ob: &ObstacleView) {
        let palette = [
            Rgb::new(220, 80, 80),
            Rgb::new(255, 165, 0),
            Rgb::new(80, 120, 220),
            Rgb::new(200, 200, 200),
        ];
        let fg = palette[ob.style as usize % palette.len()];
        let style = CellStyle {
            fg,
            bg: Rgb::new(25, 25, 25),
            bold: false,
            dim: false,
        };
        self.fill_field_rect(fb, start_x, start_y, ob.bounds, '█', style);
    }

    fn draw_vehicle(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, snap: &WorldSnapshot) {
        let fg = match snap.vehicle.kind {
            VehicleKind::Bike => Rgb::new(240, 220, 80),
            VehicleKind::Car => Rgb::new(80, 220, 220),
            VehicleKind::Truck => Rgb::new(200, 120, 220),
        };
        let style = CellStyle {
            fg,
            bg: Rgb::new(25, 25, 25),
            bold: true,
            dim: false,
        };
        // The tilt reads as a leaning block while sliding.
        let ch = if snap.vehicle.rotation < -0.5 {
            '▛'
        } else if snap.vehicle.rotation > 0.5 {
            '▜'
        } else {
            '█'
        };
        self.fill_field_rect(fb, start_x, start_y, snap.vehicle.bounds, ch, style);
    }

    /// Fill the terminal cells covered by a field-space rectangle.
    fn fill_field_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        bounds: crate::types::Rect,
        ch: char,
        style: CellStyle,
    ) {
        let col0 = (bounds.x / PX_PER_COL).floor().max(0.0) as u16;
        let col1 = ((bounds.right() / PX_PER_COL).ceil().max(0.0) as u16).min(FIELD_COLS);
        let row0 = (bounds.y / PX_PER_ROW).floor().max(0.0) as u16;
        let row1 = ((bounds.bottom() / PX_PER_ROW).ceil().max(0.0) as u16).min(FIELD_ROWS);
        for row in row0..row1 {
            for col in col0..col1 {
                fb.put_char(start_x + col, start_y + row, ch, style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &WorldSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
    ) {
        let panel_x = start_x.saturating_add(FIELD_COLS).saturating_add(2);
        if panel_x.saturating_add(PANEL_COLS - 2) > viewport.width {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HIGH", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.high_score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.level, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "VEHICLE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.vehicle.kind.as_str(), value);
    }

    fn draw_overlays(&self, fb: &mut FrameBuffer, snap: &WorldSnapshot, start_x: u16, start_y: u16) {
        if snap.playing() && snap.level_banner_ms > 0 {
            let banner = CellStyle {
                fg: Rgb::new(240, 220, 80),
                bg: Rgb::new(25, 25, 25),
                bold: true,
                dim: false,
            };
            let digits = decimal_width(snap.level);
            let x = self.centered_x(start_x, 7 + digits);
            fb.put_str(x, start_y + 2, "LEVEL ", banner);
            let written = fb.put_u32(x + 6, start_y + 2, snap.level, banner);
            fb.put_char(x + 6 + written, start_y + 2, '!', banner);
        }

        if !snap.started {
            self.overlay_line(fb, start_x, start_y, FIELD_ROWS / 2, "PRESS ENTER TO START");
        } else if snap.paused {
            self.overlay_line(fb, start_x, start_y, FIELD_ROWS / 2, "PAUSED");
        } else if snap.game_over {
            let mid = FIELD_ROWS / 2;
            self.overlay_line(fb, start_x, start_y, mid - 1, "GAME OVER");
            let x = self.centered_x(start_x, 14);
            let style = overlay_style();
            fb.put_str(x, start_y + mid, "SCORE ", style);
            fb.put_u32(x + 6, start_y + mid, snap.score, style);
            fb.put_str(x, start_y + mid + 1, "HIGH  ", style);
            fb.put_u32(x + 6, start_y + mid + 1, snap.high_score, style);
            self.overlay_line(fb, start_x, start_y, mid + 2, "PRESS ENTER TO RESTART");
        }
    }

    fn overlay_line(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u16, text: &str) {
        let x = self.centered_x(start_x, text.chars().count() as u16);
        fb.put_str(x, start_y + row, text, overlay_style());
    }

    fn centered_x(&self, start_x: u16, text_w: u16) -> u16 {
        start_x + FIELD_COLS.saturating_sub(text_w) / 2
    }
}

fn decimal_width(value: u32) -> u16 {
    let mut width = 1;
    let mut n = value / 10;
    while n > 0 {
        width += 1;
        n /= 10;
    }
    width
}

fn overlay_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(0, 0, 0),
        bold: true,
        dim: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains_text(fb: &FrameBuffer, needle: &str) -> bool {
        for y in 0..fb.height() {
            let row: String = (0..fb.width())
                .map(|x| fb.get(x, y).unwrap_or_default().ch)
                .collect();
            if row.contains(needle) {
                return true;
            }
        }
        false
    }

    #[test]
    fn fresh_session_shows_the_start_prompt() {
        let mut view = RoadView::default();
        let snap = WorldSnapshot::default();
        let fb = view.render(&snap, Viewport::new(80, 32));
        assert!(contains_text(&fb, "PRESS ENTER TO START"));
        // Not playing yet, so the scroll stays put.
        assert_eq!(view.scroll(), 0.0);
    }

    #[test]
    fn scroll_advances_only_while_playing() {
        let mut view = RoadView::default();
        let mut snap = WorldSnapshot::default();
        snap.started = true;
        view.render(&snap, Viewport::new(80, 32));
        assert_eq!(view.scroll(), ROAD_SCROLL_STEP);

        snap.paused = true;
        view.render(&snap, Viewport::new(80, 32));
        assert_eq!(view.scroll(), ROAD_SCROLL_STEP);
    }

    #[test]
    fn scroll_wraps_at_the_field_height() {
        let mut view = RoadView::default();
        let mut snap = WorldSnapshot::default();
        snap.started = true;
        let frames = (FIELD_HEIGHT / ROAD_SCROLL_STEP) as u32;
        for _ in 0..frames {
            view.render(&snap, Viewport::new(80, 32));
        }
        assert_eq!(view.scroll(), 0.0);
    }

    #[test]
    fn paused_and_game_over_overlays() {
        let mut view = RoadView::default();
        let mut snap = WorldSnapshot::default();
        snap.started = true;
        snap.paused = true;
        assert!(contains_text(
            &view.render(&snap, Viewport::new(80, 32)),
            "PAUSED"
        ));

        snap.paused = false;
        snap.game_over = true;
        let fb = view.render(&snap, Viewport::new(80, 32));
        assert!(contains_text(&fb, "GAME OVER"));
        assert!(contains_text(&fb, "PRESS ENTER TO RESTART"));
    }

    #[test]
    fn tiny_viewports_do_not_panic() {
        let mut view = RoadView::default();
        let snap = WorldSnapshot::default();
        let fb = view.render(&snap, Viewport::new(10, 4));
        assert_eq!((fb.width(), fb.height()), (10, 4));
    }
}
