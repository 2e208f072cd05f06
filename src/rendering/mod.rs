use std::borrow::Cow;

use macroquad::prelude::*;

use crate::application::{FrameReport, GameOver, ViewportController};
use crate::domain::{Point, Surface};
use crate::ui::{high_score_label, panel_x, score_label, Button};

const FRACTAL_COLOR: Color = BLACK;

/// The on-screen fractal canvas in the top-left corner of the window
pub struct ScreenSurface {
    width: u32,
    height: u32,
}

impl ScreenSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[inline]
fn to_vec2(p: Point) -> Vec2 {
    vec2(p.x as f32, p.y as f32)
}

impl Surface for ScreenSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        draw_rectangle(0.0, 0.0, self.width as f32, self.height as f32, WHITE);
    }

    fn fill_triangle(&mut self, vertices: [Point; 3]) {
        let [a, b, c] = vertices;
        draw_triangle(to_vec2(a), to_vec2(b), to_vec2(c), FRACTAL_COLOR);
    }

    /// Reads back the framebuffer and crops it to the canvas
    fn pixels(&mut self) -> Cow<'_, [u8]> {
        let image = get_screen_data();
        let (image_w, image_h) = (image.width as usize, image.height as usize);
        let dpi_x = image_w as f32 / screen_width().max(1.0);
        let dpi_y = image_h as f32 / screen_height().max(1.0);
        let crop_w = (self.width as f32 * dpi_x).round() as usize;
        let crop_h = (self.height as f32 * dpi_y).round() as usize;
        Cow::Owned(crop_canvas(&image.bytes, image_w, image_h, crop_w, crop_h))
    }
}

/// Top-left `crop_w` x `crop_h` block of an RGBA8 screen image stored
/// bottom-up (OpenGL readback order). Rows come out bottom-up as well.
pub fn crop_canvas(
    bytes: &[u8],
    image_w: usize,
    image_h: usize,
    crop_w: usize,
    crop_h: usize,
) -> Vec<u8> {
    let (crop_w, crop_h) = (crop_w.min(image_w), crop_h.min(image_h));
    if crop_w == 0 || crop_h == 0 {
        // Nothing read back; report one dark pixel
        return vec![0, 0, 0, 255];
    }
    let row_bytes = image_w * 4;
    let mut canvas = Vec::with_capacity(crop_w * crop_h * 4);
    for row in bytes.chunks_exact(row_bytes).skip(image_h - crop_h) {
        canvas.extend_from_slice(&row[..crop_w * 4]);
    }
    canvas
}

fn draw_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Side panel: live score readout, Play Again button, view info
pub fn draw_panel(
    controller: &ViewportController,
    report: &FrameReport,
    play_again: &Button,
    render_ms: f32,
    mouse_pos: (f32, f32),
) {
    let canvas_width = controller.config().canvas_width as f32;
    draw_rectangle(
        canvas_width,
        0.0,
        screen_width() - canvas_width,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );

    let px = panel_x(canvas_width);
    let state = controller.state();
    draw_label(&score_label(state.score), px, 40.0, 24.0, WHITE);
    draw_label(
        &high_score_label(state.high_score),
        px,
        75.0,
        20.0,
        Color::from_rgba(255, 215, 0, 255),
    );

    play_again.draw(play_again.look(mouse_pos, state.ended));

    let (status, status_color) = if state.ended {
        ("Game Over", Color::from_rgba(255, 80, 80, 255))
    } else {
        ("Zooming", Color::from_rgba(0, 255, 150, 255))
    };

    let zoom = format!("{:.2}x", controller.transform().scale_factor);
    let depth = report.depth.to_string();
    let stats = format!("Drawn: {}  Culled: {}", report.stats.drawn, report.stats.culled);
    let timing = format!("Render: {:.1}ms", render_ms);

    let info: [(&str, f32, f32, Color); 11] = [
        ("Status:", 200.0, 16.0, WHITE),
        (status, 220.0, 16.0, status_color),
        ("Zoom:", 255.0, 16.0, WHITE),
        (&zoom, 275.0, 14.0, LIGHTGRAY),
        ("Depth:", 305.0, 16.0, WHITE),
        (&depth, 325.0, 14.0, LIGHTGRAY),
        (&stats, 350.0, 12.0, GRAY),
        (&timing, 365.0, 12.0, GRAY),
        ("Controls:", 410.0, 14.0, WHITE),
        ("Wheel up: Zoom in", 425.0, 12.0, GRAY),
        ("R: Play again", 438.0, 12.0, GRAY),
    ];

    info.iter().for_each(|(text, y, size, color)| {
        draw_label(text, px, *y, *size, *color);
    });
}

/// Terminal banner over the canvas
pub fn draw_game_over(over: &GameOver, canvas_width: f32, canvas_height: f32) {
    let box_w = 360.0_f32.min(canvas_width);
    let box_h = 110.0;
    let x = (canvas_width - box_w) / 2.0;
    let y = (canvas_height - box_h) / 2.0;
    draw_rectangle(x, y, box_w, box_h, Color::from_rgba(20, 20, 20, 220));
    draw_rectangle_lines(x, y, box_w, box_h, 2.0, WHITE);

    for (i, line) in over.to_string().lines().enumerate() {
        let size = measure_text(line, None, 26, 1.0);
        draw_text(
            line,
            x + (box_w - size.width) / 2.0,
            y + 42.0 + i as f32 * 36.0,
            26.0,
            WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::is_saturated;

    /// Bottom-up image: `rows[0]` is the bottom screen row
    fn image(rows: &[&[u8]]) -> Vec<u8> {
        rows.iter()
            .flat_map(|row| row.iter().flat_map(|&v| [v, v, v, 255]))
            .collect()
    }

    #[test]
    fn test_crop_keeps_canvas_columns_and_top_rows() {
        // 4 wide, 3 tall; canvas is the top-left 2x2, panel on the right
        let bytes = image(&[
            &[1, 2, 30, 40],
            &[3, 4, 50, 60],
            &[5, 6, 70, 80],
        ]);
        let canvas = crop_canvas(&bytes, 4, 3, 2, 2);
        let grey: Vec<u8> = canvas.chunks_exact(4).map(|px| px[0]).collect();
        assert_eq!(grey, vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_dark_panel_does_not_block_saturation() {
        let bytes = image(&[
            &[255, 255, 255, 30],
            &[255, 255, 255, 30],
        ]);
        assert!(!is_saturated(&bytes));
        assert!(is_saturated(&crop_canvas(&bytes, 4, 2, 3, 2)));
    }

    #[test]
    fn test_high_dpi_crop() {
        // Canvas covers the first 3 physical columns of a 6x2 image
        let bytes = image(&[
            &[255, 255, 255, 255, 0, 0],
            &[255, 255, 255, 0, 0, 0],
        ]);
        assert!(is_saturated(&crop_canvas(&bytes, 6, 2, 3, 2)));
        assert!(!is_saturated(&crop_canvas(&bytes, 6, 2, 4, 2)));
    }

    #[test]
    fn test_crop_larger_than_image_is_clamped() {
        let bytes = image(&[&[255, 255]]);
        assert_eq!(crop_canvas(&bytes, 2, 1, 10, 10).len(), 8);
    }

    #[test]
    fn test_empty_readback_is_not_white() {
        assert!(!is_saturated(&crop_canvas(&[], 0, 0, 800, 600)));
    }
}
