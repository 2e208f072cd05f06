mod button;

pub use button::{Button, ButtonLook};

use macroquad::prelude::Rect;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const PANEL_MARGIN: f32 = 10.0;

/// X position where the panel starts, right of the canvas
pub fn panel_x(canvas_width: f32) -> f32 {
    canvas_width + PANEL_MARGIN
}

/// Whether a screen position lies over the fractal canvas
pub fn over_canvas(pos: (f32, f32), canvas_width: f32, canvas_height: f32) -> bool {
    pos.0 >= 0.0 && pos.0 < canvas_width && pos.1 >= 0.0 && pos.1 < canvas_height
}

pub fn score_label(score: u64) -> String {
    format!("Score: {}", score)
}

pub fn high_score_label(high_score: u64) -> String {
    format!("High Score: {}", high_score)
}

/// Play Again button under the score readout
pub fn create_play_again_button(canvas_width: f32) -> Button {
    let bounds = Rect::new(
        panel_x(canvas_width),
        120.0,
        PANEL_WIDTH - 2.0 * PANEL_MARGIN,
        BUTTON_HEIGHT,
    );
    Button::new(bounds, "Play Again")
}
