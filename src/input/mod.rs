use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::EventHandler;
use macroquad::prelude::*;

use crate::application::{ViewportController, ZoomDirection};
use crate::domain::Point;
use crate::ui::{over_canvas, Button};

/// Queue of raw wheel events. `mouse_wheel()` only reports the sum over a
/// frame, so events are replayed one by one from miniquad instead.
pub struct WheelEvents {
    subscriber: usize,
    pending: Vec<f32>,
}

impl WheelEvents {
    pub fn new() -> Self {
        Self {
            subscriber: register_input_subscriber(),
            pending: Vec::new(),
        }
    }

    /// Vertical deltas received since the last call, oldest first
    pub fn drain(&mut self) -> Vec<f32> {
        let subscriber = self.subscriber;
        repeat_all_miniquad_input(self, subscriber);
        std::mem::take(&mut self.pending)
    }
}

impl Default for WheelEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for WheelEvents {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn mouse_wheel_event(&mut self, _x: f32, y: f32) {
        self.pending.push(y);
    }
}

/// One zoom step per wheel event. Scrolling outside the canvas is ignored.
/// Returns the number of steps that changed the view.
pub fn apply_wheel_events(
    controller: &mut ViewportController,
    deltas: impl IntoIterator<Item = f32>,
    mouse_pos: (f32, f32),
) -> usize {
    let config = controller.config();
    let (width, height) = (config.canvas_width as f32, config.canvas_height as f32);
    if !over_canvas(mouse_pos, width, height) {
        return 0;
    }
    let cursor = Point::new(mouse_pos.0 as f64, mouse_pos.1 as f64);
    deltas
        .into_iter()
        .filter_map(ZoomDirection::from_wheel)
        .filter(|&direction| controller.apply_zoom(direction, cursor))
        .count()
}

/// Feed this frame's wheel events to the controller
pub fn handle_zoom(controller: &mut ViewportController, wheel: &mut WheelEvents, mouse_pos: (f32, f32)) {
    apply_wheel_events(controller, wheel.drain(), mouse_pos);
}

/// Play Again button or the R key
pub fn handle_reset(controller: &mut ViewportController, play_again: &Button, mouse_pos: (f32, f32)) {
    if play_again.is_clicked(mouse_pos) || is_key_pressed(KeyCode::R) {
        controller.reset();
    }
}
