use log::{debug, info};

use super::{GameOver, GameState};
use crate::config::GameConfig;
use crate::domain::{
    effective_depth, is_saturated, Point, RenderStats, SierpinskiRenderer, Surface, TriangleNode,
    ViewportTransform, MAX_SCALE_FACTOR,
};

/// Direction of one scroll step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Positive wheel y (scroll up) zooms in
    pub fn from_wheel(delta_y: f32) -> Option<Self> {
        if delta_y > 0.0 {
            Some(ZoomDirection::In)
        } else if delta_y < 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }
}

/// Result of one display frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub stats: RenderStats,
    pub depth: u32,
    /// Set on the frame that ended the game
    pub game_over: Option<GameOver>,
}

/// Owns the viewport transform and game state, turns scroll input into
/// zoom steps and decides when the game is over.
pub struct ViewportController {
    config: GameConfig,
    transform: ViewportTransform,
    state: GameState,
    input_enabled: bool,
    redraw_requested: bool,
}

impl ViewportController {
    pub fn new(config: GameConfig) -> Self {
        let transform =
            ViewportTransform::new(config.canvas_width as f64, config.canvas_height as f64);
        let state = GameState::new(&config);
        Self {
            config,
            transform,
            state,
            input_enabled: true,
            redraw_requested: true,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn transform(&self) -> &ViewportTransform {
        &self.transform
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Apply one scroll step at `cursor` (canvas coordinates).
    /// Returns whether anything changed.
    pub fn apply_zoom(&mut self, direction: ZoomDirection, cursor: Point) -> bool {
        if !self.input_enabled || direction == ZoomDirection::Out {
            return false;
        }

        let factor = 1.0 + self.config.zoom_factor;
        if self.transform.scale_factor * factor > MAX_SCALE_FACTOR {
            debug!("zoom limit reached at scale {:.3e}", self.transform.scale_factor);
            return false;
        }

        let depth_before = self.effective_depth();
        self.transform.zoom_at(cursor, factor);
        self.state.award(self.config.score_increment);
        self.redraw_requested = true;

        debug!(
            "zoom in at ({:.1}, {:.1}): scale {:.4}, score {}",
            cursor.x, cursor.y, self.transform.scale_factor, self.state.score
        );
        let depth = self.effective_depth();
        if depth != depth_before {
            debug!("recursion depth {} -> {}", depth_before, depth);
        }
        true
    }

    /// Depth for the current scale
    pub fn effective_depth(&self) -> u32 {
        effective_depth(
            self.state.max_depth,
            self.transform.scale_factor,
            self.config.zoom_threshold,
        )
    }

    pub fn is_saturated<S: Surface>(&self, surface: &mut S) -> bool {
        is_saturated(&surface.pixels())
    }

    /// Freeze zoom input and hand back the final tally, once per game.
    pub fn end_game(&mut self) -> Option<GameOver> {
        let over = self.state.end()?;
        self.input_enabled = false;
        info!(
            "game over: score {}, high score {}",
            over.score, over.high_score
        );
        Some(over)
    }

    pub fn reset(&mut self) {
        self.state.reset(&self.config);
        self.transform.reset();
        self.input_enabled = true;
        self.redraw_requested = true;
        info!("game reset (high score {})", self.state.high_score);
    }

    /// Consume the pending redraw, if any
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Draw the current view into `surface`, then run the end-of-game check
    /// if a redraw was pending.
    pub fn render_frame<S: Surface>(&mut self, surface: &mut S) -> FrameReport {
        let depth = self.effective_depth();
        let root = TriangleNode::root(
            self.config.canvas_width as f64,
            self.config.canvas_height as f64,
            depth,
        );
        let renderer = SierpinskiRenderer::new(
            self.transform,
            surface.width() as f64,
            surface.height() as f64,
        );

        surface.clear();
        let stats = renderer.render_node(surface, root);

        let game_over = if self.take_redraw_request() && self.is_saturated(surface) {
            self.end_game()
        } else {
            None
        };

        FrameReport {
            stats,
            depth,
            game_over,
        }
    }
}
