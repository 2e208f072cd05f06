mod controller;
mod game_state;

pub use controller::{FrameReport, ViewportController, ZoomDirection};
pub use game_state::{GameOver, GameState};
