// Domain layer - geometry, fractal rendering, saturation oracle
pub mod domain;

// Application layer - game state and viewport control
pub mod application;

pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{PixelSurface, Point, SierpinskiRenderer, Surface, TriangleNode, ViewportTransform};
pub use application::{GameOver, GameState, ViewportController, ZoomDirection};
pub use config::{ConfigError, GameConfig};
