mod geometry;
mod triangle;
mod transform;
mod lod;
mod surface;
mod renderer;
pub mod saturation;

pub use geometry::{Point, Rect};
pub use triangle::{TriangleNode, triangle_height};
pub use transform::{MAX_SCALE_FACTOR, ViewportTransform};
pub use lod::effective_depth;
pub use surface::{PixelSurface, Surface, BLACK, WHITE};
pub use renderer::{RenderStats, SierpinskiRenderer};
pub use saturation::{is_saturated, is_saturated_serial};
