use super::{Point, Rect};

/// Largest scale the f64 math stays pixel-accurate at. Past roughly 1e13
/// the `translate + scale * (local - origin)` terms lose whole pixels and
/// the fractal drops out of view without really being white.
pub const MAX_SCALE_FACTOR: f64 = 1e11;

/// Viewport transform mapping local canvas coordinates to screen coordinates:
/// `screen = translate + scale * (local - origin)`, where `origin` is the
/// canvas center. Scale 1 with translate at the origin is the identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
    pub scale_factor: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    origin: Point,
}

impl ViewportTransform {
    /// Identity transform for a canvas of the given size
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        let origin = Point::new(canvas_width / 2.0, canvas_height / 2.0);
        Self {
            scale_factor: 1.0,
            translate_x: origin.x,
            translate_y: origin.y,
            origin,
        }
    }

    #[inline]
    pub fn to_screen(&self, local: Point) -> Point {
        Point::new(
            self.translate_x + self.scale_factor * (local.x - self.origin.x),
            self.translate_y + self.scale_factor * (local.y - self.origin.y),
        )
    }

    #[inline]
    pub fn to_local(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.translate_x) / self.scale_factor + self.origin.x,
            (screen.y - self.translate_y) / self.scale_factor + self.origin.y,
        )
    }

    /// Map a local rectangle to screen space (scale is always positive)
    pub fn rect_to_screen(&self, rect: &Rect) -> Rect {
        let tl = self.to_screen(Point::new(rect.left, rect.top));
        let br = self.to_screen(Point::new(rect.right, rect.bottom));
        Rect::new(tl.x, tl.y, br.x, br.y)
    }

    /// Multiply the scale by `factor` keeping the screen point `cursor`
    /// over the same local point.
    pub fn zoom_at(&mut self, cursor: Point, factor: f64) {
        let previous = self.scale_factor;
        self.scale_factor *= factor;
        let ratio = self.scale_factor / previous;
        self.translate_x = cursor.x - (cursor.x - self.translate_x) * ratio;
        self.translate_y = cursor.y - (cursor.y - self.translate_y) * ratio;
    }

    /// Back to the identity mapping
    pub fn reset(&mut self) {
        self.scale_factor = 1.0;
        self.translate_x = self.origin.x;
        self.translate_y = self.origin.y;
    }
}
