//! Drawing surfaces the fractal renderer fills.

use std::borrow::Cow;

use super::Point;

pub const WHITE: [u8; 4] = [255, 255, 255, 255];
pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// A 2D canvas in screen space
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Clear to the white background
    fn clear(&mut self);

    /// Fill a triangle given in screen coordinates
    fn fill_triangle(&mut self, vertices: [Point; 3]);

    /// Read back the canvas as row-major RGBA8
    fn pixels(&mut self) -> Cow<'_, [u8]>;
}

/// Software RGBA8 canvas. A pixel is covered when its center lies inside
/// (or on the edge of) the triangle.
#[derive(Clone)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    fill: [u8; 4],
    pixels: Vec<u8>,
}

impl PixelSurface {
    /// New surface cleared to white
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fill: BLACK,
            pixels: WHITE.repeat((width * height) as usize),
        }
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if x < self.width && y < self.height {
            let idx = ((y * self.width + x) * 4) as usize;
            self.pixels[idx..idx + 4].copy_from_slice(&color);
        }
    }

    /// Number of pixels that are not pure white
    pub fn covered_pixels(&self) -> usize {
        self.pixels
            .chunks_exact(4)
            .filter(|px| px[..3] != WHITE[..3])
            .count()
    }
}

#[inline]
fn edge(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

impl Surface for PixelSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.pixels
            .chunks_exact_mut(4)
            .for_each(|px| px.copy_from_slice(&WHITE));
    }

    fn fill_triangle(&mut self, vertices: [Point; 3]) {
        let [a, b, c] = vertices;
        let area = edge(a, b, c);
        if area == 0.0 || !area.is_finite() {
            return;
        }

        let (w, h) = (self.width as f64, self.height as f64);
        let min_x = a.x.min(b.x).min(c.x).max(0.0);
        let max_x = a.x.max(b.x).max(c.x).min(w);
        let min_y = a.y.min(b.y).min(c.y).max(0.0);
        let max_y = a.y.max(b.y).max(c.y).min(h);
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        let (x0, x1) = (min_x.floor() as u32, max_x.ceil() as u32);
        let (y0, y1) = (min_y.floor() as u32, max_y.ceil() as u32);
        let sign = area.signum();

        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let inside = edge(a, b, p) * sign >= 0.0
                    && edge(b, c, p) * sign >= 0.0
                    && edge(c, a, p) * sign >= 0.0;
                if inside {
                    self.set_pixel(x, y, self.fill);
                }
            }
        }
    }

    fn pixels(&mut self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self.pixels)
    }
}

#[cfg(test)]
impl PixelSurface {
    fn with_fill(mut self, fill: [u8; 4]) -> Self {
        self.fill = fill;
        self
    }

    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        let mut out = [0; 4];
        out.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(out)
    }
}
