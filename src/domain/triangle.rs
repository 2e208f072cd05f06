//! Sierpinski subdivision of an upward-pointing equilateral triangle.
//!
//! Nodes are never stored: the renderer recomputes them every frame from
//! the root apex, size and depth.

use super::{Point, Rect};

/// Height of an equilateral triangle with the given side length
#[inline]
pub fn triangle_height(size: f64) -> f64 {
    size * 3f64.sqrt() / 2.0
}

/// One node of the subdivision tree, in local (pre-transform) space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleNode {
    pub apex: Point,
    pub size: f64,
    pub depth: u32,
}

impl TriangleNode {
    pub const fn new(apex: Point, size: f64, depth: u32) -> Self {
        Self { apex, size, depth }
    }

    /// Root node of a canvas: half the canvas width wide, centered on the
    /// canvas center.
    pub fn root(canvas_width: f64, canvas_height: f64, depth: u32) -> Self {
        let size = canvas_width / 2.0;
        let apex = Point::new(
            canvas_width / 2.0,
            canvas_height / 2.0 - size * 3f64.sqrt() / 4.0,
        );
        Self::new(apex, size, depth)
    }

    pub fn height(&self) -> f64 {
        triangle_height(self.size)
    }

    /// Bounding box anchored at the apex
    pub fn bounds(&self) -> Rect {
        let half = self.size / 2.0;
        Rect::new(
            self.apex.x - half,
            self.apex.y,
            self.apex.x + half,
            self.apex.y + self.height(),
        )
    }

    /// Apex, bottom-right, bottom-left
    pub fn vertices(&self) -> [Point; 3] {
        let half = self.size / 2.0;
        let base_y = self.apex.y + self.height();
        [
            self.apex,
            Point::new(self.apex.x + half, base_y),
            Point::new(self.apex.x - half, base_y),
        ]
    }

    /// Top, bottom-left and bottom-right children at half size.
    /// Returns `None` for leaves.
    pub fn children(&self) -> Option<[TriangleNode; 3]> {
        if self.depth == 0 {
            return None;
        }
        let size = self.size / 2.0;
        let depth = self.depth - 1;
        let drop = triangle_height(size);
        let Point { x, y } = self.apex;
        Some([
            TriangleNode::new(self.apex, size, depth),
            TriangleNode::new(Point::new(x - size / 2.0, y + drop), size, depth),
            TriangleNode::new(Point::new(x + size / 2.0, y + drop), size, depth),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_leaf_has_no_children() {
        let leaf = TriangleNode::new(Point::new(0.0, 0.0), 10.0, 0);
        assert!(leaf.children().is_none());
    }

    #[test]
    fn test_children_layout() {
        let node = TriangleNode::new(Point::new(100.0, 0.0), 40.0, 3);
        let [top, left, right] = node.children().unwrap();

        assert_eq!(top.apex, node.apex);
        assert_eq!(top.size, 20.0);
        assert_eq!(top.depth, 2);

        let drop = triangle_height(20.0);
        assert_relative_eq!(left.apex.x, 90.0);
        assert_relative_eq!(left.apex.y, drop);
        assert_relative_eq!(right.apex.x, 110.0);
        assert_relative_eq!(right.apex.y, drop);
    }

    #[test]
    fn test_children_stay_inside_parent_bounds() {
        let node = TriangleNode::new(Point::new(50.0, 10.0), 64.0, 1);
        let outer = node.bounds();
        for child in node.children().unwrap() {
            let b = child.bounds();
            assert!(b.left >= outer.left - 1e-9 && b.right <= outer.right + 1e-9);
            assert!(b.top >= outer.top - 1e-9 && b.bottom <= outer.bottom + 1e-9);
        }
    }

    #[test]
    fn test_root_is_centered_on_canvas() {
        let root = TriangleNode::root(800.0, 600.0, 5);
        let b = root.bounds();
        assert_relative_eq!(root.size, 400.0);
        assert_relative_eq!((b.left + b.right) / 2.0, 400.0);
        assert_relative_eq!((b.top + b.bottom) / 2.0, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_vertices_form_upward_triangle() {
        let node = TriangleNode::new(Point::new(0.0, 0.0), 2.0, 0);
        let [apex, br, bl] = node.vertices();
        assert_eq!(apex, Point::new(0.0, 0.0));
        assert_relative_eq!(br.x, 1.0);
        assert_relative_eq!(bl.x, -1.0);
        assert_relative_eq!(br.y, 3f64.sqrt());
        assert_eq!(br.y, bl.y);
    }
}
