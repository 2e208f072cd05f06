//! Recursive Sierpinski rendering with viewport culling.
//!
//! Each node's local bounding box is mapped through the active transform
//! and tested against the visible screen rectangle before the node is
//! drawn or subdivided, so a culled node prunes its whole subtree. The
//! recursion runs on an explicit worklist instead of the call stack since
//! the LOD policy keeps raising the depth as the player zooms in.

use super::{Point, Rect, Surface, TriangleNode, ViewportTransform};

/// Counters from one render pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Nodes taken off the worklist, culled or not
    pub visited: u64,
    /// Nodes rejected by the viewport test
    pub culled: u64,
    /// Base triangles filled
    pub drawn: u64,
}

pub struct SierpinskiRenderer {
    transform: ViewportTransform,
    viewport: Rect,
}

impl SierpinskiRenderer {
    /// Renderer for a `width` x `height` screen under `transform`
    pub fn new(transform: ViewportTransform, width: f64, height: f64) -> Self {
        Self {
            transform,
            viewport: Rect::from_size(width, height),
        }
    }

    /// Visible in screen space
    pub fn is_visible(&self, node: &TriangleNode) -> bool {
        self.transform
            .rect_to_screen(&node.bounds())
            .intersects(&self.viewport)
    }

    pub fn render<S: Surface>(
        &self,
        surface: &mut S,
        apex: Point,
        size: f64,
        depth: u32,
    ) -> RenderStats {
        self.render_node(surface, TriangleNode::new(apex, size, depth))
    }

    pub fn render_node<S: Surface>(&self, surface: &mut S, root: TriangleNode) -> RenderStats {
        let mut stats = RenderStats::default();
        let mut pending = vec![root];

        while let Some(node) = pending.pop() {
            stats.visited += 1;
            if !self.is_visible(&node) {
                stats.culled += 1;
                continue;
            }
            match node.children() {
                // Reversed so nodes come off the stack top, left, right
                Some([top, left, right]) => pending.extend([right, left, top]),
                None => {
                    let [a, b, c] = node.vertices();
                    surface.fill_triangle([
                        self.transform.to_screen(a),
                        self.transform.to_screen(b),
                        self.transform.to_screen(c),
                    ]);
                    stats.drawn += 1;
                }
            }
        }

        stats
    }
}
