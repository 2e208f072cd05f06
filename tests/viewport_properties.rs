//! Property-based invariants for the viewport controller and renderer:
//!
//! 1. Effective depth is non-decreasing in scale.
//! 2. Zoom-to-cursor keeps the local point under the cursor fixed.
//! 3. Score never decreases and the high score never trails it.
//! 4. An unculled tree of depth d draws exactly 3^d triangles.

use std::borrow::Cow;

use proptest::prelude::*;
use sierpinski_zoom::domain::{
    effective_depth, Point, SierpinskiRenderer, Surface, TriangleNode, ViewportTransform,
    triangle_height,
};
use sierpinski_zoom::{GameConfig, ViewportController, ZoomDirection};

struct CountingSurface {
    fills: u64,
}

impl Surface for CountingSurface {
    fn width(&self) -> u32 {
        640
    }
    fn height(&self) -> u32 {
        480
    }
    fn clear(&mut self) {
        self.fills = 0;
    }
    fn fill_triangle(&mut self, _vertices: [Point; 3]) {
        self.fills += 1;
    }
    fn pixels(&mut self) -> Cow<'_, [u8]> {
        Cow::Owned(Vec::new())
    }
}

fn cursor_strategy() -> impl Strategy<Value = Point> {
    (0.0f64..800.0, 0.0f64..600.0).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn effective_depth_is_monotonic(
        base in 0u32..20,
        threshold in 0.5f64..10.0,
        a in 0.01f64..1e6,
        b in 0.01f64..1e6,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(effective_depth(base, lo, threshold) <= effective_depth(base, hi, threshold));
        prop_assert!(effective_depth(base, lo, threshold) >= base);
    }

    #[test]
    fn zoom_keeps_point_under_cursor(
        steps in prop::collection::vec((cursor_strategy(), 1.01f64..3.0), 1..30),
    ) {
        let mut transform = ViewportTransform::new(800.0, 600.0);
        for (cursor, factor) in steps {
            let before = transform.to_local(cursor);
            transform.zoom_at(cursor, factor);
            let after = transform.to_local(cursor);
            prop_assert!((before.x - after.x).abs() <= 1e-6, "x drifted: {:?} -> {:?}", before, after);
            prop_assert!((before.y - after.y).abs() <= 1e-6, "y drifted: {:?} -> {:?}", before, after);
        }
    }

    #[test]
    fn score_is_monotonic(events in prop::collection::vec((any::<bool>(), cursor_strategy()), 0..60)) {
        let mut ctl = ViewportController::new(GameConfig::default());
        let mut last = 0;
        let mut zoom_ins = 0;
        for (zoom_in, cursor) in events {
            let direction = if zoom_in { ZoomDirection::In } else { ZoomDirection::Out };
            ctl.apply_zoom(direction, cursor);
            zoom_ins += zoom_in as u64;
            let state = ctl.state();
            prop_assert!(state.score >= last);
            prop_assert!(state.high_score >= state.score);
            last = state.score;
        }
        prop_assert_eq!(last, zoom_ins * 10);
    }

    #[test]
    fn unculled_tree_draws_three_to_the_depth(
        depth in 0u32..7,
        size in 1.0f64..200.0,
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0,
    ) {
        let (w, h) = (640.0, 480.0);
        let apex = Point::new(size / 2.0 + fx * (w - size), fy * (h - triangle_height(size)));
        let renderer = SierpinskiRenderer::new(ViewportTransform::new(w, h), w, h);
        let mut surface = CountingSurface { fills: 0 };
        let stats = renderer.render_node(&mut surface, TriangleNode::new(apex, size, depth));
        prop_assert_eq!(stats.drawn, 3u64.pow(depth));
        prop_assert_eq!(surface.fills, stats.drawn);
        prop_assert_eq!(stats.culled, 0);
    }
}
