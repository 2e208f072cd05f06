//! Performance benchmark for the software render path and saturation scan

use std::time::Instant;
use sierpinski_zoom::domain::{
    effective_depth, is_saturated, is_saturated_serial, PixelSurface, Point, SierpinskiRenderer,
    Surface, TriangleNode, ViewportTransform,
};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn zoomed_transform(scale: f64) -> ViewportTransform {
    let mut transform = ViewportTransform::new(WIDTH as f64, HEIGHT as f64);
    // Zoom toward the inner edge of the bottom-left corner
    transform.zoom_at(Point::new(250.0, 350.0), scale);
    transform
}

fn benchmark_render(scale: f64, iterations: u32) -> (f64, u64, u32) {
    let transform = zoomed_transform(scale);
    let depth = effective_depth(5, transform.scale_factor, 2.0);
    let renderer = SierpinskiRenderer::new(transform, WIDTH as f64, HEIGHT as f64);
    let root = TriangleNode::root(WIDTH as f64, HEIGHT as f64, depth);
    let mut surface = PixelSurface::new(WIDTH, HEIGHT);

    let mut drawn = 0;
    let start = Instant::now();
    for _ in 0..iterations {
        surface.clear();
        drawn = renderer.render_node(&mut surface, root).drawn;
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, drawn, depth)
}

fn benchmark_scan(scan: fn(&[u8]) -> bool, pixels: &[u8], iterations: u32) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        std::hint::black_box(scan(std::hint::black_box(pixels)));
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Sierpinski Render Benchmark ({}x{}) ===\n", WIDTH, HEIGHT);

    let scales = [1.0, 2.0, 8.0, 64.0, 1024.0, 65536.0];
    let iterations = 20;

    println!("{:>10} {:>8} {:>10} {:>12}", "Scale", "Depth", "Drawn", "ms/frame");
    println!("{:-<44}", "");

    for scale in scales {
        let (ms, drawn, depth) = benchmark_render(scale, iterations);
        println!("{:>10} {:>8} {:>10} {:>12.2}", scale, depth, drawn, ms);
    }

    println!("\n=== Saturation Scan ===\n");

    // A white canvas is the worst case: every pixel gets inspected
    let mut white = PixelSurface::new(WIDTH, HEIGHT);
    let pixels = white.pixels().into_owned();
    let scan_iterations = 200;
    let serial_ms = benchmark_scan(is_saturated_serial, &pixels, scan_iterations);
    let parallel_ms = benchmark_scan(is_saturated, &pixels, scan_iterations);

    println!("Serial:   {:>8.3} ms", serial_ms);
    println!("Parallel: {:>8.3} ms", parallel_ms);
    println!("Speedup:  {:>8.1}x", serial_ms / parallel_ms);
}
