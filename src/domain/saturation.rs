//! End-of-game oracle: the canvas is saturated once every pixel is white.
//! Alpha is ignored.

use rayon::prelude::*;

#[inline]
fn is_white(px: &[u8]) -> bool {
    px[0] == 255 && px[1] == 255 && px[2] == 255
}

/// Parallel scan over RGBA8 bytes
pub fn is_saturated(rgba: &[u8]) -> bool {
    rgba.par_chunks_exact(4).all(is_white)
}

/// Serial scan, kept for benchmark comparison
pub fn is_saturated_serial(rgba: &[u8]) -> bool {
    rgba.chunks_exact(4).all(is_white)
}
