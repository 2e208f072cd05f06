/// Level-of-detail policy: one extra recursion level each time the scale
/// doubles past `zoom_threshold`.
pub fn effective_depth(base_depth: u32, scale_factor: f64, zoom_threshold: f64) -> u32 {
    if scale_factor < zoom_threshold {
        return base_depth;
    }
    let boost = (scale_factor / zoom_threshold).log2().floor();
    base_depth.saturating_add(boost as u32)
}
