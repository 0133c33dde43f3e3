use crate::foundation::core::{Rect, Rgba8};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Compositing mode applied when a particle is painted over the buffer.
pub enum BlendMode {
    /// Source-over compositing.
    #[default]
    Normal,
    /// Additive (saturating per-channel) compositing.
    Additive,
}

/// 2D drawing surface the engine paints into.
///
/// Drawing coordinates are device-independent; the backing buffer is sized in
/// device pixels and a scale transform maps between the two. Per tick the
/// surface issues exactly one [`clear`](RenderContext::clear), then one
/// save/restore pair wrapping one [`fill_rect`](RenderContext::fill_rect) per
/// active particle. Paint state (global alpha, blend mode, fill color) is
/// save/restored so configuration does not leak across ticks.
pub trait RenderContext {
    /// Resize the backing buffer to `width x height` device pixels and set the
    /// device-pixel scale transform applied to drawing coordinates.
    fn resize(&mut self, width: u32, height: u32, scale: f64);

    /// Clear the whole buffer to transparent.
    fn clear(&mut self);

    /// Push the current paint state.
    fn save(&mut self);

    /// Pop back to the most recently saved paint state. Popping an empty
    /// stack leaves the current state untouched.
    fn restore(&mut self);

    /// Current global alpha multiplier.
    fn global_alpha(&self) -> f64;

    /// Set the global alpha multiplier (clamped to `[0, 1]`).
    fn set_global_alpha(&mut self, alpha: f64);

    /// Select the compositing mode for subsequent fills.
    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Select the fill color for subsequent fills.
    fn set_fill(&mut self, color: Rgba8);

    /// Fill an axis-aligned rectangle, in device-independent coordinates.
    /// Empty or inverted rectangles are no-ops.
    fn fill_rect(&mut self, rect: Rect);
}
