//! Shared numeric helpers, easing curves and frame timing.

pub mod easing;
pub mod frame_timing;

/// Clamp a fraction to `[0, 1]`. NaN maps to 0.
#[inline]
#[must_use]
pub fn clamp01(x: f32) -> f32 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, 1.0)
}

/// Linear interpolation from `a` to `b` by `t` (unclamped). Exact at
/// both endpoints.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}
