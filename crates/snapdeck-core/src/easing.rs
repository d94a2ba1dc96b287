/// Symmetric cubic ease-in-out over `t` in \[0, 1\].
///
/// Inputs outside the unit interval are clamped, so callers can feed raw
/// `elapsed / duration` ratios without pre-clamping.
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Linear interpolation between `from` and `to` at eased progress `t`.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
