/// Linear interpolation between `a` and `b` at parameter `t`.
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Reciprocal of `v`, with `0.0` as the sentinel for an empty accumulation.
pub(crate) fn recip_or_zero(v: f32) -> f32 {
    if v > 0.0 { 1.0 / v } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
