#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Opaque identifier of a camera tracked by the accumulation engine.
///
/// The engine never interprets the value; hosts typically use an instance id or
/// a slot index of their own camera objects.
pub struct CameraId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Blend coefficients for folding one sub-frame sample into a running weighted
/// average.
///
/// The standard incremental update an external compositor performs is:
///
/// ```text
/// new_avg = (old_avg * prior_total + sample * current) * inverse_total
/// ```
pub struct FrameWeights {
    /// Weight of the current sample.
    pub current: f32,
    /// Sum of all sample weights accumulated before this one.
    pub prior_total: f32,
    /// Reciprocal of the sum including the current sample, or `0.0` while
    /// nothing has contributed yet.
    pub inverse_total: f32,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
