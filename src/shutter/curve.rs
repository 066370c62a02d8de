use crate::foundation::error::{SubframeError, SubframeResult};
use crate::foundation::math::lerp;

#[derive(Clone, Copy, Debug, PartialEq)]
struct CurveKey {
    time: f32,
    weight: f32,
}

#[derive(Clone, Debug, PartialEq)]
/// Explicit shutter motion curve: sample weight as a function of normalized
/// exposure time.
///
/// A curve is a sorted list of `(time, weight)` keys over `[0, 1]`, linearly
/// interpolated between keys and clamped to the first/last key outside the
/// keyed range. When a curve is attached to a
/// [`ShutterProfile`](crate::ShutterProfile) it fully replaces the trapezoidal
/// shape.
pub struct ShutterCurve {
    keys: Vec<CurveKey>,
}

impl ShutterCurve {
    /// Build a curve from `(time, weight)` keys.
    ///
    /// Times must be finite, non-decreasing and within `[0, 1]`; weights must
    /// be finite and non-negative. At least one key is required.
    pub fn from_keys(keys: &[(f32, f32)]) -> SubframeResult<Self> {
        if keys.is_empty() {
            return Err(SubframeError::validation("shutter curve needs at least one key"));
        }

        let mut out = Vec::with_capacity(keys.len());
        let mut prev_time = 0.0f32;
        for (i, &(time, weight)) in keys.iter().enumerate() {
            if !time.is_finite() || !(0.0..=1.0).contains(&time) {
                return Err(SubframeError::validation(format!(
                    "shutter curve key {i}: time {time} must be within [0, 1]"
                )));
            }
            if i > 0 && time < prev_time {
                return Err(SubframeError::validation(format!(
                    "shutter curve key {i}: times must be non-decreasing"
                )));
            }
            if !weight.is_finite() || weight < 0.0 {
                return Err(SubframeError::validation(format!(
                    "shutter curve key {i}: weight {weight} must be finite and >= 0"
                )));
            }
            prev_time = time;
            out.push(CurveKey { time, weight });
        }

        Ok(Self { keys: out })
    }

    /// Evaluate the curve at normalized exposure time `u`.
    ///
    /// `u` below the first key returns the first weight; `u` above the last key
    /// returns the last weight.
    pub fn evaluate(&self, u: f32) -> f32 {
        let first = self.keys[0];
        if u <= first.time {
            return first.weight;
        }
        let last = self.keys[self.keys.len() - 1];
        if u >= last.time {
            return last.weight;
        }

        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if u <= b.time {
                if b.time == a.time {
                    return b.weight;
                }
                let t = (u - a.time) / (b.time - a.time);
                return lerp(a.weight, b.weight, t);
            }
        }
        last.weight
    }

    /// Number of keys in the curve.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the curve has no keys. Always false for validated curves.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shutter/curve.rs"]
mod tests;
