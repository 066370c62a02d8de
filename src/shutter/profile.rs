use crate::foundation::error::{SubframeError, SubframeResult};
use crate::shutter::curve::ShutterCurve;

#[derive(Clone, Debug, PartialEq)]
/// Time-varying sample weight of a virtual camera shutter.
///
/// The profile maps elapsed time within the current accumulation sequence
/// (normalized frame time) to a weight. The default shape is a trapezoid: a
/// linear opening ramp until `fully_open`, a fully-open plateau, and a linear
/// closing ramp after `begins_closing`. An explicit [`ShutterCurve`] replaces
/// the trapezoid entirely.
///
/// An interval of `0` models an instant shutter: every sample weighs `1.0`.
/// This is the static-accumulation path used outside recording sessions.
pub struct ShutterProfile {
    interval: f32,
    fully_open: f32,
    begins_closing: f32,
    curve: Option<ShutterCurve>,
}

impl Default for ShutterProfile {
    fn default() -> Self {
        Self {
            interval: 0.0,
            fully_open: 0.0,
            begins_closing: 1.0,
            curve: None,
        }
    }
}

impl ShutterProfile {
    /// Build a trapezoidal profile.
    ///
    /// `interval` must be finite and non-negative. `fully_open` and
    /// `begins_closing` are fractions of the interval and must satisfy
    /// `0 <= fully_open <= begins_closing <= 1`.
    pub fn trapezoid(interval: f32, fully_open: f32, begins_closing: f32) -> SubframeResult<Self> {
        validate_interval(interval)?;
        if !fully_open.is_finite() || !begins_closing.is_finite() {
            return Err(SubframeError::validation("shutter open/close times must be finite"));
        }
        if !(0.0..=1.0).contains(&fully_open) || !(0.0..=1.0).contains(&begins_closing) {
            return Err(SubframeError::validation(
                "shutter open/close times must be within [0, 1]",
            ));
        }
        if fully_open > begins_closing {
            return Err(SubframeError::validation(format!(
                "shutter fully_open ({fully_open}) must be <= begins_closing ({begins_closing})"
            )));
        }
        Ok(Self {
            interval,
            fully_open,
            begins_closing,
            curve: None,
        })
    }

    /// Build a profile driven by an explicit weight curve.
    pub fn curved(interval: f32, curve: ShutterCurve) -> SubframeResult<Self> {
        validate_interval(interval)?;
        Ok(Self {
            interval,
            fully_open: 0.0,
            begins_closing: 1.0,
            curve: Some(curve),
        })
    }

    /// Shutter interval in normalized frame time.
    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Whether the shutter is instant (interval `0`, every weight is `1.0`).
    pub fn is_instant(&self) -> bool {
        self.interval == 0.0
    }

    /// Weight of a sample taken at elapsed time `t` within the exposure.
    ///
    /// Samples past the closed shutter (`t > interval`) weigh `0.0`. They do
    /// not normally occur at a steady sampling rate, but must not fail.
    pub fn weight(&self, t: f32) -> f32 {
        if self.interval == 0.0 {
            return 1.0;
        }
        if t > self.interval {
            return 0.0;
        }

        // Scale so the shutter interval spans [0, 1].
        let u = t / self.interval;

        if let Some(curve) = &self.curve {
            return curve.evaluate(u);
        }

        if u < self.fully_open {
            u / self.fully_open
        } else if u > self.begins_closing {
            1.0 - (u - self.begins_closing) / (1.0 - self.begins_closing)
        } else {
            1.0
        }
    }
}

fn validate_interval(interval: f32) -> SubframeResult<()> {
    if !interval.is_finite() || interval < 0.0 {
        return Err(SubframeError::validation(format!(
            "shutter interval {interval} must be finite and >= 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/shutter/profile.rs"]
mod tests;
