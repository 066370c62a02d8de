use crate::foundation::error::SubframeResult;
use crate::shutter::curve::ShutterCurve;
use crate::shutter::profile::ShutterProfile;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Description of a multi-frame recording session.
///
/// A config is pure data: it can be built programmatically or loaded from
/// JSON. Validation happens when a session starts, so invalid shutter timings
/// are rejected at [`begin_recording`](crate::SubFrameManager::begin_recording)
/// rather than at construction.
pub struct RecordingConfig {
    /// Number of sub-frames accumulated into one final frame.
    pub sample_count: u32,
    /// Duration the virtual shutter stays open, normalized to frame time.
    /// `0` disables shutter weighting; so does `sample_count == 1`.
    #[serde(default)]
    pub shutter_interval: f32,
    /// Shutter motion shape.
    #[serde(default)]
    pub shape: ShutterShape,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Shutter motion shape.
pub enum ShutterShape {
    /// Linear opening ramp until `fully_open`, constant plateau, linear
    /// closing ramp after `begins_closing` (fractions of the interval).
    Trapezoid {
        /// Normalized time at which the shutter is fully open.
        #[serde(default)]
        fully_open: f32,
        /// Normalized time at which the shutter begins closing.
        #[serde(default = "default_begins_closing")]
        begins_closing: f32,
    },
    /// Explicit `(time, weight)` keys, linearly interpolated.
    Curve {
        /// Keys with times sorted ascending within `[0, 1]`.
        keys: Vec<(f32, f32)>,
    },
}

fn default_begins_closing() -> f32 {
    1.0
}

impl Default for ShutterShape {
    fn default() -> Self {
        Self::Trapezoid {
            fully_open: 0.0,
            begins_closing: 1.0,
        }
    }
}

impl RecordingConfig {
    /// Config with a trapezoidal shutter.
    pub fn trapezoid(
        sample_count: u32,
        shutter_interval: f32,
        fully_open: f32,
        begins_closing: f32,
    ) -> Self {
        Self {
            sample_count,
            shutter_interval,
            shape: ShutterShape::Trapezoid {
                fully_open,
                begins_closing,
            },
        }
    }

    /// Config with an explicit shutter curve.
    pub fn curved(sample_count: u32, shutter_interval: f32, keys: Vec<(f32, f32)>) -> Self {
        Self {
            sample_count,
            shutter_interval,
            shape: ShutterShape::Curve { keys },
        }
    }

    /// Build the validated shutter profile for this config.
    ///
    /// `interval` is the effective interval chosen by the session (`0` for
    /// single-sample recordings, whatever `shutter_interval` says otherwise).
    pub(crate) fn build_profile(&self, interval: f32) -> SubframeResult<ShutterProfile> {
        match &self.shape {
            ShutterShape::Trapezoid {
                fully_open,
                begins_closing,
            } => ShutterProfile::trapezoid(interval, *fully_open, *begins_closing),
            ShutterShape::Curve { keys } => {
                ShutterProfile::curved(interval, ShutterCurve::from_keys(keys)?)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/recording/config.rs"]
mod tests;
