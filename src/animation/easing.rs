use crate::animation::interpolate::ramp_ease;
use crate::animation::spring::{SpringConfig, SpringPreset, spring_ease};
use crate::foundation::core::Fps;
use crate::foundation::error::ReelResult;

/// Per-call-site easing configuration, evaluated against a section-local frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EasingConfig {
    /// Damped spring released at local frame 0.
    Spring(SpringConfig),
    /// Clamped linear ramp over local frames.
    #[serde(rename_all = "camelCase")]
    Ramp {
        /// Local frames where the ramp starts and ends.
        input_range: [f64; 2],
        /// Values at the start and end of the ramp.
        output_range: [f64; 2],
    },
}

impl EasingConfig {
    /// Ramp from `output[0]` to `output[1]` between two local frames.
    pub fn ramp(input_range: [f64; 2], output_range: [f64; 2]) -> Self {
        Self::Ramp {
            input_range,
            output_range,
        }
    }

    /// Evaluate at `local_frame`.
    pub fn evaluate(&self, local_frame: i64, fps: Fps) -> ReelResult<f64> {
        match self {
            Self::Spring(config) => spring_ease(local_frame, fps, config),
            Self::Ramp {
                input_range,
                output_range,
            } => ramp_ease(local_frame as f64, *input_range, *output_range),
        }
    }
}

impl From<SpringConfig> for EasingConfig {
    fn from(config: SpringConfig) -> Self {
        Self::Spring(config)
    }
}

impl From<SpringPreset> for EasingConfig {
    fn from(preset: SpringPreset) -> Self {
        Self::Spring(preset.config())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/easing.rs"]
mod tests;
