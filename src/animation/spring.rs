//! Damped-spring entrance curves.
//!
//! Springs are evaluated in closed form from the frame number, never stepped: the same
//! `(frame, fps, config)` always yields the same value, regardless of which frames were
//! evaluated before.

use crate::foundation::core::Fps;
use crate::foundation::error::{ReelError, ReelResult};

/// Physical parameters of a unit spring released from rest at 0 toward 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpringConfig {
    /// Velocity damping coefficient, `>= 0`.
    pub damping: f64,
    /// Moving mass, `> 0`.
    pub mass: f64,
    /// Spring constant, `> 0`.
    pub stiffness: f64,
    /// Cap the output at 1 instead of letting it overshoot.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            mass: 1.0,
            stiffness: 100.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Config with the given damping and mass and default stiffness.
    pub fn new(damping: f64, mass: f64) -> Self {
        Self {
            damping,
            mass,
            ..Self::default()
        }
    }

    /// Same config with `stiffness` replaced.
    pub fn with_stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Same config with overshoot clamping toggled.
    pub fn with_overshoot_clamping(mut self, clamp: bool) -> Self {
        self.overshoot_clamping = clamp;
        self
    }

    /// Reject parameters the closed-form response is undefined for.
    pub fn validate(&self) -> ReelResult<()> {
        for (name, v) in [
            ("damping", self.damping),
            ("mass", self.mass),
            ("stiffness", self.stiffness),
        ] {
            if !v.is_finite() {
                return Err(ReelError::invalid_easing_params(format!(
                    "spring {name} must be finite, got {v}"
                )));
            }
        }
        if self.mass <= 0.0 {
            return Err(ReelError::invalid_easing_params(format!(
                "spring mass must be > 0, got {}",
                self.mass
            )));
        }
        if self.stiffness <= 0.0 {
            return Err(ReelError::invalid_easing_params(format!(
                "spring stiffness must be > 0, got {}",
                self.stiffness
            )));
        }
        if self.damping < 0.0 {
            return Err(ReelError::invalid_easing_params(format!(
                "spring damping must be >= 0, got {}",
                self.damping
            )));
        }
        Ok(())
    }

    /// Damping ratio ζ; `< 1` overshoots, `>= 1` settles monotonically.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Named spring configurations shared by every section renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpringPreset {
    /// Over-damped, quick settle without overshoot.
    Ease,
    /// Under-damped with one visible overshoot.
    Bounce,
    /// Heavily over-damped, slow glide used for section entrances.
    Smooth,
    /// Strongly under-damped, rings several times before settling.
    Elastic,
}

impl SpringPreset {
    /// Every preset, in declaration order.
    pub const ALL: [SpringPreset; 4] = [
        SpringPreset::Ease,
        SpringPreset::Bounce,
        SpringPreset::Smooth,
        SpringPreset::Elastic,
    ];

    /// The fixed configuration behind this preset.
    pub fn config(self) -> SpringConfig {
        match self {
            Self::Ease => SpringConfig::new(100.0, 1.0),
            Self::Bounce => SpringConfig::new(8.0, 0.5),
            Self::Smooth => SpringConfig::new(200.0, 2.0),
            Self::Elastic => SpringConfig::new(4.0, 1.0),
        }
    }
}

impl From<SpringPreset> for SpringConfig {
    fn from(preset: SpringPreset) -> Self {
        preset.config()
    }
}

/// Spring progress at `local_frame` frames after release.
///
/// Frames at or before release return exactly `0`, which is how delayed reveals stay hidden.
pub fn spring_ease(local_frame: i64, fps: Fps, config: &SpringConfig) -> ReelResult<f64> {
    fps.validate()?;
    config.validate()?;
    if local_frame <= 0 {
        return Ok(0.0);
    }

    let t = local_frame as f64 * fps.frame_duration_secs();
    let v = step_response(t, config.stiffness, config.damping, config.mass);
    Ok(if config.overshoot_clamping {
        v.min(1.0)
    } else {
        v
    })
}

// Step response from 0 to 1 with x(0)=0, v(0)=0.
fn step_response(t: f64, stiffness: f64, damping: f64, mass: f64) -> f64 {
    let w0 = (stiffness / mass).sqrt();
    let zeta = damping / (2.0 * (stiffness * mass).sqrt());

    if (zeta - 1.0).abs() < 1e-6 {
        // Critically damped.
        let e = (-w0 * t).exp();
        1.0 - e * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * w0 * t).exp();
        let k = zeta / (1.0 - zeta * zeta).sqrt();
        1.0 - e * ((wd * t).cos() + k * (wd * t).sin())
    } else {
        // Over-damped. `zeta - z2` is rewritten as `1 / (zeta + z2)` to avoid cancellation.
        let z2 = (zeta * zeta - 1.0).sqrt();
        let slow = 1.0 / (zeta + z2);
        let fast = zeta + z2;
        let c_slow = fast / (2.0 * z2);
        let c_fast = slow / (2.0 * z2);
        1.0 - (c_slow * (-w0 * slow * t).exp() - c_fast * (-w0 * fast * t).exp())
    }
}

/// A spring mapped onto an arbitrary output span with an optional start delay.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Spring {
    /// Physical parameters.
    pub config: SpringConfig,
    /// Output at rest.
    pub from: f64,
    /// Output once settled.
    pub to: f64,
    /// Frames to wait before release.
    pub delay: u64,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            config: SpringConfig::default(),
            from: 0.0,
            to: 1.0,
            delay: 0,
        }
    }
}

impl Spring {
    /// Unit spring with the given configuration.
    pub fn new(config: impl Into<SpringConfig>) -> Self {
        Self {
            config: config.into(),
            ..Self::default()
        }
    }

    /// Remap the output span.
    pub fn from_to(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Delay release by `frames`.
    pub fn delay(mut self, frames: u64) -> Self {
        self.delay = frames;
        self
    }

    /// Sample at `local_frame`.
    pub fn sample(&self, local_frame: i64, fps: Fps) -> ReelResult<f64> {
        let delay = i64::try_from(self.delay).unwrap_or(i64::MAX);
        let p = spring_ease(local_frame.saturating_sub(delay), fps, &self.config)?;
        Ok(self.from + (self.to - self.from) * p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
