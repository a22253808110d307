use crate::animation::interpolate::ramp_ease;
use crate::animation::spring::{SpringPreset, spring_ease};
use crate::foundation::core::Fps;
use crate::foundation::error::ReelResult;
use crate::timeline::resolve::ResolvedPosition;

/// Per-section animation helpers evaluated at one resolved frame.
///
/// Every visual section builds its entrance, exit and staggered reveals from the same few
/// curves; this bundles them with the position they are measured against.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMotion {
    /// Position inside the active section.
    pub position: ResolvedPosition,
    /// Frame rate the springs are sampled at.
    pub fps: Fps,
}

impl SectionMotion {
    /// Bind a resolved position to a frame rate.
    pub fn new(position: ResolvedPosition, fps: Fps) -> Self {
        Self { position, fps }
    }

    fn local(&self) -> i64 {
        i64::try_from(self.position.section_local_frame).unwrap_or(i64::MAX)
    }

    /// Smooth spring from the first frame of the section.
    pub fn entrance(&self) -> ReelResult<f64> {
        spring_ease(self.local(), self.fps, &SpringPreset::Smooth.config())
    }

    /// Smooth spring over the last `lead_frames` of the section; `0` before that.
    pub fn exit(&self, lead_frames: u64) -> ReelResult<f64> {
        let duration = i64::try_from(self.position.section_duration_frames).unwrap_or(i64::MAX);
        let lead = i64::try_from(lead_frames).unwrap_or(i64::MAX);
        let exit_start = duration.saturating_sub(lead);
        spring_ease(
            self.local().saturating_sub(exit_start),
            self.fps,
            &SpringPreset::Smooth.config(),
        )
    }

    /// `entrance * (1 - exit)`: fades in at the start and out over the last `lead_frames`.
    pub fn presence(&self, lead_frames: u64) -> ReelResult<f64> {
        let v = self.entrance()? * (1.0 - self.exit(lead_frames)?);
        Ok(v.clamp(0.0, 1.0))
    }

    /// Bouncy pop-in starting `delay_frames` into the section.
    pub fn reveal(&self, delay_frames: u64) -> ReelResult<f64> {
        let delay = i64::try_from(delay_frames).unwrap_or(i64::MAX);
        spring_ease(
            self.local().saturating_sub(delay),
            self.fps,
            &SpringPreset::Bounce.config(),
        )
    }

    /// Linear `0 -> 1` while section progress moves from `a` to `b`, clamped outside.
    pub fn window(&self, a: f64, b: f64) -> ReelResult<f64> {
        ramp_ease(self.position.section_progress, [a, b], [0.0, 1.0])
    }

    /// `1 - progress * strength`, clamped to `[0, 1]`.
    pub fn fade_out(&self, strength: f64) -> f64 {
        (1.0 - self.position.section_progress * strength).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/motion.rs"]
mod tests;
