//! Free-running periodic motion driven by the raw frame counter.
//!
//! These never settle and are not tied to section boundaries: pulsing icons, shaking effects,
//! spinning gears and slow camera sway.

use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::foundation::core::Vec2;
use crate::foundation::error::ReelResult;

/// Sine pulse mapped from `[-1, 1]` onto `range`.
///
/// `rate` is in radians per frame.
pub fn pulse(frame: u64, rate: f64, range: [f64; 2]) -> ReelResult<f64> {
    let s = (frame as f64 * rate).sin();
    interpolate(s, &[-1.0, 1.0], &range, InterpolateOpts::default())
}

/// Horizontal shake of `amplitude` around zero.
pub fn wobble(frame: u64, rate: f64, amplitude: f64) -> f64 {
    (frame as f64 * rate).sin() * amplitude
}

/// Constant-speed rotation in degrees, wrapped to `[0, 360)`.
pub fn spin(frame: u64, degrees_per_frame: f64) -> f64 {
    (frame as f64 * degrees_per_frame).rem_euclid(360.0)
}

/// Two-axis sway: `x` follows a sine and `y` a cosine, each with its own rate and amplitude.
pub fn drift(frame: u64, rates: Vec2, amplitudes: Vec2) -> Vec2 {
    let f = frame as f64;
    Vec2::new(
        (f * rates.x).sin() * amplitudes.x,
        (f * rates.y).cos() * amplitudes.y,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/oscillate.rs"]
mod tests;
