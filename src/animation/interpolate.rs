use crate::animation::ease::Ease;
use crate::foundation::error::{ReelError, ReelResult};

/// Behaviour of [`interpolate`] for inputs outside a segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Extrapolate {
    /// Continue the segment's slope.
    #[default]
    Extend,
    /// Pin to the nearest knot.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

/// Options for [`interpolate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterpolateOpts {
    /// Behaviour below the first knot.
    pub extrapolate_left: Extrapolate,
    /// Behaviour above the last knot.
    pub extrapolate_right: Extrapolate,
    /// Curve applied to the segment-normalized input.
    pub easing: Ease,
}

impl InterpolateOpts {
    /// Clamp on both sides with a linear curve.
    pub const CLAMPED: Self = Self {
        extrapolate_left: Extrapolate::Clamp,
        extrapolate_right: Extrapolate::Clamp,
        easing: Ease::Linear,
    };

    /// Same options with `easing` replaced.
    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }
}

/// Map `x` linearly from `input` to `output`, clamping `x` into `input` first.
///
/// `input[0] == input[1]` is rejected with [`ReelError::DegenerateRange`] rather than picking a
/// fallback output.
pub fn ramp_ease(x: f64, input: [f64; 2], output: [f64; 2]) -> ReelResult<f64> {
    interpolate(x, &input, &output, InterpolateOpts::CLAMPED)
}

/// Piecewise interpolation of `x` over matching knot lists.
///
/// `input` must be strictly increasing and as long as `output` (at least two knots). The
/// segment whose left knot is the last one `<= x` is used; inputs below the first knot use the
/// first segment.
pub fn interpolate(
    x: f64,
    input: &[f64],
    output: &[f64],
    opts: InterpolateOpts,
) -> ReelResult<f64> {
    validate_ranges(input, output)?;
    if !x.is_finite() {
        return Err(ReelError::validation(format!(
            "interpolation input must be finite, got {x}"
        )));
    }

    let seg = input[1..input.len() - 1]
        .iter()
        .take_while(|&&knot| knot <= x)
        .count();
    let (in_lo, in_hi) = (input[seg], input[seg + 1]);
    let (out_lo, out_hi) = (output[seg], output[seg + 1]);

    let below = seg == 0 && x < in_lo;
    let above = seg == input.len() - 2 && x > in_hi;

    let mut v = x;
    if below {
        match opts.extrapolate_left {
            Extrapolate::Identity => return Ok(x),
            Extrapolate::Clamp => v = in_lo,
            Extrapolate::Extend => {}
        }
    }
    if above {
        match opts.extrapolate_right {
            Extrapolate::Identity => return Ok(x),
            Extrapolate::Clamp => v = in_hi,
            Extrapolate::Extend => {}
        }
    }

    if out_lo == out_hi {
        return Ok(out_lo);
    }

    let t = (v - in_lo) / (in_hi - in_lo);
    let t = match opts.easing {
        // Linear keeps `t` unclamped so `Extend` can run past the knots.
        Ease::Linear => t,
        ease => ease.apply(t),
    };
    if t == 1.0 {
        return Ok(out_hi);
    }
    Ok(out_lo + (out_hi - out_lo) * t)
}

fn validate_ranges(input: &[f64], output: &[f64]) -> ReelResult<()> {
    if input.len() < 2 {
        return Err(ReelError::degenerate_range(
            "input range must have at least two knots",
        ));
    }
    if input.len() != output.len() {
        return Err(ReelError::degenerate_range(format!(
            "input range has {} knots but output range has {}",
            input.len(),
            output.len()
        )));
    }
    if let Some(v) = input.iter().chain(output).find(|v| !v.is_finite()) {
        return Err(ReelError::validation(format!(
            "interpolation knots must be finite, got {v}"
        )));
    }
    if let Some(w) = input.windows(2).find(|w| w[0] >= w[1]) {
        return Err(ReelError::degenerate_range(format!(
            "input range must be strictly increasing, got {} then {}",
            w[0], w[1]
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
