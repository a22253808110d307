use crate::animation::lerp::Lerp;
use crate::foundation::error::{ReelError, ReelResult};

/// Which of `bands` equal slices of `[0, 1]` a progress value falls into.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Band {
    /// Active slice, `< bands`.
    pub index: usize,
    /// Following slice, pinned to the last one.
    pub next: usize,
    /// Position inside the active slice, `[0, 1)`; `0` at progress `1`.
    pub t: f64,
}

impl Band {
    /// Blend `stops[index]` towards `stops[next]` by `t`.
    ///
    /// `None` if `stops` is shorter than the band count it was computed for.
    pub fn blend<T: Lerp>(&self, stops: &[T]) -> Option<T> {
        let a = stops.get(self.index)?;
        let b = stops.get(self.next)?;
        Some(T::lerp(a, b, self.t))
    }
}

/// Split `progress` (clamped to `[0, 1]`) into `bands` slices.
pub fn band(progress: f64, bands: usize) -> ReelResult<Band> {
    if bands == 0 {
        return Err(ReelError::invalid_table("band count must be > 0"));
    }
    if !progress.is_finite() {
        return Err(ReelError::validation("band progress must be finite"));
    }

    let last = bands - 1;
    let scaled = progress.clamp(0.0, 1.0) * bands as f64;
    let index = (scaled.floor() as usize).min(last);
    let t = if index == last && scaled >= bands as f64 {
        0.0
    } else {
        scaled - index as f64
    };

    Ok(Band {
        index,
        next: (index + 1).min(last),
        t,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/band.rs"]
mod tests;
