use crate::foundation::error::{ReelError, ReelResult};

/// A time window `[from, from + duration)` inside a section.
///
/// Panels of a manga page and other nested clips use these to get their own local frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SequenceDef")]
pub struct Sequence {
    /// First frame of the window.
    pub from: u64,
    /// Window length, `> 0`.
    pub duration: u64,
}

impl Sequence {
    /// Build a window, rejecting zero length.
    pub fn new(from: u64, duration: u64) -> ReelResult<Self> {
        if duration == 0 {
            return Err(ReelError::invalid_table("sequence duration must be > 0"));
        }
        if from.checked_add(duration).is_none() {
            return Err(ReelError::invalid_table("sequence end overflows u64 frames"));
        }
        Ok(Self { from, duration })
    }

    /// `count` back-to-back windows of `duration` frames starting at 0.
    pub fn uniform(count: usize, duration: u64) -> ReelResult<Vec<Self>> {
        let mut from = 0u64;
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            let seq = Self::new(from, duration)?;
            from = seq.end();
            out.push(seq);
        }
        Ok(out)
    }

    /// One past the last frame.
    pub fn end(self) -> u64 {
        self.from.saturating_add(self.duration)
    }

    /// Whether `frame` lies inside the window.
    pub fn contains(self, frame: u64) -> bool {
        frame >= self.from && frame < self.end()
    }

    /// Frame relative to the window start, if inside.
    pub fn local_frame(self, frame: u64) -> Option<u64> {
        self.contains(frame).then(|| frame - self.from)
    }

    /// Progress through the window: `0` before it, `1` after it.
    pub fn progress(self, frame: u64) -> f64 {
        if frame <= self.from || self.duration == 0 {
            return 0.0;
        }
        let local = frame - self.from;
        if local >= self.duration {
            return 1.0;
        }
        local as f64 / self.duration as f64
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SequenceDef {
    from: u64,
    duration: u64,
}

impl TryFrom<SequenceDef> for Sequence {
    type Error = ReelError;

    fn try_from(def: SequenceDef) -> Result<Self, Self::Error> {
        Self::new(def.from, def.duration)
    }
}

/// First panel containing `frame`, with the frame local to that panel.
pub fn active_panel(panels: &[Sequence], frame: u64) -> Option<(usize, u64)> {
    panels
        .iter()
        .enumerate()
        .find_map(|(i, p)| p.local_frame(frame).map(|local| (i, local)))
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequence.rs"]
mod tests;
