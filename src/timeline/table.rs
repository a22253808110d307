use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{ReelError, ReelResult};
use crate::timeline::resolve::{ResolvedPosition, resolve};
use crate::timeline::section::SectionId;

/// One section and how long it plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionEntry {
    /// Which section plays.
    pub name: SectionId,
    /// Length in frames, `> 0`.
    pub duration_frames: u64,
}

impl SectionEntry {
    /// Pair a section with its length.
    pub fn new(name: SectionId, duration_frames: u64) -> Self {
        Self {
            name,
            duration_frames,
        }
    }
}

/// JSON boundary shape of a [`SectionEntry`].
///
/// The duration is signed so negative values reach table validation instead of failing as a
/// type mismatch.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionEntryDef {
    pub(crate) name: SectionId,
    pub(crate) duration_frames: i64,
}

/// Ordered, immutable list of sections laid back to back from frame 0.
///
/// Prefix start offsets and the total are computed once at construction, so resolving a frame
/// is a binary search.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<SectionEntryDef>", into = "Vec<SectionEntry>")]
pub struct SectionTable {
    entries: Vec<SectionEntry>,
    starts: Vec<u64>,
    total: u64,
}

const MANGA_DURATIONS: [(SectionId, u64); 10] = [
    (SectionId::Foundations, 480),
    (SectionId::PublicKey, 120),
    (SectionId::Randomness, 180),
    (SectionId::Threshold, 240),
    (SectionId::Shamir, 240),
    (SectionId::Dkg, 300),
    (SectionId::Bls, 540),
    (SectionId::ThresholdBls, 360),
    (SectionId::Encryption, 240),
    (SectionId::RealWorld, 900),
];

const CUBIST_SECTION_FRAMES: u64 = 180;

impl SectionTable {
    /// Validate and index `entries`.
    pub fn new(entries: Vec<SectionEntry>) -> ReelResult<Self> {
        if entries.is_empty() {
            return Err(ReelError::invalid_table("section table must not be empty"));
        }
        if let Some((i, e)) = entries
            .iter()
            .enumerate()
            .find(|(_, e)| e.duration_frames == 0)
        {
            return Err(ReelError::invalid_table(format!(
                "section #{i} ('{}') must have duration_frames > 0",
                e.name
            )));
        }

        let mut starts = Vec::with_capacity(entries.len());
        let mut total = 0u64;
        for e in &entries {
            starts.push(total);
            total = total.checked_add(e.duration_frames).ok_or_else(|| {
                ReelError::invalid_table("total section duration overflows u64 frames")
            })?;
        }

        tracing::debug!(sections = entries.len(), total, "built section table");
        Ok(Self {
            entries,
            starts,
            total,
        })
    }

    /// One section starting at frame 0 (single-section preview).
    pub fn single(name: SectionId, duration_frames: u64) -> ReelResult<Self> {
        Self::new(vec![SectionEntry::new(name, duration_frames)])
    }

    /// Full manga cut: ten sections, 3600 frames.
    pub fn manga() -> Self {
        Self::from_known(
            MANGA_DURATIONS
                .iter()
                .map(|&(name, frames)| SectionEntry::new(name, frames))
                .collect(),
        )
    }

    /// Cubist cut: intro plus the ten sections, 180 frames each.
    pub fn cubist() -> Self {
        Self::from_known(
            SectionId::ALL
                .iter()
                .map(|&name| SectionEntry::new(name, CUBIST_SECTION_FRAMES))
                .collect(),
        )
    }

    // Built-in tables are non-empty with small positive durations.
    pub(crate) fn from_known(entries: Vec<SectionEntry>) -> Self {
        let starts = entries
            .iter()
            .scan(0u64, |acc, e| {
                let start = *acc;
                *acc += e.duration_frames;
                Some(start)
            })
            .collect();
        let total = entries.iter().map(|e| e.duration_frames).sum();
        Self {
            entries,
            starts,
            total,
        }
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sections in play order.
    pub fn entries(&self) -> &[SectionEntry] {
        &self.entries
    }

    /// Sum of all durations.
    pub fn total_frames(&self) -> u64 {
        self.total
    }

    /// Last entry; tables are never empty.
    pub(crate) fn last_index(&self) -> usize {
        self.entries.len() - 1
    }

    /// Prefix starts, one per entry, `starts[0] == 0`.
    pub(crate) fn starts(&self) -> &[u64] {
        &self.starts
    }

    /// First frame of the section at `index`.
    pub fn start_of(&self, index: usize) -> Option<FrameIndex> {
        self.starts.get(index).copied().map(FrameIndex)
    }

    /// Frame range of the section at `index`.
    pub fn range_at(&self, index: usize) -> Option<FrameRange> {
        let start = *self.starts.get(index)?;
        let len = self.entries.get(index)?.duration_frames;
        Some(FrameRange {
            start: FrameIndex(start),
            end: FrameIndex(start + len),
        })
    }

    /// Frame range of the first section named `id`.
    pub fn range_of(&self, id: SectionId) -> Option<FrameRange> {
        let index = self.entries.iter().position(|e| e.name == id)?;
        self.range_at(index)
    }

    /// Entries paired with their frame ranges.
    pub fn iter(&self) -> impl Iterator<Item = (SectionEntry, FrameRange)> + '_ {
        self.entries.iter().zip(&self.starts).map(|(e, &start)| {
            (
                *e,
                FrameRange {
                    start: FrameIndex(start),
                    end: FrameIndex(start + e.duration_frames),
                },
            )
        })
    }

    /// Resolve `global_frame` against this table. See [`resolve`].
    pub fn resolve(&self, global_frame: i64) -> ReelResult<ResolvedPosition> {
        resolve(global_frame, self)
    }
}

impl TryFrom<Vec<SectionEntryDef>> for SectionTable {
    type Error = ReelError;

    fn try_from(defs: Vec<SectionEntryDef>) -> Result<Self, Self::Error> {
        let entries = defs
            .into_iter()
            .enumerate()
            .map(|(i, d)| {
                if d.duration_frames <= 0 {
                    return Err(ReelError::invalid_table(format!(
                        "section #{i} ('{}') must have duration_frames > 0, got {}",
                        d.name, d.duration_frames
                    )));
                }
                Ok(SectionEntry::new(d.name, d.duration_frames as u64))
            })
            .collect::<ReelResult<Vec<_>>>()?;
        Self::new(entries)
    }
}

impl From<SectionTable> for Vec<SectionEntry> {
    fn from(table: SectionTable) -> Self {
        table.entries
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/table.rs"]
mod tests;
