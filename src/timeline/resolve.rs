use crate::foundation::core::FrameIndex;
use crate::foundation::error::ReelResult;
use crate::timeline::section::SectionId;
use crate::timeline::table::SectionTable;

/// Where a global frame falls on a [`SectionTable`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPosition {
    /// Position of the active entry in the table.
    pub section_index: usize,
    /// Active section.
    pub section_id: SectionId,
    /// First global frame of the active section.
    pub section_start_frame: u64,
    /// Length of the active section.
    pub section_duration_frames: u64,
    /// `global_frame - section_start_frame`. Past the end of the table this keeps counting
    /// from the last section's start.
    pub section_local_frame: u64,
    /// Local progress through the section, clamped to `[0, 1]`.
    pub section_progress: f64,
    /// Progress through the whole table, clamped to `[0, 1]`.
    pub overall_progress: f64,
}

/// Resolve `global_frame` to the active section and its progress.
///
/// Frames at or past the table's end resolve to the last section with both progress values
/// at `1`. Negative frames fail with [`crate::ReelError::InvalidFrame`].
pub fn resolve(global_frame: i64, table: &SectionTable) -> ReelResult<ResolvedPosition> {
    let frame = FrameIndex::from_i64(global_frame)?.0;

    // `starts[0] == 0 <= frame`, so at least one start matches.
    let index = table
        .starts()
        .partition_point(|&start| start <= frame)
        .saturating_sub(1)
        .min(table.last_index());

    let entry = table.entries()[index];
    let start = table.starts()[index];
    let local = frame - start;
    let duration = entry.duration_frames;

    Ok(ResolvedPosition {
        section_index: index,
        section_id: entry.name,
        section_start_frame: start,
        section_duration_frames: duration,
        section_local_frame: local,
        section_progress: ratio(local, duration),
        overall_progress: ratio(frame, table.total_frames()),
    })
}

fn ratio(n: u64, d: u64) -> f64 {
    if n >= d {
        return 1.0;
    }
    (n as f64 / d as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/resolve.rs"]
mod tests;
