use crate::composition::model::Composition;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::ReelResult;
use crate::timeline::section::SectionId;
use crate::timeline::table::{SectionEntry, SectionTable};

/// Fluent builder for [`Composition`].
///
/// ```
/// use cryptoreel::{Canvas, CompositionBuilder, Fps, SectionId};
///
/// let comp = CompositionBuilder::new(
///     "ShortCut",
///     Fps::integer(30)?,
///     Canvas { width: 1280, height: 720 },
/// )
/// .section(SectionId::Foundations, 90)
/// .section(SectionId::Shamir, 60)
/// .build()?;
/// assert_eq!(comp.duration(), 150);
/// # Ok::<(), cryptoreel::ReelError>(())
/// ```
#[derive(Clone, Debug)]
pub struct CompositionBuilder {
    id: String,
    fps: Fps,
    canvas: Canvas,
    duration: Option<u64>,
    sections: Vec<SectionEntry>,
}

impl CompositionBuilder {
    /// Start a composition with no sections.
    pub fn new(id: impl Into<String>, fps: Fps, canvas: Canvas) -> Self {
        Self {
            id: id.into(),
            fps,
            canvas,
            duration: None,
            sections: Vec::new(),
        }
    }

    /// Append a section of `frames` frames.
    pub fn section(mut self, id: SectionId, frames: u64) -> Self {
        self.sections.push(SectionEntry::new(id, frames));
        self
    }

    /// Append every entry of an existing table.
    pub fn sections(mut self, table: &SectionTable) -> Self {
        self.sections.extend_from_slice(table.entries());
        self
    }

    /// Override the length; defaults to the section total.
    pub fn duration(mut self, frames: u64) -> Self {
        self.duration = Some(frames);
        self
    }

    /// Validate and produce the composition.
    pub fn build(self) -> ReelResult<Composition> {
        let table = SectionTable::new(self.sections)?;
        let duration = self.duration.unwrap_or_else(|| table.total_frames());
        Composition::new(self.id, self.fps, self.canvas, duration, table)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
