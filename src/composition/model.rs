use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{ReelError, ReelResult};
use crate::timeline::band::{Band, band};
use crate::timeline::motion::SectionMotion;
use crate::timeline::resolve::ResolvedPosition;
use crate::timeline::table::{SectionEntryDef, SectionTable};

/// JSON boundary shape of a [`Composition`].
///
/// `duration` may be omitted, in which case it defaults to the section table total.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct CompositionDef {
    pub(crate) id: String,
    pub(crate) fps: Fps,
    pub(crate) canvas: Canvas,
    #[serde(default)]
    pub(crate) duration: Option<u64>,
    pub(crate) sections: Vec<SectionEntryDef>,
}

/// A registered video: identity, output format, length and section table.
///
/// Always validated; there is no way to hold an invalid `Composition`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    id: String,
    fps: Fps,
    canvas: Canvas,
    duration: u64,
    sections: SectionTable,
}

/// Everything a renderer needs to know about one frame of a composition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameState {
    /// Global frame that was evaluated.
    pub frame: u64,
    /// Active section and progress.
    pub position: ResolvedPosition,
    /// Background gradient band for the overall progress, one band per section.
    pub background: Band,
    /// Entrance / exit helpers for the active section.
    pub motion: SectionMotion,
}

impl Composition {
    /// Build and validate a composition.
    pub fn new(
        id: impl Into<String>,
        fps: Fps,
        canvas: Canvas,
        duration: u64,
        sections: SectionTable,
    ) -> ReelResult<Self> {
        let comp = Self {
            id: id.into(),
            fps,
            canvas,
            duration,
            sections,
        };
        comp.validate()?;
        tracing::debug!(
            id = %comp.id,
            duration = comp.duration,
            sections = comp.sections.len(),
            "built composition"
        );
        Ok(comp)
    }

    /// Parse a composition from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let def: CompositionDef = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse composition JSON: {e}")))?;
        Self::from_def(def)
    }

    /// Parse a composition from a JSON string.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        let def: CompositionDef = serde_json::from_str(s)
            .map_err(|e| ReelError::serde(format!("parse composition JSON: {e}")))?;
        Self::from_def(def)
    }

    /// Parse a composition from a JSON file on disk.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open composition JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    pub(crate) fn from_def(def: CompositionDef) -> ReelResult<Self> {
        let sections = SectionTable::try_from(def.sections)?;
        let duration = def.duration.unwrap_or_else(|| sections.total_frames());
        Self::new(def.id, def.fps, def.canvas, duration, sections)
    }

    // Built-in compositions are known to be valid.
    pub(crate) fn from_known(id: &str, duration: u64, sections: SectionTable) -> Self {
        Self {
            id: id.to_owned(),
            fps: Fps { num: 30, den: 1 },
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            duration,
            sections,
        }
    }

    /// Check invariants. A duration that disagrees with the section table is allowed but
    /// logged.
    pub fn validate(&self) -> ReelResult<()> {
        if self.id.trim().is_empty() {
            return Err(ReelError::validation("composition id must not be empty"));
        }
        self.fps.validate()?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::validation(format!(
                "composition '{}' canvas width/height must be > 0",
                self.id
            )));
        }
        if self.duration == 0 {
            return Err(ReelError::validation(format!(
                "composition '{}' duration must be > 0",
                self.id
            )));
        }
        if self.duration != self.sections.total_frames() {
            tracing::warn!(
                id = %self.id,
                duration = self.duration,
                table_total = self.sections.total_frames(),
                "composition duration differs from its section table"
            );
        }
        Ok(())
    }

    /// Registry id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Output size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Length in frames.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Section table the frames resolve against.
    pub fn sections(&self) -> &SectionTable {
        &self.sections
    }

    /// Resolve one frame in `[0, duration)`.
    #[tracing::instrument(skip(self), fields(id = %self.id))]
    pub fn evaluate(&self, frame: i64) -> ReelResult<FrameState> {
        let f = u64::try_from(frame)
            .map_err(|_| ReelError::invalid_frame(format!("frame {frame} must be >= 0")))?;
        if f >= self.duration {
            return Err(ReelError::invalid_frame(format!(
                "frame {f} is out of bounds for duration {}",
                self.duration
            )));
        }

        let position = self.sections.resolve(frame)?;
        let background = band(position.overall_progress, self.sections.len())?;
        Ok(FrameState {
            frame: f,
            position,
            background,
            motion: SectionMotion::new(position, self.fps),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
