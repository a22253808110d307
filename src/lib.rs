//! cryptoreel is the timing core of a programmatic cryptography explainer video.
//!
//! A video is a [`SectionTable`] of named sections laid end to end. Each rendered frame asks:
//!
//! - which section is active and how far along it is ([`resolve`])
//! - what an eased or spring-driven value is at a local frame ([`ramp_ease`], [`spring_ease`])
//!
//! [`Composition`] bundles a table with frame rate and canvas size and evaluates a whole
//! [`FrameState`] per frame. Rendering, encoding and audio live elsewhere; everything here is
//! pure and deterministic.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod composition;
pub(crate) mod timeline;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Rgb8, Vec2};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::easing::EasingConfig;
pub use crate::animation::interpolate::{Extrapolate, InterpolateOpts, interpolate, ramp_ease};
pub use crate::animation::lerp::Lerp;
pub use crate::animation::oscillate::{drift, pulse, spin, wobble};
pub use crate::animation::spring::{Spring, SpringConfig, SpringPreset, spring_ease};

pub use crate::timeline::band::{Band, band};
pub use crate::timeline::motion::SectionMotion;
pub use crate::timeline::resolve::{ResolvedPosition, resolve};
pub use crate::timeline::section::SectionId;
pub use crate::timeline::sequence::{Sequence, active_panel};
pub use crate::timeline::table::{SectionEntry, SectionTable};

pub use crate::composition::builtin;
pub use crate::composition::dsl::CompositionBuilder;
pub use crate::composition::model::{Composition, FrameState};
