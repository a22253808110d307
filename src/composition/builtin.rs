//! Compositions registered with the video renderer.
//!
//! The two full cuts plus one single-section preview per topic, all 30 fps at 1920x1080.

use crate::composition::model::Composition;
use crate::timeline::section::SectionId;
use crate::timeline::table::{SectionEntry, SectionTable};

const PREVIEWS: [(&str, SectionId, u64); 10] = [
    ("FoundationsPreview", SectionId::Foundations, 300),
    ("PublicKeyPreview", SectionId::PublicKey, 180),
    ("RandomnessPreview", SectionId::Randomness, 180),
    ("ThresholdPreview", SectionId::Threshold, 240),
    ("ShamirPreview", SectionId::Shamir, 240),
    ("DKGPreview", SectionId::Dkg, 300),
    ("BLSPreview", SectionId::Bls, 540),
    ("ThresholdBLSPreview", SectionId::ThresholdBls, 360),
    ("EncryptionPreview", SectionId::Encryption, 240),
    ("RealWorldPreview", SectionId::RealWorld, 360),
];

/// Every built-in composition, full cuts first.
pub fn compositions() -> Vec<Composition> {
    let manga = SectionTable::manga();
    let cubist = SectionTable::cubist();

    let mut out = Vec::with_capacity(2 + PREVIEWS.len());
    out.push(Composition::from_known(
        "MangaCryptoExplainer",
        manga.total_frames(),
        manga,
    ));
    out.push(Composition::from_known(
        "CubistCryptoExplainer",
        cubist.total_frames(),
        cubist,
    ));
    out.extend(PREVIEWS.iter().map(|&(id, section, frames)| {
        let table = SectionTable::from_known(vec![SectionEntry::new(section, frames)]);
        Composition::from_known(id, frames, table)
    }));
    out
}

/// Look up a built-in composition by id.
pub fn find(id: &str) -> Option<Composition> {
    compositions().into_iter().find(|c| c.id() == id)
}

#[cfg(test)]
#[path = "../../tests/unit/composition/builtin.rs"]
mod tests;
