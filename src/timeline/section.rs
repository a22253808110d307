use std::fmt;
use std::str::FromStr;

use crate::foundation::error::ReelError;

/// Thematic unit of the explainer video.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionId {
    /// Title card, only used by the Cubist cut.
    Intro,
    /// Plaintext, ciphertext, keys and the CIA triad.
    Foundations,
    /// Public-key cryptography.
    PublicKey,
    /// Randomness and entropy.
    Randomness,
    /// Threshold cryptography.
    Threshold,
    /// Shamir secret sharing.
    Shamir,
    /// Distributed key generation.
    Dkg,
    /// BLS signatures.
    Bls,
    /// Threshold BLS signatures.
    ThresholdBls,
    /// Threshold encryption.
    Encryption,
    /// Deployed systems.
    RealWorld,
}

impl SectionId {
    /// Every section, in video order.
    pub const ALL: [SectionId; 11] = [
        SectionId::Intro,
        SectionId::Foundations,
        SectionId::PublicKey,
        SectionId::Randomness,
        SectionId::Threshold,
        SectionId::Shamir,
        SectionId::Dkg,
        SectionId::Bls,
        SectionId::ThresholdBls,
        SectionId::Encryption,
        SectionId::RealWorld,
    ];

    /// Stable identifier used in JSON and composition ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Foundations => "foundations",
            Self::PublicKey => "publicKey",
            Self::Randomness => "randomness",
            Self::Threshold => "threshold",
            Self::Shamir => "shamir",
            Self::Dkg => "dkg",
            Self::Bls => "bls",
            Self::ThresholdBls => "thresholdBls",
            Self::Encryption => "encryption",
            Self::RealWorld => "realWorld",
        }
    }

    /// Human-readable heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::Intro => "Cryptography Explained",
            Self::Foundations => "Foundations of Cryptography",
            Self::PublicKey => "Public Key Cryptography",
            Self::Randomness => "Randomness",
            Self::Threshold => "Threshold Cryptography",
            Self::Shamir => "Shamir Secret Sharing",
            Self::Dkg => "Distributed Key Generation",
            Self::Bls => "BLS Signatures",
            Self::ThresholdBls => "Threshold BLS",
            Self::Encryption => "Threshold Encryption",
            Self::RealWorld => "Real World Applications",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ReelError::validation(format!("unknown section '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/section.rs"]
mod tests;
