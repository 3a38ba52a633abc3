//! Four-way texture classification from the two feature scalars

use crate::io::configuration::{DN_CATEGORY_THRESHOLD, LGLE_CATEGORY_THRESHOLD};
use std::fmt;

/// Coarse texture category derived from LGLE and DN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureCategory {
    /// Low DN with emphasized low gray levels
    UniformLowGray,
    /// High DN with emphasized low gray levels
    HeterogeneousLowGray,
    /// Low DN without low-gray emphasis
    UniformMixed,
    /// High DN without low-gray emphasis
    HeterogeneousMixed,
    /// The source image could not be analyzed
    Invalid,
}

impl fmt::Display for TextureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::UniformLowGray => "Uniform Texture with Low Gray Levels",
            Self::HeterogeneousLowGray => "Heterogeneous Texture with Low Gray Levels",
            Self::UniformMixed => "Uniform Texture with Mixed Gray Levels",
            Self::HeterogeneousMixed => "Heterogeneous Texture with Mixed or High Gray Levels",
            Self::Invalid => "Invalid",
        };
        f.write_str(label)
    }
}

/// Map the feature pair onto its texture category
///
/// The partition is total over the real plane: LGLE strictly above 0.1
/// marks low-gray emphasis, DN at or above 500 marks heterogeneity. The
/// thresholds are fixed constants of the design, unrelated to the narrative
/// thresholds used by the summary text.
pub fn classify(lgle: f64, dn: f64) -> TextureCategory {
    let low_gray = lgle > LGLE_CATEGORY_THRESHOLD;
    let heterogeneous = dn >= DN_CATEGORY_THRESHOLD;

    match (low_gray, heterogeneous) {
        (true, false) => TextureCategory::UniformLowGray,
        (true, true) => TextureCategory::HeterogeneousLowGray,
        (false, false) => TextureCategory::UniformMixed,
        (false, true) => TextureCategory::HeterogeneousMixed,
    }
}
