//! Feature extraction and reporting over a built dependence matrix
//!
//! The reductions are pure functions: the matrix is consumed by reference
//! and never mutated, so repeated extraction yields bit-identical values.

pub mod analyzer;
pub mod classification;
pub mod extractor;
pub mod summary;

pub use analyzer::{AnalysisResult, TextureAnalyzer};
pub use classification::{TextureCategory, classify};
pub use extractor::{FeatureResult, dependence_non_uniformity, low_gray_level_emphasis};
pub use summary::render_summary;
