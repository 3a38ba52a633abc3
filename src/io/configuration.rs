//! Fixed design constants and runtime configuration defaults

// Dependence matrix geometry
/// Number of representable gray levels
pub const GRAY_LEVELS: usize = 256;
/// Largest dependence count the matrix can index; higher counts are dropped
pub const MAX_DEPENDENCE: usize = 8;

// Scan parameters of the summary/classification pipeline
/// Neighborhood radius used by the analysis pipeline
pub const ANALYSIS_RADIUS: usize = 2;
/// Similarity threshold used by the analysis pipeline
pub const ANALYSIS_THRESHOLD: u8 = 3;

// User-configurable CLI defaults for the scan
/// Default neighborhood radius exposed on the command line
pub const DEFAULT_RADIUS: usize = 1;
/// Default similarity threshold exposed on the command line
pub const DEFAULT_THRESHOLD: u8 = 5;

// Classification thresholds; independent of the summary narrative below
/// LGLE above this marks a low-gray-level texture (strict comparison)
pub const LGLE_CATEGORY_THRESHOLD: f64 = 0.1;
/// DN at or above this marks a heterogeneous texture
pub const DN_CATEGORY_THRESHOLD: f64 = 500.0;

// Narrative thresholds for the summary text; unrelated to classification
/// LGLE above this reads as a concentration of low-intensity pixels
pub const LGLE_SUMMARY_THRESHOLD: f64 = 0.05;
/// DN below this reads as uniform texture
pub const DN_SUMMARY_THRESHOLD: f64 = 0.5;

/// Feature value reported when an image could not be analyzed
pub const FEATURE_SENTINEL: f64 = -1.0;

// Output settings
/// Prefix of per-image summary file names
pub const SUMMARY_PREFIX: &str = "summary_";

// Synthetic image generation
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default generated image width
pub const GENERATED_WIDTH: usize = 1024;
/// Default generated image height
pub const GENERATED_HEIGHT: usize = 512;
/// Side length of generated block patterns
pub const BLOCK_SIZE: usize = 16;
/// Exclusive ceiling of the low-gray generator's intensity range
pub const LOW_GRAY_CEILING: u8 = 50;
/// Intensity of the generated centered disc
pub const SPOT_INTENSITY: u8 = 200;
