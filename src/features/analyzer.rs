//! Per-image analysis pipeline: load, scan, reduce, classify, report

use crate::features::classification::TextureCategory;
use crate::features::extractor::FeatureResult;
use crate::features::summary::render_summary;
use crate::io::configuration::{FEATURE_SENTINEL, SUMMARY_PREFIX};
use crate::io::error::{AnalysisError, Result};
use crate::io::image::load_intensity_grid;
use crate::matrix::builder::{DependenceMatrix, ScanParams};
use std::path::{Path, PathBuf};

/// Outcome of analyzing one image
///
/// A load failure is reported through the sentinel feature values and the
/// `Invalid` category rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Path of the analyzed image
    pub image_path: PathBuf,
    /// Low gray level emphasis, or the sentinel on failure
    pub lgle: f64,
    /// Dependence non-uniformity, or the sentinel on failure
    pub dn: f64,
    /// Derived texture category, `Invalid` on failure
    pub category: TextureCategory,
}

impl AnalysisResult {
    /// Sentinel result for an image that could not be loaded
    pub fn invalid(path: &Path) -> Self {
        Self {
            image_path: path.to_path_buf(),
            lgle: FEATURE_SENTINEL,
            dn: FEATURE_SENTINEL,
            category: TextureCategory::Invalid,
        }
    }

    /// Whether the image was analyzed successfully
    pub fn is_valid(&self) -> bool {
        self.category != TextureCategory::Invalid
    }
}

/// Caller-constructed analyzer holding the scan parameters
///
/// The analyzer is stateless apart from its configuration; there is one
/// instance per caller rather than a process-wide accessor.
#[derive(Debug, Clone, Default)]
pub struct TextureAnalyzer {
    params: ScanParams,
}

impl TextureAnalyzer {
    /// Create an analyzer with explicit scan parameters
    pub const fn new(params: ScanParams) -> Self {
        Self { params }
    }

    /// Analyze one image into its feature pair and category
    ///
    /// A decode failure is logged to stderr and reported as the sentinel
    /// result; no matrix is built in that case and nothing escapes as an
    /// error or panic.
    pub fn analyze(&self, path: &Path) -> AnalysisResult {
        let grid = match load_intensity_grid(path) {
            Ok(grid) => grid,
            Err(error) => {
                // Load failures degrade to a sentinel result per contract
                #[allow(clippy::print_stderr)]
                {
                    eprintln!("{error}");
                }
                return AnalysisResult::invalid(path);
            }
        };

        let matrix = DependenceMatrix::build(&grid, self.params);
        let features = FeatureResult::from_matrix(&matrix);

        AnalysisResult {
            image_path: path.to_path_buf(),
            lgle: features.lgle,
            dn: features.dn,
            category: features.category,
        }
    }

    /// Analyze one image and write its summary file
    ///
    /// The summary lands at `<output_dir>/summary_<stem>.txt`. The output
    /// directory must already exist; creating it is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns an error if the summary file cannot be written. A load
    /// failure of the image itself is not an error; the sentinel result is
    /// summarized and returned like any other.
    pub fn analyze_and_save_summary(
        &self,
        path: &Path,
        output_dir: &Path,
    ) -> Result<AnalysisResult> {
        let result = self.analyze(path);

        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let stem = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let summary = render_summary(&name, result.lgle, result.dn);
        let summary_path = output_dir.join(format!("{SUMMARY_PREFIX}{stem}.txt"));

        std::fs::write(&summary_path, summary).map_err(|e| AnalysisError::FileSystem {
            path: summary_path.clone(),
            operation: "write summary",
            source: e,
        })?;

        Ok(result)
    }
}
