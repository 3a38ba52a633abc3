//! Scalar texture features reduced from the dependence matrix

use crate::features::classification::{TextureCategory, classify};
use crate::matrix::builder::DependenceMatrix;

/// The two texture scalars and the category derived from them
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureResult {
    /// Low gray level emphasis
    pub lgle: f64,
    /// Dependence non-uniformity
    pub dn: f64,
    /// Category derived from the two scalars
    pub category: TextureCategory,
}

impl FeatureResult {
    /// Reduce a matrix into both features and classify them
    pub fn from_matrix(matrix: &DependenceMatrix) -> Self {
        let lgle = low_gray_level_emphasis(matrix);
        let dn = dependence_non_uniformity(matrix);
        let category = classify(lgle, dn);

        Self { lgle, dn, category }
    }
}

/// Emphasis of low intensity values
///
/// Each cell is weighted by the inverse square of its one-based gray level,
/// so mass at level 0 carries full weight while high levels are suppressed
/// quadratically. Returns `0.0` for an un-built matrix or one with no
/// accumulated counts.
pub fn low_gray_level_emphasis(matrix: &DependenceMatrix) -> f64 {
    if !matrix.is_ready() {
        return 0.0;
    }

    let total = matrix.total();
    if total == 0 {
        return 0.0;
    }

    let mut sum = 0.0;
    for gray in 0..matrix.gray_levels() {
        let level = (gray + 1) as f64;
        let weight = level * level;
        for bin in 0..matrix.dependence_bins() {
            sum += matrix.get(gray, bin) as f64 / weight;
        }
    }

    sum / total as f64
}

/// Unevenness of the dependence-count distribution
///
/// Sums each dependence column over all gray levels, squares the column
/// totals, and normalizes by the matrix total. Large values mean dependence
/// counts cluster at few levels. Returns `0.0` for an un-built matrix or one
/// with no accumulated counts.
pub fn dependence_non_uniformity(matrix: &DependenceMatrix) -> f64 {
    if !matrix.is_ready() {
        return 0.0;
    }

    let total = matrix.total();
    if total == 0 {
        return 0.0;
    }

    let mut sum = 0.0;
    for bin in 0..matrix.dependence_bins() {
        let column: u64 = (0..matrix.gray_levels()).map(|gray| matrix.get(gray, bin)).sum();
        sum += (column as f64) * (column as f64);
    }

    sum / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::builder::ScanParams;
    use crate::matrix::grid::IntensityGrid;

    fn flat_matrix(value: u8, radius: usize) -> DependenceMatrix {
        let grid = IntensityGrid::from_fn(8, 8, |_, _| value);
        DependenceMatrix::build(
            &grid,
            ScanParams {
                radius,
                threshold: 3,
            },
        )
    }

    #[test]
    fn test_features_are_zero_for_unbuilt_matrix() {
        let matrix = DependenceMatrix::unbuilt();

        assert_eq!(low_gray_level_emphasis(&matrix), 0.0);
        assert_eq!(dependence_non_uniformity(&matrix), 0.0);
    }

    #[test]
    fn test_features_are_zero_when_every_pixel_is_excluded() {
        // Radius 3 over a flat 8x8 image pushes every count over the limit.
        let matrix = flat_matrix(128, 3);

        assert!(matrix.is_ready());
        assert_eq!(matrix.total(), 0);
        assert_eq!(low_gray_level_emphasis(&matrix), 0.0);
        assert_eq!(dependence_non_uniformity(&matrix), 0.0);
    }

    #[test]
    fn test_flat_image_features_match_hand_computation() {
        // Only the four corners survive, all in cell (128, 8):
        // DN = 4² / 4 and LGLE = (4 / 129²) / 4.
        let matrix = flat_matrix(128, 2);

        let dn = dependence_non_uniformity(&matrix);
        let lgle = low_gray_level_emphasis(&matrix);

        assert!((dn - 4.0).abs() < 1e-12);
        assert!((lgle - 1.0 / (129.0 * 129.0)).abs() < 1e-12);
        assert!(dn > lgle);
    }

    #[test]
    fn test_two_level_image_is_dominated_by_level_zero() {
        // Half the mass sits at gray level 0 with weight 1, half at 255
        // with weight 1/256²; LGLE lands just above 0.5.
        let grid = IntensityGrid::from_fn(8, 8, |row, _| if row < 4 { 0 } else { 255 });
        let matrix = DependenceMatrix::build(
            &grid,
            ScanParams {
                radius: 1,
                threshold: 3,
            },
        );

        let lgle = low_gray_level_emphasis(&matrix);
        let expected = (32.0 + 32.0 / (256.0 * 256.0)) / 64.0;

        assert!((lgle - expected).abs() < 1e-12);
        assert!(lgle > 0.5);
    }

    #[test]
    fn test_reductions_are_idempotent() {
        let grid = IntensityGrid::from_fn(12, 9, |row, col| ((row * 13 + col * 7) % 256) as u8);
        let matrix = DependenceMatrix::build(&grid, ScanParams::default());

        let first = (
            low_gray_level_emphasis(&matrix),
            dependence_non_uniformity(&matrix),
        );
        let second = (
            low_gray_level_emphasis(&matrix),
            dependence_non_uniformity(&matrix),
        );

        assert_eq!(first, second);
    }

    #[test]
    fn test_from_matrix_bundles_both_features() {
        let matrix = flat_matrix(128, 2);
        let result = FeatureResult::from_matrix(&matrix);

        assert!((result.dn - 4.0).abs() < 1e-12);
        assert_eq!(result.category, classify(result.lgle, result.dn));
    }
}
