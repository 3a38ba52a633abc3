//! Gray-level dependence matrix built from a sliding-window scan
//!
//! For every pixel the builder counts the neighbors whose intensity lies
//! within a similarity threshold of the center. Pixels whose count fits the
//! matrix increment one cell; pixels with more dependent neighbors than the
//! matrix can index are excluded entirely rather than clamped to the last
//! bin.

use crate::io::configuration::{
    ANALYSIS_RADIUS, ANALYSIS_THRESHOLD, GRAY_LEVELS, MAX_DEPENDENCE,
};
use crate::matrix::grid::IntensityGrid;
use ndarray::Array2;

/// Parameters of the neighborhood scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanParams {
    /// Neighborhood radius; the window spans `(2 * radius + 1)²` pixels
    pub radius: usize,
    /// Maximum absolute intensity difference for a neighbor to be dependent
    pub threshold: u8,
}

impl Default for ScanParams {
    /// The parameters used by the summary/classification pipeline
    fn default() -> Self {
        Self {
            radius: ANALYSIS_RADIUS,
            threshold: ANALYSIS_THRESHOLD,
        }
    }
}

/// Accumulator of dependence counts per gray level
///
/// Cell `(g, d)` holds the number of pixels with intensity `g` that have
/// exactly `d` dependent neighbors. The matrix starts un-built and becomes
/// built only through a successful scan; it is never reset or rebuilt in
/// place.
#[derive(Debug, Clone)]
pub struct DependenceMatrix {
    counts: Array2<u64>,
    built: bool,
}

impl DependenceMatrix {
    /// A matrix that no scan has populated
    ///
    /// Feature reductions over an un-built matrix yield the zero sentinel.
    pub fn unbuilt() -> Self {
        Self {
            counts: Array2::zeros((0, 0)),
            built: false,
        }
    }

    /// Scan a grid and accumulate its dependence counts
    ///
    /// Out-of-bounds neighbors are skipped, not treated as zero. The scan is
    /// a single full pass; different parameters require a fresh build. An
    /// empty grid leaves the matrix un-built.
    pub fn build(grid: &IntensityGrid, params: ScanParams) -> Self {
        if grid.is_empty() {
            return Self::unbuilt();
        }

        let mut counts = Array2::<u64>::zeros((GRAY_LEVELS, MAX_DEPENDENCE + 1));

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let center = grid.get(row, col).unwrap_or(0);
                let count = dependent_neighbors(grid, row, col, center, params);

                if count <= MAX_DEPENDENCE {
                    if let Some(cell) = counts.get_mut([usize::from(center), count]) {
                        *cell += 1;
                    }
                }
            }
        }

        Self {
            counts,
            built: true,
        }
    }

    /// Whether a scan has populated this matrix
    pub const fn is_built(&self) -> bool {
        self.built
    }

    /// Whether the matrix is built and non-empty
    ///
    /// Both conditions must hold before any feature reduction is meaningful.
    pub fn is_ready(&self) -> bool {
        self.built && !self.counts.is_empty()
    }

    /// Number of gray-level rows
    pub fn gray_levels(&self) -> usize {
        self.counts.nrows()
    }

    /// Number of dependence-count columns
    pub fn dependence_bins(&self) -> usize {
        self.counts.ncols()
    }

    /// Count stored at (gray level, dependence count)
    pub fn get(&self, gray: usize, count: usize) -> u64 {
        self.counts.get([gray, count]).copied().unwrap_or(0)
    }

    /// Sum of all cells
    ///
    /// Equals the number of scanned pixels whose dependence count fit the
    /// matrix; pixels over the limit are not represented.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

// Counts neighbors within the window whose intensity is within the
// threshold of the center, clipped to grid bounds.
fn dependent_neighbors(
    grid: &IntensityGrid,
    row: usize,
    col: usize,
    center: u8,
    params: ScanParams,
) -> usize {
    let radius = params.radius as isize;
    let mut count = 0;

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx == 0 && dy == 0 {
                continue;
            }

            let neighbor_row = row as isize + dy;
            let neighbor_col = col as isize + dx;
            if neighbor_row < 0 || neighbor_col < 0 {
                continue;
            }

            let Some(neighbor) = grid.get(neighbor_row as usize, neighbor_col as usize) else {
                continue;
            };

            if center.abs_diff(neighbor) <= params.threshold {
                count += 1;
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_grid(rows: usize, cols: usize, value: u8) -> IntensityGrid {
        IntensityGrid::from_fn(rows, cols, |_, _| value)
    }

    #[test]
    fn test_unbuilt_matrix_is_not_ready() {
        let matrix = DependenceMatrix::unbuilt();

        assert!(!matrix.is_built());
        assert!(!matrix.is_ready());
        assert_eq!(matrix.total(), 0);
    }

    #[test]
    fn test_empty_grid_never_scans() {
        let grid = IntensityGrid::from_fn(0, 0, |_, _| 0);
        let matrix = DependenceMatrix::build(&grid, ScanParams::default());

        assert!(!matrix.is_built());
        assert!(!matrix.is_ready());
    }

    #[test]
    fn test_flat_image_radius_one_all_pixels_kept() {
        // Radius 1 caps the neighbor count at 8, so nothing is excluded.
        let grid = flat_grid(4, 4, 77);
        let matrix = DependenceMatrix::build(
            &grid,
            ScanParams {
                radius: 1,
                threshold: 0,
            },
        );

        assert!(matrix.is_ready());
        assert_eq!(matrix.total(), 16);
        // Corners see 3 neighbors, edges 5, the four interior pixels 8.
        assert_eq!(matrix.get(77, 3), 4);
        assert_eq!(matrix.get(77, 5), 8);
        assert_eq!(matrix.get(77, 8), 4);
    }

    #[test]
    fn test_flat_image_radius_two_keeps_only_corners() {
        // Interior pixels of a flat image have 24 dependent neighbors at
        // radius 2 and are dropped; only the four corners see exactly 8.
        let grid = flat_grid(8, 8, 128);
        let matrix = DependenceMatrix::build(
            &grid,
            ScanParams {
                radius: 2,
                threshold: 3,
            },
        );

        assert_eq!(matrix.total(), 4);
        assert_eq!(matrix.get(128, 8), 4);
    }

    #[test]
    fn test_flat_image_radius_three_excludes_everything() {
        // Even a corner window holds 15 neighbors at radius 3, so every
        // pixel of a flat image lands over the dependence limit.
        let grid = flat_grid(8, 8, 128);
        let matrix = DependenceMatrix::build(
            &grid,
            ScanParams {
                radius: 3,
                threshold: 3,
            },
        );

        assert!(matrix.is_ready());
        assert_eq!(matrix.total(), 0);
    }

    #[test]
    fn test_total_never_exceeds_pixel_count() {
        let grid = IntensityGrid::from_fn(9, 7, |row, col| ((row * 31 + col * 17) % 256) as u8);

        for radius in 0..4 {
            let matrix = DependenceMatrix::build(
                &grid,
                ScanParams {
                    radius,
                    threshold: 10,
                },
            );
            assert!(matrix.total() <= 63);
        }
    }

    #[test]
    fn test_two_level_image_splits_mass_by_gray_level() {
        // Top half 0, bottom half 255: with threshold 3 each half depends
        // only on its own pixels, so mass appears at exactly two rows.
        let grid = IntensityGrid::from_fn(8, 8, |row, _| if row < 4 { 0 } else { 255 });
        let matrix = DependenceMatrix::build(
            &grid,
            ScanParams {
                radius: 1,
                threshold: 3,
            },
        );

        assert_eq!(matrix.total(), 64);

        let level_zero: u64 = (0..matrix.dependence_bins()).map(|d| matrix.get(0, d)).sum();
        let level_max: u64 = (0..matrix.dependence_bins())
            .map(|d| matrix.get(255, d))
            .sum();
        assert_eq!(level_zero, 32);
        assert_eq!(level_max, 32);

        let elsewhere: u64 = (1..255)
            .map(|gray| {
                (0..matrix.dependence_bins())
                    .map(|d| matrix.get(gray, d))
                    .sum::<u64>()
            })
            .sum();
        assert_eq!(elsewhere, 0);
    }

    #[test]
    fn test_radius_zero_counts_no_neighbors() {
        let grid = flat_grid(3, 3, 10);
        let matrix = DependenceMatrix::build(
            &grid,
            ScanParams {
                radius: 0,
                threshold: 5,
            },
        );

        // Every pixel has an empty neighborhood and lands in bin 0.
        assert_eq!(matrix.get(10, 0), 9);
        assert_eq!(matrix.total(), 9);
    }

    #[test]
    fn test_threshold_gates_dependence() {
        // Alternating 100/104 columns: dependent at threshold 4, not at 3.
        let grid = IntensityGrid::from_fn(3, 4, |_, col| if col % 2 == 0 { 100 } else { 104 });

        let strict = DependenceMatrix::build(
            &grid,
            ScanParams {
                radius: 1,
                threshold: 3,
            },
        );
        let loose = DependenceMatrix::build(
            &grid,
            ScanParams {
                radius: 1,
                threshold: 4,
            },
        );

        // Under the strict threshold the centers (1, 1) and (1, 3) only
        // match the same-valued pixels in their own columns.
        assert_eq!(strict.get(104, 2), 2);
        // Under the loose threshold the sole interior 104 pixel at (1, 1)
        // matches its full 8-neighborhood.
        assert_eq!(loose.get(104, 8), 1);
    }
}
