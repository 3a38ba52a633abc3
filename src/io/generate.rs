//! Seeded synthetic test images with known texture characteristics

use crate::io::configuration::{
    BLOCK_SIZE, GENERATED_HEIGHT, GENERATED_WIDTH, LOW_GRAY_CEILING, SPOT_INTENSITY,
};
use crate::io::error::Result;
use crate::io::image::export_grid_as_png;
use crate::matrix::grid::IntensityGrid;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

/// Produces the synthetic grayscale test-image set
///
/// All randomness flows from one seeded generator, so a given seed and
/// canvas size always reproduce the same images.
#[derive(Debug)]
pub struct ImageSynthesizer {
    width: usize,
    height: usize,
    rng: StdRng,
}

impl ImageSynthesizer {
    /// Create a synthesizer with an explicit canvas size
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a synthesizer with the default canvas size
    pub fn with_default_size(seed: u64) -> Self {
        Self::new(GENERATED_WIDTH, GENERATED_HEIGHT, seed)
    }

    /// Uniform random intensities confined to the low end of the range
    pub fn low_gray(&mut self) -> IntensityGrid {
        let rng = &mut self.rng;
        IntensityGrid::from_fn(self.height, self.width, |_, _| {
            rng.random_range(0..LOW_GRAY_CEILING)
        })
    }

    /// Blocks of quantized intensities from {0, 50, 100, 150}
    ///
    /// Within each block every pixel matches its neighbors exactly, which
    /// drives dependence counts toward the block interior maximum.
    pub fn uniform_blocks(&mut self) -> IntensityGrid {
        let block_values = self.random_block_values(|rng| rng.random_range(0..4u8) * 50);
        self.blocks_from_values(&block_values)
    }

    /// Blocks of unquantized random base intensities
    pub fn nonuniform_blocks(&mut self) -> IntensityGrid {
        let block_values = self.random_block_values(|rng| rng.random_range(0..=u8::MAX));
        self.blocks_from_values(&block_values)
    }

    /// Horizontal intensity ramp from black to white
    pub fn gradient(&self) -> IntensityGrid {
        let width = self.width;
        IntensityGrid::from_fn(self.height, self.width, |_, col| {
            ((255 * col) / width) as u8
        })
    }

    /// Centered bright disc on a black background
    pub fn spot(&self) -> IntensityGrid {
        let center = (self.height / 2, self.width / 2);
        let radius = (self.width.min(self.height) / 4) as isize;

        IntensityGrid::from_fn(self.height, self.width, |row, col| {
            let dy = row as isize - center.0 as isize;
            let dx = col as isize - center.1 as isize;
            if dy * dy + dx * dx <= radius * radius {
                SPOT_INTENSITY
            } else {
                0
            }
        })
    }

    /// Per-pixel uniform random intensities over the full range
    pub fn noise(&mut self) -> IntensityGrid {
        let rng = &mut self.rng;
        IntensityGrid::from_fn(self.height, self.width, |_, _| rng.random_range(0..=u8::MAX))
    }

    /// Generate the full image set into a directory
    ///
    /// Writes six PNG files and returns their paths in generation order.
    ///
    /// # Errors
    ///
    /// Returns an error if any image cannot be written.
    pub fn generate_all(&mut self, dir: &Path) -> Result<Vec<PathBuf>> {
        let images = [
            ("low_gray.png", self.low_gray()),
            ("uniform_dep.png", self.uniform_blocks()),
            ("nonuniform_dep.png", self.nonuniform_blocks()),
            ("noise.png", self.noise()),
            ("gradient.png", self.gradient()),
            ("spot.png", self.spot()),
        ];

        let mut paths = Vec::with_capacity(images.len());
        for (name, grid) in images {
            let path = dir.join(name);
            export_grid_as_png(&grid, &path)?;
            paths.push(path);
        }

        Ok(paths)
    }

    // One random value per block position, drawn row-major.
    fn random_block_values(&mut self, mut draw: impl FnMut(&mut StdRng) -> u8) -> Vec<Vec<u8>> {
        let block_rows = self.height.div_ceil(BLOCK_SIZE);
        let block_cols = self.width.div_ceil(BLOCK_SIZE);

        (0..block_rows)
            .map(|_| (0..block_cols).map(|_| draw(&mut self.rng)).collect())
            .collect()
    }

    fn blocks_from_values(&self, block_values: &[Vec<u8>]) -> IntensityGrid {
        IntensityGrid::from_fn(self.height, self.width, |row, col| {
            block_values
                .get(row / BLOCK_SIZE)
                .and_then(|block_row| block_row.get(col / BLOCK_SIZE))
                .copied()
                .unwrap_or(0)
        })
    }
}
