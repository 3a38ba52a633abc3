//! Image decoding into intensity grids and grayscale PNG export

use crate::io::error::{AnalysisError, Result};
use crate::matrix::grid::IntensityGrid;
use image::{GrayImage, Luma};
use ndarray::Array2;
use std::path::Path;

/// Decode an image file into a single-channel intensity grid
///
/// Any format the `image` crate can decode is accepted; multi-channel images
/// are reduced to 8-bit luma before the copy into grid storage.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_intensity_grid(path: &Path) -> Result<IntensityGrid> {
    let img = image::open(path).map_err(|e| AnalysisError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let luma = img.to_luma8();

    let (width, height) = luma.dimensions();
    let mut data = Array2::zeros((height as usize, width as usize));
    for (x, y, pixel) in luma.enumerate_pixels() {
        let Luma([value]) = *pixel;
        if let Some(cell) = data.get_mut([y as usize, x as usize]) {
            *cell = value;
        }
    }

    Ok(IntensityGrid::new(data))
}

/// Save an intensity grid as an 8-bit grayscale PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be written to the given path
pub fn export_grid_as_png(grid: &IntensityGrid, path: &Path) -> Result<()> {
    let mut img = GrayImage::new(grid.cols() as u32, grid.rows() as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Luma([grid.get(y as usize, x as usize).unwrap_or(0)]);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| AnalysisError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(path).map_err(|e| AnalysisError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
