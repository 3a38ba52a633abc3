//! Dependence matrix construction
//!
//! An intensity grid is scanned once with a square neighborhood window; each
//! pixel contributes to one cell of the resulting gray-level dependence
//! matrix, indexed by (gray level, dependent-neighbor count).

pub mod builder;
pub mod grid;

pub use builder::{DependenceMatrix, ScanParams};
pub use grid::IntensityGrid;
