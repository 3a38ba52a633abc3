//! Gray-level dependence texture features for grayscale images
//!
//! The crate builds a gray-level dependence matrix from an intensity grid and
//! reduces it into two scalar features, low gray level emphasis and dependence
//! non-uniformity, which drive a four-way texture classification.

#![forbid(unsafe_code)]

/// Feature extraction, classification, and summary reporting
pub mod features;
/// Input/output operations and error handling
pub mod io;
/// Dependence matrix construction from intensity grids
pub mod matrix;

pub use io::error::{AnalysisError, Result};
