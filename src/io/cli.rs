//! Command-line interface for batch texture analysis and image generation

use crate::features::analyzer::{AnalysisResult, TextureAnalyzer};
use crate::io::configuration::{DEFAULT_RADIUS, DEFAULT_SEED, DEFAULT_THRESHOLD};
use crate::io::error::{AnalysisError, Result};
use crate::io::generate::ImageSynthesizer;
use crate::io::progress::ProgressManager;
use crate::matrix::builder::ScanParams;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gldm")]
#[command(
    author,
    version,
    about = "Classify grayscale texture with gray-level dependence features"
)]
/// Command-line arguments for the texture analysis tool
pub struct Cli {
    /// Images to analyze
    #[arg(value_name = "IMAGE", required_unless_present = "generate")]
    pub images: Vec<PathBuf>,

    /// Generate the synthetic test-image set into this directory
    #[arg(short, long, value_name = "DIR")]
    pub generate: Option<PathBuf>,

    /// Directory where summary files are written
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Neighborhood radius for the dependence scan
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    pub radius: usize,

    /// Maximum intensity difference for a neighbor to count as dependent
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u8,

    /// Random seed for synthetic image generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output and the results table
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Scan parameters assembled from the command line
    pub const fn scan_params(&self) -> ScanParams {
        ScanParams {
            radius: self.radius,
            threshold: self.threshold,
        }
    }
}

/// Orchestrates generation and batch analysis with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run generation and analysis according to the CLI arguments
    ///
    /// A failure on one image is reported and the batch continues; only
    /// setup failures (generation target, output directory) abort the run.
    ///
    /// # Errors
    ///
    /// Returns an error if image generation fails or the output directory
    /// cannot be created.
    pub fn process(&mut self) -> Result<()> {
        if let Some(dir) = self.cli.generate.clone() {
            let mut synthesizer = ImageSynthesizer::with_default_size(self.cli.seed);
            synthesizer.generate_all(&dir)?;
        }

        if self.cli.images.is_empty() {
            return Ok(());
        }

        std::fs::create_dir_all(&self.cli.output_dir).map_err(|e| AnalysisError::FileSystem {
            path: self.cli.output_dir.clone(),
            operation: "create output directory",
            source: e,
        })?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.images.len());
        }

        let analyzer = TextureAnalyzer::new(self.cli.scan_params());
        let mut results = Vec::with_capacity(self.cli.images.len());

        for path in &self.cli.images {
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_file(path);
            }

            match analyzer.analyze_and_save_summary(path, &self.cli.output_dir) {
                Ok(result) => results.push(result),
                // A failed summary write loses that one report only
                #[allow(clippy::print_stderr)]
                Err(error) => eprintln!("{error}"),
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        if !self.cli.quiet {
            Self::print_results(&results);
        }

        Ok(())
    }

    // Prints the per-image classification table; the textual counterpart
    // of a results viewer.
    #[allow(clippy::print_stdout)]
    fn print_results(results: &[AnalysisResult]) {
        if results.is_empty() {
            return;
        }

        println!("{:<32} {:>12} {:>14}  Category", "Image", "LGLE", "DN");
        for result in results {
            let name = result.image_path.display().to_string();
            println!(
                "{name:<32} {:>12.6} {:>14.6}  {}",
                result.lgle, result.dn, result.category
            );
        }
    }
}
