//! Batch progress display for multi-image analysis

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for a batch of images
///
/// Holds a single batch bar; per-image feature extraction is fast enough
/// that individual bars would only flicker.
pub struct ProgressManager {
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active display
    pub const fn new() -> Self {
        Self { batch_bar: None }
    }

    /// Start the batch bar for the given image count
    pub fn initialize(&mut self, image_count: usize) {
        let bar = ProgressBar::new(image_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(bar);
    }

    /// Show the image currently being analyzed
    pub fn start_file(&mut self, path: &Path) {
        if let Some(bar) = &self.batch_bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
        }
    }

    /// Advance the bar past the current image
    pub fn complete_file(&mut self) {
        if let Some(bar) = &self.batch_bar {
            bar.inc(1);
        }
    }

    /// Finish and clear the display
    pub fn finish(&mut self) {
        if let Some(bar) = self.batch_bar.take() {
            bar.finish_and_clear();
        }
    }
}
