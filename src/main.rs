//! CLI entry point for gray-level dependence texture analysis

use clap::Parser;
use gldm::io::cli::{Cli, FileProcessor};

fn main() -> gldm::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
