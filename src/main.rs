//! CLI entry point for the layered grid simulation toolkit

use clap::Parser;
use gridstack::io::cli::{Cli, GridProcessor};

fn main() -> gridstack::Result<()> {
    let cli = Cli::parse();
    let mut processor = GridProcessor::new(cli);
    processor.process()
}
