//! CLI entry point for the reveal animation sequence generator

use clap::Parser;
use tilereveal::io::cli::{Cli, SequenceGenerator};

fn main() -> tilereveal::Result<()> {
    let cli = Cli::parse();
    let mut generator = SequenceGenerator::new(cli);
    generator.run()
}
