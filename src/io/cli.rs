//! Command-line interface and phase orchestration for sequence generation

use crate::descriptor::builder::build_descriptors;
use crate::io::codegen::{PhaseArtifact, write_generated_files};
use crate::io::configuration::{DEFAULT_SEED, GENERATED_SUBDIR, TILES_SUBDIR};
use crate::io::error::Result;
use crate::io::image::{crop_tile, load_image, save_tile};
use crate::io::phases::{PhaseSpec, standard_phases};
use crate::io::progress::ProgressManager;
use clap::Parser;
use image::GenericImageView;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tilereveal")]
#[command(
    author,
    version,
    about = "Generate ordered tile sequences and C declarations for reveal animations"
)]
/// Command-line arguments for the sequence generation tool
pub struct Cli {
    /// Directory containing the phase source images
    #[arg(value_name = "ASSETS")]
    pub assets: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Directory for cropped tile images (defaults beneath ASSETS)
    #[arg(short, long)]
    pub tiles_dir: Option<PathBuf>,

    /// Directory for generated declaration files (defaults beneath ASSETS)
    #[arg(short, long)]
    pub generated_dir: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Resolved output root for cropped tile images
    pub fn tile_output_root(&self) -> PathBuf {
        self.tiles_dir
            .clone()
            .unwrap_or_else(|| self.assets.join(TILES_SUBDIR))
    }

    /// Resolved output root for generated declaration files
    pub fn generated_output_root(&self) -> PathBuf {
        self.generated_dir
            .clone()
            .unwrap_or_else(|| self.assets.join(GENERATED_SUBDIR))
    }
}

/// Orchestrates the fixed phase plan with shared deterministic randomness
pub struct SequenceGenerator {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl SequenceGenerator {
    /// Create a generator from CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli
            .should_show_progress()
            .then(|| ProgressManager::new(standard_phases().len()));

        Self { cli, progress }
    }

    /// Process every phase and write the generated artifacts
    ///
    /// Phases consume the shared random source in their fixed plan order, so
    /// one seed reproduces the complete output byte for byte. There is no
    /// partial-success mode: the first failure aborts the run.
    ///
    /// # Errors
    ///
    /// Returns an error if a source image cannot be loaded, a tile or
    /// generated file cannot be written, or a phase exceeds the generated
    /// declaration limits
    pub fn run(&mut self) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let mut artifacts = Vec::new();

        for phase in &standard_phases() {
            if let Some(ref pm) = self.progress {
                pm.start_phase(phase.name);
            }

            let artifact = self.process_phase(phase, &mut rng)?;

            if let Some(ref pm) = self.progress {
                pm.complete_phase(phase.name, artifact.frames.len());
            }

            artifacts.push(artifact);
        }

        write_generated_files(&artifacts, &self.cli.generated_output_root())?;

        if let Some(ref pm) = self.progress {
            pm.finish();
        }

        Ok(())
    }

    fn process_phase(&self, phase: &PhaseSpec, rng: &mut StdRng) -> Result<PhaseArtifact> {
        let source_path = self.cli.assets.join(phase.source);
        let image = load_image(&source_path)?;
        let (width, height) = image.dimensions();

        let grid = phase.grid(width, height);
        let blocks = phase.strategy.partition(&grid, rng);
        let descriptors = build_descriptors(&blocks, &phase.layout(height), &phase.template);

        let tile_root = self.cli.tile_output_root();
        for descriptor in &descriptors {
            let tile = crop_tile(&image, &descriptor.crop);
            save_tile(&tile, &tile_root.join(&descriptor.name.image_file))?;
        }

        PhaseArtifact::from_descriptors(phase.name, &descriptors)
    }
}
