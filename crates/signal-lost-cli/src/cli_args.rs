//! CLI argument definitions for the texture generator.
//!
//! The `#[derive(Parser)]` type is defined here, keeping `main.rs` focused on
//! dispatch logic.

use std::path::PathBuf;

use clap::Parser;

/// SIGNAL LOST - Procedural PBR Texture Generator
#[derive(Parser, Debug)]
#[command(name = "signal-lost-textures")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  signal-lost-textures --output assets/textures --size 1024
  signal-lost-textures --type metal --size 2048
  signal-lost-textures --from-albedo input.png --output output_dir")]
pub(crate) struct Cli {
    /// Output directory
    #[arg(short, long, default_value = "assets/textures")]
    pub output: PathBuf,

    /// Texture size in pixels
    #[arg(short, long, default_value_t = 1024)]
    pub size: u32,

    /// Texture type to generate
    #[arg(
        short = 't',
        long = "type",
        default_value = "all",
        value_parser = ["all", "metal", "concrete", "snow", "ice", "static"]
    )]
    pub material: String,

    /// Random seed for reproducibility (each material offsets it by +0..+4)
    #[arg(long, default_value_t = 42)]
    pub seed: u32,

    /// Generate PBR maps from an existing albedo texture (ignores --size and --type)
    #[arg(long, value_name = "PATH")]
    pub from_albedo: Option<PathBuf>,

    /// Normal map strength for --from-albedo
    #[arg(long, default_value_t = 1.0)]
    pub strength: f64,

    /// Side length of the screen static image
    #[arg(long, default_value_t = 512)]
    pub static_size: u32,

    /// Noise upscaling strategy
    #[arg(long, default_value = "bilinear", value_parser = ["bilinear", "block"])]
    pub resampler: String,

    /// Generate the selected materials concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Output machine-readable JSON (no colored output)
    #[arg(long)]
    pub json: bool,
}
