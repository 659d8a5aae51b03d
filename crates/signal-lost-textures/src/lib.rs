//! SIGNAL LOST procedural texture generator.
//!
//! Synthesizes PBR texture sets (albedo, normal, roughness, metallic, ambient
//! occlusion) for the game's surface materials, and derives PBR maps from an
//! existing albedo photograph.
//!
//! # Features
//!
//! - **Noise**: multi-octave value-grid noise with bilinear or block upscaling
//! - **Patterns**: scratches, blurred spots, recursive branching cracks
//! - **Maps**: height-to-normal conversion, colour gradients and blends
//! - **Materials**: rusted metal, concrete, snow, glacier ice, CRT static
//! - **Deterministic PNG**: fixed compression settings, BLAKE3 file hashes
//!
//! # Example
//!
//! ```no_run
//! use signal_lost_textures::generate::{generate_all, GenerateOptions};
//! use signal_lost_textures::material::MaterialKind;
//! use std::path::Path;
//!
//! let options = GenerateOptions { size: 512, ..GenerateOptions::default() };
//! let reports = generate_all(&MaterialKind::ALL, &options, Path::new("assets/textures")).unwrap();
//! for report in reports {
//!     println!("{} -> {}", report.material, report.dir.display());
//! }
//! ```
//!
//! # Determinism
//!
//! Every recipe owns a PCG32 stream seeded from its context, so the same
//! (material, size, seed) triple always produces byte-identical maps, in
//! any order and on any number of threads.

pub mod color;
pub mod derive;
pub mod filter;
pub mod generate;
pub mod maps;
pub mod material;
pub mod noise;
pub mod pattern;
pub mod png;
pub mod rng;

// Re-export main types for convenience
pub use derive::{derive_from_albedo, DeriveError, DerivedMaps};
pub use generate::{
    generate_all, generate_material, GenerateError, GenerateOptions, MapFile, MaterialReport,
};
pub use maps::{GrayMap, GrayscaleBuffer, RgbMap};
pub use material::{GenerationContext, MaterialKind, MaterialOutput, TextureSet};
pub use noise::{Resampler, ValueGridNoise};
pub use png::{PngConfig, PngError};
pub use rng::DeterministicRng;
