//! Main entry point for texture generation.
//!
//! Runs material recipes with per-material seeds and writes each result to
//! `<out_root>/<material dir>/<map>.png`.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::material::{GenerationContext, MaterialKind};
use crate::noise::Resampler;
use crate::png::{self, MapRef, PngConfig, PngError};
use crate::rng::DeterministicRng;

/// Errors from texture generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Png(#[from] PngError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// A written map file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapFile {
    /// Map name (file stem), e.g. `albedo`.
    pub name: String,
    /// Path of the written PNG.
    pub path: PathBuf,
    /// BLAKE3 hash of the PNG file.
    pub hash: String,
}

/// Result of running one recipe.
#[derive(Debug, Clone, Serialize)]
pub struct MaterialReport {
    pub material: MaterialKind,
    pub seed: u32,
    pub size: u32,
    /// Directory the maps were written to.
    pub dir: PathBuf,
    pub files: Vec<MapFile>,
}

/// Settings for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Side length for PBR materials.
    pub size: u32,
    /// Side length for the screen static image.
    pub static_size: u32,
    /// Base seed; each material adds its own offset.
    pub seed: u32,
    /// Noise upscaling strategy.
    pub resampler: Resampler,
    /// Run recipes on the rayon thread pool.
    pub parallel: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            static_size: DEFAULT_STATIC_SIZE,
            seed: DEFAULT_SEED,
            resampler: Resampler::default(),
            parallel: false,
        }
    }
}

/// Default side length for PBR materials.
pub const DEFAULT_SIZE: u32 = 1024;
/// Default side length for the static image.
pub const DEFAULT_STATIC_SIZE: u32 = 512;
/// Default base seed.
pub const DEFAULT_SEED: u32 = 42;

impl GenerateOptions {
    /// Context for one material: its size and offset seed.
    pub fn context_for(&self, kind: MaterialKind) -> GenerationContext {
        let size = match kind {
            MaterialKind::Static => self.static_size,
            _ => self.size,
        };
        let seed = DeterministicRng::material_seed(self.seed, kind.seed_offset());
        GenerationContext::new(size, seed).with_resampler(self.resampler)
    }
}

fn validate_resolution(size: u32) -> Result<(), GenerateError> {
    if size == 0 {
        return Err(GenerateError::InvalidParameter(
            "size must be at least 1".to_string(),
        ));
    }

    (size as usize)
        .checked_mul(size as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| GenerateError::InvalidParameter("size is too large".to_string()))?;

    Ok(())
}

/// Write maps into `dir`, one `<name>.png` per map.
pub fn write_maps(
    maps: &[(&'static str, MapRef<'_>)],
    dir: &Path,
    config: &PngConfig,
) -> Result<Vec<MapFile>, PngError> {
    let mut files = Vec::with_capacity(maps.len());
    for (name, map) in maps {
        let path = dir.join(format!("{}.png", name));
        let hash = png::write_map(*map, &path, config)?;
        log::debug!("wrote {}", path.display());
        files.push(MapFile {
            name: name.to_string(),
            path,
            hash,
        });
    }
    Ok(files)
}

/// Run one recipe and write its maps under `out_root`.
pub fn generate_material(
    kind: MaterialKind,
    ctx: &GenerationContext,
    out_root: &Path,
) -> Result<MaterialReport, GenerateError> {
    validate_resolution(ctx.size)?;

    log::info!(
        "generating {} textures ({}x{}, seed {})",
        kind,
        ctx.size,
        ctx.size,
        ctx.seed
    );

    let output = kind.generate(ctx);

    let dir = out_root.join(kind.dir_name());
    std::fs::create_dir_all(&dir)?;
    let files = write_maps(&output.maps(), &dir, &PngConfig::default())?;

    Ok(MaterialReport {
        material: kind,
        seed: ctx.seed,
        size: ctx.size,
        dir,
        files,
    })
}

/// Run the selected recipes in generation order.
///
/// Reports come back in the order of `kinds` whether or not the run is
/// parallel; the maps are identical either way.
pub fn generate_all(
    kinds: &[MaterialKind],
    options: &GenerateOptions,
    out_root: &Path,
) -> Result<Vec<MaterialReport>, GenerateError> {
    let run = |kind: &MaterialKind| generate_material(*kind, &options.context_for(*kind), out_root);

    if options.parallel {
        kinds.par_iter().map(run).collect()
    } else {
        kinds.iter().map(run).collect()
    }
}
