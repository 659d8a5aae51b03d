//! Material recipes.
//!
//! Each recipe is a fixed pipeline: generate a handful of named scalar
//! layers, colorize and blend them into albedo, sum them into a height field
//! for the normal map, and derive roughness, metallic and AO from weighted
//! layer contributions. The literal parameters in each recipe are the
//! material's visual signature.

mod concrete;
mod ice;
mod metal;
mod screen_static;
mod snow;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::maps::{GrayMap, RgbMap};
use crate::noise::{Resampler, ValueGridNoise};
use crate::png::MapRef;
use crate::rng::DeterministicRng;

pub use metal::METALLIC_MAX;

/// Inputs that fully determine a recipe's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationContext {
    /// Side length in pixels.
    pub size: u32,
    /// Seed for the recipe-local random stream.
    pub seed: u32,
    /// Upscaling strategy for noise layers.
    pub resampler: Resampler,
}

impl GenerationContext {
    pub fn new(size: u32, seed: u32) -> Self {
        Self {
            size,
            seed,
            resampler: Resampler::default(),
        }
    }

    /// Set the noise resampler.
    pub fn with_resampler(mut self, resampler: Resampler) -> Self {
        self.resampler = resampler;
        self
    }

    /// Fresh random stream for one recipe invocation.
    pub fn rng(&self) -> DeterministicRng {
        DeterministicRng::new(self.seed)
    }

    pub fn noise(&self) -> ValueGridNoise {
        ValueGridNoise::new(self.resampler)
    }
}

/// Material types in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    Metal,
    Concrete,
    Snow,
    Ice,
    Static,
}

impl MaterialKind {
    /// All materials, in the order their seeds are offset.
    pub const ALL: [MaterialKind; 5] = [
        MaterialKind::Metal,
        MaterialKind::Concrete,
        MaterialKind::Snow,
        MaterialKind::Ice,
        MaterialKind::Static,
    ];

    /// Offset added to the base seed for this material.
    pub fn seed_offset(self) -> u32 {
        match self {
            MaterialKind::Metal => 0,
            MaterialKind::Concrete => 1,
            MaterialKind::Snow => 2,
            MaterialKind::Ice => 3,
            MaterialKind::Static => 4,
        }
    }

    /// Name used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            MaterialKind::Metal => "metal",
            MaterialKind::Concrete => "concrete",
            MaterialKind::Snow => "snow",
            MaterialKind::Ice => "ice",
            MaterialKind::Static => "static",
        }
    }

    /// Output directory name under the output root.
    pub fn dir_name(self) -> &'static str {
        match self {
            MaterialKind::Metal => "metal_panel",
            MaterialKind::Concrete => "concrete",
            MaterialKind::Snow => "snow",
            MaterialKind::Ice => "ice",
            MaterialKind::Static => "screen_static",
        }
    }

    /// Run the recipe.
    pub fn generate(self, ctx: &GenerationContext) -> MaterialOutput {
        log::debug!(
            "running {} recipe (size {}, seed {})",
            self,
            ctx.size,
            ctx.seed
        );
        match self {
            MaterialKind::Metal => MaterialOutput::Set(metal::generate(ctx)),
            MaterialKind::Concrete => MaterialOutput::Set(concrete::generate(ctx)),
            MaterialKind::Snow => MaterialOutput::Set(snow::generate(ctx)),
            MaterialKind::Ice => MaterialOutput::Set(ice::generate(ctx)),
            MaterialKind::Static => MaterialOutput::Single(screen_static::generate(ctx)),
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown material: {} (expected metal, concrete, snow, ice, or static)",
                    s
                )
            })
    }
}

/// Five co-registered PBR maps of identical size.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureSet {
    pub albedo: RgbMap,
    pub normal: RgbMap,
    pub roughness: GrayMap,
    pub metallic: GrayMap,
    pub ao: GrayMap,
}

impl TextureSet {
    /// Maps paired with their file stems, in write order.
    pub fn maps(&self) -> [(&'static str, MapRef<'_>); 5] {
        [
            ("albedo", MapRef::Rgb(&self.albedo)),
            ("normal", MapRef::Rgb(&self.normal)),
            ("roughness", MapRef::Gray(&self.roughness)),
            ("metallic", MapRef::Gray(&self.metallic)),
            ("ao", MapRef::Gray(&self.ao)),
        ]
    }
}

/// What a recipe produces.
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialOutput {
    /// A full PBR texture set.
    Set(TextureSet),
    /// A single colour image (screen static).
    Single(RgbMap),
}

impl MaterialOutput {
    /// Maps paired with their file stems, in write order.
    pub fn maps(&self) -> Vec<(&'static str, MapRef<'_>)> {
        match self {
            MaterialOutput::Set(set) => set.maps().to_vec(),
            MaterialOutput::Single(image) => vec![("static", MapRef::Rgb(image))],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_names() {
        for kind in MaterialKind::ALL {
            assert_eq!(kind.as_str().parse::<MaterialKind>(), Ok(kind));
        }
        assert!("wood".parse::<MaterialKind>().is_err());
    }

    #[test]
    fn seed_offsets_follow_generation_order() {
        for (i, kind) in MaterialKind::ALL.iter().enumerate() {
            assert_eq!(kind.seed_offset(), i as u32);
        }
    }

    #[test]
    fn directory_names() {
        assert_eq!(MaterialKind::Metal.dir_name(), "metal_panel");
        assert_eq!(MaterialKind::Static.dir_name(), "screen_static");
    }

    #[test]
    fn every_pbr_recipe_yields_square_maps() {
        let ctx = GenerationContext::new(48, 5);
        for kind in [
            MaterialKind::Metal,
            MaterialKind::Concrete,
            MaterialKind::Snow,
            MaterialKind::Ice,
        ] {
            let MaterialOutput::Set(set) = kind.generate(&ctx) else {
                panic!("{} should produce a texture set", kind);
            };
            for (name, map) in set.maps() {
                let (w, h, len) = match map {
                    MapRef::Rgb(m) => (m.width, m.height, m.data.len()),
                    MapRef::Gray(m) => (m.width, m.height, m.data.len()),
                };
                assert_eq!((w, h), (48, 48), "{} {}", kind, name);
                assert_eq!(len, 48 * 48 * map.channels() as usize, "{} {}", kind, name);
            }
            assert_eq!(set.albedo.data.len(), 48 * 48 * 3);
            assert_eq!(set.ao.data.len(), 48 * 48);
        }
    }

    #[test]
    fn static_is_a_single_image() {
        let out = MaterialKind::Static.generate(&GenerationContext::new(16, 1));
        let names: Vec<_> = out.maps().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["static"]);
    }
}
