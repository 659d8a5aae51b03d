//! Rusted metal panel: steel base, rust patches, scratches.

use super::{GenerationContext, TextureSet};
use crate::color::{colorize, Blend, Rgb8};
use crate::maps::{height_to_normal, GrayscaleBuffer};
use crate::pattern;

const STEEL_DARK: Rgb8 = [100, 105, 115];
const STEEL_LIGHT: Rgb8 = [140, 145, 155];
const RUST_DARK: Rgb8 = [60, 40, 25];
const RUST_LIGHT: Rgb8 = [180, 100, 50];

/// Metallic value of bare, rust-free steel.
pub const METALLIC_MAX: f64 = 0.95;

pub(super) fn generate(ctx: &GenerationContext) -> TextureSet {
    let size = ctx.size;
    let mut rng = ctx.rng();
    let noise = ctx.noise();

    let base = noise.generate(&mut rng, size, 100, 4);
    let detail = noise.generate(&mut rng, size, 30, 6);
    let scratches = pattern::scratches(&mut rng, size, 150);
    let rust = pattern::spots(&mut rng, size, 40, (20, 100));

    let mut albedo = colorize(
        &GrayscaleBuffer::weighted_sum(0.0, &[(&base, 0.3), (&detail, 0.2)]),
        STEEL_DARK,
        STEEL_LIGHT,
    );
    let rust_color = colorize(&rust, RUST_DARK, RUST_LIGHT);
    albedo.mix(&rust_color, &rust, 0.7);
    albedo.darken(&scratches, 0.3);

    let height =
        GrayscaleBuffer::weighted_sum(0.0, &[(&base, 0.3), (&detail, 0.5), (&scratches, 0.2)]);
    let normal = height_to_normal(&height, 2.0);

    let roughness =
        GrayscaleBuffer::weighted_sum(0.4, &[(&rust, 0.4), (&scratches, -0.15), (&detail, 0.1)])
            .clipped(0.0, 1.0);

    // Rust eats the metal response.
    let metallic = GrayscaleBuffer::weighted_sum(METALLIC_MAX, &[(&rust, -0.9)]).clipped(0.0, 1.0);

    let ao = GrayscaleBuffer::weighted_sum(1.0, &[(&height, -0.3)]).clipped(0.5, 1.0);

    TextureSet {
        albedo,
        normal,
        roughness: roughness.to_gray_map(),
        metallic: metallic.to_gray_map(),
        ao: ao.to_gray_map(),
    }
}
