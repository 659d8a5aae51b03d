//! Snow: near-white with blue-leaning drift shadows.

use super::{GenerationContext, TextureSet};
use crate::color::{colorize, Blend, Rgb8};
use crate::maps::{height_to_normal, GrayMap, GrayscaleBuffer};

const SNOW_SHADE: Rgb8 = [225, 230, 245];
const SNOW_LIT: Rgb8 = [250, 252, 255];

pub(super) fn generate(ctx: &GenerationContext) -> TextureSet {
    let size = ctx.size;
    let mut rng = ctx.rng();
    let noise = ctx.noise();

    let base = noise.generate(&mut rng, size, 80, 4);
    let sparkle = noise.generate(&mut rng, size, 10, 2);
    let drift = noise.generate(&mut rng, size, 200, 2);

    let mut albedo = colorize(
        &GrayscaleBuffer::weighted_sum(0.0, &[(&base, 0.2), (&sparkle, 0.1)]),
        SNOW_SHADE,
        SNOW_LIT,
    );
    // Shadows pull red down more than green, blue stays put.
    let shadow = GrayscaleBuffer::weighted_sum(0.0, &[(&drift, 0.15)]);
    albedo.darken_channel(0, &shadow, 0.1);
    albedo.darken_channel(1, &shadow, 0.05);

    let height = GrayscaleBuffer::weighted_sum(0.0, &[(&base, 0.3), (&drift, 0.5)]);
    let normal = height_to_normal(&height, 0.8);

    let roughness = GrayscaleBuffer::weighted_sum(0.5, &[(&base, 0.3), (&sparkle, -0.2)])
        .clipped(0.3, 0.85);

    let ao = GrayscaleBuffer::weighted_sum(1.0, &[(&drift, -0.15)]).clipped(0.7, 1.0);

    TextureSet {
        albedo,
        normal,
        roughness: roughness.to_gray_map(),
        metallic: GrayMap::new(size, size, 0),
        ao: ao.to_gray_map(),
    }
}
