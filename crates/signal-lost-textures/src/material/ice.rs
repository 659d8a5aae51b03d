//! Glacier ice: blue-cyan body, branching fractures, trapped bubbles.

use super::{GenerationContext, TextureSet};
use crate::color::{colorize, Blend, Rgb8};
use crate::maps::{height_to_normal, GrayMap, GrayscaleBuffer};
use crate::pattern;

const ICE_DEEP: Rgb8 = [160, 200, 220];
const ICE_CLEAR: Rgb8 = [200, 235, 250];

pub(super) fn generate(ctx: &GenerationContext) -> TextureSet {
    let size = ctx.size;
    let mut rng = ctx.rng();
    let noise = ctx.noise();

    let base = noise.generate(&mut rng, size, 120, 3);
    let detail = noise.generate(&mut rng, size, 40, 5);
    let cracks = pattern::cracks(&mut rng, size, 20, 4);
    let bubbles = pattern::spots(&mut rng, size, 80, (3, 15));

    let mut albedo = colorize(
        &GrayscaleBuffer::weighted_sum(0.0, &[(&base, 0.4), (&detail, 0.3)]),
        ICE_DEEP,
        ICE_CLEAR,
    );
    albedo.darken(&cracks, 0.4);
    albedo.brighten(&bubbles, 30.0);

    let height =
        GrayscaleBuffer::weighted_sum(0.0, &[(&base, 0.2), (&detail, 0.3), (&cracks, 0.5)]);
    let normal = height_to_normal(&height, 1.8);

    // Smooth body, rough fractures.
    let roughness = GrayscaleBuffer::weighted_sum(0.15, &[(&cracks, 0.5), (&detail, 0.1)])
        .clipped(0.05, 0.7);

    let ao = GrayscaleBuffer::weighted_sum(1.0, &[(&cracks, -0.5), (&detail, -0.1)])
        .clipped(0.3, 1.0);

    TextureSet {
        albedo,
        normal,
        roughness: roughness.to_gray_map(),
        metallic: GrayMap::new(size, size, 0),
        ao: ao.to_gray_map(),
    }
}
