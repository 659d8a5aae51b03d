//! Weathered concrete: mottled grey with hairline cracks and stains.

use super::{GenerationContext, TextureSet};
use crate::color::{colorize, Blend, Rgb8};
use crate::maps::{height_to_normal, GrayMap, GrayscaleBuffer};
use crate::pattern;

const CONCRETE_DARK: Rgb8 = [130, 130, 125];
const CONCRETE_LIGHT: Rgb8 = [175, 175, 170];

pub(super) fn generate(ctx: &GenerationContext) -> TextureSet {
    let size = ctx.size;
    let mut rng = ctx.rng();
    let noise = ctx.noise();

    let base = noise.generate(&mut rng, size, 150, 3);
    let detail = noise.generate(&mut rng, size, 30, 6);
    // Hairline cracks are straight strokes, not branching trees.
    let cracks = pattern::scratches(&mut rng, size, 30);
    let stains = pattern::spots(&mut rng, size, 20, (50, 150));

    let mut albedo = colorize(
        &GrayscaleBuffer::weighted_sum(0.0, &[(&base, 0.5), (&detail, 0.3)]),
        CONCRETE_DARK,
        CONCRETE_LIGHT,
    );
    albedo.darken(&stains, 0.25);

    let height =
        GrayscaleBuffer::weighted_sum(0.0, &[(&base, 0.2), (&detail, 0.4), (&cracks, 0.4)]);
    let normal = height_to_normal(&height, 1.5);

    let roughness = GrayscaleBuffer::weighted_sum(0.75, &[(&detail, 0.15)]).clipped(0.0, 1.0);

    let ao = GrayscaleBuffer::weighted_sum(1.0, &[(&cracks, -0.4), (&stains, -0.15)])
        .clipped(0.4, 1.0);

    TextureSet {
        albedo,
        normal,
        roughness: roughness.to_gray_map(),
        metallic: GrayMap::new(size, size, 0),
        ao: ao.to_gray_map(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_is_rough_and_dielectric() {
        let set = generate(&GenerationContext::new(64, 123));
        assert!(set.metallic.data.iter().all(|&m| m == 0));
        // 0.75 base roughness never drops.
        assert!(set.roughness.data.iter().all(|&r| r >= 191));
    }
}
