//! CRT static: white noise with scanlines, green phosphor tint.

use super::GenerationContext;
use crate::maps::RgbMap;

const NOISE_WEIGHT: f64 = 0.85;
const SCANLINE_LEVEL: f64 = 0.15;
const PHOSPHOR: [f64; 3] = [40.0, 255.0, 60.0];

pub(super) fn generate(ctx: &GenerationContext) -> RgbMap {
    let size = ctx.size;
    let mut rng = ctx.rng();
    let mut image = RgbMap::new(size, size, [0, 0, 0]);

    for y in 0..size {
        let scanline = if y % 2 == 0 { SCANLINE_LEVEL } else { 0.0 };
        for x in 0..size {
            let combined = (rng.gen_f64() * NOISE_WEIGHT + scanline).clamp(0.0, 1.0);
            image.set(
                x,
                y,
                [
                    (combined * PHOSPHOR[0]) as u8,
                    (combined * PHOSPHOR[1]) as u8,
                    (combined * PHOSPHOR[2]) as u8,
                ],
            );
        }
    }

    image
}
