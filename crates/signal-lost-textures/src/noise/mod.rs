//! Multi-octave value-grid noise.
//!
//! Each octave draws a coarse grid of independent uniform samples and
//! upscales it to full resolution; octaves are summed with halving
//! amplitude and the total is normalized to [0, 1]. This is an
//! approximation of value noise, not gradient noise: it has none of
//! Perlin's isotropy guarantees.

mod resample;

pub use resample::Resampler;

use crate::maps::GrayscaleBuffer;
use crate::rng::DeterministicRng;

/// Value-grid noise synthesizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueGridNoise {
    resampler: Resampler,
}

impl ValueGridNoise {
    /// Create a synthesizer bound to one resampling strategy.
    pub fn new(resampler: Resampler) -> Self {
        if resampler == Resampler::BlockReplicate {
            log::warn!("bilinear upscaling disabled, noise uses block replication");
        }
        Self { resampler }
    }

    /// Generate a `size`×`size` noise field.
    ///
    /// Lower `scale` gives larger base features; more `octaves` add finer
    /// grain. The result lies in [0, 1].
    pub fn generate(
        &self,
        rng: &mut DeterministicRng,
        size: u32,
        scale: u32,
        octaves: u32,
    ) -> GrayscaleBuffer {
        let mut result = GrayscaleBuffer::zeros(size);

        for octave in 0..octaves {
            let frequency = 1u32.checked_shl(octave).unwrap_or(u32::MAX);
            let amplitude = 0.5f64.powi(octave as i32);
            let grid_len = coarse_resolution(size, scale, frequency) as usize + 1;

            let grid: Vec<f64> = (0..grid_len * grid_len).map(|_| rng.gen_f64()).collect();
            let layer = self.resampler.upscale(&grid, grid_len, size);

            for (dst, src) in result.data.iter_mut().zip(&layer.data) {
                *dst += src * amplitude;
            }
        }

        result.normalized()
    }
}

/// Number of coarse cells per side for one octave.
///
/// `max(4, min(size, size / max(1, scale / max(1, frequency))))`, all in
/// integer arithmetic.
pub fn coarse_resolution(size: u32, scale: u32, frequency: u32) -> u32 {
    let divisor = (scale / frequency.max(1)).max(1);
    (size / divisor).min(size).max(4)
}
