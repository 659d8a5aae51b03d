//! Soft circular spots (rust, stains, bubbles).

use super::{Canvas, Pattern};
use crate::filter::gaussian_blur;
use crate::maps::GrayscaleBuffer;
use crate::rng::DeterministicRng;

/// Blur radius applied to every spots canvas.
pub const SPOT_BLUR_RADIUS: f64 = 15.0;

/// Filled circles softened with a Gaussian blur.
#[derive(Debug, Clone)]
pub struct SpotsPattern {
    /// Number of spots.
    pub count: u32,
    /// Radius range in pixels, half-open.
    pub radius_range: (i32, i32),
    /// Intensity range (0-255), half-open.
    pub intensity_range: (i32, i32),
    /// Gaussian blur radius in pixels.
    pub blur_radius: f64,
}

impl SpotsPattern {
    pub fn new(count: u32, radius_range: (i32, i32)) -> Self {
        Self {
            count,
            radius_range,
            intensity_range: (100, 255),
            blur_radius: SPOT_BLUR_RADIUS,
        }
    }

    /// Override the blur radius.
    pub fn with_blur_radius(mut self, radius: f64) -> Self {
        self.blur_radius = radius;
        self
    }
}

impl Pattern for SpotsPattern {
    fn render(&self, rng: &mut DeterministicRng, size: u32) -> GrayscaleBuffer {
        let mut canvas = Canvas::new(size, size);
        let extent = size as i32;

        for _ in 0..self.count {
            let x = rng.gen_int(0, extent);
            let y = rng.gen_int(0, extent);
            let r = rng.gen_int(self.radius_range.0, self.radius_range.1);
            let intensity = rng.gen_int(self.intensity_range.0, self.intensity_range.1);
            canvas.fill_circle(x as i64, y as i64, r as i64, intensity.clamp(0, 255) as u8);
        }

        // The blurred canvas stays an 8-bit raster.
        gaussian_blur(&canvas.to_buffer(), self.blur_radius)
            .to_gray_map_rounded()
            .to_buffer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spots_in_unit_range() {
        let field = SpotsPattern::new(30, (5, 20)).render(&mut DeterministicRng::new(4), 96);
        assert!(field.data.iter().all(|v| (0.0..=1.0).contains(v)));
        assert!(field.data.iter().any(|&v| v > 0.0));
    }

    #[test]
    fn test_blur_softens_edges() {
        let mut rng_sharp = DeterministicRng::new(11);
        let mut rng_soft = DeterministicRng::new(11);
        let sharp = SpotsPattern::new(1, (10, 11))
            .with_blur_radius(0.0)
            .render(&mut rng_sharp, 64);
        let soft = SpotsPattern::new(1, (10, 11)).render(&mut rng_soft, 64);

        let distinct = |f: &GrayscaleBuffer| {
            let mut values: Vec<u64> = f.data.iter().map(|v| v.to_bits()).collect();
            values.sort_unstable();
            values.dedup();
            values.len()
        };
        assert!(distinct(&sharp) <= 2);
        assert!(distinct(&soft) > 2);
    }

    #[test]
    fn test_spots_deterministic() {
        let a = SpotsPattern::new(10, (3, 15)).render(&mut DeterministicRng::new(5), 48);
        let b = SpotsPattern::new(10, (3, 15)).render(&mut DeterministicRng::new(5), 48);
        assert_eq!(a, b);
    }
}
