//! Scratches pattern generator.

use super::{Canvas, Pattern};
use crate::maps::GrayscaleBuffer;
use crate::rng::DeterministicRng;

/// Straight scratch lines of random length, angle, intensity and width.
#[derive(Debug, Clone)]
pub struct ScratchesPattern {
    /// Number of scratches to draw.
    pub count: u32,
    /// Length range in pixels, half-open.
    pub length_range: (i32, i32),
    /// Intensity range (0-255), half-open.
    pub intensity_range: (i32, i32),
    /// Stroke width range in pixels, half-open.
    pub width_range: (i32, i32),
}

impl ScratchesPattern {
    /// Create a scratches pattern with the worn-surface defaults.
    pub fn new(count: u32) -> Self {
        Self {
            count,
            length_range: (20, 200),
            intensity_range: (50, 150),
            width_range: (1, 3),
        }
    }
}

impl Pattern for ScratchesPattern {
    fn render(&self, rng: &mut DeterministicRng, size: u32) -> GrayscaleBuffer {
        let mut canvas = Canvas::new(size, size);
        let extent = size as i32;

        for _ in 0..self.count {
            let x1 = rng.gen_int(0, extent) as f64;
            let y1 = rng.gen_int(0, extent) as f64;
            let length = rng.gen_int(self.length_range.0, self.length_range.1) as f64;
            let angle = rng.gen_uniform(0.0, std::f64::consts::TAU);

            let x2 = (x1 + length * angle.cos()) as i64;
            let y2 = (y1 + length * angle.sin()) as i64;

            let intensity = rng.gen_int(self.intensity_range.0, self.intensity_range.1);
            let width = rng.gen_int(self.width_range.0, self.width_range.1);

            canvas.draw_line(
                (x1 as i64, y1 as i64),
                (x2, y2),
                intensity.clamp(0, 255) as u8,
                width.max(1) as u32,
            );
        }

        canvas.to_buffer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratches_deterministic() {
        let a = ScratchesPattern::new(40).render(&mut DeterministicRng::new(42), 128);
        let b = ScratchesPattern::new(40).render(&mut DeterministicRng::new(42), 128);
        assert_eq!(a, b);
    }

    #[test]
    fn test_scratches_intensity_range() {
        let field = ScratchesPattern::new(150).render(&mut DeterministicRng::new(42), 256);
        let drawn: Vec<f64> = field.data.iter().copied().filter(|&v| v > 0.0).collect();
        assert!(!drawn.is_empty());
        for v in drawn {
            assert!(v >= 50.0 / 255.0 && v < 150.0 / 255.0, "got {}", v);
        }
    }

    #[test]
    fn test_zero_count_is_blank() {
        let field = ScratchesPattern::new(0).render(&mut DeterministicRng::new(1), 32);
        assert!(field.data.iter().all(|&v| v == 0.0));
    }
}
