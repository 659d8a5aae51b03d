//! Height-to-normal conversion.

use super::{GrayscaleBuffer, RgbMap};

/// Normal map generator.
#[derive(Debug, Clone)]
pub struct NormalGenerator {
    /// Gradient multiplier; larger values exaggerate relief.
    pub strength: f64,
}

impl Default for NormalGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalGenerator {
    /// Create a new normal generator with strength 1.0.
    pub fn new() -> Self {
        Self { strength: 1.0 }
    }

    /// Set the strength.
    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    /// Generate a tangent-space normal map from a height field.
    ///
    /// Gradients are central differences; border pixels have a zero gradient
    /// along the axis where the difference is undefined.
    pub fn generate_from_height(&self, height_map: &GrayscaleBuffer) -> RgbMap {
        let width = height_map.width;
        let height = height_map.height;
        let mut buffer = RgbMap::new(width, height, FLAT_NORMAL);

        for y in 0..height {
            for x in 0..width {
                let dx = if x > 0 && x + 1 < width {
                    (height_map.get(x + 1, y) - height_map.get(x - 1, y)) / 2.0
                } else {
                    0.0
                };
                let dy = if y > 0 && y + 1 < height {
                    (height_map.get(x, y + 1) - height_map.get(x, y - 1)) / 2.0
                } else {
                    0.0
                };
                buffer.set(x, y, self.encode(dx, dy));
            }
        }

        buffer
    }

    fn encode(&self, dx: f64, dy: f64) -> [u8; 3] {
        let nx = -dx * self.strength;
        let ny = -dy * self.strength;
        let nz = 1.0;

        let len = (nx * nx + ny * ny + nz * nz).sqrt() + 1e-8;

        // [-1, 1] -> [0, 255]
        let to_byte = |n: f64| ((n / len + 1.0) * 0.5 * 255.0).round().clamp(0.0, 255.0) as u8;
        [to_byte(nx), to_byte(ny), to_byte(nz)]
    }
}

/// Encoded normal of a flat surface.
pub const FLAT_NORMAL: [u8; 3] = [128, 128, 255];

/// Convert a height field into a tangent-space normal map.
pub fn height_to_normal(field: &GrayscaleBuffer, strength: f64) -> RgbMap {
    NormalGenerator::new()
        .with_strength(strength)
        .generate_from_height(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_height_encodes_neutral_normal() {
        let flat = GrayscaleBuffer::new(16, 16, 0.37);
        let normal = height_to_normal(&flat, 5.0);
        for px in normal.data.chunks(3) {
            assert_eq!(px, &FLAT_NORMAL[..]);
        }
    }

    #[test]
    fn ramp_tilts_normal_against_gradient() {
        // Height increases to the right.
        let mut ramp = GrayscaleBuffer::zeros(8);
        for y in 0..8 {
            for x in 0..8 {
                ramp.set(x, y, x as f64 / 7.0);
            }
        }
        let normal = height_to_normal(&ramp, 4.0);
        let [r, g, b] = normal.get(4, 4);
        assert!(r < 128, "x component should tilt left, got {}", r);
        assert_eq!(g, 128);
        assert!(b < 255);

        // Border columns carry no horizontal gradient.
        assert_eq!(normal.get(0, 4), FLAT_NORMAL);
        assert_eq!(normal.get(7, 4), FLAT_NORMAL);
    }

    #[test]
    fn strength_exaggerates_relief() {
        let mut ramp = GrayscaleBuffer::zeros(8);
        for y in 0..8 {
            for x in 0..8 {
                ramp.set(x, y, y as f64 / 7.0);
            }
        }
        let soft = height_to_normal(&ramp, 0.5).get(3, 3);
        let hard = height_to_normal(&ramp, 8.0).get(3, 3);
        assert!(hard[1] < soft[1]);
        assert!(hard[2] < soft[2]);
    }

    #[test]
    fn output_matches_input_dimensions() {
        let field = GrayscaleBuffer::new(12, 7, 0.0);
        let normal = NormalGenerator::new().generate_from_height(&field);
        assert_eq!((normal.width, normal.height), (12, 7));
        assert_eq!(normal.data.len(), 12 * 7 * 3);
    }
}
