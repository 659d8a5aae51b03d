//! Scalar fields and 8-bit PBR map buffers.
//!
//! [`GrayscaleBuffer`] is the floating-point working representation every
//! generator produces. [`RgbMap`] and [`GrayMap`] are the terminal 8-bit
//! images that get written to disk.

mod normal;

pub use normal::{height_to_normal, NormalGenerator};

/// Grayscale scalar field (single channel, `f64`, row-major).
#[derive(Debug, Clone, PartialEq)]
pub struct GrayscaleBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (single channel, row-major).
    pub data: Vec<f64>,
}

impl GrayscaleBuffer {
    /// Create a new grayscale buffer filled with a value.
    pub fn new(width: u32, height: u32, fill: f64) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a square buffer filled with zeros.
    pub fn zeros(size: u32) -> Self {
        Self::new(size, size, 0.0)
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        let idx = (y * self.width + x) as usize;
        self.data[idx]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        let idx = (y * self.width + x) as usize;
        self.data[idx] = value;
    }

    /// `offset + Σ weight_i * layer_i`, evaluated left to right per pixel.
    ///
    /// All layers must share the dimensions of the first one.
    pub fn weighted_sum(offset: f64, layers: &[(&GrayscaleBuffer, f64)]) -> Self {
        let (width, height) = layers
            .first()
            .map(|(layer, _)| (layer.width, layer.height))
            .unwrap_or((0, 0));
        let mut out = Self::new(width, height, offset);
        for (layer, weight) in layers {
            debug_assert_eq!((layer.width, layer.height), (width, height));
            for (dst, src) in out.data.iter_mut().zip(&layer.data) {
                *dst += src * weight;
            }
        }
        out
    }

    /// Clamp every value into `[lo, hi]`.
    pub fn clipped(mut self, lo: f64, hi: f64) -> Self {
        for v in &mut self.data {
            *v = v.clamp(lo, hi);
        }
        self
    }

    /// Minimum and maximum value, `(0, 0)` for an empty buffer.
    pub fn min_max(&self) -> (f64, f64) {
        if self.data.is_empty() {
            return (0.0, 0.0);
        }
        self.data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Rescale to [0, 1] with `(x - min) / (max - min + 1e-8)`.
    ///
    /// A constant field collapses to zeros rather than NaN.
    pub fn normalized(mut self) -> Self {
        let (lo, hi) = self.min_max();
        let range = hi - lo + NORMALIZE_EPSILON;
        for v in &mut self.data {
            *v = (*v - lo) / range;
        }
        self
    }

    /// Quantize to 8 bits with truncation after clamping to [0, 1].
    pub fn to_gray_map(&self) -> GrayMap {
        GrayMap {
            width: self.width,
            height: self.height,
            data: self
                .data
                .iter()
                .map(|&v| (v.clamp(0.0, 1.0) * 255.0) as u8)
                .collect(),
        }
    }

    /// Quantize to 8 bits with rounding after clamping to [0, 1].
    pub fn to_gray_map_rounded(&self) -> GrayMap {
        GrayMap {
            width: self.width,
            height: self.height,
            data: self
                .data
                .iter()
                .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
                .collect(),
        }
    }
}

/// Guard added to the range when normalizing a field.
pub const NORMALIZE_EPSILON: f64 = 1e-8;

/// 8-bit RGB image, interleaved row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbMap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RgbMap {
    /// Create an image filled with one color.
    pub fn new(width: u32, height: u32, fill: [u8; 3]) -> Self {
        let size = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(size * 3);
        for _ in 0..size {
            data.extend_from_slice(&fill);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y * self.width + x) as usize * 3;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let idx = (y * self.width + x) as usize * 3;
        self.data[idx..idx + 3].copy_from_slice(&rgb);
    }

    /// Mean value of one channel (0 = red, 1 = green, 2 = blue).
    pub fn channel_mean(&self, channel: usize) -> f64 {
        let count = self.data.len() / 3;
        if count == 0 {
            return 0.0;
        }
        let sum: u64 = self
            .data
            .iter()
            .skip(channel)
            .step_by(3)
            .map(|&v| v as u64)
            .sum();
        sum as f64 / count as f64
    }
}

/// 8-bit single-channel image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayMap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl GrayMap {
    /// Create an image filled with one value.
    pub fn new(width: u32, height: u32, fill: u8) -> Self {
        Self {
            width,
            height,
            data: vec![fill; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[(y * self.width + x) as usize]
    }

    /// Convert back to a scalar field in [0, 1].
    pub fn to_buffer(&self) -> GrayscaleBuffer {
        GrayscaleBuffer {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| v as f64 / 255.0).collect(),
        }
    }
}
