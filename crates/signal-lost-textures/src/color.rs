//! Colour compositing: gradient colorize and per-channel blends.
//!
//! All writes truncate to `u8`, so repeated blends accumulate the same
//! rounding a plain 8-bit image editor would.

use crate::maps::{GrayscaleBuffer, RgbMap};

/// 8-bit RGB endpoint color.
pub type Rgb8 = [u8; 3];

/// Map a scalar field onto a two-color gradient.
///
/// `color = field * light + (1 - field) * dark` per channel.
pub fn colorize(field: &GrayscaleBuffer, dark: Rgb8, light: Rgb8) -> RgbMap {
    let mut out = RgbMap::new(field.width, field.height, [0, 0, 0]);
    for (px, &v) in out.data.chunks_mut(3).zip(&field.data) {
        for c in 0..3 {
            px[c] = to_byte(v * light[c] as f64 + (1.0 - v) * dark[c] as f64);
        }
    }
    out
}

#[inline]
fn to_byte(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

/// Blend operations applied in place on an [`RgbMap`].
pub trait Blend {
    /// `c *= 1 - mask * weight` on every channel.
    fn darken(&mut self, mask: &GrayscaleBuffer, weight: f64);

    /// `c *= 1 - mask * weight` on one channel.
    fn darken_channel(&mut self, channel: usize, mask: &GrayscaleBuffer, weight: f64);

    /// `c = clip(c + mask * amount, 0, 255)` on every channel.
    fn brighten(&mut self, mask: &GrayscaleBuffer, amount: f64);

    /// `c = c * (1 - mask * weight) + overlay * mask * weight`.
    fn mix(&mut self, overlay: &RgbMap, mask: &GrayscaleBuffer, weight: f64);
}

impl Blend for RgbMap {
    fn darken(&mut self, mask: &GrayscaleBuffer, weight: f64) {
        for c in 0..3 {
            self.darken_channel(c, mask, weight);
        }
    }

    fn darken_channel(&mut self, channel: usize, mask: &GrayscaleBuffer, weight: f64) {
        for (px, &m) in self.data.chunks_mut(3).zip(&mask.data) {
            px[channel] = to_byte(px[channel] as f64 * (1.0 - m * weight));
        }
    }

    fn brighten(&mut self, mask: &GrayscaleBuffer, amount: f64) {
        for (px, &m) in self.data.chunks_mut(3).zip(&mask.data) {
            for v in px.iter_mut() {
                *v = to_byte(*v as f64 + m * amount);
            }
        }
    }

    fn mix(&mut self, overlay: &RgbMap, mask: &GrayscaleBuffer, weight: f64) {
        let pixels = self.data.chunks_mut(3).zip(overlay.data.chunks(3));
        for ((px, over), &m) in pixels.zip(&mask.data) {
            let alpha = m * weight;
            for c in 0..3 {
                px[c] = to_byte(px[c] as f64 * (1.0 - alpha) + over[c] as f64 * alpha);
            }
        }
    }
}
