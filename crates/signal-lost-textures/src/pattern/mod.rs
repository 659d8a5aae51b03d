//! Raster pattern generators.
//!
//! Patterns draw onto an 8-bit [`Canvas`] the way a paint program would:
//! each stroke overwrites the pixels it covers. The finished canvas is
//! handed back as a [`GrayscaleBuffer`] in [0, 1].

mod cracks;
mod scratches;
mod spots;

pub use cracks::{crack_segments, CrackSegment, CracksPattern};
pub use scratches::ScratchesPattern;
pub use spots::SpotsPattern;

use crate::maps::GrayscaleBuffer;
use crate::rng::DeterministicRng;

/// Trait for generators that rasterize a random pattern.
pub trait Pattern {
    /// Draw the pattern onto a fresh `size`×`size` canvas.
    fn render(&self, rng: &mut DeterministicRng, size: u32) -> GrayscaleBuffer;
}

/// Scratch lines, see [`ScratchesPattern`].
pub fn scratches(rng: &mut DeterministicRng, size: u32, count: u32) -> GrayscaleBuffer {
    ScratchesPattern::new(count).render(rng, size)
}

/// Blurred circular spots, see [`SpotsPattern`].
pub fn spots(
    rng: &mut DeterministicRng,
    size: u32,
    count: u32,
    radius_range: (i32, i32),
) -> GrayscaleBuffer {
    SpotsPattern::new(count, radius_range).render(rng, size)
}

/// Branching cracks, see [`CracksPattern`].
pub fn cracks(
    rng: &mut DeterministicRng,
    size: u32,
    count: u32,
    branching: i32,
) -> GrayscaleBuffer {
    CracksPattern::new(count, branching).render(rng, size)
}

/// 8-bit single-channel drawing surface, zero-initialized.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[(y * self.width + x) as usize]
    }

    /// Write one pixel; coordinates outside the canvas are ignored.
    #[inline]
    pub fn plot(&mut self, x: i64, y: i64, value: u8) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.data[(y as usize) * (self.width as usize) + x as usize] = value;
    }

    /// Draw a straight line between integer endpoints.
    ///
    /// Width 1 plots the Bresenham walk; wider strokes stamp a square brush
    /// of `width` pixels centred on every walked pixel.
    pub fn draw_line(&mut self, from: (i64, i64), to: (i64, i64), value: u8, width: u32) {
        let width = width.max(1) as i64;
        let lo = -(width - 1) / 2;
        let hi = width / 2;

        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            for oy in lo..=hi {
                for ox in lo..=hi {
                    self.plot(x + ox, y + oy, value);
                }
            }
            if x == to.0 && y == to.1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fill the disc of radius `radius` centred on `(cx, cy)`.
    pub fn fill_circle(&mut self, cx: i64, cy: i64, radius: i64, value: u8) {
        let r2 = radius * radius;
        let y0 = (cy - radius).max(0);
        let y1 = (cy + radius).min(self.height as i64 - 1);
        let x0 = (cx - radius).max(0);
        let x1 = (cx + radius).min(self.width as i64 - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let (ddx, ddy) = (x - cx, y - cy);
                if ddx * ddx + ddy * ddy <= r2 {
                    self.plot(x, y, value);
                }
            }
        }
    }

    /// Divide every pixel by 255.
    pub fn to_buffer(&self) -> GrayscaleBuffer {
        GrayscaleBuffer {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| v as f64 / 255.0).collect(),
        }
    }
}
