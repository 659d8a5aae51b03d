//! Upscaling of coarse random grids to full texture resolution.

use std::fmt;
use std::str::FromStr;

use crate::maps::GrayscaleBuffer;

/// Strategy used to upscale a coarse grid.
///
/// Picked once when a [`ValueGridNoise`](super::ValueGridNoise) is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resampler {
    /// Corner-aligned bilinear zoom.
    #[default]
    Bilinear,
    /// Nearest-neighbour block replication. Coarser, never fails.
    BlockReplicate,
}

impl Resampler {
    /// Upscale a square `grid_len`×`grid_len` grid of samples to `size`×`size`.
    ///
    /// The grid has one more sample per side than it has cells, so a grid of
    /// `g + 1` samples spans `g` cells.
    pub fn upscale(self, grid: &[f64], grid_len: usize, size: u32) -> GrayscaleBuffer {
        debug_assert_eq!(grid.len(), grid_len * grid_len);
        match self {
            Resampler::Bilinear => bilinear(grid, grid_len, size),
            Resampler::BlockReplicate => block_replicate(grid, grid_len, size),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Resampler::Bilinear => "bilinear",
            Resampler::BlockReplicate => "block",
        }
    }
}

impl fmt::Display for Resampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resampler {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bilinear" => Ok(Resampler::Bilinear),
            "block" | "nearest" => Ok(Resampler::BlockReplicate),
            other => Err(format!(
                "unknown resampler: {} (expected bilinear or block)",
                other
            )),
        }
    }
}

/// Interpolation taps for one output index along an axis.
#[derive(Clone, Copy)]
struct Tap {
    i0: usize,
    i1: usize,
    t: f64,
}

/// Zoom the grid by `size / cells`, then crop to `size`.
///
/// The zoomed length is `round(grid_len * size / cells)` and output index
/// `i` reads input coordinate `i * cells / (len - 1)`, so the first and last
/// zoomed samples land exactly on the grid corners.
fn bilinear(grid: &[f64], grid_len: usize, size: u32) -> GrayscaleBuffer {
    let size_us = size as usize;
    let cells = grid_len.saturating_sub(1).max(1);
    let zoomed_len = ((grid_len as f64 * size as f64 / cells as f64).round() as usize)
        .max(size_us)
        .max(2);
    let step = cells as f64 / (zoomed_len - 1) as f64;

    let taps: Vec<Tap> = (0..size_us)
        .map(|i| {
            let coord = i as f64 * step;
            let i0 = (coord.floor() as usize).min(grid_len - 1);
            let i1 = (i0 + 1).min(grid_len - 1);
            Tap {
                i0,
                i1,
                t: coord - i0 as f64,
            }
        })
        .collect();

    let mut out = GrayscaleBuffer::zeros(size);
    for (y, ty) in taps.iter().enumerate() {
        let row0 = ty.i0 * grid_len;
        let row1 = ty.i1 * grid_len;
        for (x, tx) in taps.iter().enumerate() {
            let top = grid[row0 + tx.i0] * (1.0 - tx.t) + grid[row0 + tx.i1] * tx.t;
            let bottom = grid[row1 + tx.i0] * (1.0 - tx.t) + grid[row1 + tx.i1] * tx.t;
            out.data[y * size_us + x] = top * (1.0 - ty.t) + bottom * ty.t;
        }
    }
    out
}

/// Output pixel `x` reads coarse cell `x * cells / size`.
fn block_replicate(grid: &[f64], grid_len: usize, size: u32) -> GrayscaleBuffer {
    let size_us = size as usize;
    let cells = grid_len.saturating_sub(1).max(1);
    let index: Vec<usize> = (0..size_us)
        .map(|i| (i * cells / size_us).min(grid_len - 1))
        .collect();

    let mut out = GrayscaleBuffer::zeros(size);
    for (y, &gy) in index.iter().enumerate() {
        for (x, &gx) in index.iter().enumerate() {
            out.data[y * size_us + x] = grid[gy * grid_len + gx];
        }
    }
    out
}
