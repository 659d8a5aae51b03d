//! Recursive branching cracks for ice and concrete fracture.
//!
//! A crack tree is grown from a random seed point. Every step draws one
//! segment, optionally forks a shorter side branch and then continues the
//! main branch with a small angular wobble. Both depth and length shrink on
//! every step, so a tree of depth `d` has at most `2^d - 1` segments.

use super::{Canvas, Pattern};
use crate::maps::GrayscaleBuffer;
use crate::rng::DeterministicRng;

/// Probability that a step forks a side branch.
const BRANCH_PROBABILITY: f64 = 0.3;
/// Angular perturbation of a side branch, radians.
const BRANCH_SPREAD: f64 = 0.8;
/// Length multiplier for a side branch.
const BRANCH_LENGTH_SCALE: f64 = 0.6;
/// Angular wobble of the main branch, radians.
const MAIN_WOBBLE: f64 = 0.3;
/// Length multiplier for the main branch continuation.
const MAIN_LENGTH_SCALE: f64 = 0.85;
/// Branches shorter than this stop growing.
const MIN_LENGTH: f64 = 5.0;

/// One drawn crack segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackSegment {
    pub from: (i64, i64),
    pub to: (i64, i64),
    /// Remaining depth when the segment was drawn.
    pub depth: i32,
}

impl CrackSegment {
    /// Brighter near the crack origin.
    pub fn intensity(&self) -> u8 {
        (150 + self.depth * 30).clamp(0, 255) as u8
    }

    /// Thicker near the crack origin.
    pub fn width(&self) -> u32 {
        self.depth.max(1) as u32
    }
}

/// Branching crack trees.
#[derive(Debug, Clone)]
pub struct CracksPattern {
    /// Number of independent trees.
    pub count: u32,
    /// Initial depth of each tree.
    pub branching: i32,
    /// Initial length range in pixels, half-open.
    pub length_range: (i32, i32),
}

impl CracksPattern {
    pub fn new(count: u32, branching: i32) -> Self {
        Self {
            count,
            branching,
            length_range: (50, 150),
        }
    }
}

impl Pattern for CracksPattern {
    fn render(&self, rng: &mut DeterministicRng, size: u32) -> GrayscaleBuffer {
        let mut canvas = Canvas::new(size, size);
        for segment in crack_segments(self, rng, size) {
            canvas.draw_line(segment.from, segment.to, segment.intensity(), segment.width());
        }
        canvas.to_buffer()
    }
}

/// Grow every tree of `pattern` and return its segments in draw order.
pub fn crack_segments(
    pattern: &CracksPattern,
    rng: &mut DeterministicRng,
    size: u32,
) -> Vec<CrackSegment> {
    let mut segments = Vec::new();
    let extent = size as i32;

    for _ in 0..pattern.count {
        let x = rng.gen_int(0, extent) as i64;
        let y = rng.gen_int(0, extent) as i64;
        let angle = rng.gen_uniform(0.0, std::f64::consts::TAU);
        let length = rng.gen_int(pattern.length_range.0, pattern.length_range.1) as f64;
        grow(rng, &mut segments, (x, y), angle, length, pattern.branching);
    }

    segments
}

fn grow(
    rng: &mut DeterministicRng,
    segments: &mut Vec<CrackSegment>,
    from: (i64, i64),
    angle: f64,
    length: f64,
    depth: i32,
) {
    if depth <= 0 || length < MIN_LENGTH {
        return;
    }

    let to = (
        (from.0 as f64 + length * angle.cos()) as i64,
        (from.1 as f64 + length * angle.sin()) as i64,
    );
    segments.push(CrackSegment { from, to, depth });

    if rng.gen_f64() < BRANCH_PROBABILITY {
        let branch_angle = angle + rng.gen_uniform(-BRANCH_SPREAD, BRANCH_SPREAD);
        grow(rng, segments, to, branch_angle, length * BRANCH_LENGTH_SCALE, depth - 1);
    }

    let main_angle = angle + rng.gen_uniform(-MAIN_WOBBLE, MAIN_WOBBLE);
    grow(rng, segments, to, main_angle, length * MAIN_LENGTH_SCALE, depth - 1);
}
