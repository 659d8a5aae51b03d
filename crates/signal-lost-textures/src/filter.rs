//! Raster filters shared by the pattern generators and photo derivation.

use crate::maps::GrayscaleBuffer;

/// Separable Gaussian blur with standard deviation `radius` pixels.
///
/// Edges are extended (clamped), not wrapped: the generated maps are not
/// tileable. A radius of zero returns the input unchanged.
pub fn gaussian_blur(input: &GrayscaleBuffer, radius: f64) -> GrayscaleBuffer {
    if radius <= 0.0 || input.data.is_empty() {
        return input.clone();
    }

    let width = input.width as i64;
    let height = input.height as i64;
    let kernel = gaussian_kernel(radius);
    let half = (kernel.len() / 2) as i64;

    // Horizontal pass
    let mut temp = vec![0.0; input.data.len()];
    for y in 0..height {
        let row = (y * width) as usize;
        for x in 0..width {
            let mut sum = 0.0;
            for (i, k) in kernel.iter().enumerate() {
                let sx = (x + i as i64 - half).clamp(0, width - 1) as usize;
                sum += input.data[row + sx] * k;
            }
            temp[row + x as usize] = sum;
        }
    }

    // Vertical pass
    let mut out = GrayscaleBuffer::new(input.width, input.height, 0.0);
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0.0;
            for (i, k) in kernel.iter().enumerate() {
                let sy = (y + i as i64 - half).clamp(0, height - 1);
                sum += temp[(sy * width + x) as usize] * k;
            }
            out.data[(y * width + x) as usize] = sum;
        }
    }

    out
}

/// Normalized 1D Gaussian kernel covering three sigmas on each side.
fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let kernel_size = ((sigma * 3.0).ceil() as usize * 2 + 1).max(3);
    let half = kernel_size / 2;

    let mut kernel = vec![0.0; kernel_size];
    let mut sum = 0.0;
    for (i, value) in kernel.iter_mut().enumerate() {
        let x = i as f64 - half as f64;
        *value = (-x * x / (2.0 * sigma * sigma)).exp();
        sum += *value;
    }
    for value in &mut kernel {
        *value /= sum;
    }
    kernel
}
