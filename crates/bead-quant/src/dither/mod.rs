//! Error diffusion into the pixel buffer.
//!
//! Quantization error is written straight into the shared [`PixelBuffer`]
//! ahead of the raster scan, so every later pixel sees the error of the
//! pixels before it. That makes the scan order part of the result: pixels
//! must be visited left-to-right, top-to-bottom, one at a time.
//!
//! A neighbor only receives error when it is
//! - inside the image,
//! - not marked as background, and
//! - not transparent.
//!
//! Updated channels are rounded, halves to even, and clamped to `0..=255`;
//! the neighbor's alpha is never changed.

mod kernel;

pub use kernel::{Kernel, FLOYD_STEINBERG};

use crate::buffer::PixelBuffer;
use crate::segment::BackgroundMask;

/// Distribute `error` from pixel `(x, y)` to its kernel neighbors.
///
/// `error` is the signed per-channel difference between the pixel's blended
/// value and the palette color it was assigned.
pub(crate) fn diffuse_error(
    buffer: &mut PixelBuffer,
    mask: &BackgroundMask,
    x: usize,
    y: usize,
    error: [f64; 3],
    kernel: &Kernel,
    alpha_threshold: u8,
) {
    let width = buffer.width();
    let height = buffer.height();
    let divisor = kernel.divisor as f64;

    for &(dx, dy, weight) in kernel.entries {
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;

        // Bounds check
        if nx < 0 || ny < 0 || nx as usize >= width || ny as usize >= height {
            continue;
        }

        let n = ny as usize * width + nx as usize;
        if mask.is_background(n) || buffer.alpha(n) < alpha_threshold {
            continue;
        }

        let share = weight as f64 / divisor;
        buffer.offset_rgb(n, [error[0] * share, error[1] * share, error[2] * share]);
    }
}
