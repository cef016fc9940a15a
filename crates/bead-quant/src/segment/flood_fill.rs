//! Border-connected background detection.
//!
//! # Seed rule
//!
//! Pixel (0,0) is the single reference for every seed check:
//!
//! - If it is transparent, only transparent pixels count as background.
//! - Otherwise its RGB is the reference background color, and a pixel counts
//!   as background if it is transparent or within `tolerance` of it.
//!
//! A corner is background-like under that test. A solid background is only
//! detected when (0,0) is transparent or at least two distinct corner
//! positions are background-like; a single corner agreeing with itself is not
//! enough, since the subject may simply run into the frame. Every
//! background-like corner then seeds a breadth-first fill over 4-connected
//! neighbors.

use std::collections::VecDeque;

use super::{BackgroundMask, SegmentOptions};
use crate::buffer::PixelBuffer;
use crate::color::{rgb_distance, Rgb};

/// Distinct corner positions that must agree before a background is assumed.
const MIN_AGREEING_CORNERS: usize = 2;

/// What the fill compares candidate pixels against.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Reference {
    Transparent,
    Color(Rgb),
}

impl Reference {
    fn sample(buffer: &PixelBuffer, options: &SegmentOptions) -> Self {
        if options.is_transparent(buffer.alpha(0)) {
            Reference::Transparent
        } else {
            Reference::Color(buffer.rgb(0))
        }
    }

    #[inline]
    fn matches(self, buffer: &PixelBuffer, idx: usize, options: &SegmentOptions) -> bool {
        if options.is_transparent(buffer.alpha(idx)) {
            return true;
        }
        match self {
            Reference::Transparent => false,
            Reference::Color(color) => rgb_distance(buffer.rgb(idx), color) <= options.tolerance,
        }
    }
}

/// Row-major indices of the four corners, without duplicates for 1-wide or
/// 1-high images.
fn corner_indices(width: usize, height: usize) -> Vec<usize> {
    let mut corners = vec![0, width - 1, (height - 1) * width, height * width - 1];
    corners.sort_unstable();
    corners.dedup();
    corners
}

/// Compute the background mask for `buffer`.
///
/// Only pixels connected to an image corner through matching pixels are
/// marked; an enclosed region of background color stays unmarked. The buffer
/// is not modified.
///
/// # Example
///
/// ```
/// use bead_quant::{detect_background, PixelBuffer, SegmentOptions};
///
/// // 3x3 white frame around a dark center
/// let mut pixels = vec![[255, 255, 255, 255]; 9];
/// pixels[4] = [10, 10, 10, 255];
/// let buffer = PixelBuffer::from_pixels(&pixels, 3, 3).unwrap();
///
/// let mask = detect_background(&buffer, &SegmentOptions::default());
/// assert_eq!(mask.count(), 8);
/// assert!(!mask.get(1, 1));
/// ```
pub fn detect_background(buffer: &PixelBuffer, options: &SegmentOptions) -> BackgroundMask {
    let width = buffer.width();
    let height = buffer.height();
    let mut mask = BackgroundMask::empty(width, height);

    let reference = Reference::sample(buffer, options);
    let corners = corner_indices(width, height);
    let seeds: Vec<usize> = corners
        .iter()
        .copied()
        .filter(|&idx| reference.matches(buffer, idx, options))
        .collect();

    let required = MIN_AGREEING_CORNERS.min(corners.len());
    if reference != Reference::Transparent && seeds.len() < required {
        tracing::debug!(
            agreeing = seeds.len(),
            required,
            "No solid background detected, keeping all pixels"
        );
        return mask;
    }

    // `visited` covers every pixel that has been tested, matching or not.
    // The match test does not depend on where the fill came from, so a
    // rejected pixel never needs re-testing.
    let mut visited = vec![false; width * height];
    let mut queue = VecDeque::with_capacity(width + height);

    for idx in seeds {
        if !visited[idx] {
            visited[idx] = true;
            mask.mark(idx);
            queue.push_back(idx);
        }
    }

    while let Some(idx) = queue.pop_front() {
        let x = idx % width;
        let y = idx / width;

        let neighbors = [
            (x > 0).then(|| idx - 1),
            (x + 1 < width).then(|| idx + 1),
            (y > 0).then(|| idx - width),
            (y + 1 < height).then(|| idx + width),
        ];

        for n in neighbors.into_iter().flatten() {
            if visited[n] {
                continue;
            }
            visited[n] = true;
            if reference.matches(buffer, n, options) {
                mask.mark(n);
                queue.push_back(n);
            }
        }
    }

    tracing::debug!(
        background = mask.count(),
        total = width * height,
        ?reference,
        "Background segmentation finished"
    );

    mask
}
