//! BeadQuantizer builder -- the primary entry point for the crate.
//!
//! [`BeadQuantizer`] wraps segmentation and quantization behind fluent
//! configuration. [`quantize`] is the one-call form for raw RGBA bytes.

use super::QuantizeError;
use crate::buffer::PixelBuffer;
use crate::output::Grid;
use crate::palette::Palette;
use crate::quantize::quantize_pixels;
use crate::segment::{detect_background, BackgroundMask, SegmentOptions};

/// High-level quantizer for bead charts.
///
/// # Design
///
/// - Constructor requires a [`Palette`], which is never empty
/// - Configuration methods consume and return `self`
/// - [`quantize()`](Self::quantize) takes `&self`, so one quantizer can be
///   reused across many images; each call owns its buffer and shares nothing
///
/// # Example
///
/// ```
/// use bead_quant::{BeadQuantizer, Cell, Palette, PixelBuffer};
///
/// let palette = Palette::from_hex(&[("W", "#FFFFFF"), ("K", "#000000")]).unwrap();
/// let quantizer = BeadQuantizer::new(palette)
///     .dither(true)
///     .remove_background(true);
///
/// // 3x3 white frame around a dark center
/// let mut pixels = vec![[255, 255, 255, 255]; 9];
/// pixels[4] = [10, 10, 10, 255];
/// let buffer = PixelBuffer::from_pixels(&pixels, 3, 3).unwrap();
///
/// let grid = quantizer.quantize(buffer);
/// assert_eq!(grid.cell(1, 1), Cell::Assigned { index: 1 });
/// assert_eq!(grid.assigned_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct BeadQuantizer {
    palette: Palette,
    dither: bool,
    remove_background: bool,
    segment: SegmentOptions,
}

impl BeadQuantizer {
    /// Create a quantizer for `palette`.
    ///
    /// Defaults: no dithering, no background removal, tolerance 45,
    /// alpha threshold 50.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            dither: false,
            remove_background: false,
            segment: SegmentOptions::default(),
        }
    }

    /// Enable Floyd-Steinberg error diffusion.
    #[inline]
    pub fn dither(mut self, enabled: bool) -> Self {
        self.dither = enabled;
        self
    }

    /// Enable border-connected background removal.
    #[inline]
    pub fn remove_background(mut self, enabled: bool) -> Self {
        self.remove_background = enabled;
        self
    }

    /// Set the background color tolerance (Euclidean RGB distance).
    #[inline]
    pub fn tolerance(mut self, tolerance: f32) -> Self {
        self.segment = self.segment.tolerance(tolerance);
        self
    }

    /// Set the alpha below which a pixel is transparent.
    ///
    /// Applies to both segmentation and quantization.
    #[inline]
    pub fn alpha_threshold(mut self, threshold: u8) -> Self {
        self.segment = self.segment.alpha_threshold(threshold);
        self
    }

    /// The palette cells will index into.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Quantize `buffer` into a [`Grid`].
    ///
    /// 1. Segment the background, if enabled
    /// 2. Match each remaining pixel, diffusing error if enabled
    /// 3. Wrap the cells with a copy of the palette
    pub fn quantize(&self, mut buffer: PixelBuffer) -> Grid {
        let width = buffer.width();
        let height = buffer.height();

        let mask = if self.remove_background {
            detect_background(&buffer, &self.segment)
        } else {
            BackgroundMask::empty(width, height)
        };

        let cells = quantize_pixels(
            &mut buffer,
            &mask,
            &self.palette,
            self.dither,
            self.segment.alpha_threshold,
        );

        Grid::new(cells, width, height, self.palette.clone())
    }
}

/// Convert raw RGBA bytes into a bead grid with default thresholds.
///
/// `rgba` must hold exactly `width * height * 4` bytes.
///
/// # Errors
///
/// - [`QuantizeError::ZeroDimension`] if either dimension is zero
/// - [`QuantizeError::DimensionMismatch`] if the byte length is wrong
///
/// # Example
///
/// ```
/// use bead_quant::{quantize, Cell, Palette};
///
/// let palette = Palette::from_hex(&[("A", "#FFFFFF")]).unwrap();
/// let grid = quantize(vec![255; 2 * 2 * 4], 2, 2, &palette, false, true).unwrap();
/// assert!(grid.cells().iter().all(|c| *c == Cell::Empty));
/// ```
pub fn quantize(
    rgba: Vec<u8>,
    width: usize,
    height: usize,
    palette: &Palette,
    dither: bool,
    remove_background: bool,
) -> Result<Grid, QuantizeError> {
    let buffer = PixelBuffer::new(rgba, width, height)?;
    let grid = BeadQuantizer::new(palette.clone())
        .dither(dither)
        .remove_background(remove_background)
        .quantize(buffer);
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Cell;
    use pretty_assertions::assert_eq;

    fn palette() -> Palette {
        Palette::from_hex(&[("W", "#FFFFFF"), ("R", "#C81414"), ("K", "#000000")]).unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let q = BeadQuantizer::new(palette());
        assert!(!q.dither);
        assert!(!q.remove_background);
        assert_eq!(q.segment, SegmentOptions::default());
    }

    #[test]
    fn test_builder_reusable() {
        let q = BeadQuantizer::new(palette()).dither(true);
        let buffer = PixelBuffer::from_pixels(&[[120, 120, 120, 255]; 6], 3, 2).unwrap();
        let first = q.quantize(buffer.clone());
        let second = q.quantize(buffer);
        assert_eq!(first.cells(), second.cells());
    }

    #[test]
    fn test_tolerance_reaches_segmenter() {
        let near = [240, 240, 240, 255];
        #[rustfmt::skip]
        let pixels = [
            [255, 255, 255, 255], near, [255, 255, 255, 255],
            near, [200, 20, 20, 255], near,
            [255, 255, 255, 255], near, [255, 255, 255, 255],
        ];
        let buffer = PixelBuffer::from_pixels(&pixels, 3, 3).unwrap();

        let loose = BeadQuantizer::new(palette()).remove_background(true);
        assert_eq!(loose.quantize(buffer.clone()).assigned_count(), 1);

        let strict = loose.tolerance(5.0);
        assert_eq!(strict.quantize(buffer).assigned_count(), 5);
    }

    #[test]
    fn test_alpha_threshold_applies_without_removal() {
        let buffer = PixelBuffer::from_pixels(&[[0, 0, 0, 80]], 1, 1).unwrap();
        let q = BeadQuantizer::new(palette());
        assert_eq!(q.quantize(buffer.clone()).cell(0, 0), Cell::Assigned { index: 0 });

        let q = q.alpha_threshold(100);
        assert_eq!(q.quantize(buffer).cell(0, 0), Cell::Empty);
    }

    #[test]
    fn test_quantize_rejects_bad_buffers() {
        let p = palette();
        assert_eq!(
            quantize(vec![], 0, 2, &p, false, false).unwrap_err(),
            QuantizeError::ZeroDimension
        );
        assert_eq!(
            quantize(vec![0; 15], 2, 2, &p, false, false).unwrap_err(),
            QuantizeError::DimensionMismatch {
                len: 15,
                width: 2,
                height: 2
            }
        );
    }

    #[test]
    fn test_grid_owns_palette_copy() {
        let p = palette();
        let grid = quantize(vec![0, 0, 0, 255], 1, 1, &p, false, false).unwrap();
        assert_eq!(grid.palette().len(), p.len());
        assert_eq!(grid.color_at(0, 0).map(|c| c.id.as_str()), Some("K"));
    }
}
