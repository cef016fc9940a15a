//! Owned RGBA pixel buffer.
//!
//! The quantizer dithers in place, so a conversion needs exclusive ownership
//! of its pixels. [`PixelBuffer`] is that owned, size-checked RGBA8 array.

use crate::api::QuantizeError;
use crate::color::Rgb;

/// Bytes per RGBA8 pixel.
pub const CHANNELS: usize = 4;

/// Dense row-major RGBA8 pixels with validated dimensions.
///
/// # Example
///
/// ```
/// use bead_quant::PixelBuffer;
///
/// let buffer = PixelBuffer::new(vec![255; 2 * 3 * 4], 2, 3).unwrap();
/// assert_eq!(buffer.pixel(1, 2), [255, 255, 255, 255]);
///
/// // Length must match width * height * 4
/// assert!(PixelBuffer::new(vec![0; 7], 2, 1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes.
    ///
    /// # Errors
    ///
    /// - [`QuantizeError::ZeroDimension`] if either dimension is zero
    /// - [`QuantizeError::DimensionMismatch`] if `data.len() != width * height * 4`
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> Result<Self, QuantizeError> {
        if width == 0 || height == 0 {
            return Err(QuantizeError::ZeroDimension);
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS));
        if expected != Some(data.len()) {
            return Err(QuantizeError::DimensionMismatch {
                len: data.len(),
                width,
                height,
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build a buffer from per-pixel RGBA arrays.
    pub fn from_pixels(
        pixels: &[[u8; 4]],
        width: usize,
        height: usize,
    ) -> Result<Self, QuantizeError> {
        Self::new(pixels.concat(), width, height)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// RGBA of the pixel at row-major index `idx`.
    #[inline]
    pub fn rgba(&self, idx: usize) -> [u8; 4] {
        let o = idx * CHANNELS;
        [
            self.data[o],
            self.data[o + 1],
            self.data[o + 2],
            self.data[o + 3],
        ]
    }

    /// RGBA of the pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        self.rgba(y * self.width + x)
    }

    /// Color channels of the pixel at `idx`, ignoring alpha.
    #[inline]
    pub fn rgb(&self, idx: usize) -> Rgb {
        let [r, g, b, _] = self.rgba(idx);
        Rgb::new(r, g, b)
    }

    /// Alpha of the pixel at `idx`.
    #[inline]
    pub fn alpha(&self, idx: usize) -> u8 {
        self.data[idx * CHANNELS + 3]
    }

    /// Add a signed offset to the color channels of pixel `idx`.
    ///
    /// Results are rounded to the nearest integer, halves to even, and
    /// clamped to `0..=255`. Alpha is left untouched.
    #[inline]
    pub(crate) fn offset_rgb(&mut self, idx: usize, delta: [f64; 3]) {
        let o = idx * CHANNELS;
        for (c, d) in delta.iter().enumerate() {
            let value = self.data[o + c] as f64 + d;
            self.data[o + c] = value.round_ties_even().clamp(0.0, 255.0) as u8;
        }
    }
}
