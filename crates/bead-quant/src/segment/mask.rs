//! Per-pixel background mask.

use crate::api::QuantizeError;

/// One flag per pixel marking it as background (excluded from quantization).
///
/// Row-major, same dimensions as the buffer it was computed from. A mask
/// lives for a single conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundMask {
    bits: Vec<bool>,
    width: usize,
}

impl BackgroundMask {
    /// A mask with nothing marked.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            bits: vec![false; width * height],
            width,
        }
    }

    /// Wrap caller-provided flags.
    ///
    /// # Errors
    ///
    /// Returns [`QuantizeError::DimensionMismatch`] if `bits.len()` is not
    /// `width * height`.
    pub fn from_bits(bits: Vec<bool>, width: usize, height: usize) -> Result<Self, QuantizeError> {
        if width.checked_mul(height) != Some(bits.len()) {
            return Err(QuantizeError::DimensionMismatch {
                len: bits.len(),
                width,
                height,
            });
        }
        Ok(Self { bits, width })
    }

    /// Whether the pixel at row-major index `idx` is background.
    #[inline]
    pub fn is_background(&self, idx: usize) -> bool {
        self.bits[idx]
    }

    /// Whether the pixel at `(x, y)` is background.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.width + x]
    }

    #[inline]
    pub(crate) fn mark(&mut self, idx: usize) {
        self.bits[idx] = true;
    }

    /// Number of background pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// True when nothing is marked.
    pub fn is_clear(&self) -> bool {
        !self.bits.iter().any(|&b| b)
    }
}
