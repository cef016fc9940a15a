//! Unified error type for the bead-quant public API.
//!
//! [`QuantizeError`] covers every precondition the pipeline checks, for
//! convenient `?` propagation in application code.

use thiserror::Error;

use crate::palette::{PaletteError, ParseColorError};

/// Unified error type for the bead-quant public API.
///
/// # Example
///
/// ```
/// use bead_quant::{Palette, QuantizeError};
///
/// fn create_palette() -> Result<Palette, QuantizeError> {
///     let palette = Palette::from_hex(&[("W", "#FFFFFF"), ("K", "#000000")])?;
///     Ok(palette)
/// }
/// # create_palette().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantizeError {
    /// Width or height is zero
    #[error("image dimensions cannot be zero")]
    ZeroDimension,

    /// Buffer length disagrees with the declared dimensions
    #[error("pixel buffer length {len} does not match dimensions {width}x{height}")]
    DimensionMismatch {
        /// Actual byte length of the buffer
        len: usize,
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
    },

    /// Palette validation error
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// Color parsing error (invalid hex string)
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = QuantizeError::DimensionMismatch {
            len: 10,
            width: 2,
            height: 2,
        };
        assert_eq!(
            err.to_string(),
            "pixel buffer length 10 does not match dimensions 2x2"
        );
    }

    #[test]
    fn test_from_palette_error() {
        let err: QuantizeError = PaletteError::EmptyPalette.into();
        assert_eq!(err.to_string(), "palette error: palette cannot be empty");
    }
}
