//! Background segmentation options.

/// Pixels with alpha below this value are treated as transparent.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 50;

/// Default Euclidean RGB distance within which a pixel counts as background.
pub const DEFAULT_TOLERANCE: f32 = 45.0;

/// Configuration for [`detect_background`](super::detect_background).
///
/// # Example
///
/// ```
/// use bead_quant::SegmentOptions;
///
/// let options = SegmentOptions::new().tolerance(30.0).alpha_threshold(10);
/// assert_eq!(options.alpha_threshold, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentOptions {
    /// Alpha below this value is transparent.
    ///
    /// Default: `50`
    pub alpha_threshold: u8,

    /// Maximum Euclidean RGB distance to the reference background color for
    /// a pixel to be absorbed by the fill.
    ///
    /// Default: `45.0`
    pub tolerance: f32,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl SegmentOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transparency threshold.
    #[inline]
    pub fn alpha_threshold(mut self, threshold: u8) -> Self {
        self.alpha_threshold = threshold;
        self
    }

    /// Set the color tolerance.
    #[inline]
    pub fn tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Whether an alpha value counts as transparent.
    #[inline]
    pub fn is_transparent(&self, alpha: u8) -> bool {
        alpha < self.alpha_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let opts = SegmentOptions::default();
        assert_eq!(opts.alpha_threshold, 50);
        assert!((opts.tolerance - 45.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let opts = SegmentOptions::default();
        assert!(opts.is_transparent(49));
        assert!(!opts.is_transparent(50));
    }
}
