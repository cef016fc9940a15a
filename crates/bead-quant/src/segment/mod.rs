//! Background segmentation.
//!
//! Finds the pixels that belong to a flat background touching the image
//! border, so they can be left empty on the bead board instead of being
//! filled with (usually white) beads. See [`detect_background`] for the seed
//! rule and [`SegmentOptions`] for the thresholds.

mod flood_fill;
mod mask;
mod options;

pub use flood_fill::detect_background;
pub use mask::BackgroundMask;
pub use options::{SegmentOptions, DEFAULT_ALPHA_THRESHOLD, DEFAULT_TOLERANCE};
