//! Color types and distance utilities
//!
//! # Example
//!
//! ```
//! use bead_quant::color::{blend_on_white, weighted_distance_sq};
//! use bead_quant::Rgb;
//!
//! // A half-transparent black pixel sits on a white board
//! let sample = blend_on_white([0, 0, 0, 128]);
//! let to_grey = weighted_distance_sq(sample, Rgb::new(128, 128, 128));
//! let to_black = weighted_distance_sq(sample, Rgb::new(0, 0, 0));
//! assert!(to_grey < to_black);
//! ```

mod distance;
mod rgb;

pub use distance::{blend_on_white, rgb_distance, weighted_distance_sq, LUMA_WEIGHTS};
pub use rgb::Rgb;
