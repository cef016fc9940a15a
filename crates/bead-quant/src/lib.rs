#![allow(clippy::module_inception)]

//! bead-quant: palette quantization for fuse-bead charts
//!
//! This library turns a small RGBA image into a grid of bead positions, each
//! either empty or holding one color from a manufacturer's palette. It does
//! no decoding, resizing or rendering; callers hand in a pixel buffer that is
//! already at grid resolution.
//!
//! # Quick Start
//!
//! ```
//! use bead_quant::{quantize, Cell, Palette};
//!
//! let palette = Palette::from_hex(&[("A", "#FFFFFF")]).unwrap();
//!
//! // A 2x2 white image, background removal off: every cell gets a bead
//! let grid = quantize(vec![255; 16], 2, 2, &palette, false, false).unwrap();
//! assert!(grid.cells().iter().all(|c| *c == Cell::Assigned { index: 0 }));
//! ```
//!
//! The [`BeadQuantizer`] builder exposes the thresholds and can be reused
//! across images.
//!
//! # Pipeline
//!
//! ```text
//! RGBA buffer (W x H)
//!   |
//!   |  remove_background?
//!   v
//! detect_background ---> BackgroundMask
//!   |
//!   v
//! raster scan, left-to-right, top-to-bottom
//!   |  alpha < threshold or masked   -> Cell::Empty
//!   |  otherwise blend onto white,
//!   |  nearest palette color         -> Cell::Assigned
//!   |  dither? push error forward into the buffer
//!   v
//! Grid (W x H cells + palette)
//! ```
//!
//! # Color Matching
//!
//! Distance is squared RGB difference weighted by luma contribution:
//!
//! ```text
//! d = 0.30 * dr^2 + 0.59 * dg^2 + 0.11 * db^2
//! ```
//!
//! Green differences cost the most because the eye is most sensitive to
//! them. When two palette entries are equally close, the one listed first
//! wins, so palette order is significant.
//!
//! Semi-transparent pixels are composited onto white before matching, which
//! is how a pale, translucent pixel looks on a white pegboard.
//!
//! # Background Removal
//!
//! [`detect_background`] flood-fills from the image corners. Only pixels
//! connected to the border through background-colored (or transparent)
//! pixels are removed; a white patch fully enclosed by the subject is kept.
//! See the [`segment`] module for the seed rule.
//!
//! # Dithering
//!
//! Floyd-Steinberg error diffusion in a plain raster scan. Error is written
//! into the caller's buffer copy as it goes, so results depend on scan order
//! but are fully deterministic for identical input.

pub mod api;
pub mod buffer;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;
pub mod segment;

mod quantize;


pub use api::{quantize, BeadQuantizer, QuantizeError};
pub use buffer::PixelBuffer;
pub use color::Rgb;
pub use output::{Cell, Grid};
pub use palette::{BeadColor, Palette, PaletteError, ParseColorError};
pub use segment::{detect_background, BackgroundMask, SegmentOptions};
