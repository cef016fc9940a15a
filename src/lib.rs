//! Beadgrid - turn pictures into fuse-bead charts
//!
//! Loads the bead catalog, decodes and resizes images, and renders the
//! quantizer's grid as a chart. The color work itself lives in `bead-quant`.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod report;
