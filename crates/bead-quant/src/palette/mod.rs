//! Palette types and utilities
//!
//! This module provides the bead [`Palette`] and its error types for parsing
//! and validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{BeadColor, Palette};
