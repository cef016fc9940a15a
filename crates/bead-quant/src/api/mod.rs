//! Public API for the bead-quant crate.
//!
//! This module provides the high-level API: the [`BeadQuantizer`] builder,
//! the one-call [`quantize`] function and the [`QuantizeError`] error type.

mod builder;
mod error;

pub use builder::{quantize, BeadQuantizer};
pub use error::QuantizeError;
