//! Output types for the quantization pipeline.
//!
//! [`Grid`] is the only result type: one [`Cell`] per pixel plus the palette
//! the cells refer to. Rendering a grid into a chart or a bill of materials
//! is left to the caller.

mod grid;

pub use grid::{Cell, Grid};
