use std::path::PathBuf;

use bead_quant::{PaletteError, QuantizeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported grid size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Tolerance must be a non-negative number, got {0}")]
    InvalidTolerance(f32),

    #[error("No bead brands configured")]
    NoBrands,

    #[error("Unknown brand: {0}")]
    UnknownBrand(String),

    #[error("Unknown preset '{preset}' for brand '{brand}'")]
    UnknownPreset { brand: String, preset: String },

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Quantize error: {0}")]
    Quantize(#[from] QuantizeError),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
