//! Conversion pipeline: image file in, bead grid out.
//!
//! Resolves the palette from the catalog, decodes and resizes the image,
//! then hands the pixels to the quantizer.

use std::path::Path;

use bead_quant::{BeadQuantizer, Grid, Palette};
use image::DynamicImage;

use crate::error::ConvertError;
use crate::loader::{grid_dimensions, open_image, to_pixel_buffer, GridSize};
use crate::models::{AppConfig, ConversionDefaults};

/// Everything a single conversion needs besides the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    pub size: GridSize,
    pub brand: Option<String>,
    pub preset: Option<String>,
    pub dither: bool,
    pub remove_background: bool,
    pub tolerance: f32,
    pub alpha_threshold: u8,
}

impl ConvertOptions {
    /// Options taken entirely from the configured defaults
    pub fn from_defaults(defaults: &ConversionDefaults) -> Self {
        Self {
            size: GridSize::Exact {
                width: defaults.width,
                height: defaults.height,
            },
            brand: None,
            preset: None,
            dither: defaults.dither,
            remove_background: defaults.remove_background,
            tolerance: defaults.tolerance,
            alpha_threshold: defaults.alpha_threshold,
        }
    }

    /// Switch on dithering and background removal when requested.
    ///
    /// Command-line switches can only enable these; a feature already on in
    /// the defaults stays on.
    pub fn enable(mut self, dither: bool, remove_background: bool) -> Self {
        self.dither |= dither;
        self.remove_background |= remove_background;
        self
    }
}

/// Accept a background tolerance only if it is finite and non-negative.
pub fn check_tolerance(tolerance: f32) -> Result<f32, ConvertError> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(tolerance)
    } else {
        Err(ConvertError::InvalidTolerance(tolerance))
    }
}

/// Resolve the palette selected by `options`.
pub fn resolve_palette(config: &AppConfig, options: &ConvertOptions) -> Result<Palette, ConvertError> {
    let brand = config.brand(options.brand.as_deref())?;
    let preset = brand.preset(options.preset.as_deref())?;
    let palette = brand.palette(preset)?;
    tracing::debug!(
        brand = %brand.id,
        preset = preset.map(|p| p.id.as_str()).unwrap_or("(all)"),
        colors = palette.len(),
        "Resolved palette"
    );
    Ok(palette)
}

/// Quantize an already decoded image.
pub fn convert_image(
    img: &DynamicImage,
    palette: Palette,
    options: &ConvertOptions,
) -> Result<Grid, ConvertError> {
    let tolerance = check_tolerance(options.tolerance)?;
    let (width, height) = grid_dimensions(img.width(), img.height(), options.size);
    let buffer = to_pixel_buffer(img, width, height)?;

    let quantizer = BeadQuantizer::new(palette)
        .dither(options.dither)
        .remove_background(options.remove_background)
        .tolerance(tolerance)
        .alpha_threshold(options.alpha_threshold);
    let grid = quantizer.quantize(buffer);

    tracing::info!(
        width,
        height,
        placed = grid.assigned_count(),
        colors = grid.color_counts().len(),
        "Converted image"
    );
    Ok(grid)
}

/// Decode `input` and convert it with the palette chosen in `options`.
pub fn convert_file(
    config: &AppConfig,
    input: &Path,
    options: &ConvertOptions,
) -> Result<Grid, ConvertError> {
    let palette = resolve_palette(config, options)?;
    let img = open_image(input)?;
    convert_image(&img, palette, options)
}
