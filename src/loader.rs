//! Image decoding and resizing to grid resolution.

use std::path::Path;

use bead_quant::PixelBuffer;
use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::ConvertError;

/// Requested grid resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridSize {
    /// Exact width and height in beads
    Exact { width: u32, height: u32 },
    /// Longest side in beads, the other side follows the image when
    /// `lock_aspect` is set, otherwise the grid is square
    Fit { size: u32, lock_aspect: bool },
}

/// Resolve a grid size against the source image dimensions.
///
/// With a locked aspect ratio the longer side gets `size` beads and the
/// other side is scaled and rounded, never below 1.
pub fn grid_dimensions(source_width: u32, source_height: u32, size: GridSize) -> (u32, u32) {
    match size {
        GridSize::Exact { width, height } => (width, height),
        GridSize::Fit {
            size,
            lock_aspect: false,
        } => (size, size),
        GridSize::Fit {
            size,
            lock_aspect: true,
        } => {
            if source_width == 0 || source_height == 0 {
                return (size, size);
            }
            let aspect = source_width as f64 / source_height as f64;
            if aspect > 1.0 {
                let height = (size as f64 / aspect).round() as u32;
                (size, height.max(1))
            } else {
                let width = (size as f64 * aspect).round() as u32;
                (width.max(1), size)
            }
        }
    }
}

/// Decode an image file.
pub fn open_image(path: &Path) -> Result<DynamicImage, ConvertError> {
    let img = image::open(path).map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Decoded image"
    );
    Ok(img)
}

/// Resize `img` to exactly `width` x `height` and wrap its RGBA bytes.
pub fn to_pixel_buffer(
    img: &DynamicImage,
    width: u32,
    height: u32,
) -> Result<PixelBuffer, ConvertError> {
    if width == 0 || height == 0 {
        return Err(ConvertError::InvalidSize { width, height });
    }
    let resized = img.resize_exact(width, height, FilterType::Triangle);
    let raw = resized.to_rgba8().into_raw();
    Ok(PixelBuffer::new(raw, width as usize, height as usize)?)
}
