//! Raster quantization loop.

use crate::buffer::PixelBuffer;
use crate::color::blend_on_white;
use crate::dither::{diffuse_error, FLOYD_STEINBERG};
use crate::output::Cell;
use crate::palette::Palette;
use crate::segment::BackgroundMask;

/// Assign every pixel of `buffer` a cell.
///
/// Pixels are visited left-to-right, top-to-bottom. A pixel becomes
/// [`Cell::Empty`] when it is transparent or masked; otherwise it is blended
/// onto white and matched to the nearest palette color. With `dither` set,
/// the matching error is pushed into later pixels of `buffer`.
pub(crate) fn quantize_pixels(
    buffer: &mut PixelBuffer,
    mask: &BackgroundMask,
    palette: &Palette,
    dither: bool,
    alpha_threshold: u8,
) -> Vec<Cell> {
    let width = buffer.width();
    let height = buffer.height();
    let mut cells = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let rgba = buffer.rgba(idx);

            if rgba[3] < alpha_threshold || mask.is_background(idx) {
                cells.push(Cell::Empty);
                continue;
            }

            let blended = blend_on_white(rgba);
            let (index, _) = palette.find_nearest(blended);
            cells.push(Cell::Assigned { index });

            if dither {
                let chosen = palette.get(index).rgb.to_f64();
                let error = [
                    blended[0] - chosen[0],
                    blended[1] - chosen[1],
                    blended[2] - chosen[2],
                ];
                diffuse_error(buffer, mask, x, y, error, &FLOYD_STEINBERG, alpha_threshold);
            }
        }
    }

    tracing::debug!(
        width,
        height,
        dither,
        colors = palette.len(),
        empty = cells.iter().filter(|c| c.is_empty()).count(),
        "Quantized pixel buffer"
    );

    cells
}
