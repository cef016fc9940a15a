//! Color distance and alpha compositing helpers.
//!
//! Two distances are used in the pipeline:
//!
//! - [`weighted_distance_sq`] ranks palette candidates. It is a squared RGB
//!   distance with per-channel luma weights (R 0.30, G 0.59, B 0.11), a cheap
//!   approximation of perceived difference that avoids a full color-space
//!   conversion per pixel.
//! - [`rgb_distance`] is the plain Euclidean RGB distance. The background
//!   segmenter compares it against a tolerance expressed in RGB units
//!   (white to near-black is ≈441).

use super::Rgb;

/// Channel weights for palette matching, in R, G, B order.
pub const LUMA_WEIGHTS: [f64; 3] = [0.30, 0.59, 0.11];

/// Weighted squared distance between a working-precision sample and a palette
/// color.
///
/// ```
/// use bead_quant::color::weighted_distance_sq;
/// use bead_quant::Rgb;
///
/// // Identical colors are at distance zero
/// assert_eq!(weighted_distance_sq([10.0, 20.0, 30.0], Rgb::new(10, 20, 30)), 0.0);
///
/// // A green error costs more than the same blue error
/// let green = weighted_distance_sq([0.0, 10.0, 0.0], Rgb::new(0, 0, 0));
/// let blue = weighted_distance_sq([0.0, 0.0, 10.0], Rgb::new(0, 0, 0));
/// assert!(green > blue);
/// ```
#[inline]
pub fn weighted_distance_sq(sample: [f64; 3], color: Rgb) -> f64 {
    let target = color.to_f64();
    let dr = sample[0] - target[0];
    let dg = sample[1] - target[1];
    let db = sample[2] - target[2];
    LUMA_WEIGHTS[0] * dr * dr + LUMA_WEIGHTS[1] * dg * dg + LUMA_WEIGHTS[2] * db * db
}

/// Unweighted Euclidean distance between two colors.
#[inline]
pub fn rgb_distance(a: Rgb, b: Rgb) -> f32 {
    let dr = a.r as f32 - b.r as f32;
    let dg = a.g as f32 - b.g as f32;
    let db = a.b as f32 - b.b as f32;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Composite an RGBA sample onto an opaque white surface.
///
/// `channel * a/255 + 255 * (1 - a/255)` per channel. Translucent pixels end
/// up lighter, the way a translucent print looks on a white pegboard.
#[inline]
pub fn blend_on_white(rgba: [u8; 4]) -> [f64; 3] {
    let alpha = rgba[3] as f64 / 255.0;
    let backing = 255.0 * (1.0 - alpha);
    [
        rgba[0] as f64 * alpha + backing,
        rgba[1] as f64 * alpha + backing,
        rgba[2] as f64 * alpha + backing,
    ]
}
