//! Bead palette with nearest-color matching.
//!
//! A [`Palette`] is the closed set of bead colors a conversion may choose
//! from. Entries keep the order they were given in: that order decides ties
//! during matching and is echoed into the result grid.

use std::str::FromStr;

use super::error::PaletteError;
use crate::color::{weighted_distance_sq, Rgb};

/// One bead color as published by a manufacturer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeadColor {
    /// Manufacturer code printed on the bag (e.g. "S01"). Treated as an
    /// opaque label.
    pub id: String,
    /// Human readable name.
    pub name: String,
    /// sRGB value of the bead.
    pub rgb: Rgb,
}

impl BeadColor {
    /// Create a bead color.
    pub fn new(id: impl Into<String>, name: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rgb,
        }
    }
}

/// An ordered, non-empty set of bead colors.
///
/// Id uniqueness is not checked: two entries may share an id or a color. The
/// matcher simply picks the first entry with the smallest distance.
///
/// # Example
///
/// ```
/// use bead_quant::{BeadColor, Palette, Rgb};
///
/// let palette = Palette::new(vec![
///     BeadColor::new("S01", "White", Rgb::new(255, 255, 255)),
///     BeadColor::new("S02", "Black", Rgb::new(0, 0, 0)),
/// ])
/// .unwrap();
///
/// assert_eq!(palette.len(), 2);
/// let (idx, _) = palette.find_nearest([30.0, 30.0, 30.0]);
/// assert_eq!(palette.get(idx).id, "S02");
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<BeadColor>,
}

impl Palette {
    /// Create a palette from bead colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: Vec<BeadColor>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Create a palette from `(id, hex)` pairs. The id doubles as the name.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any hex string is invalid,
    /// or [`PaletteError::EmptyPalette`] for an empty list.
    ///
    /// # Example
    ///
    /// ```
    /// use bead_quant::Palette;
    ///
    /// let palette = Palette::from_hex(&[("W", "#FFFFFF"), ("K", "#000")]).unwrap();
    /// assert_eq!(palette.get(1).rgb.to_bytes(), [0, 0, 0]);
    /// ```
    pub fn from_hex(entries: &[(&str, &str)]) -> Result<Self, PaletteError> {
        let colors = entries
            .iter()
            .map(|&(id, hex)| {
                Rgb::from_str(hex)
                    .map(|rgb| BeadColor::new(id, id, rgb))
                    .map_err(|source| PaletteError::ParseColor {
                        id: id.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(colors)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the entry at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn get(&self, idx: usize) -> &BeadColor {
        &self.colors[idx]
    }

    /// Iterate over the entries in palette order.
    pub fn iter(&self) -> impl Iterator<Item = &BeadColor> {
        self.colors.iter()
    }

    /// Find the palette entry closest to `sample` (RGB in 0.0..=255.0).
    ///
    /// Uses [`weighted_distance_sq`]. Returns `(index, distance)`. On ties
    /// the earliest entry wins, so the result only depends on palette order.
    #[inline]
    pub fn find_nearest(&self, sample: [f64; 3]) -> (usize, f64) {
        // Linear scan; catalogs top out at a few hundred entries
        let mut best_idx = 0;
        let mut best_dist = f64::MAX;

        for (i, color) in self.colors.iter().enumerate() {
            let dist = weighted_distance_sq(sample, color.rgb);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
                if dist == 0.0 {
                    break;
                }
            }
        }

        (best_idx, best_dist)
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a BeadColor;
    type IntoIter = std::slice::Iter<'a, BeadColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
