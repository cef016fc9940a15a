//! Brand and preset resolution.
//!
//! Turns the catalog entries of `config.yaml` into a [`Palette`] the
//! quantizer can use.

use std::collections::HashSet;
use std::str::FromStr;

use bead_quant::{BeadColor, Palette, PaletteError, Rgb};

use super::config::{AppConfig, BrandConfig, ColorEntry, PresetConfig};
use crate::error::ConvertError;

impl AppConfig {
    /// Look up a brand by id, or the first brand when `id` is `None`.
    pub fn brand(&self, id: Option<&str>) -> Result<&BrandConfig, ConvertError> {
        match id {
            Some(id) => self
                .brands
                .iter()
                .find(|b| b.id == id)
                .ok_or_else(|| ConvertError::UnknownBrand(id.to_string())),
            None => self.brands.first().ok_or(ConvertError::NoBrands),
        }
    }
}

impl BrandConfig {
    /// Look up a preset by id, or the last (largest) preset when `id` is
    /// `None`.
    ///
    /// A brand without presets only answers to `None`, with `None`.
    pub fn preset(&self, id: Option<&str>) -> Result<Option<&PresetConfig>, ConvertError> {
        match id {
            Some(id) => self
                .presets
                .iter()
                .find(|p| p.id == id)
                .map(Some)
                .ok_or_else(|| ConvertError::UnknownPreset {
                    brand: self.id.clone(),
                    preset: id.to_string(),
                }),
            None => Ok(self.presets.last()),
        }
    }

    fn color(&self, id: &str) -> Option<&ColorEntry> {
        self.colors.iter().find(|c| c.id == id)
    }

    /// Catalog entries for `preset`, in preset order.
    ///
    /// Boxes are merged first, then single ids. Excluded ids are dropped and
    /// repeated ids keep their first position. Unknown boxes and ids are
    /// skipped with a warning. With no preset, or a preset naming neither
    /// boxes nor ids, every brand color is used.
    pub fn preset_colors(&self, preset: Option<&PresetConfig>) -> Vec<&ColorEntry> {
        let Some(preset) = preset else {
            return self.colors.iter().collect();
        };
        if preset.boxes.is_empty() && preset.ids.is_empty() {
            return self
                .colors
                .iter()
                .filter(|c| !preset.exclude.contains(&c.id))
                .collect();
        }

        let mut ids: Vec<&str> = Vec::new();
        for name in &preset.boxes {
            match self.boxes.get(name) {
                Some(box_ids) => ids.extend(box_ids.iter().map(String::as_str)),
                None => tracing::warn!(brand = %self.id, preset = %preset.id, box_name = %name, "Box not found"),
            }
        }
        ids.extend(preset.ids.iter().map(String::as_str));

        let excluded: HashSet<&str> = preset.exclude.iter().map(String::as_str).collect();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut colors = Vec::with_capacity(ids.len());

        for id in ids {
            if excluded.contains(id) || !seen.insert(id) {
                continue;
            }
            match self.color(id) {
                Some(entry) => colors.push(entry),
                None => tracing::warn!(brand = %self.id, preset = %preset.id, color = %id, "Color id not found"),
            }
        }

        colors
    }

    /// Build the quantizer palette for `preset`.
    ///
    /// # Errors
    ///
    /// Fails if a hex value does not parse or the preset resolves to no
    /// colors at all.
    pub fn palette(&self, preset: Option<&PresetConfig>) -> Result<Palette, ConvertError> {
        let colors = self
            .preset_colors(preset)
            .into_iter()
            .map(|entry| {
                Rgb::from_str(&entry.hex)
                    .map(|rgb| BeadColor::new(entry.id.as_str(), entry.name.as_str(), rgb))
                    .map_err(|source| PaletteError::ParseColor {
                        id: entry.id.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Palette::new(colors)?)
    }
}
