use crate::assets::AssetLoader;
use serde::Deserialize;
use std::collections::HashMap;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Settings used when a convert flag is not given
    #[serde(default)]
    pub defaults: ConversionDefaults,

    /// Bead brands, first one is the default
    #[serde(default)]
    pub brands: Vec<BrandConfig>,
}

/// Default conversion settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ConversionDefaults {
    /// Grid width in beads
    pub width: u32,
    /// Grid height in beads
    pub height: u32,
    pub dither: bool,
    pub remove_background: bool,
    /// Background color tolerance (Euclidean RGB distance)
    pub tolerance: f32,
    /// Alpha below this is transparent
    pub alpha_threshold: u8,
}

impl Default for ConversionDefaults {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            dither: false,
            remove_background: false,
            tolerance: bead_quant::segment::DEFAULT_TOLERANCE,
            alpha_threshold: bead_quant::segment::DEFAULT_ALPHA_THRESHOLD,
        }
    }
}

/// A bead manufacturer's catalog
#[derive(Debug, Deserialize, Clone)]
pub struct BrandConfig {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Every color the brand sells, in catalog order
    pub colors: Vec<ColorEntry>,

    /// Named boxes as lists of color ids
    #[serde(default)]
    pub boxes: HashMap<String, Vec<String>>,

    /// Purchasable color sets, smallest first
    #[serde(default)]
    pub presets: Vec<PresetConfig>,
}

/// One catalog color
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ColorEntry {
    pub id: String,
    pub name: String,
    /// `#RRGGBB` or `#RGB`
    pub hex: String,
}

/// A set of colors assembled from boxes and single ids
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PresetConfig {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Boxes merged in order
    #[serde(default)]
    pub boxes: Vec<String>,

    /// Extra color ids appended after the boxes
    #[serde(default)]
    pub ids: Vec<String>,

    /// Color ids removed from the merged list
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => Self::from_yaml(&content),
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration, falling back to defaults on error
    pub fn from_yaml(content: &str) -> Self {
        match serde_yaml::from_str::<Self>(content) {
            Ok(config) => {
                tracing::info!(
                    brands = config.brands.len(),
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }
}
