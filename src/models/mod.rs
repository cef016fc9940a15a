pub mod catalog;
pub mod config;

pub use config::{AppConfig, BrandConfig, ColorEntry, ConversionDefaults, PresetConfig};
