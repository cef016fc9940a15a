//! Test fixtures and constants.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

/// Pixel colors used by the fixture images
pub mod colors {
    use image::Rgba;

    pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    pub const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
}

/// A small catalog with two brands, used instead of the embedded config
pub const TEST_CONFIG: &str = r##"
defaults:
  width: 8
  height: 8
  dither: false
  remove_background: false
  tolerance: 45
  alpha_threshold: 50

brands:
  - id: mono
    name: Mono Beads
    colors:
      - { id: M1, name: White, hex: "#FFFFFF" }
      - { id: M2, name: Black, hex: "#000000" }
      - { id: M3, name: Red, hex: "#FF0000" }
    boxes:
      BW: [M1, M2]
      COLOR: [M3]
    presets:
      - id: bw
        name: Black and white
        boxes: [BW]
      - id: full
        name: Everything
        boxes: [BW, COLOR]
  - id: red
    name: Red Only
    colors:
      - { id: R1, name: Red, hex: "#F00" }
"##;

/// Write `config` to `dir/config.yaml` and return the path
pub fn write_config(dir: &Path, config: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    std::fs::write(&path, config).expect("write config");
    path
}

/// Save `img` as PNG under `dir`
pub fn write_png(dir: &Path, name: &str, img: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).expect("save png");
    path
}

/// `size` x `size` image of `background` with a centered `subject` square
/// covering the middle half
pub fn framed_square(size: u32, background: Rgba<u8>, subject: Rgba<u8>) -> RgbaImage {
    let lo = size / 4;
    let hi = size - size / 4;
    RgbaImage::from_fn(size, size, |x, y| {
        if (lo..hi).contains(&x) && (lo..hi).contains(&y) {
            subject
        } else {
            background
        }
    })
}
