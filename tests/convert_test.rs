//! End-to-end conversion tests: PNG on disk to bead chart.

mod common;

use beadgrid::error::ConvertError;
use beadgrid::loader::GridSize;
use beadgrid::models::AppConfig;
use beadgrid::pipeline::{convert_file, ConvertOptions};
use beadgrid::report::{render, OutputFormat};
use bead_quant::Cell;
use common::fixtures::{self, colors};
use image::RgbaImage;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn test_config() -> AppConfig {
    AppConfig::from_yaml(fixtures::TEST_CONFIG)
}

fn options(config: &AppConfig) -> ConvertOptions {
    ConvertOptions::from_defaults(&config.defaults)
}

#[test]
fn test_framed_subject_with_background_removal() {
    let dir = TempDir::new().unwrap();
    let input = fixtures::write_png(
        dir.path(),
        "framed.png",
        &fixtures::framed_square(8, colors::WHITE, colors::BLACK),
    );
    let config = test_config();
    let options = ConvertOptions {
        preset: Some("bw".to_string()),
        remove_background: true,
        ..options(&config)
    };

    let grid = convert_file(&config, &input, &options).unwrap();

    common::assert_grid_size(&grid, 8, 8);
    common::assert_grid_ids(
        &grid,
        &[
            ". . . . . . . .",
            ". . . . . . . .",
            ". . M2 M2 M2 M2 . .",
            ". . M2 M2 M2 M2 . .",
            ". . M2 M2 M2 M2 . .",
            ". . M2 M2 M2 M2 . .",
            ". . . . . . . .",
            ". . . . . . . .",
        ],
    );
}

#[test]
fn test_framed_subject_without_removal_keeps_background_beads() {
    let dir = TempDir::new().unwrap();
    let input = fixtures::write_png(
        dir.path(),
        "framed.png",
        &fixtures::framed_square(8, colors::WHITE, colors::BLACK),
    );
    let config = test_config();

    let grid = convert_file(&config, &input, &options(&config)).unwrap();

    assert_eq!(grid.assigned_count(), 64);
    assert_eq!(grid.color_at(0, 0).map(|c| c.id.as_str()), Some("M1"));
    assert_eq!(grid.color_at(4, 4).map(|c| c.id.as_str()), Some("M2"));
}

#[test]
fn test_transparent_pixels_never_get_beads() {
    let dir = TempDir::new().unwrap();
    let input = fixtures::write_png(
        dir.path(),
        "sprite.png",
        &fixtures::framed_square(8, colors::CLEAR, colors::RED),
    );
    let config = test_config();

    // Background removal off: transparency alone empties the frame
    let grid = convert_file(&config, &input, &options(&config)).unwrap();

    common::assert_border_empty(&grid);
    assert_eq!(grid.assigned_count(), 16);
    assert_eq!(grid.color_at(3, 3).map(|c| c.id.as_str()), Some("M3"));
}

#[test]
fn test_downscaled_image_keeps_subject() {
    let dir = TempDir::new().unwrap();
    let input = fixtures::write_png(
        dir.path(),
        "large.png",
        &fixtures::framed_square(32, colors::WHITE, colors::BLACK),
    );
    let config = test_config();
    let options = ConvertOptions {
        preset: Some("bw".to_string()),
        remove_background: true,
        ..options(&config)
    };

    let grid = convert_file(&config, &input, &options).unwrap();

    common::assert_grid_size(&grid, 8, 8);
    common::assert_border_empty(&grid);
    assert_eq!(grid.cell(3, 3), Cell::Assigned { index: 1 });
    assert_eq!(grid.cell(4, 4), Cell::Assigned { index: 1 });
}

#[test]
fn test_fit_size_follows_aspect_ratio() {
    let dir = TempDir::new().unwrap();
    let input = fixtures::write_png(
        dir.path(),
        "wide.png",
        &RgbaImage::from_pixel(40, 20, colors::RED),
    );
    let config = test_config();

    let locked = ConvertOptions {
        size: GridSize::Fit {
            size: 10,
            lock_aspect: true,
        },
        ..options(&config)
    };
    let grid = convert_file(&config, &input, &locked).unwrap();
    common::assert_grid_size(&grid, 10, 5);

    let free = ConvertOptions {
        size: GridSize::Fit {
            size: 10,
            lock_aspect: false,
        },
        ..options(&config)
    };
    let grid = convert_file(&config, &input, &free).unwrap();
    common::assert_grid_size(&grid, 10, 10);
}

#[test]
fn test_dithered_conversion_is_repeatable() {
    let dir = TempDir::new().unwrap();
    let gradient = RgbaImage::from_fn(16, 16, |x, y| {
        let v = ((x + y) * 8) as u8;
        image::Rgba([v, v / 2, 255 - v, 255])
    });
    let input = fixtures::write_png(dir.path(), "gradient.png", &gradient);
    let config = test_config();
    let options = ConvertOptions {
        size: GridSize::Exact {
            width: 16,
            height: 16,
        },
        dither: true,
        ..options(&config)
    };

    let first = convert_file(&config, &input, &options).unwrap();
    let second = convert_file(&config, &input, &options).unwrap();

    assert_eq!(first.cells(), second.cells());
    assert_eq!(first.assigned_count(), 256);
}

#[test]
fn test_json_chart_written_to_file() {
    let dir = TempDir::new().unwrap();
    let input = fixtures::write_png(
        dir.path(),
        "framed.png",
        &fixtures::framed_square(8, colors::WHITE, colors::BLACK),
    );
    let config = test_config();
    let options = ConvertOptions {
        remove_background: true,
        ..options(&config)
    };

    let grid = convert_file(&config, &input, &options).unwrap();
    let chart = render(&grid, OutputFormat::Json).unwrap();
    let output = dir.path().join("chart.json");
    std::fs::write(&output, &chart).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["width"], 8);
    assert_eq!(value["height"], 8);
    assert_eq!(value["palette"].as_array().map(Vec::len), Some(3));
    assert!(value["cells"][0][0].is_null());
    assert_eq!(value["cells"][3][3], "M2");
    assert_eq!(value["counts"][0]["id"], "M2");
    assert_eq!(value["counts"][0]["count"], 16);
}

#[test]
fn test_text_chart_lists_bill_of_materials() {
    let dir = TempDir::new().unwrap();
    let input = fixtures::write_png(
        dir.path(),
        "framed.png",
        &fixtures::framed_square(8, colors::WHITE, colors::BLACK),
    );
    let config = test_config();

    let grid = convert_file(&config, &input, &options(&config)).unwrap();
    let chart = render(&grid, OutputFormat::Text).unwrap();

    assert!(chart.starts_with("8x8 beads, 64 placed\n"));
    assert!(chart.contains("Bill of materials:"));
    assert!(chart.contains("  M1  White  #FFFFFF     48"));
    assert!(chart.contains("  M2  Black  #000000     16"));
}

#[test]
fn test_unknown_preset_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = fixtures::write_png(dir.path(), "any.png", &RgbaImage::from_pixel(2, 2, colors::RED));
    let config = test_config();
    let options = ConvertOptions {
        preset: Some("giant".to_string()),
        ..options(&config)
    };

    let err = convert_file(&config, &input, &options).unwrap_err();
    assert_eq!(err.to_string(), "Unknown preset 'giant' for brand 'mono'");
}

#[test]
fn test_undecodable_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.png");
    std::fs::write(&input, b"not a png").unwrap();
    let config = test_config();

    let err = convert_file(&config, &input, &options(&config)).unwrap_err();
    assert!(matches!(err, ConvertError::Decode { .. }));
}
