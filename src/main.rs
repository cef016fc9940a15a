use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beadgrid::assets::{AssetLoader, ConfigSource};
use beadgrid::loader::GridSize;
use beadgrid::models::AppConfig;
use beadgrid::pipeline::{check_tolerance, convert_file, ConvertOptions};
use beadgrid::report::{render, OutputFormat};

/// Log filter used when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "beadgrid=warn,bead_quant=warn";

#[derive(Parser)]
#[command(name = "beadgrid")]
#[command(about = "Turn pictures into fuse-bead charts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image into a bead chart
    Convert {
        /// Input image (PNG, JPEG, GIF, WebP, BMP)
        #[arg(short, long)]
        input: PathBuf,

        /// Grid width in beads
        #[arg(long, requires = "height", conflicts_with = "size")]
        width: Option<u32>,

        /// Grid height in beads
        #[arg(long, requires = "width", conflicts_with = "size")]
        height: Option<u32>,

        /// Longest side in beads; the other side follows the image
        #[arg(short, long)]
        size: Option<u32>,

        /// With --size, make the grid square instead of keeping the aspect ratio
        #[arg(long, requires = "size")]
        free_aspect: bool,

        /// Bead brand id (default: first configured brand)
        #[arg(short, long)]
        brand: Option<String>,

        /// Color preset id within the brand (default: the brand's last preset)
        #[arg(short, long)]
        preset: Option<String>,

        /// Enable Floyd-Steinberg dithering
        #[arg(long)]
        dither: bool,

        /// Remove the border-connected background
        #[arg(long)]
        remove_background: bool,

        /// Background color tolerance (Euclidean RGB distance)
        #[arg(long, value_parser = parse_tolerance)]
        tolerance: Option<f32>,

        /// Alpha below this is treated as transparent
        #[arg(long)]
        alpha_threshold: Option<u8>,

        /// Chart format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the chart to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List configured bead brands and presets
    Palettes,
    /// Extract the embedded config.yaml for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).without_time())
        .init();

    match cli.command {
        Some(Commands::Convert {
            input,
            width,
            height,
            size,
            free_aspect,
            brand,
            preset,
            dither,
            remove_background,
            tolerance,
            alpha_threshold,
            format,
            output,
        }) => {
            let config = AppConfig::load_from_assets(&AssetLoader::from_env());
            let defaults = &config.defaults;

            let size = match (size, width, height) {
                (Some(size), _, _) => GridSize::Fit {
                    size,
                    lock_aspect: !free_aspect,
                },
                (None, Some(width), Some(height)) => GridSize::Exact { width, height },
                _ => GridSize::Exact {
                    width: defaults.width,
                    height: defaults.height,
                },
            };

            let options = ConvertOptions {
                size,
                brand,
                preset,
                tolerance: tolerance.unwrap_or(defaults.tolerance),
                alpha_threshold: alpha_threshold.unwrap_or(defaults.alpha_threshold),
                ..ConvertOptions::from_defaults(defaults)
            }
            .enable(dither, remove_background);

            run_convert_command(&config, &input, &options, format, output)
        }
        Some(Commands::Palettes) => run_palettes_command(),
        Some(Commands::Init { force }) => run_init_command(force),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Parse `--tolerance`, rejecting negative and non-finite values
fn parse_tolerance(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e| format!("{e}"))?;
    check_tolerance(value).map_err(|e| e.to_string())
}

/// Convert an image and print or write the chart
fn run_convert_command(
    config: &AppConfig,
    input: &Path,
    options: &ConvertOptions,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let grid = convert_file(config, input, options)?;
    let chart = render(&grid, format)?;

    match output {
        Some(path) => {
            std::fs::write(&path, chart)?;
            tracing::info!(path = %path.display(), "Chart written");
            println!("Chart written to {}", path.display());
        }
        None => print!("{chart}"),
    }

    Ok(())
}

/// List brands and presets with color counts
fn run_palettes_command() -> anyhow::Result<()> {
    let config = AppConfig::load_from_assets(&AssetLoader::from_env());

    if config.brands.is_empty() {
        println!("No bead brands configured.");
        return Ok(());
    }

    for (i, brand) in config.brands.iter().enumerate() {
        let marker = if i == 0 { " (default)" } else { "" };
        println!("{} - {}{marker}", brand.id, brand.name);
        println!("  {} colors", brand.colors.len());
        if let Some(ref description) = brand.description {
            println!("  {description}");
        }

        let last = brand.presets.len().saturating_sub(1);
        for (j, preset) in brand.presets.iter().enumerate() {
            let count = brand.preset_colors(Some(preset)).len();
            let marker = if j == last { " (default)" } else { "" };
            print!("  {:<12} {:>4} colors  {}{marker}", preset.id, count, preset.name);
            match preset.description {
                Some(ref d) => println!(" - {d}"),
                None => println!(),
            }
        }
        println!();
    }

    Ok(())
}

/// Extract the embedded config
fn run_init_command(force: bool) -> anyhow::Result<()> {
    let loader = AssetLoader::from_env();
    let report = loader.init(force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let loader = AssetLoader::from_env();
    let rust_log = std::env::var("RUST_LOG").ok();
    let default_log = format!("{DEFAULT_LOG_FILTER} (default)");

    // Header
    println!("Beadgrid v{VERSION}");
    println!("Turn pictures into fuse-bead charts\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        loader
            .config_file()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!(
        "  RUST_LOG    = {}",
        rust_log.as_deref().unwrap_or(&default_log)
    );

    // Config source section
    let source = match loader.config_source() {
        ConfigSource::Embedded => "embedded".to_string(),
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::Missing(_) => "embedded (file not found)".to_string(),
    };
    println!("\nConfig:  {source}");
    println!("Embedded: {}", AssetLoader::list_embedded().join(", "));

    let config = AppConfig::load_from_assets(&loader);
    let defaults = &config.defaults;
    println!("Brands:  {}", config.brands.len());
    println!(
        "Defaults: {}x{} beads, dither {}, remove background {}, tolerance {}, alpha threshold {}",
        defaults.width,
        defaults.height,
        if defaults.dither { "on" } else { "off" },
        if defaults.remove_background { "on" } else { "off" },
        defaults.tolerance,
        defaults.alpha_threshold,
    );

    println!("\nRun 'beadgrid --help' for available commands.");
}
