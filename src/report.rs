//! Bead chart output: a plain-text grid or JSON.

use std::fmt::Write as _;

use bead_quant::{Cell, Grid};
use serde::Serialize;

use crate::error::ConvertError;

/// Marker for cells without a bead
const EMPTY_MARK: &str = ".";

/// Chart output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Grid of color ids followed by a bill of materials
    #[default]
    Text,
    /// Machine readable chart
    Json,
}

/// Render `grid` in the requested format.
pub fn render(grid: &Grid, format: OutputFormat) -> Result<String, ConvertError> {
    match format {
        OutputFormat::Text => Ok(render_text(grid)),
        OutputFormat::Json => render_json(grid),
    }
}

/// Text chart: one line per row with ids padded to equal width, then the
/// bead count per color.
pub fn render_text(grid: &Grid) -> String {
    let id_width = grid
        .palette()
        .iter()
        .map(|c| c.id.chars().count())
        .max()
        .unwrap_or(1)
        .max(EMPTY_MARK.len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}x{} beads, {} placed",
        grid.width(),
        grid.height(),
        grid.assigned_count()
    );
    out.push('\n');

    for row in grid.rows() {
        let line = row
            .iter()
            .map(|cell| {
                let label = match cell {
                    Cell::Empty => EMPTY_MARK,
                    Cell::Assigned { index } => grid.palette().get(*index).id.as_str(),
                };
                format!("{label:<id_width$}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(line.trim_end());
        out.push('\n');
    }

    let counts = grid.color_counts();
    if !counts.is_empty() {
        let name_width = counts
            .iter()
            .map(|(c, _)| c.name.chars().count())
            .max()
            .unwrap_or(0);
        out.push_str("\nBill of materials:\n");
        for (color, count) in counts {
            let _ = writeln!(
                out,
                "  {:<id_width$}  {:<name_width$}  {}  {count:>5}",
                color.id,
                color.name,
                color.rgb.to_hex(),
            );
        }
    }

    out
}

#[derive(Serialize)]
struct ChartJson<'a> {
    width: usize,
    height: usize,
    palette: Vec<ColorJson<'a>>,
    /// Rows of color ids, `null` for empty cells
    cells: Vec<Vec<Option<&'a str>>>,
    counts: Vec<CountJson<'a>>,
}

#[derive(Serialize)]
struct ColorJson<'a> {
    id: &'a str,
    name: &'a str,
    hex: String,
}

#[derive(Serialize)]
struct CountJson<'a> {
    id: &'a str,
    name: &'a str,
    hex: String,
    count: usize,
}

/// JSON chart with the palette, rows of cells and per-color counts.
pub fn render_json(grid: &Grid) -> Result<String, ConvertError> {
    let palette = grid.palette();
    let chart = ChartJson {
        width: grid.width(),
        height: grid.height(),
        palette: palette
            .iter()
            .map(|c| ColorJson {
                id: &c.id,
                name: &c.name,
                hex: c.rgb.to_hex(),
            })
            .collect(),
        cells: grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.index().map(|i| palette.get(i).id.as_str()))
                    .collect()
            })
            .collect(),
        counts: grid
            .color_counts()
            .into_iter()
            .map(|(c, count)| CountJson {
                id: &c.id,
                name: &c.name,
                hex: c.rgb.to_hex(),
                count,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&chart)?)
}
