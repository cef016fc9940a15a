//! Assertion helpers for tests.

use bead_quant::{Cell, Grid};
use pretty_assertions::assert_eq;

/// Assert grid dimensions
pub fn assert_grid_size(grid: &Grid, width: usize, height: usize) {
    assert_eq!(
        (grid.width(), grid.height()),
        (width, height),
        "Unexpected grid size"
    );
    assert_eq!(grid.cells().len(), width * height);
}

/// Assert the grid rows as color ids, `.` for empty cells
pub fn assert_grid_ids(grid: &Grid, expected: &[&str]) {
    let rows: Vec<String> = grid
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Empty => ".".to_string(),
                    Cell::Assigned { index } => grid.palette().get(*index).id.clone(),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    assert_eq!(rows, expected);
}

/// Assert every cell of the outermost ring is empty
pub fn assert_border_empty(grid: &Grid) {
    let (w, h) = (grid.width(), grid.height());
    for x in 0..w {
        assert_eq!(grid.cell(x, 0), Cell::Empty, "top border at x={x}");
        assert_eq!(grid.cell(x, h - 1), Cell::Empty, "bottom border at x={x}");
    }
    for y in 0..h {
        assert_eq!(grid.cell(0, y), Cell::Empty, "left border at y={y}");
        assert_eq!(grid.cell(w - 1, y), Cell::Empty, "right border at y={y}");
    }
}
