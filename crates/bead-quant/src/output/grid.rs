//! Bead grid: the result of a conversion.
//!
//! [`Grid`] wraps one [`Cell`] per pixel with dimension metadata and an owned
//! [`Palette`], so cell indices can always be resolved to bead colors without
//! the caller keeping the palette around.

use crate::palette::{BeadColor, Palette};

/// One position on the bead board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// No bead: the pixel was background or transparent.
    Empty,
    /// A bead of the palette color at `index`.
    Assigned {
        /// Position in the grid's palette.
        index: usize,
    },
}

impl Cell {
    /// The palette index, if a bead is placed here.
    #[inline]
    pub fn index(self) -> Option<usize> {
        match self {
            Cell::Empty => None,
            Cell::Assigned { index } => Some(index),
        }
    }

    /// True for [`Cell::Empty`].
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// The canonical output of quantization.
///
/// Stores cells in row-major order, `width * height` of them, together with
/// the palette they index into. Every `Assigned` index is in
/// `0..palette.len()`.
///
/// # Example
///
/// ```
/// use bead_quant::{Cell, Grid, Palette};
///
/// let palette = Palette::from_hex(&[("W", "#FFFFFF"), ("K", "#000000")]).unwrap();
/// let cells = vec![
///     Cell::Assigned { index: 1 },
///     Cell::Empty,
///     Cell::Assigned { index: 0 },
///     Cell::Assigned { index: 1 },
/// ];
/// let grid = Grid::new(cells, 2, 2, palette);
///
/// assert_eq!(grid.color_at(0, 0).map(|c| c.id.as_str()), Some("K"));
/// assert_eq!(grid.color_at(1, 0), None);
/// assert_eq!(grid.assigned_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl Grid {
    /// Create a grid from row-major cells.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `cells.len() == width * height`.
    pub fn new(cells: Vec<Cell>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert_eq!(
            cells.len(),
            width * height,
            "cells length ({}) must match width * height ({}x{})",
            cells.len(),
            width,
            height,
        );
        Self {
            cells,
            width,
            height,
            palette,
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The palette the cells index into.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside grid");
        self.cells[y * self.width + x]
    }

    /// Bead color at `(x, y)`, or `None` for an empty cell.
    pub fn color_at(&self, x: usize, y: usize) -> Option<&BeadColor> {
        self.cell(x, y).index().map(|i| self.palette.get(i))
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Number of cells that hold a bead.
    pub fn assigned_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Bead totals per color, most used first.
    ///
    /// Colors that were never assigned are left out. Equal counts keep
    /// palette order.
    pub fn color_counts(&self) -> Vec<(&BeadColor, usize)> {
        let mut totals = vec![0usize; self.palette.len()];
        for index in self.cells.iter().filter_map(|c| c.index()) {
            totals[index] += 1;
        }

        let mut counts: Vec<(usize, usize)> = totals
            .into_iter()
            .enumerate()
            .filter(|&(_, n)| n > 0)
            .collect();
        // Stable sort keeps palette order among ties
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        counts
            .into_iter()
            .map(|(i, n)| (self.palette.get(i), n))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn palette() -> Palette {
        Palette::from_hex(&[("W", "#FFFFFF"), ("R", "#FF0000"), ("K", "#000000")]).unwrap()
    }

    fn a(index: usize) -> Cell {
        Cell::Assigned { index }
    }

    #[test]
    fn test_new_stores_fields() {
        let grid = Grid::new(vec![a(0), a(1), Cell::Empty, a(2), a(2), a(0)], 3, 2, palette());
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cells().len(), 6);
        assert_eq!(grid.palette().len(), 3);
    }

    #[test]
    fn test_cell_lookup_is_row_major() {
        let grid = Grid::new(vec![a(0), a(1), Cell::Empty, a(2), a(2), a(0)], 3, 2, palette());
        assert_eq!(grid.cell(2, 0), Cell::Empty);
        assert_eq!(grid.cell(0, 1), a(2));
        assert_eq!(grid.color_at(1, 0).map(|c| c.id.as_str()), Some("R"));
        assert!(grid.color_at(2, 0).is_none());
    }

    #[test]
    #[should_panic]
    fn test_cell_out_of_bounds_panics() {
        let grid = Grid::new(vec![a(0); 4], 2, 2, palette());
        let _ = grid.cell(2, 0);
    }

    #[test]
    fn test_rows() {
        let grid = Grid::new(vec![a(0), a(1), Cell::Empty, a(2)], 2, 2, palette());
        let rows: Vec<&[Cell]> = grid.rows().collect();
        assert_eq!(rows, vec![&[a(0), a(1)][..], &[Cell::Empty, a(2)][..]]);
    }

    #[test]
    fn test_color_counts_sorted_by_count_then_palette_order() {
        let cells = vec![a(2), a(1), a(2), Cell::Empty, a(1), a(0), a(2)];
        let grid = Grid::new(cells, 7, 1, palette());

        let counts: Vec<(&str, usize)> = grid
            .color_counts()
            .into_iter()
            .map(|(c, n)| (c.id.as_str(), n))
            .collect();
        assert_eq!(counts, vec![("K", 3), ("R", 2), ("W", 1)]);
        assert_eq!(grid.assigned_count(), 6);
    }

    #[test]
    fn test_color_counts_tie_keeps_palette_order() {
        let grid = Grid::new(vec![a(2), a(0)], 2, 1, palette());
        let ids: Vec<&str> = grid.color_counts().iter().map(|(c, _)| c.id.as_str()).collect();
        assert_eq!(ids, vec!["W", "K"]);
    }

    #[test]
    fn test_all_empty_grid() {
        let grid = Grid::new(vec![Cell::Empty; 4], 2, 2, palette());
        assert_eq!(grid.assigned_count(), 0);
        assert!(grid.color_counts().is_empty());
    }
}
