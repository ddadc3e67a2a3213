//! Page grid geometry
//!
//! This module derives concrete cell geometry from a grid spec: the
//! usable area inside the margins, the uniform cell size, and the bounds
//! of each cell. The grid shape is fixed per run; all cells on all pages
//! share the same size.

use crate::types::{GridSpec, Result};

use super::{GridPosition, Rect};

/// Concrete cell geometry derived from a validated `GridSpec`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGrid {
    pub columns: u32,
    pub rows: u32,
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    /// Width of each cell in page units
    pub cell_width: f32,
    /// Height of each cell in page units
    pub cell_height: f32,
}

impl PageGrid {
    /// Validate the spec and compute the uniform cell size.
    ///
    /// Fails before any placement is computed when the spec is unusable.
    pub fn new(spec: &GridSpec) -> Result<Self> {
        spec.validate()?;

        let usable_width = spec.page_width - 2.0 * spec.margin;
        let usable_height = spec.page_height - 2.0 * spec.margin;

        Ok(Self {
            columns: spec.columns,
            rows: spec.rows,
            page_width: spec.page_width,
            page_height: spec.page_height,
            margin: spec.margin,
            cell_width: usable_width / spec.columns as f32,
            cell_height: usable_height / spec.rows as f32,
        })
    }

    /// Number of cells on one page
    pub fn images_per_page(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    /// Grid position for the image at `index_on_page`, filling row-major.
    pub fn position(&self, index_on_page: usize) -> GridPosition {
        GridPosition::new(
            (index_on_page / self.columns as usize) as u32,
            (index_on_page % self.columns as usize) as u32,
        )
    }

    /// Bounds of the cell at `pos`.
    ///
    /// Row 0 is the topmost row while y grows upward, so the row index is
    /// inverted against the top of the usable area.
    pub fn cell_bounds(&self, pos: GridPosition) -> Rect {
        let cell_x = self.margin + pos.col as f32 * self.cell_width;
        let cell_y = self.page_height - self.margin - (pos.row + 1) as f32 * self.cell_height;

        Rect::new(cell_x, cell_y, self.cell_width, self.cell_height)
    }

    /// Number of output pages needed for `count` images; zero images
    /// means zero pages.
    pub fn page_count(&self, count: usize) -> usize {
        count.div_ceil(self.images_per_page())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a4_spec() -> GridSpec {
        GridSpec {
            columns: 2,
            rows: 2,
            page_width: 595.0,
            page_height: 842.0,
            margin: 50.0,
        }
    }

    #[test]
    fn test_uniform_cell_size() {
        let grid = PageGrid::new(&a4_spec()).unwrap();

        assert_eq!(grid.cell_width, (595.0 - 100.0) / 2.0);
        assert_eq!(grid.cell_height, (842.0 - 100.0) / 2.0);
    }

    #[test]
    fn test_row_major_positions() {
        let grid = PageGrid::new(&GridSpec {
            columns: 3,
            rows: 2,
            ..a4_spec()
        })
        .unwrap();

        assert_eq!(grid.position(0), GridPosition::new(0, 0));
        assert_eq!(grid.position(2), GridPosition::new(0, 2));
        assert_eq!(grid.position(3), GridPosition::new(1, 0));
        assert_eq!(grid.position(5), GridPosition::new(1, 2));
    }

    #[test]
    fn test_cell_bounds_row_zero_on_top() {
        let grid = PageGrid::new(&a4_spec()).unwrap();

        // Top-left cell
        let top_left = grid.cell_bounds(GridPosition::new(0, 0));
        assert_eq!(top_left.x, 50.0);
        assert_eq!(top_left.y, 842.0 - 50.0 - grid.cell_height);

        // Bottom-right cell sits on the bottom margin
        let bottom_right = grid.cell_bounds(GridPosition::new(1, 1));
        assert_eq!(bottom_right.x, 50.0 + grid.cell_width);
        assert!((bottom_right.y - 50.0).abs() < 1e-4);

        // Cells tile the usable area exactly
        assert!((top_left.y - bottom_right.top()).abs() < 1e-4);
    }

    #[test]
    fn test_page_count() {
        let grid = PageGrid::new(&a4_spec()).unwrap();

        assert_eq!(grid.page_count(0), 0);
        assert_eq!(grid.page_count(1), 1);
        assert_eq!(grid.page_count(4), 1);
        assert_eq!(grid.page_count(5), 2);
        assert_eq!(grid.page_count(9), 3);
    }

    #[test]
    fn test_invalid_spec_rejected() {
        let spec = GridSpec {
            margin: 500.0,
            ..a4_spec()
        };
        assert!(PageGrid::new(&spec).is_err());
    }
}
