//! Aspect-preserving placement within cells
//!
//! This module computes the final rectangle for each image and paginates
//! the ordered working set across the grid:
//! - Post-rotation dimension swap for the aspect-ratio fit
//! - Scale to touch at least one cell edge without exceeding either
//! - Centering on the non-constraining axis
//! - Row-major fill, page index from the sequence position

use crate::types::{GridError, GridSpec, ImageItem, Result};

use super::{PageGrid, Pagination, Placement, Rect, SkippedImage};

/// Fit an image into a cell.
///
/// The aspect ratio is the effective (post-rotation) one; the scaled
/// rectangle touches at least one cell edge, never exceeds either cell
/// dimension, and is centered on the remaining slack.
pub fn fit_in_cell(item: &ImageItem, cell: &Rect) -> Rect {
    let (effective_width, effective_height) = item.effective_dimensions();
    let aspect = effective_width as f32 / effective_height as f32;

    let (scaled_width, scaled_height) = if aspect > cell.width / cell.height {
        // Relatively wider than the cell: width-constrained
        (cell.width, cell.width / aspect)
    } else {
        // Height-constrained
        (cell.height * aspect, cell.height)
    };

    Rect::new(
        cell.x + (cell.width - scaled_width) / 2.0,
        cell.y + (cell.height - scaled_height) / 2.0,
        scaled_width,
        scaled_height,
    )
}

fn place_at(grid: &PageGrid, sequence_index: usize, item: &ImageItem) -> Placement {
    let per_page = grid.images_per_page();
    let cell = grid.position(sequence_index % per_page);

    Placement {
        source: item.source.clone(),
        page_index: sequence_index / per_page,
        cell,
        rect: fit_in_cell(item, &grid.cell_bounds(cell)),
        rotation: item.rotation,
    }
}

/// Compute placements for every image in input order, strict mode: the
/// first item with non-positive dimensions aborts the whole run.
///
/// An empty input yields an empty output (zero pages). The computation is
/// pure; identical inputs produce identical placements.
pub fn paginate(items: &[ImageItem], spec: &GridSpec) -> Result<Vec<Placement>> {
    let grid = PageGrid::new(spec)?;

    let mut placements = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if !item.has_valid_dimensions() {
            return Err(GridError::MalformedDimensions {
                index,
                name: item.source.name.clone(),
                width: item.width_px,
                height: item.height_px,
            });
        }
        placements.push(place_at(&grid, placements.len(), item));
    }

    Ok(placements)
}

/// Compute placements, reporting malformed items instead of aborting.
///
/// Well-formed images close ranks: the grid is filled by the retained
/// sequence, so a skipped item never leaves a blank cell. The skipped
/// report names every excluded item; nothing is dropped silently.
pub fn paginate_lenient(items: &[ImageItem], spec: &GridSpec) -> Result<Pagination> {
    let grid = PageGrid::new(spec)?;

    let mut placements = Vec::with_capacity(items.len());
    let mut skipped = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if !item.has_valid_dimensions() {
            skipped.push(SkippedImage {
                index,
                source: item.source.clone(),
                width_px: item.width_px,
                height_px: item.height_px,
            });
            continue;
        }
        placements.push(place_at(&grid, placements.len(), item));
    }

    Ok(Pagination {
        placements,
        skipped,
    })
}
