use photogrid_layout::{WorkingSet, paginate, paginate_lenient};

use crate::options::{DimensionPolicy, GridOptions};
use crate::types::Result;

/// Placement statistics for a working set, computed without rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStatistics {
    /// Images that will be placed
    pub placed_images: usize,
    /// Output page count
    pub output_pages: usize,
    /// Grid cells per page
    pub images_per_page: usize,
    /// Images excluded under the skip policy
    pub skipped_images: usize,
}

/// Calculate statistics for a grid run.
///
/// Runs the same pagination as generation, so a strict-policy run with a
/// malformed image fails here the same way it would fail there.
pub fn calculate_statistics(set: &WorkingSet, options: &GridOptions) -> Result<GridStatistics> {
    let spec = options.to_spec();

    let (placed_images, output_pages, skipped_images) = match options.dimension_policy {
        DimensionPolicy::Strict => {
            let placements = paginate(set.items(), &spec)?;
            let pages = placements.last().map(|p| p.page_index + 1).unwrap_or(0);
            (placements.len(), pages, 0)
        }
        DimensionPolicy::Skip => {
            let pagination = paginate_lenient(set.items(), &spec)?;
            (
                pagination.placements.len(),
                pagination.page_count(),
                pagination.skipped.len(),
            )
        }
    };

    Ok(GridStatistics {
        placed_images,
        output_pages,
        images_per_page: spec.images_per_page(),
        skipped_images,
    })
}
