//! Layout calculation modules for grid pagination
//!
//! This module handles all the geometric calculations for placing an
//! ordered image sequence on a fixed grid:
//! - Grid geometry (usable area, uniform cell size, cell bounds)
//! - Aspect-preserving placement within cells
//! - Pagination (which page and cell each image occupies)

mod grid;
mod placement;
mod types;

pub use grid::*;
pub use placement::*;
pub use types::*;
