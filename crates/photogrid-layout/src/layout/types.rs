//! Layout data types
//!
//! These types represent the computed geometry between the working set
//! and the rendering backend.

use crate::orientation::Rotation;
use crate::types::SourceRef;

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: u32,
    /// Column index (0 = leftmost column)
    pub col: u32,
}

impl GridPosition {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// A rectangular area in page units, origin at the bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Final placement of one image on an output page
///
/// This is the result of all layout calculations and contains everything
/// a rendering backend needs to draw the image. The rectangle preserves
/// the image's effective (post-rotation) aspect ratio and lies fully
/// inside its cell; the rotation is applied about the rectangle's center.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub source: SourceRef,
    /// Output page index (0-based, non-decreasing across the sequence)
    pub page_index: usize,
    /// Grid cell this image occupies
    pub cell: GridPosition,
    /// Position and size of the drawn image in page units
    pub rect: Rect,
    /// Rotation carried from the source image
    pub rotation: Rotation,
}

/// An image excluded from a lenient pagination run because its intrinsic
/// dimensions were not positive.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedImage {
    /// Index in the input sequence
    pub index: usize,
    pub source: SourceRef,
    pub width_px: u32,
    pub height_px: u32,
}

/// Result of a lenient pagination run: placements for the well-formed
/// images plus a report of the skipped ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    pub placements: Vec<Placement>,
    pub skipped: Vec<SkippedImage>,
}

impl Pagination {
    /// Number of distinct output pages.
    pub fn page_count(&self) -> usize {
        self.placements
            .last()
            .map(|p| p.page_index + 1)
            .unwrap_or(0)
    }
}
