use thiserror::Error;

use crate::orientation::Rotation;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid grid spec: {0}")]
    InvalidSpec(String),
    #[error("Image {index} ({name}) has malformed dimensions {width}x{height}")]
    MalformedDimensions {
        index: usize,
        name: String,
        width: u32,
        height: u32,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;

/// Opaque handle naming an image source.
///
/// The layout core never interprets it; a rendering backend uses `index`
/// to find the actual pixel data and `name` for labels and error messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceRef {
    /// Stable index into the caller's image store.
    pub index: usize,
    /// Display name, typically the file name.
    pub name: String,
}

impl SourceRef {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

/// One picture queued for layout.
///
/// Dimensions are intrinsic (as stored, pre-rotation). Immutable once
/// created; remove it from the working set instead of mutating it.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageItem {
    pub source: SourceRef,
    pub width_px: u32,
    pub height_px: u32,
    pub rotation: Rotation,
}

impl ImageItem {
    pub fn new(source: SourceRef, width_px: u32, height_px: u32, rotation: Rotation) -> Self {
        Self {
            source,
            width_px,
            height_px,
            rotation,
        }
    }

    /// Dimensions after accounting for the 90/270 degree rotation swap.
    /// These drive the aspect-ratio fit, not the drawn rectangle itself.
    pub fn effective_dimensions(&self) -> (u32, u32) {
        if self.rotation.swaps_axes() {
            (self.height_px, self.width_px)
        } else {
            (self.width_px, self.height_px)
        }
    }

    pub fn has_valid_dimensions(&self) -> bool {
        self.width_px > 0 && self.height_px > 0
    }
}

/// The ordered collection of images queued for layout.
///
/// Order is insertion order and is the sole determinant of grid placement;
/// callers that want a different order sort before pushing.
#[derive(Debug, Clone, Default)]
pub struct WorkingSet {
    items: Vec<ImageItem>,
}

impl WorkingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ImageItem) {
        self.items.push(item);
    }

    /// Remove the item at `index`, shifting later items forward.
    pub fn remove(&mut self, index: usize) -> Option<ImageItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageItem> {
        self.items.iter()
    }
}

impl FromIterator<ImageItem> for WorkingSet {
    fn from_iter<T: IntoIterator<Item = ImageItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Grid configuration: shape, page size and margin, all in page units
/// (points for PDF output).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    pub columns: u32,
    pub rows: u32,
    pub page_width: f32,
    pub page_height: f32,
    /// Uniform margin on all four page edges.
    pub margin: f32,
}

impl Default for GridSpec {
    fn default() -> Self {
        // A4 portrait in points, 2x2 grid, 50pt margin
        Self {
            columns: 2,
            rows: 2,
            page_width: 595.0,
            page_height: 842.0,
            margin: 50.0,
        }
    }
}

impl GridSpec {
    pub fn images_per_page(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    /// Validate the spec. Fails before any placement is computed.
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(GridError::InvalidSpec(
                "grid needs at least one column and one row".to_string(),
            ));
        }
        if self.page_width <= 0.0 || self.page_height <= 0.0 {
            return Err(GridError::InvalidSpec(format!(
                "page size {}x{} is not positive",
                self.page_width, self.page_height
            )));
        }
        if self.margin < 0.0 {
            return Err(GridError::InvalidSpec(format!(
                "margin {} is negative",
                self.margin
            )));
        }
        if self.margin * 2.0 >= self.page_width || self.margin * 2.0 >= self.page_height {
            return Err(GridError::InvalidSpec(format!(
                "margin {} leaves no usable area on a {}x{} page",
                self.margin, self.page_width, self.page_height
            )));
        }
        Ok(())
    }
}
