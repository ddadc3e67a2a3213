use photogrid_layout::GridSpec;

#[cfg(feature = "serde")]
use crate::types::{PdfError, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_pt: f32, height_pt: f32 },
}

impl PaperSize {
    /// Base dimensions in points (always portrait for standard sizes)
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (841.89, 1190.55),
            PaperSize::A4 => (595.28, 841.89),
            PaperSize::A5 => (419.53, 595.28),
            PaperSize::Letter => (612.0, 792.0),
            PaperSize::Legal => (612.0, 1008.0),
            PaperSize::Custom {
                width_pt,
                height_pt,
            } => (width_pt, height_pt),
        }
    }

    /// Dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: PageOrientation) -> (f32, f32) {
        let (w, h) = self.dimensions_pt();
        match orientation {
            PageOrientation::Portrait => (w, h),
            PageOrientation::Landscape => (h, w),
        }
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PageOrientation {
    #[default]
    Portrait,
    Landscape,
}

/// What to do with images whose intrinsic dimensions are not positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DimensionPolicy {
    /// Abort the whole run on the first malformed image.
    #[default]
    Strict,
    /// Skip malformed images and report them in the summary.
    Skip,
}

/// Grid generation configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridOptions {
    pub columns: u32,
    pub rows: u32,
    pub paper_size: PaperSize,
    pub orientation: PageOrientation,
    pub margin_pt: f32,
    /// Draw the file name under each image
    pub label_images: bool,
    pub dimension_policy: DimensionPolicy,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            columns: 2,
            rows: 2,
            paper_size: PaperSize::A4,
            orientation: PageOrientation::Portrait,
            margin_pt: 50.0,
            label_images: false,
            dimension_policy: DimensionPolicy::Strict,
        }
    }
}

impl GridOptions {
    /// Build the layout spec for these options. The spec is validated by
    /// the paginator before any placement is computed.
    pub fn to_spec(&self) -> GridSpec {
        let (page_width, page_height) = self
            .paper_size
            .dimensions_with_orientation(self.orientation);
        GridSpec {
            columns: self.columns,
            rows: self.rows,
            page_width,
            page_height,
            margin: self.margin_pt,
        }
    }

    /// Load options from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| PdfError::Config(format!("Failed to parse config: {e}")))?;
        Ok(options)
    }

    /// Save options to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PdfError::Config(format!("Failed to serialize config: {e}")))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_swaps_page_dimensions() {
        let (w, h) = PaperSize::A4.dimensions_with_orientation(PageOrientation::Landscape);
        assert!(w > h);
        assert_eq!((h, w), PaperSize::A4.dimensions_pt());
    }

    #[test]
    fn test_default_spec_matches_a4_two_by_two() {
        let spec = GridOptions::default().to_spec();
        assert_eq!(spec.columns, 2);
        assert_eq!(spec.rows, 2);
        assert_eq!(spec.margin, 50.0);
        assert!(spec.validate().is_ok());
    }
}
