//! Orientation correction from image metadata.

/// Axis-aligned rotation correction applied when drawing an image,
/// in counter-clockwise degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    #[default]
    None,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Rotation {
    /// Resolve a raw EXIF orientation tag into a rotation correction.
    ///
    /// Only the plain-rotation codes are honored. Mirrored codes (2, 4,
    /// 5, 7), unrecognized values, and absent or unreadable metadata all
    /// resolve to no rotation; that default is deliberate, not an error.
    pub fn from_exif_tag(tag: Option<u32>) -> Self {
        match tag {
            Some(3) => Rotation::Rotate180,
            Some(6) => Rotation::Rotate270,
            Some(8) => Rotation::Rotate90,
            _ => Rotation::None,
        }
    }

    pub fn degrees(self) -> i32 {
        match self {
            Rotation::None => 0,
            Rotation::Rotate90 => 90,
            Rotation::Rotate180 => 180,
            Rotation::Rotate270 => 270,
        }
    }

    /// Whether drawing with this rotation swaps width and height.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Rotate90 | Rotation::Rotate270)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_codes() {
        assert_eq!(Rotation::from_exif_tag(Some(3)), Rotation::Rotate180);
        assert_eq!(Rotation::from_exif_tag(Some(6)), Rotation::Rotate270);
        assert_eq!(Rotation::from_exif_tag(Some(8)), Rotation::Rotate90);
    }

    #[test]
    fn test_unrecognized_codes_default_to_none() {
        // Mirrored codes are treated as unrecognized
        for tag in [1, 2, 4, 5, 7, 9, 99, 0] {
            assert_eq!(Rotation::from_exif_tag(Some(tag)), Rotation::None);
        }
        assert_eq!(Rotation::from_exif_tag(None), Rotation::None);
    }

    #[test]
    fn test_axis_swap() {
        assert!(Rotation::Rotate90.swaps_axes());
        assert!(Rotation::Rotate270.swaps_axes());
        assert!(!Rotation::None.swaps_axes());
        assert!(!Rotation::Rotate180.swaps_axes());
    }

    #[test]
    fn test_degrees() {
        assert_eq!(Rotation::from_exif_tag(Some(6)).degrees(), 270);
        assert_eq!(Rotation::from_exif_tag(Some(99)).degrees(), 0);
    }
}
