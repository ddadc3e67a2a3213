//! Image metadata probing and working-set ingestion.
//!
//! Probing reads only the image header for dimensions and the EXIF block
//! for the raw orientation tag; no pixel data is decoded here and no file
//! handle outlives the call.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use photogrid_layout::{ImageItem, Rotation, SourceRef, WorkingSet};

use crate::types::Result;

/// Ingestion ordering for a set of image paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Sort by file modification time, oldest first.
    #[default]
    ModifiedTime,
    /// Sort by file name.
    Name,
    /// Keep the order given.
    Unsorted,
}

/// An ordered working set together with the paths backing it.
/// Each item's `SourceRef::index` points into `paths`.
#[derive(Debug, Clone, Default)]
pub struct LoadedImages {
    pub working_set: WorkingSet,
    pub paths: Vec<PathBuf>,
}

/// Read the raw EXIF orientation tag. Returns `None` when the file has no
/// readable EXIF block or no orientation field; those are not errors.
fn read_orientation_tag(path: &Path) -> Option<u32> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader).ok()?;
    let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
    field.value.get_uint(0)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Probe one image: header-only dimension read plus orientation resolution.
pub fn probe(index: usize, path: &Path) -> Result<ImageItem> {
    let (width_px, height_px) = image::image_dimensions(path)?;
    let rotation = Rotation::from_exif_tag(read_orientation_tag(path));

    Ok(ImageItem::new(
        SourceRef::new(index, display_name(path)),
        width_px,
        height_px,
        rotation,
    ))
}

/// Load a working set from image paths, applying the ingestion sort order.
pub async fn load_images(paths: Vec<PathBuf>, order: SortOrder) -> Result<LoadedImages> {
    tokio::task::spawn_blocking(move || load_images_sync(paths, order)).await?
}

fn load_images_sync(mut paths: Vec<PathBuf>, order: SortOrder) -> Result<LoadedImages> {
    match order {
        SortOrder::ModifiedTime => {
            paths.sort_by_key(|path| {
                std::fs::metadata(path)
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
        SortOrder::Name => {
            paths.sort_by_key(|path| path.file_name().map(|n| n.to_owned()));
        }
        SortOrder::Unsorted => {}
    }

    let mut working_set = WorkingSet::new();
    for (index, path) in paths.iter().enumerate() {
        working_set.push(probe(index, path)?);
    }

    log::debug!("loaded {} images", working_set.len());

    Ok(LoadedImages { working_set, paths })
}
