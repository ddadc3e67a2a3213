//! Grid PDF generation pipeline.
//!
//! Layout and rendering are CPU-bound and run on a blocking task; the
//! interactive surface (or the CLI) observes progress through a channel
//! instead of sharing any mutable state with the worker.

use std::path::Path;

use photogrid_layout::{SkippedImage, paginate, paginate_lenient, render_sequence_with};
use tokio::sync::mpsc;

use crate::meta::LoadedImages;
use crate::options::{DimensionPolicy, GridOptions};
use crate::pdf::PdfSink;
use crate::types::{PdfError, Result};

/// Discrete progress event: images drawn so far out of the total.
/// The final event of a successful run is exactly `(total, total)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

/// Summary of a finished generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Images placed and drawn
    pub images: usize,
    /// Output pages created
    pub pages: usize,
    /// Images excluded under the skip policy
    pub skipped: Vec<SkippedImage>,
}

/// Generate the grid PDF and write it to `output_path`.
pub async fn generate_pdf(
    images: &LoadedImages,
    options: &GridOptions,
    output_path: impl AsRef<Path>,
    progress: Option<mpsc::UnboundedSender<Progress>>,
) -> Result<Summary> {
    let images = images.clone();
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    let (bytes, summary) =
        tokio::task::spawn_blocking(move || generate_pdf_bytes(&images, &options, progress))
            .await??;

    tokio::fs::write(&output_path, bytes).await?;
    log::info!(
        "wrote {} page(s) to {}",
        summary.pages,
        output_path.display()
    );

    Ok(summary)
}

/// Synchronous core of the pipeline: paginate, render, serialize.
pub fn generate_pdf_bytes(
    images: &LoadedImages,
    options: &GridOptions,
    progress: Option<mpsc::UnboundedSender<Progress>>,
) -> Result<(Vec<u8>, Summary)> {
    let spec = options.to_spec();

    let (placements, skipped) = match options.dimension_policy {
        DimensionPolicy::Strict => (paginate(images.working_set.items(), &spec)?, Vec::new()),
        DimensionPolicy::Skip => {
            let pagination = paginate_lenient(images.working_set.items(), &spec)?;
            (pagination.placements, pagination.skipped)
        }
    };

    if placements.is_empty() {
        return Err(PdfError::NoImages);
    }

    let pages = placements.last().map(|p| p.page_index + 1).unwrap_or(0);
    log::debug!(
        "placing {} images on {} page(s), {} skipped",
        placements.len(),
        pages,
        skipped.len()
    );

    let mut sink = PdfSink::new("Image Grid", &images.paths, options);
    render_sequence_with(&placements, &mut sink, |completed, total| {
        if let Some(tx) = &progress {
            let _ = tx.send(Progress { completed, total });
        }
    })?;

    let summary = Summary {
        images: placements.len(),
        pages,
        skipped,
    };

    Ok((sink.finish(), summary))
}
