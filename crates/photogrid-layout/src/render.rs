//! Driving a rendering backend from a placement sequence.

use crate::layout::{Placement, Rect};
use crate::orientation::Rotation;
use crate::types::SourceRef;

/// A paginated rendering backend.
///
/// `draw_image` receives the final bounding rectangle computed by the
/// paginator; the rotation is applied about the rectangle's center, with
/// the un-swapped rectangle dimensions as the rotated bounding box.
pub trait PageSink {
    type Error;

    /// Start a new output page.
    fn begin_page(&mut self) -> Result<(), Self::Error>;

    /// Draw one image into its placed rectangle.
    fn draw_image(
        &mut self,
        source: &SourceRef,
        rect: &Rect,
        rotation: Rotation,
    ) -> Result<(), Self::Error>;

    /// Finish the document after the last placement.
    fn end_document(&mut self) -> Result<(), Self::Error>;
}

/// Feed a placement sequence to a sink, in order.
///
/// `begin_page` is called exactly when `page_index` changes between
/// consecutive placements, including once before the first placement;
/// `end_document` is called once after the last. An empty sequence does
/// not touch the sink at all, so no blank page is ever emitted.
pub fn render_sequence<S: PageSink>(
    placements: &[Placement],
    sink: &mut S,
) -> Result<(), S::Error> {
    render_sequence_with(placements, sink, |_, _| {})
}

/// Like [`render_sequence`], invoking `on_drawn(completed, total)` after
/// each image is drawn. The final call is exactly `(total, total)`.
pub fn render_sequence_with<S, F>(
    placements: &[Placement],
    sink: &mut S,
    mut on_drawn: F,
) -> Result<(), S::Error>
where
    S: PageSink,
    F: FnMut(usize, usize),
{
    let total = placements.len();
    let mut current_page = None;

    for (i, placement) in placements.iter().enumerate() {
        if current_page != Some(placement.page_index) {
            sink.begin_page()?;
            current_page = Some(placement.page_index);
        }
        sink.draw_image(&placement.source, &placement.rect, placement.rotation)?;
        on_drawn(i + 1, total);
    }

    if !placements.is_empty() {
        sink.end_document()?;
    }

    Ok(())
}
