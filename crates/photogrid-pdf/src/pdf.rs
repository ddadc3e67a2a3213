//! printpdf rendering backend.

use std::collections::HashMap;
use std::mem;
use std::path::PathBuf;

use photogrid_layout::{PageSink, Rect, Rotation, SourceRef};
use printpdf::*;

use crate::options::GridOptions;
use crate::types::{PdfError, Result};

const LABEL_FONT_SIZE_PT: f32 = 9.0;
const LABEL_OFFSET_PT: f32 = 14.0;
const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;

/// PDF rendering backend driven by a placement sequence.
///
/// Each source image is decoded once and registered as a document
/// XObject; rotation is applied about the placed rectangle's center.
pub struct PdfSink<'a> {
    doc: PdfDocument,
    paths: &'a [PathBuf],
    label_images: bool,
    page_width_pt: f32,
    page_height_pt: f32,
    cell_height_pt: f32,
    /// Ops for the page currently being built
    ops: Vec<Op>,
    page_open: bool,
    /// Registered images by source index: (xobject, width px, height px)
    images: HashMap<usize, (XObjectId, u32, u32)>,
}

impl<'a> PdfSink<'a> {
    pub fn new(title: &str, paths: &'a [PathBuf], options: &GridOptions) -> Self {
        let (page_width_pt, page_height_pt) = options
            .paper_size
            .dimensions_with_orientation(options.orientation);

        let usable_height = page_height_pt - 2.0 * options.margin_pt;

        Self {
            doc: PdfDocument::new(title),
            paths,
            label_images: options.label_images,
            page_width_pt,
            page_height_pt,
            cell_height_pt: usable_height / options.rows as f32,
            ops: Vec::new(),
            page_open: false,
            images: HashMap::new(),
        }
    }

    fn flush_page(&mut self) {
        if self.page_open {
            let ops = mem::take(&mut self.ops);
            self.doc.pages.push(PdfPage::new(
                Mm::from(Pt(self.page_width_pt)),
                Mm::from(Pt(self.page_height_pt)),
                ops,
            ));
            self.page_open = false;
        }
    }

    /// Decode and register the image behind `source`, once per document.
    fn image_xobject(&mut self, source: &SourceRef) -> Result<(XObjectId, u32, u32)> {
        if let Some(entry) = self.images.get(&source.index) {
            return Ok(entry.clone());
        }

        let path = self
            .paths
            .get(source.index)
            .ok_or_else(|| PdfError::Pdf(format!("no path registered for image {}", source.name)))?;
        let bytes = std::fs::read(path)?;

        let mut warnings = Vec::new();
        let raw = RawImage::decode_from_bytes(&bytes, &mut warnings)
            .map_err(|e| PdfError::Pdf(format!("failed to decode {}: {e}", source.name)))?;

        let entry = (
            self.doc.add_image(&raw),
            raw.width as u32,
            raw.height as u32,
        );
        self.images.insert(source.index, entry.clone());
        Ok(entry)
    }

    /// Label baseline: below the image, but never below the cell's bottom
    /// edge, so a tall image or a tight margin cannot push the label into
    /// the margin or the row beneath.
    fn label_baseline_y(&self, rect: &Rect) -> f32 {
        let cell_bottom = rect.center_y() - self.cell_height_pt / 2.0;
        (rect.y - LABEL_OFFSET_PT).max(cell_bottom)
    }

    fn label_ops(&self, source: &SourceRef, rect: &Rect) -> Vec<Op> {
        let text_width = source.name.len() as f32 * LABEL_FONT_SIZE_PT * HELVETICA_CHAR_WIDTH_RATIO;
        let x = rect.center_x() - text_width / 2.0;
        let y = self.label_baseline_y(rect);

        vec![
            Op::StartTextSection,
            Op::SetTextCursor {
                pos: Point {
                    x: Pt(x),
                    y: Pt(y),
                },
            },
            Op::SetFontSizeBuiltinFont {
                font: BuiltinFont::Helvetica,
                size: Pt(LABEL_FONT_SIZE_PT),
            },
            Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(source.name.clone())],
                font: BuiltinFont::Helvetica,
            },
            Op::EndTextSection,
        ]
    }

    /// Finish and serialize the document.
    pub fn finish(mut self) -> Vec<u8> {
        self.flush_page();
        let mut warnings = Vec::new();
        self.doc.save(&PdfSaveOptions::default(), &mut warnings)
    }
}

impl PageSink for PdfSink<'_> {
    type Error = PdfError;

    fn begin_page(&mut self) -> Result<()> {
        self.flush_page();
        self.page_open = true;
        Ok(())
    }

    fn draw_image(&mut self, source: &SourceRef, rect: &Rect, rotation: Rotation) -> Result<()> {
        let (id, width_px, height_px) = self.image_xobject(source)?;

        // The raw (un-rotated) pixels go into an aspect-fit box inside the
        // placed rectangle; for 0/180 that box is the rectangle itself.
        // The uniform scale commutes with the rotation about the center.
        let raw_aspect = width_px as f32 / height_px as f32;
        let (box_width, box_height) = if raw_aspect > rect.width / rect.height {
            (rect.width, rect.width / raw_aspect)
        } else {
            (rect.height * raw_aspect, rect.height)
        };
        let scale = box_width / width_px as f32;

        let rotate = match rotation {
            Rotation::None => None,
            _ => Some(XObjectRotation {
                angle_ccw_degrees: rotation.degrees() as f32,
                rotation_center_x: Px((width_px / 2) as usize),
                rotation_center_y: Px((height_px / 2) as usize),
            }),
        };

        self.ops.push(Op::UseXobject {
            id,
            transform: XObjectTransform {
                translate_x: Some(Pt(rect.center_x() - box_width / 2.0)),
                translate_y: Some(Pt(rect.center_y() - box_height / 2.0)),
                rotate,
                scale_x: Some(scale),
                scale_y: Some(scale),
                // Map pixels 1:1 to points before scaling
                dpi: Some(72.0),
            },
        });

        if self.label_images {
            let label = self.label_ops(source, rect);
            self.ops.extend(label);
        }

        Ok(())
    }

    fn end_document(&mut self) -> Result<()> {
        self.flush_page();
        Ok(())
    }
}
