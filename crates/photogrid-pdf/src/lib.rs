mod generate;
mod meta;
mod options;
mod pdf;
mod stats;
mod types;

pub use generate::{Progress, Summary, generate_pdf, generate_pdf_bytes};
pub use meta::{LoadedImages, SortOrder, load_images, probe};
pub use options::{DimensionPolicy, GridOptions, PageOrientation, PaperSize};
pub use pdf::PdfSink;
pub use stats::{GridStatistics, calculate_statistics};
pub use types::{PdfError, Result};
