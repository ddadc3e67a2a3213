use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Layout error: {0}")]
    Layout(#[from] photogrid_layout::GridError),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("No images to place")]
    NoImages,
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PdfError>;
