use std::path::PathBuf;
use thiserror::Error;

/// Failure classes of the local pipeline. Everything downstream of image
/// loading and raw-buffer validation is arithmetic over fixed-shape arrays
/// and cannot fail.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("image not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error(transparent)]
    Decode(#[from] image::ImageError),
}
