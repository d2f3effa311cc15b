//! Library error type.

use std::path::PathBuf;

/// Errors surfaced while producing or post-processing an image.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("grain intensity {0} does not give a finite factor range")]
    Noise(f64),
    #[error("pixel buffer of {len} bytes does not fit a {width}x{height} RGB image")]
    BufferSize { width: u32, height: u32, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
