use std::io;
use std::path::{Path, PathBuf};

use image::RgbImage;
use thiserror::Error;

/// Errors that abort a whole render call.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("the directory '{0}' does not exist")]
    DirectoryNotFound(PathBuf),
    #[error("failed to list directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Per-file failures; the renderer skips the file and records a warning.
#[derive(Error, Debug)]
pub enum ImageSourceError {
    #[error("file {file_name} not found")]
    NotFound { file_name: String },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// A decoded source image together with where it was read from.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pub path: PathBuf,
    pub image: RgbImage,
}

/// Domain interface for resolving recorded file names to RGB images.
pub trait ImageSource: Send {
    /// Location reported in "file not found" diagnostics.
    fn location(&self) -> &Path;

    fn open(&self, file_name: &str) -> Result<SourceImage, ImageSourceError>;
}
