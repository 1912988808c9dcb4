//! Error types shared by the normalizer and the renderer

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for devaids operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while normalizing documentation or rendering blocks
#[derive(Error, Debug)]
pub enum Error {
    /// The input root does not exist or is not a directory
    #[error("Input directory not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Reading, writing or walking a path failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The renderer was given no visible text
    #[error("Nothing to render: input is empty or only whitespace")]
    EmptyInput,

    /// The canvas or render configuration is unusable
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Encoding or saving the image failed
    #[cfg(feature = "render")]
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl Error {
    /// Attach a path to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
