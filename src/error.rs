//! Error types for icon generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating icon assets
#[derive(Error, Debug)]
pub enum Error {
    /// The renderer could not produce a raster for a template/size
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Reading, writing or deleting a file failed
    #[error("I/O failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed arguments to the icon container assembler
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
