//! Error types for the exporter.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the color configuration or writing theme files.
#[derive(Debug, Error)]
pub enum ExportError {
    /// I/O failure on a specific path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A color value could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// The filesystem watcher could not be set up.
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}
