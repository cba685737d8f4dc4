//! Error types for panel export.

use std::io;
use thiserror::Error;

/// Errors that can occur while laying out or exporting panels.
#[derive(Error, Debug)]
pub enum ExportError {
    /// There is nothing to export.
    #[error("No panels to export")]
    NoPanels,

    /// A panel outline is unusable for export.
    #[error("Invalid outline for panel '{0}'")]
    InvalidOutline(String),

    /// I/O error while writing an output file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ExportError::NoPanels.to_string(), "No panels to export");
        assert_eq!(
            ExportError::InvalidOutline("lid".to_string()).to_string(),
            "Invalid outline for panel 'lid'"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: ExportError = io_err.into();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
