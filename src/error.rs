//! Error types for the pdfsift library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfsift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or analyzing documents.
///
/// Analysis itself is pure data transformation and cannot fail; every
/// variant here originates at a crate boundary (reading a source
/// document, parsing its dump, or talking to a name suggester).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading source files or directories.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error deserializing a parsed-document dump.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document source failed to open or read the document.
    #[error("Document source error: {0}")]
    Source(String),

    /// The filename-suggestion collaborator failed.
    #[error("Name suggestion error: {0}")]
    Suggest(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Source("corrupt xref table".to_string());
        assert_eq!(err.to_string(), "Document source error: corrupt xref table");

        let err = Error::Suggest("model unavailable".to_string());
        assert_eq!(err.to_string(), "Name suggestion error: model unavailable");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
