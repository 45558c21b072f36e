//! Error types for export planning.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while planning an export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The planner was given no documents at all.
    #[error("No documents to export")]
    NoDocuments,

    /// Every document is empty, so there are no pages to write.
    #[error("Nothing to export: all documents are empty")]
    NothingToExport,

    /// A path could not be made absolute.
    #[error("Invalid path {path:?}: {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
