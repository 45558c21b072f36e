//! Error types for the editor crate.
//!
//! This module provides structured error types for edit history
//! operations, the open-document list, and the selection model.

use pagekit_core::{CoreError, DocumentId};
use thiserror::Error;

/// Errors that can occur during edit operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// The removal would leave the document without pages.
    #[error("Cannot remove all {pages} remaining page(s) of a document")]
    WouldRemoveAllPages { pages: usize },

    /// The document is not in the open-document list.
    #[error("Unknown document: {0}")]
    UnknownDocument(DocumentId),

    /// A core data operation failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Errors raised by the selection model on malformed input.
///
/// These indicate the caller and the model disagree about which items
/// exist, so they are reported instead of being ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The item is not part of the current order.
    #[error("Item not in selection order: {0}")]
    UnknownItem(String),

    /// The same item appears twice in a new order.
    #[error("Item listed twice in selection order: {0}")]
    DuplicateItem(String),
}

/// Result type alias for edit operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Result type alias for selection operations.
pub type SelectionResult<T> = Result<T, SelectionError>;
