//! Error handling for PageKit core types
//!
//! The core works on already-validated in-memory state, so the taxonomy is
//! small: malformed rotation angles and page orders that are not a
//! permutation of the current pages.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::data::PageIndex;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Rotation angle is not a multiple of 90 degrees
    #[error("Invalid rotation angle: {angle} (must be a multiple of 90)")]
    InvalidAngle {
        /// The rejected angle in degrees.
        angle: i32,
    },

    /// Requested page order is not a permutation of the current pages
    #[error("Invalid page order: {reason}")]
    InvalidReorder {
        /// Why the order was rejected.
        reason: String,
    },

    /// Page is not part of the document state
    #[error("Page {page} is not present")]
    MissingPage {
        /// The missing page.
        page: PageIndex,
    },
}

impl CoreError {
    /// Create a reorder error from a message
    pub fn reorder(reason: impl Into<String>) -> Self {
        CoreError::InvalidReorder {
            reason: reason.into(),
        }
    }
}

/// Result type using CoreError
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_display() {
        let err = CoreError::InvalidAngle { angle: 45 };
        assert_eq!(
            err.to_string(),
            "Invalid rotation angle: 45 (must be a multiple of 90)"
        );

        let err = CoreError::reorder("page 3 appears twice");
        assert_eq!(err.to_string(), "Invalid page order: page 3 appears twice");

        let err = CoreError::MissingPage {
            page: PageIndex::new(4),
        };
        assert_eq!(err.to_string(), "Page 4 is not present");
    }
}
