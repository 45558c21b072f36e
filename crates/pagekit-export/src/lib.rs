//! # PageKit Export
//!
//! Plans the pdftk invocation that writes the edited documents into a
//! single PDF.
//!
//! - [`handles`]: short upper-case handles naming each input file
//! - [`ranges`]: compaction of an edit state into rotated page ranges
//! - [`planner`]: [`ExportPlanner`] and the resulting [`ExportPlan`]
//!
//! ```rust
//! use pagekit_core::{DocumentEditState, DocumentId, ExportInput, PageIndex, RotationDirection};
//! use pagekit_export::ExportPlanner;
//! use std::path::Path;
//!
//! let state = DocumentEditState::initial(3)
//!     .rotated([PageIndex::new(2)], RotationDirection::Clockwise)
//!     .without([PageIndex::new(1)]);
//! let input = ExportInput::new(DocumentId::new(), Path::new("/docs/x.pdf"), &state);
//!
//! let plan = ExportPlanner::new().plan([input], "/docs/out.pdf").unwrap();
//! assert_eq!(plan.tokens(), ["A1", "A3east"]);
//! ```

pub mod error;
pub mod handles;
pub mod planner;
pub mod ranges;

pub use error::{ExportError, ExportResult};
pub use handles::{assign_handles, handle_for_ordinal, Handle, HandleGenerator};
pub use planner::{ExportPlan, ExportPlanner, HandleBinding, PlannedDocument, DEFAULT_PROGRAM};
pub use ranges::{compact_ranges, expand_ranges, PageRange};
