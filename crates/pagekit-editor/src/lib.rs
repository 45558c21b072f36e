//! # PageKit Editor
//!
//! Editing state for a session of open PDF documents: per-document undo
//! history, multi-item selection, thumbnail bookkeeping and the ordered
//! list of open documents.
//!
//! ## Core Components
//!
//! ### Edit History
//! - **EditHistory**: stack of immutable page snapshots with linear undo
//! - Remove, rotate and reorder pages; the opening state can never be undone
//! - Announces title page changes so the document thumbnail can follow
//!
//! ### Selection
//! - **SelectionModel**: click, ctrl-click and shift-click over an ordered list
//! - Boundary notifications (none, first, all but one, all selected)
//!
//! ### Thumbnails
//! - **ThumbnailBoard**: per-page slots fed by asynchronous render completions
//!
//! ### Documents
//! - **DocumentList**: open documents in display order, each with its history
//!
//! ## Architecture
//!
//! ```text
//! DocumentList
//!   └── OpenDocument
//!         └── EditHistory ── EventBus<DocumentEvent>
//! SelectionModel<T> ──────── EventBus<SelectionEvent<T>>
//! ThumbnailBoard<I> ◄─────── PageRenderer completions
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use pagekit_core::{PageIndex, RotationDirection};
//! use pagekit_editor::EditHistory;
//!
//! let mut history = EditHistory::new(3);
//! history.rotate_pages([PageIndex::new(1)], RotationDirection::Clockwise);
//! history.remove_pages([PageIndex::new(0)]).unwrap();
//! assert_eq!(history.current().len(), 2);
//!
//! history.undo();
//! assert_eq!(history.current().len(), 3);
//! ```

pub mod document_list;
pub mod edit_history;
pub mod error;
pub mod selection_manager;
pub mod thumbnails;

pub use document_list::{DocumentList, OpenDocument};
pub use edit_history::{EditHistory, LastPagePolicy};
pub use error::{EditorError, EditorResult, SelectionError, SelectionResult};
pub use selection_manager::{SelectionItem, SelectionModel};
pub use thumbnails::{ThumbnailBoard, ThumbnailSlot};
