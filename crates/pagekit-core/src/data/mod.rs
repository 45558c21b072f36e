//! Page and rotation data model
//!
//! - [`Rotation`]: the four cardinal page orientations
//! - [`PageIndex`]: stable page identifier assigned when a document is opened
//! - [`DocumentEditState`]: immutable snapshot of surviving pages in display order
//! - [`DocumentId`]: identity of an open document
//! - [`ExportInput`]: a document and edit state queued for export

mod edit_state;
mod export_input;
mod ids;
mod rotation;

pub use edit_state::{DocumentEditState, PageIndex};
pub use export_input::ExportInput;
pub use ids::DocumentId;
pub use rotation::{Rotation, RotationDirection};
