//! # PageKit Core
//!
//! Core types, events, and collaborator traits for PageKit.
//! Provides the page/rotation data model shared by the editor and the
//! exporter, the typed event bus used for UI notifications, and the
//! interfaces PageKit expects from a PDF rendering backend.

pub mod data;
pub mod error;
pub mod event_bus;
pub mod render;

pub use data::{
    DocumentEditState, DocumentId, ExportInput, PageIndex, Rotation, RotationDirection,
};

pub use error::{CoreError, CoreResult};

// Re-export event bus for convenience
pub use event_bus::{
    BusEvent, DocumentEvent, DocumentEventKind, EventBus, EventBusError, EventFilter,
    LibraryEvent, LibraryEventKind, SelectionEvent, SelectionEventKind, SubscriptionId,
};

pub use render::{PageRenderer, PageSource, RenderCallback, RenderError};
