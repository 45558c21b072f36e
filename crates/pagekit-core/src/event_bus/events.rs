//! Event type definitions for the event bus.
//!
//! Each notifying component has its own event enum:
//! - [`DocumentEvent`]: per-document edit history and thumbnails
//! - [`SelectionEvent`]: selection boundary crossings and focus changes
//! - [`LibraryEvent`]: documents entering and leaving the open list
//!
//! Events are cloneable and serializable for logging/replay.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

use super::bus::BusEvent;
use crate::data::{DocumentId, PageIndex, Rotation};

/// Events raised by a single document's edit history and thumbnails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentEvent {
    /// The first displayed page changed identity or rotation.
    TitleChanged {
        /// New title page, `None` once every page has been removed.
        first: Option<(PageIndex, Rotation)>,
    },
    /// A state was pushed or popped.
    StateChanged {
        /// Number of states on the history stack afterwards.
        depth: usize,
    },
    /// A page thumbnail finished rendering.
    ThumbnailLoaded {
        /// Page whose thumbnail is now available.
        page: PageIndex,
    },
}

/// Discriminant of [`DocumentEvent`] for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentEventKind {
    /// See [`DocumentEvent::TitleChanged`].
    TitleChanged,
    /// See [`DocumentEvent::StateChanged`].
    StateChanged,
    /// See [`DocumentEvent::ThumbnailLoaded`].
    ThumbnailLoaded,
}

impl BusEvent for DocumentEvent {
    type Kind = DocumentEventKind;

    fn kind(&self) -> DocumentEventKind {
        match self {
            DocumentEvent::TitleChanged { .. } => DocumentEventKind::TitleChanged,
            DocumentEvent::StateChanged { .. } => DocumentEventKind::StateChanged,
            DocumentEvent::ThumbnailLoaded { .. } => DocumentEventKind::ThumbnailLoaded,
        }
    }

    fn description(&self) -> String {
        match self {
            DocumentEvent::TitleChanged {
                first: Some((page, rotation)),
            } => format!("Title page is now {} ({})", page, rotation),
            DocumentEvent::TitleChanged { first: None } => "Title page cleared".to_string(),
            DocumentEvent::StateChanged { depth } => format!("History depth {}", depth),
            DocumentEvent::ThumbnailLoaded { page } => format!("Thumbnail loaded for page {}", page),
        }
    }
}

/// Events raised by a selection model over items of type `T`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionEvent<T> {
    /// The most recently selected item changed.
    PanelSelected(T),
    /// The selection became empty.
    AllUnselected,
    /// The selection went from empty to non-empty.
    FirstSelected,
    /// Every item but one is selected.
    PenultSelected,
    /// Every item is selected.
    AllSelected,
}

/// Discriminant of [`SelectionEvent`] for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionEventKind {
    /// See [`SelectionEvent::PanelSelected`].
    PanelSelected,
    /// See [`SelectionEvent::AllUnselected`].
    AllUnselected,
    /// See [`SelectionEvent::FirstSelected`].
    FirstSelected,
    /// See [`SelectionEvent::PenultSelected`].
    PenultSelected,
    /// See [`SelectionEvent::AllSelected`].
    AllSelected,
}

impl<T> BusEvent for SelectionEvent<T>
where
    T: Clone + Debug + Send + Sync + 'static,
{
    type Kind = SelectionEventKind;

    fn kind(&self) -> SelectionEventKind {
        match self {
            SelectionEvent::PanelSelected(_) => SelectionEventKind::PanelSelected,
            SelectionEvent::AllUnselected => SelectionEventKind::AllUnselected,
            SelectionEvent::FirstSelected => SelectionEventKind::FirstSelected,
            SelectionEvent::PenultSelected => SelectionEventKind::PenultSelected,
            SelectionEvent::AllSelected => SelectionEventKind::AllSelected,
        }
    }

    fn description(&self) -> String {
        match self {
            SelectionEvent::PanelSelected(item) => format!("Focused {:?}", item),
            SelectionEvent::AllUnselected => "Selection cleared".to_string(),
            SelectionEvent::FirstSelected => "First item selected".to_string(),
            SelectionEvent::PenultSelected => "All but one item selected".to_string(),
            SelectionEvent::AllSelected => "All items selected".to_string(),
        }
    }
}

/// Events raised by the list of open documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LibraryEvent {
    /// The list went from empty to one document.
    FirstDocumentAdded {
        /// The document that was opened.
        id: DocumentId,
    },
    /// A document was closed.
    DocumentRemoved {
        /// The document that was closed.
        id: DocumentId,
    },
    /// The last open document was closed.
    AllDocumentsRemoved,
}

/// Discriminant of [`LibraryEvent`] for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LibraryEventKind {
    /// See [`LibraryEvent::FirstDocumentAdded`].
    FirstDocumentAdded,
    /// See [`LibraryEvent::DocumentRemoved`].
    DocumentRemoved,
    /// See [`LibraryEvent::AllDocumentsRemoved`].
    AllDocumentsRemoved,
}

impl BusEvent for LibraryEvent {
    type Kind = LibraryEventKind;

    fn kind(&self) -> LibraryEventKind {
        match self {
            LibraryEvent::FirstDocumentAdded { .. } => LibraryEventKind::FirstDocumentAdded,
            LibraryEvent::DocumentRemoved { .. } => LibraryEventKind::DocumentRemoved,
            LibraryEvent::AllDocumentsRemoved => LibraryEventKind::AllDocumentsRemoved,
        }
    }

    fn description(&self) -> String {
        match self {
            LibraryEvent::FirstDocumentAdded { id } => format!("First document opened: {}", id),
            LibraryEvent::DocumentRemoved { id } => format!("Document closed: {}", id),
            LibraryEvent::AllDocumentsRemoved => "All documents closed".to_string(),
        }
    }
}
