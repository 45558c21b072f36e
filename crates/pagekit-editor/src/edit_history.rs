//! Undo history for one document's page edits

use pagekit_core::{
    DocumentEditState, DocumentEvent, EventBus, PageIndex, PageSource, Rotation,
    RotationDirection,
};
use serde::{Deserialize, Serialize};

use crate::error::{EditorError, EditorResult};

/// What happens when a removal would leave a document with no pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LastPagePolicy {
    /// Refuse the removal with [`EditorError::WouldRemoveAllPages`].
    #[default]
    Reject,
    /// Accept the empty state; the host decides what an empty document means.
    Allow,
}

/// Stack of [`DocumentEditState`] snapshots for one open document
///
/// The bottom entry is the state the document was opened with and can never
/// be undone. Every edit pushes a new snapshot; `undo` pops one. Whenever the
/// first displayed page changes identity or rotation, a
/// [`DocumentEvent::TitleChanged`] is published so the representative
/// thumbnail can be refreshed.
#[derive(Debug)]
pub struct EditHistory {
    initial: DocumentEditState,
    edits: Vec<DocumentEditState>,
    policy: LastPagePolicy,
    events: EventBus<DocumentEvent>,
}

impl EditHistory {
    /// History for a freshly opened `page_count`-page document
    pub fn new(page_count: usize) -> Self {
        Self::from_state(DocumentEditState::initial(page_count), LastPagePolicy::default())
    }

    /// History seeded from a rendering backend's page count
    pub fn open<S: PageSource + ?Sized>(source: &S, policy: LastPagePolicy) -> Self {
        Self::from_state(DocumentEditState::initial(source.page_count()), policy)
    }

    /// History whose undo floor is `initial`
    pub fn from_state(initial: DocumentEditState, policy: LastPagePolicy) -> Self {
        Self {
            initial,
            edits: Vec::new(),
            policy,
            events: EventBus::new(),
        }
    }

    /// Current state (top of the stack)
    pub fn current(&self) -> &DocumentEditState {
        self.edits.last().unwrap_or(&self.initial)
    }

    /// State the document was opened with
    pub fn initial(&self) -> &DocumentEditState {
        &self.initial
    }

    /// Number of states on the stack, always at least 1
    pub fn depth(&self) -> usize {
        self.edits.len() + 1
    }

    pub fn can_undo(&self) -> bool {
        !self.edits.is_empty()
    }

    pub fn policy(&self) -> LastPagePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: LastPagePolicy) {
        self.policy = policy;
    }

    /// Notification bus for this document
    pub fn events(&self) -> &EventBus<DocumentEvent> {
        &self.events
    }

    /// Title page of the current state
    pub fn title_page(&self) -> Option<(PageIndex, Rotation)> {
        self.current().first()
    }

    /// Remove pages from the current state
    ///
    /// Returns `Ok(false)` when nothing changed (no indexes, or none present).
    pub fn remove_pages<I>(&mut self, indexes: I) -> EditorResult<bool>
    where
        I: IntoIterator<Item = PageIndex>,
    {
        let indexes: Vec<PageIndex> = indexes.into_iter().collect();
        if indexes.is_empty() {
            return Ok(false);
        }

        let current = self.current();
        let next = current.without(indexes);
        if next.len() == current.len() {
            return Ok(false);
        }

        if next.is_empty() && self.policy == LastPagePolicy::Reject {
            let pages = current.len();
            tracing::warn!("Refusing to remove all {} remaining pages", pages);
            return Err(EditorError::WouldRemoveAllPages { pages });
        }

        Ok(self.push(next))
    }

    /// Turn the listed pages one step; unknown pages are ignored
    pub fn rotate_pages<I>(&mut self, indexes: I, direction: RotationDirection) -> bool
    where
        I: IntoIterator<Item = PageIndex>,
    {
        let next = self.current().rotated(indexes, direction);
        self.push(next)
    }

    /// Turn every current page one step
    pub fn rotate_all(&mut self, direction: RotationDirection) -> bool {
        let next = self.current().rotated_all(direction);
        self.push(next)
    }

    /// Show pages in `order`, which must be a permutation of the current pages
    pub fn reorder_pages(&mut self, order: &[PageIndex]) -> EditorResult<bool> {
        let next = self.current().reordered(order)?;
        Ok(self.push(next))
    }

    /// Restore the previous state
    ///
    /// Returns false at the bottom of the stack.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.edits.pop() else {
            return false;
        };
        tracing::debug!("Undo: history depth now {}", self.depth());
        self.announce(previous.first());
        true
    }

    fn push(&mut self, next: DocumentEditState) -> bool {
        if next == *self.current() {
            return false;
        }
        let previous_title = self.current().first();
        self.edits.push(next);
        tracing::debug!(
            "Pushed edit state with {} pages, depth {}",
            self.current().len(),
            self.depth()
        );
        self.announce(previous_title);
        true
    }

    fn announce(&self, previous_title: Option<(PageIndex, Rotation)>) {
        let title = self.current().first();
        if title != previous_title {
            self.events.notify(DocumentEvent::TitleChanged { first: title });
        }
        self.events.notify(DocumentEvent::StateChanged {
            depth: self.depth(),
        });
    }
}
