//! Thumbnail bookkeeping for one document
//!
//! Rendering happens in the backend, possibly on worker threads. Completion
//! callbacks only enqueue their result; the owner drains the queue with
//! [`ThumbnailBoard::apply_completed`] on its own thread.

use indexmap::IndexMap;
use pagekit_core::{
    DocumentEditState, DocumentEvent, EventBus, PageIndex, PageRenderer, RenderError,
};
use tokio::sync::mpsc;

/// Thumbnail state of a single page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailSlot<I> {
    /// Render requested, not finished.
    Pending,
    /// Rendered image.
    Loaded(I),
    /// Rendering failed with the given reason.
    Failed(String),
}

impl<I> ThumbnailSlot<I> {
    pub fn is_pending(&self) -> bool {
        matches!(self, ThumbnailSlot::Pending)
    }

    pub fn image(&self) -> Option<&I> {
        match self {
            ThumbnailSlot::Loaded(image) => Some(image),
            _ => None,
        }
    }
}

type Completion<I> = (PageIndex, Result<I, RenderError>);

/// Per-page thumbnail slots fed by asynchronous render completions
#[derive(Debug)]
pub struct ThumbnailBoard<I> {
    slots: IndexMap<PageIndex, ThumbnailSlot<I>>,
    tx: mpsc::UnboundedSender<Completion<I>>,
    rx: mpsc::UnboundedReceiver<Completion<I>>,
}

impl<I: Send + 'static> ThumbnailBoard<I> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            slots: IndexMap::new(),
            tx,
            rx,
        }
    }

    /// Mark `page` pending and ask `renderer` for it.
    pub fn request<R>(&mut self, page: PageIndex, renderer: &R)
    where
        R: PageRenderer<Image = I> + ?Sized,
    {
        self.slots.insert(page, ThumbnailSlot::Pending);
        let tx = self.tx.clone();
        renderer.render_page(
            page,
            Box::new(move |result| {
                // The board may already be gone; nothing to deliver to then.
                let _ = tx.send((page, result));
            }),
        );
    }

    /// Request every page of `state`, in display order.
    pub fn request_all<R>(&mut self, state: &DocumentEditState, renderer: &R)
    where
        R: PageRenderer<Image = I> + ?Sized,
    {
        tracing::debug!("Requesting {} thumbnails", state.len());
        for page in state.page_indexes() {
            self.request(page, renderer);
        }
    }

    /// Store every queued completion and return how many images were loaded.
    ///
    /// Publishes [`DocumentEvent::ThumbnailLoaded`] per loaded image.
    /// Completions for pages no longer tracked are dropped.
    pub fn apply_completed(&mut self, events: &EventBus<DocumentEvent>) -> usize {
        let mut loaded = 0;
        while let Ok((page, result)) = self.rx.try_recv() {
            let Some(slot) = self.slots.get_mut(&page) else {
                tracing::debug!("Dropping thumbnail for untracked page {}", page);
                continue;
            };
            match result {
                Ok(image) => {
                    *slot = ThumbnailSlot::Loaded(image);
                    events.notify(DocumentEvent::ThumbnailLoaded { page });
                    loaded += 1;
                }
                Err(e) => {
                    tracing::warn!("Thumbnail for page {} failed: {}", page, e);
                    *slot = ThumbnailSlot::Failed(e.to_string());
                }
            }
        }
        loaded
    }

    /// Forget slots for pages not present in `state`; returns how many were removed.
    pub fn prune(&mut self, state: &DocumentEditState) -> usize {
        let before = self.slots.len();
        self.slots.retain(|page, _| state.contains(*page));
        before - self.slots.len()
    }

    pub fn slot(&self, page: PageIndex) -> Option<&ThumbnailSlot<I>> {
        self.slots.get(&page)
    }

    pub fn image(&self, page: PageIndex) -> Option<&I> {
        self.slot(page).and_then(ThumbnailSlot::image)
    }

    pub fn pending_count(&self) -> usize {
        self.slots.values().filter(|slot| slot.is_pending()).count()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<I: Send + 'static> Default for ThumbnailBoard<I> {
    fn default() -> Self {
        Self::new()
    }
}
