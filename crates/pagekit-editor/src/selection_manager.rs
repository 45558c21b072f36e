use indexmap::IndexSet;
use pagekit_core::{EventBus, SelectionEvent};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{SelectionError, SelectionResult};

/// Bounds required of a selectable item handle.
pub trait SelectionItem: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T: Clone + Eq + Hash + Debug + Send + Sync + 'static> SelectionItem for T {}

/// Multi-item selection over an externally ordered list of items.
///
/// `SelectionModel` is responsible for:
/// - Tracking the display order of the selectable items
/// - Plain, toggle (ctrl) and range (shift) selection gestures
/// - Remembering the most recently selected item, which anchors range
///   selection and drives the preview pane
/// - Publishing boundary crossings (none / first / penultimate / all
///   selected) used to enable and disable actions
///
/// # Selection Model
///
/// - **Order**: set by the host with [`set_order`](Self::set_order), e.g.
///   after a drag-and-drop reorder
/// - **Selected**: a subset of the order, kept in the order items were added
/// - **Latest**: the item last added; `None` only when nothing is selected
///
/// Gestures referring to an item outside the current order fail with
/// [`SelectionError::UnknownItem`] and leave the model untouched.
#[derive(Debug)]
pub struct SelectionModel<T: SelectionItem> {
    order: IndexSet<T>,
    selected: IndexSet<T>,
    latest: Option<T>,
    events: EventBus<SelectionEvent<T>>,
}

impl<T: SelectionItem> SelectionModel<T> {
    /// Creates an empty model with no items.
    pub fn new() -> Self {
        Self {
            order: IndexSet::new(),
            selected: IndexSet::new(),
            latest: None,
            events: EventBus::new(),
        }
    }

    /// Creates a model over `items` with nothing selected.
    pub fn with_order<I>(items: I) -> SelectionResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut model = Self::new();
        model.order = collect_order(items)?;
        Ok(model)
    }

    /// Notification bus for this selection.
    pub fn events(&self) -> &EventBus<SelectionEvent<T>> {
        &self.events
    }

    /// Items in display order.
    pub fn order(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Selected items, oldest first.
    pub fn selected(&self) -> impl Iterator<Item = &T> + '_ {
        self.selected.iter()
    }

    /// Selected items in display order.
    pub fn selected_in_order(&self) -> Vec<T> {
        self.order
            .iter()
            .filter(|item| self.selected.contains(*item))
            .cloned()
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, item: &T) -> bool {
        self.selected.contains(item)
    }

    pub fn is_all_selected(&self) -> bool {
        self.selected.len() == self.order.len()
    }

    /// The most recently selected item.
    pub fn latest_selected(&self) -> Option<&T> {
        self.latest.as_ref()
    }

    /// Replaces the item order.
    ///
    /// With `preserve_selection`, the selection survives if every selected
    /// item is still present; otherwise it is cleared and
    /// [`SelectionEvent::AllUnselected`] is always published so the UI can
    /// resynchronise with the rebuilt list.
    pub fn set_order<I>(&mut self, items: I, preserve_selection: bool) -> SelectionResult<()>
    where
        I: IntoIterator<Item = T>,
    {
        let order = collect_order(items)?;
        let before = self.counts();
        let keep = preserve_selection && self.selected.iter().all(|item| order.contains(item));
        self.order = order;

        if keep {
            self.announce_boundaries(before);
            let latest = self.selected.last().cloned();
            self.set_latest(latest);
        } else {
            self.selected.clear();
            self.latest = None;
            self.events.notify(SelectionEvent::AllUnselected);
        }

        tracing::debug!(
            "Selection order replaced: {} items, {} selected",
            self.order.len(),
            self.selected.len()
        );
        Ok(())
    }

    /// Selects only `item`.
    pub fn click(&mut self, item: &T) -> SelectionResult<()> {
        self.ensure_known(item)?;
        let before = self.counts();
        self.selected.clear();
        self.selected.insert(item.clone());
        self.announce_boundaries(before);
        self.set_latest(Some(item.clone()));
        Ok(())
    }

    /// Toggles `item` without touching the rest of the selection.
    pub fn ctrl_click(&mut self, item: &T) -> SelectionResult<()> {
        self.ensure_known(item)?;
        let before = self.counts();
        let latest = if self.selected.shift_remove(item) {
            self.selected.last().cloned()
        } else {
            self.selected.insert(item.clone());
            Some(item.clone())
        };
        self.announce_boundaries(before);
        self.set_latest(latest);
        Ok(())
    }

    /// Adds every item between the latest selected item and `item`, inclusive.
    ///
    /// Behaves like [`click`](Self::click) when nothing is selected yet.
    /// Never deselects anything.
    pub fn shift_click(&mut self, item: &T) -> SelectionResult<()> {
        let target = self.index_of(item)?;
        let anchor = self.latest.as_ref().and_then(|latest| self.order.get_index_of(latest));
        match anchor {
            Some(anchor) => {
                self.range_select(anchor, target);
                Ok(())
            }
            None => self.click(item),
        }
    }

    /// Selects every item.
    pub fn select_all(&mut self) {
        let before = self.counts();
        for item in &self.order {
            self.selected.insert(item.clone());
        }
        self.announce_boundaries(before);
        if self.latest.is_none() {
            let latest = self.selected.last().cloned();
            self.set_latest(latest);
        }
    }

    /// Deselects every item.
    pub fn clear(&mut self) {
        let before = self.counts();
        self.selected.clear();
        self.latest = None;
        self.announce_boundaries(before);
    }

    /// Range-selects from the latest selected item to the first item.
    ///
    /// Does nothing when nothing is selected.
    pub fn select_to_first(&mut self) {
        self.select_to_edge(0);
    }

    /// Range-selects from the latest selected item to the last item.
    ///
    /// Does nothing when nothing is selected.
    pub fn select_to_last(&mut self) {
        let last = self.order.len().saturating_sub(1);
        self.select_to_edge(last);
    }

    fn select_to_edge(&mut self, target: usize) {
        let anchor = self.latest.as_ref().and_then(|latest| self.order.get_index_of(latest));
        if let Some(anchor) = anchor {
            self.range_select(anchor, target);
        }
    }

    /// Walks from `anchor` to `target` and selects each visited item.
    ///
    /// Items already selected keep their place in the selection order.
    fn range_select(&mut self, anchor: usize, target: usize) {
        let before = self.counts();
        let walk: Vec<usize> = if anchor <= target {
            (anchor..=target).collect()
        } else {
            (target..=anchor).rev().collect()
        };

        for index in walk {
            if let Some(item) = self.order.get_index(index) {
                self.selected.insert(item.clone());
            }
        }

        self.announce_boundaries(before);
        let latest = self.order.get_index(target).cloned();
        self.set_latest(latest);
    }

    fn counts(&self) -> (usize, usize) {
        (self.selected.len(), self.order.len())
    }

    /// Publishes the boundary events crossed since `before` (selected count, order length).
    fn announce_boundaries(&self, before: (usize, usize)) {
        let (prev_count, prev_len) = before;
        let (count, len) = self.counts();

        let penult = |count: usize, len: usize| len >= 2 && count + 1 == len;
        let all = |count: usize, len: usize| len >= 1 && count == len;

        if count == 0 && prev_count != 0 {
            self.events.notify(SelectionEvent::AllUnselected);
        }
        if count >= 1 && prev_count == 0 {
            self.events.notify(SelectionEvent::FirstSelected);
        }
        if penult(count, len) && !penult(prev_count, prev_len) {
            self.events.notify(SelectionEvent::PenultSelected);
        }
        if all(count, len) && !all(prev_count, prev_len) {
            self.events.notify(SelectionEvent::AllSelected);
        }
    }

    fn set_latest(&mut self, latest: Option<T>) {
        if latest != self.latest {
            if let Some(item) = &latest {
                self.events.notify(SelectionEvent::PanelSelected(item.clone()));
            }
        }
        self.latest = latest;
    }

    fn index_of(&self, item: &T) -> SelectionResult<usize> {
        self.order.get_index_of(item).ok_or_else(|| {
            tracing::warn!("Selection gesture on unknown item {:?}", item);
            SelectionError::UnknownItem(format!("{:?}", item))
        })
    }

    fn ensure_known(&self, item: &T) -> SelectionResult<()> {
        self.index_of(item).map(|_| ())
    }
}

impl<T: SelectionItem> Default for SelectionModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_order<T: SelectionItem, I: IntoIterator<Item = T>>(items: I) -> SelectionResult<IndexSet<T>> {
    let mut order = IndexSet::new();
    for item in items {
        if order.contains(&item) {
            return Err(SelectionError::DuplicateItem(format!("{:?}", item)));
        }
        order.insert(item);
    }
    Ok(order)
}
