use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::rotation::{Rotation, RotationDirection};
use crate::error::{CoreError, CoreResult};

/// Stable 0-based page identifier.
///
/// Assigned once when a document is opened and never reused, so it keeps
/// naming the same source page after pages are removed or reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageIndex(usize);

impl PageIndex {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw 0-based index.
    pub const fn get(self) -> usize {
        self.0
    }

    /// 1-based page number in the source document.
    pub const fn page_number(self) -> usize {
        self.0 + 1
    }
}

impl From<usize> for PageIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for PageIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable snapshot of a document's surviving pages.
///
/// Maps each present [`PageIndex`] to its [`Rotation`]. Iteration order is
/// display order, which differs from numeric page order once pages have been
/// reordered. A removed page is simply absent. Every transformation returns a
/// new snapshot and leaves `self` untouched.
#[derive(Debug, Clone, Default)]
pub struct DocumentEditState {
    pages: IndexMap<PageIndex, Rotation>,
}

impl DocumentEditState {
    /// Every page of a `page_count`-page document, upright, in natural order.
    pub fn initial(page_count: usize) -> Self {
        Self {
            pages: (0..page_count)
                .map(|i| (PageIndex::new(i), Rotation::North))
                .collect(),
        }
    }

    /// Build a state from `(page, rotation)` pairs in display order.
    ///
    /// A page listed twice keeps its first position and its last rotation.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (PageIndex, Rotation)>,
    {
        Self {
            pages: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The page currently shown first (the document's title page).
    pub fn first(&self) -> Option<(PageIndex, Rotation)> {
        self.pages.first().map(|(page, rotation)| (*page, *rotation))
    }

    pub fn last(&self) -> Option<(PageIndex, Rotation)> {
        self.pages.last().map(|(page, rotation)| (*page, *rotation))
    }

    pub fn rotation(&self, page: PageIndex) -> Option<Rotation> {
        self.pages.get(&page).copied()
    }

    pub fn contains(&self, page: PageIndex) -> bool {
        self.pages.contains_key(&page)
    }

    /// Display position of `page`, if present.
    pub fn position(&self, page: PageIndex) -> Option<usize> {
        self.pages.get_index_of(&page)
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (PageIndex, Rotation)> + '_ {
        self.pages.iter().map(|(page, rotation)| (*page, *rotation))
    }

    /// Present pages in display order.
    pub fn page_indexes(&self) -> impl Iterator<Item = PageIndex> + '_ {
        self.pages.keys().copied()
    }

    /// Copy of this state without the listed pages. Unknown pages are ignored.
    pub fn without<I>(&self, indexes: I) -> Self
    where
        I: IntoIterator<Item = PageIndex>,
    {
        let removed: HashSet<PageIndex> = indexes.into_iter().collect();
        Self {
            pages: self
                .pages
                .iter()
                .filter(|(page, _)| !removed.contains(page))
                .map(|(page, rotation)| (*page, *rotation))
                .collect(),
        }
    }

    /// Copy of this state with each listed page turned one step.
    ///
    /// Every page turns at most once even if listed repeatedly; unknown pages
    /// are ignored.
    pub fn rotated<I>(&self, indexes: I, direction: RotationDirection) -> Self
    where
        I: IntoIterator<Item = PageIndex>,
    {
        let targets: HashSet<PageIndex> = indexes.into_iter().collect();
        Self {
            pages: self
                .pages
                .iter()
                .map(|(page, rotation)| {
                    let rotation = if targets.contains(page) {
                        rotation.step(direction)
                    } else {
                        *rotation
                    };
                    (*page, rotation)
                })
                .collect(),
        }
    }

    /// Copy of this state with every page turned one step.
    pub fn rotated_all(&self, direction: RotationDirection) -> Self {
        Self {
            pages: self
                .pages
                .iter()
                .map(|(page, rotation)| (*page, rotation.step(direction)))
                .collect(),
        }
    }

    /// Copy of this state with pages shown in `order`.
    ///
    /// `order` must list every present page exactly once.
    pub fn reordered(&self, order: &[PageIndex]) -> CoreResult<Self> {
        if order.len() != self.pages.len() {
            return Err(CoreError::reorder(format!(
                "expected {} pages, got {}",
                self.pages.len(),
                order.len()
            )));
        }

        let mut pages = IndexMap::with_capacity(order.len());
        for page in order {
            let rotation = self
                .rotation(*page)
                .ok_or(CoreError::MissingPage { page: *page })?;
            if pages.insert(*page, rotation).is_some() {
                return Err(CoreError::reorder(format!("page {} appears twice", page)));
            }
        }
        Ok(Self { pages })
    }
}

// IndexMap equality ignores order; display order is part of a state's identity.
impl PartialEq for DocumentEditState {
    fn eq(&self, other: &Self) -> bool {
        self.pages.len() == other.pages.len() && self.pages.iter().eq(other.pages.iter())
    }
}

impl Eq for DocumentEditState {}

impl FromIterator<(PageIndex, Rotation)> for DocumentEditState {
    fn from_iter<T: IntoIterator<Item = (PageIndex, Rotation)>>(iter: T) -> Self {
        Self::from_entries(iter)
    }
}
