//! Page range compaction
//!
//! A document's edit state is exported as the shortest list of runs of
//! consecutive original pages that share one rotation.

use pagekit_core::{DocumentEditState, PageIndex, Rotation};
use serde::Serialize;
use std::fmt;

/// Inclusive run of 1-based page numbers with a common rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRange {
    pub first: usize,
    pub last: usize,
    pub rotation: Rotation,
}

impl PageRange {
    /// Single-page range for a 0-based page index
    pub fn single(page: PageIndex, rotation: Rotation) -> Self {
        let number = page.page_number();
        Self {
            first: number,
            last: number,
            rotation,
        }
    }

    /// Number of pages covered
    pub fn page_count(&self) -> usize {
        self.last + 1 - self.first
    }

    /// pdftk rotation suffix; empty for upright pages
    pub fn suffix(&self) -> &'static str {
        if self.rotation.is_upright() {
            ""
        } else {
            self.rotation.name()
        }
    }

    /// 0-based page indexes covered by this range
    pub fn pages(&self) -> impl Iterator<Item = PageIndex> {
        (self.first..=self.last).map(|number| PageIndex::new(number - 1))
    }

    /// Extend by the page following `last`, if it has the same rotation.
    fn try_extend(&mut self, page: PageIndex, rotation: Rotation) -> bool {
        if rotation == self.rotation && page.page_number() == self.last + 1 {
            self.last += 1;
            true
        } else {
            false
        }
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first == self.last {
            write!(f, "{}{}", self.first, self.suffix())
        } else {
            write!(f, "{}-{}{}", self.first, self.last, self.suffix())
        }
    }
}

/// Compact `state` into ranges, preserving display order.
///
/// A new range starts at the first entry, wherever the original page index
/// does not follow the previous one, and wherever the rotation changes.
pub fn compact_ranges(state: &DocumentEditState) -> Vec<PageRange> {
    let mut ranges: Vec<PageRange> = Vec::new();
    for (page, rotation) in state.iter() {
        let extended = ranges
            .last_mut()
            .is_some_and(|range| range.try_extend(page, rotation));
        if !extended {
            ranges.push(PageRange::single(page, rotation));
        }
    }
    ranges
}

/// Edit state described by `ranges`.
pub fn expand_ranges(ranges: &[PageRange]) -> DocumentEditState {
    ranges
        .iter()
        .flat_map(|range| range.pages().map(move |page| (page, range.rotation)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(first: usize, last: usize, rotation: Rotation) -> PageRange {
        PageRange {
            first,
            last,
            rotation,
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(range(3, 3, Rotation::North).to_string(), "3");
        assert_eq!(range(1, 2, Rotation::North).to_string(), "1-2");
        assert_eq!(range(4, 6, Rotation::South).to_string(), "4-6south");
    }

    #[test]
    fn test_empty_state() {
        assert!(compact_ranges(&DocumentEditState::default()).is_empty());
    }

    #[test]
    fn test_descending_pages_split() {
        let state = DocumentEditState::from_entries([
            (PageIndex::new(2), Rotation::North),
            (PageIndex::new(1), Rotation::North),
        ]);
        assert_eq!(
            compact_ranges(&state),
            vec![range(3, 3, Rotation::North), range(2, 2, Rotation::North)]
        );
    }
}
