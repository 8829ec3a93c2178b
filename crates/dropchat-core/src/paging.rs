// SPDX-FileCopyrightText: 2026 Dropchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Windowed query results.
//!
//! A [`PagingResult`] pairs one window of an ordered listing with the total
//! number of items the unwindowed query matches. The total does not depend
//! on the window, so any single page is enough to compute the page count.

use serde::{Deserialize, Serialize};

/// Offset/length window into an ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub offset: usize,
    pub page_size: usize,
}

impl PageWindow {
    pub fn new(offset: usize, page_size: usize) -> Self {
        Self { offset, page_size }
    }

    /// The window starting at the first item.
    pub fn first(page_size: usize) -> Self {
        Self::new(0, page_size)
    }

    /// The window immediately following this one, with the same size.
    pub fn next(&self) -> Self {
        Self::new(self.offset.saturating_add(self.page_size), self.page_size)
    }

    /// Number of items this window yields out of `available` ordered items.
    pub fn len_within(&self, available: usize) -> usize {
        self.page_size.min(available.saturating_sub(self.offset))
    }
}

/// One window of a listing plus the listing's total size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingResult<T> {
    /// Items inside the requested window, in listing order.
    pub result: Vec<T>,
    /// Total number of items the query matches, ignoring the window.
    pub available_range: usize,
}

impl<T> PagingResult<T> {
    pub fn new(result: Vec<T>, available_range: usize) -> Self {
        Self {
            result,
            available_range,
        }
    }

    /// A page with no items for a listing of `available_range` items.
    pub fn empty(available_range: usize) -> Self {
        Self::new(Vec::new(), available_range)
    }

    /// Number of pages of `page_size` needed to cover the whole listing.
    pub fn page_count(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.available_range.div_ceil(page_size)
    }

    /// Whether items remain after `window`.
    pub fn has_more(&self, window: PageWindow) -> bool {
        window.offset.saturating_add(self.result.len()) < self.available_range
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagingResult<U> {
        PagingResult {
            result: self.result.into_iter().map(f).collect(),
            available_range: self.available_range,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn window_past_the_end_yields_nothing() {
        assert_eq!(PageWindow::new(10, 5).len_within(10), 0);
        assert_eq!(PageWindow::new(50, 5).len_within(10), 0);
        let page: PagingResult<u8> = PagingResult::empty(10);
        assert!(page.is_empty());
        assert_eq!(page.available_range, 10);
    }

    #[test]
    fn oversized_window_truncates() {
        assert_eq!(PageWindow::new(7, 100).len_within(10), 3);
        assert_eq!(PageWindow::new(0, 0).len_within(10), 0);
    }

    #[test]
    fn page_count_rounds_up() {
        let page: PagingResult<u8> = PagingResult::empty(101);
        assert_eq!(page.page_count(20), 6);
        assert_eq!(page.page_count(0), 0);
        let page: PagingResult<u8> = PagingResult::empty(0);
        assert_eq!(page.page_count(20), 0);
    }

    #[test]
    fn has_more_tracks_remaining_items() {
        let first = PageWindow::first(20);
        let page = PagingResult::new(vec![0u32; 20], 25);
        assert!(page.has_more(first));
        let second = first.next();
        let page = PagingResult::new(vec![0u32; 5], 25);
        assert!(!page.has_more(second));
    }

    #[test]
    fn map_keeps_available_range() {
        let page = PagingResult::new(vec![1, 2], 9).map(|n| n * 10);
        assert_eq!(page.result, vec![10, 20]);
        assert_eq!(page.available_range, 9);
    }

    proptest! {
        #[test]
        fn consecutive_windows_cover_listing_once(
            len in 0usize..200,
            sizes in proptest::collection::vec(1usize..40, 1..30),
        ) {
            let mut covered = 0;
            let mut offset = 0;
            let mut sizes = sizes.into_iter().cycle();
            while offset < len {
                let window = PageWindow::new(offset, sizes.next().unwrap_or(1));
                let taken = window.len_within(len);
                prop_assert!(taken > 0);
                covered += taken;
                offset = window.next().offset;
            }
            prop_assert_eq!(covered, len);
            prop_assert_eq!(PageWindow::new(offset, 1).len_within(len), 0);
        }
    }
}
