//! Client-side pagination over fully fetched collections

use std::ops::Range;

/// Rows shown per page in every table
pub const ITEMS_PER_PAGE: usize = 10;

/// Most page buttons rendered at once
pub const MAX_PAGE_BUTTONS: usize = 5;

/// Rows that can be removed from a [`Paginated`] by id
pub trait Identified {
    fn id(&self) -> i64;
}

/// A collection paged in fixed windows of [`ITEMS_PER_PAGE`]
///
/// Pages are 1-based. The current page is never moved by removals, so
/// deleting the last row of the last page leaves an empty page until the
/// user navigates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginated<T> {
    items: Vec<T>,
    current_page: usize,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
        }
    }
}

impl<T> Paginated<T> {
    /// Wrap a freshly fetched collection, starting on page 1
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            current_page: 1,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(ITEMS_PER_PAGE)
    }

    /// Index range of the current page, clipped to the collection
    pub fn range(&self) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(ITEMS_PER_PAGE)
            .min(self.items.len());
        let end = start.saturating_add(ITEMS_PER_PAGE).min(self.items.len());
        start..end
    }

    /// Rows on the current page
    pub fn page_items(&self) -> &[T] {
        &self.items[self.range()]
    }

    /// Move to `page`; ignored outside `1..=total_pages`
    pub fn set_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Page buttons for the current position
    pub fn page_buttons(&self) -> Vec<usize> {
        page_window(self.current_page, self.total_pages())
    }

    /// Replace the collection and return to page 1
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.current_page = 1;
    }
}

impl<T: Identified> Paginated<T> {
    /// Drop the first row with `id`. The current page is left alone.
    pub fn remove_by_id(&mut self, id: i64) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn find(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn find_mut(&mut self, id: i64) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }
}

/// Up to [`MAX_PAGE_BUTTONS`] consecutive page numbers around `current`
///
/// The window is centred on `current` where possible and shifted so it
/// always ends at or before `total`.
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }
    let half = MAX_PAGE_BUTTONS / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = (start + MAX_PAGE_BUTTONS - 1).min(total);
    if end + 1 - start < MAX_PAGE_BUTTONS {
        start = (end + 1).saturating_sub(MAX_PAGE_BUTTONS).max(1);
    }
    (start..=end).collect()
}
