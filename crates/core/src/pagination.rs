//! Pagination Deriver
//!
//! Pure functions that slice a (filtered) collection into pages. Out of range
//! requests are never an error: the requested page is clamped into
//! `[1, total_pages]` and an empty collection still reports a single page.

use serde::{Deserialize, Serialize};

/// Page size used when the caller doesn't pick one
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Page sizes offered by `catalog items list` and its `--limit` hints
pub const PAGE_SIZE_CHOICES: [usize; 4] = [12, 24, 48, 96];

/// Maximum number of page buttons shown by page controls
pub const MAX_PAGE_BUTTONS: usize = 5;

/// Current page number (1-based) and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageConfig {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Clamp the current page into the range valid for `filtered_len` items
    pub fn reclamp(&mut self, filtered_len: usize) {
        let total = total_pages(filtered_len, self.page_size);
        self.page = self.page.clamp(1, total);
    }

    /// Change the page size and clamp the current page against it
    pub fn set_page_size(&mut self, page_size: usize, filtered_len: usize) {
        self.page_size = page_size.max(1);
        self.reclamp(filtered_len);
    }
}

/// A single page of a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub valid_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    /// Index of the first visible element within the full collection
    pub start: usize,
    pub visible: &'a [T],
}

impl<T> Page<'_, T> {
    pub fn has_next(&self) -> bool {
        self.valid_page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.valid_page > 1
    }

    /// 1-based inclusive range of the visible elements, `None` for an empty page
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.visible.is_empty() {
            None
        } else {
            Some((self.start + 1, self.start + self.visible.len()))
        }
    }
}

/// Number of pages needed for `total_items`, never less than one
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Clamp an arbitrary requested page number into `[1, total_pages]`
pub fn clamp_page(page: i64, total_pages: usize) -> usize {
    let total = total_pages.max(1);
    if page < 1 {
        1
    } else {
        usize::try_from(page).map_or(total, |p| p.min(total))
    }
}

/// Calculate the slice bounds of `page` over `total_items`
///
/// Returns (start_index, end_index) for slicing the items array. `page` must
/// already be valid.
pub fn calculate_bounds(total_items: usize, page: usize, page_size: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    (start, end)
}

/// Derive the visible page of `items`
///
/// A non-positive `page_size` is treated as 1. `page` may be anything; it is
/// clamped into the valid range.
pub fn paginate<T>(items: &[T], page: i64, page_size: i64) -> Page<'_, T> {
    let page_size = usize::try_from(page_size.max(1)).unwrap_or(usize::MAX);
    let total_pages = total_pages(items.len(), page_size);
    let valid_page = clamp_page(page, total_pages);
    let (start, end) = calculate_bounds(items.len(), valid_page, page_size);

    Page {
        valid_page,
        total_pages,
        page_size,
        start,
        visible: &items[start..end],
    }
}

/// Contiguous window of page numbers to render as page buttons
///
/// Centred on `current_page` where possible and clamped to
/// `[1, total_pages]`. Always holds exactly `min(max_buttons, total_pages)`
/// numbers.
pub fn page_window(current_page: usize, total_pages: usize, max_buttons: usize) -> Vec<usize> {
    let total = total_pages.max(1);
    let count = max_buttons.min(total);
    if count == 0 {
        return Vec::new();
    }

    let current = current_page.clamp(1, total);
    let start = current
        .saturating_sub(count / 2)
        .clamp(1, total - count + 1);

    (start..start + count).collect()
}
