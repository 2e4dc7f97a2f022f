//! Pagination stage and page-navigation controls.
//!
//! [`paginate`] slices an ordered collection into fixed-size pages.
//! [`page_controls`] computes the first/prev/numbered/next/last buttons,
//! compressing long page lists with ellipses.

use serde::Serialize;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const DEFAULT_PAGE_WINDOW: usize = 3;

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Zero-based index of the first item, within the whole collection
    pub start_index: usize,
    /// Zero-based exclusive end index
    pub end_index: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            start_index: self.start_index,
            end_index: self.end_index,
            total_pages: self.total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// `max(1, ceil(len / items_per_page))`. A page size of 0 counts as 1.
pub fn total_pages(len: usize, items_per_page: usize) -> usize {
    len.div_ceil(items_per_page.max(1)).max(1)
}

/// Clamp a page number into `[1, total_pages]`.
pub fn clamp_page(page: i64, total_pages: usize) -> usize {
    let last = total_pages.max(1);
    if page < 1 {
        1
    } else {
        usize::try_from(page).map_or(last, |p| p.min(last))
    }
}

/// Slice page `current_page` (1-indexed) out of `items`.
///
/// Never panics and never slices out of bounds:
/// - pages below 1 are treated as page 1
/// - pages past the end give an empty `items` with `start_index ==
///   end_index == items.len()`, while `total_pages` is still reported
/// - a page size of 0 counts as 1
pub fn paginate<T: Clone>(items: &[T], current_page: i64, items_per_page: usize) -> Page<T> {
    let per_page = items_per_page.max(1);
    let page = usize::try_from(current_page.max(1)).unwrap_or(usize::MAX);

    let start_index = (page - 1).saturating_mul(per_page).min(items.len());
    let end_index = start_index.saturating_add(per_page).min(items.len());

    Page {
        items: items[start_index..end_index].to_vec(),
        start_index,
        end_index,
        total_pages: total_pages(items.len(), per_page),
    }
}

// =============================================================================
// Page controls
// =============================================================================

/// A numbered page button or a gap marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageButton {
    Number { page: usize, current: bool },
    Ellipsis,
}

/// Everything the pager renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub current_page: usize,
    pub total_pages: usize,
    pub first_enabled: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub last_enabled: bool,
    pub buttons: Vec<PageButton>,
}

/// Compute pager controls for `current_page` of `total_pages`.
///
/// At most `window` numbered buttons are shown around the current page; the
/// window shifts instead of shrinking near either end. Page 1 and the last
/// page are always reachable, with an ellipsis wherever pages are skipped.
///
/// ```text
/// total 10, window 3:
///   page 1  -> 1 2 3 … 10
///   page 5  -> 1 … 4 5 6 … 10
///   page 10 -> 1 … 8 9 10
/// ```
pub fn page_controls(current_page: usize, total_pages: usize, window: usize) -> PageControls {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);
    // A window wider than the page count shows every page
    let window = window.clamp(1, total);

    let half = window / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = start.saturating_add(window - 1).min(total);
    start = end.saturating_add(1).saturating_sub(window).max(1);

    let number = |page: usize| PageButton::Number {
        page,
        current: page == current,
    };

    let mut buttons = Vec::with_capacity(window.saturating_add(4));
    if start > 1 {
        buttons.push(number(1));
        if start > 2 {
            buttons.push(PageButton::Ellipsis);
        }
    }
    buttons.extend((start..=end).map(number));
    if end < total {
        if end < total - 1 {
            buttons.push(PageButton::Ellipsis);
        }
        buttons.push(number(total));
    }

    PageControls {
        current_page: current,
        total_pages: total,
        first_enabled: current > 1,
        prev_enabled: current > 1,
        next_enabled: current < total,
        last_enabled: current < total,
        buttons,
    }
}
