//! Page-range computation for the pagination control.
//!
//! `None` entries are ellipsis markers; `Some(n)` entries are clickable page
//! numbers. Templates suppress the whole control when there is at most one
//! page.

use serde::Serialize;

/// Number of listings shown per page on the browse screen.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 8;

/// Page numbers shown on each side of the current page.
pub const DEFAULT_SIBLING_COUNT: usize = 1;

/// Computes the ordered sequence of page labels a pagination control should
/// render, collapsing long runs near the ends into ellipses.
///
/// `sibling_count` page numbers are kept on each side of `current_page`; the
/// first and last page are always shown. A gap of exactly one page is shown
/// as the real number rather than an ellipsis.
pub fn pagination_range(
    current_page: usize,
    total_pages: usize,
    sibling_count: usize,
) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }

    // First, last, current and two ellipsis slots beyond the siblings.
    let total_slots = sibling_count + 5;

    if total_pages <= total_slots {
        return (1..=total_pages).map(Some).collect();
    }

    let current = current_page.clamp(1, total_pages);

    let left_sibling = current.saturating_sub(sibling_count).max(1);
    let right_sibling = (current + sibling_count).min(total_pages);

    let show_left_dots = left_sibling > 2;
    let show_right_dots = right_sibling < total_pages - 1;

    match (show_left_dots, show_right_dots) {
        (false, true) => {
            let left_item_count = 3 + 2 * sibling_count;
            let mut pages: Vec<_> = (1..=left_item_count).map(Some).collect();
            pages.push(None);
            pages.push(Some(total_pages));
            pages
        }
        (true, false) => {
            let right_item_count = 3 + 2 * sibling_count;
            let mut pages = vec![Some(1), None];
            pages.extend((total_pages - right_item_count + 1..=total_pages).map(Some));
            pages
        }
        (true, true) => {
            let mut pages = vec![Some(1), None];
            pages.extend((left_sibling..=right_sibling).map(Some));
            pages.push(None);
            pages.push(Some(total_pages));
            pages
        }
        // Unreachable past the dense guard above; fall back to the full range.
        (false, false) => (1..=total_pages).map(Some).collect(),
    }
}

/// One rendered page of a collection together with the page-range labels.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = pagination_range(current_page, total_pages, DEFAULT_SIBLING_COUNT);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
        }
    }
}
