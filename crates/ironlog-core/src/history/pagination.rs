//! Page arithmetic for the session history.

use crate::error::{IronlogError, Result};
use serde::Serialize;
use std::ops::RangeInclusive;

/// A resolved page of a list with `total_count` entries.
///
/// The requested page is clamped rather than rejected: anything below 1
/// becomes 1, anything past the end becomes the last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based page actually served
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl Pagination {
    /// Clamps `requested_page` and computes the page layout.
    ///
    /// # Errors
    ///
    /// `Validation` when `page_size` is zero.
    pub fn compute(total_count: usize, page_size: usize, requested_page: i64) -> Result<Self> {
        if page_size == 0 {
            return Err(IronlogError::validation("Page size must be at least 1"));
        }
        let total_pages = total_count.div_ceil(page_size);
        let requested = usize::try_from(requested_page.max(1)).unwrap_or(usize::MAX);
        let page = if total_pages > 0 {
            requested.min(total_pages)
        } else {
            1
        };

        Ok(Self {
            page,
            page_size,
            total_pages,
            total_count,
        })
    }

    /// Index of the first entry on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    /// Index range of this page's entries within the full list.
    pub fn bounds(&self) -> std::ops::Range<usize> {
        let start = self.offset().min(self.total_count);
        let end = (start + self.page_size).min(self.total_count);
        start..end
    }

    /// 1-based "showing X-Y" numbers, or `None` for an empty list.
    pub fn showing(&self) -> Option<(usize, usize)> {
        let bounds = self.bounds();
        if bounds.is_empty() {
            None
        } else {
            Some((bounds.start + 1, bounds.end))
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Page numbers for the pagination controls.
    pub fn window(&self, max_visible: usize) -> RangeInclusive<usize> {
        page_window(self.page, self.total_pages, max_visible)
    }
}

/// Up to `max_visible` page numbers centred on `current`, kept within
/// `[1, total_pages]`.
///
/// Near the end the window slides left so it still shows `max_visible`
/// numbers when there are enough pages. Empty when `total_pages` is zero.
pub fn page_window(current: usize, total_pages: usize, max_visible: usize) -> RangeInclusive<usize> {
    let max_visible = max_visible.max(1);
    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total_pages);
    if end + 1 < start + max_visible {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }
    start..=end
}
