//! Page-count arithmetic and the page-number window shown to the user.

use std::ops::RangeInclusive;

/// Number of page links shown around the current page unless configured otherwise.
pub const DEFAULT_PAGE_WINDOW: u32 = 5;

/// `max(1, ceil(total_count / page_size))`. A zero page size also yields 1.
pub fn compute_total_pages(total_count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total_count.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// Navigation over a result set whose page count may not be known yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    total_pages: Option<u32>,
}

impl Pagination {
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    pub fn set_total_count(&mut self, total_count: u64, page_size: u32) -> u32 {
        let total = compute_total_pages(total_count, page_size);
        self.total_pages = Some(total);
        total
    }

    /// Forgets the page count; it described a different result set.
    pub fn reset(&mut self) {
        self.total_pages = None;
    }

    /// Target of a "next" step from `current`, or `None` past the last page.
    pub fn next(&self, current: u32) -> Option<u32> {
        let target = current.checked_add(1)?;
        self.jump_to(target)
    }

    /// Target of a "previous" step from `current`, or `None` on page 1.
    pub fn previous(&self, current: u32) -> Option<u32> {
        current.checked_sub(1).and_then(|target| self.jump_to(target))
    }

    /// `Some(page)` when `page` lies within the known bounds.
    pub fn jump_to(&self, page: u32) -> Option<u32> {
        if page < 1 || self.total_pages.is_some_and(|total| page > total) {
            None
        } else {
            Some(page)
        }
    }

    pub fn has_next(&self, current: u32) -> bool {
        self.next(current).is_some()
    }

    pub fn has_previous(&self, current: u32) -> bool {
        current > 1
    }

    /// Page numbers to display: up to `width` pages centred on `current`,
    /// shifted inwards at both ends so the window stays within `1..=total`.
    pub fn window(&self, current: u32, width: u32) -> RangeInclusive<u32> {
        page_window(current, self.total_pages.unwrap_or(current.max(1)), width)
    }
}

pub fn page_window(current: u32, total_pages: u32, width: u32) -> RangeInclusive<u32> {
    let total = total_pages.max(1);
    let width = width.clamp(1, total);
    let current = current.clamp(1, total);
    let start = current
        .saturating_sub(width / 2)
        .clamp(1, total - width + 1);
    start..=start + width - 1
}
