//! Page windows over a ranked list.

/// Items per page in the ranked bar chart.
pub const PAGE_SIZE: usize = 10;

/// Direction of a page advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Next,
    Prev,
}

/// A contiguous slice of a ranked list currently visible under pagination.
///
/// The window never persists an out-of-range page: every accessor clamps
/// against the current item count first, so a shrinking list pulls the
/// window back into `[0, total_pages - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: usize,
    page_size: usize,
}

impl PageWindow {
    pub fn new() -> Self {
        PageWindow {
            page: 0,
            page_size: PAGE_SIZE,
        }
    }

    /// Current page index (call [`clamp`](Self::clamp) first if the item
    /// count may have changed).
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `total_items`; an empty list still has one
    /// (empty) page.
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size).max(1)
    }

    /// Pin the page index into `[0, total_pages - 1]`.
    pub fn clamp(&mut self, total_items: usize) {
        self.page = self.page.min(self.total_pages(total_items) - 1);
    }

    /// Clamped `[start, end)` bounds of the visible window.
    pub fn slice_bounds(&mut self, total_items: usize) -> (usize, usize) {
        self.clamp(total_items);
        let start = (self.page * self.page_size).min(total_items);
        let end = (start + self.page_size).min(total_items);
        (start, end)
    }

    /// Move one page in `direction`. Returns false (and leaves the window
    /// untouched) when already at that boundary.
    pub fn advance(&mut self, direction: SlideDirection, total_items: usize) -> bool {
        self.clamp(total_items);
        match direction {
            SlideDirection::Prev if self.page > 0 => {
                self.page -= 1;
                true
            }
            SlideDirection::Next if self.page + 1 < self.total_pages(total_items) => {
                self.page += 1;
                true
            }
            _ => false,
        }
    }

    pub fn at_first(&self) -> bool {
        self.page == 0
    }

    pub fn at_last(&self, total_items: usize) -> bool {
        self.page + 1 >= self.total_pages(total_items)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        PageWindow::new()
    }
}
