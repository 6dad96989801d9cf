//! Page arithmetic and the windowed page-number list.
//!
//! The page-number list shows at most [`MAX_VISIBLE_PAGES`] consecutive pages
//! around the current one. When the window does not reach an edge, the first
//! or last page is shown separately, with an ellipsis when there is a gap.
//! The exact window shape is user-visible, so the arithmetic below is fixed.

/// Default number of records per page.
pub const DEFAULT_ROWS_PER_PAGE: usize = 50;

/// Width of the page-number window.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Number of pages needed to show `len` items, `size` per page.
///
/// Zero items means zero pages. A `size` of zero is treated as one.
#[must_use]
pub const fn total_pages(len: usize, size: usize) -> usize {
    let size = if size == 0 { 1 } else { size };
    let full = len / size;
    if len % size == 0 {
        full
    } else {
        full + 1
    }
}

/// Half-open index range `[start, end)` of page `page` (1-based), clipped to
/// `len`.
#[must_use]
pub fn page_bounds(page: usize, size: usize, len: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    (start, end)
}

/// Computed layout of the page-number widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub current: usize,
    pub total: usize,
    /// First page number inside the window.
    pub start: usize,
    /// Last page number inside the window (inclusive).
    pub end: usize,
}

impl PageWindow {
    /// Computes the window for `current` out of `total` pages.
    ///
    /// # Examples
    ///
    /// ```
    /// use databook_viewer::app::pagination::PageWindow;
    ///
    /// let w = PageWindow::compute(10, 10);
    /// assert_eq!(w.pages().collect::<Vec<_>>(), vec![6, 7, 8, 9, 10]);
    /// assert!(w.shows_first() && w.leading_ellipsis());
    /// assert!(!w.shows_last());
    /// ```
    #[must_use]
    pub fn compute(current: usize, total: usize) -> Self {
        let mut start = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
        let end = total.min(start + MAX_VISIBLE_PAGES - 1);

        if end + 1 < start + MAX_VISIBLE_PAGES {
            start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
        }

        Self {
            current,
            total,
            start,
            end,
        }
    }

    /// Page numbers inside the window, in order.
    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Whether page 1 is rendered ahead of the window.
    #[must_use]
    pub const fn shows_first(&self) -> bool {
        self.start > 1
    }

    #[must_use]
    pub const fn leading_ellipsis(&self) -> bool {
        self.start > 2
    }

    /// Whether the last page is rendered after the window.
    #[must_use]
    pub const fn shows_last(&self) -> bool {
        self.end < self.total
    }

    #[must_use]
    pub const fn trailing_ellipsis(&self) -> bool {
        self.end + 1 < self.total
    }

    #[must_use]
    pub const fn prev_enabled(&self) -> bool {
        self.current > 1
    }

    #[must_use]
    pub const fn next_enabled(&self) -> bool {
        self.current < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(w: &PageWindow) -> Vec<usize> {
        w.pages().collect()
    }

    #[test]
    fn first_of_ten() {
        let w = PageWindow::compute(1, 10);
        assert_eq!(pages(&w), vec![1, 2, 3, 4, 5]);
        assert!(!w.shows_first());
        assert!(!w.leading_ellipsis());
        assert!(w.shows_last());
        assert!(w.trailing_ellipsis());
        assert!(!w.prev_enabled());
        assert!(w.next_enabled());
    }

    #[test]
    fn last_of_ten() {
        let w = PageWindow::compute(10, 10);
        assert_eq!(pages(&w), vec![6, 7, 8, 9, 10]);
        assert!(w.shows_first());
        assert!(w.leading_ellipsis());
        assert!(!w.shows_last());
        assert!(!w.trailing_ellipsis());
        assert!(w.prev_enabled());
        assert!(!w.next_enabled());
    }

    #[test]
    fn middle_window_is_centered() {
        let w = PageWindow::compute(5, 10);
        assert_eq!(pages(&w), vec![3, 4, 5, 6, 7]);
        assert!(w.shows_first() && w.leading_ellipsis());
        assert!(w.shows_last() && w.trailing_ellipsis());
    }

    #[test]
    fn gap_of_one_shows_edge_without_ellipsis() {
        let w = PageWindow::compute(4, 10);
        assert_eq!(pages(&w), vec![2, 3, 4, 5, 6]);
        assert!(w.shows_first());
        assert!(!w.leading_ellipsis());

        let w = PageWindow::compute(7, 10);
        assert_eq!(pages(&w), vec![5, 6, 7, 8, 9]);
        assert!(w.shows_last());
        assert!(!w.trailing_ellipsis());
    }

    #[test]
    fn few_pages_fit_entirely() {
        for current in 1..=3 {
            let w = PageWindow::compute(current, 3);
            assert_eq!(pages(&w), vec![1, 2, 3]);
            assert!(!w.shows_first() && !w.shows_last());
            assert_eq!(w.next_enabled(), current < 3);
            assert_eq!(w.prev_enabled(), current > 1);
        }
    }

    #[test]
    fn single_page() {
        let w = PageWindow::compute(1, 1);
        assert_eq!(pages(&w), vec![1]);
        assert!(!w.prev_enabled() && !w.next_enabled());
    }

    #[test]
    fn page_math() {
        assert_eq!(total_pages(0, 50), 0);
        assert_eq!(total_pages(50, 50), 1);
        assert_eq!(total_pages(51, 50), 2);
        assert_eq!(page_bounds(2, 50, 120), (50, 100));
        assert_eq!(page_bounds(3, 50, 120), (100, 120));
        assert_eq!(page_bounds(4, 50, 120), (120, 120));
    }
}
