//! Pagination component renderer.
//!
//! Renders the page-number list laid out by
//! [`PageWindow`](crate::app::pagination::PageWindow) followed by the
//! `Showing A to B of N entries` summary line.

use crate::ui::viewmodel::PaginationInfo;
use std::fmt::Write;

/// Renders the pagination widget, or an empty string when there is nothing
/// to paginate.
#[must_use]
pub fn render_pagination(info: Option<&PaginationInfo>) -> String {
    let Some(info) = info else {
        return String::new();
    };
    let window = &info.window;

    let mut html = String::from(
        r#"<nav aria-label="Table navigation"><ul class="pagination justify-content-center">"#,
    );

    html.push_str(&edge_control("prev", "Previous", "&laquo;", !window.prev_enabled()));

    if window.shows_first() {
        html.push_str(&page_item(1, false));
        if window.leading_ellipsis() {
            html.push_str(ELLIPSIS_ITEM);
        }
    }

    for page in window.pages() {
        html.push_str(&page_item(page, page == window.current));
    }

    if window.shows_last() {
        if window.trailing_ellipsis() {
            html.push_str(ELLIPSIS_ITEM);
        }
        html.push_str(&page_item(window.total, false));
    }

    html.push_str(&edge_control("next", "Next", "&raquo;", !window.next_enabled()));
    html.push_str("</ul></nav>");

    let _ = write!(
        html,
        r#"<div class="text-center text-muted">Showing {} to {} of {} entries</div>"#,
        info.first_shown, info.last_shown, info.total_entries
    );
    html
}

const ELLIPSIS_ITEM: &str =
    r##"<li class="page-item disabled"><a class="page-link" href="#">...</a></li>"##;

fn page_item(page: usize, active: bool) -> String {
    let class = if active { "page-item active" } else { "page-item" };
    format!(
        r##"<li class="{class}"><a class="page-link" href="#" data-action="goto" data-page="{page}">{page}</a></li>"##
    )
}

fn edge_control(action: &str, label: &str, symbol: &str, disabled: bool) -> String {
    let class = if disabled { "page-item disabled" } else { "page-item" };
    format!(
        r##"<li class="{class}"><a class="page-link" href="#" data-action="{action}" aria-label="{label}"><span aria-hidden="true">{symbol}</span></a></li>"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pagination::PageWindow;

    fn info(current: usize, total: usize) -> PaginationInfo {
        PaginationInfo {
            window: PageWindow::compute(current, total),
            first_shown: (current - 1) * 50 + 1,
            last_shown: current * 50,
            total_entries: total * 50,
        }
    }

    fn ellipses(html: &str) -> usize {
        html.matches(">...<").count()
    }

    #[test]
    fn nothing_to_paginate_renders_nothing() {
        assert_eq!(render_pagination(None), "");
    }

    #[test]
    fn first_of_ten_has_trailing_last_page() {
        let html = render_pagination(Some(&info(1, 10)));
        assert!(!html.contains(r#"data-page="6""#));
        assert_eq!(ellipses(&html), 1);
        assert!(html.contains(r##"<li class="page-item disabled"><a class="page-link" href="#" data-action="prev""##));
        assert!(html.contains(r##"<li class="page-item active"><a class="page-link" href="#" data-action="goto" data-page="1">1</a></li>"##));
        assert!(html.contains(r#"data-page="10">10</a>"#));
        assert!(html.find(">...<").unwrap() < html.find(r#"data-page="10""#).unwrap());
    }

    #[test]
    fn last_of_ten_has_leading_first_page() {
        let html = render_pagination(Some(&info(10, 10)));
        assert!(!html.contains(r#"data-page="5""#));
        assert_eq!(ellipses(&html), 1);
        assert!(html.contains(r##"<li class="page-item disabled"><a class="page-link" href="#" data-action="next""##));
        assert!(html.find(r#"data-page="1">"#).unwrap() < html.find(">...<").unwrap());
    }

    #[test]
    fn three_pages_have_no_ellipsis() {
        let html = render_pagination(Some(&info(2, 3)));
        assert_eq!(ellipses(&html), 0);
        assert!(!html.contains("page-item disabled"));

        let last = render_pagination(Some(&info(3, 3)));
        assert!(last.contains(r##"<li class="page-item disabled"><a class="page-link" href="#" data-action="next""##));
    }

    #[test]
    fn summary_line() {
        let html = render_pagination(Some(&PaginationInfo {
            window: PageWindow::compute(3, 3),
            first_shown: 101,
            last_shown: 120,
            total_entries: 120,
        }));
        assert!(html.ends_with(r#"<div class="text-center text-muted">Showing 101 to 120 of 120 entries</div>"#));
    }
}
