//! Top-level rendering coordinator.
//!
//! Rendering is a pure projection of [`Page`] state onto a [`Surface`]: every
//! call rebuilds the markup of every projection from scratch. Each projection
//! (theme, main table, card grid, card overlay, search results) first checks
//! the anchors it needs:
//!
//! - all present: the projection is written
//! - all absent: the page does not host that projection; skipped silently
//! - some absent: the page is broken; a warning is logged and nothing of
//!   that projection is written
//!
//! # Example
//!
//! ```
//! use databook_viewer::app::Page;
//! use databook_viewer::ui::{render_page, MarkupDocument};
//! use databook_viewer::{Config, Dataset};
//!
//! let page = Page::new(Dataset::from_json(r#"[{"Name": "Water"}]"#)?, Vec::new(), &Config::default())?;
//! let mut doc = MarkupDocument::standard_page();
//! render_page(&page, &mut doc)?;
//! assert!(doc.inner_html("dataTable").unwrap().contains("<td>Water</td>"));
//! # Ok::<(), databook_viewer::ViewerError>(())
//! ```

use crate::app::{Page, TableView};
use crate::domain::Result;
use crate::ui::components;
use crate::ui::helpers::html_escape;
use crate::ui::surface::Surface;

/// Outcome of the anchor check of one projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchors {
    Present,
    Absent,
    Incomplete,
}

fn check_anchors<S: Surface + ?Sized>(surface: &S, projection: &str, ids: &[&str]) -> Anchors {
    let present = ids.iter().filter(|id| surface.has_anchor(id)).count();
    if present == ids.len() {
        Anchors::Present
    } else if present == 0 {
        tracing::trace!(projection, "projection not hosted by page");
        Anchors::Absent
    } else {
        let missing = surface.first_missing(ids).unwrap_or_default();
        tracing::warn!(projection, missing, "render anchor missing, skipping render");
        Anchors::Incomplete
    }
}

/// Renders every projection of `page` onto `surface`.
///
/// # Errors
///
/// Returns an error if the surface rejects a write after its anchors were
/// checked.
pub fn render_page<S: Surface + ?Sized>(page: &Page, surface: &mut S) -> Result<()> {
    let _span = tracing::debug_span!("render_page").entered();

    render_theme(page, surface)?;
    render_table_view(&page.main, surface)?;
    render_card_grid(page, surface)?;
    render_modal(page, surface)?;
    render_search_results(page, surface)?;
    Ok(())
}

/// Writes one table view: table markup, pagination, preview and the state of
/// its commit controls.
///
/// The pagination anchor is optional; without one the table renders without
/// page controls.
///
/// # Errors
///
/// Returns an error if the surface rejects a write.
pub fn render_table_view<S: Surface + ?Sized>(view: &TableView, surface: &mut S) -> Result<()> {
    let anchors = &view.anchors;
    if check_anchors(surface, "table_view", &anchors.required()) != Anchors::Present {
        return Ok(());
    }

    let _span = tracing::debug_span!("render_table_view", view = ?view.kind()).entered();
    let vm = view.compute_viewmodel();

    surface.set_inner_html(&anchors.table, &components::render_table(&vm, &anchors.radio_name))?;
    if surface.has_anchor(&anchors.pagination) {
        surface.set_inner_html(&anchors.pagination, &components::render_pagination(vm.pagination.as_ref()))?;
    }
    surface.set_inner_html(&anchors.preview, &components::render_preview(vm.preview.as_deref()))?;
    for button in &anchors.commit_buttons {
        surface.set_disabled(button, !vm.commit_enabled)?;
    }

    tracing::debug!(row_count = vm.rows.len(), commit_enabled = vm.commit_enabled, "table view rendered");
    Ok(())
}

fn render_theme<S: Surface + ?Sized>(page: &Page, surface: &mut S) -> Result<()> {
    let anchors = &page.anchors;
    if check_anchors(surface, "theme", &[anchors.body.as_str(), anchors.theme_toggle.as_str()]) != Anchors::Present {
        return Ok(());
    }

    let mode = page.color_mode;
    surface.set_attribute(&anchors.body, "data-bs-theme", mode.as_str())?;
    surface.set_attribute(&anchors.body, "style", &page.themes.for_mode(mode).css_variables())?;
    surface.set_inner_html(&anchors.theme_toggle, mode.toggle_label())?;
    Ok(())
}

fn render_card_grid<S: Surface + ?Sized>(page: &Page, surface: &mut S) -> Result<()> {
    let anchor = page.anchors.card_section.as_str();
    if check_anchors(surface, "card_grid", &[anchor]) != Anchors::Present {
        return Ok(());
    }
    surface.set_inner_html(anchor, &components::render_cards(&page.cards))
}

fn render_modal<S: Surface + ?Sized>(page: &Page, surface: &mut S) -> Result<()> {
    let title = page.anchors.modal_title.as_str();
    let mut ids = vec![title];
    ids.extend(page.modal.table.anchors.required());
    if check_anchors(surface, "card_table", &ids) != Anchors::Present {
        return Ok(());
    }

    surface.set_inner_html(title, &html_escape(page.modal.title()))?;
    render_table_view(&page.modal.table, surface)
}

fn render_search_results<S: Surface + ?Sized>(page: &Page, surface: &mut S) -> Result<()> {
    let Some(matches) = &page.search_results else {
        return Ok(());
    };
    let anchor = page.anchors.search_results.as_str();
    if check_anchors(surface, "search_results", &[anchor]) != Anchors::Present {
        return Ok(());
    }
    surface.set_inner_html(anchor, &components::render_search_results(matches))
}

/// Writes the calendar year into the footer anchor, if the page has one.
///
/// # Errors
///
/// Returns an error if the surface rejects the write.
pub fn render_footer_year<S: Surface + ?Sized>(page: &Page, surface: &mut S, year: i32) -> Result<()> {
    let anchor = page.anchors.current_year.as_str();
    if check_anchors(surface, "footer_year", &[anchor]) != Anchors::Present {
        return Ok(());
    }
    surface.set_inner_html(anchor, &year.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dataset, Record};
    use crate::ui::surface::MarkupDocument;
    use crate::Config;

    fn page() -> Page {
        let dataset = Dataset::new(vec![
            Record::from_pairs([("Name", "Water"), ("Formula", "H2O")]),
            Record::from_pairs([("Name", "Ethanol"), ("Formula", "C2H5OH")]),
        ]);
        Page::new(dataset, Vec::new(), &Config::default()).unwrap()
    }

    #[test]
    fn full_page_render() {
        let mut page = page();
        page.main.select_row(0);
        let mut doc = MarkupDocument::standard_page();
        render_page(&page, &mut doc).unwrap();

        let table = doc.inner_html("dataTable").unwrap();
        assert!(table.contains("<th>Select</th><th>Name</th><th>Formula</th>"));
        assert!(table.contains(r#"data-index="0" class="selected-row""#));
        assert!(doc.inner_html("paginationControls").unwrap().contains("Showing 1 to 2 of 2 entries"));
        assert!(doc.inner_html("selectedData").unwrap().contains("Water"));
        assert_eq!(doc.is_disabled("selectButton"), Some(false));
        assert_eq!(doc.attribute("body", "data-bs-theme"), Some("light"));
        assert!(doc.inner_html("darkModeToggle").unwrap().ends_with("Dark Mode"));
    }

    #[test]
    fn empty_filter_renders_placeholder_and_clears_pagination() {
        let mut page = page();
        let mut doc = MarkupDocument::standard_page();
        render_page(&page, &mut doc).unwrap();

        page.main.set_search_term("argon");
        render_page(&page, &mut doc).unwrap();
        assert!(doc.inner_html("dataTable").unwrap().contains("No data available"));
        assert_eq!(doc.inner_html("paginationControls"), Some(""));
        assert_eq!(doc.inner_html("selectedData"), Some("<p>No data selected</p>"));
        assert_eq!(doc.is_disabled("selectButton"), Some(true));
    }

    #[test]
    fn incomplete_anchors_abort_without_partial_writes() {
        let page = page();
        let mut doc = MarkupDocument::with_anchors(["dataTable", "paginationControls"]);
        render_table_view(&page.main, &mut doc).unwrap();

        assert_eq!(doc.inner_html("dataTable"), Some(""));
        assert_eq!(doc.inner_html("paginationControls"), Some(""));
    }

    #[test]
    fn pagination_anchor_is_optional() {
        let page = page();
        let mut doc = MarkupDocument::with_anchors(["dataTable", "selectedData", "selectButton"]);
        render_table_view(&page.main, &mut doc).unwrap();
        assert!(doc.inner_html("dataTable").unwrap().contains("Ethanol"));
    }

    #[test]
    fn footer_year() {
        let page = page();
        let mut doc = MarkupDocument::standard_page();
        render_footer_year(&page, &mut doc, 2026).unwrap();
        assert_eq!(doc.inner_html("currentYear"), Some("2026"));
    }
}
