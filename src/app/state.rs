//! Page state: the single source of truth the event handler mutates.
//!
//! [`Page`] aggregates everything a data page shows: the embedded table
//! view, the card overlay's table view, the card collection, the latest
//! global search results and the active colour mode.
//!
//! # State Components
//!
//! - **Main view**: table view over the page's own dataset
//! - **Modal view**: table view over the card chosen last
//! - **Cards**: card collection handed over by the page
//! - **Search results**: matches of the last global search, if one ran
//! - **Colour mode**: light or dark, plus the palettes of both
//!
//! # Example
//!
//! ```
//! use databook_viewer::app::Page;
//! use databook_viewer::{Card, Config, Dataset};
//!
//! let dataset = Dataset::from_json(r#"[{"Name": "Water"}]"#)?;
//! let page = Page::new(dataset, Vec::new(), &Config::default())?;
//! assert_eq!(page.main.filtered_len(), 1);
//! assert!(!page.modal.is_open());
//! # Ok::<(), databook_viewer::ViewerError>(())
//! ```

use super::modal::ModalTableView;
use super::search::SearchMatch;
use super::table_view::{TableView, ViewKind};
use crate::domain::{Card, Dataset, Result};
use crate::ui::surface::{PageAnchors, ViewAnchors};
use crate::ui::theme::{ColorMode, Themes};
use crate::Config;

/// Everything one data page shows.
#[derive(Debug, Clone)]
pub struct Page {
    /// Table view over the page's own dataset.
    pub main: TableView,

    /// Table view inside the card overlay.
    pub modal: ModalTableView,

    /// Card collection, in the order the page handed it over.
    pub cards: Vec<Card>,

    /// Matches of the last global search. `None` until a search runs.
    pub search_results: Option<Vec<SearchMatch>>,

    /// Active colour mode.
    pub color_mode: ColorMode,

    /// Palettes for both colour modes.
    pub themes: Themes,

    /// Page-level element ids.
    pub anchors: PageAnchors,
}

impl Page {
    /// Creates a page over `dataset` and `cards`.
    ///
    /// The colour mode starts at the configured default; the runtime replaces
    /// it with the stored preference, if any. A configured theme file that
    /// fails to load is logged and the built-in palettes are used instead.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Theme`](crate::ViewerError::Theme) if the
    /// built-in palettes fail to parse.
    pub fn new(dataset: Dataset, cards: Vec<Card>, config: &Config) -> Result<Self> {
        let themes = match &config.theme_file {
            Some(path) => Themes::from_file(path).or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "custom theme failed to load, using built-in");
                Themes::builtin()
            })?,
            None => Themes::builtin()?,
        };

        let rows = config.rows_per_page;
        Ok(Self {
            main: TableView::with_anchors(ViewKind::Main, ViewAnchors::for_kind(ViewKind::Main), dataset, rows),
            modal: ModalTableView::new(rows),
            cards,
            search_results: None,
            color_mode: config.default_theme,
            themes,
            anchors: PageAnchors::default(),
        })
    }

    /// The table view driven by `kind`.
    #[must_use]
    pub const fn view(&self, kind: ViewKind) -> &TableView {
        match kind {
            ViewKind::Main => &self.main,
            ViewKind::Modal => &self.modal.table,
        }
    }

    pub fn view_mut(&mut self, kind: ViewKind) -> &mut TableView {
        match kind {
            ViewKind::Main => &mut self.main,
            ViewKind::Modal => &mut self.modal.table,
        }
    }

    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;

    #[test]
    fn views_are_independent() {
        let dataset = Dataset::new(vec![Record::from_pairs([("Name", "Water")])]);
        let mut page = Page::new(dataset, Vec::new(), &Config::default()).unwrap();

        page.view_mut(ViewKind::Main).set_search_term("wat");
        assert_eq!(page.view(ViewKind::Main).search_term(), "wat");
        assert_eq!(page.view(ViewKind::Modal).search_term(), "");
        assert_eq!(page.view(ViewKind::Modal).kind(), ViewKind::Modal);
    }

    #[test]
    fn config_sets_page_size_and_mode() {
        let config = Config {
            rows_per_page: 10,
            default_theme: ColorMode::Dark,
            ..Config::default()
        };
        let page = Page::new(Dataset::default(), Vec::new(), &config).unwrap();
        assert_eq!(page.main.rows_per_page(), 10);
        assert_eq!(page.modal.table.rows_per_page(), 10);
        assert_eq!(page.color_mode, ColorMode::Dark);
    }

    #[test]
    fn broken_theme_file_falls_back_to_builtin() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".into()),
            ..Config::default()
        };
        let page = Page::new(Dataset::default(), Vec::new(), &config).unwrap();
        assert_eq!(page.themes, Themes::builtin().unwrap());
    }
}
