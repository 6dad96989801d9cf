//! Table view controller: search, pagination and single-row selection.
//!
//! [`TableView`] owns one table's [`Dataset`] and the state derived from it:
//! the filtered view, the current page and the selection. Every operation is
//! a plain state transition; turning the state into markup happens in
//! [`TableView::compute_viewmodel`] and the `ui` layer.
//!
//! The filtered view stores dataset positions, and the selection is keyed by
//! dataset position too. Both stay valid across re-renders, re-filtering and
//! paging because the dataset itself never changes while a view holds it.
//!
//! # Example
//!
//! ```
//! use databook_viewer::app::{TableView, ViewKind};
//! use databook_viewer::{Dataset, Record};
//!
//! let dataset = Dataset::new(vec![
//!     Record::from_pairs([("Name", "Water"), ("Formula", "H2O")]),
//!     Record::from_pairs([("Name", "Ethanol"), ("Formula", "C2H5OH")]),
//! ]);
//! let mut view = TableView::new(ViewKind::Main, dataset);
//!
//! view.set_search_term("eth");
//! assert_eq!(view.filtered_len(), 1);
//! assert!(view.select_row(0));
//! assert_eq!(view.selected_record().unwrap().cell_text("Name"), "Ethanol");
//! ```

use super::pagination::{self, PageWindow, DEFAULT_ROWS_PER_PAGE};
use crate::domain::{Dataset, Record};
use crate::ui::helpers::capitalize;
use crate::ui::surface::ViewAnchors;
use crate::ui::viewmodel::{PaginationInfo, PreviewField, RowItem, TableViewModel};

/// Which of the page's table views a controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// The table embedded in the page.
    Main,
    /// The table inside the card overlay.
    Modal,
}

/// State of one paginated, searchable table.
#[derive(Debug, Clone)]
pub struct TableView {
    kind: ViewKind,

    /// Element ids this view renders into.
    pub anchors: ViewAnchors,

    dataset: Dataset,

    /// Dataset positions of the records matching `search_term`, in dataset
    /// order.
    filtered: Vec<usize>,

    /// Lower-cased active search term.
    search_term: String,

    /// Current page, 1-based.
    page: usize,

    rows_per_page: usize,

    /// Dataset position of the selected record.
    selection: Option<usize>,
}

impl TableView {
    /// Creates a view over `dataset` with default anchors and page size.
    #[must_use]
    pub fn new(kind: ViewKind, dataset: Dataset) -> Self {
        Self::with_anchors(kind, ViewAnchors::for_kind(kind), dataset, DEFAULT_ROWS_PER_PAGE)
    }

    /// Creates a view with explicit render anchors and page size.
    #[must_use]
    pub fn with_anchors(
        kind: ViewKind,
        anchors: ViewAnchors,
        dataset: Dataset,
        rows_per_page: usize,
    ) -> Self {
        let filtered = (0..dataset.len()).collect();
        Self {
            kind,
            anchors,
            dataset,
            filtered,
            search_term: String::new(),
            page: 1,
            rows_per_page: rows_per_page.max(1),
            selection: None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ViewKind {
        self.kind
    }

    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Records of the filtered view, in order.
    pub fn filtered_records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.filtered.iter().filter_map(|&i| self.dataset.get(i))
    }

    /// `ceil(filtered_len / rows_per_page)`; zero when nothing matches.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered.len(), self.rows_per_page)
    }

    /// Applies a new search term and returns to the first page.
    ///
    /// The term is lower-cased. An empty term restores the full dataset in
    /// its original order; otherwise only records with a field whose string
    /// form contains the term are kept.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_lowercase();
        self.apply_search_filter();
        self.page = 1;
    }

    fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!("apply_search_filter",
            view = ?self.kind,
            total_records = self.dataset.len(),
            term_len = self.search_term.len()
        )
        .entered();

        if self.search_term.is_empty() {
            self.filtered = (0..self.dataset.len()).collect();
        } else {
            let term = self.search_term.as_str();
            self.filtered = self
                .dataset
                .iter()
                .enumerate()
                .filter(|(_, record)| record.matches(term))
                .map(|(i, _)| i)
                .collect();
        }

        tracing::debug!(filtered_count = self.filtered.len(), "search filter applied");
    }

    /// Moves to page `n` if it exists and differs from the current page.
    ///
    /// Returns `true` when the page changed and the view needs a re-render.
    /// Out-of-range requests are ignored, not clamped.
    pub fn go_to_page(&mut self, n: usize) -> bool {
        let total = self.total_pages();
        if n < 1 || n > total || n == self.page {
            tracing::debug!(requested = n, current = self.page, total, "page request ignored");
            return false;
        }
        self.page = n;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.go_to_page(self.page - 1)
    }

    /// Filtered-view range `[start, end)` shown on the current page.
    #[must_use]
    pub fn page_range(&self) -> (usize, usize) {
        pagination::page_bounds(self.page, self.rows_per_page, self.filtered.len())
    }

    /// Selects the row at `global_index` (position in the filtered view).
    ///
    /// Only rows on the current page can be selected; anything else is
    /// ignored and returns `false`.
    pub fn select_row(&mut self, global_index: usize) -> bool {
        let (start, end) = self.page_range();
        if global_index < start || global_index >= end {
            tracing::debug!(global_index, start, end, "row selection outside current page ignored");
            return false;
        }

        let Some(&dataset_index) = self.filtered.get(global_index) else {
            return false;
        };

        if let Some(previous) = self.selection.replace(dataset_index) {
            tracing::debug!(previous, dataset_index, "selection moved");
        } else {
            tracing::debug!(dataset_index, "row selected");
        }
        true
    }

    /// The selected record, if any.
    ///
    /// The selection outlives paging and filtering: it is only dropped by
    /// [`reset`](Self::reset) or by replacing the dataset.
    #[must_use]
    pub fn selected_record(&self) -> Option<&Record> {
        self.selection.and_then(|i| self.dataset.get(i))
    }

    #[must_use]
    pub const fn selected_dataset_index(&self) -> Option<usize> {
        self.selection
    }

    /// The record to hand to the selection sink, or `None` when nothing is
    /// selected.
    #[must_use]
    pub fn commit_selection(&self) -> Option<&Record> {
        let record = self.selected_record();
        if record.is_none() {
            tracing::debug!(view = ?self.kind, "commit without selection ignored");
        }
        record
    }

    /// Whether the commit control(s) are enabled.
    #[must_use]
    pub const fn commit_enabled(&self) -> bool {
        self.selection.is_some()
    }

    /// Clears search, selection and paging, restoring the full dataset.
    pub fn reset(&mut self) {
        self.search_term.clear();
        self.apply_search_filter();
        self.page = 1;
        self.selection = None;
    }

    /// Swaps in a new dataset and resets all derived state.
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.reset();
    }

    /// Computes a renderable view model of the current page.
    ///
    /// Returns an empty-state model (no columns, no rows, no pagination) when
    /// the current page has nothing to show.
    #[must_use]
    pub fn compute_viewmodel(&self) -> TableViewModel {
        let (start, end) = self.page_range();
        let preview = self.compute_preview();
        let commit_enabled = self.commit_enabled();

        let Some(first) = self.filtered.first().and_then(|&i| self.dataset.get(i)) else {
            return TableViewModel::empty(preview, commit_enabled);
        };
        if start == end {
            return TableViewModel::empty(preview, commit_enabled);
        }

        let keys: Vec<&str> = first.keys().collect();
        let columns = keys.iter().map(|k| capitalize(k)).collect();

        let rows = self.filtered[start..end]
            .iter()
            .enumerate()
            .filter_map(|(offset, &dataset_index)| {
                let record = self.dataset.get(dataset_index)?;
                Some(RowItem {
                    global_index: start + offset,
                    cells: keys.iter().map(|k| record.cell_text(k)).collect(),
                    is_selected: self.selection == Some(dataset_index),
                })
            })
            .collect();

        let pagination = PaginationInfo {
            window: PageWindow::compute(self.page, self.total_pages()),
            first_shown: start + 1,
            last_shown: end,
            total_entries: self.filtered.len(),
        };

        TableViewModel {
            columns,
            rows,
            pagination: Some(pagination),
            preview,
            commit_enabled,
        }
    }

    fn compute_preview(&self) -> Option<Vec<PreviewField>> {
        self.selected_record().map(|record| {
            record
                .fields()
                .map(|(key, _)| PreviewField {
                    label: capitalize(key),
                    value: record.cell_text(key),
                })
                .collect()
        })
    }
}
